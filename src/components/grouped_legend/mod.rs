//! Grouped chart legend.
//!
//! Renders a legend whose entries are grouped under headings ("Greens",
//! "Blues", ...) instead of one flat list, and keeps it in sync with dataset
//! visibility on the chart:
//! - Clicking an entry toggles that dataset
//! - Clicking a group name shows or hides the whole group
//! - Hidden datasets, and groups whose datasets are all hidden, are struck through
//!
//! The legend is a plugin with two lifecycle calls. [`GroupedLegend::start`]
//! wraps the chart canvas in a legend/canvas layout once;
//! [`GroupedLegend::after_update`] rebuilds the legend after every redraw.
//! Any chart implementing [`CanvasHost`] can host it; [`chartjs`] adapts
//! Chart.js.
//!
//! # Example
//!
//! ```ignore
//! use grouped_legend::{DatasetEntry, DatasetGroup, GroupedLegend, GroupedLegendOptions};
//!
//! let options = GroupedLegendOptions::with_groups(vec![
//!     DatasetGroup::new("Greens", vec![DatasetEntry::new("Serie 1", "green")]),
//!     DatasetGroup::new("Blues", vec![DatasetEntry::new("Serie 1", "blue")]),
//! ]);
//!
//! GroupedLegend.start(&chart, dispatch)?;
//! GroupedLegend.after_update(&chart, UpdateMode::Default, &options)?;
//! ```

pub mod chartjs;
mod command;
mod dom;
mod error;
mod host;
mod layout;
mod legend;
mod plugin;
pub mod styles;
pub mod theme;
mod types;

pub use command::LegendCommand;
pub use error::{LegendError, Result};
pub use host::{CanvasHost, ChartHost, UpdateMode};
pub use layout::{LayoutRegions, LayoutStyles};
pub use legend::{
	GroupBlock, LegendEntry, LegendModel, MarkerShape, find_group_offset, is_range_hidden,
};
pub use plugin::{GroupedLegend, PLUGIN_ID};
pub use theme::{FontSpec, LegendTheme, LineHeight, NativeLegendOptions};
pub use types::{DatasetEntry, DatasetGroup, GroupedLegendOptions, LegendPosition};
