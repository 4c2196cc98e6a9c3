//! Demo line chart hosting the grouped legend.
//!
//! A small canvas chart (no axes library, no animation) that implements
//! [`ChartHost`](crate::components::grouped_legend::ChartHost) so the legend
//! can be exercised without Chart.js.

mod component;
mod render;
mod state;
mod types;

pub use component::GroupedLegendChart;
pub use state::{CanvasChart, sample_data};
pub use types::{ChartData, ChartDataset, DemoConfig};
