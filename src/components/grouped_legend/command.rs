//! Visibility commands issued by legend clicks.
//!
//! What a click should do is decided when the legend is built and stored as a
//! [`LegendCommand`]. The DOM layer only carries the command on the element
//! (as `data-legend-*` attributes) and hands it back to [`LegendCommand::apply`]
//! when the element is clicked.

use log::debug;

use super::host::ChartHost;

/// Command kind on a clickable legend element.
pub const ATTR_COMMAND: &str = "data-legend-command";
/// Dataset index of a toggle command.
pub const ATTR_INDEX: &str = "data-legend-index";
/// First dataset of a group command.
pub const ATTR_OFFSET: &str = "data-legend-offset";
/// Dataset count of a group command.
pub const ATTR_COUNT: &str = "data-legend-count";
/// Target visibility of a group command.
pub const ATTR_VISIBLE: &str = "data-legend-visible";

const TOGGLE_DATASET: &str = "toggle-dataset";
const SET_GROUP_VISIBILITY: &str = "set-group-visibility";

/// What a click on a legend element does to the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendCommand {
	/// Flip one dataset to the negation of its own current visibility.
	ToggleDataset {
		/// Global dataset index.
		index: usize,
	},
	/// Set `count` datasets starting at `offset` to `visible`.
	SetGroupVisibility {
		/// Global index of the group's first dataset.
		offset: usize,
		/// Number of datasets in the group.
		count: usize,
		/// Visibility every member is set to.
		visible: bool,
	},
}

impl LegendCommand {
	/// Command for a click on a group name.
	///
	/// Every member is set to the group's aggregate hidden flag as rendered:
	/// a hidden group becomes fully visible, any other group becomes fully
	/// hidden, regardless of each member's own state at click time.
	pub fn for_group(offset: usize, count: usize, group_hidden: bool) -> Self {
		LegendCommand::SetGroupVisibility {
			offset,
			count,
			visible: group_hidden,
		}
	}

	/// Applies the visibility change and redraws the host.
	pub fn apply<H: ChartHost + ?Sized>(&self, host: &mut H) {
		debug!("grouped-legend: applying {:?}", self);
		match *self {
			LegendCommand::ToggleDataset { index } => {
				let visible = host.is_dataset_visible(index);
				host.set_dataset_visibility(index, !visible);
			}
			LegendCommand::SetGroupVisibility {
				offset,
				count,
				visible,
			} => {
				for index in offset..offset + count {
					host.set_dataset_visibility(index, visible);
				}
			}
		}
		host.update();
	}

	/// `data-*` attributes encoding this command on a legend element.
	pub fn attributes(&self) -> Vec<(&'static str, String)> {
		match *self {
			LegendCommand::ToggleDataset { index } => vec![
				(ATTR_COMMAND, TOGGLE_DATASET.into()),
				(ATTR_INDEX, index.to_string()),
			],
			LegendCommand::SetGroupVisibility {
				offset,
				count,
				visible,
			} => vec![
				(ATTR_COMMAND, SET_GROUP_VISIBILITY.into()),
				(ATTR_OFFSET, offset.to_string()),
				(ATTR_COUNT, count.to_string()),
				(ATTR_VISIBLE, visible.to_string()),
			],
		}
	}

	/// Decodes a command from attribute lookups; `None` for anything malformed.
	pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
		let number = |name: &str| lookup(name)?.parse::<usize>().ok();
		match lookup(ATTR_COMMAND)?.as_str() {
			TOGGLE_DATASET => Some(LegendCommand::ToggleDataset {
				index: number(ATTR_INDEX)?,
			}),
			SET_GROUP_VISIBILITY => Some(LegendCommand::SetGroupVisibility {
				offset: number(ATTR_OFFSET)?,
				count: number(ATTR_COUNT)?,
				visible: lookup(ATTR_VISIBLE)?.parse::<bool>().ok()?,
			}),
			_ => None,
		}
	}
}
