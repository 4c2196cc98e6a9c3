//! Grouped legend model: offsets, hidden state, and marker shape.
//!
//! [`LegendModel::build`] derives everything the legend shows from the current
//! options and the host's visibility flags, without touching the DOM. The DOM
//! layer renders the model as is.

use log::{debug, warn};

use super::command::LegendCommand;
use super::error::{LegendError, Result};
use super::host::ChartHost;
use super::theme::NativeLegendOptions;
use super::types::{DatasetGroup, GroupedLegendOptions};

/// Shape of the color marker in front of every legend entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarkerShape {
	/// Wide color box.
	#[default]
	Rect,
	/// Filled circle.
	Circle,
}

impl MarkerShape {
	/// Picks the marker from the host's native legend settings.
	///
	/// `rect` unless `usePointStyle` is on; then the host's `pointStyle` if it is
	/// `rect` or `circle`, otherwise `circle` (with a warning for any other
	/// explicit style).
	pub fn from_native(native: &NativeLegendOptions) -> Self {
		if !native.use_point_style {
			return MarkerShape::Rect;
		}
		match native.point_style.as_deref() {
			None | Some("circle") => MarkerShape::Circle,
			Some("rect") => MarkerShape::Rect,
			Some(other) => {
				warn!(
					"grouped-legend: point style '{}' is not supported, using 'circle'",
					other
				);
				MarkerShape::Circle
			}
		}
	}
}

/// Global index of `target`'s first dataset: the size of every group before it.
///
/// `target` is matched by identity, so it must be a reference into `groups`.
pub fn find_group_offset(target: &DatasetGroup, groups: &[DatasetGroup]) -> Result<usize> {
	let mut offset = 0;
	for group in groups {
		if std::ptr::eq(group, target) {
			return Ok(offset);
		}
		offset += group.len();
	}
	Err(LegendError::GroupNotFound {
		name: target.name.clone(),
	})
}

/// True when every dataset in `[offset, offset + len)` is hidden.
/// An empty range counts as hidden.
pub fn is_range_hidden<H: ChartHost + ?Sized>(host: &H, offset: usize, len: usize) -> bool {
	(offset..offset + len).all(|index| !host.is_dataset_visible(index))
}

/// One dataset row in a group block.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
	/// Index into the chart's flat dataset list.
	pub index: usize,
	/// Dataset label.
	pub label: String,
	/// Marker fill.
	pub color: String,
	/// Struck through: the dataset is not drawn.
	pub hidden: bool,
	/// Toggles this dataset.
	pub command: LegendCommand,
}

/// A group's name and its entries.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupBlock {
	/// Group heading.
	pub name: String,
	/// Global index of the first entry.
	pub offset: usize,
	/// Struck through: every member is hidden.
	pub hidden: bool,
	/// Shows or hides the whole group.
	pub command: LegendCommand,
	/// One entry per dataset, in order.
	pub entries: Vec<LegendEntry>,
}

/// Everything one legend pass renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegendModel {
	/// Marker shared by every entry.
	pub marker: MarkerShape,
	/// Group blocks in configured order; empty when the legend is off.
	pub groups: Vec<GroupBlock>,
}

impl LegendModel {
	/// Builds the legend for the host's current state.
	///
	/// With `display: false` the model has no groups.
	pub fn build<H: ChartHost + ?Sized>(host: &H, options: &GroupedLegendOptions) -> Result<Self> {
		let marker = MarkerShape::from_native(&host.native_legend());
		if !options.display {
			return Ok(Self {
				marker,
				groups: Vec::new(),
			});
		}

		let groups = &options.groups;
		if options.dataset_count() > host.dataset_count() {
			warn!(
				"grouped-legend: groups list {} datasets but the chart has {}",
				options.dataset_count(),
				host.dataset_count()
			);
		}
		let mut blocks = Vec::with_capacity(groups.len());
		for group in groups {
			let offset = find_group_offset(group, groups)?;
			let hidden = is_range_hidden(host, offset, group.len());

			let entries = group
				.datasets
				.iter()
				.enumerate()
				.map(|(local_index, dataset)| {
					let index = offset + local_index;
					LegendEntry {
						index,
						label: dataset.label_or_default().to_string(),
						color: dataset.marker_color().to_string(),
						hidden: !host.is_dataset_visible(index),
						command: LegendCommand::ToggleDataset { index },
					}
				})
				.collect();

			blocks.push(GroupBlock {
				name: group.name.clone(),
				offset,
				hidden,
				command: LegendCommand::for_group(offset, group.len(), hidden),
				entries,
			});
		}

		debug!(
			"grouped-legend: built {} groups, {} entries",
			blocks.len(),
			blocks.iter().map(|b| b.entries.len()).sum::<usize>()
		);
		Ok(Self {
			marker,
			groups: blocks,
		})
	}
}
