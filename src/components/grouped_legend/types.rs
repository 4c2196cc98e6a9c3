//! Legend configuration: groups of datasets and the plugin options that carry them.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Fill used for a legend marker when a dataset has no background color.
pub const DEFAULT_MARKER_COLOR: &str = "#FFFFFF";

/// A single dataset as seen by the legend.
///
/// Only the display attributes are read; storage and visibility stay with the chart.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatasetEntry {
	/// Display label. Missing labels render as an empty string.
	#[serde(default)]
	pub label: Option<String>,
	/// CSS color used to fill the legend marker.
	/// Arrays are joined with `,` the way a JS array stringifies.
	#[serde(default, deserialize_with = "deserialize_color")]
	pub background_color: Option<String>,
}

impl DatasetEntry {
	/// Entry with both a label and a color.
	pub fn new(label: impl Into<String>, background_color: impl Into<String>) -> Self {
		Self {
			label: Some(label.into()),
			background_color: Some(background_color.into()),
		}
	}

	/// Label, or empty when unset.
	pub fn label_or_default(&self) -> &str {
		self.label.as_deref().unwrap_or("")
	}

	/// Marker fill, or [`DEFAULT_MARKER_COLOR`] when unset.
	pub fn marker_color(&self) -> &str {
		self.background_color
			.as_deref()
			.unwrap_or(DEFAULT_MARKER_COLOR)
	}
}

/// A named, ordered bucket of datasets.
///
/// Groups must list their datasets in the same order as the chart's flat
/// dataset list, contiguously, so that a group's position can be derived from
/// the sizes of the groups before it.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DatasetGroup {
	/// Heading shown above the group's entries.
	pub name: String,
	/// Member datasets, in chart order.
	#[serde(default)]
	pub datasets: Vec<DatasetEntry>,
}

impl DatasetGroup {
	/// Group named `name` over `datasets`.
	pub fn new(name: impl Into<String>, datasets: Vec<DatasetEntry>) -> Self {
		Self {
			name: name.into(),
			datasets,
		}
	}

	/// Number of member datasets.
	pub fn len(&self) -> usize {
		self.datasets.len()
	}

	/// True for a group without datasets.
	pub fn is_empty(&self) -> bool {
		self.datasets.is_empty()
	}
}

/// Where the legend region sits relative to the canvas region.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
	/// Above the canvas.
	#[default]
	Top,
	/// Below the canvas.
	Bottom,
	/// Left of the canvas.
	Left,
	/// Right of the canvas.
	Right,
}

impl LegendPosition {
	/// Top and bottom legends lay their groups out in a row.
	pub fn is_horizontal(self) -> bool {
		matches!(self, LegendPosition::Top | LegendPosition::Bottom)
	}

	/// Parses a lowercase position name.
	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"top" => Some(LegendPosition::Top),
			"bottom" => Some(LegendPosition::Bottom),
			"left" => Some(LegendPosition::Left),
			"right" => Some(LegendPosition::Right),
			_ => None,
		}
	}
}

/// Options for the `groupedlegend` plugin namespace.
///
/// Built fresh for every update pass and never retained past it.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GroupedLegendOptions {
	/// Render the legend at all. Default `true`.
	pub display: bool,
	/// Side of the canvas the legend sits on. Default `top`.
	pub position: LegendPosition,
	/// Groups in the same order as the chart's datasets.
	pub groups: Vec<DatasetGroup>,
}

impl Default for GroupedLegendOptions {
	fn default() -> Self {
		Self {
			display: true,
			position: LegendPosition::default(),
			groups: Vec::new(),
		}
	}
}

impl GroupedLegendOptions {
	/// Default options over `groups`.
	pub fn with_groups(groups: Vec<DatasetGroup>) -> Self {
		Self {
			groups,
			..Self::default()
		}
	}

	/// Total number of datasets referenced by all groups.
	pub fn dataset_count(&self) -> usize {
		self.groups.iter().map(DatasetGroup::len).sum()
	}
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Option::<Value>::deserialize(deserializer)?;
	Ok(value.and_then(|v| color_from_value(&v)))
}

/// Converts a JSON color value to its CSS string, mirroring JS `toString`.
pub(crate) fn color_from_value(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(s) => Some(s.clone()),
		Value::Array(items) => Some(
			items
				.iter()
				.map(|item| match item {
					Value::String(s) => s.clone(),
					Value::Null => String::new(),
					other => other.to_string(),
				})
				.collect::<Vec<_>>()
				.join(","),
		),
		other => Some(other.to_string()),
	}
}
