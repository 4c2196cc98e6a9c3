//! Input data for the demo line chart.

use serde::Deserialize;

use crate::components::grouped_legend::GroupedLegendOptions;

/// One line series.
#[derive(Clone, Debug, Deserialize)]
pub struct ChartDataset {
	/// Series name shown in the legend.
	pub label: String,
	/// CSS color for the line, its points, and its legend marker.
	pub color: String,
	/// One value per tick label. Missing values end the line early.
	pub values: Vec<f64>,
}

/// Tick labels plus the flat dataset list, in legend group order.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChartData {
	/// One label per x-axis tick.
	pub labels: Vec<String>,
	/// Flat dataset list.
	pub datasets: Vec<ChartDataset>,
}

/// Page-level configuration read from the `legend-config` script element.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DemoConfig {
	/// Options for the grouped legend. Empty `groups` means "use the sample groups".
	pub groupedlegend: GroupedLegendOptions,
	/// Use point-style markers instead of color boxes.
	pub use_point_style: bool,
	/// Point style for markers; `rect` or `circle`.
	pub point_style: Option<String>,
}
