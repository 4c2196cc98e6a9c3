//! Canvas line chart that hosts the grouped legend.
//!
//! Owns the dataset list and visibility flags, draws itself on every
//! [`ChartHost::update`], and runs the legend's post-update pass right after.

use log::error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::render;
use super::types::{ChartData, ChartDataset};
use crate::components::grouped_legend::theme::SeriesPalette;
use crate::components::grouped_legend::{
	CanvasHost, ChartHost, DatasetEntry, DatasetGroup, GroupedLegend, GroupedLegendOptions,
	LegendError, NativeLegendOptions, Result, UpdateMode,
};

const TICK_LABELS: &[&str] = &["Tick label 1", "Tick label 2", "Tick label 3"];
const SERIES_LABELS: &[&str] = &["Serie 1", "Serie 2", "Serie 3"];

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

/// Sample data: a "Greens" and a "Blues" group of three series each.
pub fn sample_data() -> (ChartData, Vec<DatasetGroup>) {
	let mut datasets = Vec::new();
	let mut groups = Vec::new();

	for (g, (name, palette)) in [("Greens", SeriesPalette::greens()), ("Blues", SeriesPalette::blues())]
		.into_iter()
		.enumerate()
	{
		let series: Vec<ChartDataset> = SERIES_LABELS
			.iter()
			.enumerate()
			.map(|(i, label)| ChartDataset {
				label: (*label).to_string(),
				color: palette.get(i).to_css(),
				values: (0..TICK_LABELS.len())
					.map(|t| 1.0 + (rand_simple(g * 100 + i * 10 + t) * 10.0).floor())
					.collect(),
			})
			.collect();

		groups.push(DatasetGroup::new(
			name,
			series
				.iter()
				.map(|s| DatasetEntry::new(s.label.clone(), s.color.clone()))
				.collect(),
		));
		datasets.extend(series);
	}

	let data = ChartData {
		labels: TICK_LABELS.iter().map(|l| l.to_string()).collect(),
		datasets,
	};
	(data, groups)
}

/// A canvas line chart implementing [`CanvasHost`], redrawn on every update.
pub struct CanvasChart {
	/// Surface the chart draws into; the legend layout wraps it.
	pub canvas: HtmlCanvasElement,
	/// 2D context of `canvas`.
	pub ctx: CanvasRenderingContext2d,
	/// Tick labels and series, in legend group order.
	pub data: ChartData,
	/// Visibility flag per dataset, indexed like `data.datasets`.
	pub visible: Vec<bool>,
	/// Options passed to the legend on every update.
	pub legend_options: GroupedLegendOptions,
	/// Point style and theme the legend reads back through [`ChartHost::native_legend`].
	pub native: NativeLegendOptions,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	legend: GroupedLegend,
}

impl CanvasChart {
	/// Creates a chart over `canvas` with every dataset visible.
	///
	/// Fails when the canvas has no 2D context.
	pub fn new(
		canvas: HtmlCanvasElement,
		data: ChartData,
		legend_options: GroupedLegendOptions,
		native: NativeLegendOptions,
	) -> Result<Self> {
		let ctx = canvas
			.get_context("2d")?
			.ok_or(LegendError::Dom("2d context unavailable".into()))?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| LegendError::Dom("unexpected context type".into()))?;
		let visible = vec![true; data.datasets.len()];
		let (width, height) = (canvas.width() as f64, canvas.height() as f64);

		Ok(Self {
			canvas,
			ctx,
			data,
			visible,
			legend_options,
			native,
			width,
			height,
			legend: GroupedLegend,
		})
	}

	/// The legend plugin this chart runs after each redraw.
	pub fn legend(&self) -> GroupedLegend {
		self.legend
	}

	/// Resizes the canvas backing store. Takes effect on the next update.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
		self.width = width;
		self.height = height;
	}

	/// Datasets currently drawn, with their global index.
	pub fn visible_datasets(&self) -> impl Iterator<Item = (usize, &ChartDataset)> {
		self.data
			.datasets
			.iter()
			.enumerate()
			.filter(|(i, _)| self.visible.get(*i).copied().unwrap_or(false))
	}
}

impl ChartHost for CanvasChart {
	fn dataset_count(&self) -> usize {
		self.data.datasets.len()
	}

	fn is_dataset_visible(&self, index: usize) -> bool {
		self.visible.get(index).copied().unwrap_or(false)
	}

	fn set_dataset_visibility(&mut self, index: usize, visible: bool) {
		if let Some(slot) = self.visible.get_mut(index) {
			*slot = visible;
		}
	}

	fn update(&mut self) {
		render::render(self);
		if let Err(e) = self
			.legend
			.after_update(&*self, UpdateMode::Default, &self.legend_options)
		{
			error!("grouped-legend: legend update failed: {}", e);
		}
	}

	fn native_legend(&self) -> NativeLegendOptions {
		self.native.clone()
	}
}

impl CanvasHost for CanvasChart {
	fn canvas(&self) -> HtmlCanvasElement {
		self.canvas.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sample_groups_match_flat_dataset_order() {
		let (data, groups) = sample_data();
		assert_eq!(data.labels.len(), 3);
		assert_eq!(data.datasets.len(), 6);
		assert_eq!(groups.len(), 2);
		assert_eq!(groups[0].name, "Greens");
		assert_eq!(groups[1].name, "Blues");

		let flat: Vec<_> = groups.iter().flat_map(|g| g.datasets.iter()).collect();
		for (entry, dataset) in flat.iter().zip(&data.datasets) {
			assert_eq!(entry.label.as_deref(), Some(dataset.label.as_str()));
			assert_eq!(entry.background_color.as_deref(), Some(dataset.color.as_str()));
		}
	}

	#[test]
	fn sample_values_stay_in_range() {
		let (data, _) = sample_data();
		for dataset in &data.datasets {
			assert!(dataset.values.iter().all(|v| (1.0..=10.0).contains(v)));
		}
	}
}
