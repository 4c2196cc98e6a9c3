//! Canvas rendering for the demo chart.
//!
//! Draws in three passes: background and grid, tick labels, then one line
//! with point markers per visible dataset. Hidden datasets are skipped and
//! the value axis rescales to what remains visible.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::CanvasChart;
use crate::components::grouped_legend::theme::Color;

const PADDING: f64 = 32.0;
const POINT_RADIUS: f64 = 3.0;
const LINE_WIDTH: f64 = 2.0;
const GRID_LINES: usize = 5;

/// Renders the complete chart to its canvas.
pub fn render(chart: &CanvasChart) {
	let ctx = &chart.ctx;
	let plot = PlotArea::new(chart);

	draw_background(chart, ctx, &plot);
	draw_tick_labels(chart, ctx, &plot);
	draw_series(chart, ctx, &plot);
}

/// Pixel rectangle the series are drawn into, plus the value range it maps.
struct PlotArea {
	left: f64,
	top: f64,
	width: f64,
	height: f64,
	max_value: f64,
	ticks: usize,
}

impl PlotArea {
	fn new(chart: &CanvasChart) -> Self {
		let max_value = chart
			.visible_datasets()
			.flat_map(|(_, d)| d.values.iter().copied())
			.fold(0.0_f64, f64::max)
			.ceil()
			.max(1.0);
		Self {
			left: PADDING,
			top: PADDING / 2.0,
			width: (chart.width - PADDING * 2.0).max(1.0),
			height: (chart.height - PADDING * 1.5).max(1.0),
			max_value,
			ticks: chart.data.labels.len(),
		}
	}

	fn x(&self, tick: usize) -> f64 {
		if self.ticks <= 1 {
			return self.left + self.width / 2.0;
		}
		self.left + self.width * tick as f64 / (self.ticks - 1) as f64
	}

	fn y(&self, value: f64) -> f64 {
		self.top + self.height * (1.0 - value / self.max_value)
	}

	fn bottom(&self) -> f64 {
		self.top + self.height
	}
}

fn draw_background(chart: &CanvasChart, ctx: &CanvasRenderingContext2d, plot: &PlotArea) {
	ctx.clear_rect(0.0, 0.0, chart.width, chart.height);
	ctx.set_fill_style_str("#ffffff");
	ctx.fill_rect(0.0, 0.0, chart.width, chart.height);

	ctx.set_stroke_style_str(&grid_color().to_css());
	ctx.set_line_width(1.0);
	for i in 1..=GRID_LINES {
		let y = plot.y(plot.max_value * i as f64 / GRID_LINES as f64);
		ctx.begin_path();
		ctx.move_to(plot.left, y);
		ctx.line_to(plot.left + plot.width, y);
		ctx.stroke();
	}

	ctx.set_stroke_style_str(&axis_color().to_css());
	ctx.begin_path();
	ctx.move_to(plot.left, plot.bottom());
	ctx.line_to(plot.left + plot.width, plot.bottom());
	ctx.stroke();
}

fn grid_color() -> Color {
	Color::rgb(0, 0, 0).with_alpha(0.1)
}

/// Baseline stands out from the grid.
fn axis_color() -> Color {
	Color::rgb(102, 102, 102).lighten(0.5)
}

fn draw_tick_labels(chart: &CanvasChart, ctx: &CanvasRenderingContext2d, plot: &PlotArea) {
	let theme = &chart.native.theme;
	ctx.set_fill_style_str(&theme.color);
	ctx.set_font(&theme.font.css_string());
	ctx.set_text_align("center");
	for (i, label) in chart.data.labels.iter().enumerate() {
		let _ = ctx.fill_text(label, plot.x(i), plot.bottom() + theme.font.line_height_px());
	}

	ctx.set_text_align("right");
	for i in 0..=GRID_LINES {
		let value = plot.max_value * i as f64 / GRID_LINES as f64;
		let _ = ctx.fill_text(&format!("{value:.0}"), plot.left - 6.0, plot.y(value) + 4.0);
	}
}

fn draw_series(chart: &CanvasChart, ctx: &CanvasRenderingContext2d, plot: &PlotArea) {
	ctx.set_line_width(LINE_WIDTH);
	for (_, dataset) in chart.visible_datasets() {
		ctx.set_stroke_style_str(&dataset.color);
		ctx.set_fill_style_str(&dataset.color);

		ctx.begin_path();
		for (tick, value) in dataset.values.iter().take(plot.ticks).enumerate() {
			let (x, y) = (plot.x(tick), plot.y(*value));
			if tick == 0 {
				ctx.move_to(x, y);
			} else {
				ctx.line_to(x, y);
			}
		}
		ctx.stroke();

		for (tick, value) in dataset.values.iter().take(plot.ticks).enumerate() {
			ctx.begin_path();
			let _ = ctx.arc(plot.x(tick), plot.y(*value), POINT_RADIUS, 0.0, 2.0 * PI);
			ctx.fill();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn grid_is_translucent_and_axis_opaque() {
		assert_eq!(grid_color().to_css(), "rgba(0, 0, 0, 0.1)");
		assert_eq!(axis_color().to_css(), "#b2b2b2");
	}
}
