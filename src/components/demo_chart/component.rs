//! Leptos component wrapping the demo chart canvas and its grouped legend.
//!
//! On mount the component sizes the canvas to its parent, creates the
//! [`CanvasChart`], lets the legend build its layout around the canvas, and
//! draws once. Legend clicks come back as commands, are applied to the chart,
//! and the chart's redraw rebuilds the legend.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use web_sys::HtmlCanvasElement;

use super::state::CanvasChart;
use super::types::ChartData;
use crate::components::grouped_legend::{
	ChartHost, GroupedLegendOptions, LegendCommand, NativeLegendOptions,
};

/// Renders a line chart with a grouped legend.
///
/// `legend` carries the groups and placement; `native` the theme and point
/// style the legend picks its markers and typography from. Explicit
/// `width`/`height` override sizing from the parent container.
#[component]
pub fn GroupedLegendChart(
	/// Tick labels and series to draw.
	#[prop(into)]
	data: Signal<ChartData>,
	/// Groups and placement of the legend.
	#[prop(into)]
	legend: Signal<GroupedLegendOptions>,
	/// Point style and theme the legend reads from the chart.
	#[prop(optional)]
	native: NativeLegendOptions,
	/// Canvas width; defaults to the parent's width.
	#[prop(default = None)]
	width: Option<f64>,
	/// Canvas height; defaults to the parent's height.
	#[prop(default = None)]
	height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let chart: Rc<RefCell<Option<CanvasChart>>> = Rc::new(RefCell::new(None));
	let chart_init = chart.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		// The layout is built once per canvas; later runs only feed new options.
		if let Some(ref mut c) = *chart_init.borrow_mut() {
			c.data = data.get();
			c.visible.resize(c.data.datasets.len(), true);
			c.legend_options = legend.get();
			c.update();
			return;
		}

		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = (
			width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.filter(|w| *w > 0.0)
					.unwrap_or(800.0)
			}),
			height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.filter(|h| *h > 0.0)
					.unwrap_or(400.0)
			}),
		);

		let mut created = match CanvasChart::new(canvas, data.get(), legend.get(), native.clone()) {
			Ok(c) => c,
			Err(e) => {
				error!("grouped-legend: cannot create chart: {}", e);
				return;
			}
		};
		created.resize(w, h);

		let chart_click = chart_init.clone();
		let dispatch = move |command: LegendCommand| {
			if let Some(ref mut c) = *chart_click.borrow_mut() {
				command.apply(c);
			}
		};
		if let Err(e) = created.legend().start(&created, dispatch) {
			error!("grouped-legend: cannot build legend layout: {}", e);
			return;
		}

		created.update();
		*chart_init.borrow_mut() = Some(created);
	});

	view! {
		<div class="grouped-legend-chart">
			<canvas node_ref=canvas_ref class="grouped-legend-canvas" style="display: block;" />
		</div>
	}
}
