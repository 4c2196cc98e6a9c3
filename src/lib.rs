//! grouped-legend: a chart legend whose entries are grouped under headings.
//!
//! This crate provides the grouped legend as a WASM plugin for Chart.js
//! (`groupedLegendPlugin()` in JavaScript) and as a Leptos demo app drawing
//! its own canvas line chart. Legend clicks toggle single datasets or whole
//! groups on the chart.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::demo_chart::{ChartData, ChartDataset, DemoConfig, GroupedLegendChart};
pub use components::grouped_legend::{
	CanvasHost, ChartHost, DatasetEntry, DatasetGroup, GroupedLegend, GroupedLegendOptions,
	LegendCommand, LegendError, LegendModel, LegendPosition, MarkerShape, NativeLegendOptions,
	UpdateMode, find_group_offset,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("grouped-legend: logging initialized");
}

/// Parses the demo page configuration.
pub fn parse_demo_config(json: &str) -> Result<DemoConfig, LegendError> {
	Ok(serde_json::from_str::<DemoConfig>(json)?)
}

/// Load the demo configuration from a script element with id="legend-config".
/// Expected format: JSON with { groupedlegend: {...}, usePointStyle, pointStyle }
fn load_demo_config() -> Option<DemoConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("legend-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match parse_demo_config(&json_text) {
		Ok(config) => {
			info!(
				"grouped-legend: loaded config with {} groups",
				config.groupedlegend.groups.len()
			);
			Some(config)
		}
		Err(e) => {
			warn!("grouped-legend: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Renders the sample chart with the grouped legend, configured from the DOM.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_demo_config().unwrap_or_default();
	let (data, sample_groups) = components::demo_chart::sample_data();

	let mut legend = config.groupedlegend;
	if legend.groups.is_empty() {
		legend.groups = sample_groups;
	}
	let native = NativeLegendOptions {
		use_point_style: config.use_point_style,
		point_style: config.point_style,
		..NativeLegendOptions::default()
	};

	let data_signal = Signal::derive(move || data.clone());
	let legend_signal = Signal::derive(move || legend.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Grouped Legend" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="chart-page">
			<h1>"Grouped Legend"</h1>
			<p class="subtitle">"Click a series to toggle it. Click a group name to toggle the whole group."</p>
			<GroupedLegendChart data=data_signal legend=legend_signal native=native />
		</div>
	}
}
