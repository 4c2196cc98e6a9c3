//! Chart.js bindings.
//!
//! [`grouped_legend_plugin`] is exported to JavaScript as `groupedLegendPlugin()`
//! and returns a plugin object for `new Chart(canvas, { plugins: [...] })`.
//! Options are read from `options.plugins.groupedlegend`; the host's font,
//! color, and point style come from `options.plugins.legend.labels`, falling
//! back to the chart-level `font` and `color`.

use js_sys::{Array, Object, Reflect};
use log::{error, warn};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::command::LegendCommand;
use super::error::LegendError;
use super::host::{CanvasHost, ChartHost, UpdateMode};
use super::plugin::{GroupedLegend, PLUGIN_ID};
use super::theme::{FontSpec, LegendTheme, LineHeight, NativeLegendOptions};
use super::types::{DatasetEntry, DatasetGroup, GroupedLegendOptions, LegendPosition};

#[wasm_bindgen]
extern "C" {
	/// A Chart.js chart instance.
	#[derive(Clone, Debug)]
	pub type Chart;

	#[wasm_bindgen(method, js_name = isDatasetVisible)]
	fn is_dataset_visible(this: &Chart, index: usize) -> bool;

	#[wasm_bindgen(method, js_name = setDatasetVisibility)]
	fn set_dataset_visibility(this: &Chart, index: usize, visible: bool);

	#[wasm_bindgen(method)]
	fn update(this: &Chart);

	#[wasm_bindgen(method, getter)]
	fn canvas(this: &Chart) -> HtmlCanvasElement;

	#[wasm_bindgen(method, getter)]
	fn options(this: &Chart) -> JsValue;

	#[wasm_bindgen(method, getter)]
	fn data(this: &Chart) -> JsValue;
}

/// [`ChartHost`] over a live Chart.js instance.
#[derive(Clone, Debug)]
pub struct ChartJsHost {
	chart: Chart,
}

impl ChartJsHost {
	/// Wraps a chart passed to a plugin hook.
	pub fn new(chart: Chart) -> Self {
		Self { chart }
	}
}

impl ChartHost for ChartJsHost {
	fn dataset_count(&self) -> usize {
		get_path(&self.chart.data(), &["datasets"])
			.filter(Array::is_array)
			.map(|datasets| Array::from(&datasets).length() as usize)
			.unwrap_or(0)
	}

	// Chart.js throws for an index with no dataset behind it.
	fn is_dataset_visible(&self, index: usize) -> bool {
		index < self.dataset_count() && self.chart.is_dataset_visible(index)
	}

	fn set_dataset_visibility(&mut self, index: usize, visible: bool) {
		if index < self.dataset_count() {
			self.chart.set_dataset_visibility(index, visible);
		}
	}

	fn update(&mut self) {
		self.chart.update();
	}

	fn native_legend(&self) -> NativeLegendOptions {
		let options = self.chart.options();
		let labels = get_path(&options, &["plugins", "legend", "labels"]);
		let label = |key: &str| labels.as_ref().and_then(|l| get_path(l, &[key]));

		let chart_font = get_path(&options, &["font"])
			.map(|f| font_from_js(&f, FontSpec::default()))
			.unwrap_or_default();
		let font = label("font")
			.map(|f| font_from_js(&f, chart_font.clone()))
			.unwrap_or(chart_font);
		let color = label("color")
			.and_then(|c| c.as_string())
			.or_else(|| get_path(&options, &["color"]).and_then(|c| c.as_string()))
			.unwrap_or_else(|| LegendTheme::default().color);

		NativeLegendOptions {
			use_point_style: label("usePointStyle")
				.and_then(|v| v.as_bool())
				.unwrap_or(false),
			// Images, canvases and `false` are kept as their string form so the
			// marker fallback reports them.
			point_style: label("pointStyle").map(|v| js_to_string(&v)),
			theme: LegendTheme { font, color },
		}
	}
}

impl CanvasHost for ChartJsHost {
	fn canvas(&self) -> HtmlCanvasElement {
		self.chart.canvas()
	}
}

/// Returns the Chart.js plugin object (`id`, `start`, `afterUpdate`).
#[wasm_bindgen(js_name = groupedLegendPlugin)]
pub fn grouped_legend_plugin() -> Object {
	let start = Closure::<dyn Fn(Chart)>::new(|chart: Chart| {
		let host = ChartJsHost::new(chart);
		let dispatcher = host.clone();
		let dispatch = move |command: LegendCommand| {
			let mut host = dispatcher.clone();
			command.apply(&mut host);
		};
		if let Err(e) = GroupedLegend.start(&host, dispatch) {
			fail(e);
		}
	});

	let after_update = Closure::<dyn Fn(Chart, JsValue, JsValue)>::new(
		|chart: Chart, args: JsValue, options: JsValue| {
			let host = ChartJsHost::new(chart);
			let mode = get_path(&args, &["mode"])
				.and_then(|m| m.as_string())
				.map(|m| UpdateMode::parse(&m))
				.unwrap_or_default();
			let options = options_from_js(&options);
			if let Err(e) = GroupedLegend.after_update(&host, mode, &options) {
				fail(e);
			}
		},
	);

	let plugin = Object::new();
	let entries: [(&str, JsValue); 3] = [
		("id", JsValue::from_str(PLUGIN_ID)),
		("start", start.into_js_value()),
		("afterUpdate", after_update.into_js_value()),
	];
	for (key, value) in entries {
		// Setting a property on a fresh plain object cannot fail.
		let _ = Reflect::set(&plugin, &JsValue::from_str(key), &value);
	}
	plugin
}

/// Fatal errors surface in JavaScript as a thrown `Error`.
fn fail(e: LegendError) -> ! {
	error!("grouped-legend: {}", e);
	wasm_bindgen::throw_str(&e.to_string())
}

/// Reads the `groupedlegend` plugin options object. Missing fields take defaults.
pub fn options_from_js(value: &JsValue) -> GroupedLegendOptions {
	let defaults = GroupedLegendOptions::default();
	let display = get_path(value, &["display"])
		.and_then(|v| v.as_bool())
		.unwrap_or(defaults.display);
	let position = match get_path(value, &["position"]).and_then(|v| v.as_string()) {
		Some(raw) => LegendPosition::parse(&raw).unwrap_or_else(|| {
			warn!("grouped-legend: unknown position '{}', using 'top'", raw);
			defaults.position
		}),
		None => defaults.position,
	};
	let groups = get_path(value, &["groups"])
		.filter(Array::is_array)
		.map(|groups| Array::from(&groups).iter().map(|g| group_from_js(&g)).collect())
		.unwrap_or_default();

	GroupedLegendOptions {
		display,
		position,
		groups,
	}
}

fn group_from_js(value: &JsValue) -> DatasetGroup {
	let name = get_path(value, &["name"])
		.and_then(|n| n.as_string())
		.unwrap_or_default();
	let datasets = get_path(value, &["datasets"])
		.filter(Array::is_array)
		.map(|datasets| {
			Array::from(&datasets)
				.iter()
				.map(|d| DatasetEntry {
					label: get_path(&d, &["label"]).and_then(|l| l.as_string()),
					background_color: get_path(&d, &["backgroundColor"]).map(|c| js_to_string(&c)),
				})
				.collect()
		})
		.unwrap_or_default();
	DatasetGroup { name, datasets }
}

/// Stringifies a value the way JS `toString` would (arrays join with `,`).
fn js_to_string(value: &JsValue) -> String {
	if let Some(s) = value.as_string() {
		return s;
	}
	if Array::is_array(value) {
		return Array::from(value).join(",").into();
	}
	value.unchecked_ref::<Object>().to_string().into()
}

fn font_from_js(value: &JsValue, fallback: FontSpec) -> FontSpec {
	let field = |key: &str| get_path(value, &[key]);
	let text = |key: &str| {
		field(key).and_then(|v| v.as_string().or_else(|| v.as_f64().map(|n| n.to_string())))
	};
	FontSpec {
		family: field("family")
			.and_then(|v| v.as_string())
			.unwrap_or(fallback.family),
		size: field("size").and_then(|v| v.as_f64()).unwrap_or(fallback.size),
		style: text("style").or(fallback.style),
		weight: text("weight").or(fallback.weight),
		line_height: field("lineHeight")
			.and_then(|v| {
				v.as_f64()
					.map(LineHeight::Multiplier)
					.or_else(|| v.as_string().map(LineHeight::Css))
			})
			.unwrap_or(fallback.line_height),
	}
}

/// Walks `root.a.b.c`; `None` on the first missing or nullish segment.
fn get_path(root: &JsValue, path: &[&str]) -> Option<JsValue> {
	let mut current = root.clone();
	for key in path {
		if current.is_undefined() || current.is_null() {
			return None;
		}
		current = Reflect::get(&current, &JsValue::from_str(key)).ok()?;
	}
	(!current.is_undefined() && !current.is_null()).then_some(current)
}
