//! Browser tests for the legend's DOM layer.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use grouped_legend::components::grouped_legend::chartjs::{Chart, ChartJsHost};
use grouped_legend::components::grouped_legend::{
	CanvasHost, ChartHost, DatasetEntry, DatasetGroup, GroupedLegend, GroupedLegendOptions,
	LayoutRegions, LegendCommand, LegendModel, MarkerShape, NativeLegendOptions, UpdateMode,
};
use js_sys::{Function, JSON};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

struct DomChart {
	canvas: HtmlCanvasElement,
	visible: Vec<bool>,
}

impl ChartHost for DomChart {
	fn dataset_count(&self) -> usize {
		self.visible.len()
	}

	fn is_dataset_visible(&self, index: usize) -> bool {
		self.visible.get(index).copied().unwrap_or(false)
	}

	fn set_dataset_visibility(&mut self, index: usize, visible: bool) {
		if let Some(slot) = self.visible.get_mut(index) {
			*slot = visible;
		}
	}

	fn update(&mut self) {}

	fn native_legend(&self) -> NativeLegendOptions {
		NativeLegendOptions::default()
	}
}

impl CanvasHost for DomChart {
	fn canvas(&self) -> HtmlCanvasElement {
		self.canvas.clone()
	}
}

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn mounted_chart(count: usize) -> DomChart {
	let document = document();
	let host = document.create_element("div").unwrap();
	let canvas: HtmlCanvasElement = document
		.create_element("canvas")
		.unwrap()
		.dyn_into()
		.unwrap();
	host.append_child(&canvas).unwrap();
	document.body().unwrap().append_child(&host).unwrap();
	DomChart {
		canvas,
		visible: vec![true; count],
	}
}

fn options() -> GroupedLegendOptions {
	GroupedLegendOptions::with_groups(vec![
		DatasetGroup::new(
			"Greens",
			vec![DatasetEntry::new("A", "green"), DatasetEntry::new("B", "darkgreen")],
		),
		DatasetGroup::new("Blues", vec![DatasetEntry::new("C", "blue")]),
	])
}

#[wasm_bindgen_test]
fn start_wraps_canvas_in_layout() {
	let chart = mounted_chart(3);
	let outer = chart.canvas.parent_element().unwrap();

	let regions = GroupedLegend.start(&chart, |_| {}).unwrap();
	assert_eq!(regions.global.parent_element().unwrap(), outer);
	let canvas_container: Element = regions.canvas.clone().into();
	assert_eq!(chart.canvas.parent_element().unwrap(), canvas_container);
	assert!(LayoutRegions::locate(&chart.canvas).is_ok());
}

#[wasm_bindgen_test]
fn update_renders_groups_and_strike_through() {
	let mut chart = mounted_chart(3);
	GroupedLegend.start(&chart, |_| {}).unwrap();
	chart.visible[0] = false;

	GroupedLegend
		.after_update(&chart, UpdateMode::Default, &options())
		.unwrap();
	let regions = LayoutRegions::locate(&chart.canvas).unwrap();
	let blocks = regions
		.legend
		.query_selector_all(".groupedlegend-group-container")
		.unwrap();
	assert_eq!(blocks.length(), 2);
	let entries = regions.legend.query_selector_all("li").unwrap();
	assert_eq!(entries.length(), 3);

	let first = regions.legend.query_selector("li").unwrap().unwrap();
	assert!(first.get_attribute("style").unwrap().contains("line-through"));
}

#[wasm_bindgen_test]
fn display_false_leaves_styled_empty_region() {
	let chart = mounted_chart(3);
	GroupedLegend.start(&chart, |_| {}).unwrap();
	GroupedLegend
		.after_update(&chart, UpdateMode::Default, &options())
		.unwrap();

	let hidden = GroupedLegendOptions {
		display: false,
		..options()
	};
	let model = GroupedLegend
		.after_update(&chart, UpdateMode::Default, &hidden)
		.unwrap();
	assert!(model.groups.is_empty());

	let regions = LayoutRegions::locate(&chart.canvas).unwrap();
	assert_eq!(regions.legend.child_element_count(), 0);
	assert_eq!(
		regions.global.style().get_property_value("display").unwrap(),
		"flex"
	);
}

fn click(regions: &LayoutRegions, selector: &str, nth: u32) {
	let target: HtmlElement = regions
		.legend
		.query_selector_all(selector)
		.unwrap()
		.get(nth)
		.unwrap()
		.dyn_into()
		.unwrap();
	target.click();
}

#[wasm_bindgen_test]
fn clicks_dispatch_the_encoded_commands() {
	let chart = mounted_chart(3);
	let seen: Rc<RefCell<Vec<LegendCommand>>> = Rc::default();
	let record = seen.clone();
	GroupedLegend
		.start(&chart, move |command| record.borrow_mut().push(command))
		.unwrap();
	GroupedLegend
		.after_update(&chart, UpdateMode::Default, &options())
		.unwrap();
	let regions = LayoutRegions::locate(&chart.canvas).unwrap();

	// The label span sits inside the entry that carries the command.
	click(&regions, ".groupedlegend-entry-name", 1);
	click(&regions, ".groupedlegend-group-name", 0);
	// Clicks on the region itself carry no command.
	regions.legend.click();

	assert_eq!(
		*seen.borrow(),
		vec![
			LegendCommand::ToggleDataset { index: 1 },
			LegendCommand::SetGroupVisibility {
				offset: 0,
				count: 2,
				visible: false
			},
		]
	);
}

/// A Chart.js-shaped object whose `isDatasetVisible` throws past the last
/// dataset, like the real one.
fn chartjs_chart(canvas: &HtmlCanvasElement, datasets: u32, labels: &JsValue) -> Chart {
	let factory = Function::new_with_args(
		"canvas, count, labels",
		"return {
			canvas: canvas,
			data: { datasets: Array.from({ length: count }, () => ({ hidden: false })) },
			options: { plugins: { legend: { labels: labels } } },
			isDatasetVisible(i) { return !this.data.datasets[i].hidden; },
			setDatasetVisibility(i, v) { this.data.datasets[i].hidden = !v; },
			update() {},
		};",
	);
	factory
		.call3(&JsValue::NULL, canvas, &JsValue::from(datasets), labels)
		.unwrap()
		.unchecked_into()
}

#[wasm_bindgen_test]
fn chartjs_host_reads_missing_datasets_as_hidden() {
	let mounted = mounted_chart(0);
	let mut host = ChartJsHost::new(chartjs_chart(&mounted.canvas, 3, &JsValue::UNDEFINED));
	assert_eq!(host.dataset_count(), 3);
	assert!(host.is_dataset_visible(2));
	assert!(!host.is_dataset_visible(3));
	host.set_dataset_visibility(3, true);
	assert!(!host.is_dataset_visible(3));

	let overrun = GroupedLegendOptions::with_groups(vec![
		DatasetGroup::new(
			"Greens",
			vec![DatasetEntry::new("A", "green"), DatasetEntry::new("B", "darkgreen")],
		),
		DatasetGroup::new(
			"Blues",
			vec![DatasetEntry::new("C", "blue"), DatasetEntry::new("D", "navy")],
		),
	]);
	GroupedLegend.start(&host, |_| {}).unwrap();
	let model = GroupedLegend
		.after_update(&host, UpdateMode::Default, &overrun)
		.unwrap();
	assert!(!model.groups[1].hidden);
	assert!(model.groups[1].entries[1].hidden);

	let regions = LayoutRegions::locate(&mounted.canvas).unwrap();
	assert_eq!(regions.legend.query_selector_all("li").unwrap().length(), 4);
}

#[wasm_bindgen_test]
fn chartjs_non_string_point_style_falls_back_to_circle() {
	let mounted = mounted_chart(0);
	let labels = JSON::parse(r#"{ "usePointStyle": true, "pointStyle": false }"#).unwrap();
	let host = ChartJsHost::new(chartjs_chart(&mounted.canvas, 1, &labels));

	let native = host.native_legend();
	assert_eq!(native.point_style.as_deref(), Some("false"));
	assert_eq!(MarkerShape::from_native(&native), MarkerShape::Circle);
	assert_eq!(
		LegendModel::build(&host, &GroupedLegendOptions::default())
			.unwrap()
			.marker,
		MarkerShape::Circle
	);
}
