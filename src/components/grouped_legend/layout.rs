//! Layout builder: the container structure around the chart canvas.
//!
//! [`LayoutRegions::build`] restructures
//!
//! ```text
//! <external-container>
//!     <canvas>
//! ```
//!
//! into
//!
//! ```text
//! <external-container>
//!     div.groupedlegend-global-container
//!         div.groupedlegend-legend-container
//!         div.groupedlegend-canvas-container
//!             <canvas>
//! ```
//!
//! so flexbox can place the legend beside or above the canvas independently
//! of the chart's own box. The CSS for that structure is [`LayoutStyles`],
//! computed from the legend position and host theme on every update.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, Node};

use super::error::{LegendError, Result};
use super::styles::{self, StyleProperty, StyleSheet};
use super::theme::LegendTheme;
use super::types::LegendPosition;

/// Class of the outer flex container.
pub const GLOBAL_CONTAINER_CLASS: &str = "groupedlegend-global-container";
/// Class of the legend region.
pub const LEGEND_CONTAINER_CLASS: &str = "groupedlegend-legend-container";
/// Class of the region holding the canvas.
pub const CANVAS_CONTAINER_CLASS: &str = "groupedlegend-canvas-container";

/// Declarations for the three persistent layout regions.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutStyles {
	/// Outer container: flex direction from the legend position.
	pub global: StyleSheet,
	/// Legend region: group direction and typography.
	pub legend: StyleSheet,
	/// Canvas region: fills the remaining space.
	pub canvas: StyleSheet,
}

impl LayoutStyles {
	/// Declarations for a legend at `position` styled with `theme`.
	pub fn compute(position: LegendPosition, theme: &LegendTheme) -> Self {
		let direction = match position {
			LegendPosition::Top => "column",
			LegendPosition::Bottom => "column-reverse",
			LegendPosition::Left => "row",
			LegendPosition::Right => "row-reverse",
		};
		let global = StyleSheet::new()
			.with(StyleProperty::Display, "flex")
			.with(StyleProperty::FlexDirection, direction)
			.with(StyleProperty::Width, "100%")
			.with(StyleProperty::Height, "100%");

		// Groups run along the edge the legend is attached to.
		let legend_direction = if position.is_horizontal() {
			"row"
		} else {
			"column"
		};
		let legend = StyleSheet::new()
			.with(StyleProperty::Display, "flex")
			.with(StyleProperty::FlexDirection, legend_direction)
			.with(StyleProperty::AlignItems, "center")
			.with(StyleProperty::JustifyContent, "center")
			.with(StyleProperty::MaxHeight, "100%")
			.with(StyleProperty::Cursor, "default")
			.merged(&styles::label_typography(
				&theme.font.css_string(),
				theme.font.line_height_px(),
				&theme.color,
			));

		// The position can change between updates; an empty value clears the
		// constraint left over from the other axis.
		let (height_max, height_min, width_max, width_min) = if position.is_horizontal() {
			("100%", "0", "", "")
		} else {
			("", "", "100%", "0")
		};
		let canvas = StyleSheet::new()
			.with(StyleProperty::Position, "relative")
			.with(StyleProperty::FlexGrow, "1")
			.with(StyleProperty::MaxHeight, height_max)
			.with(StyleProperty::MinHeight, height_min)
			.with(StyleProperty::MaxWidth, width_max)
			.with(StyleProperty::MinWidth, width_min);

		Self {
			global,
			legend,
			canvas,
		}
	}
}

/// The wrapper, legend, and canvas containers around a chart canvas.
#[derive(Clone, Debug)]
pub struct LayoutRegions {
	/// Outer container, in the canvas's original place.
	pub global: HtmlElement,
	/// Region the legend is rendered into.
	pub legend: HtmlElement,
	/// Region holding the chart canvas.
	pub canvas: HtmlElement,
}

impl LayoutRegions {
	/// Wraps `canvas` in the legend layout. Must run once per chart: a second
	/// call nests another layout inside the first.
	pub fn build(canvas: &HtmlCanvasElement) -> Result<Self> {
		let parent = canvas
			.parent_element()
			.ok_or(LegendError::LayoutMissing("canvas has no parent element"))?;
		let document = canvas
			.owner_document()
			.ok_or(LegendError::LayoutMissing("canvas has no owner document"))?;

		let global = create_div(&document, GLOBAL_CONTAINER_CLASS)?;
		let legend = create_div(&document, LEGEND_CONTAINER_CLASS)?;
		let canvas_container = create_div(&document, CANVAS_CONTAINER_CLASS)?;

		let canvas_node: &Node = canvas;
		parent.insert_before(&global, Some(canvas_node))?;
		global.append_child(&legend)?;
		global.append_child(&canvas_container)?;
		canvas_container.append_child(canvas)?;

		Ok(Self {
			global,
			legend,
			canvas: canvas_container,
		})
	}

	/// Finds the regions `build` created around `canvas`.
	pub fn locate(canvas: &HtmlCanvasElement) -> Result<Self> {
		let canvas_container = canvas
			.parent_element()
			.filter(|e| e.class_name() == CANVAS_CONTAINER_CLASS)
			.ok_or(LegendError::LayoutMissing("canvas container not found"))?;
		let legend = canvas_container
			.previous_element_sibling()
			.filter(|e| e.class_name() == LEGEND_CONTAINER_CLASS)
			.ok_or(LegendError::LayoutMissing("legend container not found"))?;
		let global = legend
			.parent_element()
			.filter(|e| e.class_name() == GLOBAL_CONTAINER_CLASS)
			.ok_or(LegendError::LayoutMissing("global container not found"))?;

		Ok(Self {
			global: into_html(global)?,
			legend: into_html(legend)?,
			canvas: into_html(canvas_container)?,
		})
	}

	/// Writes `styles` onto the three regions.
	pub fn apply(&self, styles: &LayoutStyles) -> Result<()> {
		styles.global.apply(&self.global.style())?;
		styles.legend.apply(&self.legend.style())?;
		styles.canvas.apply(&self.canvas.style())?;
		Ok(())
	}

	/// Removes all generated legend content, leaving the region in place.
	pub fn clear_legend(&self) {
		while let Some(child) = self.legend.first_element_child() {
			child.remove();
		}
		self.legend.set_text_content(None);
	}
}

pub(crate) fn create_div(document: &Document, class: &str) -> Result<HtmlElement> {
	let element = document.create_element("div")?;
	element.set_class_name(class);
	into_html(element)
}

pub(crate) fn into_html(element: Element) -> Result<HtmlElement> {
	element
		.dyn_into::<HtmlElement>()
		.map_err(|_| LegendError::Dom("expected an HTML element".into()))
}
