//! Renders a [`LegendModel`] into the legend region and routes clicks back as commands.
//!
//! Each rebuild produces:
//!
//! ```text
//! div.groupedlegend-group-container
//!     span.groupedlegend-group-name        [data-legend-command=set-group-visibility]
//!     ul.groupedlegend-group-entries
//!         li.groupedlegend-entry           [data-legend-command=toggle-dataset]
//!             svg > rect | circle
//!             span.groupedlegend-entry-name
//! ```
//!
//! Elements carry their command as attributes. A single click listener on the
//! legend region, installed once by [`listen_for_commands`], decodes them, so
//! throwing the elements away on the next rebuild never frees a live callback.

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, SvgElement};

use super::command::{ATTR_COMMAND, LegendCommand};
use super::error::{LegendError, Result};
use super::layout::{LayoutRegions, create_div, into_html};
use super::legend::{LegendEntry, LegendModel, MarkerShape};
use super::styles::{self, StyleSheet};
use super::theme::LegendTheme;

/// Class of one group block.
pub const GROUP_CONTAINER_CLASS: &str = "groupedlegend-group-container";
/// Class of a group's clickable name.
pub const GROUP_NAME_CLASS: &str = "groupedlegend-group-name";
/// Class of the list holding a group's entries.
pub const GROUP_ENTRIES_CLASS: &str = "groupedlegend-group-entries";
/// Class of one dataset entry.
pub const ENTRY_CLASS: &str = "groupedlegend-entry";
/// Class of an entry's label.
pub const ENTRY_NAME_CLASS: &str = "groupedlegend-entry-name";

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Appends the model's group blocks to the (already cleared) legend region.
pub fn render_legend(regions: &LayoutRegions, model: &LegendModel, theme: &LegendTheme) -> Result<()> {
	let document = owner_document(&regions.legend)?;
	let fragment = document.create_document_fragment();
	let mut containers = Vec::with_capacity(model.groups.len());

	for block in &model.groups {
		let container = create_div(&document, GROUP_CONTAINER_CLASS)?;
		styles::group_container().apply(&container.style())?;

		let name = create_html(&document, "span", GROUP_NAME_CLASS)?;
		struck_if(styles::group_name(), block.hidden).apply(&name.style())?;
		name.set_inner_text(&block.name);
		set_command(&name, &block.command)?;

		let list = create_html(&document, "ul", GROUP_ENTRIES_CLASS)?;
		styles::group_entries().apply(&list.style())?;
		for entry in &block.entries {
			let item = render_entry(&document, model.marker, entry)?;
			list.append_child(&item)?;
		}

		container.append_child(&name)?;
		container.append_child(&list)?;
		fragment.append_child(&container)?;
		containers.push(container);
	}
	regions.legend.append_child(&fragment)?;

	// Group blocks did not exist when the region styles were applied.
	let typography = styles::label_typography(
		&theme.font.css_string(),
		theme.font.line_height_px(),
		&theme.color,
	);
	for container in &containers {
		typography.apply(&container.style())?;
	}
	Ok(())
}

fn render_entry(document: &Document, marker: MarkerShape, entry: &LegendEntry) -> Result<HtmlElement> {
	let item = create_html(document, "li", ENTRY_CLASS)?;
	struck_if(styles::entry(), entry.hidden).apply(&item.style())?;
	set_command(&item, &entry.command)?;

	let swatch = render_marker(document, marker, &entry.color)?;

	let name = create_html(document, "span", ENTRY_NAME_CLASS)?;
	styles::entry_name().apply(&name.style())?;
	name.set_inner_text(&entry.label);

	item.append_child(&swatch)?;
	item.append_child(&name)?;
	Ok(item)
}

fn render_marker(document: &Document, shape: MarkerShape, color: &str) -> Result<SvgElement> {
	let svg = document
		.create_element_ns(Some(SVG_NS), "svg")?
		.dyn_into::<SvgElement>()
		.map_err(|_| LegendError::Dom("expected an SVG element".into()))?;
	styles::marker(shape).apply(&svg.style())?;

	let fill = match shape {
		MarkerShape::Rect => {
			let rect = document.create_element_ns(Some(SVG_NS), "rect")?;
			rect.set_attribute("width", "100%")?;
			rect.set_attribute("height", "100%")?;
			rect
		}
		MarkerShape::Circle => {
			svg.set_attribute("viewBox", "0 0 12 12")?;
			let circle = document.create_element_ns(Some(SVG_NS), "circle")?;
			circle.set_attribute("cx", "6")?;
			circle.set_attribute("cy", "6")?;
			circle.set_attribute("r", "6")?;
			circle
		}
	};
	fill.set_attribute("fill", color)?;
	svg.append_child(&fill)?;
	Ok(svg)
}

/// Installs the legend region's click listener. Call once per region.
pub fn listen_for_commands(
	legend: &HtmlElement,
	dispatch: impl Fn(LegendCommand) + 'static,
) -> Result<()> {
	let selector = format!("[{ATTR_COMMAND}]");
	let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
		let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
			return;
		};
		let Ok(Some(source)) = target.closest(&selector) else {
			return;
		};
		match LegendCommand::from_attributes(|name| source.get_attribute(name)) {
			Some(command) => dispatch(command),
			None => warn!("grouped-legend: ignoring click on malformed legend element"),
		}
	});
	legend.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
	// Lives as long as the page: the legend region is never removed.
	handler.forget();
	Ok(())
}

fn struck_if(sheet: StyleSheet, hidden: bool) -> StyleSheet {
	if hidden {
		sheet.merged(&styles::hidden())
	} else {
		sheet
	}
}

fn set_command(element: &Element, command: &LegendCommand) -> Result<()> {
	for (name, value) in command.attributes() {
		element.set_attribute(name, &value)?;
	}
	Ok(())
}

fn create_html(document: &Document, tag: &str, class: &str) -> Result<HtmlElement> {
	let element = document.create_element(tag)?;
	element.set_class_name(class);
	into_html(element)
}

fn owner_document(element: &HtmlElement) -> Result<Document> {
	element
		.owner_document()
		.ok_or(LegendError::LayoutMissing("legend region has no owner document"))
}
