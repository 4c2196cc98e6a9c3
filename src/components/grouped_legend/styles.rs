//! Typed CSS declarations for the legend's elements.
//!
//! Every property the legend ever sets is a [`StyleProperty`] variant, and a
//! [`StyleSheet`] is an ordered list of declarations applied in one call.

use web_sys::CssStyleDeclaration;

use super::error::Result;
use super::legend::MarkerShape;

/// The finite set of CSS properties the legend writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleProperty {
	/// `align-items`
	AlignItems,
	/// `box-shadow`
	BoxShadow,
	/// `color`
	Color,
	/// `cursor`
	Cursor,
	/// `display`
	Display,
	/// `flex-direction`
	FlexDirection,
	/// `flex-grow`
	FlexGrow,
	/// `font`
	Font,
	/// `height`
	Height,
	/// `justify-content`
	JustifyContent,
	/// `line-height`
	LineHeight,
	/// `list-style`
	ListStyle,
	/// `margin-bottom`
	MarginBottom,
	/// `margin-left`
	MarginLeft,
	/// `margin-right`
	MarginRight,
	/// `margin-top`
	MarginTop,
	/// `max-height`
	MaxHeight,
	/// `max-width`
	MaxWidth,
	/// `min-height`
	MinHeight,
	/// `min-width`
	MinWidth,
	/// `padding`
	Padding,
	/// `padding-left`
	PaddingLeft,
	/// `position`
	Position,
	/// `text-align`
	TextAlign,
	/// `text-decoration`
	TextDecoration,
	/// `text-decoration-thickness`
	TextDecorationThickness,
	/// `width`
	Width,
}

impl StyleProperty {
	/// Property name as written in CSS.
	pub fn css_name(self) -> &'static str {
		match self {
			StyleProperty::AlignItems => "align-items",
			StyleProperty::BoxShadow => "box-shadow",
			StyleProperty::Color => "color",
			StyleProperty::Cursor => "cursor",
			StyleProperty::Display => "display",
			StyleProperty::FlexDirection => "flex-direction",
			StyleProperty::FlexGrow => "flex-grow",
			StyleProperty::Font => "font",
			StyleProperty::Height => "height",
			StyleProperty::JustifyContent => "justify-content",
			StyleProperty::LineHeight => "line-height",
			StyleProperty::ListStyle => "list-style",
			StyleProperty::MarginBottom => "margin-bottom",
			StyleProperty::MarginLeft => "margin-left",
			StyleProperty::MarginRight => "margin-right",
			StyleProperty::MarginTop => "margin-top",
			StyleProperty::MaxHeight => "max-height",
			StyleProperty::MaxWidth => "max-width",
			StyleProperty::MinHeight => "min-height",
			StyleProperty::MinWidth => "min-width",
			StyleProperty::Padding => "padding",
			StyleProperty::PaddingLeft => "padding-left",
			StyleProperty::Position => "position",
			StyleProperty::TextAlign => "text-align",
			StyleProperty::TextDecoration => "text-decoration",
			StyleProperty::TextDecorationThickness => "text-decoration-thickness",
			StyleProperty::Width => "width",
		}
	}
}

/// An ordered set of CSS declarations. Setting a property twice keeps the last value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSheet {
	declarations: Vec<(StyleProperty, String)>,
}

impl StyleSheet {
	/// An empty sheet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder form of [`StyleSheet::set`].
	pub fn with(mut self, property: StyleProperty, value: impl Into<String>) -> Self {
		self.set(property, value);
		self
	}

	/// Sets `property`, replacing an earlier value in place.
	pub fn set(&mut self, property: StyleProperty, value: impl Into<String>) {
		let value = value.into();
		match self.declarations.iter_mut().find(|(p, _)| *p == property) {
			Some(slot) => slot.1 = value,
			None => self.declarations.push((property, value)),
		}
	}

	/// Layers `other` on top of `self`.
	pub fn merged(mut self, other: &StyleSheet) -> Self {
		for (property, value) in &other.declarations {
			self.set(*property, value.clone());
		}
		self
	}

	/// Current value of `property`.
	pub fn get(&self, property: StyleProperty) -> Option<&str> {
		self.declarations
			.iter()
			.find(|(p, _)| *p == property)
			.map(|(_, v)| v.as_str())
	}

	/// Declarations in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
		self.declarations.iter().map(|(p, v)| (*p, v.as_str()))
	}

	/// Number of declarations.
	pub fn len(&self) -> usize {
		self.declarations.len()
	}

	/// True when no property is set.
	pub fn is_empty(&self) -> bool {
		self.declarations.is_empty()
	}

	/// Writes every declaration onto an element's inline style.
	pub fn apply(&self, style: &CssStyleDeclaration) -> Result<()> {
		for (property, value) in self.iter() {
			style.set_property(property.css_name(), value)?;
		}
		Ok(())
	}
}

/// Strike-through for hidden groups and datasets.
pub fn hidden() -> StyleSheet {
	StyleSheet::new()
		.with(StyleProperty::TextDecoration, "line-through")
		.with(StyleProperty::TextDecorationThickness, "0.24em")
}

/// One group block: name above its entries.
pub fn group_container() -> StyleSheet {
	StyleSheet::new()
		.with(StyleProperty::Display, "flex")
		.with(StyleProperty::FlexDirection, "column")
		.with(StyleProperty::MarginLeft, "0.5rem")
		.with(StyleProperty::MarginRight, "0.5rem")
}

/// Clickable group heading.
pub fn group_name() -> StyleSheet {
	StyleSheet::new()
		.with(StyleProperty::TextAlign, "center")
		.with(StyleProperty::Cursor, "pointer")
}

/// Unstyled list of entries.
pub fn group_entries() -> StyleSheet {
	StyleSheet::new()
		.with(StyleProperty::FlexGrow, "1")
		.with(StyleProperty::ListStyle, "none")
		.with(StyleProperty::PaddingLeft, "0")
		.with(StyleProperty::MarginTop, "0")
		.with(StyleProperty::MarginBottom, "0")
}

/// Clickable entry: marker and label on one line.
pub fn entry() -> StyleSheet {
	StyleSheet::new()
		.with(StyleProperty::Padding, "0")
		.with(StyleProperty::Display, "inline-flex")
		.with(StyleProperty::AlignItems, "center")
		.with(StyleProperty::MinHeight, "20px")
		.with(StyleProperty::MarginLeft, "10px")
		.with(StyleProperty::Cursor, "pointer")
}

/// Entry label next to its marker.
pub fn entry_name() -> StyleSheet {
	StyleSheet::new()
		.with(StyleProperty::Height, "100%")
		.with(StyleProperty::Display, "inline-block")
}

/// Box holding the SVG color marker. Rect markers are a wide swatch, circles a square.
pub fn marker(shape: MarkerShape) -> StyleSheet {
	let (width, shadow) = match shape {
		MarkerShape::Rect => ("40px", "0px 0px 0.8px 0px rgba(0, 0, 0, 0.5)"),
		MarkerShape::Circle => ("12px", "none"),
	};
	StyleSheet::new()
		.with(StyleProperty::Height, "12px")
		.with(StyleProperty::MaxWidth, width)
		.with(StyleProperty::MinWidth, width)
		.with(StyleProperty::BoxShadow, shadow)
		.with(StyleProperty::MarginRight, "6px")
		.with(StyleProperty::Display, "inline-block")
}

/// Typography shared by every group block, from the host's theme.
pub fn label_typography(font: &str, line_height_px: f64, color: &str) -> StyleSheet {
	StyleSheet::new()
		.with(StyleProperty::Font, font)
		.with(StyleProperty::LineHeight, css_px(line_height_px))
		.with(StyleProperty::Color, color)
}

/// Pixel length with at most two decimals: `14.4px`, not `14.399999999999999px`.
fn css_px(value: f64) -> String {
	let fixed = format!("{value:.2}");
	let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
	format!("{trimmed}px")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn set_replaces_in_place() {
		let sheet = StyleSheet::new()
			.with(StyleProperty::Display, "flex")
			.with(StyleProperty::Color, "red")
			.with(StyleProperty::Display, "block");
		let props: Vec<_> = sheet.iter().collect();
		assert_eq!(
			props,
			vec![
				(StyleProperty::Display, "block"),
				(StyleProperty::Color, "red")
			]
		);
	}

	#[test]
	fn merged_overrides_and_appends() {
		let sheet = entry().merged(&hidden());
		assert_eq!(sheet.get(StyleProperty::Display), Some("inline-flex"));
		assert_eq!(sheet.get(StyleProperty::TextDecoration), Some("line-through"));
		assert_eq!(sheet.len(), entry().len() + hidden().len());
	}

	#[test]
	fn marker_box_follows_shape() {
		let rect = marker(MarkerShape::Rect);
		let circle = marker(MarkerShape::Circle);
		assert_eq!(rect.get(StyleProperty::MinWidth), Some("40px"));
		assert_eq!(circle.get(StyleProperty::MinWidth), Some("12px"));
		assert_eq!(circle.get(StyleProperty::Height), Some("12px"));
	}

	#[test]
	fn typography_formats_line_height() {
		let sheet = label_typography("12px serif", 14.4, "#666");
		assert_eq!(sheet.get(StyleProperty::Font), Some("12px serif"));
		assert_eq!(sheet.get(StyleProperty::LineHeight), Some("14.4px"));
		assert_eq!(sheet.get(StyleProperty::Color), Some("#666"));
	}

	#[test]
	fn line_height_is_rounded_to_css_precision() {
		let sheet = label_typography("12px serif", 12.0 * 1.2, "#666");
		assert_eq!(sheet.get(StyleProperty::LineHeight), Some("14.4px"));
		assert_eq!(css_px(12.0), "12px");
		assert_eq!(css_px(20.126), "20.13px");
		assert_eq!(css_px(100.0), "100px");
		assert_eq!(css_px(0.0), "0px");
	}
}
