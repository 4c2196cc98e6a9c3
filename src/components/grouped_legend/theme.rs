//! Theme values the legend reads from the host on every update.
//!
//! Nothing here is cached between updates: the host resolves a fresh
//! [`LegendTheme`] and [`NativeLegendOptions`] for each pass and the legend
//! only borrows them for its duration.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha, 0.0 to 1.0.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same color with alpha `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// `#rrggbb` when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// A run of related series colors, one palette per legend group.
#[derive(Clone, Debug)]
pub struct SeriesPalette {
	/// Colors in series order.
	pub colors: Vec<Color>,
}

impl SeriesPalette {
	/// Green, dark green, lawn green.
	pub fn greens() -> Self {
		Self {
			colors: vec![
				Color::rgb(0, 128, 0),   // Green
				Color::rgb(0, 100, 0),   // Dark green
				Color::rgb(124, 252, 0), // Lawn green
			],
		}
	}

	/// Blue, dark blue, light blue.
	pub fn blues() -> Self {
		Self {
			colors: vec![
				Color::rgb(0, 0, 255),     // Blue
				Color::rgb(0, 0, 139),     // Dark blue
				Color::rgb(173, 216, 230), // Light blue
			],
		}
	}

	/// Color for series `index`, cycling.
	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

/// Line height as Chart.js accepts it: a multiplier or a CSS length.
#[derive(Clone, Debug, PartialEq)]
pub enum LineHeight {
	/// Multiple of the font size.
	Multiplier(f64),
	/// CSS length: `px`, `%`, `em`, a bare number, or `normal`.
	Css(String),
}

impl LineHeight {
	/// Resolves to pixels for a font of `size` px.
	///
	/// Unparsable strings fall back to `size * 1.2`, the `normal` line height.
	pub fn to_px(&self, size: f64) -> f64 {
		match self {
			LineHeight::Multiplier(m) => size * m,
			LineHeight::Css(raw) => {
				let raw = raw.trim();
				let parsed = if let Some(v) = raw.strip_suffix("px") {
					v.trim().parse::<f64>().ok()
				} else if let Some(v) = raw.strip_suffix('%') {
					v.trim().parse::<f64>().ok().map(|p| size * p / 100.0)
				} else if let Some(v) = raw.strip_suffix("em") {
					v.trim().parse::<f64>().ok().map(|m| size * m)
				} else {
					raw.parse::<f64>().ok().map(|m| size * m)
				};
				parsed.unwrap_or(size * 1.2)
			}
		}
	}
}

/// Font description resolved from the host's options.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
	/// CSS font-family list.
	pub family: String,
	/// Size in pixels.
	pub size: f64,
	/// CSS font-style, e.g. `italic`.
	pub style: Option<String>,
	/// CSS font-weight, e.g. `bold` or `600`.
	pub weight: Option<String>,
	/// Line height, resolved to pixels by [`FontSpec::line_height_px`].
	pub line_height: LineHeight,
}

impl Default for FontSpec {
	fn default() -> Self {
		Self {
			family: "'Helvetica Neue', 'Helvetica', 'Arial', sans-serif".into(),
			size: 12.0,
			style: None,
			weight: None,
			line_height: LineHeight::Multiplier(1.2),
		}
	}
}

impl FontSpec {
	/// CSS `font` shorthand: `[style] [weight] <size>px <family>`.
	pub fn css_string(&self) -> String {
		let size = format!("{}px", self.size);
		[
			self.style.as_deref(),
			self.weight.as_deref(),
			Some(size.as_str()),
			Some(self.family.as_str()),
		]
		.into_iter()
		.flatten()
		.filter(|part| !part.is_empty())
		.collect::<Vec<_>>()
		.join(" ")
	}

	/// Line height resolved against this font's size.
	pub fn line_height_px(&self) -> f64 {
		self.line_height.to_px(self.size)
	}
}

/// Font and text color for the legend, resolved per update.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendTheme {
	/// Label font.
	pub font: FontSpec,
	/// Label text color.
	pub color: String,
}

impl Default for LegendTheme {
	fn default() -> Self {
		Self {
			font: FontSpec::default(),
			color: "#666".into(),
		}
	}
}

/// The host's own legend settings that influence the grouped legend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NativeLegendOptions {
	/// Markers follow `point_style` instead of a color box.
	pub use_point_style: bool,
	/// Requested point style; only `rect` and `circle` are drawn.
	pub point_style: Option<String>,
	/// Font and color for legend labels.
	pub theme: LegendTheme,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn font_string_skips_missing_parts() {
		let font = FontSpec::default();
		assert_eq!(
			font.css_string(),
			"12px 'Helvetica Neue', 'Helvetica', 'Arial', sans-serif"
		);

		let font = FontSpec {
			family: "serif".into(),
			size: 14.0,
			style: Some("italic".into()),
			weight: Some("bold".into()),
			line_height: LineHeight::Multiplier(1.0),
		};
		assert_eq!(font.css_string(), "italic bold 14px serif");
	}

	#[test]
	fn line_height_units() {
		assert_eq!(LineHeight::Multiplier(1.5).to_px(10.0), 15.0);
		assert_eq!(LineHeight::Css("18px".into()).to_px(10.0), 18.0);
		assert_eq!(LineHeight::Css("150%".into()).to_px(10.0), 15.0);
		assert_eq!(LineHeight::Css("2em".into()).to_px(10.0), 20.0);
		assert_eq!(LineHeight::Css("normal".into()).to_px(10.0), 12.0);
		assert_eq!(FontSpec::default().line_height_px(), 12.0 * 1.2);
	}

	#[test]
	fn color_css_forms() {
		assert_eq!(Color::rgb(0, 128, 0).to_css(), "#008000");
		assert_eq!(
			Color::rgb(0, 0, 255).with_alpha(0.5).to_css(),
			"rgba(0, 0, 255, 0.5)"
		);
		assert_eq!(Color::rgb(0, 0, 0).lighten(1.0), Color::rgb(255, 255, 255));
		assert_eq!(SeriesPalette::greens().get(3), Color::rgb(0, 128, 0));
	}
}
