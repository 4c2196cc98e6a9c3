//! The chart the legend is attached to.
//!
//! The legend never owns dataset storage. It reads visibility and theme
//! through [`ChartHost`] and writes visibility back through the same trait,
//! so any chart (a Chart.js instance, the demo canvas chart, a test fake) can
//! host it.

use web_sys::HtmlCanvasElement;

use super::theme::NativeLegendOptions;

/// Why the host is redrawing. Mirrors Chart.js update modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateMode {
	/// Regular redraw.
	#[default]
	Default,
	/// Hover or active-element change.
	Active,
	/// A dataset is being hidden.
	Hide,
	/// Redraw without animation.
	None,
	/// Chart reset to its initial state.
	Reset,
	/// Canvas size changed.
	Resize,
	/// A dataset is being shown.
	Show,
}

impl UpdateMode {
	/// Maps a Chart.js mode string; unknown modes are `Default`.
	pub fn parse(value: &str) -> Self {
		match value {
			"active" => UpdateMode::Active,
			"hide" => UpdateMode::Hide,
			"none" => UpdateMode::None,
			"reset" => UpdateMode::Reset,
			"resize" => UpdateMode::Resize,
			"show" => UpdateMode::Show,
			_ => UpdateMode::Default,
		}
	}
}

/// Query and mutation API the legend needs from a chart.
pub trait ChartHost {
	/// Number of datasets in the chart's flat dataset list.
	fn dataset_count(&self) -> usize;

	/// Whether dataset `index` is drawn. Indices past [`dataset_count`]
	/// read as hidden.
	///
	/// [`dataset_count`]: ChartHost::dataset_count
	fn is_dataset_visible(&self, index: usize) -> bool;

	/// Shows or hides dataset `index`. Indices past `dataset_count` are ignored.
	fn set_dataset_visibility(&mut self, index: usize, visible: bool);

	/// Redraws the chart. Hosts run the legend's post-update pass from here.
	fn update(&mut self);

	/// The host's own legend settings (point style, font, color) as of now.
	fn native_legend(&self) -> NativeLegendOptions;
}

/// A host that draws into a canvas element the legend can lay out around.
pub trait CanvasHost: ChartHost {
	/// The canvas element the chart draws into.
	fn canvas(&self) -> HtmlCanvasElement;
}

#[cfg(test)]
pub(crate) mod testing {
	use super::*;

	/// In-memory host recording visibility writes and redraws.
	#[derive(Clone, Debug, Default)]
	pub struct FakeChart {
		pub visible: Vec<bool>,
		pub updates: usize,
		pub native: NativeLegendOptions,
	}

	impl FakeChart {
		pub fn with_datasets(count: usize) -> Self {
			Self {
				visible: vec![true; count],
				..Self::default()
			}
		}
	}

	impl ChartHost for FakeChart {
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

		fn update(&mut self) {
			self.updates += 1;
		}

		fn native_legend(&self) -> NativeLegendOptions {
			self.native.clone()
		}
	}
}
