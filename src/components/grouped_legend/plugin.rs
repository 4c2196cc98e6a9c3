//! Plugin lifecycle: wire the layout once, then resync the legend on every update.

use log::{debug, info};

use super::command::LegendCommand;
use super::dom;
use super::error::Result;
use super::host::{CanvasHost, UpdateMode};
use super::layout::{LayoutRegions, LayoutStyles};
use super::legend::LegendModel;
use super::types::GroupedLegendOptions;

/// Options namespace the plugin reads from the host.
pub const PLUGIN_ID: &str = "groupedlegend";

/// The grouped legend plugin. Stateless: everything it needs is either in the
/// DOM it built around the canvas or handed to it per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct GroupedLegend;

impl GroupedLegend {
	/// Builds the legend layout around the chart canvas and routes legend
	/// clicks to `dispatch`. Call once per chart, before the first update.
	pub fn start<H: CanvasHost + ?Sized>(
		&self,
		chart: &H,
		dispatch: impl Fn(LegendCommand) + 'static,
	) -> Result<LayoutRegions> {
		let regions = LayoutRegions::build(&chart.canvas())?;
		dom::listen_for_commands(&regions.legend, dispatch)?;
		info!("grouped-legend: layout built around chart canvas");
		Ok(regions)
	}

	/// Restyles the layout from the current theme and rebuilds the legend.
	///
	/// Returns the model that was rendered; with `display: false` it is empty
	/// and the legend region is left styled but blank.
	pub fn after_update<H: CanvasHost + ?Sized>(
		&self,
		chart: &H,
		mode: UpdateMode,
		options: &GroupedLegendOptions,
	) -> Result<LegendModel> {
		let regions = LayoutRegions::locate(&chart.canvas())?;
		let theme = chart.native_legend().theme;
		regions.apply(&LayoutStyles::compute(options.position, &theme))?;
		regions.clear_legend();

		let model = LegendModel::build(chart, options)?;
		dom::render_legend(&regions, &model, &theme)?;
		debug!(
			"grouped-legend: synced after {:?} update ({} groups)",
			mode,
			model.groups.len()
		);
		Ok(model)
	}
}
