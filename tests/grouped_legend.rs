//! Legend behavior through the public API, against an in-memory chart.
//!
//! Covers the model the DOM layer renders (groups, offsets, strike-through)
//! and the round trip of a click: command -> chart visibility -> rebuilt model.

use grouped_legend::{
	ChartHost, DatasetEntry, DatasetGroup, GroupedLegendOptions, LegendCommand, LegendError,
	LegendModel, MarkerShape, NativeLegendOptions, find_group_offset,
};

/// Chart with a flat visibility list that counts redraws.
struct MemoryChart {
	visible: Vec<bool>,
	redraws: usize,
	native: NativeLegendOptions,
}

impl MemoryChart {
	fn new(count: usize) -> Self {
		Self {
			visible: vec![true; count],
			redraws: 0,
			native: NativeLegendOptions::default(),
		}
	}
}

impl ChartHost for MemoryChart {
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
		self.redraws += 1;
	}

	fn native_legend(&self) -> NativeLegendOptions {
		self.native.clone()
	}
}

fn greens_and_blues() -> GroupedLegendOptions {
	GroupedLegendOptions::with_groups(vec![
		DatasetGroup::new(
			"Greens",
			vec![
				DatasetEntry::new("A", "green"),
				DatasetEntry::new("B", "darkgreen"),
			],
		),
		DatasetGroup::new("Blues", vec![DatasetEntry::new("C", "blue")]),
	])
}

fn struck_entries(model: &LegendModel) -> Vec<&str> {
	model
		.groups
		.iter()
		.flat_map(|g| g.entries.iter())
		.filter(|e| e.hidden)
		.map(|e| e.label.as_str())
		.collect()
}

#[test]
fn builds_two_groups_with_offsets() {
	let chart = MemoryChart::new(3);
	let model = LegendModel::build(&chart, &greens_and_blues()).unwrap();

	assert_eq!(model.marker, MarkerShape::Rect);
	assert_eq!(model.groups.len(), 2);
	assert_eq!(model.groups[0].entries.len(), 2);
	assert_eq!(model.groups[1].entries.len(), 1);
	assert_eq!(model.groups[0].offset, 0);
	assert_eq!(model.groups[1].offset, 2);
	assert_eq!(model.groups[1].entries[0].index, 2);
	assert_eq!(model.groups[1].entries[0].color, "blue");
	assert!(model.groups.iter().all(|g| !g.hidden));
	assert!(struck_entries(&model).is_empty());
}

#[test]
fn group_strikes_through_only_when_every_member_is_hidden() {
	let options = greens_and_blues();
	let mut chart = MemoryChart::new(3);

	let model = LegendModel::build(&chart, &options).unwrap();
	model.groups[0].entries[0].command.apply(&mut chart);
	let model = LegendModel::build(&chart, &options).unwrap();
	assert!(!model.groups[0].hidden);
	assert_eq!(struck_entries(&model), vec!["A"]);

	model.groups[0].entries[1].command.apply(&mut chart);
	let model = LegendModel::build(&chart, &options).unwrap();
	assert!(model.groups[0].hidden);
	assert!(!model.groups[1].hidden);
	assert_eq!(struck_entries(&model), vec!["A", "B"]);
	assert_eq!(chart.redraws, 2);
}

#[test]
fn group_click_round_trip() {
	let options = greens_and_blues();
	let mut chart = MemoryChart::new(3);

	let model = LegendModel::build(&chart, &options).unwrap();
	assert_eq!(
		model.groups[0].command,
		LegendCommand::SetGroupVisibility {
			offset: 0,
			count: 2,
			visible: false
		}
	);
	model.groups[0].command.apply(&mut chart);
	assert_eq!(chart.visible, vec![false, false, true]);

	let model = LegendModel::build(&chart, &options).unwrap();
	assert!(model.groups[0].hidden);
	model.groups[0].command.apply(&mut chart);
	assert_eq!(chart.visible, vec![true, true, true]);
}

#[test]
fn point_style_switches_marker() {
	let mut chart = MemoryChart::new(3);
	chart.native.use_point_style = true;
	let model = LegendModel::build(&chart, &greens_and_blues()).unwrap();
	assert_eq!(model.marker, MarkerShape::Circle);

	chart.native.point_style = Some("triangle".into());
	let model = LegendModel::build(&chart, &greens_and_blues()).unwrap();
	assert_eq!(model.marker, MarkerShape::Circle);
}

#[test]
fn foreign_group_lookup_fails() {
	let options = greens_and_blues();
	let copy = options.groups[1].clone();
	let err = find_group_offset(&copy, &options.groups).unwrap_err();
	assert!(matches!(err, LegendError::GroupNotFound { .. }));
	assert_eq!(err.to_string(), "Group not found among configured groups: Blues");
}
