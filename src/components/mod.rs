//! UI components: the grouped legend plugin and the demo chart hosting it.

pub mod demo_chart;
pub mod grouped_legend;
