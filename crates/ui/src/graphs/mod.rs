//! Charts drawn with the egui painter.

mod drawing;
mod scenario;

pub(crate) use scenario::draw_scenario_chart;
