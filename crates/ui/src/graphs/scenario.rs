//! Cold/Mild/Warm scenario line chart.

use bevy_egui::egui;

use simulation::lagoon_methane::{Climate, EstimateResult};

use super::drawing::{draw_grid, legend_item, point_positions};
use crate::formatting::fmt_compact;

const COLOR_COLD: egui::Color32 = egui::Color32::from_rgb(70, 130, 200);
const COLOR_MILD: egui::Color32 = egui::Color32::from_rgb(80, 170, 90);
const COLOR_WARM: egui::Color32 = egui::Color32::from_rgb(225, 120, 50);
const COLOR_LINE: egui::Color32 = egui::Color32::from_rgb(90, 90, 110);
const COLOR_BG: egui::Color32 = egui::Color32::from_rgb(245, 245, 240);

pub(crate) fn climate_color(climate: Climate) -> egui::Color32 {
    match climate {
        Climate::Cold => COLOR_COLD,
        Climate::Mild => COLOR_MILD,
        Climate::Warm => COLOR_WARM,
    }
}

/// Draws the Cold/Mild/Warm values of `result` as a labelled line chart.
pub(crate) fn draw_scenario_chart(ui: &mut egui::Ui, result: &EstimateResult, width: f32, height: f32) {
    let series = &result.scenario_series;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, COLOR_BG);
    draw_grid(&painter, rect, 4);

    let values: Vec<f64> = series.iter().map(|p| p.methane_ft3).collect();
    let max_val = result.scenario_max();
    let points = point_positions(&values, max_val, rect);

    for window in points.windows(2) {
        painter.line_segment([window[0], window[1]], egui::Stroke::new(2.0, COLOR_LINE));
    }

    let text_color = ui.visuals().text_color();
    for (point, pos) in series.iter().zip(points.iter()) {
        let color = climate_color(point.climate);
        painter.circle_filled(*pos, 5.0, color);
        painter.text(
            *pos - egui::vec2(0.0, 8.0),
            egui::Align2::CENTER_BOTTOM,
            fmt_compact(point.methane_ft3),
            egui::FontId::proportional(12.0),
            text_color,
        );
    }

    // Category axis
    ui.horizontal(|ui| {
        for point in series {
            legend_item(ui, climate_color(point.climate), point.label());
        }
        ui.label(format!("(max: {} ft³)", fmt_compact(max_val)));
    });
}
