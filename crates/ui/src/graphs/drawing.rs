//! Shared drawing helpers for charts: point layout, grid lines and legend items.

use bevy_egui::egui;

/// Horizontal padding so the first and last points are not clipped.
pub(crate) const CHART_INSET_X: f32 = 24.0;

/// Vertical headroom above the largest value for its label.
pub(crate) const CHART_INSET_TOP: f32 = 18.0;

/// Lay out `values` left to right inside `rect`, scaled from zero to `max_val`.
///
/// Points are evenly spaced; a single value sits in the middle. The y axis
/// starts at zero rather than at the smallest value so ratios between points
/// stay visible.
pub(crate) fn point_positions(values: &[f64], max_val: f64, rect: egui::Rect) -> Vec<egui::Pos2> {
    let max_val = if max_val > 0.0 { max_val } else { 1.0 };
    let left = rect.min.x + CHART_INSET_X;
    let usable_w = (rect.width() - 2.0 * CHART_INSET_X).max(0.0);
    let usable_h = (rect.height() - CHART_INSET_TOP).max(0.0);

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let t = if values.len() > 1 {
                i as f32 / (values.len() - 1) as f32
            } else {
                0.5
            };
            let x = left + t * usable_w;
            let frac = (v / max_val).clamp(0.0, 1.0) as f32;
            let y = rect.max.y - frac * usable_h;
            egui::pos2(x, y)
        })
        .collect()
}

pub(crate) fn draw_grid(painter: &egui::Painter, rect: egui::Rect, lines: usize) {
    for i in 0..=lines {
        let y = rect.min.y + CHART_INSET_TOP
            + (i as f32 / lines as f32) * (rect.height() - CHART_INSET_TOP);
        painter.line_segment(
            [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
            egui::Stroke::new(0.3, egui::Color32::from_gray(150)),
        );
    }
}

pub(crate) fn legend_item(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 1.0, color);
    ui.label(text);
}
