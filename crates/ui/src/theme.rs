use bevy_egui::{egui, EguiContexts};

/// Light poster palette: paper background, slate widgets, teal accent.
pub fn apply_poster_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let paper = egui::Color32::from_rgb(250, 249, 244);
    let inactive = egui::Color32::from_rgb(226, 230, 234);
    let hover = egui::Color32::from_rgb(205, 215, 225);
    let accent = egui::Color32::from_rgb(40, 140, 140);

    style.visuals.window_fill = paper;
    style.visuals.panel_fill = paper;
    style.visuals.faint_bg_color = egui::Color32::from_rgb(240, 240, 234);

    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.bg_fill = accent;
    style.visuals.widgets.active.weak_bg_fill = accent;

    // Slider rail and radio dots pick up the accent through the selection color.
    style.visuals.selection.bg_fill = accent;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, accent);
    style.visuals.slider_trailing_fill = true;

    // egui 0.31+ uses CornerRadius with u8 values
    let widget_rounding = egui::CornerRadius::same(4);
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    // Poster text is read from a distance.
    style.spacing.slider_width = 220.0;
    for font in style.text_styles.values_mut() {
        font.size *= 1.15;
    }

    ctx.set_style(style);
}
