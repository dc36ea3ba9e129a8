//! Individual UI panel rendering functions for the estimate panel.

use bevy_egui::egui;

use simulation::lagoon_methane::{
    EstimateInputs, EstimateResult, HerdSize, Horizon, Location, Preset, HERD_SIZE_MAX,
    HERD_SIZE_MIN, HERD_SIZE_STEP,
};

use super::types::{HeadlineMetrics, MODEL_ACCURACY, MODEL_ACCURACY_DETAIL};
use crate::graphs::draw_scenario_chart;

// =============================================================================
// Colors
// =============================================================================

const COLOR_METHANE: egui::Color32 = egui::Color32::from_rgb(200, 90, 40);
const COLOR_ENERGY: egui::Color32 = egui::Color32::from_rgb(60, 130, 200);
const COLOR_IMPACT: egui::Color32 = egui::Color32::from_rgb(90, 150, 70);
const COLOR_MUTED: egui::Color32 = egui::Color32::from_rgb(120, 120, 130);

// =============================================================================
// Inputs
// =============================================================================

/// Renders the quick-preset radio row. Picking a preset overwrites herd size
/// and location.
pub fn render_presets(ui: &mut egui::Ui, inputs: &mut EstimateInputs) {
    ui.label("Quick presets:");
    ui.horizontal_wrapped(|ui| {
        for preset in Preset::ALL {
            // Clicking the active preset again restores its values after edits.
            if ui.radio(inputs.preset == preset, preset.label()).clicked() {
                inputs.apply_preset(preset);
            }
        }
    });
}

/// Renders the herd size slider and the two selectors.
pub fn render_controls(ui: &mut egui::Ui, inputs: &mut EstimateInputs) {
    let mut herd = inputs.request.herd_size.get();
    if ui
        .add(
            egui::Slider::new(&mut herd, HERD_SIZE_MIN..=HERD_SIZE_MAX)
                .step_by(HERD_SIZE_STEP as f64)
                .text("Number of cows"),
        )
        .changed()
    {
        inputs.set_herd_size(HerdSize::clamped(herd));
    }

    ui.add_space(6.0);

    let mut location = inputs.request.location;
    egui::ComboBox::from_label("Location")
        .selected_text(location.label())
        .show_ui(ui, |ui| {
            for loc in Location::ALL {
                ui.selectable_value(&mut location, loc, loc.label());
            }
        });
    if location != inputs.request.location {
        inputs.set_location(location);
    }

    let mut horizon = inputs.request.horizon;
    egui::ComboBox::from_label("Prediction mode")
        .selected_text(horizon.label())
        .show_ui(ui, |ui| {
            for h in Horizon::ALL {
                ui.selectable_value(&mut horizon, h, h.label());
            }
        });
    if horizon != inputs.request.horizon {
        inputs.set_horizon(horizon);
    }

    ui.add_space(6.0);
    let loc = inputs.request.location;
    ui.colored_label(
        COLOR_MUTED,
        format!(
            "{} climate: {}, {:.0} ft³ CH4 per cow per day",
            loc.label(),
            loc.climate().label(),
            loc.ft3_per_cow_day()
        ),
    );
}

// =============================================================================
// Headline metrics
// =============================================================================

/// Renders the big methane number and the model accuracy metric.
pub fn render_headline(ui: &mut egui::Ui, metrics: &HeadlineMetrics) {
    ui.heading("Predicted methane emission");
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.small(&metrics.methane_label);
            ui.label(
                egui::RichText::new(&metrics.methane_value)
                    .size(30.0)
                    .strong()
                    .color(COLOR_METHANE),
            );
        });
        ui.add_space(32.0);
        ui.vertical(|ui| {
            ui.small("Model accuracy (validation)");
            ui.label(egui::RichText::new(MODEL_ACCURACY).size(30.0).strong());
            ui.colored_label(COLOR_MUTED, MODEL_ACCURACY_DETAIL);
        });
    });
}

/// Renders the energy and climate-impact equivalents.
pub fn render_equivalents(ui: &mut egui::Ui, metrics: &HeadlineMetrics) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new("Energy equivalent:").strong());
        ui.colored_label(COLOR_ENERGY, &metrics.energy);
        ui.separator();
        ui.label(egui::RichText::new("Climate impact:").strong());
        ui.colored_label(COLOR_IMPACT, &metrics.cars);
        ui.separator();
        ui.label(egui::RichText::new("CO₂-eq:").strong());
        ui.label(&metrics.co2eq);
    });
}

// =============================================================================
// Scenario chart
// =============================================================================

/// Renders the Cold/Mild/Warm comparison chart.
pub fn render_scenarios(ui: &mut egui::Ui, result: &EstimateResult) {
    ui.heading("How would climate change methane?");
    let width = ui.available_width().clamp(240.0, 520.0);
    draw_scenario_chart(ui, result, width, 180.0);
}
