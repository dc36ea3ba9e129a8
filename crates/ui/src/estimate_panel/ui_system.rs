//! Estimate panel UI systems: the input column and the results area.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::lagoon_methane::{CurrentEstimate, EstimateInputs};

use super::panels;
use super::types::{HeadlineMetrics, CAPTION_TEXT, INTRO_TEXT};

/// Draws the title bar and the input column, writing back to
/// [`EstimateInputs`] only when a control actually changed so the recompute
/// is not triggered every frame.
pub fn estimate_inputs_ui(mut contexts: EguiContexts, mut inputs: ResMut<EstimateInputs>) {
    let ctx = contexts.ctx_mut();
    let mut draft = *inputs;

    egui::TopBottomPanel::top("lagoon_title").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.label(egui::RichText::new("GHG Lagoon Mini-Demo").size(26.0).strong());
        ui.label(INTRO_TEXT);
        ui.add_space(4.0);
        panels::render_presets(ui, &mut draft);
        ui.add_space(6.0);
    });

    egui::SidePanel::left("lagoon_inputs")
        .resizable(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            panels::render_controls(ui, &mut draft);
        });

    if draft != *inputs {
        info!(
            "Inputs changed: {} cows, {}, per {} (preset: {})",
            draft.request.herd_size.get(),
            draft.request.location,
            draft.request.horizon,
            draft.preset.key()
        );
        *inputs = draft;
    }
}

/// Draws the headline metrics, equivalents and scenario chart for the
/// current estimate.
pub fn estimate_results_ui(mut contexts: EguiContexts, current: Res<CurrentEstimate>) {
    let result = &current.result;
    let metrics = HeadlineMetrics::from_result(result);

    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        panels::render_headline(ui, &metrics);

        ui.add_space(8.0);
        ui.separator();

        panels::render_equivalents(ui, &metrics);

        ui.add_space(8.0);
        ui.separator();

        panels::render_scenarios(ui, result);

        ui.add_space(8.0);
        ui.small(CAPTION_TEXT);
    });
}
