//! Lagoon estimate panel.
//!
//! Layout follows the poster: a title bar with the quick presets, the input
//! controls in a left column, and the results on the right:
//! - headline methane volume for the selected horizon, plus model accuracy
//! - energy (kWh), climate impact (car-equivalents) and CO2-eq
//! - Cold/Mild/Warm scenario chart

mod panels;
pub mod types;
mod ui_system;

use bevy::prelude::*;
use simulation::lagoon_methane::EstimateSet;

pub use types::HeadlineMetrics;
pub use ui_system::{estimate_inputs_ui, estimate_results_ui};

/// Plugin that registers the estimate panel UI.
pub struct EstimatePanelPlugin;

impl Plugin for EstimatePanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                estimate_inputs_ui.before(EstimateSet::Recompute),
                estimate_results_ui.after(EstimateSet::Recompute),
            ),
        );
    }
}
