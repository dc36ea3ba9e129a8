//! Covered-lagoon methane estimate for a dairy herd.
//!
//! Maps three inputs (herd size, site, time horizon) to an illustrative
//! methane volume and derives the figures shown on the poster:
//!
//! - methane: herd × 5 ft³/cow/day × site multiplier × horizon days
//! - electricity: 0.1 kWh per ft³
//! - CO2-eq: 0.52 kg per ft³, shown as passenger cars (4,600 kg/car/year)
//! - scenario chart: the same estimate under Cold (×0.7), Mild (×1.0) and
//!   Warm (×1.3) climates
//!
//! Sites: Pullman 25, Lynden 30 and Bakersfield 37 ft³/cow/day.
//!
//! The numbers are a placeholder for a calibrated kinetic model; only the
//! relative orderings and scaling laws are meaningful.

pub mod calculations;
pub mod constants;
pub mod error;
pub mod presets;
pub mod state;
pub mod systems;
pub mod types;

#[cfg(test)]
mod tests_calculations;

// Re-export all public items so callers can import from `lagoon_methane` directly.
pub use calculations::*;
pub use constants::*;
pub use error::*;
pub use presets::*;
pub use state::*;
pub use systems::*;
pub use types::*;

use bevy::prelude::*;

/// Ordering anchor for systems that touch [`EstimateInputs`].
///
/// Input systems run before `Recompute` so a change is reflected in the same
/// frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EstimateSet {
    Recompute,
}

pub struct LagoonMethanePlugin;

impl Plugin for LagoonMethanePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EstimateInputs>()
            .init_resource::<CurrentEstimate>()
            .add_event::<EstimateUpdated>()
            .add_systems(
                Update,
                recompute_estimate
                    .run_if(resource_changed::<EstimateInputs>)
                    .in_set(EstimateSet::Recompute),
            );
    }
}
