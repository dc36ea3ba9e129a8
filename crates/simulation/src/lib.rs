use bevy::prelude::*;

pub mod agent_protocol;
pub mod agent_session;
pub mod lagoon_methane;

#[cfg(test)]
pub mod test_harness;

/// Estimator core: holds the current inputs and keeps the estimate in sync.
///
/// Contains no rendering or UI, so it runs the same under `DefaultPlugins`
/// and under `MinimalPlugins` (headless sessions and tests).
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(lagoon_methane::LagoonMethanePlugin);
    }
}
