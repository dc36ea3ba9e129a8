//! # TestDemo: headless integration test harness for the lagoon demo
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` so tests can change inputs the
//! way the UI does and observe the recomputed estimate without a window.

use bevy::app::App;
use bevy::prelude::*;

use crate::lagoon_methane::{
    CurrentEstimate, EstimateInputs, EstimateResult, EstimateSet, EstimateUpdated, HerdSize,
    Horizon, Location, Preset,
};
use crate::SimulationPlugin;

/// Every `EstimateUpdated` event seen so far, oldest first.
#[derive(Resource, Default)]
pub struct RecordedEstimates(pub Vec<EstimateResult>);

fn record_estimates(
    mut events: EventReader<EstimateUpdated>,
    mut recorded: ResMut<RecordedEstimates>,
) {
    for event in events.read() {
        recorded.0.push(event.result.clone());
    }
}

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
pub struct TestDemo {
    app: App,
}

impl TestDemo {
    /// Build the app with default inputs and run the first update.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Build the app with inputs inserted before the plugin, so startup
    /// computes from them instead of the defaults.
    pub fn with_inputs(inputs: EstimateInputs) -> Self {
        Self::build(Some(inputs))
    }

    fn build(inputs: Option<EstimateInputs>) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        if let Some(inputs) = inputs {
            app.insert_resource(inputs);
        }
        app.add_plugins(SimulationPlugin);
        app.init_resource::<RecordedEstimates>();
        app.add_systems(Update, record_estimates.after(EstimateSet::Recompute));
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Input changes (mirrors what the UI panel does)
    // -----------------------------------------------------------------------

    pub fn set_herd_size(&mut self, herd: u32) -> &mut Self {
        self.inputs_mut().set_herd_size(HerdSize::clamped(herd));
        self
    }

    pub fn set_location(&mut self, location: Location) -> &mut Self {
        self.inputs_mut().set_location(location);
        self
    }

    pub fn set_horizon(&mut self, horizon: Horizon) -> &mut Self {
        self.inputs_mut().set_horizon(horizon);
        self
    }

    pub fn apply_preset(&mut self, preset: Preset) -> &mut Self {
        self.inputs_mut().apply_preset(preset);
        self
    }

    fn inputs_mut(&mut self) -> Mut<'_, EstimateInputs> {
        self.app.world_mut().resource_mut::<EstimateInputs>()
    }

    // -----------------------------------------------------------------------
    // Running and querying
    // -----------------------------------------------------------------------

    /// Run `n` app updates.
    pub fn tick(&mut self, n: u32) -> &mut Self {
        for _ in 0..n {
            self.app.update();
        }
        self
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn estimate(&self) -> &EstimateResult {
        &self.resource::<CurrentEstimate>().result
    }

    pub fn revision(&self) -> u64 {
        self.resource::<CurrentEstimate>().revision
    }

    pub fn recorded(&self) -> &[EstimateResult] {
        &self.resource::<RecordedEstimates>().0
    }
}
