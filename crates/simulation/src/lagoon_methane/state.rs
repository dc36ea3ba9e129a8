//! Resources holding the current inputs and the estimate derived from them.

use bevy::prelude::*;

use super::calculations::estimate;
use super::presets::Preset;
use super::types::{EstimateRequest, EstimateResult, HerdSize, Horizon, Location};

/// The values currently selected in the input controls.
///
/// This is the only state that survives between render passes. Any change to
/// it triggers a full recompute of [`CurrentEstimate`].
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EstimateInputs {
    /// Last preset picked; editing a control does not reset it.
    pub preset: Preset,
    pub request: EstimateRequest,
}

impl EstimateInputs {
    /// Inputs seeded from a preset at the default (daily) horizon.
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            preset,
            request: preset.request(Horizon::default()),
        }
    }

    /// Overwrite herd size and location from a preset, keeping the horizon.
    pub fn apply_preset(&mut self, preset: Preset) {
        self.preset = preset;
        self.request = preset.request(self.request.horizon);
    }

    pub fn set_herd_size(&mut self, herd_size: HerdSize) {
        self.request.herd_size = herd_size;
    }

    pub fn set_location(&mut self, location: Location) {
        self.request.location = location;
    }

    pub fn set_horizon(&mut self, horizon: Horizon) {
        self.request.horizon = horizon;
    }
}

/// The estimate for the current inputs, rebuilt whenever they change.
#[derive(Resource, Debug, Clone)]
pub struct CurrentEstimate {
    pub result: EstimateResult,
    /// Number of recomputations so far.
    pub revision: u64,
}

impl Default for CurrentEstimate {
    fn default() -> Self {
        Self {
            result: estimate(&EstimateRequest::default()),
            revision: 0,
        }
    }
}

/// Sent after every recompute with the fresh result.
#[derive(Event, Debug, Clone)]
pub struct EstimateUpdated {
    pub result: EstimateResult,
}
