//! ECS systems for the lagoon methane estimate.

use bevy::prelude::*;

use super::calculations::estimate;
use super::state::{CurrentEstimate, EstimateInputs, EstimateUpdated};

/// Recomputes the estimate from the current inputs.
///
/// Gated on `resource_changed::<EstimateInputs>`, so it runs once at startup
/// (the resource is freshly added) and once per input change afterwards.
pub fn recompute_estimate(
    inputs: Res<EstimateInputs>,
    mut current: ResMut<CurrentEstimate>,
    mut updated: EventWriter<EstimateUpdated>,
) {
    let result = estimate(&inputs.request);

    debug!(
        "Estimate: {} cows at {} per {} -> {:.0} ft3, {:.0} kWh, {:.1} cars",
        result.request.herd_size.get(),
        result.request.location,
        result.request.horizon,
        result.methane_ft3,
        result.energy_kwh,
        result.car_equivalent
    );

    current.result = result.clone();
    current.revision += 1;
    updated.send(EstimateUpdated { result });
}
