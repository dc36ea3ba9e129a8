//! Pure estimate pipeline: request → methane volume → energy and climate impact.

use super::constants::*;
use super::types::*;

/// Methane produced per day by the herd at the given site, in ft³.
pub fn daily_methane_ft3(herd_size: HerdSize, location: Location) -> f64 {
    herd_size.get() as f64 * BASE_FT3_PER_COW_DAY * location.emission_multiplier()
}

/// Methane produced over the selected horizon, in ft³.
///
/// The daily figure is computed first and then scaled, so a year is exactly
/// 365 days' worth and a month exactly 30.
pub fn calculate_methane_ft3(request: &EstimateRequest) -> f64 {
    daily_methane_ft3(request.herd_size, request.location) * request.horizon.scale()
}

/// Electricity equivalent of a methane volume, in kWh.
pub fn calculate_energy_kwh(methane_ft3: f64) -> f64 {
    methane_ft3 * KWH_PER_FT3
}

/// CO2-equivalent mass of a methane volume, in kg.
pub fn calculate_co2eq_kg(methane_ft3: f64) -> f64 {
    methane_ft3 * CO2EQ_KG_PER_FT3
}

/// Number of typical cars emitting the same CO2 in a year.
///
/// The CO2-eq for one horizon period is annualized first (day ×365,
/// month ×12, year ×1) and then divided by one car's yearly emissions.
pub fn calculate_car_equivalent(co2eq_kg: f64, horizon: Horizon) -> f64 {
    co2eq_kg * horizon.periods_per_year() / CAR_CO2_KG_PER_YEAR
}

/// Cold/Mild/Warm variants of a methane estimate, in chart order.
pub fn scenario_series(methane_ft3: f64) -> [ScenarioPoint; 3] {
    Climate::ALL.map(|climate| ScenarioPoint {
        climate,
        methane_ft3: methane_ft3 * climate.sensitivity(),
    })
}

/// Run the full pipeline for one request.
pub fn estimate(request: &EstimateRequest) -> EstimateResult {
    let methane_ft3 = calculate_methane_ft3(request);
    let co2eq_kg = calculate_co2eq_kg(methane_ft3);
    EstimateResult {
        request: *request,
        methane_ft3,
        energy_kwh: calculate_energy_kwh(methane_ft3),
        co2eq_kg,
        car_equivalent: calculate_car_equivalent(co2eq_kg, request.horizon),
        scenario_series: scenario_series(methane_ft3),
    }
}
