//! Unit tests for the estimate pipeline and its constants.

use super::calculations::*;
use super::constants::*;
use super::types::*;

fn request(herd: u32, location: Location, horizon: Horizon) -> EstimateRequest {
    EstimateRequest::new(HerdSize::new(herd).unwrap(), location, horizon)
}

fn assert_close(actual: f64, expected: f64) {
    let tolerance = expected.abs().max(1.0) * 1e-12;
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

// -------------------------------------------------------------------------
// Constants verification tests
// -------------------------------------------------------------------------

#[test]
fn test_constants_strictly_positive() {
    for c in [
        BASE_FT3_PER_COW_DAY,
        PULLMAN_MULTIPLIER,
        LYNDEN_MULTIPLIER,
        BAKERSFIELD_MULTIPLIER,
        KWH_PER_FT3,
        CO2EQ_KG_PER_FT3,
        CAR_CO2_KG_PER_YEAR,
        COLD_SENSITIVITY,
        MILD_SENSITIVITY,
        WARM_SENSITIVITY,
    ] {
        assert!(c > 0.0, "constant {c} must be positive");
    }
}

#[test]
fn test_location_multiplier_ordering() {
    assert!(PULLMAN_MULTIPLIER < LYNDEN_MULTIPLIER);
    assert!(LYNDEN_MULTIPLIER < BAKERSFIELD_MULTIPLIER);
}

#[test]
fn test_effective_site_rates() {
    assert_close(Location::Pullman.ft3_per_cow_day(), 25.0);
    assert_close(Location::Lynden.ft3_per_cow_day(), 30.0);
    assert_close(Location::Bakersfield.ft3_per_cow_day(), 37.0);
}

#[test]
fn test_sensitivity_ordering() {
    assert!(COLD_SENSITIVITY < MILD_SENSITIVITY);
    assert!(MILD_SENSITIVITY < WARM_SENSITIVITY);
    assert!((MILD_SENSITIVITY - 1.0).abs() < f64::EPSILON);
}

// -------------------------------------------------------------------------
// Methane volume
// -------------------------------------------------------------------------

#[test]
fn test_methane_example_pullman_day() {
    let result = estimate(&request(1000, Location::Pullman, Horizon::Day));
    let expected = 1000.0 * BASE_FT3_PER_COW_DAY * PULLMAN_MULTIPLIER * 1.0;
    assert_close(result.methane_ft3, expected);
    assert_close(result.methane_ft3, 25_000.0);
}

#[test]
fn test_methane_bakersfield_year() {
    // 15,500 cows * 37 ft³ * 365 days
    let result = estimate(&request(15_500, Location::Bakersfield, Horizon::Year));
    assert_close(result.methane_ft3, 15_500.0 * 37.0 * 365.0);
}

#[test]
fn test_methane_monotonic_in_herd_size() {
    for location in Location::ALL {
        for horizon in Horizon::ALL {
            let mut previous = f64::NEG_INFINITY;
            for herd in (HERD_SIZE_MIN..=HERD_SIZE_MAX).step_by(37) {
                let value = calculate_methane_ft3(&request(herd, location, horizon));
                assert!(
                    value > previous,
                    "{location}/{horizon}: {herd} cows gave {value}, not above {previous}"
                );
                previous = value;
            }
        }
    }
}

#[test]
fn test_methane_adjacent_herd_sizes_differ() {
    let a = calculate_methane_ft3(&request(19_999, Location::Bakersfield, Horizon::Year));
    let b = calculate_methane_ft3(&request(20_000, Location::Bakersfield, Horizon::Year));
    assert!(b > a);
}

#[test]
fn test_methane_location_ordering() {
    let pullman = calculate_methane_ft3(&request(2000, Location::Pullman, Horizon::Month));
    let lynden = calculate_methane_ft3(&request(2000, Location::Lynden, Horizon::Month));
    let bakersfield = calculate_methane_ft3(&request(2000, Location::Bakersfield, Horizon::Month));
    assert!(pullman < lynden);
    assert!(lynden < bakersfield);
}

// -------------------------------------------------------------------------
// Horizon scaling
// -------------------------------------------------------------------------

#[test]
fn test_year_is_day_times_365() {
    for location in Location::ALL {
        for herd in [100, 1000, 7300, 20_000] {
            let day = calculate_methane_ft3(&request(herd, location, Horizon::Day));
            let year = calculate_methane_ft3(&request(herd, location, Horizon::Year));
            assert_close(year, day * 365.0);
        }
    }
}

#[test]
fn test_month_is_day_times_30() {
    for location in Location::ALL {
        for herd in [100, 1000, 7300, 20_000] {
            let day = calculate_methane_ft3(&request(herd, location, Horizon::Day));
            let month = calculate_methane_ft3(&request(herd, location, Horizon::Month));
            assert_close(month, day * 30.0);
        }
    }
}

// -------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------

#[test]
fn test_energy_kwh_conversion() {
    assert_close(calculate_energy_kwh(25_000.0), 2_500.0);
    assert_close(calculate_energy_kwh(0.0), 0.0);
}

#[test]
fn test_co2eq_conversion() {
    assert_close(calculate_co2eq_kg(1_000.0), 520.0);
}

#[test]
fn test_car_equivalent_year_not_annualized() {
    // 4,600 kg CO2-eq over a year is exactly one car.
    assert_close(calculate_car_equivalent(4_600.0, Horizon::Year), 1.0);
}

#[test]
fn test_car_equivalent_day_annualized() {
    assert_close(calculate_car_equivalent(4_600.0, Horizon::Day), 365.0);
}

#[test]
fn test_car_equivalent_month_annualized_by_twelve() {
    assert_close(calculate_car_equivalent(4_600.0, Horizon::Month), 12.0);
}

#[test]
fn test_car_equivalent_example() {
    // 1000 cows at Pullman per day: 25,000 ft³ -> 13,000 kg CO2-eq/day
    // -> 4,745,000 kg/year -> about 1031.5 cars, shown as 1032.
    let result = estimate(&request(1000, Location::Pullman, Horizon::Day));
    assert_close(result.co2eq_kg, 13_000.0);
    assert_close(result.car_equivalent, 13_000.0 * 365.0 / 4_600.0);
    assert_eq!(result.car_equivalent_rounded(), 1032);
}

#[test]
fn test_car_equivalent_exact_half_rounds_up() {
    // 2,300 cows at Pullman per day -> 29,900 kg/day -> exactly 2,372.5 cars
    let result = estimate(&request(2300, Location::Pullman, Horizon::Day));
    assert_eq!(result.car_equivalent, 2372.5);
    assert_eq!(result.car_equivalent_rounded(), 2373);
}

#[test]
fn test_energy_matches_methane() {
    let result = estimate(&request(2000, Location::Lynden, Horizon::Month));
    assert_close(result.energy_kwh, result.methane_ft3 * KWH_PER_FT3);
}

// -------------------------------------------------------------------------
// Scenario series
// -------------------------------------------------------------------------

#[test]
fn test_scenario_series_labels_and_order() {
    let series = scenario_series(10_000.0);
    let labels: Vec<&str> = series.iter().map(|p| p.label()).collect();
    assert_eq!(labels, vec!["Cold", "Mild", "Warm"]);
}

#[test]
fn test_scenario_series_values() {
    let series = scenario_series(10_000.0);
    assert_close(series[0].methane_ft3, 7_000.0);
    assert_close(series[1].methane_ft3, 10_000.0);
    assert_close(series[2].methane_ft3, 13_000.0);
}

#[test]
fn test_scenario_series_non_decreasing_for_all_inputs() {
    for location in Location::ALL {
        for horizon in Horizon::ALL {
            let result = estimate(&request(HERD_SIZE_MIN, location, horizon));
            let s = &result.scenario_series;
            assert!(s[0].methane_ft3 <= s[1].methane_ft3);
            assert!(s[1].methane_ft3 <= s[2].methane_ft3);
        }
    }
}

#[test]
fn test_scenario_mild_equals_headline() {
    let result = estimate(&request(4200, Location::Bakersfield, Horizon::Day));
    assert_eq!(result.scenario_series[1].methane_ft3, result.methane_ft3);
    assert!((result.scenario_max() - result.scenario_series[2].methane_ft3).abs() < f64::EPSILON);
}

// -------------------------------------------------------------------------
// Whole-pipeline properties
// -------------------------------------------------------------------------

#[test]
fn test_all_outputs_non_negative_and_finite() {
    for location in Location::ALL {
        for horizon in Horizon::ALL {
            for herd in [HERD_SIZE_MIN, HERD_SIZE_DEFAULT, HERD_SIZE_MAX] {
                let r = estimate(&request(herd, location, horizon));
                for v in [r.methane_ft3, r.energy_kwh, r.co2eq_kg, r.car_equivalent] {
                    assert!(v.is_finite() && v >= 0.0, "bad value {v}");
                }
                for p in r.scenario_series {
                    assert!(p.methane_ft3.is_finite() && p.methane_ft3 >= 0.0);
                }
            }
        }
    }
}

#[test]
fn test_boundaries_scale_exactly() {
    let low = estimate(&request(HERD_SIZE_MIN, Location::Lynden, Horizon::Year));
    let high = estimate(&request(HERD_SIZE_MAX, Location::Lynden, Horizon::Year));
    assert_close(low.methane_ft3, 100.0 * 30.0 * 365.0);
    assert_close(high.methane_ft3, 20_000.0 * 30.0 * 365.0);
    assert_close(high.methane_ft3 / low.methane_ft3, 200.0);
}

#[test]
fn test_estimate_is_deterministic() {
    let req = request(12_345, Location::Bakersfield, Horizon::Month);
    let a = estimate(&req);
    let b = estimate(&req);
    assert_eq!(a, b);
    assert_eq!(a.methane_ft3.to_bits(), b.methane_ft3.to_bits());
    assert_eq!(a.car_equivalent.to_bits(), b.car_equivalent.to_bits());
}

#[test]
fn test_estimate_echoes_request() {
    let req = request(800, Location::Pullman, Horizon::Year);
    assert_eq!(estimate(&req).request, req);
}
