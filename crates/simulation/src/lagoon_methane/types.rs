//! Typed inputs and outputs of the lagoon methane estimate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constants::*;
use super::error::EstimateError;

// =============================================================================
// Herd size
// =============================================================================

/// Number of cows on the farm, guaranteed to lie in
/// `HERD_SIZE_MIN..=HERD_SIZE_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct HerdSize(u32);

impl HerdSize {
    pub const MIN: HerdSize = HerdSize(HERD_SIZE_MIN);
    pub const MAX: HerdSize = HerdSize(HERD_SIZE_MAX);

    /// Validate a raw herd size, rejecting values outside the modelled range.
    pub fn new(value: u32) -> Result<Self, EstimateError> {
        if (HERD_SIZE_MIN..=HERD_SIZE_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(EstimateError::HerdSizeOutOfRange {
                value,
                min: HERD_SIZE_MIN,
                max: HERD_SIZE_MAX,
            })
        }
    }

    /// Clamp a raw herd size into range. Used by the slider, which can never
    /// leave its bounds anyway.
    pub const fn clamped(value: u32) -> Self {
        if value < HERD_SIZE_MIN {
            Self(HERD_SIZE_MIN)
        } else if value > HERD_SIZE_MAX {
            Self(HERD_SIZE_MAX)
        } else {
            Self(value)
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for HerdSize {
    fn default() -> Self {
        Self(HERD_SIZE_DEFAULT)
    }
}

impl TryFrom<u32> for HerdSize {
    type Error = EstimateError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HerdSize> for u32 {
    fn from(herd: HerdSize) -> Self {
        herd.0
    }
}

// =============================================================================
// Climate
// =============================================================================

/// Climate class used for the scenario chart and to describe each site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Climate {
    Cold,
    Mild,
    Warm,
}

impl Climate {
    /// Chart order: Cold, Mild, Warm.
    pub const ALL: [Climate; 3] = [Climate::Cold, Climate::Mild, Climate::Warm];

    pub fn label(self) -> &'static str {
        match self {
            Climate::Cold => "Cold",
            Climate::Mild => "Mild",
            Climate::Warm => "Warm",
        }
    }

    /// Multiplier applied to the base estimate for this climate scenario.
    pub fn sensitivity(self) -> f64 {
        match self {
            Climate::Cold => COLD_SENSITIVITY,
            Climate::Mild => MILD_SENSITIVITY,
            Climate::Warm => WARM_SENSITIVITY,
        }
    }
}

// =============================================================================
// Location
// =============================================================================

/// One of the three illustrative dairy sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Location {
    Pullman,
    #[default]
    Lynden,
    Bakersfield,
}

impl Location {
    pub const ALL: [Location; 3] = [Location::Pullman, Location::Lynden, Location::Bakersfield];

    pub fn label(self) -> &'static str {
        match self {
            Location::Pullman => "Pullman",
            Location::Lynden => "Lynden",
            Location::Bakersfield => "Bakersfield",
        }
    }

    pub fn climate(self) -> Climate {
        match self {
            Location::Pullman => Climate::Cold,
            Location::Lynden => Climate::Mild,
            Location::Bakersfield => Climate::Warm,
        }
    }

    /// Climate/geography adjustment applied to `BASE_FT3_PER_COW_DAY`.
    pub fn emission_multiplier(self) -> f64 {
        match self {
            Location::Pullman => PULLMAN_MULTIPLIER,
            Location::Lynden => LYNDEN_MULTIPLIER,
            Location::Bakersfield => BAKERSFIELD_MULTIPLIER,
        }
    }

    /// Effective ft³ CH4 per cow per day at this site.
    pub fn ft3_per_cow_day(self) -> f64 {
        BASE_FT3_PER_COW_DAY * self.emission_multiplier()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Location {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .into_iter()
            .find(|loc| loc.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EstimateError::UnknownLocation(s.to_string()))
    }
}

// =============================================================================
// Horizon
// =============================================================================

/// Time span over which emissions are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizon {
    #[default]
    Day,
    Month,
    Year,
}

impl Horizon {
    pub const ALL: [Horizon; 3] = [Horizon::Day, Horizon::Month, Horizon::Year];

    pub fn label(self) -> &'static str {
        match self {
            Horizon::Day => "day",
            Horizon::Month => "month",
            Horizon::Year => "year",
        }
    }

    /// Number of days aggregated by this horizon.
    pub fn scale(self) -> f64 {
        match self {
            Horizon::Day => DAYS_PER_DAY,
            Horizon::Month => DAYS_PER_MONTH,
            Horizon::Year => DAYS_PER_YEAR,
        }
    }

    /// How many of these periods make up a year when annualizing the car
    /// equivalent. A month counts as a twelfth of a year here, not 30 days.
    pub fn periods_per_year(self) -> f64 {
        match self {
            Horizon::Day => 365.0,
            Horizon::Month => 12.0,
            Horizon::Year => 1.0,
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Horizon {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Horizon::ALL
            .into_iter()
            .find(|h| h.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EstimateError::UnknownHorizon(s.to_string()))
    }
}

// =============================================================================
// Request / result
// =============================================================================

/// The three validated inputs of one estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub herd_size: HerdSize,
    pub location: Location,
    pub horizon: Horizon,
}

impl EstimateRequest {
    pub fn new(herd_size: HerdSize, location: Location, horizon: Horizon) -> Self {
        Self {
            herd_size,
            location,
            horizon,
        }
    }
}

/// One point of the Cold/Mild/Warm scenario chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPoint {
    pub climate: Climate,
    pub methane_ft3: f64,
}

impl ScenarioPoint {
    pub fn label(&self) -> &'static str {
        self.climate.label()
    }
}

/// Everything the presenter shows for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// The request this result was computed from.
    pub request: EstimateRequest,
    /// CH4 volume over the selected horizon.
    pub methane_ft3: f64,
    /// Electricity obtainable from the captured CH4.
    pub energy_kwh: f64,
    /// CO2-equivalent mass of the CH4.
    pub co2eq_kg: f64,
    /// Annualized CO2-eq expressed as typical passenger cars.
    pub car_equivalent: f64,
    /// Cold, Mild, Warm variants of `methane_ft3`, always in that order.
    pub scenario_series: [ScenarioPoint; 3],
}

impl EstimateResult {
    /// Car equivalent rounded to a whole number, halves away from zero.
    /// This is the figure the poster displays.
    pub fn car_equivalent_rounded(&self) -> u64 {
        self.car_equivalent.round() as u64
    }

    /// Largest scenario value, used to scale the chart.
    pub fn scenario_max(&self) -> f64 {
        self.scenario_series
            .iter()
            .map(|p| p.methane_ft3)
            .fold(0.0_f64, f64::max)
    }
}
