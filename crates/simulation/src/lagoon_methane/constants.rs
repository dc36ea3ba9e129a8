//! Constants for the covered-lagoon methane estimate and its unit conversions.
//!
//! These are illustrative demo values, not calibrated coefficients.

/// Cubic feet of CH4 per cow per day before the location adjustment.
pub const BASE_FT3_PER_COW_DAY: f64 = 5.0;

/// Emission multiplier for Pullman (cold inland WA): 25 ft³/cow/day.
pub const PULLMAN_MULTIPLIER: f64 = 5.0;

/// Emission multiplier for Lynden (mild coastal WA): 30 ft³/cow/day.
pub const LYNDEN_MULTIPLIER: f64 = 6.0;

/// Emission multiplier for Bakersfield (warm CA, EPA digester data): 37 ft³/cow/day.
pub const BAKERSFIELD_MULTIPLIER: f64 = 7.4;

/// Horizon scale factors relative to one day.
pub const DAYS_PER_DAY: f64 = 1.0;
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

/// kWh of electricity per cubic foot of CH4 (very approximate).
pub const KWH_PER_FT3: f64 = 0.1;

/// kg of CO2-equivalent per cubic foot of CH4.
pub const CO2EQ_KG_PER_FT3: f64 = 0.52;

/// kg of CO2 emitted by one typical passenger car per year.
pub const CAR_CO2_KG_PER_YEAR: f64 = 4600.0;

/// Climate sensitivity factors for the scenario chart, relative to Mild.
pub const COLD_SENSITIVITY: f64 = 0.7;
pub const MILD_SENSITIVITY: f64 = 1.0;
pub const WARM_SENSITIVITY: f64 = 1.3;

/// Smallest herd the demo models.
pub const HERD_SIZE_MIN: u32 = 100;

/// Largest herd the demo models.
pub const HERD_SIZE_MAX: u32 = 20_000;

/// Slider increment for the herd size control.
pub const HERD_SIZE_STEP: u32 = 100;

/// Herd size used when no preset is chosen.
pub const HERD_SIZE_DEFAULT: u32 = 1_000;
