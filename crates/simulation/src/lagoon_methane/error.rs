// ---------------------------------------------------------------------------
// EstimateError: validation failures at the input boundary
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors raised while turning raw inputs into an [`EstimateRequest`].
///
/// The calculator itself is total over the typed domain, so every variant
/// here describes a value that was rejected before it reached `estimate`.
///
/// [`EstimateRequest`]: super::EstimateRequest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    /// Herd size outside the modelled range.
    HerdSizeOutOfRange { value: u32, min: u32, max: u32 },
    /// Location name that is not one of the three sites.
    UnknownLocation(String),
    /// Horizon name other than day/month/year.
    UnknownHorizon(String),
    /// Preset name that does not match any quick preset.
    UnknownPreset(String),
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateError::HerdSizeOutOfRange { value, min, max } => write!(
                f,
                "Herd size {value} is out of range: must be between {min} and {max} cows"
            ),
            EstimateError::UnknownLocation(name) => {
                write!(
                    f,
                    "Unknown location '{name}': expected Pullman, Lynden or Bakersfield"
                )
            }
            EstimateError::UnknownHorizon(name) => {
                write!(f, "Unknown horizon '{name}': expected day, month or year")
            }
            EstimateError::UnknownPreset(name) => {
                write!(
                    f,
                    "Unknown preset '{name}': expected custom, small, medium or large"
                )
            }
        }
    }
}

impl std::error::Error for EstimateError {}
