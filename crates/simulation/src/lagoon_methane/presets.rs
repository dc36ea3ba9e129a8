//! Quick presets: named starting farms for the poster demo.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constants::HERD_SIZE_DEFAULT;
use super::error::EstimateError;
use super::types::{EstimateRequest, HerdSize, Horizon, Location};

/// A named farm that seeds the herd size and location controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Custom,
    Small,
    Medium,
    Large,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Custom, Preset::Small, Preset::Medium, Preset::Large];

    /// Text shown on the preset radio button.
    pub fn label(self) -> &'static str {
        match self {
            Preset::Custom => "Custom",
            Preset::Small => "Small WA Dairy (Pullman)",
            Preset::Medium => "Medium WA Dairy (Lynden)",
            Preset::Large => "Large CA Dairy (Bakersfield)",
        }
    }

    /// Short name accepted by the headless protocol.
    pub fn key(self) -> &'static str {
        match self {
            Preset::Custom => "custom",
            Preset::Small => "small",
            Preset::Medium => "medium",
            Preset::Large => "large",
        }
    }

    pub fn herd_size(self) -> HerdSize {
        match self {
            Preset::Custom => HerdSize::clamped(HERD_SIZE_DEFAULT),
            Preset::Small => HerdSize::clamped(500),
            Preset::Medium => HerdSize::clamped(2_000),
            Preset::Large => HerdSize::clamped(15_500),
        }
    }

    pub fn location(self) -> Location {
        match self {
            Preset::Custom | Preset::Medium => Location::Lynden,
            Preset::Small => Location::Pullman,
            Preset::Large => Location::Bakersfield,
        }
    }

    /// Build the request this preset stands for at the given horizon.
    pub fn request(self, horizon: Horizon) -> EstimateRequest {
        EstimateRequest::new(self.herd_size(), self.location(), horizon)
    }
}

impl FromStr for Preset {
    type Err = EstimateError;

    /// Accepts either the short key (`small`) or the full label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Preset::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(s) || p.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| EstimateError::UnknownPreset(s.to_string()))
    }
}
