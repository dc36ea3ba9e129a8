//! Display-ready values for the estimate panel.

use simulation::lagoon_methane::EstimateResult;

use crate::formatting::fmt_thousands;

/// Static validation figures quoted from the full model's paper.
pub const MODEL_ACCURACY: &str = "≈93%";
pub const MODEL_ACCURACY_DETAIL: &str = "R² ≈ 0.95, MAPE ≈ 6.8%";

pub const INTRO_TEXT: &str = "Play with herd size and location to see how a covered lagoon could \
change methane emissions. This is a simplified preview of the full kinetic + LSTM + Spiking \
Neural Network model.";

pub const CAPTION_TEXT: &str = "Demo model only. The full system uses experimental data, lagoon \
kinetics (first-order + Arrhenius), and a hybrid LSTM + Spiking Neural Network to refine these \
predictions.";

/// Headline strings derived from one estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineMetrics {
    /// e.g. "Methane emission (day)"
    pub methane_label: String,
    /// e.g. "25,000 ft³"
    pub methane_value: String,
    /// e.g. "~2,500 kWh"
    pub energy: String,
    /// e.g. "~13,000 kg"
    pub co2eq: String,
    /// e.g. "~1,032 car-equivalents"
    pub cars: String,
}

impl HeadlineMetrics {
    pub fn from_result(result: &EstimateResult) -> Self {
        Self {
            methane_label: format!("Methane emission ({})", result.request.horizon.label()),
            methane_value: format!("{} ft³", fmt_thousands(result.methane_ft3)),
            energy: format!("~{} kWh", fmt_thousands(result.energy_kwh)),
            co2eq: format!("~{} kg", fmt_thousands(result.co2eq_kg)),
            cars: format!(
                "~{} car-equivalents",
                fmt_thousands(result.car_equivalent_rounded() as f64)
            ),
        }
    }
}
