//! Prediction response value object

use serde::{Deserialize, Serialize};

/// Result of one successful inference request
///
/// `probability` drives every derived display attribute. `raw_message` is
/// the server's English text and is kept only for diagnostics; rendered
/// messages always come from the active catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Probability of heart disease, in `[0, 1]`
    pub probability: f64,
    /// Server-side class label (e.g. "Disease Present")
    pub predicted_label: String,
    /// Server-side message, never displayed
    pub raw_message: String,
}

impl PredictionResponse {
    pub fn new(probability: f64) -> Self {
        Self {
            probability,
            predicted_label: String::new(),
            raw_message: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.predicted_label = label.into();
        self
    }

    pub fn with_raw_message(mut self, message: impl Into<String>) -> Self {
        self.raw_message = message.into();
        self
    }

    /// Whether `p` is a usable probability
    pub fn is_valid_probability(p: f64) -> bool {
        p.is_finite() && (0.0..=1.0).contains(&p)
    }
}
