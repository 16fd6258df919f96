//! Workflow parameters: initial state and UI timing.
//!
//! [`WorkflowConfig`] groups the static parameters the
//! [`PredictionWorkflow`](crate::use_cases::prediction_workflow::PredictionWorkflow)
//! starts from. These are application-layer concerns, not domain policy.

use cardiacheck_domain::{Locale, PredictionInput};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default delay between a successful response and revealing the result
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Locale selected when the workflow starts
    pub initial_locale: Locale,
    /// Form values the workflow starts from
    pub initial_inputs: PredictionInput,
    /// Wait before revealing the result, so layout can settle
    pub reveal_delay: Duration,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            initial_locale: Locale::En,
            initial_inputs: PredictionInput::default(),
            reveal_delay: DEFAULT_REVEAL_DELAY,
        }
    }
}

impl WorkflowConfig {
    // ==================== Builder Methods ====================

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.initial_locale = locale;
        self
    }

    pub fn with_inputs(mut self, inputs: PredictionInput) -> Self {
        self.initial_inputs = inputs;
        self
    }

    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }
}
