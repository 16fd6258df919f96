//! Loading indicator shown while a prediction request is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner that clears itself when dropped
pub struct LoadingIndicator {
    bar: ProgressBar,
}

impl LoadingIndicator {
    /// Start spinning with a localized message
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Indicator that draws nothing (for --quiet and non-terminal output)
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }
}

impl Drop for LoadingIndicator {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
