//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use cardiacheck_application::WorkflowConfig;
use cardiacheck_domain::{DomainError, Locale, PredictionInput};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("endpoint.url cannot be empty")]
    EmptyEndpoint,

    #[error("endpoint.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("ui.width must be at least {min}, got {actual}")]
    WidthTooSmall { min: usize, actual: usize },

    #[error("ui.locale: {0}")]
    Locale(#[from] DomainError),

    #[error("form.age must be between {min} and {max}, got {actual}")]
    AgeOutOfRange { min: u32, max: u32, actual: u32 },

    #[error("form.{0} must be a finite number")]
    NonFiniteNumber(&'static str),
}

/// Raw endpoint configuration (`[endpoint]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Full URL of the `/predict` endpoint
    pub url: String,
    /// Per-attempt timeout in seconds
    pub timeout_seconds: u64,
    /// Retry once on network failures and timeouts
    pub retry_transient: bool,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            url: crate::http::DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: crate::http::DEFAULT_TIMEOUT.as_secs(),
            retry_transient: true,
        }
    }
}

impl FileEndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Raw UI configuration (`[ui]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUiConfig {
    /// Initial locale code (EN, AR, DE)
    pub locale: String,
    /// Delay before the result is revealed, in milliseconds
    pub reveal_delay_ms: u64,
    /// Enable colored terminal output
    pub color: bool,
    /// Render width used for alignment and charts
    pub width: usize,
}

impl FileUiConfig {
    pub const MIN_WIDTH: usize = 40;
}

impl Default for FileUiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En.as_str().to_string(),
            reveal_delay_ms: 100,
            color: true,
            width: 72,
        }
    }
}

/// Raw logging configuration (`[logging]` section)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Also write logs to this file
    pub file: Option<PathBuf>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub endpoint: FileEndpointConfig,
    pub ui: FileUiConfig,
    /// Initial form values
    pub form: PredictionInput,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.endpoint.url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }
        if self.endpoint.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.ui.width < FileUiConfig::MIN_WIDTH {
            return Err(ConfigValidationError::WidthTooSmall {
                min: FileUiConfig::MIN_WIDTH,
                actual: self.ui.width,
            });
        }

        self.locale()?;

        let age = self.form.age;
        if !(PredictionInput::MIN_AGE..=PredictionInput::MAX_AGE).contains(&age) {
            return Err(ConfigValidationError::AgeOutOfRange {
                min: PredictionInput::MIN_AGE,
                max: PredictionInput::MAX_AGE,
                actual: age,
            });
        }
        if !self.form.resting_blood_pressure.is_finite() {
            return Err(ConfigValidationError::NonFiniteNumber("resting_blood_pressure"));
        }
        if !self.form.serum_cholesterol.is_finite() {
            return Err(ConfigValidationError::NonFiniteNumber("serum_cholesterol"));
        }

        Ok(())
    }

    /// Parsed initial locale
    pub fn locale(&self) -> Result<Locale, DomainError> {
        self.ui.locale.parse()
    }

    /// Build the workflow parameters from this configuration
    pub fn workflow_config(&self) -> Result<WorkflowConfig, ConfigValidationError> {
        Ok(WorkflowConfig::default()
            .with_locale(self.locale()?)
            .with_inputs(self.form.clone())
            .with_reveal_delay(Duration::from_millis(self.ui.reveal_delay_ms)))
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardiacheck_domain::{ChestPainType, RestEcg, Sex};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[endpoint]
url = "http://localhost:8000/predict"
timeout_seconds = 5
retry_transient = false

[ui]
locale = "ar"
reveal_delay_ms = 0
color = false
width = 60

[form]
age = 63
sex = "Female"
chest_pain_type = "typical angina"
resting_blood_pressure = 145
serum_cholesterol = 233
fasting_blood_sugar_high = true
exercise_induced_angina = false
resting_ecg = "lv hypertrophy"

[logging]
file = "/tmp/cardiacheck.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoint.url, "http://localhost:8000/predict");
        assert_eq!(config.endpoint.timeout(), Duration::from_secs(5));
        assert!(!config.endpoint.retry_transient);
        assert_eq!(config.locale().unwrap(), Locale::Ar);
        assert!(!config.ui.color);
        assert_eq!(config.ui.width, 60);
        assert_eq!(config.form.age, 63);
        assert_eq!(config.form.sex, Sex::Female);
        assert_eq!(config.form.chest_pain_type, ChestPainType::TypicalAngina);
        assert_eq!(config.form.resting_blood_pressure, 145.0);
        assert!(config.form.fasting_blood_sugar_high);
        assert_eq!(config.form.resting_ecg, RestEcg::LvHypertrophy);
        assert_eq!(
            config.logging.file,
            Some(PathBuf::from("/tmp/cardiacheck.log"))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[form]
age = 45
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.form.age, 45);
        // Defaults should apply
        assert_eq!(config.form.sex, Sex::Male);
        assert_eq!(config.endpoint, FileEndpointConfig::default());
        assert_eq!(config.ui, FileUiConfig::default());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.endpoint.url, crate::http::DEFAULT_ENDPOINT);
        assert_eq!(config.endpoint.timeout_seconds, 30);
        assert!(config.endpoint.retry_transient);
        assert_eq!(config.ui.locale, "EN");
        assert_eq!(config.ui.reveal_delay_ms, 100);
        assert!(config.ui.color);
        assert!(config.logging.file.is_none());
        assert_eq!(config.form, PredictionInput::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_timeout_zero() {
        let mut config = FileConfig::default();
        config.endpoint.timeout_seconds = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_empty_endpoint() {
        let mut config = FileConfig::default();
        config.endpoint.url = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyEndpoint));
    }

    #[test]
    fn test_validate_unknown_locale() {
        let mut config = FileConfig::default();
        config.ui.locale = "fr".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::Locale(DomainError::UnsupportedLocale(_)))
        ));
    }

    #[test]
    fn test_validate_age_out_of_range() {
        let mut config = FileConfig::default();
        config.form.age = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::AgeOutOfRange { actual: 0, .. })
        ));
    }

    #[test]
    fn test_validate_narrow_width() {
        let mut config = FileConfig::default();
        config.ui.width = 10;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::WidthTooSmall { actual: 10, .. })
        ));
    }

    #[test]
    fn test_workflow_config_from_file() {
        let mut config = FileConfig::default();
        config.ui.locale = "de".to_string();
        config.ui.reveal_delay_ms = 0;
        config.form.age = 70;

        let workflow = config.workflow_config().unwrap();
        assert_eq!(workflow.initial_locale, Locale::De);
        assert_eq!(workflow.initial_inputs.age, 70);
        assert_eq!(workflow.reveal_delay, Duration::ZERO);
    }

    #[test]
    fn test_to_toml_round_trips_through_loader_format() {
        let config = FileConfig::default();
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[endpoint]"));
        assert!(rendered.contains("chest_pain_type = \"asymptomatic\""));
        let parsed: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
