//! CLI command definitions

use cardiacheck_domain::{ChestPainType, FieldValue, Locale, RestEcg, Sex};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot predictions
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Form, result card and recommendation
    Full,
    /// One line: percent and risk tier
    Summary,
    /// JSON output
    Json,
}

/// CLI arguments for cardiacheck
#[derive(Parser, Debug)]
#[command(name = "cardiacheck")]
#[command(author, version, about = "Heart disease risk check against a remote prediction model")]
#[command(long_about = r#"
CardiaCheck sends eight clinical values to a heart disease prediction model
and shows the estimated probability, risk tier and a recommendation in
English, Arabic or German.

Unspecified fields keep their defaults (age 50, male, asymptomatic chest pain,
120 mm Hg, 200 mg/dl, normal resting ECG) or the values from [form] in the
configuration file.

Configuration files are loaded from (in priority order):
1. CARDIACHECK_* environment variables (e.g. CARDIACHECK_UI__LOCALE=AR)
2. --config <path>        Explicit config file
3. ./cardiacheck.toml     Project-level config
4. ~/.config/cardiacheck/config.toml   Global config

Example:
  cardiacheck --age 63 --sex female --cp "typical angina" --chol 233
  cardiacheck --locale ar --output summary
  cardiacheck --interactive
"#)]
pub struct Cli {
    /// Display language (EN, AR, DE)
    #[arg(short, long, value_name = "CODE")]
    pub locale: Option<Locale>,

    /// Age in years (1-120)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=120))]
    pub age: Option<u32>,

    /// Sex (male, female)
    #[arg(long)]
    pub sex: Option<Sex>,

    /// Chest pain type (typical-angina, atypical-angina, non-anginal, asymptomatic)
    #[arg(long, value_name = "TYPE")]
    pub cp: Option<ChestPainType>,

    /// Resting blood pressure in mm Hg
    #[arg(long, value_name = "MMHG")]
    pub trestbps: Option<f64>,

    /// Serum cholesterol in mg/dl
    #[arg(long, value_name = "MGDL")]
    pub chol: Option<f64>,

    /// Fasting blood sugar above 120 mg/dl
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub fbs: Option<bool>,

    /// Exercise-induced angina
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub exang: Option<bool>,

    /// Resting ECG (normal, st-t-abnormality, lv-hypertrophy)
    #[arg(long, value_name = "RESULT")]
    pub restecg: Option<RestEcg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Start the interactive form
    #[arg(short, long)]
    pub interactive: bool,

    /// Show the informational sections and exit
    #[arg(long)]
    pub info: bool,

    /// Override the prediction endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Field values given on the command line, in form order
    pub fn field_overrides(&self) -> Vec<FieldValue> {
        [
            self.age.map(FieldValue::Age),
            self.sex.map(FieldValue::Sex),
            self.cp.map(FieldValue::ChestPainType),
            self.trestbps.map(FieldValue::RestingBloodPressure),
            self.chol.map(FieldValue::SerumCholesterol),
            self.fbs.map(FieldValue::FastingBloodSugarHigh),
            self.exang.map(FieldValue::ExerciseInducedAngina),
            self.restecg.map(FieldValue::RestingEcg),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cardiacheck"]).unwrap();
        assert!(cli.locale.is_none());
        assert_eq!(cli.output, OutputFormat::Full);
        assert!(!cli.interactive);
        assert!(cli.field_overrides().is_empty());
    }

    #[test]
    fn test_field_flags() {
        let cli = Cli::try_parse_from([
            "cardiacheck",
            "--age",
            "63",
            "--sex",
            "female",
            "--cp",
            "typical angina",
            "--trestbps",
            "145",
            "--fbs",
            "--exang",
            "false",
            "--restecg",
            "st-t-abnormality",
        ])
        .unwrap();

        assert_eq!(
            cli.field_overrides(),
            vec![
                FieldValue::Age(63),
                FieldValue::Sex(Sex::Female),
                FieldValue::ChestPainType(ChestPainType::TypicalAngina),
                FieldValue::RestingBloodPressure(145.0),
                FieldValue::FastingBloodSugarHigh(true),
                FieldValue::ExerciseInducedAngina(false),
                FieldValue::RestingEcg(RestEcg::StTAbnormality),
            ]
        );
    }

    #[test]
    fn test_age_range_enforced() {
        assert!(Cli::try_parse_from(["cardiacheck", "--age", "0"]).is_err());
        assert!(Cli::try_parse_from(["cardiacheck", "--age", "121"]).is_err());
        assert!(Cli::try_parse_from(["cardiacheck", "--age", "120"]).is_ok());
    }

    #[test]
    fn test_locale_flag() {
        let cli = Cli::try_parse_from(["cardiacheck", "--locale", "ar-EG"]).unwrap();
        assert_eq!(cli.locale, Some(Locale::Ar));
        assert!(Cli::try_parse_from(["cardiacheck", "--locale", "fr"]).is_err());
    }

    #[test]
    fn test_invalid_choice_rejected() {
        assert!(Cli::try_parse_from(["cardiacheck", "--cp", "sharp"]).is_err());
    }

    #[test]
    fn test_output_and_verbosity() {
        let cli = Cli::try_parse_from(["cardiacheck", "-o", "json", "-vv", "-q"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }
}
