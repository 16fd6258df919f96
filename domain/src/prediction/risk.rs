//! Presentation mappers: probability to risk tier, colour band and text
//!
//! The tier and the band are cut at different thresholds:
//! `p = 0.6` is a High tier but only a Warning band. Both boundaries are
//! exclusive on the upper side (`0.5` is Low, `0.7` is Warning, `0.3` is Safe).

use crate::i18n::schema::TranslationSchema;
use serde::{Deserialize, Serialize};

/// Tier threshold; the boundary itself is Low
pub const HIGH_RISK_THRESHOLD: f64 = 0.5;
/// Band thresholds
pub const DANGER_THRESHOLD: f64 = 0.7;
pub const WARNING_THRESHOLD: f64 = 0.3;

/// Binary risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::High => "high",
        }
    }

    pub fn is_high(&self) -> bool {
        matches!(self, RiskTier::High)
    }
}

/// Three-way colour band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Safe,
    Warning,
    Danger,
}

impl Band {
    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Safe => "safe",
            Band::Warning => "warning",
            Band::Danger => "danger",
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn risk_tier(p: f64) -> RiskTier {
    if p > HIGH_RISK_THRESHOLD {
        RiskTier::High
    } else {
        RiskTier::Low
    }
}

pub fn band_color(p: f64) -> Band {
    if p > DANGER_THRESHOLD {
        Band::Danger
    } else if p > WARNING_THRESHOLD {
        Band::Warning
    } else {
        Band::Safe
    }
}

/// Message template for the tier, taken from the catalog entry.
pub fn localized_message(tier: RiskTier, t: &TranslationSchema) -> &'static str {
    match tier {
        RiskTier::High => t.results.translated_message_high,
        RiskTier::Low => t.results.translated_message_low,
    }
}

/// Short tier label ("Higher Likelihood" / "Low Likelihood")
pub fn tier_label(tier: RiskTier, t: &TranslationSchema) -> &'static str {
    match tier {
        RiskTier::High => t.results.high_risk,
        RiskTier::Low => t.results.low_risk,
    }
}

/// `p * 100` with exactly two decimals, without a percent sign.
pub fn formatted_percent(p: f64) -> String {
    format!("{:.2}", p * 100.0)
}

/// All display attributes derived from one probability
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub probability: f64,
    pub percent: String,
    pub tier: RiskTier,
    pub band: Band,
    pub tier_label: &'static str,
    pub message: &'static str,
}

impl RiskAssessment {
    pub fn from_probability(p: f64, t: &TranslationSchema) -> Self {
        let tier = risk_tier(p);
        Self {
            probability: p,
            percent: formatted_percent(p),
            tier,
            band: band_color(p),
            tier_label: tier_label(tier, t),
            message: localized_message(tier, t),
        }
    }
}
