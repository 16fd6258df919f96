//! Domain layer for cardiacheck
//!
//! This crate contains the clinical input model, the prediction response,
//! the request lifecycle state, the pure risk mappers and the translation
//! catalog. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Risk tier**: binary High/Low classification at the 0.5 threshold
//! - **Band**: three-way danger/warning/safe classification, independent of the tier
//! - **Catalog entry**: the complete localized content tree for one locale

pub mod core;
pub mod i18n;
pub mod prediction;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use i18n::{
    CatalogEntry, ChoiceOption, Direction, FeatureListItem, Locale, TranslationCatalog,
    TranslationSchema,
};
pub use prediction::{
    importance::{
        ChartFeature, FEATURE_IMPORTANCE, HIGHLIGHTED_FEATURES, MODEL_METRICS, ModelMetric,
    },
    input::{ChestPainType, FieldName, FieldValue, PredictionInput, RestEcg, Sex},
    response::PredictionResponse,
    risk::{
        Band, RiskAssessment, RiskTier, band_color, formatted_percent, localized_message,
        risk_tier, tier_label,
    },
    state::RequestState,
};
