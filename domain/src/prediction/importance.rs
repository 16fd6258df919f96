//! Fixed figures shown in the informational section: SHAP feature importance
//! and the evaluation metrics of the selected model.
//!
//! The figures are published with the model; labels come from the catalog
//! entry so both blocks render in every locale.

use crate::i18n::schema::{ChartFeatureLabels, MetricLabels};

/// Features that appear on the importance chart, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartFeature {
    ChestPain,
    Age,
    RestEcg,
    ExerciseAngina,
    BloodPressure,
    Cholesterol,
    FastingSugar,
}

impl ChartFeature {
    pub fn label(&self, labels: &ChartFeatureLabels) -> &'static str {
        match self {
            ChartFeature::ChestPain => labels.cp,
            ChartFeature::Age => labels.age,
            ChartFeature::RestEcg => labels.restecg,
            ChartFeature::ExerciseAngina => labels.exang,
            ChartFeature::BloodPressure => labels.trestbps,
            ChartFeature::Cholesterol => labels.chol,
            ChartFeature::FastingSugar => labels.fbs,
        }
    }
}

/// Number of leading bars drawn highlighted
pub const HIGHLIGHTED_FEATURES: usize = 2;

pub const FEATURE_IMPORTANCE: [(ChartFeature, f64); 7] = [
    (ChartFeature::ChestPain, 0.82),
    (ChartFeature::Age, 0.65),
    (ChartFeature::RestEcg, 0.44),
    (ChartFeature::ExerciseAngina, 0.38),
    (ChartFeature::BloodPressure, 0.31),
    (ChartFeature::Cholesterol, 0.22),
    (ChartFeature::FastingSugar, 0.12),
];

/// Evaluation metrics of the selected model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelMetric {
    Accuracy,
    Precision,
    Recall,
    F1,
    RocAuc,
}

impl ModelMetric {
    pub fn label(&self, labels: &MetricLabels) -> &'static str {
        match self {
            ModelMetric::Accuracy => labels.accuracy,
            ModelMetric::Precision => labels.precision,
            ModelMetric::Recall => labels.recall,
            ModelMetric::F1 => labels.f1,
            ModelMetric::RocAuc => labels.roc_auc,
        }
    }
}

pub const MODEL_METRICS: [(ModelMetric, f64); 5] = [
    (ModelMetric::Accuracy, 0.7899),
    (ModelMetric::Precision, 0.8133),
    (ModelMetric::Recall, 0.8026),
    (ModelMetric::F1, 0.8079),
    (ModelMetric::RocAuc, 0.8517),
];
