//! Translation schema
//!
//! Every locale is a value of [`TranslationSchema`], so all catalog entries
//! share one key shape by construction. Only leaf strings differ.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TranslationSchema {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub form: FormStrings,
    pub workflow: WorkflowStrings,
    pub results: ResultStrings,
    pub sections: SectionStrings,
    pub footer: FooterStrings,
}

#[derive(Debug, Serialize)]
pub struct FormStrings {
    pub age: &'static str,
    pub sex: &'static str,
    pub male: &'static str,
    pub female: &'static str,
    pub chest_pain: &'static str,
    pub blood_pressure: &'static str,
    pub cholesterol: &'static str,
    pub fasting_sugar: &'static str,
    pub exercise_angina: &'static str,
    pub rest_ecg: &'static str,
    pub calculate: &'static str,
    pub calculating: &'static str,
    pub validation_error: &'static str,
    pub options: OptionLabels,
    pub tooltips: Tooltips,
}

#[derive(Debug, Serialize)]
pub struct OptionLabels {
    pub cp: ChestPainLabels,
    pub restecg: RestEcgLabels,
}

#[derive(Debug, Serialize)]
pub struct ChestPainLabels {
    pub typical_angina: &'static str,
    pub atypical_angina: &'static str,
    pub non_anginal: &'static str,
    pub asymptomatic: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RestEcgLabels {
    pub normal: &'static str,
    pub st_t_abnormality: &'static str,
    pub lv_hypertrophy: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Tooltips {
    pub cp: &'static str,
    pub trestbps: &'static str,
    pub chol: &'static str,
    pub fbs: &'static str,
    pub exang: &'static str,
    pub restecg: &'static str,
}

/// Strings for the request lifecycle (loading, empty state, failure)
#[derive(Debug, Serialize)]
pub struct WorkflowStrings {
    pub loading: &'static str,
    pub empty_state: &'static str,
    pub request_failed: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ResultStrings {
    pub heading: &'static str,
    pub probability: &'static str,
    pub low_risk: &'static str,
    pub high_risk: &'static str,
    pub recommendation: &'static str,
    pub translated_message_high: &'static str,
    pub translated_message_low: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SectionStrings {
    pub context: &'static str,
    pub context_body: &'static str,
    pub dataset: &'static str,
    pub dataset_body: &'static str,
    pub dataset_link: &'static str,
    pub features: &'static str,
    pub features_body: &'static str,
    pub importance: &'static str,
    pub importance_body: &'static str,
    pub disclaimer: &'static str,
    pub disclaimer_body: &'static str,
    pub feature_list: FeatureList,
    pub chart: ChartStrings,
    pub model: ModelStrings,
}

/// Selected-model section with its held-out evaluation metrics
#[derive(Debug, Serialize)]
pub struct ModelStrings {
    pub title: &'static str,
    pub body: &'static str,
    pub metrics: MetricLabels,
}

#[derive(Debug, Serialize)]
pub struct MetricLabels {
    pub accuracy: &'static str,
    pub precision: &'static str,
    pub recall: &'static str,
    pub f1: &'static str,
    pub roc_auc: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FeatureTranslation {
    pub label: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FeatureList {
    pub age: FeatureTranslation,
    pub sex: FeatureTranslation,
    pub cp: FeatureTranslation,
    pub trestbps: FeatureTranslation,
    pub chol: FeatureTranslation,
    pub fbs: FeatureTranslation,
    pub exang: FeatureTranslation,
    pub restecg: FeatureTranslation,
}

#[derive(Debug, Serialize)]
pub struct ChartStrings {
    pub value: &'static str,
    pub features: ChartFeatureLabels,
}

#[derive(Debug, Serialize)]
pub struct ChartFeatureLabels {
    pub cp: &'static str,
    pub age: &'static str,
    pub restecg: &'static str,
    pub exang: &'static str,
    pub trestbps: &'static str,
    pub chol: &'static str,
    pub fbs: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FooterStrings {
    pub contact: &'static str,
    pub mission: &'static str,
    pub social: &'static str,
    pub copyright: &'static str,
    pub privacy: &'static str,
    pub terms: &'static str,
}
