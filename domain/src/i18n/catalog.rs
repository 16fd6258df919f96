//! Translation catalog store
//!
//! [`TranslationCatalog`] owns one [`CatalogEntry`] per locale. Entries are
//! built once and never mutated; lookup is an array index.
//!
//! Option lists (sex, chest pain, resting ECG, feature list) are derived at
//! build time as ordered `{key, label}` sequences so every locale renders
//! its choices in the same order.

use super::locale::{Direction, Locale};
use super::schema::{FeatureTranslation, TranslationSchema};
use super::{ar::AR, de::DE, en::EN};
use crate::prediction::input::{ChestPainType, FieldName, RestEcg, Sex};
use std::sync::OnceLock;

/// One selectable option: the typed value and its localized label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption<T> {
    pub key: T,
    pub label: &'static str,
}

/// One item of the informational feature list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureListItem {
    pub key: FieldName,
    pub label: &'static str,
    pub desc: &'static str,
}

/// Complete localized content for one locale
#[derive(Debug)]
pub struct CatalogEntry {
    locale: Locale,
    schema: &'static TranslationSchema,
    sex_options: Vec<ChoiceOption<Sex>>,
    chest_pain_options: Vec<ChoiceOption<ChestPainType>>,
    rest_ecg_options: Vec<ChoiceOption<RestEcg>>,
    feature_list: Vec<FeatureListItem>,
}

impl CatalogEntry {
    fn build(locale: Locale, schema: &'static TranslationSchema) -> Self {
        let mut entry = Self {
            locale,
            schema,
            sex_options: Vec::new(),
            chest_pain_options: Vec::new(),
            rest_ecg_options: Vec::new(),
            feature_list: Vec::new(),
        };

        entry.sex_options = Sex::ALL
            .iter()
            .map(|&key| ChoiceOption {
                key,
                label: entry.sex_label(key),
            })
            .collect();
        entry.chest_pain_options = ChestPainType::ALL
            .iter()
            .map(|&key| ChoiceOption {
                key,
                label: entry.chest_pain_label(key),
            })
            .collect();
        entry.rest_ecg_options = RestEcg::ALL
            .iter()
            .map(|&key| ChoiceOption {
                key,
                label: entry.rest_ecg_label(key),
            })
            .collect();

        let list = &schema.sections.feature_list;
        let items: [(FieldName, &'static FeatureTranslation); 8] = [
            (FieldName::Age, &list.age),
            (FieldName::Sex, &list.sex),
            (FieldName::ChestPainType, &list.cp),
            (FieldName::RestingBloodPressure, &list.trestbps),
            (FieldName::SerumCholesterol, &list.chol),
            (FieldName::FastingBloodSugarHigh, &list.fbs),
            (FieldName::ExerciseInducedAngina, &list.exang),
            (FieldName::RestingEcg, &list.restecg),
        ];
        entry.feature_list = items
            .into_iter()
            .map(|(key, item)| FeatureListItem {
                key,
                label: item.label,
                desc: item.desc,
            })
            .collect();

        entry
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn direction(&self) -> Direction {
        self.locale.direction()
    }

    pub fn schema(&self) -> &'static TranslationSchema {
        self.schema
    }

    pub fn sex_options(&self) -> &[ChoiceOption<Sex>] {
        &self.sex_options
    }

    pub fn chest_pain_options(&self) -> &[ChoiceOption<ChestPainType>] {
        &self.chest_pain_options
    }

    pub fn rest_ecg_options(&self) -> &[ChoiceOption<RestEcg>] {
        &self.rest_ecg_options
    }

    pub fn feature_list(&self) -> &[FeatureListItem] {
        &self.feature_list
    }

    pub fn sex_label(&self, sex: Sex) -> &'static str {
        match sex {
            Sex::Male => self.schema.form.male,
            Sex::Female => self.schema.form.female,
        }
    }

    pub fn chest_pain_label(&self, cp: ChestPainType) -> &'static str {
        let labels = &self.schema.form.options.cp;
        match cp {
            ChestPainType::TypicalAngina => labels.typical_angina,
            ChestPainType::AtypicalAngina => labels.atypical_angina,
            ChestPainType::NonAnginal => labels.non_anginal,
            ChestPainType::Asymptomatic => labels.asymptomatic,
        }
    }

    pub fn rest_ecg_label(&self, ecg: RestEcg) -> &'static str {
        let labels = &self.schema.form.options.restecg;
        match ecg {
            RestEcg::Normal => labels.normal,
            RestEcg::StTAbnormality => labels.st_t_abnormality,
            RestEcg::LvHypertrophy => labels.lv_hypertrophy,
        }
    }

    /// Form label for a field
    pub fn field_label(&self, field: FieldName) -> &'static str {
        let form = &self.schema.form;
        match field {
            FieldName::Age => form.age,
            FieldName::Sex => form.sex,
            FieldName::ChestPainType => form.chest_pain,
            FieldName::RestingBloodPressure => form.blood_pressure,
            FieldName::SerumCholesterol => form.cholesterol,
            FieldName::FastingBloodSugarHigh => form.fasting_sugar,
            FieldName::ExerciseInducedAngina => form.exercise_angina,
            FieldName::RestingEcg => form.rest_ecg,
        }
    }

    /// Tooltip for a field, if the form shows one
    pub fn field_tooltip(&self, field: FieldName) -> Option<&'static str> {
        let tips = &self.schema.form.tooltips;
        match field {
            FieldName::Age | FieldName::Sex => None,
            FieldName::ChestPainType => Some(tips.cp),
            FieldName::RestingBloodPressure => Some(tips.trestbps),
            FieldName::SerumCholesterol => Some(tips.chol),
            FieldName::FastingBloodSugarHigh => Some(tips.fbs),
            FieldName::ExerciseInducedAngina => Some(tips.exang),
            FieldName::RestingEcg => Some(tips.restecg),
        }
    }
}

/// Fixed catalog of all supported locales
#[derive(Debug)]
pub struct TranslationCatalog {
    entries: [CatalogEntry; 3],
}

impl TranslationCatalog {
    pub fn new() -> Self {
        Self {
            entries: [
                CatalogEntry::build(Locale::En, &EN),
                CatalogEntry::build(Locale::Ar, &AR),
                CatalogEntry::build(Locale::De, &DE),
            ],
        }
    }

    /// Process-wide catalog, built on first use
    pub fn shared() -> &'static TranslationCatalog {
        static CATALOG: OnceLock<TranslationCatalog> = OnceLock::new();
        CATALOG.get_or_init(TranslationCatalog::new)
    }

    pub fn get(&self, locale: Locale) -> &CatalogEntry {
        let entry = &self.entries[locale.index()];
        assert_eq!(
            entry.locale, locale,
            "catalog entries out of order for {locale}"
        );
        entry
    }

    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}

impl Default for TranslationCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::collections::BTreeSet;

    /// Collect every key path of a JSON tree
    fn key_paths(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
        if let Value::Object(map) = value {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                out.insert(path.clone());
                key_paths(child, &path, out);
            }
        }
    }

    fn leaves(value: &Value, out: &mut Vec<String>) {
        match value {
            Value::Object(map) => map.values().for_each(|v| leaves(v, out)),
            Value::String(s) => out.push(s.clone()),
            _ => {}
        }
    }

    #[test]
    fn test_all_locales_share_key_shape() {
        let catalog = TranslationCatalog::new();
        let mut shapes = catalog.entries().map(|entry| {
            let json = serde_json::to_value(entry.schema()).unwrap();
            let mut paths = BTreeSet::new();
            key_paths(&json, "", &mut paths);
            (entry.locale(), paths)
        });

        let (_, reference) = shapes.next().unwrap();
        assert!(!reference.is_empty());
        for (locale, paths) in shapes {
            let missing: Vec<_> = reference.difference(&paths).collect();
            let extra: Vec<_> = paths.difference(&reference).collect();
            assert!(
                missing.is_empty() && extra.is_empty(),
                "{locale}: missing {missing:?}, extra {extra:?}"
            );
        }
    }

    #[test]
    fn test_no_empty_leaves() {
        let catalog = TranslationCatalog::new();
        for entry in catalog.entries() {
            let json = serde_json::to_value(entry.schema()).unwrap();
            let mut strings = Vec::new();
            leaves(&json, &mut strings);
            assert!(
                strings.iter().all(|s| !s.trim().is_empty()),
                "{} has an empty string",
                entry.locale()
            );
        }
    }

    #[test]
    fn test_get_returns_requested_locale() {
        let catalog = TranslationCatalog::new();
        for locale in Locale::ALL {
            assert_eq!(catalog.get(locale).locale(), locale);
        }
        assert_eq!(catalog.get(Locale::De).schema().form.calculate, "Berechnen");
        assert_eq!(catalog.get(Locale::Ar).direction(), Direction::RightToLeft);
    }

    #[test]
    fn test_option_order_is_identical_across_locales() {
        let catalog = TranslationCatalog::new();
        let cp_keys = |e: &CatalogEntry| e.chest_pain_options().iter().map(|o| o.key).collect::<Vec<_>>();
        let ecg_keys = |e: &CatalogEntry| e.rest_ecg_options().iter().map(|o| o.key).collect::<Vec<_>>();
        let feature_keys = |e: &CatalogEntry| e.feature_list().iter().map(|o| o.key).collect::<Vec<_>>();

        let en = catalog.get(Locale::En);
        for entry in catalog.entries() {
            assert_eq!(cp_keys(entry), cp_keys(en));
            assert_eq!(ecg_keys(entry), ecg_keys(en));
            assert_eq!(feature_keys(entry), feature_keys(en));
        }
        assert_eq!(cp_keys(en), ChestPainType::ALL.to_vec());
        assert_eq!(en.feature_list().len(), 8);
    }

    #[test]
    fn test_option_labels_are_localized() {
        let catalog = TranslationCatalog::new();
        let en = catalog.get(Locale::En);
        let de = catalog.get(Locale::De);

        assert_eq!(en.chest_pain_options()[2].label, "Non-anginal Pain");
        assert_eq!(de.chest_pain_options()[2].label, "Nicht-Angina Schmerz");
        assert_eq!(de.sex_options()[0].label, "Männlich");
        assert_eq!(en.rest_ecg_label(RestEcg::LvHypertrophy), "LV Hypertrophy");
    }

    #[test]
    fn test_tooltips_cover_clinical_fields() {
        let catalog = TranslationCatalog::new();
        for entry in catalog.entries() {
            assert!(entry.field_tooltip(FieldName::Age).is_none());
            assert!(entry.field_tooltip(FieldName::ChestPainType).is_some());
            assert!(entry.field_tooltip(FieldName::RestingEcg).is_some());
        }
    }

    #[test]
    fn test_shared_catalog_is_singleton() {
        let a = TranslationCatalog::shared() as *const _;
        let b = TranslationCatalog::shared() as *const _;
        assert_eq!(a, b);
    }
}
