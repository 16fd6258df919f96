use super::schema::*;

pub static DE: TranslationSchema = TranslationSchema {
    title: "CardiaCheck AI",
    subtitle: "Fortgeschrittene Herzrisiko-Bewertung",
    form: FormStrings {
        age: "Alter (Jahre)",
        sex: "Geschlecht",
        male: "Männlich",
        female: "Weiblich",
        chest_pain: "Brustschmerz-Typ",
        blood_pressure: "Ruhe-Blutdruck (mm Hg)",
        cholesterol: "Serum-Cholesterin (mg/dl)",
        fasting_sugar: "Nüchternblutzucker > 120 mg/dl",
        exercise_angina: "Belastungsinduzierte Angina",
        rest_ecg: "Ruhe-EKG-Ergebnisse",
        calculate: "Berechnen",
        calculating: "Berechnung läuft...",
        validation_error: "Bitte füllen Sie alle Felder korrekt aus.",
        options: OptionLabels {
            cp: ChestPainLabels {
                typical_angina: "Typische Angina",
                atypical_angina: "Atypische Angina",
                non_anginal: "Nicht-Angina Schmerz",
                asymptomatic: "Asymptomatisch",
            },
            restecg: RestEcgLabels {
                normal: "Normal",
                st_t_abnormality: "ST-T Wellen-Anomalie",
                lv_hypertrophy: "LV Hypertrophie",
            },
        },
        tooltips: Tooltips {
            cp: "Typische Angina ist ein Druckgefühl in der Brust, das bei Belastung auftritt und in Ruhe nachlässt; asymptomatisch bedeutet keine Brustschmerzen.",
            trestbps: "In Ruhe bei der Aufnahme gemessener Blutdruck in Millimeter Quecksilbersäule.",
            chol: "Gesamtcholesterin im Blutserum in Milligramm pro Deziliter.",
            fbs: "Auswählen, wenn der Blutzucker nach nächtlichem Fasten über 120 mg/dl lag.",
            exang: "Auswählen, wenn Brustschmerzen bei körperlicher Belastung auftreten.",
            restecg: "Ergebnis des in Ruhe aufgezeichneten Elektrokardiogramms.",
        },
    },
    workflow: WorkflowStrings {
        loading: "Medizinische Daten werden analysiert...",
        empty_state: "Füllen Sie das Formular aus, um hier Ihre Ergebnisse zu sehen",
        request_failed: "Verbindung zum Vorhersageserver fehlgeschlagen. Bitte versuchen Sie es später erneut.",
    },
    results: ResultStrings {
        heading: "Ergebnis der Risikobewertung",
        probability: "Risikowahrscheinlichkeit",
        low_risk: "Niedrige Wahrscheinlichkeit",
        high_risk: "Hohe Wahrscheinlichkeit",
        recommendation: "Konsultieren Sie einen Arzt für eine formelle Diagnose.",
        translated_message_high: "Basierend auf den bereitgestellten Informationen besteht eine hohe Wahrscheinlichkeit für eine Herzerkrankung. Es wird empfohlen, einen Arzt für weitere Untersuchungen zu konsultieren.",
        translated_message_low: "Basierend auf den bereitgestellten Informationen besteht eine geringe Wahrscheinlichkeit für eine Herzerkrankung. Dennoch wird ein gesunder Lebensstil empfohlen.",
    },
    sections: SectionStrings {
        context: "Kontext des Problems",
        context_body: "Herzerkrankungen sind weltweit eine der häufigsten Todesursachen. Eine frühzeitige Risikobewertung kann die klinischen Ergebnisse erheblich verbessern. KI spielt eine entscheidende Rolle bei der Verarbeitung dieser Metriken.",
        dataset: "Verwendeter Datensatz",
        dataset_body: "Dieses Modell wurde mit dem UCI Heart Disease Dataset trainiert, einem medizinischen Repository mit klinischen Aufzeichnungen.",
        dataset_link: "UCI Heart Disease Dataset",
        features: "Erwartete Merkmale",
        features_body: "Wir nutzen 8 Schlüsselmerkmale. Komplexe Tests sind ausgeschlossen.",
        importance: "Merkmal-Bedeutung (SHAP)",
        importance_body: "Die SHAP-Analyse zeigt, wie viel jedes Merkmal zur Vorhersage beiträgt. Höhere Werte bedeuten einen stärkeren Einfluss.",
        disclaimer: "Haftungsausschluss",
        disclaimer_body: "Diese Vorhersage dient nur zu Informationszwecken und sollte NICHT als medizinischer Rat verwendet werden. Konsultieren Sie immer einen qualifizierten Arzt.",
        feature_list: FeatureList {
            age: FeatureTranslation { label: "Alter", desc: "Alter des Patienten" },
            sex: FeatureTranslation { label: "Geschlecht", desc: "Biologisches Geschlecht" },
            cp: FeatureTranslation { label: "Brustschmerz", desc: "4 Schweregrade" },
            trestbps: FeatureTranslation { label: "Blutdruck", desc: "Ruhe-Blutdruck" },
            chol: FeatureTranslation { label: "Cholesterin", desc: "Serum-Cholesterin" },
            fbs: FeatureTranslation { label: "Blutzucker", desc: "Nüchternblutzucker" },
            exang: FeatureTranslation { label: "Angina", desc: "Belastungsangina" },
            restecg: FeatureTranslation { label: "EKG", desc: "EKG-Ergebnisse" },
        },
        chart: ChartStrings {
            value: "Wichtigkeit",
            features: ChartFeatureLabels {
                cp: "Brustschmerz",
                age: "Alter",
                restecg: "Ruhe-EKG",
                exang: "Angina",
                trestbps: "Blutdruck",
                chol: "Cholesterin",
                fbs: "Blutzucker",
            },
        },
        model: ModelStrings {
            title: "Ausgewähltes Modell",
            body: "Der eingesetzte Klassifikator wurde wegen seines ausgewogenen Verhältnisses von Präzision und Sensitivität auf zurückgehaltenen Patientendaten gewählt. Die folgenden Werte stammen aus dieser Auswertung.",
            metrics: MetricLabels {
                accuracy: "Genauigkeit",
                precision: "Präzision",
                recall: "Sensitivität",
                f1: "F1-Wert",
                roc_auc: "ROC AUC",
            },
        },
    },
    footer: FooterStrings {
        contact: "Kontakt",
        mission: "Unterstützung von Einzelpersonen durch klinische KI-Einblicke für ein besseres Bewusstsein für die Herzgesundheit.",
        social: "Soziale Kanäle",
        copyright: "CardiaCheck AI. Mit Präzision für das Vorscreening entwickelt.",
        privacy: "Datenschutz",
        terms: "Nutzungsbedingungen",
    },
};
