use super::schema::*;

pub static EN: TranslationSchema = TranslationSchema {
    title: "CardiaCheck AI",
    subtitle: "Advanced Heart Disease Risk Assessment",
    form: FormStrings {
        age: "Age (Years)",
        sex: "Gender",
        male: "Male",
        female: "Female",
        chest_pain: "Chest Pain Type",
        blood_pressure: "Resting Blood Pressure (mm Hg)",
        cholesterol: "Serum Cholesterol (mg/dl)",
        fasting_sugar: "Fasting Blood Sugar > 120 mg/dl",
        exercise_angina: "Exercise Induced Angina",
        rest_ecg: "Resting ECG Results",
        calculate: "Calculate Prediction",
        calculating: "Calculating...",
        validation_error: "Please fill all fields correctly.",
        options: OptionLabels {
            cp: ChestPainLabels {
                typical_angina: "Typical Angina",
                atypical_angina: "Atypical Angina",
                non_anginal: "Non-anginal Pain",
                asymptomatic: "Asymptomatic",
            },
            restecg: RestEcgLabels {
                normal: "Normal",
                st_t_abnormality: "ST-T Wave Abnormality",
                lv_hypertrophy: "LV Hypertrophy",
            },
        },
        tooltips: Tooltips {
            cp: "Typical angina is chest pressure triggered by exertion and relieved by rest; asymptomatic means no chest pain is reported.",
            trestbps: "Blood pressure measured at rest on admission, in millimetres of mercury.",
            chol: "Total cholesterol measured in the blood serum, in milligrams per decilitre.",
            fbs: "Check this if blood sugar after an overnight fast was above 120 mg/dl.",
            exang: "Check this if chest pain appears during physical exercise.",
            restecg: "Result of the electrocardiogram recorded while at rest.",
        },
    },
    workflow: WorkflowStrings {
        loading: "Analyzing medical data...",
        empty_state: "Fill the form to see your results here",
        request_failed: "Failed to connect to the prediction server. Please try again later.",
    },
    results: ResultStrings {
        heading: "Risk Assessment Result",
        probability: "Risk Probability",
        low_risk: "Low Likelihood",
        high_risk: "Higher Likelihood",
        recommendation: "Consult a professional for a formal diagnosis.",
        translated_message_high: "Based on the provided information, there is a high likelihood of heart disease. It is recommended to consult a medical professional for further assessment.",
        translated_message_low: "Based on the provided information, there is a low likelihood of heart disease. However, maintaining a healthy lifestyle is always recommended.",
    },
    sections: SectionStrings {
        context: "Context of the Problem",
        context_body: "Heart disease remains a leading cause of mortality worldwide. Early risk assessment through medical metrics can significantly improve clinical outcomes. AI plays a crucial role in processing these metrics to provide immediate, data-driven insights.",
        dataset: "Dataset Used",
        dataset_body: "This model was trained on the UCI Heart Disease Dataset, a benchmark medical repository containing clinical records with various diagnostic attributes.",
        dataset_link: "UCI Heart Disease Dataset",
        features: "Features Expected",
        features_body: "We utilize 8 key features. Complex features like 'Thal' or 'Ca' are excluded as they require invasive tests.",
        importance: "Feature Importance (SHAP)",
        importance_body: "SHAP analysis indicates how much each feature contributes to the prediction. Higher values represent stronger influence on the model's decision.",
        disclaimer: "Disclaimer",
        disclaimer_body: "This prediction is for informational purposes only and should NOT be used as medical advice. Always consult with a qualified healthcare professional for diagnosis and treatment.",
        feature_list: FeatureList {
            age: FeatureTranslation { label: "Age", desc: "Patient's age" },
            sex: FeatureTranslation { label: "Sex", desc: "Biological gender" },
            cp: FeatureTranslation { label: "Chest Pain", desc: "4 levels of severity" },
            trestbps: FeatureTranslation { label: "Trestbps", desc: "Resting BP" },
            chol: FeatureTranslation { label: "Chol", desc: "Serum Cholesterol" },
            fbs: FeatureTranslation { label: "FBS", desc: "Fasting Sugar" },
            exang: FeatureTranslation { label: "Exang", desc: "Exercise Angina" },
            restecg: FeatureTranslation { label: "RestECG", desc: "EKG results" },
        },
        chart: ChartStrings {
            value: "Importance Value",
            features: ChartFeatureLabels {
                cp: "Chest Pain",
                age: "Age",
                restecg: "Rest ECG",
                exang: "Ex. Angina",
                trestbps: "Blood Pressure",
                chol: "Cholesterol",
                fbs: "Sugar",
            },
        },
        model: ModelStrings {
            title: "Selected Model",
            body: "The deployed classifier was chosen for its balance between precision and recall on held-out patients. Scores below come from that evaluation.",
            metrics: MetricLabels {
                accuracy: "Accuracy",
                precision: "Precision",
                recall: "Recall",
                f1: "F1-Score",
                roc_auc: "ROC AUC",
            },
        },
    },
    footer: FooterStrings {
        contact: "Get in touch",
        mission: "Empowering individuals with clinical AI insights for better heart health awareness.",
        social: "Social Connect",
        copyright: "CardiaCheck AI. Built with precision for preliminary screening.",
        privacy: "Privacy Policy",
        terms: "Terms of Service",
    },
};
