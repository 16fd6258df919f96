use super::schema::*;

pub static AR: TranslationSchema = TranslationSchema {
    title: "CardiaCheck AI",
    subtitle: "تقييم مخاطر أمراض القلب المتقدم",
    form: FormStrings {
        age: "العمر (سنوات)",
        sex: "الجنس",
        male: "ذكر",
        female: "أنثى",
        chest_pain: "نوع ألم الصدر",
        blood_pressure: "ضغط الدم وقت الراحة (مم زئبق)",
        cholesterol: "كوليسترول المصل (مجم/ديسيلتر)",
        fasting_sugar: "سكر الدم الصائم > 120 مجم/ديسيلتر",
        exercise_angina: "الذبحة الصدرية الناجمة عن ممارسة الرياضة",
        rest_ecg: "نتائج تخطيط القلب وقت الراحة",
        calculate: "حساب التوقع",
        calculating: "جاري الحساب...",
        validation_error: "يرجى ملء جميع الحقول بشكل صحيح.",
        options: OptionLabels {
            cp: ChestPainLabels {
                typical_angina: "ذبحة صدرية نموذجية",
                atypical_angina: "ذبحة صدرية غير نموذجية",
                non_anginal: "ألم غير ذبحي",
                asymptomatic: "بدون أعراض",
            },
            restecg: RestEcgLabels {
                normal: "طبيعي",
                st_t_abnormality: "شذوذ في موجة ST-T",
                lv_hypertrophy: "تضخم البطين الأيسر",
            },
        },
        tooltips: Tooltips {
            cp: "الذبحة النموذجية هي ضغط في الصدر يظهر مع الجهد ويزول بالراحة؛ بدون أعراض تعني عدم وجود ألم في الصدر.",
            trestbps: "ضغط الدم المقاس أثناء الراحة عند الدخول، بالمليمتر الزئبقي.",
            chol: "الكوليسترول الكلي المقاس في مصل الدم، بالمليغرام لكل ديسيلتر.",
            fbs: "اختر هذا إذا كان سكر الدم بعد صيام ليلة كاملة أعلى من 120 مجم/ديسيلتر.",
            exang: "اختر هذا إذا ظهر ألم الصدر أثناء ممارسة التمارين البدنية.",
            restecg: "نتيجة تخطيط القلب الكهربائي المسجل أثناء الراحة.",
        },
    },
    workflow: WorkflowStrings {
        loading: "جاري تحليل البيانات...",
        empty_state: "املأ النموذج للحصول على توقعاتك",
        request_failed: "فشل الاتصال بالخادم. يرجى المحاولة لاحقاً.",
    },
    results: ResultStrings {
        heading: "نتيجة تقييم المخاطر",
        probability: "احتمالية الخطر",
        low_risk: "احتمالية منخفضة",
        high_risk: "احتمالية عالية",
        recommendation: "استشر متخصصًا للحصول على تشخيص رسمي.",
        translated_message_high: "بناءً على المعلومات المقدمة، هناك احتمالية عالية للإصابة بأمراض القلب. يوصى باستشارة أخصائي طبي لمزيد من التقييم.",
        translated_message_low: "بناءً على المعلومات المقدمة، هناك احتمالية منخفضة للإصابة بأمراض القلب. ومع ذلك، يوصى دائماً بالحفاظ على نمط حياة صحي.",
    },
    sections: SectionStrings {
        context: "سياق المشكلة",
        context_body: "لا تزال أمراض القلب سبباً رئيسياً للوفاة في جميع أنحاء العالم. يمكن أن يؤدي تقييم المخاطر المبكر من خلال القياسات الطبية إلى تحسين النتائج السريرية بشكل كبير. يلعب الذكاء الاصطناعي دوراً حاسماً في معالجة هذه القياسات لتقديم رؤى فورية قائمة على البيانات.",
        dataset: "مجموعة البيانات المستخدمة",
        dataset_body: "تم تدريب هذا النموذج على مجموعة بيانات UCI لأمراض القلب، وهي مستودع طبي مرجعي يحتوي على سجلات سريرية مع سمات تشخيصية متنوعة.",
        dataset_link: "مجموعة بيانات UCI لأمراض القلب",
        features: "الميزات المتوقعة",
        features_body: "نحن نستخدم 8 ميزات رئيسية. يتم استبعاد الميزات المعقدة لأنها تتطلب اختبارات متخصصة.",
        importance: "أهمية الميزة (SHAP)",
        importance_body: "يوضح تحليل SHAP مدى مساهمة كل ميزة في التوقع. تمثل القيم الأعلى تأثيراً أقوى على قرار النموذج.",
        disclaimer: "إخلاء المسؤولية",
        disclaimer_body: "هذا التوقع لأغراض إعلامية فقط ولا ينبغي استخدامه كاستشارة طبية. استشر دائماً متخصص رعاية صحية مؤهل للتشخيص والعلاج.",
        feature_list: FeatureList {
            age: FeatureTranslation { label: "العمر", desc: "عمر المريض" },
            sex: FeatureTranslation { label: "الجنس", desc: "الجنس البيولوجي" },
            cp: FeatureTranslation { label: "ألم الصدر", desc: "4 مستويات من الشدة" },
            trestbps: FeatureTranslation { label: "ضغط الدم", desc: "ضغط الدم وقت الراحة" },
            chol: FeatureTranslation { label: "الكوليسترول", desc: "كوليسترول المصل" },
            fbs: FeatureTranslation { label: "السكر", desc: "سكر الصيام" },
            exang: FeatureTranslation { label: "الذبحة", desc: "الذبحة الناتجة عن الجهد" },
            restecg: FeatureTranslation { label: "تخطيط القلب", desc: "نتائج تخطيط القلب" },
        },
        chart: ChartStrings {
            value: "قيمة الأهمية",
            features: ChartFeatureLabels {
                cp: "ألم الصدر",
                age: "العمر",
                restecg: "تخطيط القلب",
                exang: "الذبحة الصدرية",
                trestbps: "ضغط الدم",
                chol: "الكوليسترول",
                fbs: "السكر",
            },
        },
        model: ModelStrings {
            title: "النموذج المختار",
            body: "تم اختيار المصنف المستخدم لتوازنه بين الدقة والاستدعاء على بيانات مرضى محجوزة للاختبار. القيم التالية مأخوذة من ذلك التقييم.",
            metrics: MetricLabels {
                accuracy: "الصحة",
                precision: "الدقة",
                recall: "الاستدعاء",
                f1: "مقياس F1",
                roc_auc: "ROC AUC",
            },
        },
    },
    footer: FooterStrings {
        contact: "تواصل معنا",
        mission: "تمكين الأفراد من خلال رؤى الذكاء الاصطناعي السريرية لتحسين الوعي بصحة القلب.",
        social: "التواصل الاجتماعي",
        copyright: "CardiaCheck AI. بني بدقة للفحص الأولي.",
        privacy: "سياسة الخصوصية",
        terms: "شروط الخدمة",
    },
};
