//! Console output formatter for the form, the result card and the info sections

use super::render_context::{RenderContext, display_width};
use cardiacheck_application::WorkflowState;
use cardiacheck_domain::{
    CatalogEntry, FEATURE_IMPORTANCE, FieldName, FieldValue, HIGHLIGHTED_FEATURES, Locale,
    MODEL_METRICS, PredictionInput, PredictionResponse, RequestState, RiskAssessment,
};
use colored::Colorize;
use serde::Serialize;

/// Cells in the probability gauge
const GAUGE_CELLS: usize = 40;

/// Cells in one importance chart bar
const CHART_CELLS: usize = 30;

const DATASET_URL: &str = "https://archive.ics.uci.edu/ml/datasets/heart+disease";

/// Formats workflow state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Title and subtitle
    pub fn format_header(entry: &CatalogEntry, ctx: &RenderContext) -> String {
        let t = entry.schema();
        let rule = "=".repeat(ctx.width);
        let mut output = String::new();
        output.push_str(&format!("{}\n", ctx.theme.heading(&rule)));
        output.push_str(&ctx.line(t.title, ctx.theme.heading(t.title)));
        output.push_str(&ctx.line(t.subtitle, ctx.theme.muted(t.subtitle)));
        output.push_str(&format!("{}\n", ctx.theme.heading(&rule)));
        output
    }

    /// Current form values with localized labels and tooltips
    pub fn format_form(entry: &CatalogEntry, inputs: &PredictionInput, ctx: &RenderContext) -> String {
        let mut output = String::new();

        for field in FieldName::ALL {
            let label = entry.field_label(field);
            let value = Self::value_text(entry, inputs.value_of(field));
            let plain = format!("{} [{}]: {}", label, field.as_str(), value);
            let styled = format!(
                "{} {}: {}",
                ctx.theme.label(label),
                ctx.theme.muted(&format!("[{}]", field.as_str())),
                value
            );
            output.push_str(&ctx.line(&plain, styled));

            if let Some(tip) = entry.field_tooltip(field) {
                for line in ctx.paragraph(tip).lines() {
                    output.push_str(&format!("{}\n", ctx.theme.muted(line)));
                }
            }
        }

        output
    }

    /// Localized display of one field value
    pub fn value_text(entry: &CatalogEntry, value: FieldValue) -> String {
        match value {
            FieldValue::Age(age) => age.to_string(),
            FieldValue::Sex(sex) => entry.sex_label(sex).to_string(),
            FieldValue::ChestPainType(cp) => entry.chest_pain_label(cp).to_string(),
            FieldValue::RestingBloodPressure(v) | FieldValue::SerumCholesterol(v) => {
                format_number(v)
            }
            FieldValue::FastingBloodSugarHigh(flag) | FieldValue::ExerciseInducedAngina(flag) => {
                let mark = if flag { "[x]" } else { "[ ]" };
                mark.to_string()
            }
            FieldValue::RestingEcg(ecg) => entry.rest_ecg_label(ecg).to_string(),
        }
    }

    /// Result area for any request state
    pub fn format_state(entry: &CatalogEntry, request: &RequestState, ctx: &RenderContext) -> String {
        let workflow = &entry.schema().workflow;
        match request {
            RequestState::Idle => ctx.line(workflow.empty_state, ctx.theme.muted(workflow.empty_state)),
            RequestState::Loading => ctx.line(workflow.loading, ctx.theme.muted(workflow.loading)),
            RequestState::Success(response) => Self::format_result(entry, response, ctx),
            RequestState::Failure(message) => ctx.line(message, message.red().bold()),
        }
    }

    /// Result card: heading, percent, gauge, tier, message and recommendation
    pub fn format_result(
        entry: &CatalogEntry,
        response: &PredictionResponse,
        ctx: &RenderContext,
    ) -> String {
        let t = entry.schema();
        let assessment = RiskAssessment::from_probability(response.probability, t);
        let theme = ctx.theme;
        let mut output = String::new();

        output.push_str(&ctx.line(t.results.heading, theme.heading(t.results.heading)));
        output.push_str(&format!("{}\n", "-".repeat(ctx.width.min(GAUGE_CELLS + 10))));

        let percent = format!("{}%", assessment.percent);
        let plain = format!("{}: {}", t.results.probability, percent);
        let styled = format!(
            "{}: {}",
            theme.label(t.results.probability),
            theme.band(assessment.band, &percent)
        );
        output.push_str(&ctx.line(&plain, styled));

        let cells = GAUGE_CELLS.min(ctx.width);
        let filled = (response.probability * cells as f64).round() as usize;
        let (left, right) = ctx.bar(filled, cells);
        let gauge = if ctx.is_rtl() {
            format!("{}{}", theme.muted(&left), theme.band(assessment.band, &right))
        } else {
            format!("{}{}", theme.band(assessment.band, &left), theme.muted(&right))
        };
        output.push_str(&ctx.line(&format!("{left}{right}"), gauge));

        output.push_str(&ctx.line(
            assessment.tier_label,
            theme.band(assessment.band, assessment.tier_label),
        ));
        output.push('\n');
        output.push_str(&ctx.paragraph(assessment.message));
        output.push('\n');
        for line in ctx.paragraph(t.results.recommendation).lines() {
            output.push_str(&format!("{}\n", theme.muted(line)));
        }

        output
    }

    /// One line: probability and tier
    pub fn format_summary(
        entry: &CatalogEntry,
        response: &PredictionResponse,
        ctx: &RenderContext,
    ) -> String {
        let t = entry.schema();
        let assessment = RiskAssessment::from_probability(response.probability, t);
        let plain = format!(
            "{}: {}% ({})",
            t.results.probability, assessment.percent, assessment.tier_label
        );
        let styled = format!(
            "{}: {}",
            t.results.probability,
            ctx.theme.band(
                assessment.band,
                &format!("{}% ({})", assessment.percent, assessment.tier_label)
            )
        );
        ctx.line(&plain, styled)
    }

    /// Informational sections, importance chart, disclaimer and footer
    pub fn format_info(entry: &CatalogEntry, ctx: &RenderContext) -> String {
        let s = &entry.schema().sections;
        let theme = ctx.theme;
        let mut output = String::new();

        output.push_str(&Self::section(s.context, ctx));
        output.push_str(&ctx.paragraph(s.context_body));

        output.push_str(&Self::section(s.dataset, ctx));
        output.push_str(&ctx.paragraph(s.dataset_body));
        let link = format!("{}: {}", s.dataset_link, DATASET_URL);
        output.push_str(&ctx.line(&link, theme.highlight(&link)));

        output.push_str(&Self::section(s.features, ctx));
        let label_width = entry
            .feature_list()
            .iter()
            .map(|item| display_width(item.label))
            .max()
            .unwrap_or(0);
        for item in entry.feature_list() {
            let plain = if ctx.is_rtl() {
                format!("{} :{:>w$}", item.desc, item.label, w = label_width)
            } else {
                format!("{:<w$}: {}", item.label, item.desc, w = label_width)
            };
            output.push_str(&ctx.plain_line(&plain));
        }
        output.push('\n');
        output.push_str(&ctx.paragraph(s.features_body));

        output.push_str(&Self::section(s.model.title, ctx));
        output.push_str(&ctx.paragraph(s.model.body));
        output.push('\n');
        output.push_str(&Self::format_metrics(entry, ctx));

        output.push_str(&Self::section(s.importance, ctx));
        output.push_str(&ctx.paragraph(s.importance_body));
        output.push('\n');
        output.push_str(&Self::format_chart(entry, ctx));

        output.push_str(&Self::section(s.disclaimer, ctx));
        for line in ctx.paragraph(s.disclaimer_body).lines() {
            output.push_str(&format!("{}\n", line.red()));
        }

        output.push('\n');
        output.push_str(&Self::format_footer(entry, ctx));
        output
    }

    /// Evaluation metrics of the selected model, one per line
    pub fn format_metrics(entry: &CatalogEntry, ctx: &RenderContext) -> String {
        let labels = &entry.schema().sections.model.metrics;
        let label_width = MODEL_METRICS
            .iter()
            .map(|(metric, _)| display_width(metric.label(labels)))
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        for (metric, value) in MODEL_METRICS {
            let label = metric.label(labels);
            let value_text = format!("{:.4}", value);
            let (plain, styled) = if ctx.is_rtl() {
                let label = format!("{:>w$}", label, w = label_width);
                (
                    format!("{value_text}  {label}"),
                    format!("{}  {}", ctx.theme.heading(&value_text), ctx.theme.label(&label)),
                )
            } else {
                let label = format!("{:<w$}", label, w = label_width);
                (
                    format!("{label}  {value_text}"),
                    format!("{}  {}", ctx.theme.label(&label), ctx.theme.heading(&value_text)),
                )
            };
            output.push_str(&ctx.line(&plain, styled));
        }
        output
    }

    /// Feature importance bars, highest first; the leading bars are highlighted
    pub fn format_chart(entry: &CatalogEntry, ctx: &RenderContext) -> String {
        let chart = &entry.schema().sections.chart;
        let theme = ctx.theme;
        let label_width = FEATURE_IMPORTANCE
            .iter()
            .map(|(feature, _)| display_width(feature.label(&chart.features)))
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        output.push_str(&ctx.line(chart.value, theme.muted(chart.value)));

        for (rank, (feature, value)) in FEATURE_IMPORTANCE.iter().enumerate() {
            let label = feature.label(&chart.features);
            let filled = (value * CHART_CELLS as f64).round() as usize;
            let (left, right) = ctx.bar(filled, CHART_CELLS);
            let value_text = format!("{:.2}", value);
            let paint = |bar: &str| {
                if rank < HIGHLIGHTED_FEATURES {
                    theme.highlight(bar)
                } else {
                    theme.bar(bar)
                }
            };

            let (plain, styled) = if ctx.is_rtl() {
                let label = format!("{:>w$}", label, w = label_width);
                (
                    format!("{value_text} {left}{right} {label}"),
                    format!("{value_text} {}{} {label}", theme.muted(&left), paint(&right)),
                )
            } else {
                let label = format!("{:<w$}", label, w = label_width);
                (
                    format!("{label} {left}{right} {value_text}"),
                    format!("{label} {}{} {value_text}", paint(&left), theme.muted(&right)),
                )
            };
            output.push_str(&ctx.line(&plain, styled));
        }

        output
    }

    pub fn format_footer(entry: &CatalogEntry, ctx: &RenderContext) -> String {
        let f = &entry.schema().footer;
        let theme = ctx.theme;
        let mut output = String::new();
        output.push_str(&format!("{}\n", theme.muted(&"-".repeat(ctx.width))));
        for line in ctx.paragraph(f.mission).lines() {
            output.push_str(&format!("{}\n", theme.muted(line)));
        }
        let links = format!("{} | {} | {} | {}", f.contact, f.social, f.privacy, f.terms);
        output.push_str(&ctx.line(&links, theme.muted(&links)));
        let copyright = format!("© {}", f.copyright);
        output.push_str(&ctx.line(&copyright, theme.muted(&copyright)));
        output
    }

    /// Format as JSON
    pub fn format_json(entry: &CatalogEntry, state: &WorkflowState) -> String {
        serde_json::to_string_pretty(&JsonReport::new(entry, state))
            .unwrap_or_else(|_| "{}".to_string())
    }

    fn section(title: &str, ctx: &RenderContext) -> String {
        let rule = "-".repeat(display_width(title).min(ctx.width));
        format!(
            "\n{}{}\n",
            ctx.line(title, ctx.theme.heading(title)),
            ctx.line(&rule, ctx.theme.heading(&rule)).trim_end_matches('\n')
        )
    }
}

/// Machine-readable view of one workflow snapshot
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub locale: Locale,
    pub direction: &'static str,
    pub inputs: &'a PredictionInput,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<RiskAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

impl<'a> JsonReport<'a> {
    pub fn new(entry: &CatalogEntry, state: &'a WorkflowState) -> Self {
        let response = state.request.response();
        Self {
            locale: state.locale,
            direction: state.direction().as_str(),
            inputs: &state.inputs,
            status: state.request.as_str(),
            assessment: response
                .map(|r| RiskAssessment::from_probability(r.probability, entry.schema())),
            error: state.request.failure_message(),
        }
    }
}

/// Whole numbers without a trailing `.0`
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardiacheck_domain::{Direction, Sex, TranslationCatalog};

    fn entry(locale: Locale) -> &'static CatalogEntry {
        colored::control::set_override(false);
        TranslationCatalog::shared().get(locale)
    }

    fn state(locale: Locale, request: RequestState) -> WorkflowState {
        WorkflowState {
            locale,
            inputs: PredictionInput::default(),
            request,
        }
    }

    #[test]
    fn test_form_shows_localized_labels_and_keys() {
        let en = entry(Locale::En);
        let inputs = PredictionInput::default().with(FieldValue::Sex(Sex::Female));
        let output = ConsoleFormatter::format_form(en, &inputs, &RenderContext::default());

        assert!(output.contains("Age (Years) [age]: 50"));
        assert!(output.contains("Gender [sex]: Female"));
        assert!(output.contains("Asymptomatic"));
        assert!(output.contains("Resting Blood Pressure (mm Hg) [trestbps]: 120"));
        assert!(output.contains("[fbs]: [ ]"));
    }

    #[test]
    fn test_form_uses_active_locale() {
        let de = entry(Locale::De);
        let output =
            ConsoleFormatter::format_form(de, &PredictionInput::default(), &RenderContext::default());
        assert!(output.contains(de.field_label(FieldName::Age)));
        assert!(!output.contains("Age (Years)"));
    }

    #[test]
    fn test_result_card_high_risk() {
        let en = entry(Locale::En);
        let response = PredictionResponse::new(0.8518);
        let output = ConsoleFormatter::format_result(en, &response, &RenderContext::default());

        assert!(output.contains("Risk Assessment Result"));
        assert!(output.contains("Risk Probability: 85.18%"));
        assert!(output.contains("Higher Likelihood"));
        assert!(output.contains("high likelihood of heart disease"));
        assert!(output.contains("Consult a professional"));
    }

    #[test]
    fn test_result_card_low_risk() {
        let en = entry(Locale::En);
        let response = PredictionResponse::new(0.5);
        let output = ConsoleFormatter::format_result(en, &response, &RenderContext::default());

        assert!(output.contains("50.00%"));
        assert!(output.contains("Low Likelihood"));
    }

    #[test]
    fn test_gauge_fill_matches_probability() {
        let en = entry(Locale::En);
        let output = ConsoleFormatter::format_result(
            en,
            &PredictionResponse::new(0.25),
            &RenderContext::default(),
        );
        let gauge = output.lines().find(|l| l.contains('░')).unwrap();
        assert_eq!(gauge.matches('█').count(), 10);
        assert_eq!(gauge.matches('░').count(), 30);
    }

    #[test]
    fn test_rtl_result_is_right_aligned() {
        let ar = entry(Locale::Ar);
        let ctx = RenderContext::new(Direction::RightToLeft);
        let output = ConsoleFormatter::format_result(ar, &PredictionResponse::new(0.9), &ctx);
        let heading = output.lines().next().unwrap();

        assert!(heading.starts_with(' '));
        assert_eq!(heading.chars().count(), ctx.width);
        assert!(heading.ends_with(ar.schema().results.heading));
    }

    #[test]
    fn test_summary_line() {
        let en = entry(Locale::En);
        let output = ConsoleFormatter::format_summary(
            en,
            &PredictionResponse::new(0.1234),
            &RenderContext::default(),
        );
        assert_eq!(output, "Risk Probability: 12.34% (Low Likelihood)\n");
    }

    #[test]
    fn test_state_rendering() {
        let en = entry(Locale::En);
        let ctx = RenderContext::default();

        let idle = ConsoleFormatter::format_state(en, &RequestState::Idle, &ctx);
        assert!(idle.contains(en.schema().workflow.empty_state));

        let loading = ConsoleFormatter::format_state(en, &RequestState::Loading, &ctx);
        assert!(loading.contains(en.schema().workflow.loading));

        let failed =
            ConsoleFormatter::format_state(en, &RequestState::Failure("boom".to_string()), &ctx);
        assert_eq!(failed, "boom\n");
    }

    #[test]
    fn test_chart_order_and_highlight_count() {
        let en = entry(Locale::En);
        let output = ConsoleFormatter::format_chart(en, &RenderContext::default());
        let bars: Vec<&str> = output.lines().skip(1).collect();

        assert_eq!(bars.len(), FEATURE_IMPORTANCE.len());
        assert!(bars[0].starts_with("Chest Pain"));
        assert!(bars[0].ends_with("0.82"));
        assert!(bars[6].starts_with("Sugar"));
        assert!(bars[6].ends_with("0.12"));
        assert_eq!(bars[0].matches('█').count(), 25);
    }

    #[test]
    fn test_rtl_chart_is_mirrored() {
        let ar = entry(Locale::Ar);
        let ctx = RenderContext::new(Direction::RightToLeft);
        let output = ConsoleFormatter::format_chart(ar, &ctx);
        let first_bar = output.lines().nth(1).unwrap().trim_start();

        assert!(first_bar.starts_with("0.82"));
        assert!(first_bar.ends_with(ar.schema().sections.chart.features.cp));
    }

    #[test]
    fn test_info_contains_every_section() {
        let en = entry(Locale::En);
        let s = &en.schema().sections;
        let output = ConsoleFormatter::format_info(en, &RenderContext::default());

        for title in [
            s.context,
            s.dataset,
            s.features,
            s.model.title,
            s.importance,
            s.disclaimer,
        ] {
            assert!(output.contains(title), "missing {title}");
        }
        assert!(output.contains(DATASET_URL));
        for item in en.feature_list() {
            assert!(output.contains(item.desc));
        }
        assert!(output.contains(en.schema().footer.copyright));
    }

    #[test]
    fn test_metrics_block_lists_every_metric() {
        let de = entry(Locale::De);
        let labels = &de.schema().sections.model.metrics;
        let output = ConsoleFormatter::format_metrics(de, &RenderContext::default());

        assert_eq!(output.lines().count(), MODEL_METRICS.len());
        let first = output.lines().next().unwrap();
        assert!(first.starts_with(labels.accuracy));
        assert!(first.ends_with("0.7899"));
        assert!(output.contains("0.8517"));
    }

    #[test]
    fn test_rtl_metrics_put_value_first() {
        let ar = entry(Locale::Ar);
        let ctx = RenderContext::default().with_direction(Direction::RightToLeft);
        let output = ConsoleFormatter::format_metrics(ar, &ctx);

        let first = output.lines().next().unwrap().trim_start();
        assert!(first.starts_with("0.7899"));
        assert!(first.ends_with(ar.schema().sections.model.metrics.accuracy));
    }

    #[test]
    fn test_json_report_ignores_server_label() {
        let en = entry(Locale::En);
        let snapshot = state(
            Locale::En,
            RequestState::Success(PredictionResponse::new(0.4).with_label("Disease Present")),
        );
        let output = ConsoleFormatter::format_json(en, &snapshot);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert!(!output.contains("Disease Present"));
        assert_eq!(json["assessment"]["tier"], "low");
        assert_eq!(json["assessment"]["tier_label"], en.schema().results.low_risk);
    }

    #[test]
    fn test_json_report_success() {
        let en = entry(Locale::En);
        let snapshot = state(
            Locale::En,
            RequestState::Success(PredictionResponse::new(0.75).with_label("Disease Present")),
        );
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(en, &snapshot)).unwrap();

        assert_eq!(json["locale"], "EN");
        assert_eq!(json["direction"], "ltr");
        assert_eq!(json["status"], "success");
        // The server's own label is never surfaced; the tier is derived locally
        assert!(json.get("prediction").is_none());
        assert_eq!(json["assessment"]["tier"], "high");
        assert_eq!(json["assessment"]["percent"], "75.00");
        assert_eq!(json["assessment"]["band"], "danger");
        assert_eq!(json["inputs"]["age"], 50);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_json_report_failure() {
        let ar = entry(Locale::Ar);
        let message = ar.schema().workflow.request_failed.to_string();
        let snapshot = state(Locale::Ar, RequestState::Failure(message.clone()));
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(ar, &snapshot)).unwrap();

        assert_eq!(json["direction"], "rtl");
        assert_eq!(json["status"], "failure");
        assert_eq!(json["error"], message);
        assert!(json.get("assessment").is_none());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(120.0), "120");
        assert_eq!(format_number(132.5), "132.5");
    }
}
