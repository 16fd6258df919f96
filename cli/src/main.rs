//! CLI entrypoint for CardiaCheck
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;

use anyhow::{Context, Result};
use cardiacheck_application::{PredictionWorkflow, SubmitOutcome};
use cardiacheck_domain::{RequestState, TranslationCatalog};
use cardiacheck_infrastructure::{ConfigLoader, FileConfig, HttpPredictionGateway};
use cardiacheck_presentation::{
    Cli, ConsoleFormatter, FormRepl, LoadingIndicator, OutputFormat, RenderContext,
};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        let config = load_config(&cli)?;
        println!();
        println!("{}", config.to_toml().context("Failed to render configuration")?);
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;

    // Held until exit so buffered file logs are flushed
    let _log_guard = logging::init(cli.verbose, config.logging.file.as_deref())?;

    info!("Starting CardiaCheck");
    debug!("Effective configuration: {:?}", config);

    if !config.ui.color {
        colored::control::set_override(false);
    }

    let workflow_config = config.workflow_config()?;
    let ctx = RenderContext::default()
        .with_width(config.ui.width)
        .with_direction(workflow_config.initial_locale.direction());

    // Static sections need no endpoint
    if cli.info {
        let entry = TranslationCatalog::shared().get(workflow_config.initial_locale);
        print!("{}", ConsoleFormatter::format_header(entry, &ctx));
        print!("{}", ConsoleFormatter::format_info(entry, &ctx));
        return Ok(ExitCode::SUCCESS);
    }

    // === Dependency Injection ===
    // Create infrastructure adapter (HTTP gateway)
    let gateway = Arc::new(
        HttpPredictionGateway::new(&config.endpoint.url, config.endpoint.timeout())?
            .with_retry_transient(config.endpoint.retry_transient),
    );

    // Interactive mode
    if cli.interactive {
        let repl = FormRepl::new(gateway, workflow_config).with_render_context(ctx);
        repl.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // One-shot mode
    let workflow = PredictionWorkflow::with_config(gateway, workflow_config);
    let entry = workflow.catalog_entry();

    let outcome = {
        let _spinner = if cli.quiet || cli.output == OutputFormat::Json {
            LoadingIndicator::hidden()
        } else {
            LoadingIndicator::start(entry.schema().form.calculating)
        };
        workflow.submit().await
    };

    let state = workflow.snapshot();
    let output = match cli.output {
        OutputFormat::Full => format!(
            "{}\n{}\n{}",
            ConsoleFormatter::format_header(entry, &ctx),
            ConsoleFormatter::format_form(entry, &state.inputs, &ctx),
            ConsoleFormatter::format_state(entry, &state.request, &ctx)
        ),
        OutputFormat::Summary => match &state.request {
            RequestState::Success(response) => {
                ConsoleFormatter::format_summary(entry, response, &ctx)
            }
            other => ConsoleFormatter::format_state(entry, other, &ctx),
        },
        OutputFormat::Json => format!("{}\n", ConsoleFormatter::format_json(entry, &state)),
    };

    print!("{}", output);

    Ok(match outcome {
        SubmitOutcome::Failed => ExitCode::FAILURE,
        SubmitOutcome::Succeeded | SubmitOutcome::Ignored => ExitCode::SUCCESS,
    })
}

/// Merge configuration sources, then apply command-line overrides and validate
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    apply_cli_overrides(&mut config, cli);
    config.validate().context("Invalid configuration")?;

    Ok(config)
}

/// Command-line flags take precedence over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(locale) = cli.locale {
        config.ui.locale = locale.as_str().to_string();
    }
    if let Some(url) = &cli.endpoint {
        config.endpoint.url = url.clone();
    }
    if cli.no_color {
        config.ui.color = false;
    }
    for value in cli.field_overrides() {
        config.form.apply(value);
    }
}
