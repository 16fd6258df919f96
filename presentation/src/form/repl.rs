//! REPL (Read-Eval-Print Loop) for the interactive prediction form

use super::command::{CommandError, ReplCommand};
use crate::output::{
    ConsoleFormatter, ConsolePrinter, ConsoleViewport, EditorPrinter, RenderContext, StdoutPrinter,
};
use cardiacheck_application::{PredictionGateway, PredictionWorkflow, SubmitOutcome, WorkflowConfig};
use cardiacheck_domain::{CatalogEntry, Locale};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use tracing::debug;

/// Interactive form REPL
pub struct FormRepl<G: PredictionGateway + 'static> {
    gateway: Arc<G>,
    config: WorkflowConfig,
    ctx: RenderContext,
}

impl<G: PredictionGateway + 'static> FormRepl<G> {
    /// Create a new FormRepl
    pub fn new(gateway: Arc<G>, config: WorkflowConfig) -> Self {
        Self {
            gateway,
            config,
            ctx: RenderContext::default(),
        }
    }

    /// Set the base render context (width and theme; direction follows the locale)
    pub fn with_render_context(mut self, ctx: RenderContext) -> Self {
        self.ctx = ctx;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("cardiacheck").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        let printer: Arc<dyn ConsolePrinter> = match rl.create_external_printer() {
            Ok(printer) => Arc::new(EditorPrinter::new(printer)),
            Err(e) => {
                debug!("External printer unavailable ({}), using stdout", e);
                Arc::new(StdoutPrinter)
            }
        };

        let workflow = PredictionWorkflow::with_config(Arc::clone(&self.gateway), self.config.clone());
        let viewport = ConsoleViewport::new(workflow.subscribe(), self.ctx, Arc::clone(&printer));
        let workflow = Arc::new(workflow.with_viewport(Arc::new(viewport)));

        self.print_welcome(&workflow);

        loop {
            let prompt = format!("{}> ", workflow.locale().as_str().to_lowercase());
            let readline = rl.readline(&prompt);

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    if !line.starts_with('/') {
                        println!("Commands start with '/'. Type /help for available commands");
                        continue;
                    }

                    if self.handle_command(&workflow, &printer, line) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn render_context(&self, workflow: &PredictionWorkflow<G>) -> RenderContext {
        self.ctx.with_direction(workflow.direction())
    }

    fn print_welcome(&self, workflow: &PredictionWorkflow<G>) {
        let entry = workflow.catalog_entry();
        let ctx = self.render_context(workflow);
        println!();
        print!("{}", ConsoleFormatter::format_header(entry, &ctx));
        println!();
        print!(
            "{}",
            ConsoleFormatter::format_form(entry, &workflow.snapshot().inputs, &ctx)
        );
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /set <field> <value> - Change a form field (e.g. /set age 45)");
        println!("  /lang [code]         - Switch language (EN, AR, DE) or list them");
        println!("  /submit              - Send the form for prediction");
        println!("  /form                - Show the current form");
        println!("  /result              - Show the current result");
        println!("  /info                - Show background, features and importance chart");
        println!("  /help, /h, /?        - Show this help");
        println!("  /quit, /exit, /q     - Exit");
        println!();
        println!("Fields: age, sex, cp, trestbps, chol, fbs, exang, restecg");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(
        &self,
        workflow: &Arc<PredictionWorkflow<G>>,
        printer: &Arc<dyn ConsolePrinter>,
        line: &str,
    ) -> bool {
        let entry = workflow.catalog_entry();

        let command = match ReplCommand::parse(line) {
            Ok(command) => command,
            Err(e) => {
                Self::print_command_error(entry, &e);
                return false;
            }
        };

        match command {
            ReplCommand::Set(value) => {
                workflow.update_field(value);
                let field = value.name();
                println!(
                    "{}: {}",
                    entry.field_label(field).bold(),
                    ConsoleFormatter::value_text(entry, value)
                );
            }
            ReplCommand::Lang(None) => {
                let current = workflow.locale();
                for locale in Locale::ALL {
                    let mark = if locale == current { "*" } else { " " };
                    println!("{} {}  {}", mark, locale.as_str(), locale.native_name());
                }
            }
            ReplCommand::Lang(Some(locale)) => {
                workflow.set_locale(locale);
                let ctx = self.render_context(workflow);
                print!(
                    "{}",
                    ConsoleFormatter::format_header(workflow.catalog_entry(), &ctx)
                );
            }
            ReplCommand::Submit => self.submit(workflow, printer),
            ReplCommand::Form => {
                let ctx = self.render_context(workflow);
                print!(
                    "{}",
                    ConsoleFormatter::format_form(entry, &workflow.snapshot().inputs, &ctx)
                );
            }
            ReplCommand::Result => {
                let ctx = self.render_context(workflow);
                print!(
                    "{}",
                    ConsoleFormatter::format_state(entry, &workflow.snapshot().request, &ctx)
                );
            }
            ReplCommand::Info => {
                let ctx = self.render_context(workflow);
                print!("{}", ConsoleFormatter::format_info(entry, &ctx));
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
            }
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
        }

        false
    }

    fn print_command_error(entry: &CatalogEntry, error: &CommandError) {
        if error.is_field_error() {
            println!("{}", entry.schema().form.validation_error.red());
            println!("{}", error.to_string().dimmed());
        } else {
            println!("{}", error);
            println!("Type /help for available commands");
        }
    }

    /// Start a request in the background so the form stays editable
    fn submit(&self, workflow: &Arc<PredictionWorkflow<G>>, printer: &Arc<dyn ConsolePrinter>) {
        let form = &workflow.catalog_entry().schema().form;
        if workflow.snapshot().request.is_loading() {
            println!("{}", form.calculating.dimmed());
            return;
        }
        println!("{}", form.calculating.dimmed());

        let workflow = Arc::clone(workflow);
        let printer = Arc::clone(printer);
        let ctx = self.ctx;
        tokio::spawn(async move {
            match workflow.submit().await {
                SubmitOutcome::Failed => {
                    let state = workflow.snapshot();
                    let entry = workflow.catalog().get(state.locale);
                    let ctx = ctx.with_direction(state.direction());
                    printer.print(ConsoleFormatter::format_state(entry, &state.request, &ctx));
                }
                // The viewport prints the card on reveal
                SubmitOutcome::Succeeded => {}
                SubmitOutcome::Ignored => debug!("Submit ignored: request already in flight"),
            }
        });
    }
}
