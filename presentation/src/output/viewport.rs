//! Console implementation of the result viewport
//!
//! The terminal analogue of scrolling the result into view: when the workflow
//! reveals a result, the result card for the current snapshot is printed.

use super::console::ConsoleFormatter;
use super::render_context::RenderContext;
use cardiacheck_application::{ResultViewport, WorkflowState};
use cardiacheck_domain::TranslationCatalog;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tracing::debug;

/// Destination for output produced outside the prompt loop
pub trait ConsolePrinter: Send + Sync {
    fn print(&self, text: String);
}

/// Prints straight to stdout
pub struct StdoutPrinter;

impl ConsolePrinter for StdoutPrinter {
    fn print(&self, text: String) {
        print!("{}", text);
    }
}

/// Prints above an active rustyline prompt without corrupting it
pub struct EditorPrinter<P: rustyline::ExternalPrinter + Send> {
    inner: Mutex<P>,
}

impl<P: rustyline::ExternalPrinter + Send> EditorPrinter<P> {
    pub fn new(printer: P) -> Self {
        Self {
            inner: Mutex::new(printer),
        }
    }
}

impl<P: rustyline::ExternalPrinter + Send> ConsolePrinter for EditorPrinter<P> {
    fn print(&self, text: String) {
        let Ok(mut printer) = self.inner.lock() else {
            return;
        };
        if let Err(e) = printer.print(text) {
            debug!("External printer failed: {}", e);
        }
    }
}

/// Prints the result card for the latest snapshot when revealed
pub struct ConsoleViewport {
    state: watch::Receiver<WorkflowState>,
    catalog: &'static TranslationCatalog,
    ctx: RenderContext,
    printer: Arc<dyn ConsolePrinter>,
}

impl ConsoleViewport {
    pub fn new(
        state: watch::Receiver<WorkflowState>,
        ctx: RenderContext,
        printer: Arc<dyn ConsolePrinter>,
    ) -> Self {
        Self {
            state,
            catalog: TranslationCatalog::shared(),
            ctx,
            printer,
        }
    }

    /// Render the result card for the current snapshot, if there is one
    pub fn render(&self) -> Option<String> {
        let snapshot = self.state.borrow().clone();
        let response = snapshot.request.response()?;
        let entry = self.catalog.get(snapshot.locale);
        let ctx = self.ctx.with_direction(snapshot.direction());
        Some(format!(
            "\n{}",
            ConsoleFormatter::format_result(entry, response, &ctx)
        ))
    }
}

impl ResultViewport for ConsoleViewport {
    fn reveal_result(&self) {
        // The state may have moved on (new submit) before the reveal fired
        match self.render() {
            Some(card) => self.printer.print(card),
            None => debug!("Reveal skipped: no result in current state"),
        }
    }
}
