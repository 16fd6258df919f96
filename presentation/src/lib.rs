//! Presentation layer for cardiacheck
//!
//! This crate contains the CLI definition, console rendering,
//! the loading indicator and the interactive form REPL.

pub mod cli;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use form::FormRepl;
pub use output::{
    ConsoleFormatter, ConsolePrinter, ConsoleViewport, RenderContext, StdoutPrinter, Theme,
};
pub use progress::LoadingIndicator;
