//! Console rendering
//!
//! - [`RenderContext`]: layout direction, theme and width for one render
//! - [`ConsoleFormatter`]: form, result card, info sections and JSON report
//! - [`ConsoleViewport`]: prints the result card when the workflow reveals it

pub mod console;
pub mod render_context;
pub mod viewport;

pub use console::{ConsoleFormatter, JsonReport};
pub use render_context::{RenderContext, Theme};
pub use viewport::{ConsolePrinter, ConsoleViewport, EditorPrinter, StdoutPrinter};
