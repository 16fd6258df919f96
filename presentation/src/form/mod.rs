//! Interactive prediction form
//!
//! Provides a readline-based form: fields are edited with slash commands and
//! submissions run in the background while the prompt stays responsive.

mod command;
mod repl;

pub use command::{CommandError, ReplCommand};
pub use repl::FormRepl;
