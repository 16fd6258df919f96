//! Application-level configuration.
//!
//! - [`WorkflowConfig`]: initial locale, initial form values and reveal timing

pub mod workflow_config;

pub use workflow_config::{DEFAULT_REVEAL_DELAY, WorkflowConfig};
