//! Result viewport port
//!
//! After a successful prediction the workflow asks the presentation layer to
//! bring the result into view once layout has settled.

/// Callback for revealing the result section
///
/// Implementations live in the presentation layer.
pub trait ResultViewport: Send + Sync {
    /// Bring the result section into view. Called at most once per success.
    fn reveal_result(&self);
}

/// No-op viewport for when nothing needs to scroll
pub struct NoViewport;

impl ResultViewport for NoViewport {
    fn reveal_result(&self) {}
}
