//! TextSink port - the rendering surface a typewriter draws on.
//!
//! The typewriter driver calls `render` every time the displayed text
//! changes. What the sink does with it (repaint a terminal line, push to a
//! browser, record for tests) is up to the adapter.

/// Port for displaying typewriter output.
///
/// Implementations must be cheap and non-blocking: `render` runs inside the
/// tick loop and delays the next tick while it runs.
pub trait TextSink: Send + Sync {
    /// Show `text`, replacing whatever was shown before.
    fn render(&self, text: &str);
}
