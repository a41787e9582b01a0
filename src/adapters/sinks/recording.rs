//! In-memory text sink for testing.
//!
//! Captures every rendered text together with the (tokio) time it arrived,
//! so timer tests can assert on the full trace.
//!
//! # Panics
//!
//! Methods use `.expect()` on the internal lock and panic if it is poisoned.
//! This adapter is meant for tests and local tooling only.

use std::sync::Mutex;
use std::time::Duration;

use tokio::time::Instant;

use crate::ports::TextSink;

/// One captured render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Time since the sink was created.
    pub at: Duration,
    pub text: String,
}

/// Text sink that records instead of displaying.
///
/// # Example
///
/// ```ignore
/// let sink = Arc::new(RecordingSink::new());
/// let handle = TypewriterRunner::new(cycler, sink.clone()).spawn();
/// // ...
/// assert_eq!(sink.texts(), vec!["", "H", "Hi"]);
/// ```
pub struct RecordingSink {
    created: Instant,
    rendered: Mutex<Vec<Rendered>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            created: Instant::now(),
            rendered: Mutex::new(Vec::new()),
        }
    }

    // === Test Helpers ===

    /// All captured renders, oldest first.
    pub fn rendered(&self) -> Vec<Rendered> {
        self.rendered
            .lock()
            .expect("RecordingSink: lock poisoned")
            .clone()
    }

    /// Only the texts, oldest first.
    pub fn texts(&self) -> Vec<String> {
        self.rendered().into_iter().map(|r| r.text).collect()
    }

    /// The most recent text, if anything was rendered.
    pub fn last(&self) -> Option<String> {
        self.rendered
            .lock()
            .expect("RecordingSink: lock poisoned")
            .last()
            .map(|r| r.text.clone())
    }

    pub fn len(&self) -> usize {
        self.rendered
            .lock()
            .expect("RecordingSink: lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSink for RecordingSink {
    fn render(&self, text: &str) {
        let at = self.created.elapsed();
        self.rendered
            .lock()
            .expect("RecordingSink: lock poisoned")
            .push(Rendered {
                at,
                text: text.to_string(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn records_text_with_elapsed_time() {
        let sink = RecordingSink::new();
        sink.render("");
        tokio::time::sleep(Duration::from_millis(100)).await;
        sink.render("H");

        let rendered = sink.rendered();
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[1].at, Duration::from_millis(100));
        assert_eq!(sink.last().as_deref(), Some("H"));
    }

    #[test]
    fn starts_empty() {
        let sink = RecordingSink::new();
        assert!(sink.is_empty());
        assert_eq!(sink.last(), None);
    }
}
