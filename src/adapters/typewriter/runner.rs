//! TypewriterRunner - tokio driver for a typewriter cycler.
//!
//! Owns one `TypewriterCycler` and one pending timer. Each time the timer
//! fires the cycler ticks once, the sink is told about text changes, and only
//! then is the next timer armed, so ticks of one runner never overlap.
//!
//! ## Cancellation
//!
//! The runner listens on a `watch` channel. [`TypewriterHandle::stop`] flips
//! it and waits for the task to finish: once `stop` returns, the sink will
//! not be called again. Dropping the handle without `stop` aborts the task.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, warn};

use crate::domain::typewriter::{CyclerState, TypewriterCycler};
use crate::ports::TextSink;

/// Drives a cycler in real (tokio) time and renders into a sink.
pub struct TypewriterRunner {
    cycler: TypewriterCycler,
    sink: Arc<dyn TextSink>,
    label: String,
}

impl TypewriterRunner {
    pub fn new(cycler: TypewriterCycler, sink: Arc<dyn TextSink>) -> Self {
        Self {
            cycler,
            sink,
            label: "typewriter".to_string(),
        }
    }

    /// Name used in log lines, e.g. the widget hosting this runner.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Run the tick loop until the shutdown signal is received.
    ///
    /// Renders the initial (empty) text right away. A sender that is dropped
    /// counts as a shutdown signal.
    ///
    /// # Returns
    ///
    /// The cycler as it was when the loop stopped.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> TypewriterCycler {
        if *shutdown.borrow() {
            return self.cycler;
        }

        debug!(label = %self.label, phrases = self.cycler.phrases().len(), "Typewriter started");
        self.sink.render(self.cycler.displayed_text());

        let sleep = time::sleep(self.cycler.first_tick_delay());
        tokio::pin!(sleep);

        loop {
            tokio::select! {
                biased;

                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        debug!(label = %self.label, state = ?self.cycler.state(), "Typewriter stopped");
                        return self.cycler;
                    }
                }

                _ = &mut sleep => {
                    let before = self.cycler.state().mode();
                    let step = self.cycler.tick();
                    if step.text_changed {
                        self.sink.render(self.cycler.displayed_text());
                    }
                    let after = self.cycler.state().mode();
                    if before != after {
                        debug!(label = %self.label, from = %before, to = %after, "Typewriter mode change");
                    }
                    sleep.as_mut().reset(Instant::now() + step.next_tick);
                }
            }
        }
    }

    /// Spawn the loop on the current tokio runtime.
    pub fn spawn(self) -> TypewriterHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let label = self.label.clone();
        let task = tokio::spawn(self.run(shutdown_rx));
        TypewriterHandle {
            label,
            shutdown: shutdown_tx,
            task: Some(task),
        }
    }
}

/// Owner-side handle of a spawned runner.
pub struct TypewriterHandle {
    label: String,
    shutdown: watch::Sender<bool>,
    task: Option<JoinHandle<TypewriterCycler>>,
}

impl TypewriterHandle {
    /// Stop the runner and wait until it has fully exited.
    ///
    /// Returns the final cycler state, or `None` if the task had panicked or
    /// was already aborted.
    pub async fn stop(mut self) -> Option<CyclerState> {
        // Err only means the runner is already gone
        let _ = self.shutdown.send(true);
        let task = self.task.take()?;
        match task.await {
            Ok(cycler) => Some(cycler.state()),
            Err(e) => {
                warn!(label = %self.label, error = %e, "Typewriter task ended abnormally");
                None
            }
        }
    }
}

impl Drop for TypewriterHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = self.shutdown.send(true);
            task.abort();
        }
    }
}
