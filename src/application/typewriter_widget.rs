//! TypewriterWidget - mounts a cycler onto a text sink and unmounts it.

use std::sync::Arc;

use tracing::info;

use crate::adapters::typewriter::{TypewriterHandle, TypewriterRunner};
use crate::domain::typewriter::{CyclerState, TypewriterCycler, TypewriterError, TypewriterPreset};
use crate::ports::TextSink;

/// A mounted typewriter. Unmount with [`TypewriterWidget::unmount`].
///
/// Dropping the widget without unmounting still cancels the timer loop, but
/// only `unmount` waits for it to finish.
pub struct TypewriterWidget {
    name: String,
    handle: TypewriterHandle,
}

impl TypewriterWidget {
    /// Mounts a preset. The empty text is rendered immediately.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the preset's phrases or timings are
    /// unusable. Nothing is rendered in that case.
    pub fn mount(preset: &TypewriterPreset, sink: Arc<dyn TextSink>) -> Result<Self, TypewriterError> {
        let cycler = preset.cycler()?;
        Ok(Self::mount_cycler(preset.name, cycler, sink))
    }

    /// Mounts an already built cycler under `name`.
    pub fn mount_cycler(name: impl Into<String>, cycler: TypewriterCycler, sink: Arc<dyn TextSink>) -> Self {
        let name = name.into();
        info!(widget = %name, phrases = cycler.phrases().len(), "Typewriter mounted");
        let handle = TypewriterRunner::new(cycler, sink).with_label(name.clone()).spawn();
        Self { name, handle }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stops the timer loop; no render happens after this returns.
    pub async fn unmount(self) -> Option<CyclerState> {
        let state = self.handle.stop().await;
        info!(widget = %self.name, ?state, "Typewriter unmounted");
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sinks::RecordingSink;
    use crate::domain::typewriter::{presets, TypewriterMode};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn hero_types_its_first_phrase() {
        let sink = Arc::new(RecordingSink::new());
        let widget = TypewriterWidget::mount(&presets::HERO, sink.clone()).unwrap();
        assert_eq!(widget.name(), "hero");

        // "Network" is 7 characters at 100ms each
        tokio::time::sleep(Duration::from_millis(750)).await;
        let state = widget.unmount().await.unwrap();

        assert_eq!(sink.last().as_deref(), Some("Network"));
        assert_eq!(state.revealed_length(), 7);
        assert_eq!(state.mode(), TypewriterMode::Typing);
    }

    #[tokio::test]
    async fn invalid_preset_is_rejected_without_rendering() {
        let broken = TypewriterPreset {
            name: "broken",
            phrases: &[],
            typing_ms: 100,
            deleting_ms: 50,
            pause_ms: 2000,
        };
        let sink = Arc::new(RecordingSink::new());

        let result = TypewriterWidget::mount(&broken, sink.clone());
        assert!(result.is_err());
        assert!(sink.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_stops_rendering() {
        let sink = Arc::new(RecordingSink::new());
        let widget = TypewriterWidget::mount(&presets::WELCOME, sink.clone()).unwrap();
        tokio::time::sleep(Duration::from_millis(400)).await;
        widget.unmount().await;

        let count = sink.len();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(sink.len(), count);
    }
}
