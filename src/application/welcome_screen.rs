//! WelcomeScreen - plays the splash timeline with its typewriter caption.

use std::sync::Arc;

use tokio::time::{self, Instant};
use tracing::{debug, info};

use super::typewriter_widget::TypewriterWidget;
use crate::domain::foundation::{DomainError, StateMachine};
use crate::domain::typewriter::presets;
use crate::domain::welcome::{SplashPhase, SplashTimeline};
use crate::ports::TextSink;

/// Outcome of a finished splash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashReport {
    pub phase: SplashPhase,
    pub icons_shown: usize,
}

/// The welcome splash: icons appear, the caption types, then it fades out.
pub struct WelcomeScreen {
    timeline: SplashTimeline,
    sink: Arc<dyn TextSink>,
}

impl WelcomeScreen {
    pub fn new(timeline: SplashTimeline, sink: Arc<dyn TextSink>) -> Self {
        Self { timeline, sink }
    }

    /// Runs the splash to completion and unmounts its typewriter.
    ///
    /// # Errors
    ///
    /// Fails if the caption typewriter cannot be built.
    pub async fn show(&self) -> Result<SplashReport, DomainError> {
        let start = Instant::now();
        let widget = TypewriterWidget::mount(&presets::WELCOME, self.sink.clone())?;
        let mut phase = SplashPhase::Visible;
        info!(phase = %phase, "Welcome screen shown");

        let mut icons_shown = 0;
        for (index, delay) in self.timeline.icon_delays.iter().enumerate() {
            if *delay >= self.timeline.visible_for {
                break;
            }
            time::sleep_until(start + *delay).await;
            icons_shown = self.timeline.visible_icons(start.elapsed());
            debug!(icon = index, "Welcome icon revealed");
        }

        // Phases advance in order even when the runtime wakes late
        time::sleep_until(start + self.timeline.visible_for).await;
        phase = phase.transition_to(SplashPhase::FadingOut)?;
        debug!(phase = %phase, "Welcome screen fading");

        time::sleep_until(start + self.timeline.total()).await;
        phase = phase.transition_to(SplashPhase::Dismissed)?;
        widget.unmount().await;
        info!(phase = %phase, "Welcome screen dismissed");

        Ok(SplashReport { phase, icons_shown })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sinks::RecordingSink;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn splash_runs_to_dismissal() {
        let sink = Arc::new(RecordingSink::new());
        let screen = WelcomeScreen::new(SplashTimeline::default(), sink.clone());

        let start = Instant::now();
        let report = screen.show().await.unwrap();

        assert_eq!(start.elapsed(), Duration::from_millis(4200));
        assert_eq!(report.phase, SplashPhase::Dismissed);
        assert_eq!(report.icons_shown, 3);

        let texts = sink.texts();
        assert_eq!(texts[0], "");
        assert_eq!(texts[1], "d");
        assert!(texts.iter().any(|t| t == "dimaz-porto.vercel.app"));
    }

    #[tokio::test(start_paused = true)]
    async fn caption_stops_after_dismissal() {
        let sink = Arc::new(RecordingSink::new());
        let screen = WelcomeScreen::new(SplashTimeline::default(), sink.clone());
        screen.show().await.unwrap();

        let count = sink.len();
        time::sleep(Duration::from_secs(3)).await;
        assert_eq!(sink.len(), count);
    }

    #[tokio::test(start_paused = true)]
    async fn icons_after_fade_start_are_never_shown() {
        let timeline = SplashTimeline {
            visible_for: Duration::from_millis(300),
            fade_out: Duration::from_millis(100),
            icon_delays: vec![Duration::from_millis(100), Duration::from_millis(500)],
        };
        let screen = WelcomeScreen::new(timeline, Arc::new(RecordingSink::new()));

        let report = screen.show().await.unwrap();
        assert_eq!(report.icons_shown, 1);
        assert_eq!(report.phase, SplashPhase::Dismissed);
    }

    #[tokio::test(start_paused = true)]
    async fn instant_fade_still_passes_through_fading_out() {
        let timeline = SplashTimeline {
            visible_for: Duration::from_millis(300),
            fade_out: Duration::ZERO,
            icon_delays: vec![],
        };
        assert_eq!(
            timeline.phase_at(Duration::from_millis(300)),
            SplashPhase::Dismissed
        );
        let screen = WelcomeScreen::new(timeline, Arc::new(RecordingSink::new()));

        let start = Instant::now();
        let report = screen.show().await.unwrap();

        assert_eq!(start.elapsed(), Duration::from_millis(300));
        assert_eq!(report.phase, SplashPhase::Dismissed);
        assert_eq!(report.icons_shown, 0);
    }
}
