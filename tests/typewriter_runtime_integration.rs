//! Integration tests for the typewriter on the tokio runtime.
//!
//! These tests drive the cycler through the public runner and widget APIs
//! with paused time and check:
//! 1. The exact render trace and its timing
//! 2. Construction failures render nothing
//! 3. Instances are independent
//! 4. Nothing renders after unmount

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use tokio::time::{self, Instant};

use portfolio_showcase::adapters::{typewriter_stream, RecordingSink, TypewriterRunner};
use portfolio_showcase::application::TypewriterWidget;
use portfolio_showcase::domain::typewriter::{
    presets, ConfigurationIssue, TypewriterCycler, TypewriterError, TypewriterMode,
    TypewriterTimings,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn short_timings() -> TypewriterTimings {
    TypewriterTimings::from_millis(100, 50, 200).unwrap()
}

fn hi_go() -> TypewriterCycler {
    TypewriterCycler::from_phrases(["Hi", "Go"], short_timings()).unwrap()
}

fn trace(sink: &RecordingSink) -> Vec<(u64, String)> {
    sink.rendered()
        .into_iter()
        .map(|r| (r.at.as_millis() as u64, r.text))
        .collect()
}

// =============================================================================
// Render Trace
// =============================================================================

#[tokio::test(start_paused = true)]
async fn full_cycle_renders_on_schedule() {
    let sink = Arc::new(RecordingSink::new());
    let handle = TypewriterRunner::new(hi_go(), sink.clone()).spawn();

    time::sleep(Duration::from_millis(1350)).await;
    handle.stop().await;

    let expected: Vec<(u64, String)> = [
        (0, ""),
        (100, "H"),
        (200, "Hi"),
        (550, "H"),
        (600, ""),
        (750, "G"),
        (850, "Go"),
        (1200, "G"),
        (1250, ""),
    ]
    .into_iter()
    .map(|(at, text)| (at, text.to_string()))
    .collect();

    assert_eq!(trace(&sink), expected);
}

#[tokio::test(start_paused = true)]
async fn cycle_wraps_back_to_first_phrase() {
    let sink = Arc::new(RecordingSink::new());
    let handle = TypewriterRunner::new(hi_go(), sink.clone()).spawn();

    time::sleep(Duration::from_millis(1450)).await;
    let state = handle.stop().await.unwrap();

    assert_eq!(sink.last().as_deref(), Some("H"));
    assert_eq!(state.active_phrase_index(), 0);
    assert_eq!(state.mode(), TypewriterMode::Typing);
}

#[tokio::test(start_paused = true)]
async fn stream_yields_same_texts_as_runner() {
    let start = Instant::now();
    let texts: Vec<(u64, String)> = typewriter_stream(hi_go())
        .take(9)
        .map(|text| (start.elapsed().as_millis() as u64, text))
        .collect()
        .await;

    let sink = Arc::new(RecordingSink::new());
    let handle = TypewriterRunner::new(hi_go(), sink.clone()).spawn();
    time::sleep(Duration::from_millis(1350)).await;
    handle.stop().await;

    assert_eq!(texts, trace(&sink));
}

// =============================================================================
// Construction
// =============================================================================

#[tokio::test]
async fn empty_phrase_list_is_rejected() {
    let result = TypewriterCycler::from_phrases(Vec::<String>::new(), short_timings());
    assert!(matches!(
        result,
        Err(TypewriterError::InvalidConfiguration(ConfigurationIssue::NoPhrases))
    ));
}

#[tokio::test]
async fn empty_phrase_is_rejected_with_its_index() {
    let result = TypewriterCycler::from_phrases(["Hi", "", "Go"], short_timings());
    assert!(matches!(
        result,
        Err(TypewriterError::InvalidConfiguration(ConfigurationIssue::InvalidPhrase { index: 1 }))
    ));
}

#[tokio::test]
async fn zero_interval_is_rejected() {
    let result = TypewriterTimings::from_millis(0, 50, 2000);
    assert!(result.is_err());
}

// =============================================================================
// Lifecycle
// =============================================================================

#[tokio::test(start_paused = true)]
async fn instances_do_not_share_state() {
    let hero_sink = Arc::new(RecordingSink::new());
    let welcome_sink = Arc::new(RecordingSink::new());
    let hero = TypewriterWidget::mount(&presets::HERO, hero_sink.clone()).unwrap();
    let welcome = TypewriterWidget::mount(&presets::WELCOME, welcome_sink.clone()).unwrap();

    time::sleep(Duration::from_millis(310)).await;
    hero.unmount().await;
    welcome.unmount().await;

    assert_eq!(hero_sink.last().as_deref(), Some("Net"));
    assert_eq!(welcome_sink.last().as_deref(), Some("di"));
}

#[tokio::test(start_paused = true)]
async fn no_render_after_unmount() {
    let sink = Arc::new(RecordingSink::new());
    let widget = TypewriterWidget::mount(&presets::HERO, sink.clone()).unwrap();

    time::sleep(Duration::from_millis(500)).await;
    widget.unmount().await;
    let rendered = sink.len();

    time::sleep(Duration::from_secs(10)).await;
    assert_eq!(sink.len(), rendered);
}

#[tokio::test(start_paused = true)]
async fn unmount_during_pause_stops_cleanly() {
    let sink = Arc::new(RecordingSink::new());
    let handle = TypewriterRunner::new(hi_go(), sink.clone()).spawn();

    // Paused on "Hi" between 300ms and 500ms
    time::sleep(Duration::from_millis(400)).await;
    let state = handle.stop().await.unwrap();

    assert_eq!(state.mode(), TypewriterMode::PausedAfterTyping);
    assert_eq!(sink.last().as_deref(), Some("Hi"));
}
