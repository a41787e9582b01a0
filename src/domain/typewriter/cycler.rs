//! The typewriter cycler state machine.
//!
//! ## Transitions
//!
//! ```text
//! Typing   [revealed < len]  --reveal one char-->        Typing     (typing_interval)
//! Typing   [revealed == len] ------------------------->  Paused     (pause_after_typed)
//! Paused   ------------------------------------------->  Deleting   (deleting_interval)
//! Deleting [revealed > 0]    --remove one char-->        Deleting   (deleting_interval)
//! Deleting [revealed == 0]   --advance phrase (mod n)--> Typing     (typing_interval)
//! ```
//!
//! The cycler is pure: it never sleeps. Callers drive it by calling
//! [`TypewriterCycler::tick`] once the delay returned by the previous step has
//! elapsed (see `adapters::typewriter` for the tokio driver).

use std::time::Duration;

use super::errors::TypewriterError;
use super::mode::TypewriterMode;
use super::phrase::{Phrase, PhraseList};
use super::timings::TypewriterTimings;
use crate::domain::foundation::StateMachine;

/// Mutable state of one running cycler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CyclerState {
    active_phrase_index: usize,
    revealed_length: usize,
    mode: TypewriterMode,
}

impl CyclerState {
    pub fn active_phrase_index(&self) -> usize {
        self.active_phrase_index
    }

    pub fn revealed_length(&self) -> usize {
        self.revealed_length
    }

    pub fn mode(&self) -> TypewriterMode {
        self.mode
    }
}

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Whether the displayed text differs from before the tick.
    pub text_changed: bool,
    /// How long to wait before the next tick.
    pub next_tick: Duration,
}

impl Step {
    fn changed(next_tick: Duration) -> Self {
        Self {
            text_changed: true,
            next_tick,
        }
    }

    fn unchanged(next_tick: Duration) -> Self {
        Self {
            text_changed: false,
            next_tick,
        }
    }
}

/// Cycles forever over a phrase list, typing and deleting each phrase.
#[derive(Debug, Clone)]
pub struct TypewriterCycler {
    phrases: PhraseList,
    timings: TypewriterTimings,
    state: CyclerState,
}

impl TypewriterCycler {
    /// Creates a cycler at phrase 0, nothing revealed, typing.
    pub fn new(phrases: PhraseList, timings: TypewriterTimings) -> Self {
        Self {
            phrases,
            timings,
            state: CyclerState::default(),
        }
    }

    /// Validates the phrases and creates a cycler.
    ///
    /// # Errors
    ///
    /// Returns `TypewriterError::InvalidConfiguration` for an empty list or
    /// an empty phrase.
    pub fn from_phrases<I, S>(phrases: I, timings: TypewriterTimings) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(PhraseList::new(phrases)?, timings))
    }

    pub fn phrases(&self) -> &PhraseList {
        &self.phrases
    }

    pub fn timings(&self) -> &TypewriterTimings {
        &self.timings
    }

    pub fn state(&self) -> CyclerState {
        self.state
    }

    pub fn active_phrase(&self) -> &Phrase {
        &self.phrases[self.state.active_phrase_index]
    }

    /// The text currently shown: a prefix of the active phrase.
    pub fn displayed_text(&self) -> &str {
        self.active_phrase().prefix(self.state.revealed_length)
    }

    /// Delay before the very first tick.
    pub fn first_tick_delay(&self) -> Duration {
        self.timings.typing_interval()
    }

    /// Advances the state machine by one tick.
    pub fn tick(&mut self) -> Step {
        let phrase_len = self.active_phrase().len();
        let mode = self.state.mode;

        match mode {
            TypewriterMode::Typing if self.state.revealed_length < phrase_len => {
                self.state.revealed_length += 1;
                Step::changed(self.timings.typing_interval())
            }
            TypewriterMode::Typing => {
                self.enter(TypewriterMode::PausedAfterTyping);
                Step::unchanged(self.timings.pause_after_typed())
            }
            TypewriterMode::PausedAfterTyping => {
                self.enter(TypewriterMode::Deleting);
                Step::unchanged(self.timings.deleting_interval())
            }
            TypewriterMode::Deleting if self.state.revealed_length > 0 => {
                self.state.revealed_length -= 1;
                Step::changed(self.timings.deleting_interval())
            }
            TypewriterMode::Deleting => {
                self.state.active_phrase_index =
                    self.phrases.next_index(self.state.active_phrase_index);
                self.enter(TypewriterMode::Typing);
                Step::unchanged(self.timings.typing_interval())
            }
        }
    }

    /// Turns the cycler into an infinite iterator of displayed texts.
    pub fn frames(self) -> Frames {
        Frames::new(self)
    }

    fn enter(&mut self, next: TypewriterMode) {
        debug_assert!(
            self.state.mode.can_transition_to(&next),
            "typewriter cannot go from {} to {}",
            self.state.mode,
            next
        );
        self.state.mode = next;
    }
}

/// One distinct displayed text and how long it stays on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub hold: Duration,
    /// State at the moment the text appeared.
    pub state: CyclerState,
}

/// Lazy, never-ending sequence of frames.
///
/// Consecutive frames always differ in text; ticks that only change the
/// mode are folded into the previous frame's `hold`.
#[derive(Debug, Clone)]
pub struct Frames {
    cycler: TypewriterCycler,
    pending_delay: Duration,
}

impl Frames {
    fn new(cycler: TypewriterCycler) -> Self {
        let pending_delay = cycler.first_tick_delay();
        Self {
            cycler,
            pending_delay,
        }
    }
}

impl Iterator for Frames {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let text = self.cycler.displayed_text().to_owned();
        let state = self.cycler.state();
        let mut hold = self.pending_delay;

        // Terminates: phrases are non-empty, so at most two silent ticks in a row.
        loop {
            let step = self.cycler.tick();
            if step.text_changed {
                self.pending_delay = step.next_tick;
                break;
            }
            hold += step.next_tick;
        }

        Some(Frame { text, hold, state })
    }
}
