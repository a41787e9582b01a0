//! Typewriter module - text-cycling state machine.
//!
//! Types each phrase character by character, pauses, deletes it, then moves
//! on to the next phrase, forever. Everything here is synchronous and free of
//! timers; the tokio driver lives in `adapters::typewriter`.

mod cycler;
mod errors;
mod mode;
mod phrase;
pub mod presets;
mod timings;

pub use cycler::{CyclerState, Frame, Frames, Step, TypewriterCycler};
pub use errors::{ConfigurationIssue, TypewriterError};
pub use mode::TypewriterMode;
pub use phrase::{Phrase, PhraseList};
pub use presets::TypewriterPreset;
pub use timings::TypewriterTimings;
