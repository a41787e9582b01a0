//! Named typewriter configurations used on the site.
//!
//! The hero section and the welcome splash run the same cycler with
//! different phrases and cadence.

use std::time::Duration;

use super::cycler::TypewriterCycler;
use super::errors::TypewriterError;
use super::timings::TypewriterTimings;

/// Phrases plus cadence for one typewriter widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterPreset {
    pub name: &'static str,
    pub phrases: &'static [&'static str],
    pub typing_ms: u64,
    pub deleting_ms: u64,
    pub pause_ms: u64,
}

/// Landing hero subtitle.
pub const HERO: TypewriterPreset = TypewriterPreset {
    name: "hero",
    phrases: &["Network & Telecom Student", "Tech Enthusiast"],
    typing_ms: 100,
    deleting_ms: 50,
    pause_ms: 2000,
};

/// Link caption on the welcome splash.
pub const WELCOME: TypewriterPreset = TypewriterPreset {
    name: "welcome",
    phrases: &["dimaz-porto.vercel.app", "Visit My Portfolio"],
    typing_ms: 150,
    deleting_ms: 75,
    pause_ms: 1200,
};

impl TypewriterPreset {
    pub fn timings(&self) -> Result<TypewriterTimings, TypewriterError> {
        TypewriterTimings::new(
            Duration::from_millis(self.typing_ms),
            Duration::from_millis(self.deleting_ms),
            Duration::from_millis(self.pause_ms),
        )
    }

    /// Builds a fresh cycler for this preset.
    pub fn cycler(&self) -> Result<TypewriterCycler, TypewriterError> {
        TypewriterCycler::from_phrases(self.phrases.iter().copied(), self.timings()?)
    }
}
