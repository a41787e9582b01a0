//! TypewriterMode enum for the three phases of a cycle.

use std::fmt;

use crate::domain::foundation::StateMachine;

/// Phase of the typewriter cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypewriterMode {
    /// Revealing the active phrase one character per tick.
    #[default]
    Typing,
    /// Full phrase shown, waiting out the pause.
    PausedAfterTyping,
    /// Removing the last character per tick.
    Deleting,
}

impl StateMachine for TypewriterMode {
    fn can_transition_to(&self, target: &Self) -> bool {
        use TypewriterMode::*;
        matches!(
            (self, target),
            (Typing, PausedAfterTyping) | (PausedAfterTyping, Deleting) | (Deleting, Typing)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use TypewriterMode::*;
        match self {
            Typing => vec![PausedAfterTyping],
            PausedAfterTyping => vec![Deleting],
            Deleting => vec![Typing],
        }
    }
}

impl fmt::Display for TypewriterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TypewriterMode::Typing => "Typing",
            TypewriterMode::PausedAfterTyping => "PausedAfterTyping",
            TypewriterMode::Deleting => "Deleting",
        };
        write!(f, "{}", s)
    }
}
