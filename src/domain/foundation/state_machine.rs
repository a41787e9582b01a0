//! State machine trait for mode and phase enums.
//!
//! Provides a consistent interface for validating and performing transitions
//! across the view-state machines of the site (typewriter mode, splash phase).

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors define valid transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for TypewriterMode {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!(
///             (self, target),
///             (Typing, PausedAfterTyping) | (PausedAfterTyping, Deleting) | (Deleting, Typing)
///         )
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Typing => vec![PausedAfterTyping],
///             // ... etc
///         }
///     }
/// }
///
/// let next = mode.transition_to(TypewriterMode::PausedAfterTyping)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use crate::domain::typewriter::TypewriterMode;
    use crate::domain::welcome::SplashPhase;

    const SPLASH: [SplashPhase; 3] = [
        SplashPhase::Visible,
        SplashPhase::FadingOut,
        SplashPhase::Dismissed,
    ];

    const MODES: [TypewriterMode; 3] = [
        TypewriterMode::Typing,
        TypewriterMode::PausedAfterTyping,
        TypewriterMode::Deleting,
    ];

    fn assert_consistent<S: StateMachine>(states: &[S]) {
        for state in states {
            for target in states {
                assert_eq!(
                    state.can_transition_to(target),
                    state.valid_transitions().contains(target),
                    "{:?} -> {:?}",
                    state,
                    target
                );
            }
        }
    }

    #[test]
    fn splash_cannot_skip_the_fade() {
        let err = SplashPhase::Visible
            .transition_to(SplashPhase::Dismissed)
            .unwrap_err();
        assert_eq!(DomainError::from(err).code, ErrorCode::InvalidStateTransition);
        assert_eq!(
            SplashPhase::Visible.transition_to(SplashPhase::FadingOut),
            Ok(SplashPhase::FadingOut)
        );
    }

    #[test]
    fn only_dismissed_splash_is_terminal() {
        assert!(SplashPhase::Dismissed.is_terminal());
        assert!(!SplashPhase::Visible.is_terminal());
        assert!(!SplashPhase::FadingOut.is_terminal());
    }

    #[test]
    fn typewriter_modes_cycle_without_terminal_state() {
        let mut mode = TypewriterMode::Typing;
        for expected in [
            TypewriterMode::PausedAfterTyping,
            TypewriterMode::Deleting,
            TypewriterMode::Typing,
        ] {
            mode = mode.transition_to(expected).unwrap();
            assert!(!mode.is_terminal());
        }
        assert!(TypewriterMode::Typing
            .transition_to(TypewriterMode::Deleting)
            .is_err());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        assert_consistent(&SPLASH);
        assert_consistent(&MODES);
    }
}
