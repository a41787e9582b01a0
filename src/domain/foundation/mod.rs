//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary and the state machine trait shared by
//! the typewriter, showcase and welcome modules.

mod errors;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use state_machine::StateMachine;
