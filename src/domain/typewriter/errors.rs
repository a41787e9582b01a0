//! Typewriter construction errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// What exactly was wrong with a typewriter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationIssue {
    #[error("phrase list is empty")]
    NoPhrases,

    #[error("phrase at index {index} is empty")]
    InvalidPhrase { index: usize },

    #[error("{field} must be greater than zero")]
    ZeroInterval { field: &'static str },
}

/// Errors raised when building a typewriter cycler.
///
/// All of them are reported before the first tick; a cycler that was
/// constructed successfully never fails afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypewriterError {
    #[error("Invalid typewriter configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationIssue),
}

impl TypewriterError {
    /// Returns the configuration issue behind this error.
    pub fn issue(&self) -> &ConfigurationIssue {
        match self {
            TypewriterError::InvalidConfiguration(issue) => issue,
        }
    }

    /// Maps the error onto the shared error code vocabulary.
    pub fn code(&self) -> ErrorCode {
        match self.issue() {
            ConfigurationIssue::InvalidPhrase { .. } => ErrorCode::InvalidPhrase,
            _ => ErrorCode::InvalidConfiguration,
        }
    }
}

impl From<TypewriterError> for DomainError {
    fn from(err: TypewriterError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err.issue() {
            ConfigurationIssue::InvalidPhrase { index } => {
                domain.with_detail("phrase_index", index.to_string())
            }
            ConfigurationIssue::ZeroInterval { field } => domain.with_detail("field", *field),
            ConfigurationIssue::NoPhrases => domain,
        }
    }
}
