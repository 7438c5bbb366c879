//! Shared error types for the services crate.

use thiserror::Error;

/// Misuse of the quiz engine.
///
/// Every variant leaves the session untouched, so callers can treat them as
/// no-ops.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("session already started")]
    AlreadyStarted,
    #[error("no session is running")]
    NotRunning,
    #[error("option {index} does not exist (question has {count} options)")]
    OptionOutOfRange { index: usize, count: usize },
    #[error("language can only change before a session starts")]
    LanguageLocked,
}
