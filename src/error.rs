//! Error types for routing and dispatch.
//!
//! # Design Decisions
//! - Handlers and resolvers return a boxed error so callers keep their own
//!   error types; dispatch hands it back untouched inside `Error::Command`
//! - `Error` values that travel through a handler chain boxed come back out
//!   as themselves, never wrapped twice
//! - No retries: every failure is terminal for one dispatch

use thiserror::Error;

/// Error type returned by handlers, middleware and context resolvers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by the router.
#[derive(Debug, Error)]
pub enum Error {
    /// No registered pattern matched the arguments.
    #[error("no matching command")]
    NoMatch,

    /// A pattern has more segments than the rank encoding can hold.
    #[error("pattern {pattern:?} has {segments} segments, maximum is {max}")]
    PatternTooLong {
        pattern: String,
        segments: usize,
        max: usize,
    },

    /// A named parameter was required but not bound by the matched pattern.
    #[error("missing parameter <{0}>")]
    MissingParam(String),

    /// The request context was cancelled or its deadline passed.
    #[error("command cancelled")]
    Cancelled,

    /// A handler or context resolver failed.
    #[error(transparent)]
    Command(BoxError),
}

impl Error {
    /// Wrap a handler failure, unwrapping errors that are already ours.
    pub fn from_command(err: BoxError) -> Self {
        match err.downcast::<Error>() {
            Ok(own) => *own,
            Err(other) => Error::Command(other),
        }
    }

    /// The handler or resolver error, if this is one.
    pub fn command(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Error::Command(err) => Some(err.as_ref()),
            _ => None,
        }
    }

    /// Consume into the handler or resolver error, if this is one.
    pub fn into_command(self) -> Option<BoxError> {
        match self {
            Error::Command(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, Error::NoMatch)
    }
}

/// Result type for router operations.
pub type Result<T> = std::result::Result<T, Error>;
