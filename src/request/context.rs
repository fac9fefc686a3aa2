//! Caller-supplied context carried by every request.
//!
//! # Responsibilities
//! - Carry typed values from the caller to handlers
//! - Carry an optional deadline and cancellation token
//!
//! # Design Decisions
//! - The router threads the context through untouched; it never reads it
//! - `Context::background()` is the empty value used when none is supplied
//! - Builder-style `with_*` methods return new values, the receiver is kept

use std::time::Instant;

use http::Extensions;

use crate::lifecycle::CancelToken;

/// Request-scoped values, deadline and cancellation.
#[derive(Debug, Clone, Default)]
pub struct Context {
    values: Extensions,
    deadline: Option<Instant>,
    cancel: Option<CancelToken>,
}

impl Context {
    /// The empty context: no values, no deadline, never cancelled.
    pub fn background() -> Self {
        Self::default()
    }

    /// Copy with `value` stored under its type, replacing any previous one.
    pub fn with_value<T>(&self, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        let mut cp = self.clone();
        cp.values.insert(value);
        cp
    }

    /// The stored value of type `T`, if any.
    pub fn value<T>(&self) -> Option<&T>
    where
        T: Send + Sync + 'static,
    {
        self.values.get::<T>()
    }

    /// Copy with a deadline. An earlier existing deadline is kept.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let mut cp = self.clone();
        cp.deadline = Some(match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        });
        cp
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// True when a deadline is set and has passed.
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Copy that observes `token`.
    pub fn with_cancellation(&self, token: CancelToken) -> Self {
        let mut cp = self.clone();
        cp.cancel = Some(token);
        cp
    }

    pub fn cancellation(&self) -> Option<&CancelToken> {
        self.cancel.as_ref()
    }

    /// True when the attached token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    /// Cancelled or past the deadline.
    pub fn is_done(&self) -> bool {
        self.is_cancelled() || self.is_expired()
    }
}
