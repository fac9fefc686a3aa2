//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Ctrl-C (signals.rs)
//!     → CancelSource::trigger (cancel.rs)
//!     → every CancelToken carried by a request Context observes it
//!     → handlers / cancellation middleware decide what to do
//! ```
//!
//! # Design Decisions
//! - The router never reads cancellation state itself
//! - One source per process run; tokens are cheap clones

pub mod cancel;
pub mod signals;

pub use cancel::{CancelSource, CancelToken};
