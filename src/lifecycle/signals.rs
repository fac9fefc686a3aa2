//! OS signal handling.
//!
//! # Responsibilities
//! - Listen for Ctrl-C (SIGINT)
//! - Translate it into cancellation of the running command
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Cancellation is cooperative: handlers observe it through their context

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::lifecycle::cancel::CancelSource;

/// Trigger `source` when the process receives Ctrl-C.
///
/// Must be called from within a Tokio runtime.
pub fn cancel_on_interrupt(source: Arc<CancelSource>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Interrupt received, cancelling command");
                source.trigger();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for interrupt signal");
            }
        }
    })
}
