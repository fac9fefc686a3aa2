//! Command tracing middleware.

use std::time::Instant;

use crate::handler::Middleware;
use crate::middleware::from_fn;

/// Log each command inside a span carrying its invocation ID.
///
/// Emits one event on completion or failure with the elapsed time.
pub fn trace() -> Middleware {
    from_fn(|req, next| {
        let span = tracing::info_span!(
            "command",
            invocation_id = %req.id(),
            args = ?req.args(),
        );
        let _guard = span.enter();

        let start = Instant::now();
        let result = next(req);
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(()) => tracing::info!(elapsed_ms, "Command completed"),
            Err(e) => tracing::warn!(elapsed_ms, error = %e, "Command failed"),
        }
        result
    })
}
