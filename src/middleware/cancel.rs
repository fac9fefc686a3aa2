//! Cancellation guard middleware.
//! Refuses to start commands whose context is already done.

use crate::error::Error;
use crate::handler::Middleware;
use crate::middleware::from_fn;

/// Fail with [`Error::Cancelled`] instead of calling `next` when the
/// request context is cancelled or past its deadline.
pub fn cancellation() -> Middleware {
    from_fn(|req, next| {
        let ctx = req.context();
        if ctx.is_done() {
            tracing::debug!(
                invocation_id = %req.id(),
                cancelled = ctx.is_cancelled(),
                expired = ctx.is_expired(),
                "Skipping command, context done"
            );
            return Err(Error::Cancelled.into());
        }
        next(req)
    })
}
