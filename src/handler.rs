//! Handler and middleware function types.

use std::sync::Arc;

use crate::error::BoxError;
use crate::request::Request;

/// Result returned by handlers.
pub type HandlerResult = Result<(), BoxError>;

/// A command handler. Shared so middleware can capture it.
pub type Handler = Arc<dyn Fn(&Request) -> HandlerResult + Send + Sync + 'static>;

/// Wraps a handler, typically to add logging, guards, etc.
pub type Middleware = Arc<dyn Fn(Handler) -> Handler + Send + Sync + 'static>;

/// Box a closure as a [`Handler`].
pub fn handler<F>(f: F) -> Handler
where
    F: Fn(&Request) -> HandlerResult + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Apply `middleware` around `handler`, first entry outermost.
///
/// With `[A, B]` the call order is A, B, handler, then back out B, A.
pub fn wrap(handler: Handler, middleware: &[Middleware]) -> Handler {
    middleware
        .iter()
        .rev()
        .fold(handler, |next, mw| mw(next))
}
