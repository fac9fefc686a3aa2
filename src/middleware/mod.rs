//! Middleware for command handlers.
//!
//! # Data Flow
//! ```text
//! dispatch → mw[0] → mw[1] → … → resolvers → handler
//!          ←       ←       ← … ←           ←
//! ```
//!
//! # Design Decisions
//! - A middleware is a function from handler to handler (decorator)
//! - Nothing is installed by default; routes opt in via `Builder::with`
//! - A middleware may short-circuit or replace the result of `next`

pub mod cancel;
pub mod trace;

use std::sync::Arc;

use crate::handler::{Handler, HandlerResult, Middleware};
use crate::request::Request;

pub use cancel::cancellation;
pub use trace::trace;

/// Build a middleware from a function receiving the request and `next`.
///
/// ```
/// # use clirouter::{middleware, Router};
/// let audit = middleware::from_fn(|req, next| {
///     eprintln!("running {:?}", req.args());
///     next(req)
/// });
/// let mut r = Router::new();
/// r.group(|b| b.with(audit).handle("sync", "Sync", |_| Ok(())));
/// ```
pub fn from_fn<F>(f: F) -> Middleware
where
    F: Fn(&Request, &Handler) -> HandlerResult + Send + Sync + 'static,
{
    let f = Arc::new(f);
    Arc::new(move |next: Handler| -> Handler {
        let f = f.clone();
        Arc::new(move |req: &Request| f(req, &next))
    })
}
