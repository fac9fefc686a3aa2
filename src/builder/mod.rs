//! Route-tree construction.
//!
//! # Data Flow
//! ```text
//! Router::group(|b| …)
//!     → group.rs (Builder: prefix + middleware, copied on every branch)
//!     → typed.rs (ContextBuilder<T>: Builder + resolver chain)
//!     → handle(): full pattern + wrapped handler → Router
//! ```
//!
//! # Design Decisions
//! - Branching copies prefix and middleware before extending them, so
//!   sibling branches never observe each other
//! - Middleware wraps outermost-first: `[A, B]` runs A, B, handler, B, A
//! - Resolvers run inside the middleware chain, right before the handler

pub mod group;
pub mod typed;

pub use group::Builder;
pub use typed::{with_context_handler, ContextBuilder, ParentChild, Resolver};
