//! Pattern router for command-line arguments.
//!
//! Routes argv to handlers the way an HTTP router routes paths: patterns with
//! literal and `<param>` segments, nested route groups, middleware, and typed
//! contexts resolved per invocation.
//!
//! ```
//! use clirouter::Router;
//!
//! let mut r = Router::new();
//! r.group(|b| {
//!     let mut app = b.with_context(|_req| Ok("cli-app".to_string()));
//!     app.route("comp <component>", |b| {
//!         let mut comp = b.derive(|app: &String, req| {
//!             Ok(format!("{}:{}", app, req.params().require("component")?))
//!         });
//!         comp.handle("image build", "Build images", |req, comp| {
//!             assert_eq!(comp, "cli-app:cv-server");
//!             assert_eq!(req.extra(), ["--push"]);
//!             Ok(())
//!         });
//!     });
//! });
//!
//! r.dispatch(None, &["comp", "cv-server", "image", "build", "--push"]).unwrap();
//! ```

// Core
pub mod builder;
pub mod handler;
pub mod request;
pub mod routing;

// Around the core
pub mod error;
pub mod help;
pub mod middleware;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use builder::{with_context_handler, Builder, ContextBuilder, ParentChild, Resolver};
pub use error::{BoxError, Error, Result};
pub use handler::{Handler, HandlerResult, Middleware};
pub use help::HelpFormatter;
pub use request::{Context, Params, Request};
pub use routing::{RouteInfo, Router};
