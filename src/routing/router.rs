//! Route table and dispatch.
//!
//! # Responsibilities
//! - Store registered routes
//! - Pick the highest-ranked route matching an argv
//! - Build the request and invoke the winning handler
//! - Expose route listings for help output
//!
//! # Design Decisions
//! - Registered at startup through `&mut Router`, read-only afterwards
//! - O(n) scan over all routes (acceptable for typical command counts)
//! - Ties go to the earliest registered route (strict `>` when updating best)
//! - Explicit NoMatch rather than silent default

use std::io;
use std::sync::Arc;

use crate::builder::Builder;
use crate::error::{Error, Result};
use crate::handler::{Handler, HandlerResult};
use crate::help::HelpFormatter;
use crate::observability::metrics;
use crate::request::{Context, Request};
use crate::routing::matcher::{self, Match, MAX_SEGMENTS};
use crate::routing::pattern::{self, Segment};

/// A registered command.
struct Route {
    segments: Vec<Segment>,
    handler: Handler,
    description: String,
}

/// Listing entry for one registered route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    /// Display pattern, e.g. `comp <component> image build`.
    pub pattern: String,
    /// Ordering key from sort hints and literal segments.
    pub sort_key: String,
    pub description: String,
}

/// Holds all registered routes and dispatches argv to them.
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Create an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a full pattern.
    ///
    /// ```
    /// # use clirouter::Router;
    /// let mut r = Router::new();
    /// r.handle("comp <component> image build", "Build images", |req| {
    ///     println!("building {}", req.param("component").unwrap_or_default());
    ///     Ok(())
    /// });
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the pattern has more than [`MAX_SEGMENTS`] segments. Use
    /// [`Router::try_handle`] to get an error instead.
    pub fn handle<H>(&mut self, pattern: &str, description: &str, handler: H)
    where
        H: Fn(&Request) -> HandlerResult + Send + Sync + 'static,
    {
        self.handle_arc(pattern, description, Arc::new(handler));
    }

    /// Register a handler, returning an error for patterns that are too long.
    pub fn try_handle<H>(&mut self, pattern: &str, description: &str, handler: H) -> Result<()>
    where
        H: Fn(&Request) -> HandlerResult + Send + Sync + 'static,
    {
        self.try_handle_arc(pattern, description, Arc::new(handler))
    }

    pub(crate) fn handle_arc(&mut self, pattern: &str, description: &str, handler: Handler) {
        if let Err(e) = self.try_handle_arc(pattern, description, handler) {
            panic!("invalid route: {e}");
        }
    }

    pub(crate) fn try_handle_arc(
        &mut self,
        pattern: &str,
        description: &str,
        handler: Handler,
    ) -> Result<()> {
        let segments = pattern::parse(pattern);
        if segments.len() > MAX_SEGMENTS {
            return Err(Error::PatternTooLong {
                pattern: pattern.to_string(),
                segments: segments.len(),
                max: MAX_SEGMENTS,
            });
        }

        tracing::trace!(pattern = %pattern::render(&segments), "Route registered");
        self.routes.push(Route {
            segments,
            handler,
            description: description.to_string(),
        });
        metrics::record_routes_registered(self.routes.len());
        Ok(())
    }

    /// Build routes with a nestable [`Builder`].
    pub fn group<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Builder<'_>),
    {
        let mut builder = Builder::new(self);
        f(&mut builder);
    }

    /// Run the best-matching route for `argv`.
    ///
    /// `None` for `context` means [`Context::background`]. The handler's
    /// result is returned as is.
    pub fn dispatch<S: AsRef<str>>(&self, context: Option<Context>, argv: &[S]) -> Result<()> {
        let Some((route, matched)) = self.best_match(argv) else {
            let args: Vec<&str> = argv.iter().map(|s| s.as_ref()).collect();
            tracing::debug!(args = ?args, "No matching command");
            metrics::record_dispatch(metrics::Outcome::NoMatch);
            return Err(Error::NoMatch);
        };

        let args = argv.iter().map(|s| s.as_ref().to_string()).collect();
        let req = Request::new(
            context.unwrap_or_else(Context::background),
            args,
            matched.params,
            route.segments.len(),
        );

        tracing::debug!(
            invocation_id = %req.id(),
            pattern = %pattern::render(&route.segments),
            extra = req.extra().len(),
            "Dispatching command"
        );

        let result = (route.handler)(&req).map_err(Error::from_command);
        metrics::record_dispatch(match &result {
            Ok(()) => metrics::Outcome::Ok,
            Err(_) => metrics::Outcome::Error,
        });
        result
    }

    fn best_match<S: AsRef<str>>(&self, argv: &[S]) -> Option<(&Route, Match)> {
        let mut best: Option<(&Route, Match)> = None;
        for route in &self.routes {
            let Some(m) = matcher::evaluate(&route.segments, argv) else {
                continue;
            };
            let better = match &best {
                Some((_, current)) => m.rank > current.rank,
                None => true,
            };
            if better {
                best = Some((route, m));
            }
        }
        best
    }

    /// Registered routes in registration order.
    pub fn routes(&self) -> Vec<RouteInfo> {
        self.routes
            .iter()
            .map(|r| RouteInfo {
                pattern: pattern::render(&r.segments),
                sort_key: pattern::sort_key(&r.segments),
                description: r.description.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Write the default help listing to `w`.
    pub fn print_help<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        HelpFormatter::default().write(self, w)
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes())
            .finish()
    }
}
