//! Nestable route groups with prefixes and middleware.

use std::sync::Arc;

use crate::builder::typed::ContextBuilder;
use crate::error::{BoxError, Result};
use crate::handler::{self, Handler, HandlerResult, Middleware};
use crate::request::Request;
use crate::routing::pattern;
use crate::routing::Router;

/// Builds routes under an accumulated prefix and middleware stack.
///
/// Every branch (`route`, `with`, `with_context`) works on copies, so
/// additions made inside one branch are never seen by its siblings or parent.
///
/// ```
/// # use clirouter::Router;
/// let mut r = Router::new();
/// r.group(|b| {
///     b.route("comp <component>", |b| {
///         b.route("image", |b| {
///             b.handle("build", "Build images", |_req| Ok(()));
///         });
///     });
/// });
/// assert_eq!(r.routes()[0].pattern, "comp <component> image build");
/// ```
pub struct Builder<'r> {
    router: &'r mut Router,
    prefix: Vec<String>,
    middleware: Vec<Middleware>,
}

impl<'r> Builder<'r> {
    /// A root builder with no prefix and no middleware.
    pub fn new(router: &'r mut Router) -> Self {
        Self {
            router,
            prefix: Vec::new(),
            middleware: Vec::new(),
        }
    }

    /// Child builder: copied prefix extended by `path`, copied middleware
    /// extended by `middleware`.
    pub(crate) fn branch(&mut self, path: &str, middleware: &[Middleware]) -> Builder<'_> {
        let mut prefix = self.prefix.clone();
        prefix.extend(pattern::tokenize(path).map(str::to_string));

        let mut stack = self.middleware.clone();
        stack.extend_from_slice(middleware);

        Builder {
            router: &mut *self.router,
            prefix,
            middleware: stack,
        }
    }

    /// Add a path prefix for all routes defined in `f`.
    ///
    /// `path` uses pattern syntax: literals, `<params>` and sort hints.
    pub fn route<F>(&mut self, path: &str, f: F)
    where
        F: FnOnce(&mut Builder<'_>),
    {
        let mut child = self.branch(path, &[]);
        f(&mut child);
    }

    /// Builder whose routes are additionally wrapped by `middleware`.
    ///
    /// Middleware added first runs outermost.
    pub fn with(&mut self, middleware: Middleware) -> Builder<'_> {
        self.branch("", &[middleware])
    }

    /// Like [`Builder::with`] for several middleware, in order.
    pub fn with_all<I>(&mut self, middleware: I) -> Builder<'_>
    where
        I: IntoIterator<Item = Middleware>,
    {
        let middleware: Vec<_> = middleware.into_iter().collect();
        self.branch("", &middleware)
    }

    /// Attach a typed context resolved from each request.
    pub fn with_context<T, R>(&mut self, resolve: R) -> ContextBuilder<'_, T>
    where
        T: 'static,
        R: Fn(&Request) -> std::result::Result<T, BoxError> + Send + Sync + 'static,
    {
        ContextBuilder::new(self.branch("", &[]), Arc::new(resolve))
    }

    /// Register `handler` under the current prefix + `path`.
    ///
    /// # Panics
    ///
    /// Panics if the full pattern is too long; see [`Router::handle`].
    pub fn handle<H>(&mut self, path: &str, description: &str, handler: H)
    where
        H: Fn(&Request) -> HandlerResult + Send + Sync + 'static,
    {
        self.handle_arc(path, description, Arc::new(handler));
    }

    /// Register `handler`, returning an error if the full pattern is too long.
    pub fn try_handle<H>(&mut self, path: &str, description: &str, handler: H) -> Result<()>
    where
        H: Fn(&Request) -> HandlerResult + Send + Sync + 'static,
    {
        let pattern = self.full_pattern(path);
        let wrapped = handler::wrap(Arc::new(handler), &self.middleware);
        self.router.try_handle_arc(&pattern, description, wrapped)
    }

    pub(crate) fn handle_arc(&mut self, path: &str, description: &str, handler: Handler) {
        let pattern = self.full_pattern(path);
        let wrapped = handler::wrap(handler, &self.middleware);
        self.router.handle_arc(&pattern, description, wrapped);
    }

    /// Accumulated prefix as pattern text.
    pub fn prefix(&self) -> String {
        self.prefix.join(" ")
    }

    fn full_pattern(&self, path: &str) -> String {
        self.prefix
            .iter()
            .map(String::as_str)
            .chain(pattern::tokenize(path))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
