//! Typed request contexts layered on top of [`Builder`].
//!
//! # Data Flow
//! ```text
//! Builder::with_context(resolve_app)        → ContextBuilder<App>
//!     .derive(resolve_component)            → ContextBuilder<Component>
//!         .handle(path, |req, component| …)
//!
//! dispatch: resolve_app(req)? → resolve_component(&app, req)? → handler
//! ```
//!
//! # Design Decisions
//! - Resolvers run lazily, per invocation, parent before child; nothing is cached
//! - The first failing resolver ends the chain and its error is returned as is
//! - Resolvers are shared `Arc`s so derived layers capture their parent cheaply

use std::sync::Arc;

use crate::builder::Builder;
use crate::error::{BoxError, Result};
use crate::handler::{Handler, HandlerResult, Middleware};
use crate::request::Request;

/// Resolves a typed context value from a request.
pub type Resolver<T> =
    Arc<dyn Fn(&Request) -> std::result::Result<T, BoxError> + Send + Sync + 'static>;

/// Typed variant of [`Builder`]: every handler also receives a `T`
/// resolved from the request.
pub struct ContextBuilder<'r, T> {
    base: Builder<'r>,
    resolve: Resolver<T>,
}

impl<'r, T: 'static> ContextBuilder<'r, T> {
    pub fn new(base: Builder<'r>, resolve: Resolver<T>) -> Self {
        Self { base, resolve }
    }

    /// The resolver for this layer, including all ancestors.
    pub fn resolver(&self) -> Resolver<T> {
        self.resolve.clone()
    }

    /// Add a path prefix for all routes defined in `f`, keeping `T`.
    pub fn route<F>(&mut self, path: &str, f: F)
    where
        F: FnOnce(&mut ContextBuilder<'_, T>),
    {
        let mut child = ContextBuilder {
            base: self.base.branch(path, &[]),
            resolve: self.resolve.clone(),
        };
        f(&mut child);
    }

    /// Typed builder whose routes are additionally wrapped by `middleware`.
    ///
    /// Middleware runs before the resolvers.
    pub fn with(&mut self, middleware: Middleware) -> ContextBuilder<'_, T> {
        ContextBuilder {
            base: self.base.branch("", &[middleware]),
            resolve: self.resolve.clone(),
        }
    }

    /// Like [`ContextBuilder::with`] for several middleware, in order.
    pub fn with_all<I>(&mut self, middleware: I) -> ContextBuilder<'_, T>
    where
        I: IntoIterator<Item = Middleware>,
    {
        ContextBuilder {
            base: self.base.with_all(middleware),
            resolve: self.resolve.clone(),
        }
    }

    /// Derive a child context `U` from this layer's `T`.
    pub fn derive<U, F>(&mut self, resolve_child: F) -> ContextBuilder<'_, U>
    where
        U: 'static,
        F: Fn(&T, &Request) -> std::result::Result<U, BoxError> + Send + Sync + 'static,
    {
        let parent = self.resolve.clone();
        ContextBuilder {
            base: self.base.branch("", &[]),
            resolve: Arc::new(move |req: &Request| {
                let value = parent(req)?;
                resolve_child(&value, req)
            }),
        }
    }

    /// Like [`ContextBuilder::derive`], but handlers receive both values.
    pub fn derive_with_parent<U, F>(
        &mut self,
        resolve_child: F,
    ) -> ContextBuilder<'_, ParentChild<T, U>>
    where
        U: 'static,
        F: Fn(&T, &Request) -> std::result::Result<U, BoxError> + Send + Sync + 'static,
    {
        let parent = self.resolve.clone();
        ContextBuilder {
            base: self.base.branch("", &[]),
            resolve: Arc::new(move |req: &Request| -> std::result::Result<_, BoxError> {
                let value = parent(req)?;
                let child = resolve_child(&value, req)?;
                Ok(ParentChild::new(value, child))
            }),
        }
    }

    /// Register a typed handler under the current prefix + `path`.
    ///
    /// The resolver chain runs first; if it fails the handler is skipped.
    ///
    /// # Panics
    ///
    /// Panics if the full pattern is too long; see [`crate::Router::handle`].
    pub fn handle<H>(&mut self, path: &str, description: &str, handler: H)
    where
        H: Fn(&Request, T) -> HandlerResult + Send + Sync + 'static,
    {
        let lifted = lift(self.resolve.clone(), handler);
        self.base.handle_arc(path, description, lifted);
    }

    /// Register a typed handler, returning an error if the pattern is too long.
    pub fn try_handle<H>(&mut self, path: &str, description: &str, handler: H) -> Result<()>
    where
        H: Fn(&Request, T) -> HandlerResult + Send + Sync + 'static,
    {
        let resolve = self.resolve.clone();
        self.base
            .try_handle(path, description, move |req: &Request| {
                let value = resolve(req)?;
                handler(req, value)
            })
    }

    /// Accumulated prefix as pattern text.
    pub fn prefix(&self) -> String {
        self.base.prefix()
    }
}

/// A child context together with the parent it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentChild<T, U> {
    parent: T,
    child: U,
}

impl<T, U> ParentChild<T, U> {
    pub fn new(parent: T, child: U) -> Self {
        Self { parent, child }
    }

    pub fn parent(&self) -> &T {
        &self.parent
    }

    pub fn child(&self) -> &U {
        &self.child
    }

    pub fn into_parts(self) -> (T, U) {
        (self.parent, self.child)
    }
}

/// Lift a resolver and typed handler into a plain [`Handler`], for use
/// with [`crate::Router::handle`] without the builder.
///
/// ```
/// # use clirouter::{Router, with_context_handler};
/// let mut r = Router::new();
/// let handler = with_context_handler(
///     |req| Ok(req.params().require("component")?.to_uppercase()),
///     |_req, name: String| {
///         assert_eq!(name, "CV-SERVER");
///         Ok(())
///     },
/// );
/// r.handle("comp <component> info", "Component info", move |req| handler(req));
/// r.dispatch(None, &["comp", "cv-server", "info"]).unwrap();
/// ```
pub fn with_context_handler<T, R, H>(resolve: R, handler: H) -> Handler
where
    T: 'static,
    R: Fn(&Request) -> std::result::Result<T, BoxError> + Send + Sync + 'static,
    H: Fn(&Request, T) -> HandlerResult + Send + Sync + 'static,
{
    lift(Arc::new(resolve), handler)
}

fn lift<T, H>(resolve: Resolver<T>, handler: H) -> Handler
where
    T: 'static,
    H: Fn(&Request, T) -> HandlerResult + Send + Sync + 'static,
{
    Arc::new(move |req: &Request| {
        let value = resolve(req)?;
        handler(req, value)
    })
}
