//! The request model handed to handlers.
//!
//! # Data Flow
//! ```text
//! argv + winning route (routing::router)
//!     → params.rs (named parameters bound by the match)
//!     → Extra = argv beyond the pattern's segments
//!     → context.rs (caller context, or background)
//!     → Request → middleware → resolvers → handler
//! ```
//!
//! # Design Decisions
//! - Built fresh for every dispatch; nothing shared between invocations
//! - Invocation ID assigned at construction for log correlation
//! - `with_context` returns a copy; the original is never modified

pub mod context;
pub mod params;

pub use context::Context;
pub use params::Params;

use uuid::Uuid;

/// One CLI invocation.
#[derive(Debug, Clone)]
pub struct Request {
    id: Uuid,
    args: Vec<String>,
    params: Params,
    extra: Vec<String>,
    context: Context,
}

impl Request {
    /// Build a request for `args` matched by a pattern of `matched` segments.
    ///
    /// Tokens from `matched` on become [`Request::extra`].
    pub fn new(context: Context, args: Vec<String>, params: Params, matched: usize) -> Self {
        let extra = args.get(matched..).map(<[String]>::to_vec).unwrap_or_default();
        Self {
            id: Uuid::new_v4(),
            args,
            params,
            extra,
            context,
        }
    }

    /// Unique ID of this invocation.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The full argv passed to dispatch.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Shorthand for `self.params().get(name)`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Tokens after the matched pattern, untouched and in order.
    pub fn extra(&self) -> &[String] {
        &self.extra
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Copy of this request with `context` replaced.
    pub fn with_context(&self, context: Context) -> Request {
        Request {
            context,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extra_is_remainder() {
        let req = Request::new(
            Context::background(),
            args(&["run", "task", "a1", "a2"]),
            Params::new(),
            2,
        );
        assert_eq!(req.extra(), ["a1", "a2"]);
        assert_eq!(req.args().len(), 4);
    }

    #[test]
    fn test_extra_empty_on_exact_match() {
        let req = Request::new(Context::background(), args(&["version"]), Params::new(), 1);
        assert!(req.extra().is_empty());
    }

    #[test]
    fn test_with_context_copies() {
        #[derive(Clone)]
        struct Marker;

        let mut params = Params::new();
        params.insert("id", "7");
        let req = Request::new(Context::background(), args(&["users", "7"]), params, 2);
        let cp = req.with_context(Context::background().with_value(Marker));

        assert!(cp.context().value::<Marker>().is_some());
        assert!(req.context().value::<Marker>().is_none());
        assert_eq!(cp.id(), req.id());
        assert_eq!(cp.param("id"), Some("7"));
        assert_eq!(cp.args(), req.args());
    }
}
