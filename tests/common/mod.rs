//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use clirouter::{Handler, HandlerResult, Middleware, Request};

/// Ordered record of what ran during a dispatch.
#[derive(Clone, Default)]
pub struct Trace {
    steps: Arc<Mutex<Vec<String>>>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, step: impl Into<String>) {
        self.steps.lock().unwrap().push(step.into());
    }

    pub fn steps(&self) -> Vec<String> {
        self.steps.lock().unwrap().clone()
    }

    /// Handler that records `name` and succeeds.
    pub fn handler(&self, name: &'static str) -> impl Fn(&Request) -> HandlerResult + Send + Sync + 'static {
        let trace = self.clone();
        move |_req| {
            trace.push(name);
            Ok(())
        }
    }

    /// Middleware recording `before-{name}` and `after-{name}` around `next`.
    pub fn middleware(&self, name: &'static str) -> Middleware {
        let trace = self.clone();
        Arc::new(move |next: Handler| -> Handler {
            let trace = trace.clone();
            Arc::new(move |req: &Request| {
                trace.push(format!("before-{}", name));
                let result = next(req);
                trace.push(format!("after-{}", name));
                result
            })
        })
    }
}

/// Owned argv from string literals.
pub fn argv(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}
