//! Metrics collection.
//!
//! # Metrics
//! - `clirouter_dispatch_total` (counter): dispatches by outcome
//! - `clirouter_routes_registered` (gauge): size of the route table
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; no-ops until the host installs
//!   a recorder
//! - Label values are static strings (no per-command cardinality)

/// How a dispatch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Error,
    NoMatch,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::Error => "error",
            Outcome::NoMatch => "no_match",
        }
    }
}

pub fn record_dispatch(outcome: Outcome) {
    ::metrics::counter!("clirouter_dispatch_total", "outcome" => outcome.as_str()).increment(1);
}

pub fn record_routes_registered(count: usize) {
    ::metrics::gauge!("clirouter_routes_registered").set(count as f64);
}
