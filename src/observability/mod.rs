//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Router / middleware produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, gauges via the metrics facade)
//!
//! Consumers:
//!     → stderr (pretty, compact or JSON)
//!     → whatever metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Invocation ID flows through every event of one dispatch
//! - Router events are debug level; a CLI is quiet by default

pub mod logging;
pub mod metrics;
