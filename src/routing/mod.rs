//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (at startup):
//!     pattern text
//!     → pattern.rs (literal / <param> segments, sort hints)
//!     → router.rs (append to route table)
//!
//! Dispatch:
//!     argv
//!     → matcher.rs (evaluate every route, compute rank)
//!     → router.rs (keep the highest rank, earliest wins ties)
//!     → Request → handler chain, or NoMatch
//! ```
//!
//! # Design Decisions
//! - Most specific route wins: literals over parameters, longer over shorter
//! - Deterministic: same table and argv always select the same route
//! - Route table immutable once dispatch starts (shared reads are safe)

pub mod matcher;
pub mod pattern;
pub mod router;

pub use matcher::{Rank, MAX_SEGMENTS};
pub use pattern::{Segment, SegmentKind};
pub use router::{RouteInfo, Router};
