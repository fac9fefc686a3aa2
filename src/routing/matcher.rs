//! Route matching and ranking.
//!
//! # Responsibilities
//! - Test a route's segments against an argv slice
//! - Bind parameter segments to their tokens
//! - Score the match so the most specific route can be chosen
//!
//! # Rank Encoding
//! ```text
//! segments:  users   <id>    show
//! bits:       10      01      10     → 0b10_01_10
//! ```
//! Two bits per position, earliest position most significant:
//! `10` literal, `01` parameter. Every position contributes a non-zero pair,
//! so a longer full match always outranks a shorter one, and among equal
//! lengths a literal wins at the first position where the kinds differ.
//!
//! # Design Decisions
//! - 64-bit rank caps patterns at [`MAX_SEGMENTS`]; longer patterns never match
//!   here and are rejected at registration
//! - No trie, no backtracking: one linear pass per route

use crate::request::Params;
use crate::routing::pattern::{Segment, SegmentKind};

/// Most segments a pattern may have (2 bits each in a `u64`).
pub const MAX_SEGMENTS: usize = (u64::BITS / 2) as usize;

const LITERAL_BITS: u64 = 0b10;
const PARAM_BITS: u64 = 0b01;

/// Comparable specificity of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rank(u64);

impl Rank {
    pub fn value(self) -> u64 {
        self.0
    }

    fn push(self, bits: u64) -> Self {
        Rank((self.0 << 2) | bits)
    }
}

/// A successful match of one route.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub params: Params,
    pub rank: Rank,
}

/// Evaluate `segments` against `argv`.
///
/// Returns `None` when argv is shorter than the pattern, when a literal
/// differs from its token, or when the pattern exceeds [`MAX_SEGMENTS`].
pub fn evaluate<S: AsRef<str>>(segments: &[Segment], argv: &[S]) -> Option<Match> {
    if argv.len() < segments.len() || segments.len() > MAX_SEGMENTS {
        return None;
    }

    let mut params = Params::new();
    let mut rank = Rank::default();

    for (segment, arg) in segments.iter().zip(argv) {
        let arg = arg.as_ref();
        match &segment.kind {
            SegmentKind::Literal(text) => {
                if text != arg {
                    return None;
                }
                rank = rank.push(LITERAL_BITS);
            }
            SegmentKind::Param(name) => {
                params.insert(name.clone(), arg);
                rank = rank.push(PARAM_BITS);
            }
        }
    }

    Some(Match { params, rank })
}
