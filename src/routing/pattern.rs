//! Pattern parsing.
//!
//! # Syntax
//! ```text
//! comp <component> image build
//! 1 comp <component> 2 image build
//! ```
//! - Whitespace separates tokens
//! - `<name>` is a parameter bound to the argv token at that position
//! - A bare integer is a sort hint for the next segment (help ordering only)
//! - Anything else is a literal, matched case-sensitively
//!
//! # Design Decisions
//! - Parsing never fails; length limits are enforced at registration
//! - Sort hints never take part in matching

use std::fmt;

/// What a segment matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    /// Matches exactly this token.
    Literal(String),
    /// Matches any token and binds it under this name.
    Param(String),
}

/// One position of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub sort_hint: i64,
}

impl Segment {
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Literal(text.into()),
            sort_hint: 0,
        }
    }

    pub fn param(name: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Param(name.into()),
            sort_hint: 0,
        }
    }

    /// Attach a help ordering hint.
    pub fn with_sort_hint(mut self, hint: i64) -> Self {
        self.sort_hint = hint;
        self
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, SegmentKind::Literal(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SegmentKind::Literal(text) => f.write_str(text),
            SegmentKind::Param(name) => write!(f, "<{}>", name),
        }
    }
}

/// Split pattern text into tokens.
pub fn tokenize(pattern: &str) -> impl Iterator<Item = &str> {
    pattern.split_whitespace()
}

/// Parse pattern text into segments.
pub fn parse(pattern: &str) -> Vec<Segment> {
    parse_tokens(tokenize(pattern))
}

/// Parse already-split tokens into segments.
///
/// Integer tokens are consumed as the sort hint of the next emitted segment.
pub fn parse_tokens<'a, I>(tokens: I) -> Vec<Segment>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut segments = Vec::new();
    let mut pending_hint = 0;

    for token in tokens {
        if let Ok(hint) = token.parse::<i64>() {
            pending_hint = hint;
            continue;
        }

        let segment = match param_name(token) {
            Some(name) => Segment::param(name),
            None => Segment::literal(token),
        };
        segments.push(segment.with_sort_hint(pending_hint));
        pending_hint = 0;
    }

    segments
}

fn param_name(token: &str) -> Option<&str> {
    token
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
}

/// Display form: literals bare, parameters as `<name>`, hints dropped.
pub fn render(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Help ordering key built from the literal segments and their hints.
pub fn sort_key(segments: &[Segment]) -> String {
    segments
        .iter()
        .filter_map(|s| match &s.kind {
            SegmentKind::Literal(text) => Some(format!("{} {}", s.sort_hint, text)),
            SegmentKind::Param(_) => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}
