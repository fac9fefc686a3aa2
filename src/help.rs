//! Help listing.
//!
//! # Responsibilities
//! - Render every registered pattern with its description
//! - Order entries by sort key (hints + literal text)
//! - Report an empty route table distinctly
//!
//! # Design Decisions
//! - Stable sort: routes with equal keys keep registration order
//! - Patterns padded to the longest one so descriptions line up

use std::io;

use crate::config::HelpConfig;
use crate::routing::Router;

/// Renders the command listing of a [`Router`].
#[derive(Debug, Clone)]
pub struct HelpFormatter {
    header: String,
    empty_message: String,
}

impl HelpFormatter {
    pub fn new(header: impl Into<String>, empty_message: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            empty_message: empty_message.into(),
        }
    }

    pub fn from_config(config: &HelpConfig) -> Self {
        Self::new(config.header.clone(), config.empty_message.clone())
    }

    /// Write the listing for `router` to `w`.
    pub fn write<W: io::Write>(&self, router: &Router, w: &mut W) -> io::Result<()> {
        if router.is_empty() {
            return writeln!(w, "{}", self.empty_message);
        }

        let mut entries = router.routes();
        entries.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));

        let width = entries
            .iter()
            .map(|e| e.pattern.len())
            .max()
            .unwrap_or(0);

        writeln!(w, "{}", self.header)?;
        for entry in &entries {
            let line = format!("  {:<width$}  {}", entry.pattern, entry.description, width = width);
            writeln!(w, "{}", line.trim_end())?;
        }
        Ok(())
    }

    /// Render the listing to a string.
    pub fn render(&self, router: &Router) -> String {
        let mut buf = Vec::new();
        // Writing to a Vec cannot fail.
        let _ = self.write(router, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Default for HelpFormatter {
    fn default() -> Self {
        Self::from_config(&HelpConfig::default())
    }
}
