//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for a router-based CLI.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Help listing settings.
    pub help: HelpConfig,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human oriented.
    Pretty,
    /// Single line per event.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level or filter directive (e.g. "warn", "clirouter=debug").
    /// `RUST_LOG` takes precedence when set.
    pub log_level: String,

    /// Output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Compact,
        }
    }
}

/// Help listing configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct HelpConfig {
    /// Line printed above the command list.
    pub header: String,

    /// Line printed instead of the list when no commands exist.
    pub empty_message: String,

    /// Print the listing after a failed dispatch.
    pub show_on_error: bool,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            header: "Available commands:".to_string(),
            empty_message: "No commands registered.".to_string(),
            show_on_error: true,
        }
    }
}
