//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → observability::logging (subscriber setup)
//!     → help::HelpFormatter (listing text)
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; a CLI run is short-lived
//! - All fields have defaults to allow minimal (or absent) configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{AppConfig, HelpConfig, LogFormat, ObservabilityConfig};
pub use validation::ValidationError;
