//! scaffold-core - Shared functionality for mcp-scaffold
//!
//! Configuration defaults, standard paths and small text helpers used by the
//! generator and its CLI.

pub mod config;
pub mod format;
pub mod paths;

pub use config::{Config, ConfigError, CorsOrigin, ServerConfig};
pub use paths::Paths;
