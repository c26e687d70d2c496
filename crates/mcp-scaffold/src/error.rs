//! Generator errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while validating input or writing a project
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Directory '{}' already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Invalid variable '{0}' - expected KEY=VALUE")]
    InvalidVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] scaffold_core::ConfigError),

    #[error("Failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render fastmcp.json: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
