//! Configuration management for mcp-scaffold
//!
//! Every field has a serde default, so a config file only needs the values
//! it wants to change.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Config validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid server host: '{0}'")]
    InvalidHost(String),

    #[error("Server port must be non-zero")]
    InvalidPort,

    #[error("Invalid CORS origin: '{0}'")]
    InvalidOrigin(String),

    #[error("Invalid version: '{0}'")]
    InvalidVersion(String),
}

/// Versions are spliced into Python string literals
fn is_literal_safe(value: &str) -> bool {
    !value.is_empty()
        && !value
            .chars()
            .any(|c| c.is_control() || matches!(c, '"' | '\'' | '`' | '\\'))
}

/// Defaults applied to every generated project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Project description written to fastmcp.json
    #[serde(default = "default_description")]
    pub description: String,

    /// Author written to fastmcp.json
    #[serde(default = "default_author")]
    pub author: String,

    /// License identifier
    #[serde(default = "default_license")]
    pub license: String,

    /// Initial project version
    #[serde(default = "default_version")]
    pub version: String,

    /// MCP protocol revision the server targets
    #[serde(default = "default_mcp_version")]
    pub mcp_version: String,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP server settings for the generated project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_enabled")]
    pub cors_enabled: bool,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<CorsOrigin>,
}

/// A frontend origin allowed through CORS
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsOrigin {
    /// Kind of client usually served from this origin (e.g. "React")
    #[serde(default)]
    pub client: String,
    pub url: String,
}

impl CorsOrigin {
    pub fn new(client: &str, url: &str) -> Self {
        Self {
            client: client.to_string(),
            url: url.to_string(),
        }
    }
}

fn default_description() -> String {
    "A beginner-friendly MCP server with basic operations".to_string()
}

fn default_author() -> String {
    "Your Name".to_string()
}

fn default_license() -> String {
    "MIT".to_string()
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_mcp_version() -> String {
    "2024-12-05".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    8001
}

fn default_cors_enabled() -> bool {
    true
}

fn default_cors_origins() -> Vec<CorsOrigin> {
    vec![
        CorsOrigin::new("React", "http://localhost:3000"),
        CorsOrigin::new("Vue.js", "http://localhost:8080"),
        CorsOrigin::new("Angular", "http://localhost:4200"),
        CorsOrigin::new("Tauri", "http://localhost:1420"),
        CorsOrigin::new("FastAPI", "http://localhost:8000"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            description: default_description(),
            author: default_author(),
            license: default_license(),
            version: default_version(),
            mcp_version: default_mcp_version(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: default_cors_enabled(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl ServerConfig {
    /// Base URL of the MCP endpoint (http://host:port/mcp)
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}/mcp", self.host, self.port)
    }
}

impl Config {
    /// Load config from file
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Check values that end up inside generated source files.
    ///
    /// The host is spliced into Python string literals and shell scripts, so
    /// only hostname and address characters are accepted. Versions may not
    /// contain quotes, backslashes or control characters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let host = &self.server.host;
        let host_ok = !host.is_empty()
            && host
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':' | '[' | ']'));
        if !host_ok {
            return Err(ConfigError::InvalidHost(host.clone()));
        }

        if self.server.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        for version in [&self.version, &self.mcp_version] {
            if !is_literal_safe(version) {
                return Err(ConfigError::InvalidVersion(version.clone()));
            }
        }

        for origin in &self.server.cors_origins {
            let url = origin.url.trim();
            if url.is_empty() || url.contains(|c: char| matches!(c, '"' | '`' | '\n')) {
                return Err(ConfigError::InvalidOrigin(origin.url.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_gives_defaults() -> Result<()> {
        let tmp = TempDir::new()?;
        let config = Config::load(&tmp.path().join("missing.json"))?;
        assert_eq!(config, Config::default());
        assert_eq!(config.server.port, 8001);
        assert_eq!(config.server.cors_origins.len(), 5);
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{"author": "Ada", "server": {"port": 9000}}"#)?;

        let config = Config::load(&path)?;
        assert_eq!(config.author, "Ada");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.license, "MIT");
        assert!(config.server.cors_enabled);
        Ok(())
    }

    #[test]
    fn test_save_then_load() -> Result<()> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join("nested/dir/config.json");

        let mut config = Config::default();
        config.description = "Weather lookups".to_string();
        config.server.cors_origins = vec![CorsOrigin::new("Svelte", "http://localhost:5173")];
        config.save(&path)?;

        assert_eq!(Config::load(&path)?, config);
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_an_error() -> Result<()> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "{ not json")?;
        assert!(Config::load(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_validate() {
        let mut config = Config::default();
        assert_eq!(config.validate(), Ok(()));

        config.server.host = "0.0.0.0".to_string();
        assert_eq!(config.validate(), Ok(()));

        config.server.host = "local\"host".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidHost("local\"host".to_string()))
        );

        config.server.host = "localhost".to_string();
        config.server.port = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidPort));

        config.server.port = 8001;
        config.version = "1.0\" + oops".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidVersion("1.0\" + oops".to_string()))
        );

        config.version = "1.0.0-rc.1".to_string();
        config.mcp_version = "2024\\12".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidVersion(_))));

        config.mcp_version = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidVersion(_))));

        config.mcp_version = "2025-03-26".to_string();
        assert_eq!(config.validate(), Ok(()));

        config.server.cors_origins.push(CorsOrigin::new("Bad", ""));
        assert!(matches!(config.validate(), Err(ConfigError::InvalidOrigin(_))));
    }

    #[test]
    fn test_save_names_unwritable_directory() -> Result<()> {
        let tmp = TempDir::new()?;
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "a file, not a directory")?;

        let err = Config::default()
            .save(&blocker.join("sub/config.json"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to create directory"));
        assert!(err.to_string().contains("blocker"));
        Ok(())
    }

    #[test]
    fn test_endpoint() {
        assert_eq!(ServerConfig::default().endpoint(), "http://localhost:8001/mcp");
    }
}
