//! Standard paths used by mcp-scaffold

use std::path::PathBuf;

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV: &str = "MCP_SCAFFOLD_CONFIG";

/// Standard mcp-scaffold paths
pub struct Paths {
    /// Config directory (~/.config/mcp-scaffold)
    pub config: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let config = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("mcp-scaffold");

        Self { config }
    }

    /// Default location of the user config file
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.json")
    }

    /// Resolve the config file: explicit path, then `$MCP_SCAFFOLD_CONFIG`,
    /// then the standard location.
    pub fn resolve_config(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .unwrap_or_else(|| self.config_file())
    }
}
