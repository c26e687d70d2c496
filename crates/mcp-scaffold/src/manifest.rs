//! Typed model of the generated `fastmcp.json`
//!
//! Rendering through serde keeps user supplied strings (description, author)
//! valid JSON no matter what they contain. Field order matches the order the
//! keys appear in the file.

use scaffold_core::Config;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Top level of fastmcp.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastMcpManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub license: String,
    pub mcp: McpSection,
    pub server: ServerSection,
    pub modules: ModulesSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpSection {
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
    pub cors: CorsSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorsSection {
    pub enabled: bool,
    pub origins: Vec<String>,
}

/// Python module paths FastMCP loads capabilities from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModulesSection {
    pub tools: String,
    pub resources: String,
    pub prompts: String,
}

impl Default for ModulesSection {
    fn default() -> Self {
        Self {
            tools: "src.server.tools".to_string(),
            resources: "src.server.resources".to_string(),
            prompts: "src.server.prompts".to_string(),
        }
    }
}

impl FastMcpManifest {
    /// Build the manifest for a project from the configured defaults
    pub fn from_config(project_name: &str, config: &Config) -> Self {
        Self {
            name: project_name.to_string(),
            version: config.version.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            license: config.license.clone(),
            mcp: McpSection {
                version: config.mcp_version.clone(),
            },
            server: ServerSection {
                host: config.server.host.clone(),
                port: config.server.port,
                cors: CorsSection {
                    enabled: config.server.cors_enabled,
                    origins: config
                        .server
                        .cors_origins
                        .iter()
                        .map(|o| o.url.clone())
                        .collect(),
                },
            },
            modules: ModulesSection::default(),
        }
    }

    /// Pretty JSON with two-space indentation and a trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
