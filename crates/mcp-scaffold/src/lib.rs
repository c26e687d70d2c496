//! mcp-scaffold - Project scaffolding for FastMCP servers
//!
//! Generates a ready-to-run Python MCP server project: a calculator tool
//! module, resources, prompts, tests, `fastmcp.json`, environment template
//! and setup scripts. The generated code relies on FastMCP for protocol,
//! transport and dispatch; this crate only writes files.

pub mod blueprint;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod name;
pub mod variables;

pub use blueprint::{Blueprint, Contents, TemplateFile};
pub use error::ScaffoldError;
pub use generator::{FileEntry, GenerateOptions, Generator, Report};
pub use manifest::FastMcpManifest;
pub use name::validate_name;
pub use variables::Variables;
