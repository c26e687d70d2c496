//! Built-in project blueprints
//!
//! A blueprint is the fixed set of directories and file templates emitted for
//! a new project. Template text is embedded in the binary.

use crate::variables::Variables;

/// Where a file's contents come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contents {
    /// Text template rendered through [`Variables`]
    Text(&'static str),
    /// The typed fastmcp.json manifest
    Manifest,
}

/// A single file emitted by a blueprint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the project root, `/` separated
    pub path: &'static str,
    pub contents: Contents,
    /// Mark the file executable on Unix
    pub executable: bool,
}

impl TemplateFile {
    const fn text(path: &'static str, contents: &'static str) -> Self {
        Self {
            path,
            contents: Contents::Text(contents),
            executable: false,
        }
    }

    const fn empty(path: &'static str) -> Self {
        Self::text(path, "")
    }

    const fn script(path: &'static str, contents: &'static str) -> Self {
        Self {
            path,
            contents: Contents::Text(contents),
            executable: true,
        }
    }
}

/// A project blueprint
#[derive(Debug, Clone)]
pub struct Blueprint {
    pub name: &'static str,
    /// Directories created before any file, in order (`.` is the root)
    pub directories: Vec<&'static str>,
    /// Files written in order
    pub files: Vec<TemplateFile>,
    /// Next steps shown after creation, may contain placeholders
    pub next_steps: Vec<&'static str>,
}

impl Blueprint {
    /// FastMCP server with a calculator tool, resources and prompts
    pub fn fastmcp() -> Self {
        Self {
            name: "fastmcp",
            directories: vec![
                ".",
                "src/server/tools",
                "src/server/resources",
                "src/server/prompts",
                "src/tests",
            ],
            files: vec![
                TemplateFile {
                    path: "fastmcp.json",
                    contents: Contents::Manifest,
                    executable: false,
                },
                TemplateFile::text(
                    "requirements.txt",
                    include_str!("../templates/fastmcp/requirements.txt"),
                ),
                TemplateFile::text(
                    ".env.example",
                    include_str!("../templates/fastmcp/env.example"),
                ),
                TemplateFile::text(".gitignore", include_str!("../templates/fastmcp/gitignore")),
                TemplateFile::text("README.md", include_str!("../templates/fastmcp/README.md")),
                TemplateFile::empty("src/__init__.py"),
                TemplateFile::empty("src/server/__init__.py"),
                TemplateFile::text(
                    "src/server/app.py",
                    include_str!("../templates/fastmcp/src/server/app.py"),
                ),
                TemplateFile::empty("src/server/tools/__init__.py"),
                TemplateFile::text(
                    "src/server/tools/calculator_tools.py",
                    include_str!("../templates/fastmcp/src/server/tools/calculator_tools.py"),
                ),
                TemplateFile::empty("src/server/resources/__init__.py"),
                TemplateFile::text(
                    "src/server/resources/calculator_resource.py",
                    include_str!("../templates/fastmcp/src/server/resources/calculator_resource.py"),
                ),
                TemplateFile::empty("src/server/prompts/__init__.py"),
                TemplateFile::text(
                    "src/server/prompts/calculator_prompts.py",
                    include_str!("../templates/fastmcp/src/server/prompts/calculator_prompts.py"),
                ),
                TemplateFile::empty("src/tests/__init__.py"),
                TemplateFile::text(
                    "src/tests/test_calculator.py",
                    include_str!("../templates/fastmcp/src/tests/test_calculator.py"),
                ),
                TemplateFile::text("setup.bat", include_str!("../templates/fastmcp/setup.bat")),
                TemplateFile::script("setup.sh", include_str!("../templates/fastmcp/setup.sh")),
            ],
            next_steps: vec![
                "cd {{PROJECT_DIR}}",
                "Run setup script:\n     Windows: setup.bat\n     Linux:   ./setup.sh",
                "Start the MCP server:\n     python src/server/app.py",
                "Test with MCP Inspector:\n     npx @modelcontextprotocol/inspector@latest {{ENDPOINT}}",
            ],
        }
    }

    /// Get all variables used by this blueprint's text templates
    pub fn find_variables(&self) -> Vec<String> {
        let mut all_vars: Vec<String> = self
            .files
            .iter()
            .filter_map(|file| match file.contents {
                Contents::Text(text) => Some(text),
                Contents::Manifest => None,
            })
            .chain(self.next_steps.iter().copied())
            .flat_map(Variables::find_used_variables)
            .collect();

        all_vars.sort();
        all_vars.dedup();
        all_vars
    }
}
