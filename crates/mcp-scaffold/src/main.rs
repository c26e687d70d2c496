//! mcp-scaffold - Project scaffolding for FastMCP servers
//!
//! "From zero to a running MCP server in one command."
//!
//! Usage:
//! - mcp-scaffold <NAME>: Create a new FastMCP server project in ./<NAME>
//! - mcp-scaffold --init-config: Write the default config file

use anyhow::{bail, Result};
use clap::Parser;
use mcp_scaffold::{GenerateOptions, Generator, Report, ScaffoldError};
use scaffold_core::{Config, Paths};
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mcp-scaffold")]
#[command(about = "Create a beginner-friendly FastMCP server project with tools, resources and prompts")]
#[command(version)]
#[command(after_help = r#"GENERATED LAYOUT:
    <NAME>/
    |-- fastmcp.json            MCP server configuration
    |-- requirements.txt        Python dependencies
    |-- .env.example            Environment template
    |-- setup.sh / setup.bat    Install dependencies and run tests
    |-- src/server/app.py       Server entry point
    |-- src/server/tools/       Calculator tools (add, subtract)
    |-- src/server/resources/   Help and operation listings
    |-- src/server/prompts/     Welcome, help and error prompts
    --- src/tests/              Calculator tests

CONFIGURATION:
    Defaults are read from ~/.config/mcp-scaffold/config.json
    (or $MCP_SCAFFOLD_CONFIG, or --config). Write one with --init-config.

EXAMPLES:
    mcp-scaffold my_mcp_server                  # Create ./my_mcp_server
    mcp-scaffold weather -o ~/src --port 9000   # Custom location and port
    mcp-scaffold demo --dry-run                 # Show what would be written
    mcp-scaffold demo --json --quiet            # Machine-readable report
"#)]
struct Cli {
    /// Project name (becomes the directory name)
    #[arg(required_unless_present = "init_config")]
    name: Option<String>,

    /// Parent directory for the project (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Project description for fastmcp.json
    #[arg(long)]
    description: Option<String>,

    /// Author for fastmcp.json
    #[arg(long)]
    author: Option<String>,

    /// License identifier for fastmcp.json
    #[arg(long)]
    license: Option<String>,

    /// Host the generated server binds to
    #[arg(long)]
    host: Option<String>,

    /// Port the generated server listens on
    #[arg(long)]
    port: Option<u16>,

    /// Set template variable (KEY=VALUE)
    #[arg(long = "var", value_name = "KEY=VALUE")]
    vars: Vec<String>,

    /// Overwrite an existing directory (or config file with --init-config)
    #[arg(long)]
    force: bool,

    /// Initialize a git repository in the new project
    #[arg(long)]
    git: bool,

    /// Show what would be created without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Print the generation report as JSON
    #[arg(long)]
    json: bool,

    /// Don't list every created directory and file
    #[arg(short, long)]
    quiet: bool,

    /// Config file to read defaults from
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the effective defaults to the config file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = Paths::new().resolve_config(cli.config.clone());
    let mut config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(err) if cli.init_config && cli.force => {
            warn!(error = %format!("{:#}", err), "Replacing unreadable config");
            Config::default()
        }
        Err(err) => return Err(err),
    };
    apply_overrides(&mut config, &cli);

    if cli.init_config {
        return cmd_init_config(&config, &config_path, cli.force);
    }

    match cli.name.as_deref() {
        Some(name) => cmd_new(&cli, name, &config),
        None => bail!("A project name is required"),
    }
}

/// Command-line values take precedence over the config file
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(description) = &cli.description {
        config.description = description.clone();
    }
    if let Some(author) = &cli.author {
        config.author = author.clone();
    }
    if let Some(license) = &cli.license {
        config.license = license.clone();
    }
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
}

/// Display name of the host OS
fn platform() -> &'static str {
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "Darwin",
        "windows" => "Windows",
        other => other,
    }
}

/// Create a new project
fn cmd_new(cli: &Cli, name: &str, config: &Config) -> Result<()> {
    let mut generator = Generator::for_project(name, config)?;
    generator.variables_mut().add_from_pairs(&cli.vars)?;

    let dest = match &cli.output_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    };
    generator
        .variables_mut()
        .set("PROJECT_DIR", &dest.display().to_string());

    let options = GenerateOptions {
        force: cli.force,
        git: cli.git,
        dry_run: cli.dry_run,
    };

    if dest.exists() && !cli.force {
        return Err(already_exists(ScaffoldError::AlreadyExists(dest)));
    }

    if !cli.json {
        println!("Creating MCP Server project: {}", name);
        println!("Platform: {}", platform());
        if !cli.quiet {
            println!();
        }
    }

    let report = match generator.generate(&dest, &options) {
        Ok(report) => report,
        Err(err @ ScaffoldError::AlreadyExists(_)) => return Err(already_exists(err)),
        Err(err) => return Err(err.into()),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !cli.quiet {
        print_entries(&report);
    }

    if report.dry_run {
        println!();
        println!(
            "Dry run: nothing was written ({} directories, {} files planned).",
            report.directories.len(),
            report.files.len()
        );
        return Ok(());
    }

    println!();
    println!("SUCCESS: MCP Server project '{}' created successfully!", name);
    println!();
    println!("Next steps:");
    for (i, step) in generator.next_steps().iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    println!();
    println!(
        "The MCP server will be available at: {}",
        config.server.endpoint()
    );

    Ok(())
}

fn already_exists(err: ScaffoldError) -> anyhow::Error {
    anyhow::anyhow!("{}\nUse --force to overwrite", err)
}

/// One line per directory and file, in creation order
fn print_entries(report: &Report) {
    let verb = if report.dry_run { "Would create" } else { "Created" };

    for dir in &report.directories {
        println!("{} directory: {}", verb, dir.display());
    }
    for file in &report.files {
        println!("{} file: {}", verb, file.path.display());
    }
}

/// Write the effective config to disk
fn cmd_init_config(config: &Config, path: &Path, force: bool) -> Result<()> {
    config.validate()?;

    if path.exists() && !force {
        bail!(
            "Config already exists: {}\nUse --force to overwrite",
            path.display()
        );
    }

    config.save(path)?;
    println!("success: Config written: {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_name_required_without_init_config() {
        assert!(Cli::try_parse_from(["mcp-scaffold"]).is_err());
        assert!(Cli::try_parse_from(["mcp-scaffold", "--init-config"]).is_ok());
    }

    #[test]
    fn test_overrides_win_over_config() {
        let cli = Cli::try_parse_from([
            "mcp-scaffold",
            "demo",
            "--port",
            "9000",
            "--author",
            "Ada",
        ])
        .unwrap();

        let mut config = Config::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.author, "Ada");
        assert_eq!(config.server.host, "localhost");
    }
}
