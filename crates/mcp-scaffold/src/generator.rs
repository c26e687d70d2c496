//! Project generation
//!
//! Renders a blueprint into a new directory. [`Generator::plan`] computes the
//! same report without touching the filesystem.

use chrono::{DateTime, Utc};
use scaffold_core::Config;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, warn};

use crate::blueprint::{Blueprint, Contents, TemplateFile};
use crate::error::{Result, ScaffoldError};
use crate::manifest::FastMcpManifest;
use crate::name::validate_name;
use crate::variables::Variables;

/// Mode applied to executable files on Unix
#[cfg(unix)]
const EXECUTABLE_MODE: u32 = 0o755;

/// Options controlling how a project is written
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Replace an existing destination
    pub force: bool,
    /// Run `git init` and stage the generated files
    pub git: bool,
    /// Compute the report without writing anything
    pub dry_run: bool,
}

/// A file written (or planned) by the generator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntry {
    pub path: PathBuf,
    pub bytes: usize,
    pub executable: bool,
}

/// Outcome of a generation run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub project: String,
    pub blueprint: String,
    pub root: PathBuf,
    pub dry_run: bool,
    pub created_at: DateTime<Utc>,
    pub directories: Vec<PathBuf>,
    pub files: Vec<FileEntry>,
}

/// Renders a blueprint for one project
#[derive(Debug, Clone)]
pub struct Generator {
    blueprint: Blueprint,
    vars: Variables,
    manifest: FastMcpManifest,
}

/// Join a `/` separated relative path onto a root
fn join_relative(root: &Path, rel: &str) -> PathBuf {
    if rel == "." {
        return root.to_path_buf();
    }
    rel.split('/').fold(root.to_path_buf(), |path, part| path.join(part))
}

impl Generator {
    pub fn new(blueprint: Blueprint, vars: Variables, manifest: FastMcpManifest) -> Self {
        Self {
            blueprint,
            vars,
            manifest,
        }
    }

    /// Generator for the FastMCP blueprint, after validating the name and config
    pub fn for_project(project_name: &str, config: &Config) -> Result<Self> {
        validate_name(project_name)?;
        config.validate()?;

        Ok(Self::new(
            Blueprint::fastmcp(),
            Variables::new(project_name, config),
            FastMcpManifest::from_config(project_name, config),
        ))
    }

    pub fn variables_mut(&mut self) -> &mut Variables {
        &mut self.vars
    }

    /// Next steps with placeholders filled in
    pub fn next_steps(&self) -> Vec<String> {
        self.blueprint
            .next_steps
            .iter()
            .map(|step| self.vars.substitute(step))
            .collect()
    }

    fn render(&self, file: &TemplateFile) -> Result<String> {
        match file.contents {
            Contents::Text(text) => Ok(self.vars.substitute(text)),
            Contents::Manifest => self.manifest.to_json(),
        }
    }

    /// Compute the directories and files a run would create under `dest`
    pub fn plan(&self, dest: &Path) -> Result<Report> {
        let directories = self
            .blueprint
            .directories
            .iter()
            .map(|dir| join_relative(dest, dir))
            .collect();

        let files = self
            .blueprint
            .files
            .iter()
            .map(|file| {
                Ok(FileEntry {
                    path: join_relative(dest, file.path),
                    bytes: self.render(file)?.len(),
                    executable: file.executable,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Report {
            project: self.manifest.name.clone(),
            blueprint: self.blueprint.name.to_string(),
            root: dest.to_path_buf(),
            dry_run: true,
            created_at: Utc::now(),
            directories,
            files,
        })
    }

    /// Write the project into `dest`
    pub fn generate(&self, dest: &Path, options: &GenerateOptions) -> Result<Report> {
        if dest.exists() && !options.force {
            return Err(ScaffoldError::AlreadyExists(dest.to_path_buf()));
        }

        if options.dry_run {
            return self.plan(dest);
        }

        if dest.exists() {
            info!(path = %dest.display(), "Removing existing destination");
            let removed = if dest.is_dir() {
                fs::remove_dir_all(dest)
            } else {
                fs::remove_file(dest)
            };
            removed.map_err(|e| ScaffoldError::io(dest, e))?;
        }

        info!(
            project = %self.manifest.name,
            blueprint = self.blueprint.name,
            path = %dest.display(),
            "Generating project"
        );

        let mut report = self.plan(dest)?;
        report.dry_run = false;

        for dir in &report.directories {
            fs::create_dir_all(dir).map_err(|e| ScaffoldError::io(dir, e))?;
            debug!(path = %dir.display(), "Created directory");
        }

        for (file, entry) in self.blueprint.files.iter().zip(&report.files) {
            let content = self.render(file)?;
            fs::write(&entry.path, content).map_err(|e| ScaffoldError::io(&entry.path, e))?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if file.executable {
                    fs::set_permissions(&entry.path, fs::Permissions::from_mode(EXECUTABLE_MODE))
                        .map_err(|e| ScaffoldError::io(&entry.path, e))?;
                }
            }

            debug!(path = %entry.path.display(), bytes = entry.bytes, "Created file");
        }

        if options.git {
            init_git(dest);
        }

        Ok(report)
    }
}

/// Initialize a git repository and stage everything; failures only warn
fn init_git(dest: &Path) {
    for args in [&["init", "-q"][..], &["add", "."][..]] {
        match Command::new("git").args(args).current_dir(dest).output() {
            Ok(output) if output.status.success() => {
                debug!(args = ?args, "git succeeded");
            }
            Ok(output) => {
                warn!(
                    args = ?args,
                    stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                    "git failed"
                );
                return;
            }
            Err(e) => {
                warn!(error = %e, "git is not available, skipping repository setup");
                return;
            }
        }
    }
}
