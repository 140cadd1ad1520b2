//! Project description loading
//!
//! A project is described by a `project.toml` next to its sources:
//!
//! ```toml
//! [project]
//! target_framework = "netstandard1.5"
//! package_references = ["NETStandard.Library"]
//!
//! [compile]
//! include = ["src/**/*.cs"]
//! exclude = ["*.generated.cs"]
//! disable_default_excludes = false
//!
//! [symbols]
//! ambient = ["DEBUG", "TRACE"]
//! ```
//!
//! Every field has a default, so an empty file is a valid project. Unknown
//! keys are collected as non-fatal warnings rather than rejected.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MasonError, MasonResult};
use crate::evaluator::ExclusionPolicy;
use crate::models::FrameworkIdentity;
use crate::session::ProjectDescription;

/// Conventional project description file name.
pub const PROJECT_FILE_NAME: &str = "project.toml";

/// Ambient symbols of the default (debug) build configuration.
pub const DEFAULT_AMBIENT_SYMBOLS: &[&str] = &["DEBUG", "TRACE"];

/// On-disk project description.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectConfig {
    #[serde(default)]
    pub project: ProjectSection,

    #[serde(default)]
    pub compile: CompileSection,

    #[serde(default)]
    pub symbols: SymbolsSection,
}

/// `[project]` table: identity and declared package references.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectSection {
    #[serde(default)]
    pub target_framework: String,

    #[serde(default)]
    pub package_references: Vec<String>,
}

/// `[compile]` table: item globbing configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompileSection {
    #[serde(default)]
    pub include: Vec<String>,

    #[serde(default)]
    pub exclude: Vec<String>,

    /// Disables the built-in bin/obj/packages excludes
    #[serde(default)]
    pub disable_default_excludes: bool,
}

/// `[symbols]` table: build-configuration symbols.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolsSection {
    #[serde(default = "default_ambient_symbols")]
    pub ambient: Vec<String>,
}

impl Default for SymbolsSection {
    fn default() -> Self {
        Self {
            ambient: default_ambient_symbols(),
        }
    }
}

fn default_ambient_symbols() -> Vec<String> {
    DEFAULT_AMBIENT_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

/// Non-fatal configuration warning surfaced to callers (e.g. unknown keys).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

impl ProjectConfig {
    /// Load a project description file, discarding warnings.
    pub fn load(path: &Path) -> MasonResult<Self> {
        let (config, _) = load_with_warnings(path)?;
        Ok(config)
    }

    /// Assemble the evaluation input for a project rooted at `root`.
    pub fn into_description(self, root: impl Into<PathBuf>) -> ProjectDescription {
        let exclusion_policy = if self.compile.disable_default_excludes {
            ExclusionPolicy::without_defaults()
        } else {
            ExclusionPolicy::standard()
        };

        ProjectDescription {
            root: root.into(),
            target_framework: FrameworkIdentity::new(self.project.target_framework),
            includes: self.compile.include,
            excludes: self.compile.exclude,
            exclusion_policy,
            ambient_symbols: self.symbols.ambient,
            package_references: self.project.package_references,
        }
    }
}

/// Load configuration and collect non-fatal warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> MasonResult<(ProjectConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: ProjectConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MasonError::InvalidProjectFile {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}
