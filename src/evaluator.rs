//! Compile item evaluation
//!
//! Enumerates the project tree and applies include/exclude patterns,
//! including the built-in default excludes covering build output,
//! intermediate output and the package cache.
//!
//! The evaluator selects from what is on disk and nothing else; filtering
//! of generated compile items (assembly metadata stubs and the like) is a
//! generation-time concern that stays with the caller.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::error::MasonResult;
use crate::matcher::PathMatcher;

/// Conventional include when a project declares none: every C# source file
/// under the root.
pub const DEFAULT_COMPILE_INCLUDES: &[&str] = &["**/*.cs"];

/// Directories never compiled unless the defaults are overridden: build
/// output, intermediate output, package cache.
pub const DEFAULT_EXCLUDES: &[&str] = &["bin/**", "obj/**", "packages/**"];

/// Which excludes apply during item evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionPolicy {
    /// Built-in exclude patterns, applied ahead of user excludes
    pub default_excludes: Vec<String>,

    /// When true, default excludes are skipped and only user patterns apply
    pub overridden: bool,
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl ExclusionPolicy {
    /// The built-in defaults, active.
    pub fn standard() -> Self {
        Self {
            default_excludes: DEFAULT_EXCLUDES.iter().map(|p| p.to_string()).collect(),
            overridden: false,
        }
    }

    /// Defaults disabled; only explicit user patterns matter.
    pub fn without_defaults() -> Self {
        Self {
            overridden: true,
            ..Self::standard()
        }
    }

    /// Effective exclude list for this policy.
    pub fn effective_excludes(&self, user_excludes: &[String]) -> Vec<String> {
        if self.overridden {
            user_excludes.to_vec()
        } else {
            self.default_excludes
                .iter()
                .cloned()
                .chain(user_excludes.iter().cloned())
                .collect()
        }
    }
}

/// Enumerate all files under `root` as project-relative paths.
///
/// Entries are visited in file-name order so discovery order is
/// deterministic. A missing root is an empty tree, not an error, and
/// entries that vanish mid-walk are skipped.
pub fn enumerate_files(root: &Path) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }

    let mut walker = WalkBuilder::new(root);
    walker
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut files = Vec::new();
    for entry in walker.build() {
        let Ok(entry) = entry else {
            continue;
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(root) {
            files.push(rel.to_path_buf());
        }
    }
    files
}

/// Evaluate the compile item set for a project root.
///
/// A file is compiled iff it matches an include pattern (the conventional
/// `**/*.cs` when the user supplies none) and no effective exclude pattern.
pub fn evaluate_compile_items(
    root: &Path,
    user_includes: &[String],
    user_excludes: &[String],
    policy: &ExclusionPolicy,
) -> MasonResult<Vec<PathBuf>> {
    let includes: Vec<String> = if user_includes.is_empty() {
        DEFAULT_COMPILE_INCLUDES.iter().map(|p| p.to_string()).collect()
    } else {
        user_includes.to_vec()
    };
    let excludes = policy.effective_excludes(user_excludes);

    let matcher = PathMatcher::new(root, &includes, &excludes)?;
    let mut items = matcher.select(enumerate_files(root));
    items.dedup();

    debug!(
        root = %root.display(),
        count = items.len(),
        "evaluated compile items"
    );
    Ok(items)
}
