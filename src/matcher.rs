//! Glob matching over project-relative paths
//!
//! Compiles include and exclude pattern lists into gitignore-style matchers
//! using the `ignore` crate. Matching itself is pure: callers hand in
//! project-relative paths, so the matcher can be exercised against an
//! in-memory tree without touching disk.
//!
//! Pattern semantics follow gitignore globs: `*` matches within one path
//! segment, `**` matches across segments. Matching is case-sensitive on
//! every platform; one consistent policy keeps evaluation results portable
//! across hosts.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::{Path, PathBuf};

use crate::error::{MasonError, MasonResult};

/// Include/exclude matcher for compile item selection.
#[derive(Debug)]
pub struct PathMatcher {
    includes: Gitignore,
    excludes: Gitignore,
}

impl PathMatcher {
    /// Compile pattern lists rooted at `root`.
    ///
    /// The root only anchors the patterns; construction performs no I/O.
    /// Invalid pattern syntax is a user configuration error, surfaced as
    /// `MasonError::InvalidPattern`.
    pub fn new(
        root: &Path,
        include_patterns: &[String],
        exclude_patterns: &[String],
    ) -> MasonResult<Self> {
        Ok(Self {
            includes: build_matcher(root, include_patterns)?,
            excludes: build_matcher(root, exclude_patterns)?,
        })
    }

    /// Whether a project-relative file path is selected.
    ///
    /// A file is selected iff at least one include pattern matches it AND
    /// no exclude pattern matches it or any of its parent directories.
    /// Excludes win regardless of declaration order.
    pub fn is_match(&self, rel_path: &Path) -> bool {
        if !self.includes.matched(rel_path, false).is_ignore() {
            return false;
        }
        !self
            .excludes
            .matched_path_or_any_parents(rel_path, false)
            .is_ignore()
    }

    /// Filter an enumerated sequence of project-relative paths, preserving
    /// input order.
    pub fn select<I, P>(&self, paths: I) -> Vec<PathBuf>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        paths
            .into_iter()
            .map(Into::into)
            .filter(|path| self.is_match(path))
            .collect()
    }
}

fn build_matcher(root: &Path, patterns: &[String]) -> MasonResult<Gitignore> {
    let mut builder = GitignoreBuilder::new(root);
    for pattern in patterns {
        builder
            .add_line(None, pattern)
            .map_err(|e| MasonError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
    }
    builder
        .build()
        .map_err(|e| MasonError::MatcherBuild(e.to_string()))
}
