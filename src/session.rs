//! Evaluation session: the engine's top-level entry point
//!
//! A session is stateless. Every call builds its result from scratch, so
//! evaluating twice over unchanged inputs returns equal results and driving
//! an external build twice in a row succeeds twice. Any caching belongs to
//! callers, keyed on `EvaluationResult::fingerprint`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::DEFAULT_AMBIENT_SYMBOLS;
use crate::error::MasonResult;
use crate::evaluator::{evaluate_compile_items, ExclusionPolicy};
use crate::models::{EvaluationResult, FrameworkIdentity};
use crate::moniker;
use crate::symbols;

/// Fully assembled input to an evaluation session.
#[derive(Debug, Clone)]
pub struct ProjectDescription {
    /// Project root directory; may not exist yet (an empty project is valid)
    pub root: PathBuf,

    /// Declared target framework, short or long form
    pub target_framework: FrameworkIdentity,

    /// Explicit include patterns; empty means the conventional source glob
    pub includes: Vec<String>,

    /// Explicit exclude patterns, applied on top of the policy's defaults
    pub excludes: Vec<String>,

    /// Default-exclude handling
    pub exclusion_policy: ExclusionPolicy,

    /// Build-configuration symbols unioned into the result (`DEBUG`, ...)
    pub ambient_symbols: Vec<String>,

    /// Declared package references; when non-empty, restore runs before
    /// evaluation so restore-generated files are on disk
    pub package_references: Vec<String>,
}

impl ProjectDescription {
    /// A description with the conventional defaults: standard excludes,
    /// debug-configuration ambient symbols, no explicit patterns.
    pub fn new(root: impl Into<PathBuf>, target_framework: impl Into<FrameworkIdentity>) -> Self {
        Self {
            root: root.into(),
            target_framework: target_framework.into(),
            includes: Vec::new(),
            excludes: Vec::new(),
            exclusion_policy: ExclusionPolicy::standard(),
            ambient_symbols: DEFAULT_AMBIENT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            package_references: Vec::new(),
        }
    }
}

/// External compiler invocation contract.
///
/// The driver receives the evaluated symbols and compile items and emits
/// compiled artifacts, a program database and a dependency manifest; none
/// of that output flows back into the engine.
pub trait CompilerDriver {
    fn compile(&self, project_root: &Path, result: &EvaluationResult) -> MasonResult<()>;
}

/// Dependency restore contract.
///
/// Restore runs before item evaluation so that restore-generated files are
/// on disk when the tree is globbed. The engine knows nothing about package
/// content.
pub trait PackageRestorer {
    fn restore(&self, project_root: &Path) -> MasonResult<()>;
}

/// Stateless evaluation engine entry point.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluationSession;

impl EvaluationSession {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a project description into symbols plus compile items.
    ///
    /// Pure orchestration: resolve the moniker, derive its symbol, union
    /// the ambient set, glob the tree. No state survives the call.
    pub fn evaluate(&self, project: &ProjectDescription) -> MasonResult<EvaluationResult> {
        let moniker = moniker::resolve(&project.target_framework);
        debug!(
            identifier = moniker.identifier(),
            version = %moniker.version,
            profile = moniker.profile.as_deref().unwrap_or(""),
            "resolved target framework"
        );

        let mut symbols = symbols::derive_symbols(&moniker);
        for ambient in &project.ambient_symbols {
            symbols.insert(ambient.clone());
        }

        let items = evaluate_compile_items(
            &project.root,
            &project.includes,
            &project.excludes,
            &project.exclusion_policy,
        )?;

        debug!(
            symbols = symbols.len(),
            items = items.len(),
            "evaluation complete"
        );
        Ok(EvaluationResult { symbols, items })
    }

    /// Restore (when the project declares package references), evaluate,
    /// and hand the result to the compiler driver.
    ///
    /// Returns the evaluation result the driver saw.
    pub fn build(
        &self,
        project: &ProjectDescription,
        restorer: Option<&dyn PackageRestorer>,
        driver: &dyn CompilerDriver,
    ) -> MasonResult<EvaluationResult> {
        if !project.package_references.is_empty() {
            if let Some(restorer) = restorer {
                restorer.restore(&project.root)?;
            }
        }

        let result = self.evaluate(project)?;
        driver.compile(&project.root, &result)?;
        Ok(result)
    }
}
