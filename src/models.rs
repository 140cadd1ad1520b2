//! Core data models for Mason
//!
//! Defines the fundamental data structures used throughout Mason:
//! - `FrameworkIdentity`: the raw target framework string as declared
//! - `FrameworkFamily`, `FrameworkVersion`, `ResolvedMoniker`: normalized identity
//! - `EvaluationResult`: the symbols and compile items handed to a compiler driver

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// Set of preprocessor-style compilation symbols.
///
/// A `BTreeSet` keeps iteration order deterministic, which in turn keeps
/// serialized results and fingerprints stable across runs.
pub type SymbolSet = BTreeSet<String>;

/// Raw target framework string as declared by the project.
///
/// Short form (`netstandard1.5`) or long form
/// (`.NETFramework,Version=v4.0,Profile=Client`). Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameworkIdentity(String);

impl FrameworkIdentity {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Long-form identities carry comma-separated `Key=Value` segments.
    pub fn is_long_form(&self) -> bool {
        self.0.contains(',')
    }
}

impl From<&str> for FrameworkIdentity {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for FrameworkIdentity {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for FrameworkIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Framework family: known identifiers as variants, anything else preserved
/// verbatim so forward-compatible monikers still resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameworkFamily {
    /// `.NETFramework` (short form `net`)
    NetFramework,
    /// `.NETStandard` (short form `netstandard`)
    NetStandard,
    /// `.NETCoreApp` (short form `netcoreapp`)
    NetCoreApp,
    /// `.NETPortable`, the portable class library profiles
    Portable,
    /// `UAP` (short form `uap`)
    Uap,
    /// `Xamarin.iOS` (short form `xamarinios`)
    XamarinIos,
    /// `Xamarin.Mac` (short form `xamarinmac`)
    XamarinMac,
    /// `MonoAndroid` (short form `monoandroid`)
    MonoAndroid,
    /// Anything else, identifier kept exactly as declared
    Unknown(String),
}

impl FrameworkFamily {
    /// Canonical long-form identifier for this family.
    pub fn identifier(&self) -> &str {
        match self {
            FrameworkFamily::NetFramework => ".NETFramework",
            FrameworkFamily::NetStandard => ".NETStandard",
            FrameworkFamily::NetCoreApp => ".NETCoreApp",
            FrameworkFamily::Portable => ".NETPortable",
            FrameworkFamily::Uap => "UAP",
            FrameworkFamily::XamarinIos => "Xamarin.iOS",
            FrameworkFamily::XamarinMac => "Xamarin.Mac",
            FrameworkFamily::MonoAndroid => "MonoAndroid",
            FrameworkFamily::Unknown(raw) => raw,
        }
    }

    /// Map a long-form identifier, case-insensitively. Unknown identifiers
    /// are preserved verbatim rather than rejected.
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier.to_ascii_lowercase().as_str() {
            ".netframework" => FrameworkFamily::NetFramework,
            ".netstandard" => FrameworkFamily::NetStandard,
            ".netcoreapp" => FrameworkFamily::NetCoreApp,
            ".netportable" => FrameworkFamily::Portable,
            "uap" => FrameworkFamily::Uap,
            "xamarin.ios" => FrameworkFamily::XamarinIos,
            "xamarin.mac" => FrameworkFamily::XamarinMac,
            "monoandroid" => FrameworkFamily::MonoAndroid,
            _ => FrameworkFamily::Unknown(identifier.to_string()),
        }
    }

    /// Map a short-form prefix (the `netstandard` in `netstandard1.5`).
    pub fn from_short_prefix(prefix: &str) -> Self {
        match prefix.to_ascii_lowercase().as_str() {
            "net" => FrameworkFamily::NetFramework,
            "netstandard" => FrameworkFamily::NetStandard,
            "netcoreapp" => FrameworkFamily::NetCoreApp,
            "uap" => FrameworkFamily::Uap,
            "xamarinios" => FrameworkFamily::XamarinIos,
            "xamarinmac" => FrameworkFamily::XamarinMac,
            "monoandroid" => FrameworkFamily::MonoAndroid,
            _ => FrameworkFamily::Unknown(prefix.to_string()),
        }
    }
}

/// Framework version as ordered integer components.
///
/// Parsing is total: components that fail to parse degrade to zero instead
/// of erroring, so any declared version produces a usable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkVersion(Vec<u32>);

impl FrameworkVersion {
    pub fn new(components: Vec<u32>) -> Self {
        Self(components)
    }

    /// The `0.0` version used when nothing parseable was declared.
    pub fn zero() -> Self {
        Self(vec![0, 0])
    }

    pub fn components(&self) -> &[u32] {
        &self.0
    }

    /// Parse a dotted version string. A leading `v` or `V` is stripped.
    ///
    /// `"v4.6.1"` → `[4, 6, 1]`. Unparseable components become zero; an
    /// empty string yields `0.0`.
    pub fn parse_dotted(s: &str) -> Self {
        let stripped = s.strip_prefix(['v', 'V']).unwrap_or(s);
        if stripped.is_empty() {
            return Self::zero();
        }
        let components = stripped
            .split('.')
            .map(|part| part.trim().parse().unwrap_or(0))
            .collect();
        Self(components)
    }

    /// Parse a bare digit run, one component per digit.
    ///
    /// `"461"` → `[4, 6, 1]`, `"20"` → `[2, 0]`. This is how short-form
    /// monikers like `net461` and `netstandard20` spell their versions.
    /// Non-digit trailing characters are ignored; no digits yields `0.0`.
    pub fn parse_digits(s: &str) -> Self {
        let components: Vec<u32> = s
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .map(|c| u32::from(c.to_digit(10).unwrap_or(0)))
            .collect();
        if components.is_empty() {
            return Self::zero();
        }
        Self(components)
    }

    /// Components normalized for symbol derivation: at least two, with
    /// trailing zeros beyond the second stripped. `v4.5.0` renders as
    /// `[4, 5]`, `v4.0` stays `[4, 0]`.
    pub fn normalized(&self) -> Vec<u32> {
        let mut components = self.0.clone();
        if components.is_empty() {
            return vec![0, 0];
        }
        while components.len() > 2 && components.last() == Some(&0) {
            components.pop();
        }
        if components.len() == 1 {
            components.push(0);
        }
        components
    }
}

impl Default for FrameworkVersion {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for FrameworkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join("."))
    }
}

/// Resolved target framework moniker: identifier, version, optional profile.
///
/// Derived purely from a `FrameworkIdentity`; never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMoniker {
    pub family: FrameworkFamily,
    pub version: FrameworkVersion,
    pub profile: Option<String>,
}

impl ResolvedMoniker {
    pub fn new(
        family: FrameworkFamily,
        version: FrameworkVersion,
        profile: Option<String>,
    ) -> Self {
        Self {
            family,
            version,
            profile,
        }
    }

    /// Canonical identifier of the resolved family.
    pub fn identifier(&self) -> &str {
        self.family.identifier()
    }
}

/// Result of one project evaluation, consumed by an external compiler driver.
///
/// Produced fresh per invocation; two evaluations over unchanged inputs
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Framework-derived symbols unioned with the ambient set
    pub symbols: SymbolSet,

    /// Project-root-relative compile items, duplicate-free, in
    /// deterministic discovery order
    pub items: Vec<PathBuf>,
}

impl EvaluationResult {
    /// Content hash of the result, for callers that cache evaluations.
    ///
    /// Stable across processes: symbols iterate in sorted order and items
    /// keep their deterministic discovery order.
    pub fn fingerprint(&self) -> String {
        let serialized =
            serde_json::to_string(self).expect("evaluation result serializes to JSON");
        let mut hasher = Sha256::new();
        hasher.update(serialized.as_bytes());
        format!("sha256:{:x}", hasher.finalize())
    }
}
