//! Implicit compilation symbol derivation
//!
//! Maps a resolved moniker to the preprocessor-style symbol the compiler
//! defines implicitly for that target framework, e.g. `.NETStandard` 1.5
//! becomes `NETSTANDARD1_5`. Ambient symbols (`DEBUG`, `TRACE`, ...) come
//! from the build configuration and are unioned in by the caller, never
//! derived here.

use crate::models::{FrameworkFamily, ResolvedMoniker, SymbolSet};

/// Derive the framework-implied symbol set for a moniker.
///
/// The set has at most one element; portable class library monikers derive
/// none at all.
pub fn derive_symbols(moniker: &ResolvedMoniker) -> SymbolSet {
    let mut symbols = SymbolSet::new();
    if let Some(symbol) = implicit_symbol(moniker) {
        symbols.insert(symbol);
    }
    symbols
}

/// The single framework-derived symbol, if the family gets one.
///
/// - `.NETPortable` derives nothing.
/// - `.NETFramework` uses the historical `NET` + bare digits shape
///   (`NET40`, `NET461`); the `Client` profile shares the unprofiled symbol.
/// - Every other family, known or unknown, uses the identifier stripped of
///   non-alphanumerics and uppercased, followed by version components
///   joined with `_` (`NETSTANDARD1_5`, `XAMARINIOS1_0`).
pub fn implicit_symbol(moniker: &ResolvedMoniker) -> Option<String> {
    let components = moniker.version.normalized();
    match &moniker.family {
        FrameworkFamily::Portable => None,
        FrameworkFamily::NetFramework => {
            let digits: String = components.iter().map(ToString::to_string).collect();
            Some(format!("NET{digits}"))
        }
        family => {
            let prefix = sanitize_identifier(family.identifier());
            if prefix.is_empty() {
                // An identifier with no alphanumeric content derives nothing.
                return None;
            }
            let joined: Vec<String> = components.iter().map(ToString::to_string).collect();
            Some(format!("{}{}", prefix, joined.join("_")))
        }
    }
}

fn sanitize_identifier(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
