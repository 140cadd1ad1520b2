//! Target framework moniker resolution
//!
//! Turns a raw framework identity string, short form (`netstandard1.5`,
//! `net461`) or long form (`.NETFramework,Version=v4.0,Profile=Client`),
//! into a `ResolvedMoniker`.
//!
//! Resolution is total: any input string, however malformed, produces a
//! best-effort moniker. The surrounding build must never abort over an
//! unusual framework string.

use crate::models::{FrameworkFamily, FrameworkIdentity, FrameworkVersion, ResolvedMoniker};

/// Resolve a framework identity into a canonical moniker. Never fails.
pub fn resolve(identity: &FrameworkIdentity) -> ResolvedMoniker {
    if identity.is_long_form() {
        resolve_long_form(identity.as_str())
    } else {
        resolve_short_form(identity.as_str())
    }
}

/// Short forms split at the first digit: the leading run is the family
/// prefix, the remainder the version. Unrecognized prefixes keep the prefix
/// verbatim as the identifier, so arbitrary tokens still resolve.
fn resolve_short_form(raw: &str) -> ResolvedMoniker {
    let trimmed = raw.trim();
    let split = trimmed
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (prefix, version_part) = trimmed.split_at(split);

    let family = FrameworkFamily::from_short_prefix(prefix);
    let version = if version_part.is_empty() {
        FrameworkVersion::zero()
    } else if version_part.contains('.') {
        FrameworkVersion::parse_dotted(version_part)
    } else {
        FrameworkVersion::parse_digits(version_part)
    };

    ResolvedMoniker::new(family, version, None)
}

/// Long forms are comma-separated: the identifier first, then `Key=Value`
/// segments. Segment keys match case-insensitively; malformed segments are
/// skipped rather than rejected.
fn resolve_long_form(raw: &str) -> ResolvedMoniker {
    let mut segments = raw.split(',');
    let identifier = segments.next().unwrap_or("").trim();
    let family = FrameworkFamily::from_identifier(identifier);

    let mut version = FrameworkVersion::zero();
    let mut profile = None;
    for segment in segments {
        let Some((key, value)) = segment.split_once('=') else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "version" => version = FrameworkVersion::parse_dotted(value.trim()),
            "profile" => {
                let value = value.trim();
                if !value.is_empty() {
                    profile = Some(value.to_string());
                }
            }
            _ => {}
        }
    }

    ResolvedMoniker::new(family, version, profile)
}
