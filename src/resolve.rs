//! Package path resolution
//!
//! Resolves an ordered sequence of path segments to a package node in the
//! loaded tree. Documentation trees often leave top-level modules outside any
//! named package; the resolver models that implicit container by synthesizing
//! a "Default" package instead of failing.
//!
//! Known quirk, preserved on purpose: the Default fallback fires only when
//! exactly one segment remains and no child matches it. A two-or-more-segment
//! path that misses a real sub-package fails outright with no fallback.
//! Dependent routing relies on exactly this asymmetry.

use std::borrow::Cow;

use crate::schema::{Documentation, Package};

/// Name of the synthesized package wrapping top-level modules
pub const DEFAULT_PACKAGE_NAME: &str = "Default";

/// Synthesize the Default package over the root tree's own modules
pub fn default_package(docs: &Documentation) -> Package {
    Package {
        name: DEFAULT_PACKAGE_NAME.to_string(),
        kind: "package".to_string(),
        summary: "Contains all modules not explicitly placed in a named package".to_string(),
        description: "Default package containing top-level modules".to_string(),
        modules: docs.decl.modules.clone(),
        ..Default::default()
    }
}

/// Split a routable path like `outer/inner` into resolver segments
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Resolve a segment sequence starting at the tree root
///
/// Returns `None` when the path resolves to nothing. A resolved real package
/// is borrowed from the tree (`Cow::Borrowed`, reference-identical to the
/// source node); a synthesized Default package is owned.
pub fn resolve_package<'a, S: AsRef<str>>(
    docs: &'a Documentation,
    segments: &[S],
) -> Option<Cow<'a, Package>> {
    resolve_in(docs, &docs.decl, segments)
}

fn resolve_in<'a, S: AsRef<str>>(
    docs: &'a Documentation,
    current: &'a Package,
    segments: &[S],
) -> Option<Cow<'a, Package>> {
    match segments {
        [] => Some(Cow::Borrowed(current)),
        [only] if !current.packages.iter().any(|p| p.name == only.as_ref()) => {
            Some(Cow::Owned(default_package(docs)))
        }
        [first, rest @ ..] => {
            let next = current.packages.iter().find(|p| p.name == first.as_ref())?;
            resolve_in(docs, next, rest)
        }
    }
}
