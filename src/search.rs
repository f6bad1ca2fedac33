//! Catalogue filtering for type-ahead search
//!
//! Matches a query against the flattened package and module catalogues with
//! case-insensitive substring matching, packages before modules. Input
//! handling and result presentation belong to the caller; this is only the
//! matching step over already-flattened data.

use serde::Serialize;

use crate::flatten::{IndexedModule, IndexedPackage};

/// Matching catalogue entries, in catalogue order
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<'a> {
    pub packages: Vec<&'a IndexedPackage<'a>>,
    pub modules: Vec<&'a IndexedModule<'a>>,
}

impl SearchResults<'_> {
    pub fn total(&self) -> usize {
        self.packages.len() + self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Filter the catalogues by case-insensitive substring match on names
///
/// An empty query matches everything (the type-ahead's initial state lists
/// the full catalogue).
pub fn search_catalogue<'a>(
    packages: &'a [IndexedPackage<'a>],
    modules: &'a [IndexedModule<'a>],
    query: &str,
) -> SearchResults<'a> {
    let needle = query.to_lowercase();

    let packages = packages
        .iter()
        .filter(|entry| entry.package.name.to_lowercase().contains(&needle))
        .collect();
    let modules = modules
        .iter()
        .filter(|entry| entry.module.name.to_lowercase().contains(&needle))
        .collect();

    SearchResults { packages, modules }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::{list_all_modules, list_all_packages, DEFAULT_MAX_DEPTH};
    use crate::schema::{Documentation, Module, Package};

    fn docs() -> Documentation {
        Documentation {
            decl: Package {
                name: "root".to_string(),
                packages: vec![
                    Package {
                        name: "Geometry".to_string(),
                        modules: vec![Module {
                            name: "shapes".to_string(),
                            ..Default::default()
                        }],
                        ..Default::default()
                    },
                    Package {
                        name: "io".to_string(),
                        modules: vec![Module {
                            name: "geo_io".to_string(),
                            ..Default::default()
                        }],
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn matches_are_case_insensitive() {
        let docs = docs();
        let packages = list_all_packages(&docs, DEFAULT_MAX_DEPTH).unwrap();
        let modules = list_all_modules(&docs, DEFAULT_MAX_DEPTH).unwrap();

        let results = search_catalogue(&packages, &modules, "GEO");
        assert_eq!(results.packages.len(), 1);
        assert_eq!(results.packages[0].package.name, "Geometry");
        assert_eq!(results.modules.len(), 1);
        assert_eq!(results.modules[0].module.name, "geo_io");
    }

    #[test]
    fn empty_query_matches_everything() {
        let docs = docs();
        let packages = list_all_packages(&docs, DEFAULT_MAX_DEPTH).unwrap();
        let modules = list_all_modules(&docs, DEFAULT_MAX_DEPTH).unwrap();

        let results = search_catalogue(&packages, &modules, "");
        assert_eq!(results.packages.len(), packages.len());
        assert_eq!(results.modules.len(), modules.len());
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let docs = docs();
        let packages = list_all_packages(&docs, DEFAULT_MAX_DEPTH).unwrap();
        let modules = list_all_modules(&docs, DEFAULT_MAX_DEPTH).unwrap();

        let results = search_catalogue(&packages, &modules, "nonexistent");
        assert!(results.is_empty());
    }
}
