//! docdex: documentation tree indexer
//!
//! Turns a single pre-generated JSON tree of packages, nested sub-packages,
//! modules, and declarations into addressable, categorized, sortable views:
//! package path resolution (with a synthetic Default package for top-level
//! modules), per-module item classification, recursive flattening for global
//! search, per-package rollups, and the ordering heuristics used by
//! navigation and listing UI.
//!
//! The tree is loaded once and never mutated; every query is a pure function
//! over the shared immutable tree, safe to repeat and to call concurrently.
//!
//! # Example
//!
//! ```
//! use docdex::{classify_module, resolve_package, Documentation};
//!
//! let docs: Documentation = serde_json::from_str(
//!     r#"{"decl": {"name": "root", "packages": [
//!         {"name": "geometry", "modules": [
//!             {"name": "shapes", "aliases": [
//!                 {"name": "MAX_SIDES", "value": "const Int"}
//!             ]}
//!         ]}
//!     ]}}"#,
//! )
//! .unwrap();
//!
//! let pkg = resolve_package(&docs, &["geometry"]).unwrap();
//! let items = classify_module(&pkg.modules[0]);
//! assert_eq!(items.constants.len(), 1);
//! ```

pub mod classify;
pub mod cli;
pub mod error;
pub mod flatten;
pub mod index;
pub mod loader;
pub mod order;
pub mod resolve;
pub mod schema;
pub mod search;

// Re-export commonly used types
pub use classify::{alias_is_constant, classify_module, classify_module_with, ModuleItems, Tagged};
pub use cli::{Cli, Commands, OutputFormat};
pub use error::{DocdexError, Result};
pub use flatten::{
    list_all_modules, list_all_packages, rollup_all, rollup_package, IndexedModule,
    IndexedPackage, ItemBuckets, ItemSummary, ModuleRollup, PackageRollup, DEFAULT_MAX_DEPTH,
};
pub use index::{index_package, OrderedMap};
pub use loader::load_docs;
pub use order::{
    group_into_columns, layout_listing, sort_listing_entries, sort_sidebar_entries,
    ListingSection, SectionCounts, LARGE_SECTION_THRESHOLD, MAX_LISTING_COLUMNS, SECTION_ITEM_CAP,
};
pub use resolve::{default_package, path_segments, resolve_package, DEFAULT_PACKAGE_NAME};
pub use schema::{
    Alias, Argument, Documentation, Field, Function, Module, Overload, Package, Parameter,
    Struct, Trait,
};
pub use search::{search_catalogue, SearchResults};
