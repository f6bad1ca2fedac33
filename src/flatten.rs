//! Tree flattening: global catalogues and per-package rollups
//!
//! One depth-first pre-order walk over the package tree produces two kinds of
//! derived views:
//!
//! - **Global catalogues** ([`list_all_packages`], [`list_all_modules`]):
//!   flat lists of every package and every module with synthesized routable
//!   paths, used for cross-tree search regardless of nesting depth.
//! - **Per-package rollups** ([`rollup_package`], [`rollup_all`]): a
//!   package's own declarations plus a per-module map of its direct modules'
//!   classified items, used by listing pages.
//!
//! The walk is an explicit stack traversal with a caller-configurable depth
//! limit. The source data is assumed acyclic; a cyclic tree would otherwise
//! recurse forever, so exceeding the limit reports `DepthExceeded` instead.

use std::borrow::Cow;

use serde::Serialize;

use crate::classify::alias_is_constant;
use crate::error::{DocdexError, Result};
use crate::index::OrderedMap;
use crate::resolve::default_package;
use crate::schema::{Alias, Documentation, Function, Module, Package, Struct, Trait};

/// Default package-nesting depth limit for tree walks
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// A package paired with its synthesized routable path (`/outer/inner`)
#[derive(Debug, Clone, Serialize)]
pub struct IndexedPackage<'a> {
    pub package: Cow<'a, Package>,
    pub path: String,
}

/// A module paired with its synthesized routable path (`/outer#module`)
#[derive(Debug, Clone, Serialize)]
pub struct IndexedModule<'a> {
    pub module: &'a Module,
    pub path: String,
}

/// Flatten every package in the tree into a catalogue with routable paths
///
/// Top-level packages and their descendants come first in pre-order; when the
/// root tree carries top-level modules, a synthesized Default package entry
/// (path `/Default`) is appended last. The root node itself is not listed.
pub fn list_all_packages(
    docs: &Documentation,
    max_depth: usize,
) -> Result<Vec<IndexedPackage<'_>>> {
    let mut catalogue = Vec::new();

    let mut stack: Vec<(&Package, String, usize)> = docs
        .decl
        .packages
        .iter()
        .rev()
        .map(|p| (p, format!("/{}", p.name), 1))
        .collect();

    while let Some((pkg, path, depth)) = stack.pop() {
        if depth > max_depth {
            return Err(DocdexError::DepthExceeded { limit: max_depth });
        }

        for child in pkg.packages.iter().rev() {
            stack.push((child, format!("{}/{}", path, child.name), depth + 1));
        }

        catalogue.push(IndexedPackage {
            package: Cow::Borrowed(pkg),
            path,
        });
    }

    if !docs.decl.modules.is_empty() {
        catalogue.push(IndexedPackage {
            package: Cow::Owned(default_package(docs)),
            path: "/Default".to_string(),
        });
    }

    tracing::debug!(packages = catalogue.len(), "flattened package catalogue");
    Ok(catalogue)
}

/// Flatten every module belonging to every package into a catalogue
///
/// Module paths are `ancestorPackagePath#moduleName`; the root's own
/// top-level modules get a bare `#moduleName`.
pub fn list_all_modules(docs: &Documentation, max_depth: usize) -> Result<Vec<IndexedModule<'_>>> {
    let mut catalogue = Vec::new();
    let mut stack: Vec<(&Package, String, usize)> = vec![(&docs.decl, String::new(), 0)];

    while let Some((pkg, path, depth)) = stack.pop() {
        if depth > max_depth {
            return Err(DocdexError::DepthExceeded { limit: max_depth });
        }

        for module in &pkg.modules {
            catalogue.push(IndexedModule {
                module,
                path: format!("{}#{}", path, module.name),
            });
        }

        for child in pkg.packages.iter().rev() {
            stack.push((child, format!("{}/{}", path, child.name), depth + 1));
        }
    }

    tracing::debug!(modules = catalogue.len(), "flattened module catalogue");
    Ok(catalogue)
}

/// A single listed item in a rollup: name, kind tag, and description, with
/// the owning module name on module-level entries
#[derive(Debug, Clone, Serialize)]
pub struct ItemSummary<'a> {
    pub name: &'a str,

    #[serde(rename = "type")]
    pub kind: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<&'a str>,

    pub description: &'a str,
}

/// Five classification buckets of rollup item summaries
#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemBuckets<'a> {
    pub functions: Vec<ItemSummary<'a>>,
    pub types: Vec<ItemSummary<'a>>,
    pub constants: Vec<ItemSummary<'a>>,
    pub variables: Vec<ItemSummary<'a>>,
    pub traits: Vec<ItemSummary<'a>>,
}

impl<'a> ItemBuckets<'a> {
    pub fn total_items(&self) -> usize {
        self.functions.len()
            + self.types.len()
            + self.constants.len()
            + self.variables.len()
            + self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }

    pub fn has_large_section(&self, threshold: usize) -> bool {
        self.functions.len() > threshold
            || self.types.len() > threshold
            || self.constants.len() > threshold
            || self.variables.len() > threshold
            || self.traits.len() > threshold
    }

    /// Item names in bucket order, each bucket in declaration order
    pub fn item_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.functions
            .iter()
            .map(|i| i.name)
            .chain(self.types.iter().map(|i| i.name))
            .chain(self.constants.iter().map(|i| i.name))
            .chain(self.variables.iter().map(|i| i.name))
            .chain(self.traits.iter().map(|i| i.name))
    }
}

/// One direct module's contribution to a package rollup
#[derive(Debug, Clone, Serialize)]
pub struct ModuleRollup<'a> {
    pub description: &'a str,

    #[serde(flatten)]
    pub items: ItemBuckets<'a>,
}

/// Per-package aggregation: package-level items plus a per-module map of
/// each direct module's classified items
#[derive(Debug, Clone, Serialize)]
pub struct PackageRollup<'a> {
    pub description: &'a str,

    #[serde(flatten)]
    pub items: ItemBuckets<'a>,

    /// Direct modules keyed by name, in declaration order. Modules that
    /// contribute zero items across all five buckets are omitted entirely.
    #[serde(skip_serializing_if = "OrderedMap::is_empty")]
    pub modules: OrderedMap<ModuleRollup<'a>>,
}

fn summarize<'a>(
    functions: &'a [Function],
    structs: &'a [Struct],
    aliases: &'a [Alias],
    traits: &'a [Trait],
    module: Option<&'a str>,
) -> ItemBuckets<'a> {
    let mut buckets = ItemBuckets::default();

    for function in functions {
        buckets.functions.push(ItemSummary {
            name: &function.name,
            kind: "function",
            module,
            description: function
                .overloads
                .first()
                .map(|o| o.description.as_str())
                .unwrap_or(""),
        });
    }

    for strukt in structs {
        buckets.types.push(ItemSummary {
            name: &strukt.name,
            kind: "struct",
            module,
            description: &strukt.description,
        });
    }

    for alias in aliases {
        let (bucket, kind) = if alias_is_constant(alias) {
            (&mut buckets.constants, "const")
        } else {
            (&mut buckets.variables, "var")
        };
        bucket.push(ItemSummary {
            name: &alias.name,
            kind,
            module,
            description: &alias.description,
        });
    }

    for tr in traits {
        buckets.traits.push(ItemSummary {
            name: &tr.name,
            kind: "trait",
            module,
            description: &tr.description,
        });
    }

    buckets
}

/// Build the rollup for one package
pub fn rollup_package(pkg: &Package) -> PackageRollup<'_> {
    let items = summarize(&pkg.functions, &pkg.structs, &pkg.aliases, &pkg.traits, None);

    let mut modules = OrderedMap::new();
    for module in &pkg.modules {
        let rollup = ModuleRollup {
            description: &module.description,
            items: summarize(
                &module.functions,
                &module.structs,
                &module.aliases,
                &module.traits,
                Some(&module.name),
            ),
        };
        // Empty-module pruning is intentional: a module contributing nothing
        // to any bucket has no place on a listing page.
        if !rollup.items.is_empty() {
            modules.insert(module.name.clone(), rollup);
        }
    }

    PackageRollup {
        description: &pkg.description,
        items,
        modules,
    }
}

/// Build rollups for a whole catalogue, keyed by package name
pub fn rollup_all<'a>(catalogue: &'a [IndexedPackage<'a>]) -> OrderedMap<PackageRollup<'a>> {
    let mut rollups = OrderedMap::new();
    for indexed in catalogue {
        let pkg = indexed.package.as_ref();
        rollups.insert(pkg.name.clone(), rollup_package(pkg));
    }
    rollups
}
