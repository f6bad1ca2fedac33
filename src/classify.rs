//! Module-item classification
//!
//! Partitions a module's declarations into five semantic buckets: functions,
//! types, constants, variables, and traits. Functions, structs, and traits
//! map over verbatim; aliases are split into constants vs variables by a
//! substring heuristic over their rendered value text.
//!
//! Classification is recomputed on every call and borrows from the source
//! tree; nothing is cached or cloned.

use serde::Serialize;

use crate::schema::{Alias, Function, Module, Struct, Trait};

/// A declaration tagged with the name of the module that owns it
///
/// Serializes as the declaration's own fields plus a `module` field, so
/// flattened cross-module listings keep their provenance.
#[derive(Debug, Clone, Serialize)]
pub struct Tagged<'a, T> {
    #[serde(flatten)]
    pub item: &'a T,

    /// Owning module name
    pub module: &'a str,
}

/// Classification result: five buckets, each in source declaration order
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModuleItems<'a> {
    pub functions: Vec<Tagged<'a, Function>>,
    pub types: Vec<Tagged<'a, Struct>>,
    pub constants: Vec<Tagged<'a, Alias>>,
    pub variables: Vec<Tagged<'a, Alias>>,
    pub traits: Vec<Tagged<'a, Trait>>,
}

impl<'a> ModuleItems<'a> {
    /// Total item count across all five buckets
    pub fn total_items(&self) -> usize {
        self.functions.len()
            + self.types.len()
            + self.constants.len()
            + self.variables.len()
            + self.traits.len()
    }

    /// True when every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }

    /// True when any single bucket holds more than `threshold` items
    pub fn has_large_section(&self, threshold: usize) -> bool {
        self.functions.len() > threshold
            || self.types.len() > threshold
            || self.constants.len() > threshold
            || self.variables.len() > threshold
            || self.traits.len() > threshold
    }

    /// Item names in bucket order (functions, types, constants, variables,
    /// traits), each bucket in declaration order
    pub fn item_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.functions
            .iter()
            .map(|f| f.item.name.as_str())
            .chain(self.types.iter().map(|t| t.item.name.as_str()))
            .chain(self.constants.iter().map(|c| c.item.name.as_str()))
            .chain(self.variables.iter().map(|v| v.item.name.as_str()))
            .chain(self.traits.iter().map(|t| t.item.name.as_str()))
    }
}

/// Default constant-vs-variable policy: an alias whose rendered `value`
/// contains the token `const` anywhere is a constant, otherwise a variable.
///
/// This is a heuristic over rendered text, not a semantic property, and it
/// can misclassify (a variable whose type name happens to contain "const").
/// Callers depend on bit-identical classification with the existing index,
/// so the heuristic is kept as-is; swap it via [`classify_module_with`] if
/// the upstream schema ever grows a real flag.
pub fn alias_is_constant(alias: &Alias) -> bool {
    alias.value.contains("const")
}

/// Classify a module's declarations using the default alias policy
pub fn classify_module(module: &Module) -> ModuleItems<'_> {
    classify_module_with(module, alias_is_constant)
}

/// Classify a module's declarations with a caller-supplied alias policy
pub fn classify_module_with<'a>(
    module: &'a Module,
    is_constant: impl Fn(&Alias) -> bool,
) -> ModuleItems<'a> {
    let mut items = ModuleItems::default();
    let owner = module.name.as_str();

    for function in &module.functions {
        items.functions.push(Tagged {
            item: function,
            module: owner,
        });
    }

    for strukt in &module.structs {
        items.types.push(Tagged {
            item: strukt,
            module: owner,
        });
    }

    for alias in &module.aliases {
        let bucket = if is_constant(alias) {
            &mut items.constants
        } else {
            &mut items.variables
        };
        bucket.push(Tagged {
            item: alias,
            module: owner,
        });
    }

    for tr in &module.traits {
        items.traits.push(Tagged {
            item: tr,
            module: owner,
        });
    }

    items
}
