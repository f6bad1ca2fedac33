//! Data model for the pre-generated documentation tree
//!
//! The tree is produced by an external doc generator and loaded once per
//! process (see `loader`). Everything here is read-only after load; the
//! indexer only derives views over it.
//!
//! Optional collections deserialize absent-as-empty so consumers never have
//! to null-check. A missing `name` is a generator-contract violation and
//! surfaces as a load error, not something the indexer papers over.

use serde::{Deserialize, Serialize};

/// The whole loaded document: one declaration tree plus the generator version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documentation {
    /// Root of the package tree
    pub decl: Package,

    /// Version string of the documented project
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

/// A named container of modules and/or nested sub-packages
///
/// Package-level declarations (functions, structs, aliases, traits) are rare
/// but allowed by the schema; the rollup picks them up when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<Module>,

    /// Nested sub-packages. The tree is assumed acyclic and unshared; the
    /// indexer does not detect cycles (see the flattener's depth guard).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<Package>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<Function>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub structs: Vec<Struct>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<Alias>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traits: Vec<Trait>,
}

/// A named container of declarations, owned by exactly one package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<Function>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub structs: Vec<Struct>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<Alias>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traits: Vec<Trait>,
}

/// A named binding to a rendered value/type expression
///
/// Ambiguous by design: an alias is either a constant or a variable, and the
/// source carries no flag saying which. Classification is derived from the
/// rendered `value` text (see `classify::alias_is_constant`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    pub name: String,

    /// Rendered value/type expression. Absent deserializes as empty, which
    /// the classifier treats as "no const token".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
}

/// A function name bound to one or more call signatures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overloads: Vec<Overload>,
}

/// One call signature of an overloaded function
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overload {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub signature: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub constraints: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Argument>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_static: bool,

    #[serde(default, rename = "async", skip_serializing_if = "std::ops::Not::not")]
    pub is_async: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_def: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub raises: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raises_doc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns_doc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convention: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
}

/// One formal argument of an overload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    pub name: String,

    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub ty: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub passing_kind: String,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub inout: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub owned: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convention: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
}

/// A generic type parameter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub ty: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// A struct declaration with fields, methods, and implemented traits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Struct {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub constraints: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,

    /// Methods grouped under this struct
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<Function>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<Alias>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    /// Implemented trait names (by name, not by reference). The generator
    /// emits `null` here for some declarations, hence the Option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_traits: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
}

/// One field of a struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,

    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub ty: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// A trait declaration with method signatures and extended traits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trait {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<Function>,

    /// Extended trait names (by name, not by reference)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_traits: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
}
