//! Type descriptions for constructor arguments.
//!
//! Classification never inspects an argument's position, only its declared
//! type or the symbol it references. This module models the declared type as
//! a small value (`TypeDesc`) and provides composable predicates over it
//! (`TypePattern`), so new argument kinds can be added by composing
//! predicates instead of ad hoc string checks.

use regex::Regex;

/// What a type name resolved to in the module being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// A class declared in this module (ancestry is known).
    Class,
    /// An interface declared in this module.
    Interface,
    /// An enum declared in this module.
    Enum,
    /// An imported binding. Treated as a nominal class-like type; its
    /// ancestry is not visible without the defining module.
    Imported,
    /// A built-in keyword type (`string`, `number`, ...).
    Primitive,
    /// A name that resolves to nothing we can see.
    Unknown,
}

/// A named type together with its declaration kind and `extends` chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    pub name: String,
    pub decl: DeclKind,
    /// Base classes, nearest first. Empty unless `decl` is `Class`.
    pub ancestry: Vec<String>,
}

impl NamedType {
    pub fn new(name: impl Into<String>, decl: DeclKind) -> Self {
        Self {
            name: name.into(),
            decl,
            ancestry: Vec::new(),
        }
    }

    pub fn with_ancestry(name: impl Into<String>, ancestry: Vec<String>) -> Self {
        Self {
            name: name.into(),
            decl: DeclKind::Class,
            ancestry,
        }
    }

    /// True if the name itself, or any base class in the ancestry, matches.
    fn named_or_derived(&self, pattern: &Regex) -> bool {
        pattern.is_match(&self.name) || self.ancestry.iter().any(|base| pattern.is_match(base))
    }

    /// True if this name can stand for a concrete object instance.
    fn is_instantiable(&self) -> bool {
        matches!(self.decl, DeclKind::Class | DeclKind::Imported)
    }
}

/// Shape-level description of an argument's declared type.
///
/// TypeScript object references play the role of pointers: a class-instance
/// type is a `Reference`, and `T | null` / `T | undefined` collapse to the
/// underlying `T`. Arrays and sets are `Collection`s over their element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDesc {
    Named(NamedType),
    Reference(NamedType),
    Collection(Box<TypeDesc>),
}

/// A predicate over a `TypeDesc`. Name matching is an unanchored regex
/// search against the unqualified type name.
#[derive(Debug, Clone)]
pub enum TypePattern {
    /// A record instance (class instance or interface value) whose name
    /// matches. No derivation walk.
    Instance(Regex),
    /// An enum declared in this module whose name matches.
    Enumeration(Regex),
    /// A class-instance reference whose class, or any class it derives
    /// from, matches.
    RefTo(Regex),
    /// A collection whose element type satisfies the inner pattern.
    CollectionOf(Box<TypePattern>),
}

impl TypePattern {
    pub fn matches(&self, desc: &TypeDesc) -> bool {
        match (self, desc) {
            (TypePattern::Instance(pattern), TypeDesc::Named(named)) => {
                named.decl == DeclKind::Interface && pattern.is_match(&named.name)
            }
            (TypePattern::Instance(pattern), TypeDesc::Reference(named)) => {
                named.is_instantiable() && pattern.is_match(&named.name)
            }
            (TypePattern::Enumeration(pattern), TypeDesc::Named(named)) => {
                named.decl == DeclKind::Enum && pattern.is_match(&named.name)
            }
            (TypePattern::RefTo(pattern), TypeDesc::Reference(named)) => {
                named.is_instantiable() && named.named_or_derived(pattern)
            }
            (TypePattern::CollectionOf(element), TypeDesc::Collection(inner)) => {
                element.matches(inner)
            }
            _ => false,
        }
    }
}
