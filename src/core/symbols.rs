//! Module symbol table.
//!
//! One pass over the parsed module collects everything classification needs:
//! class declarations with their `extends` chains, enums, interfaces,
//! imported names, declared function return types, and the declared types of
//! `var`/`let`/`const` bindings and function parameters. Argument
//! expressions are then resolved against this table.
//!
//! Resolution is by unqualified name over a flat, module-wide map; a later
//! declaration of the same name shadows an earlier one. Lexically accurate
//! scoping belongs to a full language service, not a migration pass.

use std::collections::{HashMap, HashSet};

use swc_ecma_ast::{
    BindingIdent, Callee, ClassDecl, Expr, FnDecl, ImportDecl, ImportSpecifier, Module, Pat,
    TsEntityName, TsEnumDecl, TsInterfaceDecl, TsKeywordTypeKind, TsType, TsTypeOperatorOp,
    TsUnionOrIntersectionType, VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::types::{DeclKind, NamedType, TypeDesc};

/// Collection types whose single type argument is the element type.
const COLLECTION_TYPE_NAMES: &[&str] = &["Array", "ReadonlyArray", "Set"];

#[derive(Debug, Default)]
struct BindingDecl {
    /// Declared type annotation, if the binding has one.
    annotation: Option<Box<TsType>>,
    /// Constructor name, if the binding is initialized with `new C(...)`.
    new_ctor: Option<String>,
}

/// Declarations visible in one module.
#[derive(Debug, Default)]
pub struct SymbolTable {
    /// Class name -> direct base class name, if any.
    classes: HashMap<String, Option<String>>,
    interfaces: HashSet<String>,
    enums: HashSet<String>,
    imports: HashSet<String>,
    bindings: HashMap<String, BindingDecl>,
    /// Function name -> declared return type.
    returns: HashMap<String, Box<TsType>>,
}

impl SymbolTable {
    /// Collect all declarations from a module.
    pub fn collect(module: &Module) -> Self {
        let mut collector = Collector {
            table: SymbolTable::default(),
        };
        module.visit_with(&mut collector);
        collector.table
    }

    /// True if `name` refers to a declared value binding or an import.
    pub fn is_declared_value(&self, name: &str) -> bool {
        self.bindings.contains_key(name) || self.imports.contains(name)
    }

    /// Resolve a type name to its declaration, including the `extends`
    /// chain for classes declared in this module.
    pub fn resolve_type_name(&self, name: &str) -> NamedType {
        if self.classes.contains_key(name) {
            return NamedType::with_ancestry(name, self.ancestry_of(name));
        }
        if self.interfaces.contains(name) {
            return NamedType::new(name, DeclKind::Interface);
        }
        if self.enums.contains(name) {
            return NamedType::new(name, DeclKind::Enum);
        }
        if self.imports.contains(name) {
            return NamedType::new(name, DeclKind::Imported);
        }
        NamedType::new(name, DeclKind::Unknown)
    }

    fn ancestry_of(&self, name: &str) -> Vec<String> {
        let mut chain = Vec::new();
        let mut current = name;
        // The seen-set guards against `extends` cycles in broken input.
        let mut seen = HashSet::from([current]);
        while let Some(Some(base)) = self.classes.get(current) {
            if !seen.insert(base.as_str()) {
                break;
            }
            chain.push(base.clone());
            current = base.as_str();
        }
        chain
    }

    /// Build a type description from a TypeScript type annotation.
    ///
    /// `T | null` and `T | undefined` collapse to `T`; `readonly T[]`,
    /// `Array<T>` and `Set<T>` become collections over the element type.
    pub fn desc_from_type(&self, ty: &TsType) -> Option<TypeDesc> {
        match ty {
            TsType::TsTypeRef(type_ref) => {
                let TsEntityName::Ident(ident) = &type_ref.type_name else {
                    return None;
                };
                let name = ident.sym.as_str();
                if COLLECTION_TYPE_NAMES.contains(&name)
                    && let Some(type_params) = &type_ref.type_params
                    && let [element] = type_params.params.as_slice()
                {
                    return Some(TypeDesc::Collection(Box::new(self.desc_from_type(element)?)));
                }
                Some(self.desc_for_name(name))
            }
            TsType::TsArrayType(array) => Some(TypeDesc::Collection(Box::new(
                self.desc_from_type(&array.elem_type)?,
            ))),
            TsType::TsTypeOperator(operator) if operator.op == TsTypeOperatorOp::ReadOnly => {
                self.desc_from_type(&operator.type_ann)
            }
            TsType::TsParenthesizedType(paren) => self.desc_from_type(&paren.type_ann),
            TsType::TsUnionOrIntersectionType(TsUnionOrIntersectionType::TsUnionType(union)) => {
                let mut non_nullish = union.types.iter().filter(|member| !is_nullish(member));
                let first = non_nullish.next()?;
                if non_nullish.next().is_some() {
                    return None;
                }
                self.desc_from_type(first)
            }
            TsType::TsKeywordType(keyword) => Some(TypeDesc::Named(NamedType::new(
                keyword_name(keyword.kind),
                DeclKind::Primitive,
            ))),
            _ => None,
        }
    }

    /// Resolve an argument expression to a type description.
    pub fn desc_for_expr(&self, expr: &Expr) -> Option<TypeDesc> {
        match expr {
            Expr::Ident(ident) => {
                let binding = self.bindings.get(ident.sym.as_str())?;
                if let Some(annotation) = &binding.annotation {
                    return self.desc_from_type(annotation);
                }
                let ctor = binding.new_ctor.as_deref()?;
                Some(TypeDesc::Reference(self.resolve_type_name(ctor)))
            }
            Expr::New(new_expr) => {
                let Expr::Ident(callee) = &*new_expr.callee else {
                    return None;
                };
                Some(TypeDesc::Reference(
                    self.resolve_type_name(callee.sym.as_str()),
                ))
            }
            Expr::Call(call) => {
                let Callee::Expr(callee) = &call.callee else {
                    return None;
                };
                let Expr::Ident(ident) = &**callee else {
                    return None;
                };
                let return_type = self.returns.get(ident.sym.as_str())?;
                self.desc_from_type(return_type)
            }
            Expr::Member(member) => {
                let Expr::Ident(object) = &*member.obj else {
                    return None;
                };
                let name = object.sym.as_str();
                self.enums
                    .contains(name)
                    .then(|| TypeDesc::Named(NamedType::new(name, DeclKind::Enum)))
            }
            Expr::Paren(paren) => self.desc_for_expr(&paren.expr),
            Expr::TsNonNull(non_null) => self.desc_for_expr(&non_null.expr),
            Expr::TsAs(as_expr) => self.desc_from_type(&as_expr.type_ann),
            _ => None,
        }
    }

    /// The symbol an argument references, if it is a plain identifier naming
    /// a declared binding or import.
    pub fn referenced_symbol(&self, expr: &Expr) -> Option<String> {
        let Expr::Ident(ident) = expr else {
            return None;
        };
        let name = ident.sym.as_str();
        self.is_declared_value(name).then(|| name.to_string())
    }

    fn desc_for_name(&self, name: &str) -> TypeDesc {
        let named = self.resolve_type_name(name);
        match named.decl {
            // Object references model the pointer shape; imported names are
            // presumed nominal class-like types.
            DeclKind::Class | DeclKind::Imported => TypeDesc::Reference(named),
            _ => TypeDesc::Named(named),
        }
    }
}

fn is_nullish(ty: &TsType) -> bool {
    matches!(
        ty,
        TsType::TsKeywordType(keyword) if matches!(
            keyword.kind,
            TsKeywordTypeKind::TsNullKeyword | TsKeywordTypeKind::TsUndefinedKeyword
        )
    )
}

fn keyword_name(kind: TsKeywordTypeKind) -> &'static str {
    match kind {
        TsKeywordTypeKind::TsStringKeyword => "string",
        TsKeywordTypeKind::TsNumberKeyword => "number",
        TsKeywordTypeKind::TsBooleanKeyword => "boolean",
        TsKeywordTypeKind::TsBigIntKeyword => "bigint",
        TsKeywordTypeKind::TsSymbolKeyword => "symbol",
        TsKeywordTypeKind::TsObjectKeyword => "object",
        TsKeywordTypeKind::TsNullKeyword => "null",
        TsKeywordTypeKind::TsUndefinedKeyword => "undefined",
        _ => "unknown",
    }
}

struct Collector {
    table: SymbolTable,
}

impl Visit for Collector {
    fn visit_class_decl(&mut self, node: &ClassDecl) {
        let base = node.class.super_class.as_deref().and_then(|expr| {
            if let Expr::Ident(ident) = expr {
                Some(ident.sym.to_string())
            } else {
                None
            }
        });
        self.table.classes.insert(node.ident.sym.to_string(), base);
        node.visit_children_with(self);
    }

    fn visit_ts_interface_decl(&mut self, node: &TsInterfaceDecl) {
        self.table.interfaces.insert(node.id.sym.to_string());
        node.visit_children_with(self);
    }

    fn visit_ts_enum_decl(&mut self, node: &TsEnumDecl) {
        self.table.enums.insert(node.id.sym.to_string());
        node.visit_children_with(self);
    }

    fn visit_import_decl(&mut self, node: &ImportDecl) {
        for specifier in &node.specifiers {
            let local = match specifier {
                ImportSpecifier::Named(named) => &named.local,
                ImportSpecifier::Default(default) => &default.local,
                ImportSpecifier::Namespace(namespace) => &namespace.local,
            };
            self.table.imports.insert(local.sym.to_string());
        }
    }

    // Covers `var`/`let`/`const` declarators and function parameters alike.
    fn visit_binding_ident(&mut self, node: &BindingIdent) {
        let entry = self
            .table
            .bindings
            .entry(node.id.sym.to_string())
            .or_default();
        if let Some(annotation) = &node.type_ann {
            entry.annotation = Some(annotation.type_ann.clone());
        }
        node.visit_children_with(self);
    }

    fn visit_fn_decl(&mut self, node: &FnDecl) {
        if let Some(return_type) = &node.function.return_type {
            self.table
                .returns
                .insert(node.ident.sym.to_string(), return_type.type_ann.clone());
        }
        node.visit_children_with(self);
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        if let Pat::Ident(binding) = &node.name
            && binding.type_ann.is_none()
            && let Some(init) = &node.init
            && let Expr::New(new_expr) = &**init
            && let Expr::Ident(callee) = &*new_expr.callee
        {
            self.table
                .bindings
                .entry(binding.id.sym.to_string())
                .or_default()
                .new_ctor = Some(callee.sym.to_string());
        }
        node.visit_children_with(self);
    }
}
