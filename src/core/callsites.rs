//! Finds construction call-sites of the target constructor.
//!
//! This is the only module that knows AST node shapes. Both `new
//! TreeItem(...)` and the bare call form `TreeItem(...)` are recognized; the
//! callee must be a plain identifier equal to the configured constructor
//! name. Each discovered site carries its full span and, per argument, the
//! argument's span plus whatever the symbol table could resolve about it.

use swc_common::{Span, Spanned};
use swc_ecma_ast::{CallExpr, Callee, Expr, ExprOrSpread, Module, NewExpr};
use swc_ecma_visit::{Visit, VisitWith};

use super::symbols::SymbolTable;
use super::types::TypeDesc;

/// One argument of a construction call-site.
#[derive(Debug, Clone)]
pub struct CallArg {
    pub span: Span,
    /// Declared type, when the symbol table could resolve one.
    pub desc: Option<TypeDesc>,
    /// Referenced symbol name, when the argument is a plain identifier
    /// naming a declared binding.
    pub symbol: Option<String>,
}

/// One occurrence of the target construction form.
#[derive(Debug, Clone)]
pub struct CallSite {
    /// Span of the whole construction expression, `new` through `)`.
    pub span: Span,
    pub args: Vec<CallArg>,
}

pub struct CallSiteFinder<'a> {
    constructor: &'a str,
    symbols: &'a SymbolTable,
    sites: Vec<CallSite>,
}

impl<'a> CallSiteFinder<'a> {
    pub fn new(constructor: &'a str, symbols: &'a SymbolTable) -> Self {
        Self {
            constructor,
            symbols,
            sites: Vec::new(),
        }
    }

    /// Collect call-sites in source order.
    pub fn find(mut self, module: &Module) -> Vec<CallSite> {
        module.visit_with(&mut self);
        self.sites
    }

    fn record(&mut self, span: Span, args: &[ExprOrSpread]) {
        let args = args
            .iter()
            .map(|arg| {
                if arg.spread.is_some() {
                    // A spread is not a single classifiable argument.
                    return CallArg {
                        span: arg.span(),
                        desc: None,
                        symbol: None,
                    };
                }
                CallArg {
                    span: arg.expr.span(),
                    desc: self.symbols.desc_for_expr(&arg.expr),
                    symbol: self.symbols.referenced_symbol(&arg.expr),
                }
            })
            .collect();
        self.sites.push(CallSite { span, args });
    }

    fn callee_matches(&self, expr: &Expr) -> bool {
        matches!(expr, Expr::Ident(ident) if ident.sym.as_str() == self.constructor)
    }
}

impl Visit for CallSiteFinder<'_> {
    fn visit_new_expr(&mut self, node: &NewExpr) {
        if self.callee_matches(&node.callee) {
            let args = node.args.as_deref().unwrap_or(&[]);
            self.record(node.span, args);
        }
        node.visit_children_with(self);
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Callee::Expr(expr) = &node.callee
            && self.callee_matches(expr)
        {
            self.record(node.span, &node.args);
        }
        node.visit_children_with(self);
    }
}
