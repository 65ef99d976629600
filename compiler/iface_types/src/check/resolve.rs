//! Type expression resolution and declarations.

use iface_ir::{FuncTypeExpr, Ident, InterfaceDecl, Member, Name, TypeExpr, TypeExprKind};
use rustc_hash::FxHashMap;

use super::Checker;
use crate::error::TypeError;
use crate::{Idx, MethodId, SignatureData};

impl Checker {
    // === Scopes ===

    /// Bind `name` to `ty` in the innermost scope.
    pub fn declare(&mut self, name: Name, ty: Idx) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, ty);
        }
    }

    pub fn lookup(&self, name: Name) -> Option<Idx> {
        self.scopes.iter().rev().find_map(|scope| scope.get(&name).copied())
    }

    // === Declarations ===

    /// Declare a named type without resolving its right-hand side, so
    /// later declarations may refer to it.
    pub fn declare_type(&mut self, name: Ident) -> Idx {
        let named = self.pool.named_type(name.name, self.unit);
        self.declare(name.name, named);
        named
    }

    /// Resolve the right-hand side of a declared named type. Interface
    /// methods get the named type as receiver.
    pub fn define_type(&mut self, named: Idx, rhs: &TypeExpr) {
        let ty = self.typ_with_def(rhs, Some(named));
        self.pool.set_underlying(named, ty);
    }

    /// `type name rhs`.
    #[tracing::instrument(level = "debug", skip_all, fields(name = ?name.name))]
    pub fn type_decl(&mut self, name: Ident, rhs: &TypeExpr) -> Idx {
        let named = self.declare_type(name);
        self.define_type(named, rhs);
        named
    }

    /// `func (recv) name sig`: a method declared on a named type.
    pub fn method_decl(&mut self, recv: Idx, name: Ident, sig: &FuncTypeExpr) -> MethodId {
        let ty = self.func_type(sig);
        self.pool.set_receiver(ty, recv);
        let method = self.pool.new_method(name.name, ty, name.span, self.unit);
        self.pool.add_named_method(recv, method);
        self.defs.insert(name.span, method);
        method
    }

    // === Type expressions ===

    /// Resolve a type expression.
    pub fn typ(&mut self, expr: &TypeExpr) -> Idx {
        self.typ_with_def(expr, None)
    }

    /// Resolve a type expression that is the right-hand side of the named
    /// type `def`, if any.
    pub(crate) fn typ_with_def(&mut self, expr: &TypeExpr, def: Option<Idx>) -> Idx {
        match &expr.kind {
            TypeExprKind::Name(name) => {
                if let Some(ty) = self.lookup(*name) {
                    return ty;
                }
                let name = self.pool.name_str(*name).to_string();
                self.report(&TypeError::UndeclaredName { name }, expr.span);
                Idx::INVALID
            }
            TypeExprKind::Slice(elem) => {
                let elem = self.typ(elem);
                self.pool.slice(elem)
            }
            TypeExprKind::Func(func) => self.func_type(func),
            TypeExprKind::Interface(decl) => self.interface_type(decl, def),
            TypeExprKind::Or(..) | TypeExprKind::Tilde(_) => {
                self.report(&TypeError::TermOutsideInterface, expr.span);
                Idx::INVALID
            }
            TypeExprKind::Bad => Idx::INVALID,
        }
    }

    /// Resolve a signature. Type parameters are in scope for their own
    /// constraints and for the parameter and result types.
    pub(crate) fn func_type(&mut self, func: &FuncTypeExpr) -> Idx {
        let scoped = !func.type_params.is_empty();
        if scoped {
            self.scopes.push(FxHashMap::default());
        }

        let mut type_params = Vec::with_capacity(func.type_params.len());
        for (i, decl) in func.type_params.iter().enumerate() {
            let index = u32::try_from(i).unwrap_or(u32::MAX);
            let param = self.pool.type_param_type(decl.name.name, index);
            self.declare(decl.name.name, param);
            type_params.push(param);
        }
        for (&param, decl) in type_params.iter().zip(&func.type_params) {
            let bound = self.constraint(&decl.constraint);
            self.pool.set_bound(param, bound);
        }

        let mut params: Vec<Idx> = func.params.iter().map(|p| self.typ(p)).collect();
        if func.variadic {
            if let Some(last) = params.last_mut() {
                *last = self.pool.slice(*last);
            }
        }
        let results = func.results.iter().map(|r| self.typ(r)).collect();

        if scoped {
            self.scopes.pop();
        }
        self.pool.signature_type(SignatureData {
            recv: None,
            type_params,
            params,
            results,
            variadic: func.variadic,
        })
    }

    /// A type parameter constraint. A bare union or `~T` is shorthand for
    /// an interface embedding it.
    fn constraint(&mut self, expr: &TypeExpr) -> Idx {
        match expr.kind {
            TypeExprKind::Or(..) | TypeExprKind::Tilde(_) => {
                let decl = InterfaceDecl {
                    members: vec![Member::embedded(expr.clone())],
                    span: expr.span,
                };
                self.interface_type(&decl, None)
            }
            _ => self.typ(expr),
        }
    }
}
