//! Interface declaration ingestion.

use iface_ir::{Ident, InterfaceDecl};

use super::union::{flatten_union, TermExpr};
use super::Checker;
use crate::error::TypeError;
use crate::interface::{Closure, Completion, Embedded};
use crate::order::{sort_embeddeds, sort_methods};
use crate::Idx;

/// Member name that introduces a legacy type list.
const TYPE_LIST_MARKER: &str = "type";

impl Checker {
    /// Ingest an interface literal.
    ///
    /// `def` is the named type being declared with this literal as its
    /// right-hand side; it becomes the receiver of the methods.
    #[tracing::instrument(level = "debug", skip_all, fields(members = decl.members.len()))]
    pub fn interface_type(&mut self, decl: &InterfaceDecl, def: Option<Idx>) -> Idx {
        // Allocated first so methods can name it as their receiver.
        let ityp = self.pool.interface_type(Vec::new(), Vec::new());

        let mut methods = Vec::new();
        let mut embeddeds = Vec::new();
        let mut type_list: Vec<TermExpr<'_>> = Vec::new();
        let mut type_list_name: Option<Ident> = None;

        for member in &decl.members {
            let Some(ident) = member.name else {
                let terms = flatten_union(&member.ty);
                let ty = self.parse_union(&terms);
                embeddeds.push(Embedded {
                    ty,
                    span: member.ty.span,
                });
                continue;
            };

            let name = self.pool.name_str(ident.name);
            if name == "_" {
                let err = TypeError::BlankMethodName {
                    compiler_messages: self.config.compiler_error_messages,
                };
                self.report(&err, ident.span);
                continue;
            }

            if name == TYPE_LIST_MARKER {
                // Entries of one list share their identifier.
                if type_list_name.is_some_and(|prev| prev != ident) {
                    self.report(&TypeError::MultipleTypeLists, ident.span);
                }
                type_list_name = Some(ident);
                type_list.push(TermExpr::approximate(&member.ty));
                continue;
            }

            let typ = self.typ(&member.ty);
            let Some(sig) = self.pool.signature(typ) else {
                if !typ.is_invalid() {
                    let err = TypeError::NotAMethodSignature {
                        ty: self.pool.format_type(typ),
                    };
                    self.report(&err, member.ty.span);
                }
                continue;
            };
            if !sig.type_params.is_empty() && !self.config.accept_method_type_params {
                self.report(&TypeError::MethodTypeParams, member.ty.span);
            }

            self.pool.set_receiver(typ, def.unwrap_or(ityp));
            let method = self.pool.new_method(ident.name, typ, ident.span, self.unit);
            self.defs.insert(ident.span, method);
            methods.push(method);
        }

        if let Some(first) = type_list.first() {
            let span = first.span;
            let ty = self.parse_union(&type_list);
            embeddeds.push(Embedded { ty, span });
        }

        if methods.is_empty() && embeddeds.is_empty() {
            self.pool
                .set_completion(ityp, Completion::Complete(Closure::universe()));
            return ityp;
        }

        sort_methods(&self.pool, &mut methods);
        sort_embeddeds(&self.pool, &mut embeddeds);
        self.pool.set_members(ityp, methods, embeddeds);

        let span = decl.span;
        self.later(move |check| check.complete_interface(span, ityp));
        ityp
    }
}
