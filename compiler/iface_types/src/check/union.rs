//! Union embeddings: term flattening, union construction, and deferred
//! term validation.

use iface_ir::{Span, TypeExpr, TypeExprKind};
use iface_stack::ensure_sufficient_stack;

use super::Checker;
use crate::error::TypeError;
use crate::type_set::terms_overlap;
use crate::{Idx, Tag, Term};

/// One syntactic term of a union.
#[derive(Copy, Clone, Debug)]
pub(crate) struct TermExpr<'e> {
    pub tilde: bool,
    /// The term's type, without the `~`.
    pub expr: &'e TypeExpr,
    /// Span of the whole term, `~` included.
    pub span: Span,
}

impl<'e> TermExpr<'e> {
    fn from_expr(expr: &'e TypeExpr) -> Self {
        match &expr.kind {
            TypeExprKind::Tilde(inner) => TermExpr {
                tilde: true,
                expr: inner,
                span: expr.span,
            },
            _ => TermExpr {
                tilde: false,
                expr,
                span: expr.span,
            },
        }
    }

    /// A legacy type-list entry, which always means `~T`.
    pub(crate) fn approximate(expr: &'e TypeExpr) -> Self {
        TermExpr {
            tilde: true,
            expr,
            span: expr.span,
        }
    }
}

/// Split `A | B | ~C` into its terms, left to right.
pub(crate) fn flatten_union(expr: &TypeExpr) -> Vec<TermExpr<'_>> {
    let mut out = Vec::new();
    flatten_into(expr, &mut out);
    out
}

fn flatten_into<'e>(expr: &'e TypeExpr, out: &mut Vec<TermExpr<'e>>) {
    if let TypeExprKind::Or(lhs, rhs) = &expr.kind {
        ensure_sufficient_stack(|| flatten_into(lhs, out));
        flatten_into(rhs, out);
    } else {
        out.push(TermExpr::from_expr(expr));
    }
}

impl Checker {
    /// Build the type of an embedded element from its terms. A single exact
    /// term is the type itself; anything else is a union. A union with an
    /// unresolved term is invalid as a whole.
    pub(crate) fn parse_union(&mut self, terms: &[TermExpr<'_>]) -> Idx {
        if let [term] = terms {
            if !term.tilde {
                return self.typ(term.expr);
            }
        }

        let resolved: Vec<Term> = terms
            .iter()
            .map(|term| Term {
                tilde: term.tilde,
                ty: self.typ(term.expr),
            })
            .collect();
        if resolved.iter().any(|term| term.ty.is_invalid()) {
            return Idx::INVALID;
        }
        let spans: Vec<Span> = terms.iter().map(|term| term.span).collect();

        let union = self.pool.union_type(resolved.clone());
        self.later(move |check| check.validate_union(&resolved, &spans));
        union
    }

    /// Report `~T` where `T` is not its own underlying type, and terms that
    /// overlap an earlier term. Runs once the term types are resolved.
    fn validate_union(&mut self, terms: &[Term], spans: &[Span]) {
        for (i, (&term, &span)) in terms.iter().zip(spans).enumerate() {
            if term.tilde {
                let under = self.pool.under(term.ty);
                if !self.identical(term.ty, under) {
                    let err = TypeError::InvalidTilde {
                        ty: self.pool.format_type(term.ty),
                        under: self.pool.format_type(under),
                    };
                    self.report(&err, span);
                    continue;
                }
            }
            // Interface terms are not checked for overlap.
            if self.pool.tag(self.pool.under(term.ty)) == Tag::Interface {
                continue;
            }
            for &prev in &terms[..i] {
                let overlap = match terms_overlap(&mut self.pool, prev, term) {
                    Ok(overlap) => overlap,
                    Err(violation) => {
                        self.internal_error(violation, span);
                        false
                    }
                };
                if overlap {
                    let err = TypeError::OverlappingTerms {
                        ty: self.format_term(term),
                        other: self.format_term(prev),
                    };
                    self.report(&err, span);
                    break;
                }
            }
        }
    }

    fn format_term(&self, term: Term) -> String {
        let ty = self.pool.format_type(term.ty);
        if term.tilde {
            format!("~{ty}")
        } else {
            ty
        }
    }
}
