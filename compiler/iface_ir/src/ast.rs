//! Interface declaration trees.
//!
//! Parsing is not done here; a front end (or a test) builds these nodes and
//! hands an [`InterfaceDecl`] to the checker. The tree only carries what
//! ingestion reads: member names, member type expressions, and positions.
//!
//! # Legacy type lists
//!
//! A type list `type A, B` is represented as one [`Member`] per listed type,
//! all sharing the *same* [`Ident`] (same name, same span). Ingestion tells
//! separate lists apart by comparing those identifiers.

use crate::{Name, Span};

/// An identifier occurrence.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Ident {
    pub name: Name,
    pub span: Span,
}

impl Ident {
    pub const fn new(name: Name, span: Span) -> Self {
        Ident { name, span }
    }
}

/// `interface { ... }` literal.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct InterfaceDecl {
    pub members: Vec<Member>,
    /// Span of the whole literal.
    pub span: Span,
}

/// One line of an interface body.
///
/// `name: None` is an embedded element; `name: Some(_)` is a method
/// or, when the name is the type-list marker, a type-list entry.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Member {
    pub name: Option<Ident>,
    pub ty: TypeExpr,
}

impl Member {
    /// A method `name ty`.
    pub fn method(name: Ident, ty: TypeExpr) -> Self {
        Member {
            name: Some(name),
            ty,
        }
    }

    /// An embedded element.
    pub fn embedded(ty: TypeExpr) -> Self {
        Member { name: None, ty }
    }
}

/// A type expression with its position.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeExpr {
    pub kind: TypeExprKind,
    pub span: Span,
}

impl TypeExpr {
    pub fn new(kind: TypeExprKind, span: Span) -> Self {
        TypeExpr { kind, span }
    }

    /// A bare type name.
    pub fn name(name: Name, span: Span) -> Self {
        Self::new(TypeExprKind::Name(name), span)
    }

    /// `~inner`, spanning from the tilde to the end of `inner`.
    pub fn tilde(inner: TypeExpr, tilde_at: u32) -> Self {
        let span = Span::point(tilde_at).merge(inner.span);
        Self::new(TypeExprKind::Tilde(Box::new(inner)), span)
    }

    /// `lhs | rhs`.
    pub fn or(lhs: TypeExpr, rhs: TypeExpr) -> Self {
        let span = lhs.span.merge(rhs.span);
        Self::new(TypeExprKind::Or(Box::new(lhs), Box::new(rhs)), span)
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeExprKind {
    /// Reference to a declared type or type parameter.
    Name(Name),
    /// `[]elem`
    Slice(Box<TypeExpr>),
    /// `func[P C](params) results`
    Func(FuncTypeExpr),
    /// Nested interface literal.
    Interface(InterfaceDecl),
    /// `lhs | rhs`; left-associative chains nest on the left.
    Or(Box<TypeExpr>, Box<TypeExpr>),
    /// `~inner`
    Tilde(Box<TypeExpr>),
    /// Syntax the front end could not parse; already reported.
    Bad,
}

/// Signature part of a method or function type.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FuncTypeExpr {
    pub type_params: Vec<TypeParamDecl>,
    pub params: Vec<TypeExpr>,
    pub results: Vec<TypeExpr>,
    pub variadic: bool,
}

/// `P C` in a type parameter list.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeParamDecl {
    pub name: Ident,
    pub constraint: TypeExpr,
}
