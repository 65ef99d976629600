//! Type errors and internal invariant violations.

use iface_diagnostic::{Diagnostic, ErrorCode};
use iface_ir::Span;

use crate::Idx;

/// An internal invariant broken on a path with no diagnostics sink.
///
/// Returned by external queries. A correct program that passed checking
/// never produces one.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum InvariantViolation {
    /// Two methods occupy the same slot with different signatures.
    #[error("internal error: duplicate method {name} at {span}")]
    DuplicateMethod { name: String, span: Span },
    /// An interface operation was asked of a non-interface type.
    #[error("internal error: {idx:?} is not an interface")]
    NotAnInterface { idx: Idx },
}

/// A user-facing error found while checking interfaces.
///
/// Types are carried pre-formatted so the error can be rendered without
/// the pool.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TypeError {
    /// Method named `_`.
    BlankMethodName { compiler_messages: bool },
    /// Second legacy type list in one interface.
    MultipleTypeLists,
    /// Named member whose type is not a signature.
    NotAMethodSignature { ty: String },
    /// Method with its own type parameters.
    MethodTypeParams,
    /// Two methods in one slot. `other` is the first declaration.
    DuplicateMethod { name: String, other: Span },
    /// Non-interface embedded before generics.
    NotAnInterface { ty: String },
    /// Type parameter embedded before generics.
    EmbeddedTypeParam { ty: String },
    /// `~T` where `T` is not its own underlying type.
    InvalidTilde { ty: String, under: String },
    /// A union term whose type set intersects an earlier term's, such as `int | ~int`.
    OverlappingTerms { ty: String, other: String },
    UndeclaredName { name: String },
    /// `|` or `~` in an ordinary type position.
    TermOutsideInterface,
    /// Invariant violation hit by a delayed check.
    Internal(InvariantViolation),
}

impl TypeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TypeError::BlankMethodName { .. } => ErrorCode::E2001,
            TypeError::MultipleTypeLists => ErrorCode::E2002,
            TypeError::NotAMethodSignature { .. } => ErrorCode::E2003,
            TypeError::MethodTypeParams => ErrorCode::E2004,
            TypeError::DuplicateMethod { .. } => ErrorCode::E2005,
            TypeError::NotAnInterface { .. } => ErrorCode::E2006,
            TypeError::EmbeddedTypeParam { .. } => ErrorCode::E2007,
            TypeError::InvalidTilde { .. } => ErrorCode::E2008,
            TypeError::OverlappingTerms { .. } => ErrorCode::E2009,
            TypeError::UndeclaredName { .. } => ErrorCode::E2010,
            TypeError::TermOutsideInterface => ErrorCode::E2011,
            TypeError::Internal(_) => ErrorCode::E9001,
        }
    }

    pub fn message(&self) -> String {
        match self {
            TypeError::BlankMethodName {
                compiler_messages: true,
            } => "methods must have a unique non-blank name".to_string(),
            TypeError::BlankMethodName {
                compiler_messages: false,
            } => "invalid method name _".to_string(),
            TypeError::MultipleTypeLists => {
                "cannot have multiple type lists in an interface".to_string()
            }
            TypeError::NotAMethodSignature { ty } => format!("{ty} is not a method signature"),
            TypeError::MethodTypeParams => "methods cannot have type parameters".to_string(),
            TypeError::DuplicateMethod { name, .. } => format!("duplicate method {name}"),
            TypeError::NotAnInterface { ty } => format!("{ty} is not an interface"),
            TypeError::EmbeddedTypeParam { ty } => {
                format!("{ty} is a type parameter, not an interface")
            }
            TypeError::InvalidTilde { ty, under } => {
                format!("invalid use of ~ (underlying type of {ty} is {under})")
            }
            TypeError::OverlappingTerms { ty, other } => {
                format!("overlapping terms {ty} and {other}")
            }
            TypeError::UndeclaredName { name } => format!("undeclared name: {name}"),
            TypeError::TermOutsideInterface => {
                "cannot use a union or ~ term outside an interface element".to_string()
            }
            TypeError::Internal(violation) => violation.to_string(),
        }
    }

    /// Render as a diagnostic at `span`.
    pub fn to_diagnostic(&self, span: Span) -> Diagnostic {
        let message = self.message();
        let diag = Diagnostic::error(self.code()).with_label(span, message.clone());
        let diag = diag.with_message(message);
        match self {
            TypeError::DuplicateMethod { name, other } => {
                diag.with_secondary_label(*other, format!("other declaration of {name}"))
            }
            TypeError::Internal(_) => diag.with_note("this is a bug in the checker"),
            _ => diag,
        }
    }
}
