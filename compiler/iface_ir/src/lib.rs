//! Shared input types for interface resolution.
//!
//! - Spans for source locations
//! - Names for interned identifiers
//! - Unit identity for scoping unexported names
//! - The interface declaration tree handed to ingestion
//!
//! Every type is `Clone + Eq + Hash + Debug`, and the small handles
//! (`Span`, `Name`, `UnitId`) are `Copy`.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod interner;
mod name;
mod span;
mod unit;

pub use ast::{FuncTypeExpr, Ident, InterfaceDecl, Member, TypeExpr, TypeExprKind, TypeParamDecl};
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
pub use span::Span;
pub use unit::UnitId;
