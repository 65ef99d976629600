//! Interface storage: explicit members and the completed closure.

use iface_ir::Span;

use crate::{Idx, MethodId, TypeSet};

/// An embedded element, kept with the position it was embedded at so
/// inherited diagnostics point at the embedding site after sorting.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Embedded {
    pub ty: Idx,
    pub span: Span,
}

/// Completion state of an interface.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub enum Completion {
    /// Ingested, closure not computed yet.
    #[default]
    Unresolved,
    /// Completion is running further up the stack. Seen only through an
    /// embedding cycle; contributes nothing.
    InProgress,
    Complete(Closure),
}

/// The complete shape of an interface.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Closure {
    /// Every method the interface guarantees, canonically sorted, unique by
    /// [`MethodKey`](crate::MethodKey).
    pub methods: Vec<MethodId>,
    /// Every type the interface allows.
    pub types: TypeSet,
}

impl Closure {
    /// No methods, no type constraint.
    pub fn universe() -> Self {
        Closure::default()
    }

    /// Accepts every type.
    pub fn is_empty_interface(&self) -> bool {
        self.methods.is_empty() && self.types.is_all()
    }
}

/// Interface side-table entry.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct InterfaceData {
    /// Explicit methods, canonically sorted.
    pub methods: Vec<MethodId>,
    /// Embedded elements, canonically sorted.
    pub embeddeds: Vec<Embedded>,
    pub completion: Completion,
}

impl InterfaceData {
    pub fn closure(&self) -> Option<&Closure> {
        match &self.completion {
            Completion::Complete(closure) => Some(closure),
            Completion::Unresolved | Completion::InProgress => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.completion, Completion::Complete(_))
    }
}
