//! Methods and method identity.

use iface_ir::{Name, Span, UnitId};

use crate::Idx;

/// Handle to a method stored in the pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct MethodId(u32);

impl MethodId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A method declared in an interface or on a named type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Method {
    pub name: Name,
    /// Signature type (`Tag::Signature`).
    pub sig: Idx,
    /// Position of the method name at its declaration.
    pub span: Span,
    /// Unit the method was declared in.
    pub unit: UnitId,
    pub exported: bool,
}

impl Method {
    /// Identity slot of this method.
    ///
    /// Exported names share one slot across units; an unexported name is
    /// private to its declaring unit.
    #[inline]
    pub fn key(&self) -> MethodKey {
        MethodKey {
            name: self.name,
            unit: if self.exported { None } else { Some(self.unit) },
        }
    }
}

/// Method slot key: the name, plus the owning unit for unexported names.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MethodKey {
    pub name: Name,
    pub unit: Option<UnitId>,
}

impl MethodKey {
    /// Key for looking up `name` as seen from `unit`.
    pub fn lookup(name: Name, name_str: &str, unit: UnitId) -> Self {
        MethodKey {
            name,
            unit: if is_exported(name_str) {
                None
            } else {
                Some(unit)
            },
        }
    }
}

/// A name is exported iff it starts with an upper-case letter.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}
