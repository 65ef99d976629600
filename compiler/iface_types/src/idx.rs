//! Type index handle.
//!
//! Every type lives in the [`Pool`](crate::Pool) and is referred to by a
//! 32-bit `Idx`. Basic types have fixed indices so they can be named
//! without a pool.

use std::fmt;

/// A 32-bit index into the type pool.
///
/// Index equality is type *identity* only for basic, named, and type
/// parameter types. Composite types are compared structurally with
/// [`identical`](crate::identical).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Basic types (indices 0-7) ===

    /// The invalid type: placeholder for anything that failed to resolve.
    /// Errors about it have already been reported.
    pub const INVALID: Self = Self(0);
    pub const BOOL: Self = Self(1);
    pub const INT: Self = Self(2);
    pub const INT64: Self = Self(3);
    pub const FLOAT64: Self = Self(4);
    pub const STRING: Self = Self(5);
    pub const BYTE: Self = Self(6);
    pub const RUNE: Self = Self(7);

    /// Number of pre-allocated basic types.
    pub const BASIC_COUNT: u32 = 8;

    /// Sentinel for "not set yet" (e.g. a named type's underlying type
    /// before its declaration is resolved).
    pub const NONE: Self = Self(u32::MAX);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_basic(self) -> bool {
        self.0 < Self::BASIC_COUNT
    }

    #[inline]
    pub const fn is_invalid(self) -> bool {
        self.0 == Self::INVALID.0
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Name of a basic type, `None` for everything else.
    #[inline]
    pub const fn basic_name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("invalid type"),
            1 => Some("bool"),
            2 => Some("int"),
            3 => Some("int64"),
            4 => Some("float64"),
            5 => Some("string"),
            6 => Some("byte"),
            7 => Some("rune"),
            _ => None,
        }
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "Idx::NONE")
        } else if let Some(name) = self.basic_name() {
            write!(f, "Idx({name})")
        } else {
            write!(f, "Idx({})", self.0)
        }
    }
}
