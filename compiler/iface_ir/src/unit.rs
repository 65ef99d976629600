//! Compilation unit identity.

use crate::Name;

/// Identity of a compilation unit (a package).
///
/// Unexported method names are scoped to the unit that declares them, so
/// every method carries the `UnitId` it came from. Two units are the same
/// unit iff their paths are the same interned name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(Name);

impl UnitId {
    /// Unit with the given (interned) import path.
    #[inline]
    pub const fn new(path: Name) -> Self {
        UnitId(path)
    }

    /// The unit's import path.
    #[inline]
    pub const fn path(self) -> Name {
        self.0
    }
}
