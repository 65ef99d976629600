//! Compact type item storage.

use crate::Tag;

/// A single type item in the pool.
///
/// - `tag`: the type kind (see [`Tag`])
/// - `data`: meaning depends on tag (unused, child index, or side-table index)
#[derive(Copy, Clone, Debug)]
#[repr(C)]
pub struct Item {
    pub tag: Tag,
    pub data: u32,
}

impl Item {
    #[inline]
    pub const fn new(tag: Tag, data: u32) -> Self {
        Self { tag, data }
    }

    #[inline]
    pub const fn basic(tag: Tag) -> Self {
        Self { tag, data: 0 }
    }
}
