//! Type kind tag for tag-driven dispatch.
//!
//! Each pool item pairs a `Tag` with a `u32` payload. For basic types the
//! payload is unused; for `Slice` it is the element `Idx`; for every other
//! kind it indexes the kind's side table in the pool.

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Tag {
    // === Basic (payload unused) ===
    Invalid = 0,
    Bool = 1,
    Int = 2,
    Int64 = 3,
    Float64 = 4,
    String = 5,
    Byte = 6,
    Rune = 7,

    // === Composite ===
    /// `[]T`; payload is the element `Idx`.
    Slice = 16,
    /// Function signature; payload indexes `signatures`.
    Signature = 17,
    /// Interface; payload indexes `interfaces`.
    Interface = 18,
    /// Union of terms; payload indexes `unions`.
    Union = 19,

    // === Declared ===
    /// Named (defined) type; payload indexes `named`.
    Named = 32,
    /// Type parameter; payload indexes `type_params`.
    TypeParam = 33,
}

impl Tag {
    /// Basic types are their own underlying type and compare by index.
    #[inline]
    pub const fn is_basic(self) -> bool {
        (self as u8) < 16
    }
}
