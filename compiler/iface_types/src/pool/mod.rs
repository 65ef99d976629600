//! Type pool: flat storage for every type the checker creates.
//!
//! Types are `Item`s (tag + data) addressed by [`Idx`]. Kinds with more
//! than one field keep their payload in a per-kind side table; the item's
//! `data` indexes that table.
//!
//! Composite types are not hash-consed. Two structurally equal slices are
//! two items; [`identical`](crate::identical) compares them.

mod construct;
mod format;

use iface_ir::{Name, SharedInterner, UnitId};

use crate::interface::{Closure, Completion, Embedded, InterfaceData};
use crate::item::Item;
use crate::type_set::Term;
use crate::{Idx, Method, MethodId, Tag};

/// Signature side-table entry.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SignatureData {
    /// Synthetic receiver for interface methods: the enclosing named type,
    /// or the interface itself. Ignored by identity.
    pub recv: Option<Idx>,
    /// Method type parameters (`Tag::TypeParam`).
    pub type_params: Vec<Idx>,
    pub params: Vec<Idx>,
    pub results: Vec<Idx>,
    pub variadic: bool,
}

/// Named type side-table entry.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NamedData {
    pub name: Name,
    pub unit: UnitId,
    /// `Idx::NONE` until the declaration is resolved.
    pub underlying: Idx,
    /// Methods declared on the type, in declaration order.
    pub methods: Vec<MethodId>,
}

/// Type parameter side-table entry.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeParamData {
    pub name: Name,
    pub index: u32,
    /// Constraint type; `Idx::INVALID` while it is being resolved.
    pub bound: Idx,
}

/// Flat type storage.
#[derive(Clone, Debug)]
pub struct Pool {
    interner: SharedInterner,
    items: Vec<Item>,
    signatures: Vec<SignatureData>,
    interfaces: Vec<InterfaceData>,
    unions: Vec<Vec<Term>>,
    named: Vec<NamedData>,
    type_params: Vec<TypeParamData>,
    methods: Vec<Method>,
}

const BASIC_TAGS: [Tag; Idx::BASIC_COUNT as usize] = [
    Tag::Invalid,
    Tag::Bool,
    Tag::Int,
    Tag::Int64,
    Tag::Float64,
    Tag::String,
    Tag::Byte,
    Tag::Rune,
];

impl Pool {
    /// Create a pool with the basic types at their fixed indices.
    pub fn new(interner: SharedInterner) -> Self {
        let mut items = Vec::with_capacity(64);
        items.extend(BASIC_TAGS.iter().map(|&tag| Item::basic(tag)));
        debug_assert_eq!(items[Idx::STRING.raw() as usize].tag, Tag::String);
        Pool {
            interner,
            items,
            signatures: Vec::new(),
            interfaces: Vec::new(),
            unions: Vec::new(),
            named: Vec::new(),
            type_params: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// Text of an interned name.
    #[inline]
    pub fn name_str(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    /// Number of types in the pool, basic types included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never true: basic types are always present.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // === Item access ===

    #[inline]
    pub fn tag(&self, idx: Idx) -> Tag {
        self.item(idx).map_or(Tag::Invalid, |item| item.tag)
    }

    #[inline]
    fn item(&self, idx: Idx) -> Option<Item> {
        self.items.get(idx.raw() as usize).copied()
    }

    /// Side-table index of `idx` if it has tag `tag`.
    #[inline]
    fn data_of(&self, idx: Idx, tag: Tag) -> Option<usize> {
        self.item(idx)
            .filter(|item| item.tag == tag)
            .map(|item| item.data as usize)
    }

    fn push(&mut self, item: Item) -> Idx {
        let raw = u32::try_from(self.items.len()).unwrap_or(u32::MAX - 1);
        self.items.push(item);
        Idx::from_raw(raw)
    }

    // === Underlying types ===

    /// Underlying type: a named type's resolved right-hand side, the type
    /// itself for everything else.
    ///
    /// A named type whose underlying type is unset or cyclic yields
    /// `Idx::INVALID`.
    pub fn under(&self, idx: Idx) -> Idx {
        let mut cur = idx;
        // Each hop moves to a different named type; more hops than named
        // types means a cycle.
        for _ in 0..=self.named.len() {
            match self.named(cur) {
                Some(named) if named.underlying.is_none() => return Idx::INVALID,
                Some(named) => cur = named.underlying,
                None => return cur,
            }
        }
        Idx::INVALID
    }

    // === Side tables ===

    pub fn slice_elem(&self, idx: Idx) -> Option<Idx> {
        self.data_of(idx, Tag::Slice)
            .and_then(|raw| u32::try_from(raw).ok())
            .map(Idx::from_raw)
    }

    pub fn signature(&self, idx: Idx) -> Option<&SignatureData> {
        self.data_of(idx, Tag::Signature)
            .and_then(|i| self.signatures.get(i))
    }

    pub fn interface(&self, idx: Idx) -> Option<&InterfaceData> {
        self.data_of(idx, Tag::Interface)
            .and_then(|i| self.interfaces.get(i))
    }

    fn interface_mut(&mut self, idx: Idx) -> Option<&mut InterfaceData> {
        self.data_of(idx, Tag::Interface)
            .and_then(|i| self.interfaces.get_mut(i))
    }

    /// Completed closure of an interface, `None` if `idx` is not an
    /// interface or is not complete.
    pub fn closure(&self, idx: Idx) -> Option<&Closure> {
        self.interface(idx).and_then(InterfaceData::closure)
    }

    pub fn union_terms(&self, idx: Idx) -> Option<&[Term]> {
        self.data_of(idx, Tag::Union)
            .and_then(|i| self.unions.get(i))
            .map(Vec::as_slice)
    }

    pub fn named(&self, idx: Idx) -> Option<&NamedData> {
        self.data_of(idx, Tag::Named).and_then(|i| self.named.get(i))
    }

    fn named_mut(&mut self, idx: Idx) -> Option<&mut NamedData> {
        self.data_of(idx, Tag::Named)
            .and_then(|i| self.named.get_mut(i))
    }

    pub fn type_param(&self, idx: Idx) -> Option<&TypeParamData> {
        self.data_of(idx, Tag::TypeParam)
            .and_then(|i| self.type_params.get(i))
    }

    /// Method by id. Ids are only minted by this pool.
    #[inline]
    pub fn method(&self, id: MethodId) -> &Method {
        &self.methods[id.raw() as usize]
    }

    // === Completion state ===

    pub(crate) fn set_completion(&mut self, idx: Idx, completion: Completion) {
        if let Some(iface) = self.interface_mut(idx) {
            iface.completion = completion;
        }
    }

    pub(crate) fn set_members(&mut self, idx: Idx, methods: Vec<MethodId>, embeddeds: Vec<Embedded>) {
        if let Some(iface) = self.interface_mut(idx) {
            iface.methods = methods;
            iface.embeddeds = embeddeds;
        }
    }
}

#[cfg(test)]
mod tests;
