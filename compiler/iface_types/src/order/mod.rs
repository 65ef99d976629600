//! Canonical ordering of methods, embedded elements, and union terms.
//!
//! Objects order exported names first, then by name; unexported names
//! with equal text are ordered by their unit's path. Orders compare
//! strings, never interned indices, so the result does not depend on
//! interning order.

use std::cmp::Ordering;

use iface_ir::UnitId;

use crate::interface::Embedded;
use crate::type_set::Term;
use crate::{Idx, MethodId, Pool};

/// Sort key of a declared object (method or named type).
#[derive(Copy, Clone, Debug)]
pub(crate) struct ObjectKey {
    name: &'static str,
    exported: bool,
    unit: &'static str,
}

impl ObjectKey {
    fn new(pool: &Pool, name: &'static str, exported: bool, unit: UnitId) -> Self {
        ObjectKey {
            name,
            exported,
            unit: pool.name_str(unit.path()),
        }
    }

    /// Key of a method named `name` in slot `unit` (see
    /// [`MethodKey`](crate::MethodKey)).
    pub(crate) fn for_lookup(pool: &Pool, name: &'static str, unit: Option<UnitId>) -> Self {
        ObjectKey {
            name,
            exported: unit.is_none(),
            unit: unit.map_or("", |unit| pool.name_str(unit.path())),
        }
    }

    pub(crate) fn of_method(pool: &Pool, id: MethodId) -> Self {
        let method = pool.method(id);
        Self::new(pool, pool.name_str(method.name), method.exported, method.unit)
    }

    /// Key of a named type, `None` for every other type.
    pub(crate) fn of_type(pool: &Pool, ty: Idx) -> Option<Self> {
        let named = pool.named(ty)?;
        let name = pool.name_str(named.name);
        Some(Self::new(pool, name, crate::method::is_exported(name), named.unit))
    }
}

impl Ord for ObjectKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .exported
            .cmp(&self.exported)
            .then_with(|| self.name.cmp(other.name))
            .then_with(|| {
                if self.exported {
                    Ordering::Equal
                } else {
                    self.unit.cmp(other.unit)
                }
            })
    }
}

impl PartialOrd for ObjectKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ObjectKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ObjectKey {}

/// Canonical order of two methods.
pub fn cmp_methods(pool: &Pool, a: MethodId, b: MethodId) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    ObjectKey::of_method(pool, a).cmp(&ObjectKey::of_method(pool, b))
}

/// Sort methods canonically. Stable, so among equal keys the first
/// declared stays first.
pub fn sort_methods(pool: &Pool, methods: &mut [MethodId]) {
    methods.sort_by(|&a, &b| cmp_methods(pool, a, b));
}

/// Whether `methods` is in canonical order.
pub fn methods_sorted(pool: &Pool, methods: &[MethodId]) -> bool {
    methods
        .windows(2)
        .all(|w| cmp_methods(pool, w[0], w[1]) != Ordering::Greater)
}

/// Debug-build check that a method list is canonically sorted.
#[inline]
pub fn assert_sorted_methods(pool: &Pool, methods: &[MethodId]) {
    debug_assert!(
        methods_sorted(pool, methods),
        "internal error: method list is not sorted"
    );
}

/// Sort embedded elements by the identity of their named type. Unnamed
/// elements sort first and keep their relative order.
pub fn sort_embeddeds(pool: &Pool, embeddeds: &mut [Embedded]) {
    embeddeds.sort_by(|a, b| ObjectKey::of_type(pool, a.ty).cmp(&ObjectKey::of_type(pool, b.ty)));
}

/// Sort key for union terms: unkeyed composites, then basic types by
/// index, then named types.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug)]
enum TermKey {
    Unkeyed,
    Basic(u32),
    Named(ObjectKey),
}

fn term_key(pool: &Pool, ty: Idx) -> TermKey {
    if ty.is_basic() {
        TermKey::Basic(ty.raw())
    } else {
        ObjectKey::of_type(pool, ty).map_or(TermKey::Unkeyed, TermKey::Named)
    }
}

/// Sort terms canonically. Stable; ties keep approximate terms ahead of
/// exact ones.
pub(crate) fn sort_terms(pool: &Pool, terms: &mut [Term]) {
    terms.sort_by(|a, b| {
        term_key(pool, a.ty)
            .cmp(&term_key(pool, b.ty))
            .then_with(|| b.tilde.cmp(&a.tilde))
    });
}
