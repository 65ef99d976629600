//! Read-only queries over completed interfaces.
//!
//! Every query completes the interface on demand with no diagnostics sink.
//! A conflict found that way is an [`InvariantViolation`]; interfaces that
//! went through the checker are already complete and never fail.

use iface_ir::{Name, Span, UnitId};

use crate::complete::{complete_interface, Sink};
use crate::interface::Closure;
use crate::order::{assert_sorted_methods, ObjectKey};
use crate::{identical, Idx, InvariantViolation, MethodId, MethodKey, Pool, Tag, TypeSet};

/// Complete `iface` (or the interface underlying it) and return its
/// closure.
pub fn complete(pool: &mut Pool, iface: Idx) -> Result<&Closure, InvariantViolation> {
    let under = pool.under(iface);
    complete_interface(pool, &mut Sink::Absent, Span::DUMMY, under)?;
    pool.closure(under)
        .ok_or(InvariantViolation::NotAnInterface { idx: iface })
}

/// Every method the interface guarantees, canonically sorted.
pub fn method_set(pool: &mut Pool, iface: Idx) -> Result<&[MethodId], InvariantViolation> {
    complete(pool, iface).map(|closure| closure.methods.as_slice())
}

/// Every type the interface allows.
pub fn type_set(pool: &mut Pool, iface: Idx) -> Result<&TypeSet, InvariantViolation> {
    complete(pool, iface).map(|closure| &closure.types)
}

/// Whether the interface accepts every type.
pub fn is_empty_interface(pool: &mut Pool, iface: Idx) -> Result<bool, InvariantViolation> {
    complete(pool, iface).map(Closure::is_empty_interface)
}

/// Find the method `name` in the interface's closure, as seen from `unit`.
pub fn lookup_method(
    pool: &mut Pool,
    iface: Idx,
    unit: UnitId,
    name: Name,
) -> Result<Option<MethodId>, InvariantViolation> {
    complete(pool, iface)?;
    let pool = &*pool;
    let methods = pool.closure(pool.under(iface)).map_or(&[][..], |c| c.methods.as_slice());
    assert_sorted_methods(pool, methods);

    let key = MethodKey::lookup(name, pool.name_str(name), unit);
    let target = ObjectKey::for_lookup(pool, pool.name_str(name), key.unit);
    let found = methods
        .binary_search_by(|&m| ObjectKey::of_method(pool, m).cmp(&target))
        .ok()
        .map(|i| methods[i]);
    Ok(found.filter(|&m| pool.method(m).key() == key))
}

/// Why a type does not implement an interface.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MissingMethod {
    /// The interface method that is not satisfied.
    pub method: MethodId,
    /// The type has a method in that slot, with a different signature.
    pub wrong_type: bool,
}

/// Methods of `ty`: the closure of an interface, the declared methods of
/// a named type, nothing for other types.
fn methods_of(pool: &mut Pool, ty: Idx) -> Result<Vec<MethodId>, InvariantViolation> {
    let under = pool.under(ty);
    if pool.tag(under) == Tag::Interface {
        return complete(pool, under).map(|closure| closure.methods.clone());
    }
    Ok(pool.named(ty).map(|named| named.methods.clone()).unwrap_or_default())
}

/// The first interface method `ty` does not have, if any.
pub fn missing_method(pool: &mut Pool, ty: Idx, iface: Idx) -> Result<Option<MissingMethod>, InvariantViolation> {
    let wanted = complete(pool, iface)?.methods.clone();
    if wanted.is_empty() {
        return Ok(None);
    }
    let have = methods_of(pool, ty)?;

    for m in wanted {
        let key = pool.method(m).key();
        let Some(found) = have.iter().copied().find(|&h| pool.method(h).key() == key) else {
            return Ok(Some(MissingMethod {
                method: m,
                wrong_type: false,
            }));
        };
        let (want_sig, have_sig) = (pool.method(m).sig, pool.method(found).sig);
        if !identical(pool, want_sig, have_sig)? {
            return Ok(Some(MissingMethod {
                method: m,
                wrong_type: true,
            }));
        }
    }
    Ok(None)
}

/// Whether `ty` has every method of `iface` and is in its type set.
///
/// An interface type satisfies the type set when its own type set is a
/// subset of it.
pub fn implements(pool: &mut Pool, ty: Idx, iface: Idx) -> Result<bool, InvariantViolation> {
    if missing_method(pool, ty, iface)?.is_some() {
        return Ok(false);
    }
    let wanted = complete(pool, iface)?.types.clone();
    if wanted.is_all() {
        return Ok(true);
    }
    let under = pool.under(ty);
    if pool.tag(under) == Tag::Interface {
        let have = complete(pool, under)?.types.clone();
        return have.is_subset_of(&wanted, pool);
    }
    wanted.includes(ty, pool)
}

/// Whether two interfaces have the same closure.
pub fn identical_interfaces(pool: &mut Pool, x: Idx, y: Idx) -> Result<bool, InvariantViolation> {
    let (ux, uy) = (pool.under(x), pool.under(y));
    for (idx, under) in [(x, ux), (y, uy)] {
        if pool.tag(under) != Tag::Interface {
            return Err(InvariantViolation::NotAnInterface { idx });
        }
    }
    identical(pool, ux, uy)
}
