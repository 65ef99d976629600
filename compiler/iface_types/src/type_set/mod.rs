//! Type-term sets.
//!
//! A type set is either unconstrained (every type) or a finite list of
//! terms. An empty term list is the unsatisfiable set; intersecting
//! disjoint sets produces it and is not an error.
//!
//! Term lists are normalized: no term covers another, approximate terms
//! are stored as `~under(T)`, and terms are canonically ordered.

use smallvec::SmallVec;

use crate::order::sort_terms;
use crate::{identical, Idx, InvariantViolation, Pool};

/// A type term: `T` (exactly `T`) or `~T` (every type whose underlying
/// type is `under(T)`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Term {
    pub tilde: bool,
    pub ty: Idx,
}

impl Term {
    pub const fn exact(ty: Idx) -> Self {
        Term { tilde: false, ty }
    }

    pub const fn approx(ty: Idx) -> Self {
        Term { tilde: true, ty }
    }
}

/// Whether every type in `b` is in `a`.
fn covers(pool: &mut Pool, a: Term, b: Term) -> Result<bool, InvariantViolation> {
    if a.tilde {
        let (ua, ub) = (pool.under(a.ty), pool.under(b.ty));
        identical(pool, ua, ub)
    } else if b.tilde {
        Ok(false)
    } else {
        identical(pool, a.ty, b.ty)
    }
}

/// Intersection of two terms, `None` when disjoint.
fn intersect_terms(pool: &mut Pool, x: Term, y: Term) -> Result<Option<Term>, InvariantViolation> {
    let (ux, uy) = (pool.under(x.ty), pool.under(y.ty));
    let keep = match (x.tilde, y.tilde) {
        (true, true) => identical(pool, ux, uy)?.then_some(Term::approx(ux)),
        (true, false) => identical(pool, uy, ux)?.then_some(y),
        (false, true) => identical(pool, ux, uy)?.then_some(x),
        (false, false) => identical(pool, x.ty, y.ty)?.then_some(x),
    };
    Ok(keep)
}

/// Whether two terms share a type.
pub(crate) fn terms_overlap(pool: &mut Pool, x: Term, y: Term) -> Result<bool, InvariantViolation> {
    intersect_terms(pool, x, y).map(|term| term.is_some())
}

/// The set of types an interface allows.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum TypeSet {
    /// No constraint.
    #[default]
    All,
    /// Exactly the union of these terms. Empty means no type satisfies it.
    Terms(SmallVec<[Term; 4]>),
}

impl TypeSet {
    /// The unsatisfiable set.
    pub fn empty() -> Self {
        TypeSet::Terms(SmallVec::new())
    }

    /// Exactly one type.
    pub fn single(ty: Idx) -> Self {
        let mut terms = SmallVec::new();
        terms.push(Term::exact(ty));
        TypeSet::Terms(terms)
    }

    /// The union of `terms`, normalized. Invalid terms are dropped.
    pub fn from_terms(pool: &mut Pool, terms: &[Term]) -> Result<Self, InvariantViolation> {
        normalize(pool, terms.iter().copied()).map(TypeSet::Terms)
    }

    #[inline]
    pub fn is_all(&self) -> bool {
        matches!(self, TypeSet::All)
    }

    /// No type satisfies the set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, TypeSet::Terms(terms) if terms.is_empty())
    }

    /// The terms, `None` when unconstrained.
    pub fn terms(&self) -> Option<&[Term]> {
        match self {
            TypeSet::All => None,
            TypeSet::Terms(terms) => Some(terms),
        }
    }

    /// Set intersection. `All` is the identity; the empty set absorbs.
    pub fn intersect(&self, other: &TypeSet, pool: &mut Pool) -> Result<TypeSet, InvariantViolation> {
        let (xs, ys) = match (self, other) {
            (TypeSet::All, set) | (set, TypeSet::All) => return Ok(set.clone()),
            (TypeSet::Terms(xs), TypeSet::Terms(ys)) => (xs, ys),
        };
        let mut out = Vec::with_capacity(xs.len().min(ys.len()));
        for &x in xs {
            for &y in ys {
                if let Some(term) = intersect_terms(pool, x, y)? {
                    out.push(term);
                }
            }
        }
        normalize(pool, out).map(TypeSet::Terms)
    }

    /// Whether `ty` is in the set.
    pub fn includes(&self, ty: Idx, pool: &mut Pool) -> Result<bool, InvariantViolation> {
        let TypeSet::Terms(terms) = self else {
            return Ok(true);
        };
        for &term in terms {
            if covers(pool, term, Term::exact(ty))? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether every type in `self` is in `other`.
    pub fn is_subset_of(&self, other: &TypeSet, pool: &mut Pool) -> Result<bool, InvariantViolation> {
        let (xs, ys) = match (self, other) {
            (_, TypeSet::All) => return Ok(true),
            (TypeSet::All, TypeSet::Terms(_)) => return Ok(false),
            (TypeSet::Terms(xs), TypeSet::Terms(ys)) => (xs, ys),
        };
        'outer: for &x in xs {
            for &y in ys {
                if covers(pool, y, x)? {
                    continue 'outer;
                }
            }
            return Ok(false);
        }
        Ok(true)
    }

    /// Set equality.
    pub fn same_as(&self, other: &TypeSet, pool: &mut Pool) -> Result<bool, InvariantViolation> {
        Ok(self.is_subset_of(other, pool)? && other.is_subset_of(self, pool)?)
    }
}

/// Drop invalid and covered terms, rewrite `~T` as `~under(T)`, and sort.
fn normalize(
    pool: &mut Pool,
    terms: impl IntoIterator<Item = Term>,
) -> Result<SmallVec<[Term; 4]>, InvariantViolation> {
    let mut out: SmallVec<[Term; 4]> = SmallVec::new();
    for term in terms {
        let term = if term.tilde {
            Term::approx(pool.under(term.ty))
        } else {
            term
        };
        if term.ty.is_invalid() {
            continue;
        }
        let mut covered = false;
        for &have in &out {
            if covers(pool, have, term)? {
                covered = true;
                break;
            }
        }
        if covered {
            continue;
        }
        let mut kept: SmallVec<[Term; 4]> = SmallVec::with_capacity(out.len() + 1);
        for &have in &out {
            if !covers(pool, term, have)? {
                kept.push(have);
            }
        }
        kept.push(term);
        out = kept;
    }
    sort_terms(pool, &mut out);
    Ok(out)
}

#[cfg(test)]
mod tests;
