//! Structural type identity.
//!
//! Basic, named, and type parameter types are identical only to
//! themselves. Slices, signatures, and unions compare structurally.
//! Interfaces compare by their completed closures: same method slots with
//! identical signatures, and equal type sets. Interfaces are completed on
//! demand with no diagnostics sink.

use iface_ir::Span;
use iface_stack::ensure_sufficient_stack;

use crate::complete::{complete_interface, Sink};
use crate::{Idx, InvariantViolation, MethodId, Pool, Tag, TypeSet};

/// Whether `x` and `y` are identical types.
pub fn identical(pool: &mut Pool, x: Idx, y: Idx) -> Result<bool, InvariantViolation> {
    Comparer {
        pool,
        pairs: Vec::new(),
        type_params: Vec::new(),
    }
    .identical(x, y)
}

struct Comparer<'p> {
    pool: &'p mut Pool,
    /// Interface pairs being compared further up the stack; assumed equal.
    pairs: Vec<(Idx, Idx)>,
    /// Corresponding type parameters of the signatures being compared.
    type_params: Vec<(Idx, Idx)>,
}

impl Comparer<'_> {
    fn identical(&mut self, x: Idx, y: Idx) -> Result<bool, InvariantViolation> {
        if x == y {
            return Ok(true);
        }
        let tag = self.pool.tag(x);
        if tag != self.pool.tag(y) {
            return Ok(false);
        }
        ensure_sufficient_stack(|| match tag {
            Tag::Slice => match (self.pool.slice_elem(x), self.pool.slice_elem(y)) {
                (Some(ex), Some(ey)) => self.identical(ex, ey),
                _ => Ok(false),
            },
            Tag::Signature => self.identical_signatures(x, y),
            Tag::Interface => self.identical_interfaces(x, y),
            Tag::Union => self.identical_unions(x, y),
            Tag::TypeParam => Ok(self.type_params.contains(&(x, y))),
            Tag::Named
            | Tag::Invalid
            | Tag::Bool
            | Tag::Int
            | Tag::Int64
            | Tag::Float64
            | Tag::String
            | Tag::Byte
            | Tag::Rune => Ok(false),
        })
    }

    fn identical_lists(&mut self, xs: &[Idx], ys: &[Idx]) -> Result<bool, InvariantViolation> {
        if xs.len() != ys.len() {
            return Ok(false);
        }
        for (&x, &y) in xs.iter().zip(ys) {
            if !self.identical(x, y)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Receivers are ignored. Type parameters correspond by position.
    fn identical_signatures(&mut self, x: Idx, y: Idx) -> Result<bool, InvariantViolation> {
        let (Some(sx), Some(sy)) = (self.pool.signature(x), self.pool.signature(y)) else {
            return Ok(false);
        };
        if sx.variadic != sy.variadic
            || sx.type_params.len() != sy.type_params.len()
            || sx.params.len() != sy.params.len()
            || sx.results.len() != sy.results.len()
        {
            return Ok(false);
        }
        let (sx, sy) = (sx.clone(), sy.clone());

        let mark = self.type_params.len();
        self.type_params
            .extend(sx.type_params.iter().copied().zip(sy.type_params.iter().copied()));
        let result = self.identical_signature_parts(&sx, &sy);
        self.type_params.truncate(mark);
        result
    }

    fn identical_signature_parts(
        &mut self,
        sx: &crate::SignatureData,
        sy: &crate::SignatureData,
    ) -> Result<bool, InvariantViolation> {
        for (&px, &py) in sx.type_params.iter().zip(&sy.type_params) {
            let bx = self.pool.type_param(px).map_or(Idx::INVALID, |p| p.bound);
            let by = self.pool.type_param(py).map_or(Idx::INVALID, |p| p.bound);
            if !self.identical(bx, by)? {
                return Ok(false);
            }
        }
        Ok(self.identical_lists(&sx.params, &sy.params)? && self.identical_lists(&sx.results, &sy.results)?)
    }

    fn identical_interfaces(&mut self, x: Idx, y: Idx) -> Result<bool, InvariantViolation> {
        if self.pairs.contains(&(x, y)) || self.pairs.contains(&(y, x)) {
            return Ok(true);
        }
        complete_interface(self.pool, &mut Sink::Absent, Span::DUMMY, x)?;
        complete_interface(self.pool, &mut Sink::Absent, Span::DUMMY, y)?;
        // An interface still in progress is only reachable through a cycle
        // and has no closure to compare yet.
        let (Some(cx), Some(cy)) = (self.pool.closure(x), self.pool.closure(y)) else {
            return Ok(false);
        };
        if cx.methods.len() != cy.methods.len() {
            return Ok(false);
        }
        let methods: Vec<(MethodId, MethodId)> = cx.methods.iter().copied().zip(cy.methods.iter().copied()).collect();
        let (tx, ty) = (cx.types.clone(), cy.types.clone());
        if !tx.same_as(&ty, self.pool)? {
            return Ok(false);
        }

        self.pairs.push((x, y));
        let result = self.identical_methods(&methods);
        self.pairs.pop();
        result
    }

    /// Closures are sorted, so matching slots sit at the same position.
    fn identical_methods(&mut self, methods: &[(MethodId, MethodId)]) -> Result<bool, InvariantViolation> {
        for &(mx, my) in methods {
            let (a, b) = (self.pool.method(mx), self.pool.method(my));
            if a.key() != b.key() {
                return Ok(false);
            }
            let (sa, sb) = (a.sig, b.sig);
            if !self.identical(sa, sb)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn identical_unions(&mut self, x: Idx, y: Idx) -> Result<bool, InvariantViolation> {
        let tx = self.pool.union_terms(x).unwrap_or_default().to_vec();
        let ty = self.pool.union_terms(y).unwrap_or_default().to_vec();
        let sx = TypeSet::from_terms(self.pool, &tx)?;
        let sy = TypeSet::from_terms(self.pool, &ty)?;
        sx.same_as(&sy, self.pool)
    }
}
