//! Pool fixtures shared by unit tests.

use iface_ir::{Name, SharedInterner, Span, UnitId};

use crate::interface::Embedded;
use crate::order::{sort_embeddeds, sort_methods};
use crate::{Idx, MethodId, Pool, SignatureData, Term};

pub(crate) struct Fixture {
    pub pool: Pool,
    pub unit: UnitId,
    next_pos: u32,
}

impl Fixture {
    pub fn new() -> Self {
        let interner = SharedInterner::new();
        let unit = UnitId::new(interner.intern("example.com/main"));
        Fixture {
            pool: Pool::new(interner),
            unit,
            next_pos: 1,
        }
    }

    pub fn name(&self, s: &str) -> Name {
        self.pool.interner().intern(s)
    }

    pub fn unit(&self, path: &str) -> UnitId {
        UnitId::new(self.name(path))
    }

    /// A fresh one-byte span, later than every earlier one.
    pub fn span(&mut self) -> Span {
        let span = Span::new(self.next_pos, self.next_pos + 1);
        self.next_pos += 10;
        span
    }

    pub fn sig(&mut self, params: &[Idx], results: &[Idx]) -> Idx {
        self.pool.signature_type(SignatureData {
            params: params.to_vec(),
            results: results.to_vec(),
            ..SignatureData::default()
        })
    }

    pub fn method(&mut self, name: &str, sig: Idx) -> MethodId {
        let unit = self.unit;
        self.method_in(unit, name, sig)
    }

    pub fn method_in(&mut self, unit: UnitId, name: &str, sig: Idx) -> MethodId {
        let name = self.name(name);
        let span = self.span();
        self.pool.new_method(name, sig, span, unit)
    }

    /// Unresolved interface with sorted members; each embedded element
    /// gets a fresh position.
    pub fn iface(&mut self, mut methods: Vec<MethodId>, embeddeds: &[Idx]) -> Idx {
        let mut embeddeds: Vec<Embedded> = embeddeds
            .iter()
            .map(|&ty| Embedded {
                ty,
                span: self.span(),
            })
            .collect();
        sort_methods(&self.pool, &mut methods);
        sort_embeddeds(&self.pool, &mut embeddeds);
        self.pool.interface_type(methods, embeddeds)
    }

    pub fn named(&mut self, name: &str, underlying: Idx) -> Idx {
        let name = self.name(name);
        let named = self.pool.named_type(name, self.unit);
        self.pool.set_underlying(named, underlying);
        named
    }

    pub fn union(&mut self, terms: &[Term]) -> Idx {
        self.pool.union_type(terms.to_vec())
    }

    /// Methods of a completed closure, by name.
    pub fn method_names(&self, methods: &[MethodId]) -> Vec<&'static str> {
        methods
            .iter()
            .map(|&m| self.pool.name_str(self.pool.method(m).name))
            .collect()
    }
}
