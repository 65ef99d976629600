//! Type construction.

use iface_ir::{Name, Span, UnitId};

use super::{NamedData, Pool, SignatureData, TypeParamData};
use crate::interface::{Closure, Completion, Embedded, InterfaceData};
use crate::item::Item;
use crate::method::is_exported;
use crate::type_set::Term;
use crate::{Idx, Method, MethodId, Tag};

fn table_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl Pool {
    // === Composite types ===

    /// Create a slice type `[]elem`.
    pub fn slice(&mut self, elem: Idx) -> Idx {
        self.push(Item::new(Tag::Slice, elem.raw()))
    }

    /// Create a function signature.
    pub fn signature_type(&mut self, sig: SignatureData) -> Idx {
        let data = table_index(self.signatures.len());
        self.signatures.push(sig);
        self.push(Item::new(Tag::Signature, data))
    }

    /// Create an unresolved interface with the given members.
    ///
    /// `methods` and `embeddeds` must already be canonically sorted; the
    /// checker sorts them during ingestion.
    pub fn interface_type(&mut self, methods: Vec<MethodId>, embeddeds: Vec<Embedded>) -> Idx {
        let data = table_index(self.interfaces.len());
        self.interfaces.push(InterfaceData {
            methods,
            embeddeds,
            completion: Completion::Unresolved,
        });
        self.push(Item::new(Tag::Interface, data))
    }

    /// Create the empty interface `interface{}`, already complete.
    pub fn empty_interface(&mut self) -> Idx {
        let idx = self.interface_type(Vec::new(), Vec::new());
        self.set_completion(idx, Completion::Complete(Closure::universe()));
        idx
    }

    /// Create a union of terms.
    pub fn union_type(&mut self, terms: Vec<Term>) -> Idx {
        let data = table_index(self.unions.len());
        self.unions.push(terms);
        self.push(Item::new(Tag::Union, data))
    }

    // === Declared types ===

    /// Create a named type whose underlying type is set later with
    /// [`set_underlying`](Self::set_underlying).
    pub fn named_type(&mut self, name: Name, unit: UnitId) -> Idx {
        let data = table_index(self.named.len());
        self.named.push(NamedData {
            name,
            unit,
            underlying: Idx::NONE,
            methods: Vec::new(),
        });
        self.push(Item::new(Tag::Named, data))
    }

    /// Resolve a named type's declaration. A named right-hand side is
    /// followed to its own underlying type.
    pub fn set_underlying(&mut self, named: Idx, rhs: Idx) {
        let under = if self.tag(rhs) == Tag::Named {
            self.under(rhs)
        } else {
            rhs
        };
        if let Some(data) = self.named_mut(named) {
            data.underlying = under;
        }
    }

    /// Create a type parameter. Its bound starts invalid so the constraint
    /// may refer to the parameter itself.
    pub fn type_param_type(&mut self, name: Name, index: u32) -> Idx {
        let data = table_index(self.type_params.len());
        self.type_params.push(TypeParamData {
            name,
            index,
            bound: Idx::INVALID,
        });
        self.push(Item::new(Tag::TypeParam, data))
    }

    pub fn set_bound(&mut self, type_param: Idx, bound: Idx) {
        if let Some(i) = self.data_of(type_param, Tag::TypeParam) {
            if let Some(data) = self.type_params.get_mut(i) {
                data.bound = bound;
            }
        }
    }

    // === Methods ===

    /// Create a method. Exportedness follows from the name's first letter.
    pub fn new_method(&mut self, name: Name, sig: Idx, span: Span, unit: UnitId) -> MethodId {
        let exported = is_exported(self.name_str(name));
        let id = MethodId::from_raw(table_index(self.methods.len()));
        self.methods.push(Method {
            name,
            sig,
            span,
            unit,
            exported,
        });
        id
    }

    /// Attach a declared method to a named type.
    pub fn add_named_method(&mut self, named: Idx, method: MethodId) {
        if let Some(data) = self.named_mut(named) {
            data.methods.push(method);
        }
    }

    /// Bind the synthetic receiver of a method signature.
    pub(crate) fn set_receiver(&mut self, sig: Idx, recv: Idx) {
        if let Some(i) = self.data_of(sig, Tag::Signature) {
            if let Some(data) = self.signatures.get_mut(i) {
                data.recv = Some(recv);
            }
        }
    }
}
