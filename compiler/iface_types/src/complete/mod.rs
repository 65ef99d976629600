//! Interface completion: computes the closure of an interface.
//!
//! One algorithm serves both callers. The checker passes a [`Sink`] that
//! reports user errors and defers signature checks; external queries pass
//! [`Sink::Absent`], and any conflict becomes an [`InvariantViolation`].
//!
//! The in-progress marker is written before embedded interfaces are
//! completed, so an embedding cycle sees an interface that contributes
//! nothing instead of recursing forever. In a mutual cycle the interface
//! completed first gets every method on the cycle; the others lose the
//! edge back to it. Cycles are rejected before completion in a full
//! checker, so only the absence of recursion is relied on.

use iface_diagnostic::DiagnosticQueue;
use iface_ir::Span;
use iface_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use crate::check::Delayed;
use crate::error::TypeError;
use crate::interface::{Closure, Completion, Embedded};
use crate::order::{assert_sorted_methods, sort_methods};
use crate::{identical, CheckerConfig, Feature, Idx, InvariantViolation, MethodId, MethodKey, Pool, Tag, TypeSet};

/// Diagnostics capability of a completion.
pub(crate) enum Sink<'a> {
    /// Checking: report errors, defer inherited-overlap checks.
    Present(Reporter<'a>),
    /// External query: conflicts are invariant violations.
    Absent,
}

/// The checker state a completion may report into.
pub(crate) struct Reporter<'a> {
    pub config: &'a CheckerConfig,
    pub diagnostics: &'a mut DiagnosticQueue,
    pub delayed: &'a mut Delayed,
}

impl Reporter<'_> {
    pub(crate) fn report(&mut self, err: &TypeError, span: Span) {
        self.diagnostics.add(err.to_diagnostic(span));
    }
}

/// Shape of an embedded element, by its underlying type.
enum EmbeddedShape {
    Interface(Idx),
    Union(Idx),
    TypeParam { bound: Idx },
    Invalid,
    Other,
}

fn embedded_shape(pool: &Pool, ty: Idx) -> EmbeddedShape {
    let under = pool.under(ty);
    match pool.tag(under) {
        Tag::Interface => EmbeddedShape::Interface(under),
        Tag::Union => EmbeddedShape::Union(under),
        Tag::TypeParam => EmbeddedShape::TypeParam {
            bound: pool.type_param(under).map_or(Idx::INVALID, |p| p.bound),
        },
        Tag::Invalid => EmbeddedShape::Invalid,
        Tag::Bool
        | Tag::Int
        | Tag::Int64
        | Tag::Float64
        | Tag::String
        | Tag::Byte
        | Tag::Rune
        | Tag::Slice
        | Tag::Signature
        | Tag::Named => EmbeddedShape::Other,
    }
}

/// Method slots of the closure being built.
#[derive(Default)]
struct MethodSlots {
    seen: FxHashMap<MethodKey, MethodId>,
    methods: Vec<MethodId>,
    /// Position each method was added at: its declaration for explicit
    /// methods, the embedding site for inherited ones.
    mpos: FxHashMap<MethodId, Span>,
    /// Inherited collisions to check once every embedding is folded.
    /// Only used without a sink.
    todo: Vec<(MethodId, MethodId)>,
}

impl MethodSlots {
    fn add(
        &mut self,
        pool: &Pool,
        sink: &mut Sink<'_>,
        pos: Span,
        m: MethodId,
        explicit: bool,
    ) -> Result<(), InvariantViolation> {
        let key = pool.method(m).key();
        let Some(&other) = self.seen.get(&key) else {
            self.seen.insert(key, m);
            self.methods.push(m);
            self.mpos.insert(m, pos);
            return Ok(());
        };
        let other_pos = self.mpos.get(&other).copied().unwrap_or(Span::DUMMY);
        let name = pool.name_str(pool.method(m).name);

        match (sink, explicit) {
            (Sink::Absent, true) => Err(InvariantViolation::DuplicateMethod {
                name: name.to_string(),
                span: pool.method(m).span,
            }),
            (Sink::Absent, false) => {
                self.todo.push((m, other));
                Ok(())
            }
            (Sink::Present(reporter), true) => {
                let err = TypeError::DuplicateMethod {
                    name: name.to_string(),
                    other: other_pos,
                };
                reporter.report(&err, pos);
                Ok(())
            }
            (Sink::Present(reporter), false) => {
                // Signatures may not be resolved yet; check after all types are.
                reporter.delayed.push(move |check| {
                    check.check_overlapping_method(m, other, pos, other_pos);
                });
                Ok(())
            }
        }
    }
}

/// Complete the interface `idx`. Idempotent.
///
/// `span` is where completion was requested from; inherited errors are
/// reported at embedding positions, not at `span`.
pub(crate) fn complete_interface(
    pool: &mut Pool,
    sink: &mut Sink<'_>,
    span: Span,
    idx: Idx,
) -> Result<(), InvariantViolation> {
    let Some(iface) = pool.interface(idx) else {
        return Err(InvariantViolation::NotAnInterface { idx });
    };
    if !matches!(iface.completion, Completion::Unresolved) {
        return Ok(());
    }
    let explicit = iface.methods.clone();
    let embeddeds = iface.embeddeds.clone();

    tracing::trace!(?idx, %span, methods = explicit.len(), embeddeds = embeddeds.len(), "complete interface");
    pool.set_completion(idx, Completion::InProgress);

    let mut slots = MethodSlots::default();
    for &m in &explicit {
        let pos = pool.method(m).span;
        slots.add(pool, sink, pos, m, true)?;
    }

    let mut types = TypeSet::All;
    for &embedded in &embeddeds {
        let Some(contributed) = embedded_type_set(pool, sink, &mut slots, embedded)? else {
            continue;
        };
        types = types.intersect(&contributed, pool)?;
    }

    for (m, other) in std::mem::take(&mut slots.todo) {
        let (sm, so) = (pool.method(m).sig, pool.method(other).sig);
        if !identical(pool, sm, so)? {
            let method = pool.method(m);
            return Err(InvariantViolation::DuplicateMethod {
                name: pool.name_str(method.name).to_string(),
                span: method.span,
            });
        }
    }

    let mut methods = slots.methods;
    sort_methods(pool, &mut methods);
    assert_sorted_methods(pool, &methods);
    tracing::trace!(?idx, methods = methods.len(), unsatisfiable = types.is_empty(), "interface complete");
    pool.set_completion(idx, Completion::Complete(Closure { methods, types }));
    Ok(())
}

/// Fold one embedded element's methods into `slots` and return its type
/// set, or `None` when it constrains nothing.
fn embedded_type_set(
    pool: &mut Pool,
    sink: &mut Sink<'_>,
    slots: &mut MethodSlots,
    embedded: Embedded,
) -> Result<Option<TypeSet>, InvariantViolation> {
    let Embedded { ty, span: pos } = embedded;
    match embedded_shape(pool, ty) {
        EmbeddedShape::Interface(inner) => {
            ensure_sufficient_stack(|| complete_interface(pool, sink, pos, inner))?;
            let Some(closure) = pool.closure(inner) else {
                // In progress: reached through a cycle.
                return Ok(None);
            };
            let (methods, types) = (closure.methods.clone(), closure.types.clone());
            for m in methods {
                slots.add(pool, sink, pos, m, false)?;
            }
            Ok(Some(types))
        }
        EmbeddedShape::Union(union) => {
            let terms = pool.union_terms(union).unwrap_or_default().to_vec();
            TypeSet::from_terms(pool, &terms).map(Some)
        }
        EmbeddedShape::TypeParam { bound } => {
            if let Sink::Present(reporter) = sink {
                if !reporter.config.allows(Feature::Generics) {
                    let err = TypeError::EmbeddedTypeParam {
                        ty: pool.format_type(ty),
                    };
                    reporter.report(&err, pos);
                    return Ok(None);
                }
            }
            constraint_type_set(pool, sink, pos, bound)
        }
        EmbeddedShape::Invalid => Ok(None),
        EmbeddedShape::Other => {
            if let Sink::Present(reporter) = sink {
                if !reporter.config.allows(Feature::Generics) {
                    let err = TypeError::NotAnInterface {
                        ty: pool.format_type(ty),
                    };
                    reporter.report(&err, pos);
                    return Ok(None);
                }
            }
            Ok(Some(TypeSet::single(ty)))
        }
    }
}

/// Type set of a type parameter's constraint.
fn constraint_type_set(
    pool: &mut Pool,
    sink: &mut Sink<'_>,
    pos: Span,
    bound: Idx,
) -> Result<Option<TypeSet>, InvariantViolation> {
    let bound = pool.under(bound);
    if pool.tag(bound) != Tag::Interface {
        return Ok(None);
    }
    ensure_sufficient_stack(|| complete_interface(pool, sink, pos, bound))?;
    Ok(pool.closure(bound).map(|closure| closure.types.clone()))
}

#[cfg(test)]
mod tests;
