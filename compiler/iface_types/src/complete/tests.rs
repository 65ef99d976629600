//! Completion without a diagnostics sink. The checker path is covered by
//! `check::tests`.

use pretty_assertions::assert_eq;

use super::*;
use crate::test_helpers::Fixture;
use crate::Term;

fn complete(f: &mut Fixture, idx: Idx) -> Result<Closure, InvariantViolation> {
    complete_interface(&mut f.pool, &mut Sink::Absent, Span::DUMMY, idx)?;
    Ok(f.pool.closure(idx).cloned().unwrap())
}

#[test]
fn explicit_methods_sorted() {
    let mut f = Fixture::new();
    let sig = f.sig(&[], &[]);
    let b = f.method("b", sig);
    let a = f.method("A", sig);
    let iface = f.iface(vec![b, a], &[]);
    let closure = complete(&mut f, iface).unwrap();
    assert_eq!(f.method_names(&closure.methods), vec!["A", "b"]);
    assert!(closure.types.is_all());
}

#[test]
fn idempotent() {
    let mut f = Fixture::new();
    let sig = f.sig(&[], &[Idx::INT]);
    let foo = f.method("Foo", sig);
    let inner = f.iface(vec![foo], &[]);
    let outer = f.iface(Vec::new(), &[inner]);
    let first = complete(&mut f, outer).unwrap();
    let second = complete(&mut f, outer).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.methods, vec![foo]);
}

#[test]
fn embedded_methods_are_inherited() {
    let mut f = Fixture::new();
    let sig = f.sig(&[], &[]);
    let read = f.method("Read", sig);
    let write = f.method("Write", sig);
    let close = f.method("Close", sig);
    let reader = f.iface(vec![read], &[]);
    let writer = f.iface(vec![write], &[]);
    let rw = f.iface(vec![close], &[reader, writer]);
    let closure = complete(&mut f, rw).unwrap();
    assert_eq!(f.method_names(&closure.methods), vec!["Close", "Read", "Write"]);
    // Embedded interfaces were completed along the way.
    assert!(f.pool.closure(reader).is_some());
}

#[test]
fn explicit_duplicate_is_invariant_violation() {
    let mut f = Fixture::new();
    let s1 = f.sig(&[], &[Idx::INT]);
    let s2 = f.sig(&[], &[Idx::STRING]);
    let m1 = f.method("M", s1);
    let m2 = f.method("M", s2);
    let iface = f.iface(vec![m1, m2], &[]);
    let err = complete(&mut f, iface).unwrap_err();
    let span = f.pool.method(m2).span;
    assert_eq!(
        err,
        InvariantViolation::DuplicateMethod {
            name: "M".to_string(),
            span,
        }
    );
    // Left in progress.
    assert_eq!(f.pool.interface(iface).map(|i| &i.completion), Some(&Completion::InProgress));
}

#[test]
fn inherited_identical_signatures_merge() {
    let mut f = Fixture::new();
    let s1 = f.sig(&[], &[Idx::INT]);
    let s2 = f.sig(&[], &[Idx::INT]);
    let m1 = f.method("M", s1);
    let m2 = f.method("M", s2);
    let a = f.iface(vec![m1], &[]);
    let b = f.iface(vec![m2], &[]);
    let both = f.iface(Vec::new(), &[a, b]);
    let closure = complete(&mut f, both).unwrap();
    assert_eq!(closure.methods.len(), 1);
}

#[test]
fn inherited_differing_signatures_fail() {
    let mut f = Fixture::new();
    let s1 = f.sig(&[], &[Idx::INT]);
    let s2 = f.sig(&[], &[Idx::STRING]);
    let m1 = f.method("M", s1);
    let m2 = f.method("M", s2);
    let a = f.iface(vec![m1], &[]);
    let b = f.iface(vec![m2], &[]);
    let both = f.iface(Vec::new(), &[a, b]);
    assert!(matches!(
        complete(&mut f, both),
        Err(InvariantViolation::DuplicateMethod { .. })
    ));
}

#[test]
fn diamond_embedding_merges() {
    let mut f = Fixture::new();
    let sig = f.sig(&[], &[]);
    let m = f.method("M", sig);
    let base = f.iface(vec![m], &[]);
    let left = f.iface(Vec::new(), &[base]);
    let right = f.iface(Vec::new(), &[base]);
    let top = f.iface(Vec::new(), &[left, right]);
    let closure = complete(&mut f, top).unwrap();
    assert_eq!(closure.methods, vec![m]);
}

#[test]
fn unexported_methods_from_two_units_both_kept() {
    let mut f = Fixture::new();
    let sig = f.sig(&[], &[]);
    let other = f.unit("example.com/other");
    let here = f.method("m", sig);
    let there = f.method_in(other, "m", sig);
    let a = f.iface(vec![here], &[]);
    let b = f.iface(vec![there], &[]);
    let both = f.iface(Vec::new(), &[a, b]);
    let closure = complete(&mut f, both).unwrap();
    assert_eq!(closure.methods.len(), 2);
}

#[test]
fn self_embedding_contributes_nothing() {
    let mut f = Fixture::new();
    let sig = f.sig(&[], &[]);
    let m = f.method("M", sig);
    let name = f.name("Cyclic");
    let named = f.pool.named_type(name, f.unit);
    let cyclic = f.iface(vec![m], &[named]);
    f.pool.set_underlying(named, cyclic);

    let m2 = f.method("M", sig);
    let plain = f.iface(vec![m2], &[]);

    let closure = complete(&mut f, cyclic).unwrap();
    let expected = complete(&mut f, plain).unwrap();
    assert_eq!(closure.methods.len(), expected.methods.len());
    assert_eq!(closure.types, expected.types);
}

/// `A { a(); B }` and `B { b(); A }`, declared through named types.
fn mutual_cycle(f: &mut Fixture) -> (Idx, Idx) {
    let sig = f.sig(&[], &[]);
    let a = f.method("a", sig);
    let b = f.method("b", sig);
    let (na, nb) = (f.name("A"), f.name("B"));
    let named_a = f.pool.named_type(na, f.unit);
    let named_b = f.pool.named_type(nb, f.unit);
    let iface_a = f.iface(vec![a], &[named_b]);
    let iface_b = f.iface(vec![b], &[named_a]);
    f.pool.set_underlying(named_a, iface_a);
    f.pool.set_underlying(named_b, iface_b);
    (iface_a, iface_b)
}

#[test]
fn mutual_cycle_drops_the_back_edge() {
    let mut f = Fixture::new();
    let (a, b) = mutual_cycle(&mut f);
    let closure_a = complete(&mut f, a).unwrap();
    let closure_b = complete(&mut f, b).unwrap();
    assert_eq!(f.method_names(&closure_a.methods), vec!["a", "b"]);
    assert_eq!(f.method_names(&closure_b.methods), vec!["b"]);

    let mut f = Fixture::new();
    let (a, b) = mutual_cycle(&mut f);
    let closure_b = complete(&mut f, b).unwrap();
    let closure_a = complete(&mut f, a).unwrap();
    assert_eq!(f.method_names(&closure_b.methods), vec!["a", "b"]);
    assert_eq!(f.method_names(&closure_a.methods), vec!["a"]);
}

#[test]
fn union_embeddings_intersect() {
    let mut f = Fixture::new();
    let u1 = f.union(&[Term::exact(Idx::INT), Term::exact(Idx::STRING)]);
    let u2 = f.union(&[Term::exact(Idx::STRING), Term::exact(Idx::BOOL)]);
    let iface = f.iface(Vec::new(), &[u1, u2]);
    let closure = complete(&mut f, iface).unwrap();
    assert_eq!(closure.types, TypeSet::single(Idx::STRING));
}

#[test]
fn disjoint_unions_are_unsatisfiable_not_an_error() {
    let mut f = Fixture::new();
    let u1 = f.union(&[Term::exact(Idx::INT)]);
    let u2 = f.union(&[Term::exact(Idx::STRING)]);
    let iface = f.iface(Vec::new(), &[u1, u2]);
    let closure = complete(&mut f, iface).unwrap();
    assert!(closure.types.is_empty());
    assert!(!closure.is_empty_interface());
}

#[test]
fn embedded_non_interface_is_single_type_constraint() {
    let mut f = Fixture::new();
    let iface = f.iface(Vec::new(), &[Idx::INT]);
    let closure = complete(&mut f, iface).unwrap();
    assert_eq!(closure.types, TypeSet::single(Idx::INT));
}

#[test]
fn embedded_invalid_is_skipped() {
    let mut f = Fixture::new();
    let iface = f.iface(Vec::new(), &[Idx::INVALID]);
    let closure = complete(&mut f, iface).unwrap();
    assert!(closure.is_empty_interface());
}

#[test]
fn embedded_type_param_contributes_its_constraint() {
    let mut f = Fixture::new();
    let union = f.union(&[Term::approx(Idx::INT), Term::exact(Idx::STRING)]);
    let constraint = f.iface(Vec::new(), &[union]);
    let name = f.name("P");
    let param = f.pool.type_param_type(name, 0);
    f.pool.set_bound(param, constraint);

    let string_only = f.union(&[Term::exact(Idx::STRING)]);
    let iface = f.iface(Vec::new(), &[param, string_only]);
    let closure = complete(&mut f, iface).unwrap();
    assert_eq!(closure.types, TypeSet::single(Idx::STRING));
}

#[test]
fn not_an_interface_is_invariant_violation() {
    let mut f = Fixture::new();
    let err = complete_interface(&mut f.pool, &mut Sink::Absent, Span::DUMMY, Idx::INT);
    assert_eq!(err, Err(InvariantViolation::NotAnInterface { idx: Idx::INT }));
}
