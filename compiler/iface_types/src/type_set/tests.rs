use pretty_assertions::assert_eq;

use super::*;
use crate::test_helpers::Fixture;

fn set(pool: &mut Pool, terms: &[Term]) -> TypeSet {
    TypeSet::from_terms(pool, terms).unwrap()
}

#[test]
fn intersection_of_exact_terms() {
    let mut f = Fixture::new();
    let a = set(&mut f.pool, &[Term::exact(Idx::INT), Term::exact(Idx::STRING)]);
    let b = set(&mut f.pool, &[Term::exact(Idx::STRING), Term::exact(Idx::BOOL)]);
    let got = a.intersect(&b, &mut f.pool).unwrap();
    assert_eq!(got, TypeSet::single(Idx::STRING));
}

#[test]
fn all_is_identity() {
    let mut f = Fixture::new();
    let a = set(&mut f.pool, &[Term::exact(Idx::INT)]);
    assert_eq!(TypeSet::All.intersect(&a, &mut f.pool).unwrap(), a);
    assert_eq!(a.intersect(&TypeSet::All, &mut f.pool).unwrap(), a);
    assert_eq!(TypeSet::All.intersect(&TypeSet::All, &mut f.pool).unwrap(), TypeSet::All);
}

#[test]
fn empty_absorbs() {
    let mut f = Fixture::new();
    let a = set(&mut f.pool, &[Term::exact(Idx::INT)]);
    let empty = TypeSet::empty();
    assert!(a.intersect(&empty, &mut f.pool).unwrap().is_empty());
    assert!(empty.intersect(&TypeSet::All, &mut f.pool).unwrap().is_empty());
}

#[test]
fn disjoint_sets_give_empty() {
    let mut f = Fixture::new();
    let a = set(&mut f.pool, &[Term::exact(Idx::INT)]);
    let b = set(&mut f.pool, &[Term::exact(Idx::STRING)]);
    let got = a.intersect(&b, &mut f.pool).unwrap();
    assert!(got.is_empty());
    assert!(!got.is_all());
    assert_eq!(got.terms(), Some(&[][..]));
}

#[test]
fn approximate_terms_match_named_types() {
    let mut f = Fixture::new();
    let my_int = f.named("MyInt", Idx::INT);
    let approx = set(&mut f.pool, &[Term::approx(Idx::INT)]);
    let exact = set(&mut f.pool, &[Term::exact(my_int), Term::exact(Idx::STRING)]);

    let got = approx.intersect(&exact, &mut f.pool).unwrap();
    assert_eq!(got, TypeSet::single(my_int));
    let got = exact.intersect(&approx, &mut f.pool).unwrap();
    assert_eq!(got, TypeSet::single(my_int));
}

#[test]
fn two_approximate_terms_keep_underlying() {
    let mut f = Fixture::new();
    let my_int = f.named("MyInt", Idx::INT);
    let a = set(&mut f.pool, &[Term::approx(Idx::INT)]);
    let b = set(&mut f.pool, &[Term::approx(my_int)]);
    let expected = set(&mut f.pool, &[Term::approx(Idx::INT)]);
    assert_eq!(a.intersect(&b, &mut f.pool).unwrap(), expected);
    assert_eq!(b.intersect(&a, &mut f.pool).unwrap(), expected);
}

#[test]
fn normalization_drops_covered_and_invalid_terms() {
    let mut f = Fixture::new();
    let my_int = f.named("MyInt", Idx::INT);
    let got = set(
        &mut f.pool,
        &[
            Term::exact(Idx::INT),
            Term::exact(Idx::INVALID),
            Term::exact(my_int),
            Term::approx(Idx::INT),
            Term::exact(Idx::STRING),
            Term::exact(Idx::STRING),
        ],
    );
    assert_eq!(got.terms(), Some(&[Term::approx(Idx::INT), Term::exact(Idx::STRING)][..]));
}

#[test]
fn structurally_identical_terms_merge() {
    let mut f = Fixture::new();
    let s1 = f.pool.slice(Idx::INT);
    let s2 = f.pool.slice(Idx::INT);
    let got = set(&mut f.pool, &[Term::exact(s1), Term::exact(s2)]);
    assert_eq!(got.terms().map(<[Term]>::len), Some(1));
}

#[test]
fn includes_and_subset() {
    let mut f = Fixture::new();
    let my_int = f.named("MyInt", Idx::INT);
    let ints = set(&mut f.pool, &[Term::approx(Idx::INT)]);
    assert!(ints.includes(my_int, &mut f.pool).unwrap());
    assert!(ints.includes(Idx::INT, &mut f.pool).unwrap());
    assert!(!ints.includes(Idx::STRING, &mut f.pool).unwrap());
    assert!(TypeSet::All.includes(Idx::STRING, &mut f.pool).unwrap());

    let exact = set(&mut f.pool, &[Term::exact(my_int)]);
    assert!(exact.is_subset_of(&ints, &mut f.pool).unwrap());
    assert!(!ints.is_subset_of(&exact, &mut f.pool).unwrap());
    assert!(exact.is_subset_of(&TypeSet::All, &mut f.pool).unwrap());
    assert!(!TypeSet::All.is_subset_of(&exact, &mut f.pool).unwrap());
    assert!(TypeSet::empty().is_subset_of(&exact, &mut f.pool).unwrap());
}

#[test]
fn same_as_ignores_order() {
    let mut f = Fixture::new();
    let s1 = f.pool.slice(Idx::INT);
    let s2 = f.pool.slice(Idx::STRING);
    let a = set(&mut f.pool, &[Term::exact(s1), Term::exact(s2)]);
    let b = set(&mut f.pool, &[Term::exact(s2), Term::exact(s1)]);
    assert!(a.same_as(&b, &mut f.pool).unwrap());
    assert!(!a.same_as(&TypeSet::All, &mut f.pool).unwrap());
}

#[test]
fn overlapping_terms() {
    let mut f = Fixture::new();
    let my_int = f.named("MyInt", Idx::INT);
    assert!(terms_overlap(&mut f.pool, Term::approx(Idx::INT), Term::exact(my_int)).unwrap());
    assert!(terms_overlap(&mut f.pool, Term::exact(Idx::INT), Term::exact(Idx::INT)).unwrap());
    assert!(!terms_overlap(&mut f.pool, Term::exact(Idx::INT), Term::exact(my_int)).unwrap());
}
