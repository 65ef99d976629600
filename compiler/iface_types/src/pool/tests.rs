use pretty_assertions::assert_eq;

use crate::test_helpers::Fixture;
use crate::{Idx, SignatureData, Tag, Term};

#[test]
fn basic_types_at_fixed_indices() {
    let f = Fixture::new();
    assert_eq!(f.pool.tag(Idx::INVALID), Tag::Invalid);
    assert_eq!(f.pool.tag(Idx::INT), Tag::Int);
    assert_eq!(f.pool.tag(Idx::STRING), Tag::String);
    assert_eq!(f.pool.tag(Idx::RUNE), Tag::Rune);
    assert_eq!(f.pool.len(), Idx::BASIC_COUNT as usize);
}

#[test]
fn out_of_range_index_is_invalid() {
    let f = Fixture::new();
    assert_eq!(f.pool.tag(Idx::from_raw(1000)), Tag::Invalid);
    assert_eq!(f.pool.tag(Idx::NONE), Tag::Invalid);
}

#[test]
fn side_tables_check_tags() {
    let mut f = Fixture::new();
    let slice = f.pool.slice(Idx::INT);
    assert_eq!(f.pool.slice_elem(slice), Some(Idx::INT));
    assert!(f.pool.signature(slice).is_none());
    assert!(f.pool.interface(slice).is_none());
    assert!(f.pool.named(Idx::INT).is_none());
}

#[test]
fn under_follows_named_types() {
    let mut f = Fixture::new();
    let my_int = f.named("MyInt", Idx::INT);
    let your_int = f.named("YourInt", my_int);
    assert_eq!(f.pool.under(Idx::INT), Idx::INT);
    assert_eq!(f.pool.under(my_int), Idx::INT);
    assert_eq!(f.pool.under(your_int), Idx::INT);
    // set_underlying stores the resolved underlying type, not the name.
    assert_eq!(f.pool.named(your_int).map(|n| n.underlying), Some(Idx::INT));
}

#[test]
fn under_of_unresolved_named_is_invalid() {
    let mut f = Fixture::new();
    let name = f.name("Pending");
    let named = f.pool.named_type(name, f.unit);
    assert_eq!(f.pool.under(named), Idx::INVALID);
}

#[test]
fn named_declared_as_unresolved_named_is_invalid() {
    let mut f = Fixture::new();
    let (a, b) = (f.name("A"), f.name("B"));
    let a = f.pool.named_type(a, f.unit);
    let b = f.pool.named_type(b, f.unit);
    // `type A B` before B is resolved.
    f.pool.set_underlying(a, b);
    f.pool.set_underlying(b, Idx::INT);
    assert_eq!(f.pool.under(a), Idx::INVALID);
    assert_eq!(f.pool.under(b), Idx::INT);
}

#[test]
fn empty_interface_is_complete() {
    let mut f = Fixture::new();
    let iface = f.pool.empty_interface();
    let closure = f.pool.closure(iface);
    assert!(closure.is_some_and(|c| c.is_empty_interface()));
}

#[test]
fn new_method_derives_exportedness() {
    let mut f = Fixture::new();
    let sig = f.sig(&[], &[]);
    let upper = f.method("Read", sig);
    let lower = f.method("read", sig);
    assert!(f.pool.method(upper).exported);
    assert!(!f.pool.method(lower).exported);
}

#[test]
fn format_basic_and_composite() {
    let mut f = Fixture::new();
    let slice = f.pool.slice(Idx::STRING);
    assert_eq!(f.pool.format_type(Idx::INT), "int");
    assert_eq!(f.pool.format_type(slice), "[]string");

    let sig = f.sig(&[Idx::INT, slice], &[Idx::BOOL]);
    assert_eq!(f.pool.format_type(sig), "func(int, []string) bool");
    let multi = f.sig(&[], &[Idx::INT, Idx::STRING]);
    assert_eq!(f.pool.format_type(multi), "func() (int, string)");
}

#[test]
fn format_variadic() {
    let mut f = Fixture::new();
    let rest = f.pool.slice(Idx::INT);
    let sig = f.pool.signature_type(SignatureData {
        params: vec![Idx::STRING, rest],
        variadic: true,
        ..SignatureData::default()
    });
    assert_eq!(f.pool.format_type(sig), "func(string, ...int)");
}

#[test]
fn format_interface_and_union() {
    let mut f = Fixture::new();
    let sig = f.sig(&[], &[Idx::INT]);
    let foo = f.method("Foo", sig);
    let union = f.union(&[Term::approx(Idx::INT), Term::exact(Idx::STRING)]);
    assert_eq!(f.pool.format_type(union), "~int | string");

    let iface = f.iface(vec![foo], &[union]);
    assert_eq!(f.pool.format_type(iface), "interface{~int | string; Foo() int}");
    let empty = f.pool.empty_interface();
    assert_eq!(f.pool.format_type(empty), "interface{}");
}

#[test]
fn format_named_and_type_param() {
    let mut f = Fixture::new();
    let reader = f.named("Reader", Idx::INT);
    let p = f.name("P");
    let param = f.pool.type_param_type(p, 0);
    assert_eq!(f.pool.format_type(reader), "Reader");
    assert_eq!(f.pool.format_type(param), "P");
}
