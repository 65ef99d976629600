use super::*;

#[test]
fn intern_and_lookup() {
    let interner = StringInterner::new();

    let reader = interner.intern("Reader");
    let writer = interner.intern("Writer");

    assert_eq!(reader, interner.intern("Reader"));
    assert_ne!(reader, writer);
    assert_eq!(interner.lookup(reader), "Reader");
    assert_eq!(interner.lookup(writer), "Writer");
}

#[test]
fn empty_string_is_name_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn markers_are_pre_interned() {
    let interner = StringInterner::new();
    let before = interner.len();
    interner.intern("_");
    interner.intern("type");
    assert_eq!(interner.len(), before);
}

#[test]
fn shared_handles_see_the_same_names() {
    let interner = SharedInterner::new();
    let other = interner.clone();
    assert_eq!(interner.intern("shared"), other.intern("shared"));
}
