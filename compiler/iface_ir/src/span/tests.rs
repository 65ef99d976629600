use super::*;

#[test]
fn dummy_is_unknown() {
    assert!(!Span::DUMMY.is_known());
    assert!(Span::new(0, 3).is_known());
    assert!(Span::point(7).is_known());
}

#[test]
fn merge_covers_both() {
    let merged = Span::new(20, 30).merge(Span::new(10, 25));
    assert_eq!(merged, Span::new(10, 30));
}

#[test]
fn point_is_empty() {
    let point = Span::point(42);
    assert!(point.is_empty());
    assert_eq!(point.len(), 0);
}

#[test]
fn debug_and_display_agree() {
    let span = Span::new(100, 200);
    assert_eq!(format!("{span:?}"), "100..200");
    assert_eq!(format!("{span}"), "100..200");
}
