use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_sets_all_parts() {
    let diag = Diagnostic::error(ErrorCode::E2005)
        .with_message("duplicate method M")
        .with_label(Span::new(30, 31), "duplicate method M")
        .with_secondary_label(Span::new(10, 11), "other declaration of M")
        .with_note("methods are keyed by name");

    assert_eq!(diag.code, ErrorCode::E2005);
    assert_eq!(diag.primary_span(), Some(Span::new(30, 31)));
    assert_eq!(diag.secondary_spans().collect::<Vec<_>>(), vec![Span::new(10, 11)]);
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn primary_span_skips_secondary_labels() {
    let diag = Diagnostic::error(ErrorCode::E2002)
        .with_secondary_label(Span::new(1, 2), "first")
        .with_label(Span::new(5, 6), "second");
    assert_eq!(diag.primary_span(), Some(Span::new(5, 6)));
}

#[test]
fn display_renders_code_and_labels() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("invalid method name _")
        .with_label(Span::new(4, 5), "blank name");
    assert_eq!(
        diag.to_string(),
        "error [E2001]: invalid method name _\n  --> 4..5: blank name"
    );
}
