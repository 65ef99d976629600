use super::*;

#[test]
fn returns_closure_result() {
    assert_eq!(ensure_sufficient_stack(|| 42), 42);
}

#[test]
fn propagates_errors() {
    let result: Result<u32, &str> = ensure_sufficient_stack(|| Err("incomplete"));
    assert_eq!(result, Err("incomplete"));
}

#[test]
fn deep_embedding_chain_does_not_overflow() {
    // One frame per embedding level, far deeper than any real declaration.
    fn depth(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    assert_eq!(depth(100_000), 100_000);
}
