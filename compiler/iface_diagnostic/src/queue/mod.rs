//! Diagnostic queue: the sink every checker pass reports into.
//!
//! - Optional error limit (none by default)
//! - Deduplication of an exact repeat of the previous error
//! - Position-ordered flush
//! - `ErrorGuaranteed` proof that errors were emitted
//!
//! Completion tasks run in no particular order across interfaces, so the
//! order in which diagnostics arrive is not meaningful. `flush` sorts by
//! primary span, stably, and that is the only order callers should rely on.

use crate::{Diagnostic, ErrorGuaranteed};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited).
    pub error_limit: usize,
    /// Drop an error identical to the previous one: same code, message,
    /// labels, and notes.
    pub deduplicate: bool,
}

/// Every error is kept; only exact repeats are dropped.
impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// No limit and no deduplication.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }

    /// Keep at most `limit` errors, dropping exact repeats.
    pub fn limited(limit: usize) -> Self {
        DiagnosticConfig {
            error_limit: limit,
            deduplicate: true,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            config,
        }
    }

    /// Queue a diagnostic.
    ///
    /// Returns `false` if it was dropped by the limit or deduplication.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if self.limit_reached() {
            return false;
        }
        if self.config.deduplicate && self.diagnostics.last() == Some(&diag) {
            return false;
        }
        self.diagnostics.push(diag);
        true
    }

    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count() >= self.config.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Proof of errors, if any were queued.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count())
    }

    /// Queued diagnostics in arrival order, without clearing.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Drain the queue, ordered by primary span start.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut result: Vec<Diagnostic> = self.diagnostics.drain(..).collect();
        result.sort_by_key(|d| d.primary_span().map_or(0, |span| span.start));
        result
    }
}
