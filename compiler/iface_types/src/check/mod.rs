//! Interface checker.
//!
//! Resolves type expressions, ingests interface declarations, and runs
//! completion through the delayed queue with a diagnostics sink.
//!
//! # Lifecycle
//!
//! 1. [`Checker::new`] declares the basic types in the universe scope.
//! 2. Declarations go through [`Checker::type_decl`] or [`Checker::typ`].
//!    Non-empty interfaces schedule their completion.
//! 3. [`Checker::finish`] drains the delayed queue and returns the pool,
//!    the diagnostics, and the method definition table.

mod delayed;
mod ingest;
mod resolve;
mod union;

use iface_diagnostic::{Diagnostic, DiagnosticQueue, ErrorGuaranteed};
use iface_ir::{Name, Span, UnitId};
use rustc_hash::FxHashMap;

use crate::complete::{complete_interface, Reporter, Sink};
use crate::error::TypeError;
use crate::{identical, CheckerConfig, Feature, Idx, InvariantViolation, MethodId, Pool};

pub(crate) use delayed::Delayed;

/// Result of a finished check.
#[derive(Debug)]
pub struct CheckOutput {
    pub pool: Pool,
    /// Ordered by primary position.
    pub diagnostics: Vec<Diagnostic>,
    /// Method name position to the method declared there.
    pub defs: FxHashMap<Span, MethodId>,
}

impl CheckOutput {
    /// Proof that checking reported at least one error.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.diagnostics.len())
    }
}

#[derive(Debug)]
pub struct Checker {
    pool: Pool,
    unit: UnitId,
    config: CheckerConfig,
    /// Scope stack: universe at the bottom, then the unit scope, then one
    /// scope per type parameter list being resolved.
    scopes: Vec<FxHashMap<Name, Idx>>,
    diagnostics: DiagnosticQueue,
    delayed: Delayed,
    defs: FxHashMap<Span, MethodId>,
}

impl Checker {
    pub fn new(pool: Pool, unit: UnitId, config: CheckerConfig) -> Self {
        let mut universe = FxHashMap::default();
        for raw in 1..Idx::BASIC_COUNT {
            let idx = Idx::from_raw(raw);
            if let Some(name) = idx.basic_name() {
                universe.insert(pool.interner().intern(name), idx);
            }
        }
        let diagnostics = DiagnosticQueue::with_config(config.diagnostics.clone());
        Checker {
            pool,
            unit,
            config,
            scopes: vec![universe, FxHashMap::default()],
            diagnostics,
            delayed: Delayed::default(),
            defs: FxHashMap::default(),
        }
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut Pool {
        &mut self.pool
    }

    pub fn unit(&self) -> UnitId {
        self.unit
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Method name position to the method declared there.
    pub fn defs(&self) -> &FxHashMap<Span, MethodId> {
        &self.defs
    }

    /// Diagnostics reported so far, in arrival order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.peek()
    }

    /// Proof that an error has been reported so far.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        self.diagnostics.has_errors()
    }

    pub fn allows(&self, feature: Feature) -> bool {
        self.config.allows(feature)
    }

    // === Deferred work ===

    /// Schedule `task` to run before checking finishes.
    pub fn later(&mut self, task: impl FnOnce(&mut Checker) + 'static) {
        self.delayed.push(task);
    }

    /// Run queued tasks, including those they queue, until none are left.
    pub fn process_delayed(&mut self) {
        let _span = tracing::debug_span!("process_delayed", pending = self.delayed.len()).entered();
        while let Some(task) = self.delayed.pop() {
            task(self);
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn finish(mut self) -> CheckOutput {
        self.process_delayed();
        CheckOutput {
            pool: self.pool,
            diagnostics: self.diagnostics.flush(),
            defs: self.defs,
        }
    }

    // === Reporting ===

    pub(crate) fn report(&mut self, err: &TypeError, span: Span) {
        self.diagnostics.add(err.to_diagnostic(span));
    }

    fn internal_error(&mut self, violation: InvariantViolation, span: Span) {
        tracing::error!(%violation, %span, "invariant violation during checking");
        self.report(&TypeError::Internal(violation), span);
    }

    // === Completion ===

    /// Complete interface `idx`, reporting into this checker. Idempotent.
    pub fn complete_interface(&mut self, span: Span, idx: Idx) {
        let mut sink = Sink::Present(Reporter {
            config: &self.config,
            diagnostics: &mut self.diagnostics,
            delayed: &mut self.delayed,
        });
        if let Err(violation) = complete_interface(&mut self.pool, &mut sink, span, idx) {
            self.internal_error(violation, span);
        }
    }

    /// Structural identity; a violation is reported and counts as "not
    /// identical".
    pub fn identical(&mut self, x: Idx, y: Idx) -> bool {
        match identical(&mut self.pool, x, y) {
            Ok(same) => same,
            Err(violation) => {
                self.internal_error(violation, Span::DUMMY);
                false
            }
        }
    }

    /// Delayed check for a method inherited twice into one interface.
    ///
    /// `pos` is where `m` was embedded; `other_pos` is where `other` was
    /// added first.
    pub(crate) fn check_overlapping_method(&mut self, m: MethodId, other: MethodId, pos: Span, other_pos: Span) {
        let (sm, so) = (self.pool.method(m).sig, self.pool.method(other).sig);
        if self.allows(Feature::OverlappingEmbeds) && self.identical(sm, so) {
            return;
        }
        let name = self.pool.name_str(self.pool.method(m).name).to_string();
        self.report(
            &TypeError::DuplicateMethod {
                name,
                other: other_pos,
            },
            pos,
        );
    }
}
