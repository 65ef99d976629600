//! Interface closure resolution.
//!
//! An interface lists explicit methods and embedded elements (other
//! interfaces, unions of type terms, type parameters). This crate computes
//! its *closure*: the full method set it guarantees and the set of types it
//! allows.
//!
//! - [`Pool`] stores every type, addressed by [`Idx`]
//! - [`Checker`] ingests declarations and completes interfaces through its
//!   delayed queue, reporting diagnostics
//! - [`query`] completes interfaces on demand with no diagnostics sink
//!
//! # Completion
//!
//! Completion is idempotent and cycle-safe. Explicit methods are added
//! first, then each embedded element in canonical order. Duplicate method
//! slots are errors when explicit; inherited duplicates are errors when
//! their signatures differ or overlapping embeds are not allowed. Type sets
//! of embedded elements are intersected, starting from "every type".

mod check;
mod complete;
mod config;
mod error;
mod identity;
mod idx;
mod interface;
mod item;
mod method;
pub mod order;
mod pool;
pub mod query;
mod tag;
mod type_set;

#[cfg(test)]
mod test_helpers;

use std::sync::Once;

pub use check::{CheckOutput, Checker};
pub use config::{CheckerConfig, Feature, LangVersion, ParseVersionError};
pub use error::{InvariantViolation, TypeError};
pub use identity::identical;
pub use idx::Idx;
pub use interface::{Closure, Completion, Embedded, InterfaceData};
pub use method::{is_exported, Method, MethodId, MethodKey};
pub use pool::{NamedData, Pool, SignatureData, TypeParamData};
pub use query::{implements, missing_method, MissingMethod};
pub use tag::Tag;
pub use type_set::{Term, TypeSet};

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Idx, MethodId, Term};
    iface_ir::static_assert_size!(Idx, 4);
    iface_ir::static_assert_size!(MethodId, 4);
    iface_ir::static_assert_size!(Term, 8);
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
