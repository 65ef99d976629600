//! Diagnostics for interface resolution.
//!
//! - Error codes for searchability
//! - A primary span (where it went wrong)
//! - Secondary labels (the other declaration in a duplicate pair)
//! - A queue that collects, limits, and orders diagnostics
//!
//! [`ErrorGuaranteed`] is proof that at least one error reached the queue.

mod diagnostic;
mod error_code;
mod guarantee;
pub mod queue;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
