//! # commons-result
//!
//! A typed, composable alternative to unwinding for expressing
//! success/failure outcomes.
//!
//! The crate models exactly one concern: the outcome of an operation that
//! can succeed with a value or fail with a structured error. [`Outcome`]
//! holds one of the two; a fixed combinator algebra transforms, chains,
//! recovers and extracts without nested conditionals, and the first failure
//! in a pipeline is the one that propagates.
//!
//! ## Quick Start
//!
//! ```rust
//! use commons_result::prelude::*;
//!
//! fn parse(text: &str) -> Fallible<i64> {
//!     text.parse::<i64>().fault()
//! }
//!
//! fn positive(n: i64) -> Fallible<i64> {
//!     ensure!(n > 0, validation_fault!("non-positive: {}", n));
//!     Outcome::success(n)
//! }
//!
//! let answer = parse("42").and_then(positive).value_or(0);
//! assert_eq!(answer, 42);
//!
//! let fallback = parse("abc").and_then(positive).value_or(0);
//! assert_eq!(fallback, 0);
//! ```
//!
//! ## Two failure channels
//!
//! - **Modeled failure** - anything representable as the `E` payload,
//!   propagated through [`Outcome::Failure`] and the short-circuiting
//!   combinators. The crate never unwinds for these.
//! - **Misuse fault** - extracting against the variant's precondition
//!   ([`Outcome::unwrap`] on a failure, [`Outcome::unwrap_failure`] on a
//!   success). These panic: they are programmer errors, not data, and must
//!   not be caught and retried as domain failures.
//!
//! ## The `Fault` descriptor
//!
//! `E` is caller-chosen. For callers who want a ready-made structured
//! descriptor, [`Fault`] carries a stable code, a message and an optional
//! cause chain, with conversions from common foreign error types.

#![warn(missing_docs)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::module_name_repetitions)]

pub mod core;
pub mod kinds;

// === Ergonomic Macros ===
pub mod macros;

// === Public API Exports ===

/// The success/failure container
pub use crate::core::Outcome;

/// Outcome alias for operations failing with a [`Fault`]
pub use crate::core::Fallible;

/// Structured error descriptor: code + message + cause chain
pub use crate::core::Fault;

/// Iterator over a fault's cause chain
pub use crate::core::Chain;

/// Fault categorization (input/internal)
pub use kinds::FaultKind;

/// Extension traits for `std::result::Result` interop
pub use crate::core::{FallibleExt, IntoFallible, OutcomeExt};

/// Conversion traits and helpers for foreign errors
pub use crate::core::{FaultClassification, FaultCode, IntoFault, fault_from_display, fault_from_std};

/// Convenient prelude with everything you need
pub mod prelude {
    pub use super::{
        Fallible, FallibleExt, Fault, FaultClassification, FaultCode, FaultKind, IntoFallible,
        IntoFault, Outcome, OutcomeExt,
    };

    // Re-export commonly used macros for convenience
    pub use crate::{
        conversion_fault, ensure, fail, not_found_fault, parse_fault, validation_fault,
    };
}
