//! Core outcome and fault types
//!
//! This module contains the fundamental components:
//! - [`outcome`](crate::core::outcome) - The [`Outcome`](crate::Outcome) container and its combinators
//! - [`error`](crate::core::error) - The [`Fault`](crate::Fault) structured error descriptor
//! - [`ext`](crate::core::ext) - Extension traits bridging `std::result::Result`
//! - [`traits`](crate::core::traits) - Common traits for fault handling
//! - [`conversion`](crate::core::conversion) - Fault conversion utilities

pub mod conversion;
pub mod error;
pub mod ext;
pub mod outcome;
pub mod traits;

// Re-export core types
pub use conversion::{fault_from_display, fault_from_std};
pub use error::{Chain, Fault};
pub use ext::{Fallible, FallibleExt, IntoFallible, OutcomeExt};
pub use outcome::Outcome;
pub use traits::{FaultClassification, FaultCode, IntoFault};
