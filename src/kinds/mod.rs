//! Fault kind definitions organized by category
//!
//! ## Fault categories
//!
//! ### Input faults
//! - [`InputFault`] - parse failures, validation failures, missing lookups,
//!   bad arguments
//! - Point at the data the caller supplied; fixing them means fixing the
//!   input
//!
//! ### Internal faults
//! - [`InternalFault`] - conversion failures, wrapped I/O failures,
//!   unsupported operations, foreign faults with their own codes
//! - Point below the caller's input
//!
//! ## Design principles
//!
//! 1. **Clear categorization**: kinds grouped by who has to act on them
//! 2. **Future-proof**: enums are `#[non_exhaustive]`
//! 3. **Stable codes**: every kind maps to a code in [`codes`] for
//!    programmatic handling
//!
//! ## Usage
//!
//! ```rust
//! use commons_result::Fault;
//!
//! let fault = Fault::parse("expected a digit");
//! assert_eq!(fault.code(), "PARSE_FAULT");
//! assert!(fault.is_input_fault());
//!
//! let fault = Fault::io("disk full");
//! assert!(fault.is_internal_fault());
//! ```

pub mod codes;
pub mod input;
pub mod internal;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use input::InputFault;
pub use internal::InternalFault;

use crate::core::traits::{FaultClassification, FaultCode};

/// Fault kind enum categorizing every shipped fault
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaultKind {
    /// Faults caused by caller-supplied data
    #[error(transparent)]
    Input(#[from] InputFault),

    /// Faults below the caller's input
    #[error(transparent)]
    Internal(#[from] InternalFault),
}

impl FaultClassification for FaultKind {
    fn is_input_fault(&self) -> bool {
        matches!(self, FaultKind::Input(_))
    }

    fn is_internal_fault(&self) -> bool {
        matches!(self, FaultKind::Internal(_))
    }
}

impl FaultCode for FaultKind {
    fn code(&self) -> &str {
        match self {
            FaultKind::Input(f) => f.code(),
            FaultKind::Internal(f) => f.code(),
        }
    }

    fn category(&self) -> &'static str {
        match self {
            FaultKind::Input(_) => codes::CATEGORY_INPUT,
            FaultKind::Internal(_) => codes::CATEGORY_INTERNAL,
        }
    }
}
