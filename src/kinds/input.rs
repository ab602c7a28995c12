//! Input fault kinds
//!
//! Faults caused by the data handed to an operation: unparseable text,
//! values that fail validation, missing lookups. These point at the caller's
//! input rather than at the library or its environment.

#![allow(missing_docs)] // Enum variant fields are self-explanatory

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::traits::FaultCode;
use crate::kinds::codes;

/// Input-side fault variants
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputFault {
    /// Text or bytes could not be parsed into the expected shape
    #[error("Parse failure: {message}")]
    Parse { message: String },

    /// A parsed value violated a domain rule
    #[error("Validation failure: {message}")]
    Validation { message: String },

    /// A lookup produced nothing
    #[error("Not found: {what}")]
    NotFound { what: String },

    /// An argument was outside its accepted range or form
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },
}

impl FaultCode for InputFault {
    fn code(&self) -> &str {
        match self {
            InputFault::Parse { .. } => codes::PARSE_FAULT,
            InputFault::Validation { .. } => codes::VALIDATION_FAULT,
            InputFault::NotFound { .. } => codes::NOT_FOUND_FAULT,
            InputFault::InvalidArgument { .. } => codes::INVALID_ARGUMENT_FAULT,
        }
    }

    fn category(&self) -> &'static str {
        codes::CATEGORY_INPUT
    }
}

impl InputFault {
    /// Create a parse fault
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a validation fault
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found fault
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Create an invalid argument fault
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
