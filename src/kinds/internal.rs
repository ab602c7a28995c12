//! Internal fault kinds
//!
//! Faults originating below the caller's input: failed conversions between
//! representations, I/O reported by a wrapped operation, unsupported
//! operations, and free-form faults carrying their own code.

#![allow(missing_docs)] // Enum variant fields are self-explanatory

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::traits::FaultCode;
use crate::kinds::codes;

/// Internal fault variants
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InternalFault {
    /// A value could not be converted into another representation
    #[error("Conversion failure: {message}")]
    Conversion { message: String },

    /// An underlying I/O operation reported a failure
    #[error("I/O failure: {message}")]
    Io { message: String },

    /// The requested operation is not supported
    #[error("Unsupported operation: {operation}")]
    Unsupported { operation: String },

    /// A fault from an external domain, carrying its own stable code
    #[error("{message}")]
    Other { code: String, message: String },
}

impl FaultCode for InternalFault {
    fn code(&self) -> &str {
        match self {
            InternalFault::Conversion { .. } => codes::CONVERSION_FAULT,
            InternalFault::Io { .. } => codes::IO_FAULT,
            InternalFault::Unsupported { .. } => codes::UNSUPPORTED_FAULT,
            InternalFault::Other { code, .. } => code,
        }
    }

    fn category(&self) -> &'static str {
        codes::CATEGORY_INTERNAL
    }
}

impl InternalFault {
    /// Create a conversion fault
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion {
            message: message.into(),
        }
    }

    /// Create an I/O fault
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create an unsupported operation fault
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::Unsupported {
            operation: operation.into(),
        }
    }

    /// Create a fault with a caller-supplied code
    pub fn other(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Other {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_fault_codes() {
        assert_eq!(InternalFault::conversion("i64 -> u8").code(), "CONVERSION_FAULT");
        assert_eq!(InternalFault::io("broken pipe").code(), "IO_FAULT");
        assert_eq!(InternalFault::unsupported("resize").code(), "UNSUPPORTED_FAULT");
        assert_eq!(
            InternalFault::other("QUOTA_FAULT", "quota exceeded").code(),
            "QUOTA_FAULT"
        );
    }

    #[test]
    fn test_internal_fault_display() {
        assert_eq!(
            InternalFault::io("connection reset").to_string(),
            "I/O failure: connection reset"
        );
        assert_eq!(
            InternalFault::other("QUOTA_FAULT", "quota exceeded").to_string(),
            "quota exceeded"
        );
    }

    #[test]
    fn test_internal_fault_category() {
        assert_eq!(InternalFault::io("x").category(), "INTERNAL");
    }
}
