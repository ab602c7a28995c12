//! Common traits for fault handling

use crate::core::error::Fault;

/// Trait for types that can be converted into a [`Fault`]
pub trait IntoFault {
    /// Convert this error into a [`Fault`]
    fn into_fault(self) -> Fault;
}

/// Trait for getting fault codes
pub trait FaultCode {
    /// Get the stable code for programmatic handling
    fn code(&self) -> &str;

    /// Get the fault category
    fn category(&self) -> &'static str {
        "UNKNOWN"
    }
}

/// Trait for fault classification
pub trait FaultClassification {
    /// Check if this fault points at caller-supplied data
    fn is_input_fault(&self) -> bool;

    /// Check if this fault originates below the caller's input
    fn is_internal_fault(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_fault_then_classify() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe");
        let fault = io_error.into_fault();

        assert!(fault.is_internal_fault());
        assert_eq!(fault.code(), "IO_FAULT");
    }

    #[test]
    fn test_classification_is_exclusive() {
        let fault = Fault::validation("too short");

        assert!(fault.is_input_fault());
        assert!(!fault.is_internal_fault());
    }
}
