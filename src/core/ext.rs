//! Extension traits bridging `std::result::Result` and [`Outcome`]

use crate::core::error::Fault;
use crate::core::outcome::Outcome;
use crate::core::traits::IntoFault;

/// Outcome type alias for operations that fail with a [`Fault`]
pub type Fallible<T> = Outcome<T, Fault>;

/// Extension trait for converting plain `Result`s into [`Outcome`]s
pub trait OutcomeExt<T, E> {
    /// Convert into an [`Outcome`] without touching the error type
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> OutcomeExt<T, E> for std::result::Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }
}

/// Extension trait for converting `Result`s with foreign errors into
/// [`Fallible`]s
pub trait IntoFallible<T> {
    /// Convert the error into a [`Fault`] and the result into a [`Fallible`]
    fn fault(self) -> Fallible<T>;

    /// Convert like [`fault`](IntoFallible::fault), wrapping the fault under
    /// a context message
    fn fault_context(self, context: impl Into<String>) -> Fallible<T>;
}

impl<T, E> IntoFallible<T> for std::result::Result<T, E>
where
    E: IntoFault,
{
    fn fault(self) -> Fallible<T> {
        match self {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(error.into_fault()),
        }
    }

    fn fault_context(self, context: impl Into<String>) -> Fallible<T> {
        match self {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(error.into_fault().wrap(context)),
        }
    }
}

/// Extension trait specifically for [`Fallible`] outcomes
pub trait FallibleExt<T> {
    /// Wrap the fault under a context message if the outcome is a failure
    fn context(self, context: impl Into<String>) -> Fallible<T>;

    /// Append details to the fault message if the outcome is a failure
    fn with_details(self, details: impl Into<String>) -> Fallible<T>;
}

impl<T> FallibleExt<T> for Fallible<T> {
    fn context(self, context: impl Into<String>) -> Fallible<T> {
        self.map_failure(|fault| fault.wrap(context))
    }

    fn with_details(self, details: impl Into<String>) -> Fallible<T> {
        self.map_failure(|fault| fault.with_details(&details.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_into_outcome_preserves_error_type() {
        let result: std::result::Result<i32, String> = Err("boom".to_string());
        let outcome = result.into_outcome();

        assert_eq!(outcome, Outcome::failure("boom".to_string()));
    }

    #[test]
    fn test_fault_converts_foreign_error() {
        let result: std::result::Result<i32, std::num::ParseIntError> = "abc".parse();
        let outcome = result.fault();

        assert!(outcome.is_failure());
        let fault = outcome.unwrap_failure();
        assert_eq!(fault.code(), "PARSE_FAULT");
    }

    #[test]
    fn test_fault_context_wraps() {
        let result: std::result::Result<i32, std::num::ParseIntError> = "abc".parse();
        let outcome = result.fault_context("reading port from config");

        let fault = outcome.unwrap_failure();
        assert_eq!(fault.message(), "reading port from config");
        assert!(fault.cause().is_some());
    }

    #[test]
    fn test_context_on_fallible() {
        let outcome: Fallible<i32> = Outcome::failure(Fault::io("disk full"));
        let fault = outcome.context("writing snapshot").unwrap_failure();

        assert_eq!(fault.message(), "writing snapshot");
        assert_eq!(fault.cause().map(Fault::code), Some("IO_FAULT"));
    }

    #[test]
    fn test_context_leaves_success_untouched() {
        let outcome: Fallible<i32> = Outcome::success(8);
        assert_eq!(outcome.context("never used"), Outcome::success(8));
    }

    #[test]
    fn test_with_details_appends() {
        let outcome: Fallible<i32> = Outcome::failure(Fault::validation("out of range"));
        let fault = outcome.with_details("limit is 100").unwrap_failure();

        assert_eq!(fault.message(), "Validation failure: out of range - limit is 100");
    }
}
