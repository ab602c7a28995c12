//! The [`Fault`] structured error descriptor
//!
//! [`Fault`] is the conventional error payload for [`Outcome`](crate::Outcome):
//! a stable code (via [`FaultKind`]), a human-readable message, and an
//! optional cause chain. Callers are free to use any `E` they like; `Fault`
//! is what the crate's own conversions and macros produce.

// Standard library
use std::borrow::Cow;
use std::fmt;

// External dependencies
use serde::{Deserialize, Serialize};

use crate::core::traits::{FaultClassification, FaultCode};
use crate::kinds::{FaultKind, InputFault, InternalFault};

/// Structured error descriptor: code + message + optional cause chain
///
/// Layout follows the same choices as the rest of the crate's value types:
/// - `Box<FaultKind>`: keeps the stack footprint small and moves cheap
/// - `Cow<'static, str>` message: zero allocation for static messages
/// - `Option<Box<Fault>>` cause: lazy allocation, chains only pay when used
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fault {
    /// The specific kind of fault (boxed for a smaller stack footprint)
    pub kind: Box<FaultKind>,
    /// Human-readable message (zero-alloc for static strings)
    pub message: Cow<'static, str>,
    /// The fault this one wraps, if any
    pub cause: Option<Box<Fault>>,
}

impl Fault {
    /// Create a new [`Fault`] with the given kind
    ///
    /// The message is derived from the kind's display form.
    #[must_use]
    #[inline]
    pub fn new(kind: FaultKind) -> Self {
        let message = Cow::Owned(kind.to_string());

        Self {
            kind: Box::new(kind),
            message,
            cause: None,
        }
    }

    /// Create a new fault with a static message
    ///
    /// Avoids the message allocation of [`Fault::new`].
    #[must_use]
    #[inline]
    pub fn new_static(kind: FaultKind, message: &'static str) -> Self {
        Self {
            kind: Box::new(kind),
            message: Cow::Borrowed(message),
            cause: None,
        }
    }

    /// Wrap this fault under a new message, keeping it as the cause
    ///
    /// The wrapper keeps the wrapped fault's kind, so codes stay stable
    /// through wrapping.
    #[must_use]
    pub fn wrap(self, message: impl Into<String>) -> Self {
        Self {
            kind: self.kind.clone(),
            message: Cow::Owned(message.into()),
            cause: Some(Box::new(self)),
        }
    }

    /// Attach a cause to this fault
    #[must_use]
    pub fn caused_by(mut self, cause: Fault) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Append details to the message
    #[must_use]
    pub fn with_details(mut self, details: &str) -> Self {
        self.message = Cow::Owned(format!("{} - {}", self.message, details));
        self
    }

    /// Get the stable fault code
    ///
    /// Hot path: frequently accessed for routing and telemetry
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        self.kind.code()
    }

    /// Get the fault category
    #[inline]
    #[must_use]
    pub fn category(&self) -> &'static str {
        self.kind.category()
    }

    /// Get the human-readable message
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the wrapped fault, if any
    #[inline]
    #[must_use]
    pub fn cause(&self) -> Option<&Fault> {
        self.cause.as_deref()
    }

    /// Check if this fault points at caller-supplied data
    #[inline]
    #[must_use]
    pub fn is_input_fault(&self) -> bool {
        self.kind.is_input_fault()
    }

    /// Check if this fault originates below the caller's input
    #[inline]
    #[must_use]
    pub fn is_internal_fault(&self) -> bool {
        self.kind.is_internal_fault()
    }

    /// Iterate over this fault and its causes, outermost first
    #[must_use]
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    // =============================================================================
    // Convenience Constructor Methods
    // =============================================================================

    /// Create a parse fault
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(FaultKind::Input(InputFault::parse(message)))
    }

    /// Create a validation fault
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(FaultKind::Input(InputFault::validation(message)))
    }

    /// Create a not found fault
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::new(FaultKind::Input(InputFault::not_found(what)))
    }

    /// Create an invalid argument fault
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(FaultKind::Input(InputFault::invalid_argument(name, reason)))
    }

    /// Create a conversion fault
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::new(FaultKind::Internal(InternalFault::conversion(message)))
    }

    /// Create an I/O fault
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(FaultKind::Internal(InternalFault::io(message)))
    }

    /// Create an unsupported operation fault
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::new(FaultKind::Internal(InternalFault::unsupported(operation)))
    }

    /// Create a fault with a caller-supplied code
    pub fn other(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(FaultKind::Internal(InternalFault::other(code, message)))
    }
}

impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|c| c as &(dyn std::error::Error + 'static))
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message)?;

        if let Some(ref cause) = self.cause {
            write!(f, " (caused by {})", cause)?;
        }

        Ok(())
    }
}

/// Iterator over a fault's cause chain, outermost fault first
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a Fault>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Fault;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}
