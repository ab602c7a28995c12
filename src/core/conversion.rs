//! Fault conversion utilities
//!
//! Implementations of [`IntoFault`] and `From` for common foreign error
//! types, so callers can move from `std::result::Result` pipelines into
//! [`Fallible`](crate::Fallible) ones without hand-written glue.

use crate::core::error::Fault;
use crate::core::traits::IntoFault;

// =============================================================================
// Standard Library Error Conversions
// =============================================================================

impl IntoFault for std::io::Error {
    fn into_fault(self) -> Fault {
        match self.kind() {
            std::io::ErrorKind::NotFound => Fault::not_found(self.to_string()),
            _ => Fault::io(self.to_string()),
        }
    }
}

impl IntoFault for std::fmt::Error {
    fn into_fault(self) -> Fault {
        Fault::io("formatting failure")
    }
}

impl IntoFault for std::num::ParseIntError {
    fn into_fault(self) -> Fault {
        Fault::parse(format!("integer parsing: {self}"))
    }
}

impl IntoFault for std::num::ParseFloatError {
    fn into_fault(self) -> Fault {
        Fault::parse(format!("float parsing: {self}"))
    }
}

impl IntoFault for std::str::Utf8Error {
    fn into_fault(self) -> Fault {
        Fault::conversion(format!("UTF-8: {self}"))
    }
}

impl IntoFault for std::string::FromUtf8Error {
    fn into_fault(self) -> Fault {
        Fault::conversion(format!("UTF-8: {self}"))
    }
}

// =============================================================================
// Third-party Crate Error Conversions
// =============================================================================

impl IntoFault for serde_json::Error {
    fn into_fault(self) -> Fault {
        match self.classify() {
            serde_json::error::Category::Io => Fault::io(format!("JSON I/O: {self}")),
            _ => Fault::parse(format!("JSON: {self}")),
        }
    }
}

// =============================================================================
// String Conversions
// =============================================================================

impl IntoFault for &str {
    fn into_fault(self) -> Fault {
        Fault::validation(self.to_string())
    }
}

impl IntoFault for String {
    fn into_fault(self) -> Fault {
        Fault::validation(self)
    }
}

// Self-conversion so generic bounds accept Fault itself
impl IntoFault for Fault {
    fn into_fault(self) -> Fault {
        self
    }
}

// =============================================================================
// From Implementations for Into<Fault> compatibility
// =============================================================================

impl From<std::io::Error> for Fault {
    fn from(error: std::io::Error) -> Self {
        error.into_fault()
    }
}

impl From<std::num::ParseIntError> for Fault {
    fn from(error: std::num::ParseIntError) -> Self {
        error.into_fault()
    }
}

impl From<std::num::ParseFloatError> for Fault {
    fn from(error: std::num::ParseFloatError) -> Self {
        error.into_fault()
    }
}

impl From<serde_json::Error> for Fault {
    fn from(error: serde_json::Error) -> Self {
        error.into_fault()
    }
}

impl From<&str> for Fault {
    fn from(error: &str) -> Self {
        error.into_fault()
    }
}

impl From<String> for Fault {
    fn from(error: String) -> Self {
        error.into_fault()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Convert any `Display` error into a [`Fault`]
pub fn fault_from_display<E: std::fmt::Display>(error: E) -> Fault {
    Fault::other("DISPLAY_FAULT", error.to_string())
}

/// Convert any [`std::error::Error`] into a [`Fault`], preserving its
/// source chain as a fault cause chain
pub fn fault_from_std<E: std::error::Error>(error: E) -> Fault {
    let mut messages = vec![error.to_string()];
    let mut source = error.source();
    while let Some(s) = source {
        messages.push(s.to_string());
        source = s.source();
    }

    // Build innermost-first so each fault wraps the one below it
    let mut fault: Option<Fault> = None;
    for message in messages.into_iter().rev() {
        let next = Fault::other("STD_FAULT", message);
        fault = Some(match fault {
            Some(cause) => next.caused_by(cause),
            None => next,
        });
    }
    fault.unwrap_or_else(|| Fault::other("STD_FAULT", "unknown failure"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let not_found = io::Error::new(io::ErrorKind::NotFound, "no such file");
        assert_eq!(not_found.into_fault().code(), "NOT_FOUND_FAULT");

        let pipe = io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe");
        assert_eq!(pipe.into_fault().code(), "IO_FAULT");
    }

    #[test]
    fn test_parse_error_conversions() {
        let int_error = "abc".parse::<i64>().unwrap_err();
        let fault = int_error.into_fault();
        assert_eq!(fault.code(), "PARSE_FAULT");
        assert!(fault.is_input_fault());

        let float_error = "abc".parse::<f64>().unwrap_err();
        assert_eq!(float_error.into_fault().code(), "PARSE_FAULT");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let fault = json_error.into_fault();

        assert_eq!(fault.code(), "PARSE_FAULT");
        assert!(fault.message().contains("JSON"));
    }

    #[test]
    fn test_string_conversions() {
        let fault: Fault = "bad value".into();
        assert_eq!(fault.code(), "VALIDATION_FAULT");
        assert!(fault.message().contains("bad value"));
    }

    #[test]
    fn test_display_helper() {
        let fault = fault_from_display("something odd");
        assert_eq!(fault.code(), "DISPLAY_FAULT");
        assert!(fault.message().contains("something odd"));
    }

    #[test]
    fn test_std_helper_preserves_source_chain() {
        #[derive(Debug)]
        struct Outer(io::Error);

        impl std::fmt::Display for Outer {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "snapshot write failed")
            }
        }

        impl std::error::Error for Outer {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                Some(&self.0)
            }
        }

        let error = Outer(io::Error::other("disk full"));
        let fault = fault_from_std(error);

        let messages: Vec<&str> = fault.chain().map(Fault::message).collect();
        assert_eq!(messages, vec!["snapshot write failed", "disk full"]);
    }

    #[test]
    fn test_question_mark_interop_via_from() {
        fn parse_port(text: &str) -> Result<u16, Fault> {
            let port: u16 = text.parse()?;
            Ok(port)
        }

        assert_eq!(parse_port("8080"), Ok(8080));
        let fault = parse_port("abc").unwrap_err();
        assert_eq!(fault.code(), "PARSE_FAULT");
    }
}
