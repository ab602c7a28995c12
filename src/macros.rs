//! Convenient fault and control-flow macros
//!
//! Constructor macros build [`Fault`](crate::Fault)s with formatted messages;
//! [`ensure!`](crate::ensure) and [`fail!`](crate::fail) give early returns
//! in functions returning [`Outcome`](crate::Outcome).

/// Create a parse fault with a formatted message
///
/// # Examples
///
/// ```rust
/// use commons_result::parse_fault;
///
/// let fault = parse_fault!("expected a digit");
/// let fault = parse_fault!("expected a digit, got '{}'", "x");
/// ```
#[macro_export]
macro_rules! parse_fault {
    ($msg:literal) => {
        $crate::Fault::new_static(
            $crate::FaultKind::Input($crate::kinds::InputFault::Parse {
                message: $msg.into(),
            }),
            $msg,
        )
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Fault::parse(format!($fmt, $($arg)*))
    };
}

/// Create a validation fault with a formatted message
///
/// # Examples
///
/// ```rust
/// use commons_result::validation_fault;
///
/// let fault = validation_fault!("must be positive");
/// let fault = validation_fault!("{} must be positive, got {}", "count", -1);
/// ```
#[macro_export]
macro_rules! validation_fault {
    ($msg:literal) => {
        $crate::Fault::new_static(
            $crate::FaultKind::Input($crate::kinds::InputFault::Validation {
                message: $msg.into(),
            }),
            $msg,
        )
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Fault::validation(format!($fmt, $($arg)*))
    };
}

/// Create a not found fault with a formatted message
///
/// # Examples
///
/// ```rust
/// use commons_result::not_found_fault;
///
/// let fault = not_found_fault!("user 42");
/// let fault = not_found_fault!("user {}", 42);
/// ```
#[macro_export]
macro_rules! not_found_fault {
    ($msg:literal) => {
        $crate::Fault::new_static(
            $crate::FaultKind::Input($crate::kinds::InputFault::NotFound {
                what: $msg.into(),
            }),
            $msg,
        )
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Fault::not_found(format!($fmt, $($arg)*))
    };
}

/// Create a conversion fault with a formatted message
///
/// # Examples
///
/// ```rust
/// use commons_result::conversion_fault;
///
/// let fault = conversion_fault!("value does not fit in u8");
/// let fault = conversion_fault!("{} does not fit in u8", 300);
/// ```
#[macro_export]
macro_rules! conversion_fault {
    ($msg:literal) => {
        $crate::Fault::new_static(
            $crate::FaultKind::Internal($crate::kinds::InternalFault::Conversion {
                message: $msg.into(),
            }),
            $msg,
        )
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Fault::conversion(format!($fmt, $($arg)*))
    };
}

/// Return a failure outcome early
///
/// # Examples
///
/// ```rust
/// use commons_result::{fail, validation_fault, Fallible, Outcome};
///
/// fn check(age: u32) -> Fallible<u32> {
///     if age > 120 {
///         fail!(validation_fault!("age {} out of range", age));
///     }
///     Outcome::success(age)
/// }
///
/// assert!(check(30).is_success());
/// assert!(check(200).is_failure());
/// ```
#[macro_export]
macro_rules! fail {
    ($err:expr) => {
        return $crate::Outcome::failure($err)
    };
}

/// Return a failure outcome early unless a condition holds
///
/// # Examples
///
/// ```rust
/// use commons_result::{ensure, validation_fault, Fallible, Outcome};
///
/// fn validate_age(age: u32) -> Fallible<u32> {
///     ensure!(age >= 18, validation_fault!("must be 18+"));
///     ensure!(age <= 120, validation_fault!("age {} out of range", age));
///     Outcome::success(age)
/// }
///
/// assert!(validate_age(30).is_success());
/// assert!(validate_age(12).is_failure());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return $crate::Outcome::failure($err);
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{
        Fallible, Outcome, conversion_fault, ensure, fail, not_found_fault, parse_fault,
        validation_fault,
    };

    #[test]
    fn test_constructor_macros_set_codes() {
        assert_eq!(parse_fault!("bad digit").code(), "PARSE_FAULT");
        assert_eq!(validation_fault!("too short").code(), "VALIDATION_FAULT");
        assert_eq!(not_found_fault!("user 42").code(), "NOT_FOUND_FAULT");
        assert_eq!(conversion_fault!("overflow").code(), "CONVERSION_FAULT");
    }

    #[test]
    fn test_constructor_macros_format() {
        let fault = validation_fault!("{} must be positive, got {}", "count", -1);
        assert_eq!(fault.message(), "Validation failure: count must be positive, got -1");
    }

    #[test]
    fn test_ensure_and_fail() {
        fn classify(n: i64) -> Fallible<&'static str> {
            ensure!(n != 0, validation_fault!("zero is unclassifiable"));
            if n < 0 {
                fail!(validation_fault!("negative: {}", n));
            }
            Outcome::success("positive")
        }

        assert_eq!(classify(8), Outcome::success("positive"));
        assert!(classify(0).is_failure());
        assert_eq!(
            classify(-3).unwrap_failure().message(),
            "Validation failure: negative: -3"
        );
    }
}
