//! The [`Outcome`] container and its combinator algebra
//!
//! [`Outcome<T, E>`] holds exactly one of a success value or a failure
//! descriptor. There is no third state and no in-place mutation: every
//! transformation consumes the outcome and produces a new one, so ownership
//! of the payload moves through a pipeline the same way the pipeline's data
//! does.
//!
//! The combinators are total over the modeled failure channel. The only
//! operations that can abort the program are the extraction methods
//! ([`unwrap`](Outcome::unwrap), [`expect`](Outcome::expect) and their
//! failure-side mirrors), which exist for trust boundaries where a failure
//! is a programming error rather than data.
//!
//! # Quick start
//!
//! ```rust
//! use commons_result::Outcome;
//!
//! fn parse(text: &str) -> Outcome<i64, String> {
//!     match text.parse() {
//!         Ok(n) => Outcome::success(n),
//!         Err(_) => Outcome::failure(format!("not a number: {text}")),
//!     }
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Outcome::success(42));
//!
//! let failed = parse("abc").map(|n| n * 2);
//! assert!(failed.is_failure());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// The outcome of a fallible computation: a success value or a failure
/// descriptor, never both, never neither
///
/// Two outcomes are equal iff they hold the same variant with an equal
/// payload. `Clone`, `Copy`, `Hash` and the serde derives apply whenever the
/// payload types support them.
#[must_use = "an Outcome carries a possible failure that should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    /// The computation produced a value
    Success(T),
    /// The computation failed with a descriptor
    Failure(E),
}

use Outcome::{Failure, Success};

impl<T, E> Outcome<T, E> {
    // =============================================================================
    // Constructors
    // =============================================================================

    /// Construct a success outcome
    #[inline]
    pub fn success(value: T) -> Self {
        Success(value)
    }

    /// Construct a failure outcome
    #[inline]
    pub fn failure(error: E) -> Self {
        Failure(error)
    }

    /// Run a `Result`-returning computation and capture it as an outcome
    ///
    /// ```rust
    /// use commons_result::Outcome;
    ///
    /// let outcome: Outcome<i32, std::num::ParseIntError> =
    ///     Outcome::from_fn(|| "8".parse());
    /// assert_eq!(outcome, Outcome::success(8));
    /// ```
    #[inline]
    pub fn from_fn(f: impl FnOnce() -> std::result::Result<T, E>) -> Self {
        Self::from(f())
    }

    /// Transpose an `Option` into an outcome, producing the failure lazily
    ///
    /// ```rust
    /// use commons_result::Outcome;
    ///
    /// let present = Outcome::from_option(Some(8), || "missing");
    /// assert_eq!(present, Outcome::success(8));
    ///
    /// let absent: Outcome<i32, &str> = Outcome::from_option(None, || "missing");
    /// assert_eq!(absent, Outcome::failure("missing"));
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>, f: impl FnOnce() -> E) -> Self {
        match option {
            Some(value) => Success(value),
            None => Failure(f()),
        }
    }

    // =============================================================================
    // Variant Tests
    // =============================================================================

    /// Check whether this outcome holds a success value
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Check whether this outcome holds a failure descriptor
    #[inline]
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    // =============================================================================
    // Borrowing Adapters
    // =============================================================================

    /// Borrow the payload as `Outcome<&T, &E>`
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Mutably borrow the payload as `Outcome<&mut T, &mut E>`
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Borrow the success value, if any
    #[inline]
    #[must_use]
    pub fn as_success(&self) -> Option<&T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Borrow the failure descriptor, if any
    #[inline]
    #[must_use]
    pub fn as_failure(&self) -> Option<&E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    /// Take the success value, discarding a failure
    #[inline]
    #[must_use]
    pub fn into_success(self) -> Option<T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Take the failure descriptor, discarding a success
    #[inline]
    #[must_use]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    // =============================================================================
    // Combinators
    // =============================================================================

    /// Transform the success value; pass a failure through untouched
    ///
    /// `f` is never invoked on a failure.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Transform the failure descriptor; pass a success through untouched
    ///
    /// `g` is never invoked on a success.
    #[inline]
    pub fn map_failure<F>(self, g: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(g(error)),
        }
    }

    /// Transform the failure descriptor only when it matches a predicate
    ///
    /// ```rust
    /// use commons_result::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::failure("timeout".to_string());
    /// let tagged = outcome.map_failure_if(
    ///     |e| e.contains("timeout"),
    ///     |e| format!("transient: {e}"),
    /// );
    /// assert_eq!(tagged, Outcome::failure("transient: timeout".to_string()));
    /// ```
    #[inline]
    pub fn map_failure_if(
        self,
        predicate: impl FnOnce(&E) -> bool,
        g: impl FnOnce(E) -> E,
    ) -> Self {
        match self {
            Failure(error) if predicate(&error) => Failure(g(error)),
            other => other,
        }
    }

    /// Chain a dependent fallible step
    ///
    /// On success, returns `f(value)` directly with no extra wrapping. On
    /// failure, short-circuits: the original failure is returned and `f` is
    /// never invoked, so the first failure in a pipeline is the one that
    /// propagates.
    ///
    /// ```rust
    /// use commons_result::Outcome;
    ///
    /// fn positive(n: i64) -> Outcome<i64, &'static str> {
    ///     if n > 0 { Outcome::success(n) } else { Outcome::failure("non-positive") }
    /// }
    ///
    /// assert_eq!(Outcome::success(42).and_then(positive), Outcome::success(42));
    /// assert_eq!(Outcome::success(-1).and_then(positive), Outcome::failure("non-positive"));
    /// assert_eq!(
    ///     Outcome::<i64, _>::failure("earlier").and_then(positive),
    ///     Outcome::failure("earlier"),
    /// );
    /// ```
    #[inline]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Success(value) => f(value),
            Failure(error) => Failure(error),
        }
    }

    /// Chain a fallback fallible step
    ///
    /// On failure, returns `f(error)` directly. On success, passes the
    /// success through and `f` is never invoked.
    #[inline]
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => f(error),
        }
    }

    /// Convert a failure into a success value
    ///
    /// The returned outcome is always a success: a failure is replaced by
    /// `f(error)`, a success is untouched.
    #[inline]
    pub fn recover(self, f: impl FnOnce(E) -> T) -> Self {
        match self {
            Success(value) => Success(value),
            Failure(error) => Success(f(error)),
        }
    }

    // =============================================================================
    // Extraction
    // =============================================================================

    /// Return the success value, or `default` on failure
    ///
    /// `default` is evaluated eagerly; for an expensive fallback use
    /// [`value_or_else`](Outcome::value_or_else).
    #[inline]
    #[must_use]
    pub fn value_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// Return the success value, or compute a fallback from the failure
    #[inline]
    #[must_use]
    pub fn value_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            Success(value) => value,
            Failure(error) => f(error),
        }
    }

    /// Eliminate the outcome by handling both variants
    ///
    /// Exactly one of the two handlers runs. This is the recommended way to
    /// leave the outcome domain for ordinary values.
    ///
    /// ```rust
    /// use commons_result::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(8);
    /// let text = outcome.fold(
    ///     |n| format!("got {n}"),
    ///     |e| format!("failed: {e}"),
    /// );
    /// assert_eq!(text, "got 8");
    /// ```
    #[inline]
    pub fn fold<R>(self, on_success: impl FnOnce(T) -> R, on_failure: impl FnOnce(E) -> R) -> R {
        match self {
            Success(value) => on_success(value),
            Failure(error) => on_failure(error),
        }
    }

    /// Convert into a plain [`std::result::Result`]
    #[inline]
    pub fn into_result(self) -> std::result::Result<T, E> {
        self.into()
    }
}

impl<T, E: fmt::Debug> Outcome<T, E> {
    /// Return the success value, or abort on failure
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure. This is the misuse-fault channel
    /// (a programming error), distinct from the modeled failure channel `E`:
    /// use it only at trust boundaries where a failure cannot legitimately
    /// occur, and never catch it as if it were domain failure.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Success(value) => value,
            Failure(error) => {
                panic!("called `Outcome::unwrap()` on a `Failure` value: {error:?}")
            }
        }
    }

    /// Return the success value, or abort on failure with `msg`
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure, with `msg` and the failure
    /// descriptor in the message. Same misuse-fault caveats as
    /// [`unwrap`](Outcome::unwrap).
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Success(value) => value,
            Failure(error) => panic!("{msg}: {error:?}"),
        }
    }
}

impl<T: fmt::Debug, E> Outcome<T, E> {
    /// Return the failure descriptor, or abort on success
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success. Mirror image of
    /// [`unwrap`](Outcome::unwrap), with the same misuse-fault caveats.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E {
        match self {
            Success(value) => {
                panic!("called `Outcome::unwrap_failure()` on a `Success` value: {value:?}")
            }
            Failure(error) => error,
        }
    }

    /// Return the failure descriptor, or abort on success with `msg`
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    #[inline]
    #[track_caller]
    pub fn expect_failure(self, msg: &str) -> E {
        match self {
            Success(value) => panic!("{msg}: {value:?}"),
            Failure(error) => error,
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for std::result::Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}
