//! `Try<S>`: an [`Outcome`] whose failure is always an [`Exception`].
//!
//! `Try` is where panicking or error-returning code enters the railway.
//! [`Try::catching`] runs a closure and records a panic as the failure;
//! [`Try::catching_result`] does the same and also records a returned `Err`.
//!
//! Steps come in two flavours, and the caller picks one per step:
//!
//! - `map` / `bind` let a panic inside the step unwind to the caller, exactly
//!   as if the container were not there.
//! - `map_catching` / `bind_catching` trap a panic inside the step and turn
//!   it into the failure, discarding the success that was being processed.
//!
//! # Example
//!
//! ```rust
//! use switchyard::Try;
//!
//! let parsed = Try::catching_result(|| "12".parse::<i32>())
//!     .map_catching(|n| 100 / (n - 12));
//!
//! assert!(parsed.is_failure());
//! assert!(parsed.into_failure().unwrap().is_panic());
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::exception::{capture, Exception};
use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::union::Union;

/// A success of `S`, or a captured [`Exception`].
#[derive(Clone)]
pub struct Try<S>(Outcome<Exception, S>);

impl<S> Try<S> {
    // ========== Constructors ==========

    /// Create a success.
    #[inline]
    pub fn success(value: S) -> Self {
        Try(Outcome::success(value))
    }

    /// Create a failure.
    #[inline]
    pub fn failure(exception: Exception) -> Self {
        Try(Outcome::failure(exception))
    }

    /// Run `f`; a normal return is the success, a panic the failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Try;
    ///
    /// let items: Vec<i32> = vec![];
    /// let first = Try::catching(|| items[0]);
    /// assert!(first.is_failure());
    /// ```
    pub fn catching<F>(f: F) -> Self
    where
        F: FnOnce() -> S,
    {
        match capture(f) {
            Ok(v) => Try::success(v),
            Err(ex) => Try::failure(ex),
        }
    }

    /// Run a fallible `f`; both a returned `Err` and a panic become the failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::num::ParseIntError;
    /// use switchyard::Try;
    ///
    /// let t = Try::catching_result(|| "nope".parse::<i32>());
    /// let ex = t.into_failure().unwrap();
    /// assert!(ex.downcast_ref::<ParseIntError>().is_some());
    /// ```
    pub fn catching_result<E, F>(f: F) -> Self
    where
        F: FnOnce() -> Result<S, E>,
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        match capture(f) {
            Ok(Ok(v)) => Try::success(v),
            Ok(Err(err)) => Try::failure(Exception::new(err)),
            Err(ex) => Try::failure(ex),
        }
    }

    /// Wrap an existing outcome.
    #[inline]
    pub fn from_outcome(outcome: Outcome<Exception, S>) -> Self {
        Try(outcome)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a success.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.0.is_success()
    }

    /// Returns `true` if this is a failure.
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.0.is_failure()
    }

    // ========== Folding ==========

    /// Reduce to a single value by handling both tracks.
    #[inline]
    pub fn fold<U, F, G>(self, on_error: F, on_success: G) -> U
    where
        F: FnOnce(Exception) -> U,
        G: FnOnce(S) -> U,
    {
        self.0.fold(on_error, on_success)
    }

    // ========== Non-catching Steps ==========

    /// Chain a step. A panic inside `f` propagates to the caller.
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(S) -> Try<U>,
    {
        self.fold(Try::failure, f)
    }

    /// Transform the success value. A panic inside `f` propagates to the caller.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(S) -> U,
    {
        Try(self.0.map(f))
    }

    // ========== Catching Steps ==========

    /// Chain a step, trapping a panic inside `f` as the new failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Try;
    ///
    /// let t: Try<i32> = Try::success(1).bind_catching(|_| -> Try<i32> { panic!("step failed") });
    /// assert_eq!(t.into_failure().unwrap().message(), "step failed");
    /// ```
    pub fn bind_catching<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(S) -> Try<U>,
    {
        self.bind(|v| capture(|| f(v)).unwrap_or_else(Try::failure))
    }

    /// Transform the success value, trapping a panic inside `f` as the new failure.
    pub fn map_catching<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(S) -> U,
    {
        self.bind(|v| Try::catching(|| f(v)))
    }

    // ========== Failure Track ==========

    /// Transform the exception, leaving the `Try` specialization.
    #[inline]
    pub fn map_err<F2, F>(self, f: F) -> Outcome<F2, S>
    where
        F: FnOnce(Exception) -> F2,
    {
        self.0.map_err(f)
    }

    /// Chain a step on the exception, leaving the `Try` specialization.
    #[inline]
    pub fn bind_err<F2, F>(self, f: F) -> Outcome<F2, S>
    where
        F: FnOnce(Exception) -> Outcome<F2, S>,
    {
        self.0.bind_err(f)
    }

    /// Replace a failure with the result of `f`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Try;
    ///
    /// let t = Try::catching(|| -> i32 { panic!("no config") })
    ///     .recover(|_| Try::success(8080));
    /// assert_eq!(t.unwrap(), 8080);
    /// ```
    #[inline]
    pub fn recover<F>(self, f: F) -> Try<S>
    where
        F: FnOnce(Exception) -> Try<S>,
    {
        self.fold(f, Try::success)
    }

    // ========== Observation ==========

    /// Observe the success value without changing the container.
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&S),
    {
        Try(self.0.tap(f))
    }

    /// Observe the exception without changing the container.
    #[inline]
    pub fn tap_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&Exception),
    {
        Try(self.0.tap_err(f))
    }

    // ========== Extractors ==========

    /// Return the success value or `fallback`.
    #[inline]
    pub fn default_with(self, fallback: S) -> S {
        self.0.default_with(fallback)
    }

    /// Return the success value or compute one from the exception.
    #[inline]
    pub fn default_with_else<F>(self, fallback: F) -> S
    where
        F: FnOnce(Exception) -> S,
    {
        self.0.default_with_else(fallback)
    }

    /// Borrow both tracks.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&Exception, &S> {
        self.0.as_ref()
    }

    /// The exception, if this is a failure.
    #[inline]
    pub fn into_failure(self) -> Maybe<Exception> {
        self.0.into_failure()
    }

    // ========== Combination ==========

    /// Pair two success values; otherwise the first exception.
    #[inline]
    pub fn zip<U>(self, other: Try<U>) -> Try<(S, U)> {
        Try(self.0.zip(other.0))
    }

    /// Combine two success values with `f`; otherwise the first exception.
    #[inline]
    pub fn zip_with<U, O, F>(self, other: Try<U>, f: F) -> Try<O>
    where
        F: FnOnce(S, U) -> O,
    {
        Try(self.0.zip_with(other.0, f))
    }

    /// Collect every success value, or stop at the first exception.
    pub fn sequence<I>(iter: I) -> Try<Vec<S>>
    where
        I: IntoIterator<Item = Try<S>>,
    {
        Try(Outcome::sequence(iter.into_iter().map(Try::into_outcome)))
    }

    // ========== Conversions ==========

    /// The success value, if any.
    #[inline]
    pub fn into_maybe(self) -> Maybe<S> {
        self.0.into_maybe()
    }

    /// Unwrap the specialization into a plain [`Outcome`].
    #[inline]
    pub fn into_outcome(self) -> Outcome<Exception, S> {
        self.0
    }

    /// Convert to a std `Result`.
    #[inline]
    pub fn into_result(self) -> Result<S, Exception> {
        self.0.into_result()
    }

    /// Expose the underlying union.
    #[inline]
    pub fn into_union(self) -> Union<Exception, S> {
        self.0.into_union()
    }

    /// Return the success value, or an access error describing the exception.
    #[inline]
    pub fn try_unwrap(self) -> Result<S, crate::AccessError> {
        self.0.try_unwrap()
    }

    /// Return the success value.
    ///
    /// # Panics
    ///
    /// Panics with an "expected success" message describing the exception.
    #[track_caller]
    pub fn unwrap(self) -> S {
        self.0.unwrap()
    }
}

impl<S> Try<Try<S>> {
    /// Collapse one level of nesting. An outer failure always wins.
    #[inline]
    pub fn flatten(self) -> Try<S> {
        self.bind(|inner| inner)
    }
}

impl<S: fmt::Debug> fmt::Debug for Try<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<S> From<Outcome<Exception, S>> for Try<S> {
    fn from(outcome: Outcome<Exception, S>) -> Self {
        Try::from_outcome(outcome)
    }
}

impl<S> From<Try<S>> for Outcome<Exception, S> {
    fn from(t: Try<S>) -> Self {
        t.into_outcome()
    }
}

impl<S> FromIterator<Try<S>> for Try<Vec<S>> {
    fn from_iter<I: IntoIterator<Item = Try<S>>>(iter: I) -> Self {
        Try::sequence(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fmt;
    use std::panic;

    #[derive(Debug)]
    struct Boom(&'static str);

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "boom: {}", self.0)
        }
    }

    impl std::error::Error for Boom {}

    #[test]
    fn test_catching_success() {
        let t = Try::catching(|| 2 + 2);
        assert_eq!(t.unwrap(), 4);
    }

    #[test]
    fn test_catching_captures_panic() {
        let t: Try<i32> = Try::catching(|| panic!("boom"));
        let ex = t.into_failure().unwrap();
        assert!(ex.is_panic());
        assert_eq!(ex.message(), "boom");
    }

    #[test]
    fn test_catching_result_captures_returned_error() {
        let t: Try<i32> = Try::catching_result(|| Err(Boom("x")));
        let ex = t.into_failure().unwrap();
        assert!(ex.is_error());
        assert_eq!(ex.downcast_ref::<Boom>().map(|b| b.0), Some("x"));
    }

    #[test]
    fn test_bind_catching_replaces_success_with_failure() {
        let t = Try::success(5).bind_catching(|n| -> Try<i32> {
            if n > 0 {
                panic!("positive");
            }
            Try::success(n)
        });
        assert_eq!(t.into_failure().unwrap().message(), "positive");
    }

    #[test]
    fn test_map_catching_traps_step_panic() {
        let divisor = std::hint::black_box(0);
        let t = Try::success(10).map_catching(|n| n / divisor);
        assert!(t.is_failure());
    }

    #[test]
    fn test_non_catching_map_lets_panic_escape() {
        let escaped = panic::catch_unwind(|| Try::success(1).map(|_| -> i32 { panic!("escape") }));
        assert!(escaped.is_err());
    }

    #[test]
    fn test_catching_steps_skip_failures() {
        let calls = Cell::new(0);
        let failed: Try<i32> = Try::failure(Exception::new("earlier"));
        let t = failed.map_catching(|n| {
            calls.set(calls.get() + 1);
            n
        });
        assert_eq!(t.into_failure().unwrap().message(), "earlier");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_recover_and_default() {
        let failed: Try<i32> = Try::failure(Exception::Cancelled);
        assert_eq!(failed.clone().default_with(0), 0);
        assert_eq!(failed.recover(|_| Try::success(1)).unwrap(), 1);
    }

    #[test]
    fn test_map_err_leaves_specialization() {
        let failed: Try<i32> = Try::failure(Exception::new(Boom("y")));
        let out: Outcome<String, i32> = failed.map_err(|ex| ex.to_string());
        assert_eq!(out, Outcome::failure("boom: y".to_string()));
    }

    #[test]
    fn test_zip_and_sequence_report_first_exception() {
        let a: Try<i32> = Try::failure(Exception::new("first"));
        let b: Try<i32> = Try::failure(Exception::new("second"));
        assert_eq!(a.zip(b).into_failure().unwrap().message(), "first");

        let items = vec![
            Try::success(1),
            Try::failure(Exception::new("e1")),
            Try::failure(Exception::new("e2")),
        ];
        assert_eq!(Try::sequence(items).into_failure().unwrap().message(), "e1");

        let ok: Try<Vec<i32>> = vec![Try::success(1), Try::success(2)].into_iter().collect();
        assert_eq!(ok.unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_flatten() {
        assert_eq!(Try::success(Try::success(42)).flatten().unwrap(), 42);
        let inner: Try<Try<i32>> = Try::success(Try::failure(Exception::new("inner")));
        assert_eq!(inner.flatten().into_failure().unwrap().message(), "inner");
    }

    #[test]
    fn test_tap_err_observes_exception() {
        let seen = Cell::new(false);
        let t: Try<i32> = Try::catching(|| panic!("seen")).tap_err(|ex| seen.set(ex.is_panic()));
        assert!(t.is_failure());
        assert!(seen.get());
    }

    #[test]
    #[should_panic(expected = "expected success, found failure")]
    fn test_unwrap_failure_panics() {
        let t: Try<i32> = Try::failure(Exception::Cancelled);
        t.unwrap();
    }
}
