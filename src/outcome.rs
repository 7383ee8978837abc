//! The general-purpose railway type: a failure of `E` or a success of `S`.
//!
//! `Outcome<E, S>` is success-biased. `bind` and `map` only ever touch the
//! success value; a failure rides along unchanged until something on the
//! failure track (`map_err`, `bind_err`, `recover`, `fold`, `default_with`)
//! handles it.
//!
//! The type parameters follow the union's slot order: the failure is the
//! left slot, the success the right one.
//!
//! # Example
//!
//! ```rust
//! use switchyard::Outcome;
//!
//! fn divide(a: i32, b: i32) -> Outcome<String, i32> {
//!     if b == 0 {
//!         Outcome::failure("division by zero".to_string())
//!     } else {
//!         Outcome::success(a / b)
//!     }
//! }
//!
//! assert_eq!(divide(12, 2).bind(|r| divide(r, 2)), Outcome::success(3));
//!
//! // The first failure is carried through, later steps never run.
//! let failed = divide(12, 0).bind(|r| divide(r, 2));
//! assert_eq!(failed, Outcome::failure("division by zero".to_string()));
//! ```

use std::fmt;

use crate::either::Either;
use crate::error::AccessError;
use crate::maybe::Maybe;
use crate::union::Union;

/// Either a failure of `E` or a success of `S`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome<E, S>(Union<E, S>);

impl<E, S> Outcome<E, S> {
    // ========== Constructors ==========

    /// Create a success.
    #[inline]
    pub fn success(value: S) -> Self {
        Outcome(Union::Right(value))
    }

    /// Create a failure.
    #[inline]
    pub fn failure(error: E) -> Self {
        Outcome(Union::Left(error))
    }

    /// Create from a std `Result` (`Ok` is success, `Err` is failure).
    #[inline]
    pub fn from_result(result: Result<S, E>) -> Self {
        match result {
            Ok(v) => Outcome::success(v),
            Err(e) => Outcome::failure(e),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a success.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.0.is_right()
    }

    /// Returns `true` if this is a failure.
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.0.is_left()
    }

    // ========== Folding ==========

    /// Reduce to a single value by handling both tracks.
    #[inline]
    pub fn fold<U, F, G>(self, on_error: F, on_success: G) -> U
    where
        F: FnOnce(E) -> U,
        G: FnOnce(S) -> U,
    {
        self.0.fold(on_error, on_success)
    }

    // ========== Success Track ==========

    /// Chain a fallible step on the success value.
    ///
    /// A failure is returned as is and `f` is not called.
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Outcome<E, U>
    where
        F: FnOnce(S) -> Outcome<E, U>,
    {
        self.fold(Outcome::failure, f)
    }

    /// Transform the success value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<E, U>
    where
        F: FnOnce(S) -> U,
    {
        self.fold(Outcome::failure, |v| Outcome::success(f(v)))
    }

    /// Observe the success value without changing the container.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Outcome;
    ///
    /// let mut log = Vec::new();
    /// let out: Outcome<&str, i32> = Outcome::success(3).tap(|v| log.push(*v));
    /// assert_eq!(out, Outcome::success(3));
    /// assert_eq!(log, vec![3]);
    /// ```
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&S),
    {
        if let Union::Right(v) = &self.0 {
            f(v);
        }
        self
    }

    // ========== Failure Track ==========

    /// Transform the failure value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Outcome;
    ///
    /// let out: Outcome<&str, i32> = Outcome::failure("bad");
    /// assert_eq!(out.map_err(str::len), Outcome::failure(3));
    /// ```
    #[inline]
    pub fn map_err<F2, F>(self, f: F) -> Outcome<F2, S>
    where
        F: FnOnce(E) -> F2,
    {
        self.fold(|e| Outcome::failure(f(e)), Outcome::success)
    }

    /// Chain a step on the failure value; a success is returned as is.
    #[inline]
    pub fn bind_err<F2, F>(self, f: F) -> Outcome<F2, S>
    where
        F: FnOnce(E) -> Outcome<F2, S>,
    {
        self.fold(f, Outcome::success)
    }

    /// Turn a failure into a success, or into a failure of another type.
    ///
    /// Same as [`bind_err`](Self::bind_err).
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Outcome;
    ///
    /// let cached: Outcome<&str, i32> = Outcome::failure("cache miss");
    /// let value = cached.recover(|_| Outcome::<(), i32>::success(0));
    /// assert_eq!(value, Outcome::success(0));
    /// ```
    #[inline]
    pub fn recover<F2, F>(self, f: F) -> Outcome<F2, S>
    where
        F: FnOnce(E) -> Outcome<F2, S>,
    {
        self.bind_err(f)
    }

    /// Observe the failure value without changing the container.
    #[inline]
    pub fn tap_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Union::Left(e) = &self.0 {
            f(e);
        }
        self
    }

    // ========== Extractors ==========

    /// Return the success value or `fallback`.
    #[inline]
    pub fn default_with(self, fallback: S) -> S {
        self.fold(|_| fallback, |v| v)
    }

    /// Return the success value or compute one from the failure.
    #[inline]
    pub fn default_with_else<F>(self, fallback: F) -> S
    where
        F: FnOnce(E) -> S,
    {
        self.fold(fallback, |v| v)
    }

    /// Borrow both tracks.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&E, &S> {
        Outcome(self.0.as_ref())
    }

    /// The success value, if any. The failure is discarded.
    #[inline]
    pub fn into_maybe(self) -> Maybe<S> {
        self.fold(|_| Maybe::none(), Maybe::some)
    }

    /// The failure value, if any.
    #[inline]
    pub fn into_failure(self) -> Maybe<E> {
        self.fold(Maybe::some, |_| Maybe::none())
    }

    /// Iterate over the success value, if any.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.as_ref().into_maybe().into_iter()
    }

    // ========== Combination ==========

    /// Pair two success values; otherwise the first failure, in argument order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Outcome;
    ///
    /// let first: Outcome<&str, i32> = Outcome::failure("first");
    /// let second: Outcome<&str, i32> = Outcome::failure("second");
    /// assert_eq!(first.zip(second), Outcome::failure("first"));
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Outcome<E, U>) -> Outcome<E, (S, U)> {
        self.bind(|a| other.map(|b| (a, b)))
    }

    /// Combine two success values with `f`; otherwise the first failure.
    #[inline]
    pub fn zip_with<U, O, F>(self, other: Outcome<E, U>, f: F) -> Outcome<E, O>
    where
        F: FnOnce(S, U) -> O,
    {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    /// Turn a collection of outcomes into an outcome of a collection.
    ///
    /// Returns every success value, or the first failure. Scanning stops at
    /// that failure; an empty input is an empty success.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Outcome;
    ///
    /// let items: Vec<Outcome<&str, i32>> =
    ///     vec![Outcome::success(1), Outcome::failure("e1"), Outcome::failure("e2")];
    /// assert_eq!(Outcome::sequence(items), Outcome::failure("e1"));
    ///
    /// let none: Vec<Outcome<&str, i32>> = vec![];
    /// assert_eq!(Outcome::sequence(none), Outcome::success(vec![]));
    /// ```
    pub fn sequence<I>(iter: I) -> Outcome<E, Vec<S>>
    where
        I: IntoIterator<Item = Outcome<E, S>>,
    {
        iter.into_iter().collect()
    }

    // ========== Conversions ==========

    /// Convert to a std `Result`.
    #[inline]
    pub fn into_result(self) -> Result<S, E> {
        self.fold(Err, Ok)
    }

    /// Drop the failure/success meaning: failure becomes `Left`, success `Right`.
    #[inline]
    pub fn into_either(self) -> Either<E, S> {
        self.fold(Either::left, Either::right)
    }

    /// Expose the underlying union.
    #[inline]
    pub fn into_union(self) -> Union<E, S> {
        self.0
    }
}

impl<E: fmt::Debug, S> Outcome<E, S> {
    /// Return the success value, or [`AccessError::ExpectedSuccess`] carrying
    /// the failure's `Debug` rendering.
    #[inline]
    pub fn try_unwrap(self) -> Result<S, AccessError> {
        self.fold(|e| Err(AccessError::expected_success(&e)), Ok)
    }

    /// Return the success value.
    ///
    /// # Panics
    ///
    /// Panics with an "expected success" message describing the failure.
    #[track_caller]
    pub fn unwrap(self) -> S {
        match self.try_unwrap() {
            Ok(v) => v,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<E, S> Outcome<E, Outcome<E, S>> {
    /// Collapse one level of nesting. An outer failure always wins.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Outcome;
    ///
    /// let nested: Outcome<&str, Outcome<&str, i32>> = Outcome::success(Outcome::failure("inner"));
    /// assert_eq!(nested.flatten(), Outcome::failure("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<E, S> {
        self.bind(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<E: fmt::Debug, S: fmt::Debug> fmt::Debug for Outcome<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Union::Left(e) => f.debug_tuple("Failure").field(e).finish(),
            Union::Right(v) => f.debug_tuple("Success").field(v).finish(),
        }
    }
}

impl<E, S> From<Result<S, E>> for Outcome<E, S> {
    fn from(result: Result<S, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<E, S> From<Outcome<E, S>> for Result<S, E> {
    fn from(outcome: Outcome<E, S>) -> Self {
        outcome.into_result()
    }
}

impl<E, S> IntoIterator for Outcome<E, S> {
    type Item = S;
    type IntoIter = std::option::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_maybe().into_iter()
    }
}

impl<E, A, V> FromIterator<Outcome<E, A>> for Outcome<E, V>
where
    V: FromIterator<A>,
{
    /// Collects success values; the first failure is returned and iteration
    /// stops there.
    fn from_iter<I: IntoIterator<Item = Outcome<E, A>>>(iter: I) -> Self {
        Outcome::from_result(iter.into_iter().map(Outcome::into_result).collect())
    }
}
