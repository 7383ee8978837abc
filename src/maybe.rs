//! An optional value that composes as a railway.
//!
//! `Maybe<T>` is either *present* (holding a `T`) or *absent*. Every
//! combinator passes absence through untouched, so a chain of `bind`/`map`
//! steps reads top to bottom without nested `if let`s.
//!
//! # Maybe vs Option
//!
//! `Maybe` converts losslessly to and from `std::option::Option`
//! ([`Maybe::from_option`], [`Maybe::into_option`]). It exists so optional
//! values share one vocabulary (`bind`, `fold`, `zip`, `sequence`, ...) with
//! [`Outcome`], [`Try`](crate::Try) and [`Either`](crate::Either).
//!
//! # Example
//!
//! ```rust
//! use switchyard::Maybe;
//!
//! fn lookup(id: u32) -> Maybe<&'static str> {
//!     match id {
//!         1 => Maybe::some("ada"),
//!         2 => Maybe::some("grace"),
//!         _ => Maybe::none(),
//!     }
//! }
//!
//! let greeting = lookup(1)
//!     .filter(|name| name.len() > 2)
//!     .map(|name| format!("hello, {}", name))
//!     .default_with("who?".to_string());
//! assert_eq!(greeting, "hello, ada");
//!
//! assert!(lookup(9).map(str::len).is_none());
//! ```

use std::fmt;

use crate::error::AccessError;
use crate::outcome::Outcome;
use crate::union::Union;

/// A value of `T` that may or may not be present.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Maybe<T>(Union<(), T>);

impl<T> Maybe<T> {
    // ========== Constructors ==========

    /// Create a present value.
    #[inline]
    pub fn some(value: T) -> Self {
        Maybe(Union::Right(value))
    }

    /// Create an absent value.
    #[inline]
    pub fn none() -> Self {
        Maybe(Union::Left(()))
    }

    /// Coerce a std `Option`: `None` is absence, `Some(v)` is presence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Maybe;
    ///
    /// let name: Option<&str> = None;
    /// assert!(Maybe::from_option(name).is_none());
    /// assert_eq!(Maybe::from_option(Some(3)), Maybe::some(3));
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Maybe::some(v),
            None => Maybe::none(),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_some(&self) -> bool {
        self.0.is_right()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.0.is_left()
    }

    // ========== Folding ==========

    /// Reduce to a single value, handling both states.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.fold(|| "nothing".to_string(), |n| n.to_string());
    /// assert_eq!(describe(Maybe::some(4)), "4");
    /// assert_eq!(describe(Maybe::none()), "nothing");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, on_absent: F, on_present: G) -> U
    where
        F: FnOnce() -> U,
        G: FnOnce(T) -> U,
    {
        self.0.fold(|()| on_absent(), on_present)
    }

    // ========== Railway Operations ==========

    /// Chain a step that may itself produce absence.
    ///
    /// `f` runs only when a value is present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Maybe;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() };
    /// assert_eq!(Maybe::some(8).bind(half).bind(half), Maybe::some(2));
    /// assert!(Maybe::some(6).bind(half).bind(half).is_none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.fold(Maybe::none, f)
    }

    /// Transform the present value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.fold(Maybe::none, |v| Maybe::some(f(v)))
    }

    /// Keep the present value only if `predicate` holds for it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Maybe;
    ///
    /// assert_eq!(Maybe::some(4).filter(|n| n % 2 == 0), Maybe::some(4));
    /// assert!(Maybe::some(3).filter(|n| n % 2 == 0).is_none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.bind(|v| {
            if predicate(&v) {
                Maybe::some(v)
            } else {
                Maybe::none()
            }
        })
    }

    /// Observe the present value without changing the container.
    ///
    /// `f` runs at most once, and only when a value is present.
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Union::Right(v) = &self.0 {
            f(v);
        }
        self
    }

    /// Replace absence with the result of `f`.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Maybe<T>,
    {
        self.fold(f, Maybe::some)
    }

    // ========== Extractors ==========

    /// Return the present value or `fallback`.
    #[inline]
    pub fn default_with(self, fallback: T) -> T {
        self.fold(|| fallback, |v| v)
    }

    /// Return the present value or compute one lazily.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Maybe;
    ///
    /// let absent: Maybe<Vec<u8>> = Maybe::none();
    /// assert_eq!(absent.default_with_else(|| vec![0; 2]), vec![0, 0]);
    /// ```
    #[inline]
    pub fn default_with_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.fold(fallback, |v| v)
    }

    /// Return the present value, or [`AccessError::Absent`].
    #[inline]
    pub fn try_unwrap(self) -> Result<T, AccessError> {
        self.fold(|| Err(AccessError::Absent), Ok)
    }

    /// Return the present value.
    ///
    /// # Panics
    ///
    /// Panics with an "unexpected absence" message when absent.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(v) => v,
            Err(err) => panic!("{}", err),
        }
    }

    /// Borrow the present value.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        Maybe(self.0.as_ref().fold(|_| Union::Left(()), Union::Right))
    }

    /// Iterate over the present value, if any.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_ref().into_option().into_iter()
    }

    // ========== Combination ==========

    /// Pair two values if both are present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).zip(Maybe::some("a")), Maybe::some((1, "a")));
    /// assert!(Maybe::some(1).zip(Maybe::<&str>::none()).is_none());
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        self.bind(|a| other.map(|b| (a, b)))
    }

    /// Combine two values with `f` if both are present.
    #[inline]
    pub fn zip_with<U, O, F>(self, other: Maybe<U>, f: F) -> Maybe<O>
    where
        F: FnOnce(T, U) -> O,
    {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    /// Turn a collection of `Maybe`s into a `Maybe` of a collection.
    ///
    /// Present iff every element is present. Scanning stops at the first
    /// absent element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Maybe;
    ///
    /// assert_eq!(
    ///     Maybe::sequence(vec![Maybe::some(1), Maybe::some(2)]),
    ///     Maybe::some(vec![1, 2])
    /// );
    /// assert!(Maybe::sequence(vec![Maybe::some(1), Maybe::none()]).is_none());
    /// ```
    pub fn sequence<I>(iter: I) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = Maybe<T>>,
    {
        iter.into_iter().collect()
    }

    // ========== Conversions ==========

    /// Upgrade to an [`Outcome`], computing the failure for the absent case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::{Maybe, Outcome};
    ///
    /// let missing: Maybe<u8> = Maybe::none();
    /// assert_eq!(missing.into_outcome(|| "no byte"), Outcome::failure("no byte"));
    /// ```
    #[inline]
    pub fn into_outcome<E, F>(self, on_absent: F) -> Outcome<E, T>
    where
        F: FnOnce() -> E,
    {
        self.fold(|| Outcome::failure(on_absent()), Outcome::success)
    }

    /// Convert to a std `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.fold(|| None, Some)
    }

    /// Expose the underlying union; the left slot is the absence marker.
    #[inline]
    pub fn into_union(self) -> Union<(), T> {
        self.0
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Collapse one level of nesting. Outer or inner absence both yield absence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Maybe;
    ///
    /// assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::some(1));
    /// assert!(Maybe::some(Maybe::<i32>::none()).flatten().is_none());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Union::Left(()) => f.write_str("None"),
            Union::Right(v) => f.debug_tuple("Some").field(v).finish(),
        }
    }
}

impl<T> Default for Maybe<T> {
    /// Returns an absent value.
    fn default() -> Self {
        Maybe::none()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::from_option(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<A, V> FromIterator<Maybe<A>> for Maybe<V>
where
    V: FromIterator<A>,
{
    /// Collects present values; the first absent element makes the whole
    /// result absent and stops the iteration.
    fn from_iter<I: IntoIterator<Item = Maybe<A>>>(iter: I) -> Self {
        Maybe::from_option(iter.into_iter().map(Maybe::into_option).collect())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
        proptest::option::of(any::<i32>()).prop_map(Maybe::from_option)
    }

    proptest! {
        #[test]
        fn prop_functor_identity(m in maybe_i32()) {
            prop_assert_eq!(m.map(|v| v), m);
        }

        #[test]
        fn prop_functor_composition(m in maybe_i32()) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);
            prop_assert_eq!(m.map(f).map(g), m.map(|v| g(f(v))));
        }

        #[test]
        fn prop_right_identity(m in maybe_i32()) {
            prop_assert_eq!(m.bind(Maybe::some), m);
        }

        #[test]
        fn prop_outcome_round_trip(m in maybe_i32(), err in any::<u8>()) {
            prop_assert_eq!(m.into_outcome(|| err).into_maybe(), m);
        }
    }
}
