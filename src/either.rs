//! A semantically neutral sum type for representing one of two possible values.
//!
//! # Either vs Outcome
//!
//! `Either<L, R>` carries no success/failure meaning. Both sides are
//! meaningful payloads (cached vs fresh data, a parsed number vs a keyword).
//! Use [`Outcome`] when one side clearly is an error.
//!
//! # Right-Biased Convention
//!
//! Chaining is right-biased: `map`, `bind` and `tap` operate on `Right`,
//! while `map_left`, `bind_left` and `tap_left` are their mirror images.
//! `Zip` and `sequence` follow the same first-`Left`-wins rule as
//! [`Outcome`].
//!
//! # Examples
//!
//! ```rust
//! use switchyard::Either;
//!
//! fn get_data(from_cache: bool) -> Either<String, i32> {
//!     if from_cache {
//!         Either::left("cached".to_string())
//!     } else {
//!         Either::right(42)
//!     }
//! }
//!
//! let description = get_data(true).fold(
//!     |cached| format!("From cache: {}", cached),
//!     |fresh| format!("Fresh value: {}", fresh),
//! );
//! assert_eq!(description, "From cache: cached");
//! ```

use std::fmt;

use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::union::Union;

/// A value that is either a left `L` or a right `R`.
///
/// # Example
///
/// ```rust
/// use switchyard::Either;
///
/// let left: Either<i32, &str> = Either::left(42);
/// let right: Either<i32, &str> = Either::right("hello");
///
/// assert_eq!(left.swap(), Either::right(42));
/// assert_eq!(right.fold(|n| n.to_string(), |s| s.to_uppercase()), "HELLO");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Either<L, R>(Union<L, R>);

impl<L, R> Either<L, R> {
    // ========== Constructors ==========

    /// Create a Left value.
    #[inline]
    pub fn left(value: L) -> Self {
        Either(Union::Left(value))
    }

    /// Create a Right value.
    #[inline]
    pub fn right(value: R) -> Self {
        Either(Union::Right(value))
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        self.0.is_left()
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        self.0.is_right()
    }

    // ========== Extractors ==========

    /// The left value, if this is a `Left`.
    #[inline]
    pub fn into_left(self) -> Maybe<L> {
        self.fold(Maybe::some, |_| Maybe::none())
    }

    /// The right value, if this is a `Right`.
    #[inline]
    pub fn into_right(self) -> Maybe<R> {
        self.fold(|_| Maybe::none(), Maybe::some)
    }

    /// Convert to `Either<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        Either(self.0.as_ref())
    }

    /// Extract the left value.
    ///
    /// # Panics
    ///
    /// Panics with an invalid-access message if the value is a `Right`.
    #[track_caller]
    pub fn unwrap_left(self) -> L {
        self.0.unwrap_left()
    }

    /// Extract the right value.
    ///
    /// # Panics
    ///
    /// Panics with an invalid-access message if the value is a `Left`.
    #[track_caller]
    pub fn unwrap_right(self) -> R {
        self.0.unwrap_right()
    }

    /// Return the left value or a default.
    #[inline]
    pub fn left_or(self, default: L) -> L {
        self.fold(|l| l, |_| default)
    }

    /// Return the right value or a default.
    #[inline]
    pub fn right_or(self, default: R) -> R {
        self.fold(|_| default, |r| r)
    }

    /// Return the left value or compute it from the right.
    #[inline]
    pub fn left_or_else<F>(self, f: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        self.fold(|l| l, f)
    }

    /// Return the right value or compute it from the left.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.right_or_else(|n| n.to_string()), "42");
    /// ```
    #[inline]
    pub fn right_or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        self.fold(f, |r| r)
    }

    // ========== Folding ==========

    /// Fold both variants into a single value.
    #[inline]
    pub fn fold<T, F, G>(self, left_fn: F, right_fn: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        self.0.fold(left_fn, right_fn)
    }

    // ========== Transformations ==========

    /// Transform the right value (right-biased `map`).
    #[inline]
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        self.fold(Either::left, |r| Either::right(f(r)))
    }

    /// Transform the left value, passing right values through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(21);
    /// assert_eq!(left.map_left(|x| x * 2), Either::left(42));
    /// ```
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        self.fold(|l| Either::left(f(l)), Either::right)
    }

    /// Transform both variants.
    #[inline]
    pub fn bimap<L2, R2, F, G>(self, f: F, g: G) -> Either<L2, R2>
    where
        F: FnOnce(L) -> L2,
        G: FnOnce(R) -> R2,
    {
        self.fold(|l| Either::left(f(l)), |r| Either::right(g(r)))
    }

    /// Swap Left and Right, along with their types.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        Either(self.0.swap())
    }

    // ========== Chaining ==========

    /// Chain a computation on the right value (right-biased flatMap).
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Either;
    ///
    /// let right: Either<&str, i32> = Either::right(21);
    /// let left: Either<&str, i32> = Either::left("keyword");
    ///
    /// assert_eq!(right.bind(|x| Either::right(x * 2)), Either::right(42));
    /// assert_eq!(left.bind(|x| Either::right(x * 2)), Either::left("keyword"));
    /// ```
    #[inline]
    pub fn bind<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        self.fold(Either::left, f)
    }

    /// Chain a computation on the left value.
    #[inline]
    pub fn bind_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        self.fold(f, Either::right)
    }

    /// Observe the right value without changing the container.
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Union::Right(r) = &self.0 {
            f(r);
        }
        self
    }

    /// Observe the left value without changing the container.
    #[inline]
    pub fn tap_left<F>(self, f: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Union::Left(l) = &self.0 {
            f(l);
        }
        self
    }

    // ========== Combination ==========

    /// Pair two right values; otherwise the first left, in argument order.
    #[inline]
    pub fn zip<R2>(self, other: Either<L, R2>) -> Either<L, (R, R2)> {
        self.bind(|a| other.map(|b| (a, b)))
    }

    /// Combine two right values with `f`; otherwise the first left.
    #[inline]
    pub fn zip_with<R2, O, F>(self, other: Either<L, R2>, f: F) -> Either<L, O>
    where
        F: FnOnce(R, R2) -> O,
    {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    /// Collect every right value, or stop at the first left.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Either;
    ///
    /// let items: Vec<Either<&str, i32>> = vec![Either::right(1), Either::left("x"), Either::left("y")];
    /// assert_eq!(Either::sequence(items), Either::left("x"));
    /// ```
    pub fn sequence<I>(iter: I) -> Either<L, Vec<R>>
    where
        I: IntoIterator<Item = Either<L, R>>,
    {
        iter.into_iter().collect()
    }

    // ========== Conversions ==========

    /// Right becomes present, left becomes absent.
    #[inline]
    pub fn into_maybe(self) -> Maybe<R> {
        self.into_right()
    }

    /// Left becomes the failure, right the success.
    #[inline]
    pub fn into_outcome(self) -> Outcome<L, R> {
        self.fold(Outcome::failure, Outcome::success)
    }

    /// Convert to a std `Result` (Right becomes Ok, Left becomes Err).
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.fold(Err, Ok)
    }

    /// Create from a std `Result` (Ok becomes Right, Err becomes Left).
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::right(r),
            Err(l) => Either::left(l),
        }
    }

    /// Expose the underlying union.
    #[inline]
    pub fn into_union(self) -> Union<L, R> {
        self.0
    }

    /// Returns an iterator over the right value, if present.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.as_ref().into_right().into_iter()
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Flatten a nested Either. An outer `Left` always wins.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Either;
    ///
    /// let nested: Either<&str, Either<&str, i32>> = Either::right(Either::right(42));
    /// assert_eq!(nested.flatten(), Either::right(42));
    ///
    /// let outer_left: Either<&str, Either<&str, i32>> = Either::left("outer");
    /// assert_eq!(outer_left.flatten(), Either::left("outer"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.bind(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Union::Left(l) => f.debug_tuple("Left").field(l).finish(),
            Union::Right(r) => f.debug_tuple("Right").field(r).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L, R> Default for Either<L, R>
where
    R: Default,
{
    /// Returns `Either::right(R::default())`.
    fn default() -> Self {
        Either::right(R::default())
    }
}

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_right().into_iter()
    }
}

impl<L, A, V> FromIterator<Either<L, A>> for Either<L, V>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Either<L, A>>>(iter: I) -> Self {
        Either::from_result(iter.into_iter().map(Either::into_result).collect())
    }
}

// ========== Collection Utilities ==========

/// Partition an iterator of Either into two vectors.
///
/// # Example
///
/// ```rust
/// use switchyard::either::{partition, Either};
///
/// let items = vec![
///     Either::left(1),
///     Either::right("a"),
///     Either::left(2),
///     Either::right("b"),
/// ];
///
/// let (lefts, rights) = partition(items);
/// assert_eq!(lefts, vec![1, 2]);
/// assert_eq!(rights, vec!["a", "b"]);
/// ```
pub fn partition<L, R, I>(iter: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let mut lefts = Vec::new();
    let mut rights = Vec::new();

    for item in iter {
        match item.into_union() {
            Union::Left(l) => lefts.push(l),
            Union::Right(r) => rights.push(r),
        }
    }

    (lefts, rights)
}

/// Extract all Left values from an iterator.
pub fn lefts<L, R, I>(iter: I) -> impl Iterator<Item = L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().flat_map(Either::into_left)
}

/// Extract all Right values from an iterator.
pub fn rights<L, R, I>(iter: I) -> impl Iterator<Item = R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().flat_map(Either::into_right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_predicates() {
        let left: Either<i32, &str> = Either::left(42);
        let right: Either<i32, &str> = Either::right("hello");

        assert!(left.is_left());
        assert!(!left.is_right());
        assert!(!right.is_left());
        assert!(right.is_right());
    }

    #[test]
    fn test_into_left_into_right() {
        let left: Either<i32, &str> = Either::left(42);
        assert_eq!(left.into_left(), Maybe::some(42));
        assert!(left.into_right().is_none());
    }

    #[test]
    fn test_map_is_right_biased() {
        let left: Either<&str, i32> = Either::left("kw");
        let right: Either<&str, i32> = Either::right(21);

        assert_eq!(left.map(|x| x * 2), Either::left("kw"));
        assert_eq!(right.map(|x| x * 2), Either::right(42));
        assert_eq!(right.map_left(str::len), Either::right(21));
    }

    #[test]
    fn test_bind_left() {
        let left: Either<i32, &str> = Either::left(1);
        assert_eq!(
            left.bind_left(|_| Either::<i32, &str>::right("recovered")),
            Either::right("recovered")
        );

        let right: Either<i32, &str> = Either::right("ok");
        assert_eq!(
            right.bind_left(|x| Either::<i32, &str>::left(x * 2)),
            Either::right("ok")
        );
    }

    #[test]
    fn test_tap_and_tap_left() {
        let rights_seen = Cell::new(0);
        let lefts_seen = Cell::new(0);

        let e: Either<i32, i32> = Either::left(1);
        let e = e
            .tap(|_| rights_seen.set(rights_seen.get() + 1))
            .tap_left(|_| lefts_seen.set(lefts_seen.get() + 1));

        assert_eq!(e, Either::left(1));
        assert_eq!(rights_seen.get(), 0);
        assert_eq!(lefts_seen.get(), 1);
    }

    #[test]
    fn test_bimap_and_swap() {
        let e: Either<i32, &str> = Either::left(1);
        assert_eq!(e.bimap(|x| x + 1, |s| s.len()), Either::left(2));
        assert_eq!(e.swap(), Either::right(1));
    }

    #[test]
    fn test_left_or_right_or() {
        let left: Either<i32, &str> = Either::left(42);
        let right: Either<i32, &str> = Either::right("hello");

        assert_eq!(left.left_or(0), 42);
        assert_eq!(right.left_or(0), 0);
        assert_eq!(left.right_or("default"), "default");
        let sign = |n: i32| if n > 0 { "pos" } else { "neg" };
        assert_eq!(right.right_or_else(sign), "hello");
        assert_eq!(right.left_or_else(|s| s.len() as i32), 5);
    }

    #[test]
    #[should_panic(expected = "invalid access: the left slot is not populated")]
    fn test_unwrap_left_panics() {
        let right: Either<i32, &str> = Either::right("hello");
        right.unwrap_left();
    }

    #[test]
    fn test_zip_first_left_wins() {
        let a: Either<&str, i32> = Either::left("first");
        let b: Either<&str, i32> = Either::left("second");
        assert_eq!(a.zip(b), Either::left("first"));
        assert_eq!(
            Either::<&str, i32>::right(2).zip_with(Either::right(3), |x, y| x * y),
            Either::right(6)
        );
    }

    #[test]
    fn test_sequence() {
        let items: Vec<Either<&str, i32>> = vec![Either::right(1), Either::right(2)];
        assert_eq!(Either::sequence(items), Either::right(vec![1, 2]));

        let empty: Vec<Either<&str, i32>> = vec![];
        assert_eq!(Either::sequence(empty), Either::right(vec![]));
    }

    #[test]
    fn test_flatten() {
        let nested: Either<&str, Either<&str, i32>> = Either::right(Either::left("inner"));
        assert_eq!(nested.flatten(), Either::left("inner"));
    }

    #[test]
    fn test_conversions() {
        let right: Either<&str, i32> = Either::right(42);
        let left: Either<&str, i32> = Either::left("kw");

        assert_eq!(right.into_maybe(), Maybe::some(42));
        assert!(left.into_maybe().is_none());
        assert_eq!(left.into_outcome(), Outcome::failure("kw"));
        assert_eq!(right.into_result(), Ok(42));

        let from_std: Either<&str, i32> = Ok(7).into();
        assert_eq!(from_std, Either::right(7));
    }

    #[test]
    fn test_partition_lefts_rights() {
        let items = vec![
            Either::left(1),
            Either::right("a"),
            Either::left(2),
            Either::right("b"),
        ];

        let (ls, rs) = partition(items.clone());
        assert_eq!(ls, vec![1, 2]);
        assert_eq!(rs, vec!["a", "b"]);
        assert_eq!(lefts(items.clone()).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(rights(items).collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_iteration_and_default() {
        let right: Either<&str, i32> = Either::right(42);
        assert_eq!(right.iter().collect::<Vec<_>>(), vec![&42]);
        assert_eq!(Either::<&str, i32>::default(), Either::right(0));
    }

    #[test]
    fn test_debug_rendering() {
        assert_eq!(format!("{:?}", Either::<i32, &str>::left(1)), "Left(1)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_swap_involution(x: i32) {
            let e: Either<i32, i32> = Either::left(x);
            prop_assert_eq!(e.swap().swap(), e);

            let e: Either<i32, i32> = Either::right(x);
            prop_assert_eq!(e.swap().swap(), e);
        }

        #[test]
        fn prop_functor_identity(x: i32) {
            let e: Either<(), i32> = Either::right(x);
            prop_assert_eq!(e.map(|v| v), Either::right(x));
        }

        #[test]
        fn prop_bimap_swap_commutes(x: i32) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);

            let e: Either<i32, i32> = Either::left(x);
            prop_assert_eq!(e.bimap(f, g).swap(), e.swap().bimap(g, f));

            let e: Either<i32, i32> = Either::right(x);
            prop_assert_eq!(e.bimap(f, g).swap(), e.swap().bimap(g, f));
        }

        #[test]
        fn prop_outcome_agrees_with_maybe(x: i32, is_left: bool) {
            let e: Either<i32, i32> = if is_left { Either::left(x) } else { Either::right(x) };
            prop_assert_eq!(e.into_outcome().into_maybe(), e.into_maybe());
        }
    }
}
