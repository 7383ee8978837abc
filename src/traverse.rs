//! Traverse and sequence over collections of containers.
//!
//! - **`sequence_*`**: turn a collection of containers into a container of a
//!   collection, e.g. `Vec<Outcome<E, T>>` into `Outcome<E, Vec<T>>`.
//! - **`traverse_*`**: map a function over a collection and sequence the
//!   results in one pass.
//!
//! All of these short-circuit: the first absence or failure ends the walk,
//! and the remaining elements are neither transformed nor inspected.
//!
//! # Examples
//!
//! ```
//! use switchyard::traverse::{sequence_maybe, traverse_outcome};
//! use switchyard::{Maybe, Outcome};
//!
//! fn parse_number(s: &str) -> Outcome<String, i32> {
//!     s.parse()
//!         .map(Outcome::success)
//!         .unwrap_or_else(|_| Outcome::failure(format!("invalid number: {}", s)))
//! }
//!
//! let result = traverse_outcome(vec!["1", "2", "3"], parse_number);
//! assert_eq!(result, Outcome::success(vec![1, 2, 3]));
//!
//! let result = traverse_outcome(vec!["1", "x", "y"], parse_number);
//! assert_eq!(result, Outcome::failure("invalid number: x".to_string()));
//!
//! let all = sequence_maybe(vec![Maybe::some(1), Maybe::none(), Maybe::some(3)]);
//! assert!(all.is_none());
//! ```

use std::future::Future;

use crate::{Either, Maybe, Outcome, Try};

/// Traverse a collection with a function that may produce no value.
///
/// # Examples
///
/// ```
/// use switchyard::{traverse::traverse_maybe, Maybe};
///
/// fn lookup(key: &str) -> Maybe<&str> {
///     Maybe::from_option(key.strip_prefix("id-"))
/// }
///
/// assert_eq!(traverse_maybe(vec!["id-1", "id-2"], lookup), Maybe::some(vec!["1", "2"]));
/// assert!(traverse_maybe(vec!["id-1", "2"], lookup).is_none());
/// ```
pub fn traverse_maybe<T, U, F, I>(iter: I, f: F) -> Maybe<Vec<U>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Maybe<U>,
{
    iter.into_iter().map(f).collect()
}

/// Sequence a collection of maybes.
pub fn sequence_maybe<T, I>(iter: I) -> Maybe<Vec<T>>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    Maybe::sequence(iter)
}

/// Traverse a collection with a fallible function.
///
/// Stops at the first failure and returns it.
///
/// # Type Parameters
///
/// * `T` - Input element type
/// * `U` - Output element type
/// * `E` - Error type
/// * `F` - Function type that transforms `T` into `Outcome<E, U>`
/// * `I` - Input iterator type
pub fn traverse_outcome<T, U, E, F, I>(iter: I, f: F) -> Outcome<E, Vec<U>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Outcome<E, U>,
{
    iter.into_iter().map(f).collect()
}

/// Sequence a collection of outcomes.
///
/// # Examples
///
/// ```
/// use switchyard::{traverse::sequence_outcome, Outcome};
///
/// let outs = vec![
///     Outcome::<&str, _>::success(1),
///     Outcome::failure("error1"),
///     Outcome::failure("error2"),
/// ];
/// assert_eq!(sequence_outcome(outs), Outcome::failure("error1"));
/// ```
pub fn sequence_outcome<T, E, I>(iter: I) -> Outcome<E, Vec<T>>
where
    I: IntoIterator<Item = Outcome<E, T>>,
{
    Outcome::sequence(iter)
}

/// Traverse a collection with a right-biased function.
pub fn traverse_either<T, U, L, F, I>(iter: I, f: F) -> Either<L, Vec<U>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Either<L, U>,
{
    iter.into_iter().map(f).collect()
}

/// Sequence a collection of eithers; the first left wins.
pub fn sequence_either<T, L, I>(iter: I) -> Either<L, Vec<T>>
where
    I: IntoIterator<Item = Either<L, T>>,
{
    Either::sequence(iter)
}

/// Traverse a collection, trapping a panic in `f` as the failure.
///
/// Elements after the one that panicked are not visited.
///
/// # Examples
///
/// ```
/// use switchyard::traverse::traverse_catching;
///
/// let divisors = vec![4, 2, 0, 1];
/// let out = traverse_catching(divisors, |d| 8 / d);
/// assert!(out.into_failure().unwrap().is_panic());
/// ```
pub fn traverse_catching<T, U, F, I>(iter: I, mut f: F) -> Try<Vec<U>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> U,
{
    iter.into_iter()
        .map(|item| Try::catching(|| f(item)))
        .collect()
}

/// Sequence a collection of tries.
pub fn sequence_try<T, I>(iter: I) -> Try<Vec<T>>
where
    I: IntoIterator<Item = Try<T>>,
{
    Try::sequence(iter)
}

/// Traverse a collection with an async fallible function, one element at a
/// time.
///
/// Each step is awaited before the next is started. The first failure ends
/// the walk; later steps are never created.
///
/// # Examples
///
/// ```
/// use switchyard::{traverse::traverse_outcome_async, Outcome};
///
/// # tokio_test::block_on(async {
/// let doubled = traverse_outcome_async(vec![1, 2, 3], |x| async move {
///     Outcome::<String, i32>::success(x * 2)
/// })
/// .await;
/// assert_eq!(doubled, Outcome::success(vec![2, 4, 6]));
/// # });
/// ```
pub async fn traverse_outcome_async<T, U, E, F, Fut, I>(iter: I, mut f: F) -> Outcome<E, Vec<U>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Outcome<E, U>>,
{
    let iter = iter.into_iter();
    let mut values = Vec::with_capacity(iter.size_hint().0);
    for item in iter {
        match f(item).await.into_result() {
            Ok(value) => values.push(value),
            Err(err) => return Outcome::failure(err),
        }
    }
    Outcome::success(values)
}
