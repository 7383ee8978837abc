//! The binary tagged union every container in this crate is built on.
//!
//! [`Union<L, R>`] holds exactly one of two typed slots. It carries no
//! meaning of its own: [`Maybe`](crate::Maybe), [`Outcome`](crate::Outcome),
//! [`Try`](crate::Try) and [`Either`](crate::Either) each wrap a `Union` and
//! give its sides a name.
//!
//! [`Union::fold`] is the primitive the domain combinators are written
//! against. It runs exactly one of its two closures.
//!
//! # Example
//!
//! ```rust
//! use switchyard::Union;
//!
//! let u: Union<&str, i32> = Union::right(7);
//! let rendered = u.fold(|l| l.to_string(), |r| format!("#{}", r));
//! assert_eq!(rendered, "#7");
//! ```

use crate::error::{AccessError, Side};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// Construct it with [`Union::left`] or [`Union::right`]; the populated slot
/// never changes afterwards because every transformation consumes `self`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Union<L, R> {
    /// The left slot
    Left(L),
    /// The right slot
    Right(R),
}

impl<L, R> Union<L, R> {
    /// Populate the left slot.
    #[inline]
    pub fn left(value: L) -> Self {
        Union::Left(value)
    }

    /// Populate the right slot.
    #[inline]
    pub fn right(value: R) -> Self {
        Union::Right(value)
    }

    /// Returns `true` if the left slot is populated.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Union::Left(_))
    }

    /// Returns `true` if the right slot is populated.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Union::Right(_))
    }

    /// Reduce to a single value by handling each slot.
    ///
    /// Only the closure for the populated slot is invoked; the other one is
    /// dropped without being called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Union;
    ///
    /// let mut calls = 0;
    /// let u: Union<i32, i32> = Union::left(2);
    /// let out = u.fold(|l| l * 10, |r| { calls += 1; r });
    /// assert_eq!(out, 20);
    /// assert_eq!(calls, 0);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Union::Left(l) => on_left(l),
            Union::Right(r) => on_right(r),
        }
    }

    /// Convert to `Union<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Union<&L, &R> {
        match self {
            Union::Left(l) => Union::Left(l),
            Union::Right(r) => Union::Right(r),
        }
    }

    /// Exchange the slots.
    #[inline]
    pub fn swap(self) -> Union<R, L> {
        self.fold(Union::Right, Union::Left)
    }

    /// Take the left payload, or report that the right slot is populated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::{AccessError, Side, Union};
    ///
    /// let u: Union<i32, &str> = Union::right("r");
    /// assert_eq!(u.try_left(), Err(AccessError::WrongSide { expected: Side::Left }));
    /// ```
    #[inline]
    pub fn try_left(self) -> Result<L, AccessError> {
        self.fold(Ok, |_| {
            Err(AccessError::WrongSide {
                expected: Side::Left,
            })
        })
    }

    /// Take the right payload, or report that the left slot is populated.
    #[inline]
    pub fn try_right(self) -> Result<R, AccessError> {
        self.fold(
            |_| {
                Err(AccessError::WrongSide {
                    expected: Side::Right,
                })
            },
            Ok,
        )
    }

    /// Take the left payload.
    ///
    /// # Panics
    ///
    /// Panics with an invalid-access message if the right slot is populated.
    #[track_caller]
    pub fn unwrap_left(self) -> L {
        match self.try_left() {
            Ok(l) => l,
            Err(err) => panic!("{}", err),
        }
    }

    /// Take the right payload.
    ///
    /// # Panics
    ///
    /// Panics with an invalid-access message if the left slot is populated.
    #[track_caller]
    pub fn unwrap_right(self) -> R {
        match self.try_right() {
            Ok(r) => r,
            Err(err) => panic!("{}", err),
        }
    }
}
