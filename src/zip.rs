//! Combining two to five containers of the same family at once.
//!
//! [`Zip`] and [`Merge`] are implemented for tuples of [`Maybe`], [`Outcome`],
//! [`Either`] and [`Try`]. The result is happy only if every operand is;
//! otherwise it carries the *first* absence or failure in tuple order. The
//! operands are already-built values, so all of them have been evaluated
//! before combination starts.
//!
//! Every arity and every family shares one algorithm: a left-to-right chain
//! of `bind`s ending in a `map` that assembles the tuple.
//!
//! # Examples
//!
//! ```rust
//! use switchyard::zip::{Merge, Zip};
//! use switchyard::{Maybe, Outcome};
//!
//! let all = (Maybe::some(1), Maybe::some("two"), Maybe::some(3.0)).zip_all();
//! assert_eq!(all, Maybe::some((1, "two", 3.0)));
//!
//! let sum = (
//!     Outcome::<&str, i32>::success(1),
//!     Outcome::<&str, i32>::failure("second"),
//!     Outcome::<&str, i32>::failure("third"),
//! )
//!     .merge(|a, b, c| a + b + c);
//! assert_eq!(sum, Outcome::failure("second"));
//! ```

use crate::catching::Try;
use crate::either::Either;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Combine a tuple of containers into a container of a tuple.
pub trait Zip {
    /// The combined container.
    type Output;

    /// Combine all operands; the first non-happy operand wins.
    fn zip_all(self) -> Self::Output;
}

/// Combine a tuple of containers by feeding their values to `F`.
pub trait Merge<F> {
    /// The combined container.
    type Output;

    /// Apply `f` to every happy value; the first non-happy operand wins and
    /// `f` is not called.
    fn merge(self, f: F) -> Self::Output;
}

/// Free-function form of [`Zip::zip_all`].
///
/// # Example
///
/// ```rust
/// use switchyard::{zip, Either};
///
/// let e = zip::zip((Either::<&str, i32>::right(1), Either::right(2)));
/// assert_eq!(e, Either::right((1, 2)));
/// ```
pub fn zip<Z: Zip>(containers: Z) -> Z::Output {
    containers.zip_all()
}

/// Free-function form of [`Merge::merge`].
pub fn merge<Z, F>(containers: Z, f: F) -> Z::Output
where
    Z: Merge<F>,
{
    containers.merge(f)
}

// Expands `a, b, c` into `a.bind(move |a| b.bind(move |b| c.map(move |c| (a, b, c))))`.
macro_rules! bind_chain {
    (@acc [$($done:ident),*] $last:ident) => {
        $last.map(move |$last| ($($done,)* $last))
    };
    (@acc [$($done:ident),*] $head:ident, $($tail:ident),+) => {
        $head.bind(move |$head| bind_chain!(@acc [$($done,)* $head] $($tail),+))
    };
}

macro_rules! impl_zip {
    ($C:ident; $($T:ident $v:ident),+) => {
        impl<$($T),+> Zip for ($($C<$T>),+) {
            type Output = $C<($($T),+)>;

            fn zip_all(self) -> Self::Output {
                let ($($v),+) = self;
                bind_chain!(@acc [] $($v),+)
            }
        }

        impl<$($T,)+ O, Func> Merge<Func> for ($($C<$T>),+)
        where
            Func: FnOnce($($T),+) -> O,
        {
            type Output = $C<O>;

            fn merge(self, f: Func) -> Self::Output {
                self.zip_all().map(|($($v),+)| f($($v),+))
            }
        }
    };
    // Families whose non-happy side has its own type parameter.
    ($C:ident<$fixed:ident>; $($T:ident $v:ident),+) => {
        impl<$fixed, $($T),+> Zip for ($($C<$fixed, $T>),+) {
            type Output = $C<$fixed, ($($T),+)>;

            fn zip_all(self) -> Self::Output {
                let ($($v),+) = self;
                bind_chain!(@acc [] $($v),+)
            }
        }

        impl<$fixed, $($T,)+ O, Func> Merge<Func> for ($($C<$fixed, $T>),+)
        where
            Func: FnOnce($($T),+) -> O,
        {
            type Output = $C<$fixed, O>;

            fn merge(self, f: Func) -> Self::Output {
                self.zip_all().map(|($($v),+)| f($($v),+))
            }
        }
    };
}

macro_rules! impl_zip_arities {
    ($($family:tt)+) => {
        impl_zip!($($family)+; T1 v1, T2 v2);
        impl_zip!($($family)+; T1 v1, T2 v2, T3 v3);
        impl_zip!($($family)+; T1 v1, T2 v2, T3 v3, T4 v4);
        impl_zip!($($family)+; T1 v1, T2 v2, T3 v3, T4 v4, T5 v5);
    };
}

impl_zip_arities!(Maybe);
impl_zip_arities!(Outcome<E>);
impl_zip_arities!(Either<L>);
impl_zip_arities!(Try);
