//! Testing utilities for code built on switchyard containers.
//!
//! Assertion macros that name the expected track in their panic message, and
//! (with the `proptest` feature) `Arbitrary` implementations so the
//! containers can be generated in property tests.
//!
//! # Examples
//!
//! ```rust
//! use switchyard::{assert_failure, assert_none, assert_some, assert_success};
//! use switchyard::{Maybe, Outcome, Try};
//!
//! let n = assert_success!(Outcome::<String, _>::success(42));
//! assert_eq!(n, 42);
//!
//! assert_failure!(Outcome::<_, i32>::failure("bad"), "bad");
//! assert_failure!(Try::<i32>::catching(|| panic!("oops")));
//!
//! assert_some!(Maybe::some(1), 1);
//! assert_none!(Maybe::<i32>::none());
//! ```
//!
//! The success/failure macros accept anything with an `into_union`
//! conversion whose right side is the happy track: [`Outcome`](crate::Outcome),
//! [`Try`](crate::Try) and [`Either`](crate::Either).

/// Assert that a container is on the success track and return its value.
///
/// With a second argument, also assert the value equals it.
///
/// # Example
///
/// ```rust
/// use switchyard::{Outcome, assert_success};
///
/// let out = Outcome::<String, _>::success(42);
/// assert_success!(out, 42);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($container:expr) => {
        match ($container).into_union() {
            $crate::Union::Right(value) => value,
            $crate::Union::Left(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
    ($container:expr, $expected:expr) => {
        match ($container).into_union() {
            $crate::Union::Right(value) => assert_eq!(value, $expected),
            $crate::Union::Left(e) => {
                panic!(
                    "Expected Success with {:?}, got Failure: {:?}",
                    $expected, e
                );
            }
        }
    };
}

/// Assert that a container is on the failure track and return the error.
///
/// With a second argument, also assert the error equals it.
///
/// # Example
///
/// ```rust
/// use switchyard::{Outcome, assert_failure};
///
/// let out = Outcome::<_, i32>::failure("error");
/// assert_failure!(out, "error");
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($container:expr) => {
        match ($container).into_union() {
            $crate::Union::Left(e) => e,
            $crate::Union::Right(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
    ($container:expr, $expected:expr) => {
        match ($container).into_union() {
            $crate::Union::Left(e) => assert_eq!(e, $expected),
            $crate::Union::Right(v) => {
                panic!(
                    "Expected Failure with {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

/// Assert that a [`Maybe`](crate::Maybe) holds a value and return it.
///
/// # Example
///
/// ```rust
/// use switchyard::{Maybe, assert_some};
///
/// let name = assert_some!(Maybe::some("ada"));
/// assert_eq!(name, "ada");
/// ```
#[macro_export]
macro_rules! assert_some {
    ($maybe:expr) => {
        match $crate::Maybe::into_option($maybe) {
            ::std::option::Option::Some(value) => value,
            ::std::option::Option::None => panic!("Expected Some, got None"),
        }
    };
    ($maybe:expr, $expected:expr) => {
        match $crate::Maybe::into_option($maybe) {
            ::std::option::Option::Some(value) => assert_eq!(value, $expected),
            ::std::option::Option::None => {
                panic!("Expected Some({:?}), got None", $expected)
            }
        }
    };
}

/// Assert that a [`Maybe`](crate::Maybe) is empty.
#[macro_export]
macro_rules! assert_none {
    ($maybe:expr) => {
        if let ::std::option::Option::Some(v) = $crate::Maybe::into_option($maybe) {
            panic!("Expected None, got Some: {:?}", v);
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{Either, Exception, Maybe, Outcome, Try};

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Maybe<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        proptest::option::of(any_with::<T>(args))
            .prop_map(Maybe::from_option)
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<E, S> Arbitrary for Outcome<E, S>
where
    E: Arbitrary + 'static,
    S: Arbitrary + 'static,
{
    type Parameters = (E::Parameters, S::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (e_params, s_params) = args;
        prop_oneof![
            any_with::<S>(s_params).prop_map(Outcome::success),
            any_with::<E>(e_params).prop_map(Outcome::failure),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<L, R> Arbitrary for Either<L, R>
where
    L: Arbitrary + 'static,
    R: Arbitrary + 'static,
{
    type Parameters = (L::Parameters, R::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (l_params, r_params) = args;
        prop_oneof![
            any_with::<L>(l_params).prop_map(Either::left),
            any_with::<R>(r_params).prop_map(Either::right),
        ]
        .boxed()
    }
}

// Failures are raised errors carrying an arbitrary message.
#[cfg(feature = "proptest")]
impl<S> Arbitrary for Try<S>
where
    S: Arbitrary + 'static,
{
    type Parameters = S::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any_with::<S>(args).prop_map(Try::success),
            any::<String>().prop_map(|m| Try::failure(Exception::new(m))),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Either, Exception, Maybe, Outcome, Try};

    #[test]
    fn assert_success_returns_value() {
        let v = assert_success!(Outcome::<&str, _>::success(42));
        assert_eq!(v, 42);
        assert_success!(Try::success("ok"), "ok");
        assert_success!(Either::<(), _>::right(1), 1);
    }

    #[test]
    fn assert_failure_returns_error() {
        let e = assert_failure!(Try::<i32>::failure(Exception::new("down")));
        assert_eq!(e.message(), "down");
        assert_failure!(Outcome::<_, i32>::failure("error"), "error");
    }

    #[test]
    fn assert_some_and_none() {
        assert_eq!(assert_some!(Maybe::some(3)), 3);
        assert_some!(Maybe::some("x"), "x");
        assert_none!(Maybe::<u8>::none());
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        assert_success!(Outcome::<_, i32>::failure("error"));
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        assert_failure!(Outcome::<String, _>::success(42));
    }

    #[test]
    #[should_panic(expected = "Expected Failure with")]
    fn assert_failure_with_value_panics_on_success() {
        assert_failure!(Outcome::<&str, _>::success(1), "error");
    }

    #[test]
    #[should_panic(expected = "Expected None, got Some: 5")]
    fn assert_none_panics_on_some() {
        assert_none!(Maybe::some(5));
    }

    #[test]
    #[should_panic(expected = "Expected Some, got None")]
    fn assert_some_panics_on_none() {
        assert_some!(Maybe::<i32>::none());
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn outcome_arbitrary_generates_both_tracks(
                out in any::<Outcome<String, i32>>()
            ) {
                prop_assert_ne!(out.is_success(), out.is_failure());
            }

            #[test]
            fn maybe_arbitrary_matches_option(m in any::<Maybe<u8>>()) {
                prop_assert_eq!(m.is_some(), m.into_option().is_some());
            }

            #[test]
            fn try_arbitrary_failures_are_errors(t in any::<Try<i32>>()) {
                if let Some(ex) = t.into_failure().into_option() {
                    prop_assert!(ex.is_error());
                }
            }

            #[test]
            fn either_arbitrary_swap_flips_side(e in any::<Either<u8, i16>>()) {
                prop_assert_eq!(e.is_left(), e.swap().is_right());
            }

            #[test]
            fn nested_arbitrary_strategies_compose(
                m in any::<Maybe<Outcome<String, Either<u8, i16>>>>()
            ) {
                let present = m.is_some();
                let inner = m.into_option().map(|o| o.is_success());
                prop_assert_eq!(present, inner.is_some());
            }
        }
    }
}
