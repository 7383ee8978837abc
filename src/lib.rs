//! # Switchyard
//!
//! Railway-oriented containers for Rust.
//!
//! A computation that can be absent, fail, or panic is threaded through a
//! chain of combinators instead of nested `match`es. Each step either runs on
//! the happy track or is skipped while the absence or failure travels on to
//! the end of the line.
//!
//! ## The containers
//!
//! All of them wrap one two-slot [`Union`]:
//!
//! - [`Maybe<T>`]: a value or nothing.
//! - [`Outcome<E, S>`]: a success `S` or a domain failure `E`.
//! - [`Try<S>`]: an outcome whose failure is a captured [`Exception`]
//!   (a panic, a raised error, or a cancelled task).
//! - [`Either<L, R>`]: a symmetric left/right value, right-biased when chained.
//!
//! ## Quick Example
//!
//! ```rust
//! use switchyard::{Maybe, Outcome};
//!
//! fn parse(input: &str) -> Outcome<String, i32> {
//!     Outcome::from_result(input.trim().parse::<i32>().map_err(|e| e.to_string()))
//! }
//!
//! fn reciprocal(n: i32) -> Outcome<String, f64> {
//!     if n == 0 {
//!         Outcome::failure("division by zero".to_string())
//!     } else {
//!         Outcome::success(1.0 / n as f64)
//!     }
//! }
//!
//! let out = parse(" 4 ").bind(reciprocal).map(|r| r * 100.0);
//! assert_eq!(out, Outcome::success(25.0));
//!
//! let out = parse("0").bind(reciprocal);
//! assert_eq!(out.into_failure(), Maybe::some("division by zero".to_string()));
//! ```
//!
//! Asynchronous pipelines use the extension traits in [`bridge`]; tuples of
//! containers combine with [`zip::Zip`] and [`zip::Merge`].
//!
//! ## Features
//!
//! - `async`: `Try::from_join` for tokio task handles.
//! - `tracing`: debug/warn events when panics are captured or tasks cancelled.
//! - `serde`: `Serialize`/`Deserialize` for every container.
//! - `proptest`: `Arbitrary` implementations for property tests.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod bridge;
pub mod catching;
pub mod either;
pub mod error;
pub mod exception;
pub mod maybe;
pub mod outcome;
pub mod testing;
pub mod traverse;
pub mod union;
pub mod zip;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use bridge::{AsyncEitherExt, AsyncMaybeExt, AsyncOutcomeExt, AsyncTryExt};
pub use catching::Try;
pub use either::Either;
pub use error::{AccessError, Side};
pub use exception::Exception;
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use union::Union;
pub use zip::{Merge, Zip};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bridge::{AsyncEitherExt, AsyncMaybeExt, AsyncOutcomeExt, AsyncTryExt};
    pub use crate::catching::Try;
    pub use crate::either::Either;
    pub use crate::error::AccessError;
    pub use crate::exception::Exception;
    pub use crate::maybe::Maybe;
    pub use crate::outcome::Outcome;
    pub use crate::union::Union;
    pub use crate::zip::{Merge, Zip};
}
