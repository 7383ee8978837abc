//! Asynchronous continuation for every container family.
//!
//! Two shapes of async value show up in pipelines:
//!
//! - a container holding a pending value, such as `Maybe<impl Future>`. The
//!   inherent `sequence_future` method flips it into a pending container. An
//!   absent or failed container resolves immediately and the inner future is
//!   dropped without being polled.
//! - a pending container, such as `impl Future<Output = Outcome<E, S>>`. The
//!   extension traits in this module ([`AsyncMaybeExt`], [`AsyncOutcomeExt`],
//!   [`AsyncEitherExt`], [`AsyncTryExt`]) chain further steps onto it without
//!   awaiting at every link.
//!
//! Steps run strictly one at a time, in the order they were chained. Nothing
//! here spawns tasks or observes cancellation: dropping the returned future
//! cancels whatever step is in flight.
//!
//! # Example
//!
//! ```rust
//! use switchyard::bridge::AsyncOutcomeExt;
//! use switchyard::Outcome;
//!
//! async fn fetch(id: u32) -> Outcome<String, u32> {
//!     if id == 0 {
//!         Outcome::failure("no such id".to_string())
//!     } else {
//!         Outcome::success(id * 10)
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let total = fetch(4)
//!     .bind_async(|n| async move { Outcome::success(n + 2) })
//!     .map_ready(|n| n * 2)
//!     .await;
//! assert_eq!(total, Outcome::success(84));
//!
//! let missing = fetch(0).map_async(|n| async move { n + 1 }).await;
//! assert!(missing.is_failure());
//! # });
//! ```

mod catching;
mod either;
mod maybe;
mod outcome;

pub use catching::AsyncTryExt;
pub use either::AsyncEitherExt;
pub use maybe::AsyncMaybeExt;
pub use outcome::AsyncOutcomeExt;
