use std::future::Future;

use crate::catching::Try;
use crate::exception::{capture, capture_future};

impl<F> Try<F>
where
    F: Future,
{
    /// Turn a try holding a pending value into a pending try.
    ///
    /// A failure resolves at once without polling. Unlike the other
    /// families, a panic while polling the inner future is trapped and
    /// becomes the failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Try;
    ///
    /// # tokio_test::block_on(async {
    /// let t = Try::success(async {
    ///     let empty: Vec<u8> = Vec::new();
    ///     empty[3]
    /// });
    /// assert!(t.sequence_future().await.is_failure());
    /// # });
    /// ```
    pub async fn sequence_future(self) -> Try<F::Output> {
        match self.into_result() {
            Ok(fut) => match capture_future(fut).await {
                Ok(value) => Try::success(value),
                Err(ex) => Try::failure(ex),
            },
            Err(ex) => Try::failure(ex),
        }
    }
}

#[cfg(feature = "async")]
impl<S> Try<S> {
    /// Await a spawned tokio task.
    ///
    /// A task that panicked becomes an [`Exception::Panic`](crate::Exception::Panic)
    /// and an aborted task becomes [`Exception::Cancelled`](crate::Exception::Cancelled).
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Try;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let handle = tokio::spawn(async { 2 + 2 });
    /// assert_eq!(Try::from_join(handle).await.unwrap(), 4);
    /// # }
    /// ```
    pub async fn from_join(handle: tokio::task::JoinHandle<S>) -> Try<S> {
        match handle.await {
            Ok(value) => Try::success(value),
            Err(err) => Try::failure(err.into()),
        }
    }
}

/// Continuation steps for a pending [`Try`].
///
/// `map_async` and `bind_async` let a panicking step unwind to whoever polls
/// the returned future. The `_catching_async` variants trap a panic both
/// when calling the step and while polling the future it returns.
///
/// # Example
///
/// ```rust
/// use switchyard::bridge::AsyncTryExt;
/// use switchyard::Try;
///
/// # tokio_test::block_on(async {
/// let t = async { Try::success(0_u32) }
///     .map_catching_async(|n| async move { 10 / n })
///     .await;
/// assert!(t.into_failure().unwrap().is_panic());
/// # });
/// ```
pub trait AsyncTryExt<S>: Future<Output = Try<S>> + Sized {
    /// Await the try, then await `f` on a success value.
    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Try<U>>
    where
        F: FnOnce(S) -> Fut,
        Fut: Future<Output = U>,
    {
        async move {
            match self.await.into_result() {
                Ok(value) => Try::success(f(value).await),
                Err(ex) => Try::failure(ex),
            }
        }
    }

    /// Await the try, then await the try produced by `f`.
    fn bind_async<U, F, Fut>(self, f: F) -> impl Future<Output = Try<U>>
    where
        F: FnOnce(S) -> Fut,
        Fut: Future<Output = Try<U>>,
    {
        async move {
            match self.await.into_result() {
                Ok(value) => f(value).await,
                Err(ex) => Try::failure(ex),
            }
        }
    }

    /// Like [`map_async`](AsyncTryExt::map_async), recording a panic in the
    /// step as the failure.
    fn map_catching_async<U, F, Fut>(self, f: F) -> impl Future<Output = Try<U>>
    where
        F: FnOnce(S) -> Fut,
        Fut: Future<Output = U>,
    {
        async move {
            let value = match self.await.into_result() {
                Ok(value) => value,
                Err(ex) => return Try::failure(ex),
            };
            match capture(|| f(value)) {
                Ok(fut) => Try::success(fut).sequence_future().await,
                Err(ex) => Try::failure(ex),
            }
        }
    }

    /// Like [`bind_async`](AsyncTryExt::bind_async), recording a panic in the
    /// step as the failure.
    fn bind_catching_async<U, F, Fut>(self, f: F) -> impl Future<Output = Try<U>>
    where
        F: FnOnce(S) -> Fut,
        Fut: Future<Output = Try<U>>,
    {
        async move {
            let value = match self.await.into_result() {
                Ok(value) => value,
                Err(ex) => return Try::failure(ex),
            };
            match capture(|| f(value)) {
                Ok(fut) => Try::success(fut).sequence_future().await.flatten(),
                Err(ex) => Try::failure(ex),
            }
        }
    }

    /// Await the try, then apply a synchronous `map`.
    fn map_ready<U, F>(self, f: F) -> impl Future<Output = Try<U>>
    where
        F: FnOnce(S) -> U,
    {
        async move { self.await.map(f) }
    }

    /// Await the try, then apply a synchronous `bind`.
    fn bind_ready<U, F>(self, f: F) -> impl Future<Output = Try<U>>
    where
        F: FnOnce(S) -> Try<U>,
    {
        async move { self.await.bind(f) }
    }
}

impl<S, Fut> AsyncTryExt<S> for Fut where Fut: Future<Output = Try<S>> {}
