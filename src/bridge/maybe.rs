use std::future::Future;

use crate::maybe::Maybe;

impl<F> Maybe<F>
where
    F: Future,
{
    /// Turn a maybe-pending value into a pending maybe.
    ///
    /// An absent container resolves at once and the inner future is never
    /// polled. A panic while polling a present future propagates.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Maybe;
    ///
    /// # tokio_test::block_on(async {
    /// let m = Maybe::some(async { 7 }).sequence_future().await;
    /// assert_eq!(m, Maybe::some(7));
    ///
    /// let never = Maybe::<std::future::Pending<i32>>::none();
    /// assert!(never.sequence_future().await.is_none());
    /// # });
    /// ```
    pub async fn sequence_future(self) -> Maybe<F::Output> {
        match self.into_option() {
            Some(fut) => Maybe::some(fut.await),
            None => Maybe::none(),
        }
    }
}

/// Continuation steps for a pending [`Maybe`].
///
/// Implemented for every `Future<Output = Maybe<T>>`.
pub trait AsyncMaybeExt<T>: Future<Output = Maybe<T>> + Sized {
    /// Await the container, then await `f` on a present value.
    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move {
            match self.await.into_option() {
                Some(value) => Maybe::some(f(value).await),
                None => Maybe::none(),
            }
        }
    }

    /// Await the container, then await the maybe produced by `f`.
    fn bind_async<U, F, Fut>(self, f: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        async move {
            match self.await.into_option() {
                Some(value) => f(value).await,
                None => Maybe::none(),
            }
        }
    }

    /// Await the container, then apply a synchronous `map`.
    fn map_ready<U, F>(self, f: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(f) }
    }

    /// Await the container, then apply a synchronous `bind`.
    fn bind_ready<U, F>(self, f: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        async move { self.await.bind(f) }
    }
}

impl<T, Fut> AsyncMaybeExt<T> for Fut where Fut: Future<Output = Maybe<T>> {}
