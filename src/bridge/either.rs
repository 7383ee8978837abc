use std::future::Future;

use crate::either::Either;

impl<L, F> Either<L, F>
where
    F: Future,
{
    /// Turn an either holding a pending right value into a pending either.
    ///
    /// A left resolves at once; the right future is only polled when present.
    pub async fn sequence_future(self) -> Either<L, F::Output> {
        match self.into_result() {
            Ok(fut) => Either::right(fut.await),
            Err(left) => Either::left(left),
        }
    }
}

/// Right-biased continuation steps for a pending [`Either`].
pub trait AsyncEitherExt<L, R>: Future<Output = Either<L, R>> + Sized {
    /// Await the either, then await `f` on a right value.
    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Either<L, U>>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = U>,
    {
        async move {
            match self.await.into_result() {
                Ok(right) => Either::right(f(right).await),
                Err(left) => Either::left(left),
            }
        }
    }

    /// Await the either, then await the either produced by `f`.
    fn bind_async<U, F, Fut>(self, f: F) -> impl Future<Output = Either<L, U>>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = Either<L, U>>,
    {
        async move {
            match self.await.into_result() {
                Ok(right) => f(right).await,
                Err(left) => Either::left(left),
            }
        }
    }

    /// Await the either, then apply a synchronous `map`.
    fn map_ready<U, F>(self, f: F) -> impl Future<Output = Either<L, U>>
    where
        F: FnOnce(R) -> U,
    {
        async move { self.await.map(f) }
    }

    /// Await the either, then apply a synchronous `bind`.
    fn bind_ready<U, F>(self, f: F) -> impl Future<Output = Either<L, U>>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        async move { self.await.bind(f) }
    }
}

impl<L, R, Fut> AsyncEitherExt<L, R> for Fut where Fut: Future<Output = Either<L, R>> {}
