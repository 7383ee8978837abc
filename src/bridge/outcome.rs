use std::future::Future;

use crate::outcome::Outcome;

impl<E, F> Outcome<E, F>
where
    F: Future,
{
    /// Turn an outcome holding a pending value into a pending outcome.
    ///
    /// A failure resolves at once and the inner future is dropped unpolled.
    /// A panic while polling a success future propagates to the caller.
    pub async fn sequence_future(self) -> Outcome<E, F::Output> {
        match self.into_result() {
            Ok(fut) => Outcome::success(fut.await),
            Err(err) => Outcome::failure(err),
        }
    }
}

/// Continuation steps for a pending [`Outcome`].
///
/// Implemented for every `Future<Output = Outcome<E, S>>`. Steps run only on
/// success; a failure is carried through untouched.
///
/// # Example
///
/// ```rust
/// use switchyard::bridge::AsyncOutcomeExt;
/// use switchyard::Outcome;
///
/// # tokio_test::block_on(async {
/// let parsed = async { Outcome::<String, &str>::success("21") }
///     .bind_ready(|s| Outcome::from_result(s.parse::<i32>().map_err(|e| e.to_string())))
///     .map_async(|n| async move { n * 2 })
///     .await;
/// assert_eq!(parsed, Outcome::success(42));
/// # });
/// ```
pub trait AsyncOutcomeExt<E, S>: Future<Output = Outcome<E, S>> + Sized {
    /// Await the outcome, then await `f` on a success value.
    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<E, U>>
    where
        F: FnOnce(S) -> Fut,
        Fut: Future<Output = U>,
    {
        async move {
            match self.await.into_result() {
                Ok(value) => Outcome::success(f(value).await),
                Err(err) => Outcome::failure(err),
            }
        }
    }

    /// Await the outcome, then await the outcome produced by `f`.
    fn bind_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<E, U>>
    where
        F: FnOnce(S) -> Fut,
        Fut: Future<Output = Outcome<E, U>>,
    {
        async move {
            match self.await.into_result() {
                Ok(value) => f(value).await,
                Err(err) => Outcome::failure(err),
            }
        }
    }

    /// Await the outcome, then apply a synchronous `map`.
    fn map_ready<U, F>(self, f: F) -> impl Future<Output = Outcome<E, U>>
    where
        F: FnOnce(S) -> U,
    {
        async move { self.await.map(f) }
    }

    /// Await the outcome, then apply a synchronous `bind`.
    fn bind_ready<U, F>(self, f: F) -> impl Future<Output = Outcome<E, U>>
    where
        F: FnOnce(S) -> Outcome<E, U>,
    {
        async move { self.await.bind(f) }
    }
}

impl<E, S, Fut> AsyncOutcomeExt<E, S> for Fut where Fut: Future<Output = Outcome<E, S>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::{pending, ready};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_sequence_future_failure_resolves_without_polling() {
        let o: Outcome<&str, std::future::Pending<i32>> = Outcome::failure("nope");
        assert_eq!(o.sequence_future().await, Outcome::failure("nope"));
    }

    #[tokio::test]
    async fn test_sequence_future_success_awaits_inner() {
        let o = Outcome::<(), _>::success(async { "done" });
        assert_eq!(o.sequence_future().await, Outcome::success("done"));
    }

    #[tokio::test]
    async fn test_map_async_skips_step_on_failure() {
        let calls = AtomicUsize::new(0);
        let out = ready(Outcome::<&str, i32>::failure("bad input"))
            .map_async(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                pending::<i32>()
            })
            .await;

        assert_eq!(out, Outcome::failure("bad input"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_bind_async_failure_from_step() {
        let out = ready(Outcome::<String, i32>::success(10))
            .bind_async(|n| async move {
                if n > 5 {
                    Outcome::failure(format!("{} too large", n))
                } else {
                    Outcome::success(n)
                }
            })
            .map_ready(|n| n + 1)
            .await;

        assert_eq!(out, Outcome::failure("10 too large".to_string()));
    }

    #[tokio::test]
    #[should_panic(expected = "step blew up")]
    async fn test_non_catching_step_panic_propagates() {
        let _ = ready(Outcome::<(), i32>::success(1))
            .map_async(|n| async move {
                if n > 0 {
                    panic!("step blew up");
                }
                n
            })
            .await;
    }
}
