//! Async pipelines driven on a tokio runtime.

use std::future::{pending, ready, Pending};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use switchyard::prelude::*;
use switchyard::traverse::traverse_outcome_async;
use tokio::time::timeout;

#[derive(Debug, Clone, PartialEq)]
enum FetchError {
    NotFound(u32),
    Timeout,
}

async fn fetch_user(id: u32) -> Outcome<FetchError, String> {
    tokio::time::sleep(Duration::from_millis(1)).await;
    match id {
        1 => Outcome::success("ada".to_string()),
        2 => Outcome::success("grace".to_string()),
        _ => Outcome::failure(FetchError::NotFound(id)),
    }
}

async fn fetch_score(name: String) -> Outcome<FetchError, u32> {
    tokio::task::yield_now().await;
    Outcome::success(name.len() as u32 * 10)
}

#[tokio::test]
async fn absent_sequence_completes_without_awaiting_inner() {
    let m: Maybe<Pending<u8>> = Maybe::none();
    let done = timeout(Duration::from_secs(1), m.sequence_future()).await;
    assert_eq!(done.ok(), Some(Maybe::none()));

    let o: Outcome<FetchError, Pending<u8>> = Outcome::failure(FetchError::Timeout);
    let done = timeout(Duration::from_secs(1), o.sequence_future()).await;
    assert_eq!(done.ok(), Some(Outcome::failure(FetchError::Timeout)));
}

#[tokio::test]
async fn present_sequence_waits_for_inner() {
    let m = Maybe::some(pending::<u8>());
    let waited = timeout(Duration::from_millis(20), m.sequence_future()).await;
    assert!(waited.is_err());
}

#[tokio::test]
async fn bind_async_chains_steps_in_order() {
    let log = Arc::new(std::sync::Mutex::new(Vec::new()));
    let l1 = Arc::clone(&log);
    let l2 = Arc::clone(&log);

    let score = fetch_user(2)
        .bind_async(move |name| {
            l1.lock().unwrap().push("score");
            fetch_score(name)
        })
        .map_ready(move |s| {
            l2.lock().unwrap().push("double");
            s * 2
        })
        .await;

    assert_eq!(score, Outcome::success(100));
    assert_eq!(*log.lock().unwrap(), vec!["score", "double"]);
}

#[tokio::test]
async fn bind_async_never_invokes_step_after_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let score = fetch_user(9)
        .bind_async(move |name| {
            counter.fetch_add(1, Ordering::SeqCst);
            fetch_score(name)
        })
        .await;

    assert_eq!(score, Outcome::failure(FetchError::NotFound(9)));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn maybe_and_either_bridges() {
    let m = ready(Maybe::some(2))
        .map_async(|n| async move { n + 1 })
        .bind_ready(|n| Maybe::some(n).filter(|n| *n > 2))
        .await;
    assert_eq!(m, Maybe::some(3));

    let e = ready(Either::<&str, i32>::right(5))
        .bind_async(|n| async move {
            if n > 3 {
                Either::left("too big")
            } else {
                Either::right(n)
            }
        })
        .await;
    assert_eq!(e, Either::left("too big"));
}

#[tokio::test]
async fn catching_async_turns_panics_into_failures() {
    let t = ready(Try::success(vec![1, 2, 3]))
        .map_catching_async(|v| async move {
            tokio::task::yield_now().await;
            v[10]
        })
        .await;
    assert!(t.into_failure().unwrap().is_panic());

    let t = ready(Try::success(4))
        .bind_catching_async(|n| async move {
            Try::catching_result(|| format!("{}", n).parse::<u8>())
        })
        .map_ready(|n| n * 2)
        .await;
    assert_eq!(t.unwrap(), 8);
}

#[tokio::test]
async fn try_sequence_future_traps_inner_panic() {
    let t = Try::success(async {
        tokio::time::sleep(Duration::from_millis(1)).await;
        let empty: Vec<u8> = Vec::new();
        empty[0]
    });
    let out = t.sequence_future().await;
    assert!(out.into_failure().unwrap().is_panic());
}

#[tokio::test]
async fn traverse_async_visits_until_first_failure() {
    let visited = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&visited);

    let users = traverse_outcome_async(vec![1, 2, 7, 1], move |id| {
        counter.fetch_add(1, Ordering::SeqCst);
        fetch_user(id)
    })
    .await;

    assert_eq!(users, Outcome::failure(FetchError::NotFound(7)));
    assert_eq!(visited.load(Ordering::SeqCst), 3);
}
