//! A small railway pipeline with logging taps on both tracks.
//!
//! Run with: cargo run --example railway --features tracing

use switchyard::bridge::AsyncTryExt;
use switchyard::zip::Zip;
use switchyard::{Maybe, Outcome, Try};

fn parse(input: &str) -> Outcome<String, i64> {
    Outcome::from_result(
        input
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("{:?} is not a number: {}", input, e)),
    )
}

fn divide(numerator: i64, denominator: i64) -> Outcome<String, i64> {
    if denominator == 0 {
        Outcome::failure(format!("cannot divide {} by zero", numerator))
    } else {
        Outcome::success(numerator / denominator)
    }
}

fn quotient(numerator: &str, denominator: &str) -> Outcome<String, i64> {
    (parse(numerator), parse(denominator))
        .zip_all()
        .tap(|(n, d)| tracing::debug!(n, d, "parsed operands"))
        .bind(|(n, d)| divide(n, d))
        .tap(|q| tracing::info!(quotient = q, "division succeeded"))
        .tap_err(|e| tracing::warn!(error = %e, "division failed"))
}

fn lookup(table: &[(&str, i64)], key: &str) -> Maybe<i64> {
    Maybe::from_option(table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v))
        .tap(|v| tracing::debug!(key, value = v, "lookup hit"))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting railway demo");

    for (n, d) in [("84", "2"), ("7", "0"), ("x", "3")] {
        let out = quotient(n, d);
        let shown = out.fold(|e| format!("error: {}", e), |q| q.to_string());
        tracing::info!("{} / {} -> {}", n, d, shown);
    }

    let table = [("alpha", 1), ("beta", 2)];
    let total = lookup(&table, "alpha")
        .zip(lookup(&table, "gamma"))
        .map(|(a, b)| a + b)
        .default_with(-1);
    tracing::info!(total, "sum of lookups with a missing key");

    // Panics inside catching steps land on the failure track.
    let guarded = Try::catching_result(|| "12".parse::<usize>());
    let indexed = guarded.map_catching(|i| [10, 20, 30][i]);
    tracing::info!("indexing result: {:?}", indexed);

    let fetched = async { Try::success(3_u64) }
        .map_catching_async(|n| async move {
            tokio::task::yield_now().await;
            n * 14
        })
        .await;
    tracing::info!("async result: {:?}", fetched);
}
