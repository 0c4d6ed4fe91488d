//! Concurrency-bounded batch execution with per-item failure capture.

use std::future::Future;

use futures::future::join_all;

/// Default ceiling on concurrent upstream calls within one batch.
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Runs `fetch` over every item, at most `concurrency` calls in flight at
/// once, and returns one `Result` per item in input order.
///
/// Items are processed in fixed-size windows: all calls of a window run
/// concurrently and the whole window settles before the next one starts.
/// One item's failure never cancels its siblings; the caller pairs each
/// result with its input by position. No retries happen at this layer.
pub async fn run_batched<I, T, E, F, Fut>(
    items: Vec<I>,
    concurrency: usize,
    fetch: F,
) -> Vec<Result<T, E>>
where
    F: Fn(I) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let window_size = concurrency.max(1);
    let mut results = Vec::with_capacity(items.len());
    let mut remaining = items.into_iter();
    loop {
        let window: Vec<I> = remaining.by_ref().take(window_size).collect();
        if window.is_empty() {
            break;
        }
        let settled = join_all(window.into_iter().map(&fetch)).await;
        results.extend(settled);
    }
    results
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn preserves_input_order_despite_completion_order() {
        // Later items finish first; output must still follow input order.
        let results: Vec<Result<i64, String>> = run_batched(vec![1i64, 2, 3, 4], 4, |n| async move {
            tokio::time::sleep(Duration::from_millis(40 / n as u64)).await;
            Ok(n * 10)
        })
        .await;

        let values: Vec<i64> = results.into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(values, vec![10, 20, 30, 40]);
    }

    #[tokio::test]
    async fn one_failure_does_not_cancel_siblings() {
        let results: Vec<Result<i64, String>> = run_batched(vec![1i64, 2, 3], 10, |n| async move {
            if n == 2 {
                Err(format!("boom {}", n))
            } else {
                Ok(n)
            }
        })
        .await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap(), &1);
        assert_eq!(results[1].as_ref().unwrap_err(), "boom 2");
        assert_eq!(results[2].as_ref().unwrap(), &3);
    }

    #[tokio::test]
    async fn never_exceeds_the_concurrency_ceiling() {
        static IN_FLIGHT: AtomicUsize = AtomicUsize::new(0);
        static MAX_SEEN: AtomicUsize = AtomicUsize::new(0);

        let items: Vec<usize> = (0..25).collect();
        let results: Vec<Result<usize, String>> = run_batched(items, 10, |n| async move {
            let current = IN_FLIGHT.fetch_add(1, Ordering::SeqCst) + 1;
            MAX_SEEN.fetch_max(current, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(5)).await;
            IN_FLIGHT.fetch_sub(1, Ordering::SeqCst);
            Ok(n)
        })
        .await;

        assert_eq!(results.len(), 25);
        assert!(MAX_SEEN.load(Ordering::SeqCst) <= 10);
        // Windows are full-sized until the tail, so the ceiling is reached.
        assert_eq!(MAX_SEEN.load(Ordering::SeqCst), 10);
    }

    #[tokio::test]
    async fn empty_input_yields_empty_output() {
        let results: Vec<Result<i64, String>> =
            run_batched(Vec::new(), 10, |n: i64| async move { Ok(n) }).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn zero_concurrency_is_clamped_to_one() {
        let results: Vec<Result<i64, String>> =
            run_batched(vec![7i64, 8], 0, |n| async move { Ok(n) }).await;
        assert_eq!(results.len(), 2);
    }
}
