//! Bounded, order-preserving fan-out for per-item API requests.
//!
//! Used for detail lookups that follow a list call: at most `max_concurrent`
//! requests are in flight, and results come back in input order.

use std::future::Future;
use std::pin::Pin;

use futures::stream::{FuturesUnordered, StreamExt};
use log::debug;

use crate::error::Result;

/// Boxed future tagged with the index of the input it was built from
type IndexedFuture<'a, T> = Pin<Box<dyn Future<Output = (usize, Result<T>)> + Send + 'a>>;

/// Run `fetch` for every input with bounded concurrency.
///
/// Results are returned in the same order as `inputs`. The first error
/// aborts the fan-out; requests still in flight are dropped.
///
/// # Example
///
/// ```ignore
/// let details = fetch_ordered(
///     usernames,
///     |username| async move { client.get_teammate(&username).await },
///     8,
/// )
/// .await?;
/// ```
pub async fn fetch_ordered<'a, I, T, F, Fut>(
    inputs: Vec<I>,
    fetch: F,
    max_concurrent: usize,
) -> Result<Vec<T>>
where
    I: Send + 'a,
    T: Send + 'a,
    F: Fn(I) -> Fut + Send + Sync + 'a,
    Fut: Future<Output = Result<T>> + Send + 'a,
{
    if inputs.is_empty() {
        return Ok(Vec::new());
    }

    let width = max_concurrent.max(1);
    let total = inputs.len();
    debug!("Fetching {} items with max {} concurrent", total, width);

    let mut slots: Vec<Option<T>> = Vec::with_capacity(total);
    slots.resize_with(total, || None);

    let make_future = |index: usize, input: I, f: &F| -> IndexedFuture<'a, T> {
        let fut = f(input);
        Box::pin(async move { (index, fut.await) })
    };

    let mut pending = inputs.into_iter().enumerate();
    let mut futures: FuturesUnordered<IndexedFuture<'a, T>> = FuturesUnordered::new();

    for (index, input) in pending.by_ref().take(width) {
        futures.push(make_future(index, input, &fetch));
    }

    while let Some((index, result)) = futures.next().await {
        slots[index] = Some(result?);

        if let Some((next_index, input)) = pending.next() {
            futures.push(make_future(next_index, input, &fetch));
        }
    }

    debug!("Fetched {} items", total);
    Ok(slots.into_iter().flatten().collect())
}
