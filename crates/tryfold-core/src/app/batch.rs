//! BatchLoader - 独立したフェッチを並行実行して部分結果を返す
//!
//! # 学習ポイント
//! - `tokio::spawn` による fetch ごとの独立タスク（panic は JoinError で隔離される）
//! - `Semaphore` で同時実行数を制限
//! - 全 JoinHandle を await する join barrier のあとで `combine_all`

use std::fmt::Display;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, warn};

use crate::domain::aggregate::{AggregatedResult, combine_all};
use crate::domain::errors::{FetchError, panic_message};
use crate::domain::response::{ApiError, ResponseShape, to_response_shape};
use crate::domain::try_value::Try;
use crate::ports::Fetcher;

use super::config::BatchConfig;

/// Runs one fetch per key, concurrently, and aggregates every outcome.
///
/// Built through [`BatchLoaderBuilder`](super::builder::BatchLoaderBuilder),
/// which guarantees a fetcher is present and `max_concurrency > 0`.
pub struct BatchLoader<K, V> {
    fetcher: Arc<dyn Fetcher<K, V>>,
    config: BatchConfig,
}

impl<K, V> BatchLoader<K, V>
where
    K: Display + Clone + Send + Sync + 'static,
    V: Send + 'static,
{
    pub(crate) fn new(fetcher: Arc<dyn Fetcher<K, V>>, config: BatchConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Fetch every key and return all successes and all failures.
    ///
    /// A failing or panicking fetch never affects its siblings. Returns only
    /// after every fetch has finished. Successes are `(key, value)` pairs in
    /// input order.
    ///
    /// Dropping the returned future before it completes aborts every fetch
    /// that is still running.
    pub async fn load_all<I>(&self, keys: I) -> AggregatedResult<(K, V), FetchError>
    where
        I: IntoIterator<Item = K>,
    {
        let permits = Arc::new(Semaphore::new(
            self.config.max_concurrency.min(Semaphore::MAX_PERMITS),
        ));

        let keys: Vec<K> = keys.into_iter().collect();
        let mut pending = PendingFetches {
            handles: Vec::with_capacity(keys.len()),
        };
        for key in &keys {
            let fetcher = Arc::clone(&self.fetcher);
            let permits = Arc::clone(&permits);
            let task_key = key.clone();

            pending.handles.push(tokio::spawn(async move {
                // the semaphore is never closed, so this always yields a permit
                let _permit = permits.acquire_owned().await.ok();
                fetcher.fetch(&task_key).await
            }));
        }

        debug!(batch_size = keys.len(), "batch started");

        let mut outcomes = Vec::with_capacity(keys.len());
        for (key, handle) in keys.into_iter().zip(pending.handles.iter_mut()) {
            outcomes.push(settle(key, handle.await));
        }

        let aggregated = combine_all(outcomes);
        debug!(
            succeeded = aggregated.successes().len(),
            failed = aggregated.failures().len(),
            "batch finished"
        );
        aggregated
    }

    /// `load_all`, projected into the `{"data", "errors"}` response shape.
    pub async fn load_response<I>(&self, keys: I) -> ResponseShape<K, V, ApiError>
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        let aggregated = self.load_all(keys).await.map_failures(ApiError::from);
        to_response_shape(aggregated)
    }
}

/// Spawned fetch tasks of one `load_all` call; aborts whatever is still
/// running when dropped. Aborting a finished task is a no-op.
struct PendingFetches<V> {
    handles: Vec<JoinHandle<Result<V, FetchError>>>,
}

impl<V> Drop for PendingFetches<V> {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}

/// Turn the joined outcome of one fetch task into a `Try`.
fn settle<K, V>(key: K, joined: Result<Result<V, FetchError>, JoinError>) -> Try<(K, V), FetchError>
where
    K: Display,
{
    match joined {
        Ok(Ok(value)) => Try::success((key, value)),
        Ok(Err(err)) => {
            warn!(key = %key, error = %err, "fetch failed");
            Try::failure(err)
        }
        Err(join_err) if join_err.is_panic() => {
            let message = panic_message(join_err.into_panic().as_ref());
            error!(key = %key, panic = %message, "fetch panicked");
            Try::failure(FetchError::Panicked {
                key: key.to_string(),
                message,
            })
        }
        Err(_) => {
            warn!(key = %key, "fetch cancelled");
            Try::failure(FetchError::Cancelled {
                key: key.to_string(),
            })
        }
    }
}
