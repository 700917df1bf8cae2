//! Fetcher port - 1 件の key から値を取得する抽象
//!
//! The batch loader only knows this trait; where values come from (HTTP,
//! database, in-memory map) is an implementation detail.

use async_trait::async_trait;

use crate::domain::errors::FetchError;

/// Fetches the value for a single key.
///
/// Implementations should report failures through the returned `Result`.
/// A panic is still contained by the batch loader, but only as a last resort.
#[async_trait]
pub trait Fetcher<K, V>: Send + Sync {
    async fn fetch(&self, key: &K) -> Result<V, FetchError>;
}
