//! InMemoryFetcher - 開発用・テスト用の Fetcher
//!
//! Answers from a fixed table of outcomes, optionally after a fixed delay to
//! simulate a remote call.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::errors::FetchError;
use crate::ports::Fetcher;

/// InMemoryFetcher は key ごとの結果を事前に登録しておく Fetcher
///
/// # 使用例
/// ```ignore
/// let fetcher = InMemoryFetcher::new()
///     .with_value("1".to_string(), "data1".to_string())
///     .with_failure("3".to_string(), FetchError::failed(500, "boom"))
///     .with_latency(Duration::from_millis(10));
/// ```
///
/// Keys with no entry fail with `FetchError::NotFound`.
pub struct InMemoryFetcher<K, V> {
    entries: HashMap<K, Result<V, FetchError>>,
    latency: Option<Duration>,
}

impl<K, V> InMemoryFetcher<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            latency: None,
        }
    }

    pub fn with_value(mut self, key: K, value: V) -> Self {
        self.entries.insert(key, Ok(value));
        self
    }

    pub fn with_failure(mut self, key: K, error: FetchError) -> Self {
        self.entries.insert(key, Err(error));
        self
    }

    /// Sleep this long before answering each fetch.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> Default for InMemoryFetcher<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for InMemoryFetcher<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k, Ok(v))).collect(),
            latency: None,
        }
    }
}

#[async_trait]
impl<K, V> Fetcher<K, V> for InMemoryFetcher<K, V>
where
    K: Eq + Hash + Display + Send + Sync,
    V: Clone + Send + Sync,
{
    async fn fetch(&self, key: &K) -> Result<V, FetchError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        match self.entries.get(key) {
            Some(entry) => entry.clone(),
            None => Err(FetchError::not_found(key.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_registered_value() {
        let f = InMemoryFetcher::new().with_value(1_u32, "one");
        assert_eq!(f.fetch(&1).await, Ok("one"));
    }

    #[tokio::test]
    async fn returns_registered_failure() {
        let f: InMemoryFetcher<u32, &str> =
            InMemoryFetcher::new().with_failure(2, FetchError::failed(503, "down"));
        assert_eq!(f.fetch(&2).await, Err(FetchError::failed(503, "down")));
    }

    #[tokio::test]
    async fn unknown_key_is_not_found() {
        let f: InMemoryFetcher<String, i32> = InMemoryFetcher::new();
        assert!(f.is_empty());
        assert_eq!(
            f.fetch(&"zzz".to_string()).await,
            Err(FetchError::not_found("zzz"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn latency_is_applied_before_answering() {
        let f: InMemoryFetcher<u32, u32> = [(1, 10)].into_iter().collect();
        let f = f.with_latency(Duration::from_secs(5));
        assert_eq!(f.len(), 1);

        let started = tokio::time::Instant::now();
        assert_eq!(f.fetch(&1).await, Ok(10));
        assert!(started.elapsed() >= Duration::from_secs(5));
    }
}
