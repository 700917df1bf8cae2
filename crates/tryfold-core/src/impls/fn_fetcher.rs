//! FnFetcher - クロージャを Fetcher として使うアダプタ

use async_trait::async_trait;

use crate::domain::errors::FetchError;
use crate::ports::Fetcher;

/// Wraps a synchronous `Fn(&K) -> Result<V, FetchError>` as a `Fetcher`.
pub struct FnFetcher<F> {
    f: F,
}

impl<F> FnFetcher<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<K, V, F> Fetcher<K, V> for FnFetcher<F>
where
    K: Sync,
    V: Send,
    F: Fn(&K) -> Result<V, FetchError> + Send + Sync,
{
    async fn fetch(&self, key: &K) -> Result<V, FetchError> {
        (self.f)(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delegates_to_the_closure() {
        let f = FnFetcher::new(|key: &u32| {
            if *key > 0 {
                Ok(key * 10)
            } else {
                Err(FetchError::failed(400, "zero"))
            }
        });

        assert_eq!(Fetcher::<u32, u32>::fetch(&f, &3).await, Ok(30));
        assert_eq!(
            Fetcher::<u32, u32>::fetch(&f, &0).await,
            Err(FetchError::failed(400, "zero"))
        );
    }
}
