//! BatchLoaderBuilder - BatchLoader の構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）

use std::fmt::Display;
use std::sync::Arc;

use crate::ports::Fetcher;

use super::batch::BatchLoader;
use super::config::BatchConfig;

/// BatchLoaderBuilder は BatchLoader を構築
///
/// # 使用例
/// ```ignore
/// let loader = BatchLoaderBuilder::new()
///     .fetcher(MyFetcher::new())
///     .max_concurrency(8)
///     .build()?;
/// ```
///
/// # Fail-fast 設計
/// - fetcher が未設定なら `BuildError::MissingFetcher`
/// - `max_concurrency == 0` なら `BuildError::ZeroConcurrency`（全 fetch が永久に待つため）
pub struct BatchLoaderBuilder<K, V> {
    fetcher: Option<Arc<dyn Fetcher<K, V>>>,
    config: BatchConfig,
}

/// BuildError は BatchLoader 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("No fetcher configured. Call `fetcher()` or `shared_fetcher()` before `build()`.")]
    MissingFetcher,

    #[error("max_concurrency must be at least 1")]
    ZeroConcurrency,
}

impl<K, V> BatchLoaderBuilder<K, V>
where
    K: Display + Clone + Send + Sync + 'static,
    V: Send + 'static,
{
    pub fn new() -> Self {
        Self {
            fetcher: None,
            config: BatchConfig::default(),
        }
    }

    pub fn fetcher<F>(self, fetcher: F) -> Self
    where
        F: Fetcher<K, V> + 'static,
    {
        self.shared_fetcher(Arc::new(fetcher))
    }

    /// Use a fetcher that is also shared with other loaders.
    pub fn shared_fetcher(mut self, fetcher: Arc<dyn Fetcher<K, V>>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Replace the whole config. Later `max_concurrency()` calls still apply.
    pub fn config(mut self, config: BatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.max_concurrency = max_concurrency;
        self
    }

    pub fn build(self) -> Result<BatchLoader<K, V>, BuildError> {
        let fetcher = self.fetcher.ok_or(BuildError::MissingFetcher)?;
        if self.config.max_concurrency == 0 {
            return Err(BuildError::ZeroConcurrency);
        }
        Ok(BatchLoader::new(fetcher, self.config))
    }
}

impl<K, V> Default for BatchLoaderBuilder<K, V>
where
    K: Display + Clone + Send + Sync + 'static,
    V: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
