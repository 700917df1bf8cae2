//! App - アプリケーション層
//!
//! Combines the domain model with the `Fetcher` port.
//!
//! # 主要コンポーネント
//! - **BatchConfig**: 同時実行数などの設定
//! - **BatchLoader**: 並行 fetch + join barrier + 集約
//! - **BatchLoaderBuilder**: 構築とワイヤリング（Fail-fast）

pub mod batch;
pub mod builder;
pub mod config;

pub use self::batch::BatchLoader;
pub use self::builder::{BatchLoaderBuilder, BuildError};
pub use self::config::BatchConfig;
