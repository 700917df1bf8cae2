//! tryfold-core
//!
//! A `Try<T, E>` container and the partial-result machinery built on it.
//!
//! # モジュール構成
//! - **domain**: `Try`, `AggregatedResult` / `combine_all`, `ResponseShape`, `FetchError`
//! - **ports**: `Fetcher` trait
//! - **app**: `BatchLoader`（並行 fetch → 集約 → response shape）と builder
//! - **impls**: `InMemoryFetcher`, `FnFetcher`（開発用）

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{BatchConfig, BatchLoader, BatchLoaderBuilder, BuildError};
pub use domain::{
    AggregatedResult, ApiError, FetchError, ResponseShape, Try, combine_all, combine_all_indexed,
    to_response_shape,
};
pub use ports::Fetcher;
