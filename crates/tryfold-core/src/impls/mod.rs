//! Impls - 実装（開発用・テスト用）
//!
//! このモジュールには ports の実装を含めます。
//!
//! # 含まれる実装
//! - **InMemoryFetcher**: 事前登録した結果を返す Fetcher
//! - **FnFetcher**: クロージャを Fetcher に変換するアダプタ

pub mod fn_fetcher;
pub mod inmem_fetcher;

pub use self::fn_fetcher::FnFetcher;
pub use self::inmem_fetcher::InMemoryFetcher;
