//! Ports - 抽象化レイヤー
//!
//! Seams between the batch loader and the outside world.

pub mod fetcher;

pub use self::fetcher::Fetcher;
