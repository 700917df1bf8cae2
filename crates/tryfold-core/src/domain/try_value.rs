//! Try container: exactly one of a success value or a failure value.
//!
//! `Try<T, E>` is an immutable tagged union. The payload is consumed through
//! `fold`, `map`, `map_failure` (and the binds built on top of them), or an
//! exhaustive `match`; there is no `unwrap`-style accessor that could let a
//! failure slip by unhandled.
//!
//! # 学習ポイント
//! - 直和型 (enum) による「成功 or 失敗」の表現
//! - `FnOnce` を受け取るコンビネータ（所有権を move して変換）
//! - `catch_unwind` で panic を値に変換する

use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use super::errors::panic_message;

/// Holds either a success value of type `T` or a failure value of type `E`.
///
/// Serialized as an adjacently tagged value:
/// `{"kind":"success","value":...}` / `{"kind":"failure","value":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[must_use = "a Try may hold a failure which must be handled"]
pub enum Try<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Try<T, E> {
    pub fn success(value: T) -> Self {
        Try::Success(value)
    }

    pub fn failure(error: E) -> Self {
        Try::Failure(error)
    }

    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Try::Success(value),
            Err(error) => Try::Failure(error),
        }
    }

    /// Run `f`, turning an unwinding panic into a failure via `on_panic`.
    ///
    /// `on_panic` receives the panic message (or `"unknown panic"` when the
    /// payload is not a string). Panics compiled with `panic = "abort"` are
    /// not catchable and still terminate the process.
    pub fn catch<F, G>(f: F, on_panic: G) -> Self
    where
        F: FnOnce() -> T,
        G: FnOnce(String) -> E,
    {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Try::Success(value),
            Err(payload) => Try::Failure(on_panic(panic_message(payload.as_ref()))),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Try::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Try::Failure(_))
    }

    /// Transform the success value. `f` is never called on a failure.
    pub fn map<U, F>(self, f: F) -> Try<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Try::Success(value) => Try::Success(f(value)),
            Try::Failure(error) => Try::Failure(error),
        }
    }

    /// Transform the failure value. `g` is never called on a success.
    pub fn map_failure<F, G>(self, g: G) -> Try<T, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Try::Success(value) => Try::Success(value),
            Try::Failure(error) => Try::Failure(g(error)),
        }
    }

    /// Reduce both branches to a single value. Exactly one function runs.
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Try::Success(value) => on_success(value),
            Try::Failure(error) => on_failure(error),
        }
    }

    /// Return the success value, or compute one from the failure.
    pub fn recover<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.fold(|value| value, fallback)
    }

    pub fn and_then<U, F>(self, f: F) -> Try<U, E>
    where
        F: FnOnce(T) -> Try<U, E>,
    {
        self.fold(f, Try::Failure)
    }

    pub fn or_else<F, G>(self, g: G) -> Try<T, F>
    where
        G: FnOnce(E) -> Try<T, F>,
    {
        self.fold(Try::Success, g)
    }
}

impl<T, E> From<Result<T, E>> for Try<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Try::from_result(result)
    }
}
