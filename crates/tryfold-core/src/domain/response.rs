//! Response shape: the `{"data": {...}, "errors": [...]}` boundary format.
//!
//! This is a pure projection of an `AggregatedResult` whose successes are
//! `(key, value)` pairs. Errors are not paired with keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::aggregate::AggregatedResult;
use super::errors::FetchError;

/// A single entry in `errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub code: u16,
    pub error_message: String,
}

impl ApiError {
    pub fn new(code: u16, error_message: impl Into<String>) -> Self {
        Self {
            code,
            error_message: error_message.into(),
        }
    }
}

impl From<&FetchError> for ApiError {
    fn from(error: &FetchError) -> Self {
        let code = match error {
            FetchError::NotFound { .. } => 404,
            FetchError::Failed { code, .. } => *code,
            FetchError::Panicked { .. } | FetchError::Cancelled { .. } => 500,
        };
        Self::new(code, error.to_string())
    }
}

impl From<FetchError> for ApiError {
    fn from(error: FetchError) -> Self {
        Self::from(&error)
    }
}

/// Partial result as seen by an API client.
///
/// `data` holds only successful entries, keyed by origin. `errors` holds only
/// failures, in the order they occurred in the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize, V: Serialize, E: Serialize",
    deserialize = "K: Deserialize<'de> + Ord, V: Deserialize<'de>, E: Deserialize<'de>"
))]
pub struct ResponseShape<K, V, E> {
    pub data: BTreeMap<K, V>,
    pub errors: Vec<E>,
}

impl<K, V, E> ResponseShape<K, V, E> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Project an aggregated batch into the response shape.
///
/// If the same key succeeds more than once, the later entry wins.
pub fn to_response_shape<K, V, E>(aggregated: AggregatedResult<(K, V), E>) -> ResponseShape<K, V, E>
where
    K: Ord,
{
    let (successes, errors) = aggregated.into_parts();
    ResponseShape {
        data: successes.into_iter().collect(),
        errors,
    }
}

impl<K: Ord, V, E> From<AggregatedResult<(K, V), E>> for ResponseShape<K, V, E> {
    fn from(aggregated: AggregatedResult<(K, V), E>) -> Self {
        to_response_shape(aggregated)
    }
}
