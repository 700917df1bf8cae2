//! Aggregation of independent `Try` values into a partial result.
//!
//! `combine_all` never short-circuits: every input is consumed, and each one
//! lands in exactly one of the two output lists, in input order.

use serde::Serialize;

use super::try_value::Try;

/// All successes and all failures of a finite batch, each in input order.
///
/// Invariant: `successes().len() + failures().len()` equals the number of
/// inputs it was built from. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedResult<T, E> {
    successes: Vec<T>,
    failures: Vec<E>,
}

/// Combine `items` into one `AggregatedResult`.
pub fn combine_all<T, E, I>(items: I) -> AggregatedResult<T, E>
where
    I: IntoIterator<Item = Try<T, E>>,
{
    let iter = items.into_iter();
    let (lower, _) = iter.size_hint();
    let mut successes = Vec::with_capacity(lower);
    let mut failures = Vec::new();

    for item in iter {
        match item {
            Try::Success(value) => successes.push(value),
            Try::Failure(error) => failures.push(error),
        }
    }

    AggregatedResult {
        successes,
        failures,
    }
}

/// Like `combine_all`, but tags every success with its input position.
pub fn combine_all_indexed<T, E, I>(items: I) -> AggregatedResult<(usize, T), E>
where
    I: IntoIterator<Item = Try<T, E>>,
{
    combine_all(
        items
            .into_iter()
            .enumerate()
            .map(|(position, item)| item.map(|value| (position, value))),
    )
}

impl<T, E> AggregatedResult<T, E> {
    pub fn successes(&self) -> &[T] {
        &self.successes
    }

    pub fn failures(&self) -> &[E] {
        &self.failures
    }

    /// Number of inputs this result was built from.
    pub fn len(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when no input failed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<E>) {
        (self.successes, self.failures)
    }

    /// Apply `g` to every failure, keeping order.
    pub fn map_failures<F, G>(self, g: G) -> AggregatedResult<T, F>
    where
        G: FnMut(E) -> F,
    {
        AggregatedResult {
            successes: self.successes,
            failures: self.failures.into_iter().map(g).collect(),
        }
    }
}

impl<T, E> Default for AggregatedResult<T, E> {
    fn default() -> Self {
        Self {
            successes: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T, E> FromIterator<Try<T, E>> for AggregatedResult<T, E> {
    fn from_iter<I: IntoIterator<Item = Try<T, E>>>(iter: I) -> Self {
        combine_all(iter)
    }
}
