//! Domain model: the `Try` container, batch aggregation and the response shape.
//!
//! Nothing in here is async or knows about fetching; it is plain data plus
//! pure functions over it.

pub mod aggregate;
pub mod errors;
pub mod response;
pub mod try_value;

pub use self::aggregate::{AggregatedResult, combine_all, combine_all_indexed};
pub use self::errors::FetchError;
pub use self::response::{ApiError, ResponseShape, to_response_shape};
pub use self::try_value::Try;
