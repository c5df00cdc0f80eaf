//! REST handlers for the movie endpoints
//!
//! - [`movies`]: the six movie operations
//! - [`ApiError`]: request failures with HTTP status mapping
//! - [`ListQuery`] and [`MessageResponse`]: request and response shapes

pub mod movies;
mod query;
mod response;

pub use crate::service::{ApiError, ApiErrorKind, ApiOperation, ErrorBody};
pub use query::ListQuery;
pub use response::MessageResponse;
