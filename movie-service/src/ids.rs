//! Type-safe identifiers in TypeID format
//!
//! Both request IDs and movie IDs are TypeIDs backed by UUIDv7, so they are
//! readable, prefixed by what they identify, and sort by creation time.
//!
//! ```rust
//! use movie_service::ids::{MovieId, RequestId};
//!
//! let request_id = RequestId::new();
//! assert!(request_id.as_str().starts_with("req_"));
//!
//! let movie_id = MovieId::new();
//! assert!(movie_id.as_str().starts_with("movie_"));
//! ```

use http::Request;
use mti::prelude::*;
use std::fmt;
use tower_http::request_id::{MakeRequestId, RequestId as TowerRequestId};

/// A type-safe request identifier for log correlation.
///
/// Format: `req_<base32-encoded-uuidv7>`, e.g. `req_01h455vb4pex5vsknk084sn02q`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(MagicTypeId);

impl RequestId {
    /// The prefix used for request IDs
    pub const PREFIX: &'static str = "req";

    /// Creates a new request ID with a UUIDv7 (time-sortable).
    #[must_use]
    pub fn new() -> Self {
        Self(Self::PREFIX.create_type_id::<V7>())
    }

    /// Returns the request ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the prefix portion of the ID.
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.0.prefix().as_str()
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a stored movie.
///
/// Format: `movie_<base32-encoded-uuidv7>`. Because the suffix is a UUIDv7,
/// the store's key order matches creation order and an ID is never handed
/// out twice.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MovieId(MagicTypeId);

impl MovieId {
    /// The prefix used for movie IDs
    pub const PREFIX: &'static str = "movie";

    /// Creates a fresh movie ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Self::PREFIX.create_type_id::<V7>())
    }

    /// Returns the movie ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `MakeRequestId` implementation that generates `RequestId`s for tower-http.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeTypedRequestId;

impl MakeRequestId for MakeTypedRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<TowerRequestId> {
        let id = RequestId::new();
        let header_value = http::HeaderValue::from_str(id.as_str()).ok()?;
        Some(TowerRequestId::new(header_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_new() {
        let id = RequestId::new();
        assert!(id.as_str().starts_with("req_"));
        assert_eq!(id.prefix(), "req");
        // prefix (3) + underscore (1) + suffix (26)
        assert_eq!(id.as_str().len(), 30);
    }

    #[test]
    fn test_movie_id_new() {
        let id = MovieId::new();
        assert!(id.as_str().starts_with("movie_"));
        assert_eq!(id.to_string(), id.as_str());
        assert_ne!(MovieId::new(), id);
    }

    #[test]
    fn test_movie_ids_are_time_ordered() {
        let first = MovieId::new();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let second = MovieId::new();
        assert!(first < second);
        assert!(first.as_str() < second.as_str());
    }

    #[test]
    fn test_make_typed_request_id() {
        let mut maker = MakeTypedRequestId;
        let request = http::Request::builder().body(()).unwrap();

        let header_value = maker.make_request_id(&request).unwrap().into_header_value();
        assert!(header_value.to_str().unwrap().starts_with("req_"));
    }
}
