//! Query types for list operations
//!
//! Page values are kept as raw strings so that junk like `?page=abc` falls
//! back to the defaults instead of being rejected by the extractor.
//!
//! # Example
//!
//! ```rust
//! use movie_service::handlers::ListQuery;
//!
//! let query: ListQuery = serde_json::from_str(r#"{"page": "2"}"#).unwrap();
//! assert_eq!(query.page.as_deref(), Some("2"));
//! assert!(query.limit.is_none());
//! ```

use serde::{Deserialize, Serialize};

/// Query parameters accepted by `listMovies`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// 1-indexed page number, as sent by the client
    #[serde(default)]
    pub page: Option<String>,
    /// Page size, as sent by the client
    #[serde(default)]
    pub limit: Option<String>,
}
