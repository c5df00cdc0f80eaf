//! Persistence gateway for movie records
//!
//! The gateway owns the store-facing half of the service: it validates every
//! candidate record, talks to SurrealDB, and reports outcomes as
//! `Ok(Some(_))`, `Ok(None)` or a [`RepositoryError`]. It never decides an
//! HTTP status; [`crate::service::MovieService`] does that.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use movie_service::repository::{MovieRepository, PageRequest, SurrealMovieRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = surrealdb::engine::any::connect("mem://").await?;
//! client.use_ns("movies").use_db("movies").await?;
//!
//! let movies = SurrealMovieRepository::new(Arc::new(client));
//! movies.initialize().await?;
//!
//! let page = movies.list(PageRequest::new(1, 10)).await?;
//! println!("{} movies in total", page.total);
//! # Ok(())
//! # }
//! ```

mod error;
#[cfg(test)]
pub(crate) mod memory;
mod pagination;
mod surreal;
mod traits;

// Re-export all public types
pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use pagination::{Page, PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use surreal::{SurrealMovieRepository, MOVIE_TABLE};
pub use traits::{check_id, MovieRepository, RepositoryResult, MAX_ID_LEN};
