//! Movie service
//!
//! Coerces raw client input, delegates to a [`MovieRepository`], and turns
//! gateway outcomes into [`ApiError`]s with the messages clients see.

mod error;

use std::sync::Arc;

use crate::models::{Movie, MovieInput};
use crate::repository::{
    MovieRepository, Page, PageRequest, RepositoryErrorKind, DEFAULT_LIMIT, DEFAULT_PAGE,
};

pub use error::{ApiError, ApiErrorKind, ApiOperation, ErrorBody};

/// Result type for service operations
pub type ServiceResult<T> = std::result::Result<T, ApiError>;

/// Stateless operations over a shared movie gateway
pub struct MovieService<R> {
    repository: Arc<R>,
}

impl<R> Clone for MovieService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: MovieRepository> MovieService<R> {
    /// Create a service over a gateway
    pub fn new(repository: R) -> Self {
        Self::from_arc(Arc::new(repository))
    }

    /// Create a service over an already shared gateway
    pub fn from_arc(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// The underlying gateway
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Fetch one page of movies from raw, possibly absent, query values
    ///
    /// An empty page is a success.
    pub async fn list_movies(
        &self,
        raw_page: Option<&str>,
        raw_limit: Option<&str>,
    ) -> ServiceResult<Page<Movie>> {
        let request = PageRequest::new(
            coerce_positive(raw_page, DEFAULT_PAGE),
            coerce_positive(raw_limit, DEFAULT_LIMIT),
        );
        tracing::debug!(page = request.page, limit = request.limit, "Listing movies");

        self.repository
            .list(request)
            .await
            .map_err(|e| ApiError::from_repository(ApiOperation::List, e))
    }

    /// Fetch every movie; an empty collection is `NotFound`
    pub async fn get_all_movies(&self) -> ServiceResult<Vec<Movie>> {
        let op = ApiOperation::GetAll;
        let movies = self
            .repository
            .get_all()
            .await
            .map_err(|e| ApiError::from_repository(op, e))?;

        if movies.is_empty() {
            return Err(ApiError::not_found(op, "No movies found"));
        }
        Ok(movies)
    }

    pub async fn get_movie(&self, id: &str) -> ServiceResult<Movie> {
        let op = ApiOperation::Get;
        self.repository
            .get_by_id(id)
            .await
            .map_err(|e| ApiError::from_repository(op, e))?
            .ok_or_else(|| {
                ApiError::not_found(op, format!("Movie not found with id: {id}")).with_entity(id)
            })
    }

    /// Validate and store a new movie
    ///
    /// A write the store does not confirm is reported as `BadRequest`.
    pub async fn create_movie(&self, input: MovieInput) -> ServiceResult<Movie> {
        let op = ApiOperation::Create;
        let movie = self.repository.create(input).await.map_err(|e| match e.kind {
            RepositoryErrorKind::NotPersisted => {
                ApiError::bad_request(op, "Movie not created").with_entity(e.entity_id.unwrap_or_default())
            }
            _ => ApiError::from_repository(op, e),
        })?;

        tracing::debug!(movie_id = %movie.id, "Movie created");
        Ok(movie)
    }

    pub async fn update_movie(&self, id: &str, patch: MovieInput) -> ServiceResult<Movie> {
        let op = ApiOperation::Update;
        let movie = self
            .repository
            .update_by_id(id, patch)
            .await
            .map_err(|e| ApiError::from_repository(op, e))?
            .ok_or_else(|| {
                ApiError::not_found(op, format!("Movie can't Updated : {id}")).with_entity(id)
            })?;

        tracing::debug!(movie_id = %movie.id, "Movie updated");
        Ok(movie)
    }

    pub async fn delete_movie(&self, id: &str) -> ServiceResult<Movie> {
        let op = ApiOperation::Delete;
        let movie = self
            .repository
            .delete_by_id(id)
            .await
            .map_err(|e| ApiError::from_repository(op, e))?
            .ok_or_else(|| {
                ApiError::not_found(op, format!("Movie can't Deleted : {id}")).with_entity(id)
            })?;

        tracing::debug!(movie_id = %movie.id, "Movie deleted");
        Ok(movie)
    }
}

/// Parse a positive page number or size, truncating fractions
///
/// Absent, unparsable, non-finite and sub-1 values yield `default`.
fn coerce_positive(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite() && *n >= 1.0)
        // saturating float-to-int cast
        .map(|n| n.trunc() as u64)
        .unwrap_or(default)
}
