//! Persistence gateway trait
//!
//! Uses RPITIT (Return Position Impl Trait In Traits) for async methods, so
//! no `async_trait` boxing is needed. Implementations must validate every
//! candidate record with [`crate::models::validate`] before writing it.

use std::future::Future;

use super::error::RepositoryError;
use super::pagination::{Page, PageRequest};
use crate::models::{Movie, MovieInput};

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// CRUD operations over the movie collection
///
/// "No such record" is `Ok(None)`, never an error. Errors are reserved for
/// validation failures, malformed identifiers and store failures.
pub trait MovieRepository: Send + Sync + 'static {
    /// Fetch one page of records plus the size of the whole collection
    ///
    /// A page past the end yields empty `items` and the correct `total`.
    fn list(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = RepositoryResult<Page<Movie>>> + Send;

    /// Fetch every record
    fn get_all(&self) -> impl Future<Output = RepositoryResult<Vec<Movie>>> + Send;

    /// Find a record by its identifier
    ///
    /// A malformed identifier is an `InvalidId` error; a well-formed but
    /// unknown one is `Ok(None)`.
    fn get_by_id(&self, id: &str) -> impl Future<Output = RepositoryResult<Option<Movie>>> + Send;

    /// Validate and insert a new record, returning it with its assigned ID
    fn create(&self, input: MovieInput) -> impl Future<Output = RepositoryResult<Movie>> + Send;

    /// Apply a partial update; fields absent from `patch` are left unchanged
    ///
    /// The merged record is validated before it is written. Returns the
    /// updated record, or `None` when no record has this ID.
    fn update_by_id(
        &self,
        id: &str,
        patch: MovieInput,
    ) -> impl Future<Output = RepositoryResult<Option<Movie>>> + Send;

    /// Remove a record, returning it, or `None` when no record has this ID
    fn delete_by_id(&self, id: &str)
        -> impl Future<Output = RepositoryResult<Option<Movie>>> + Send;

    /// Check that the store answers
    fn ping(&self) -> impl Future<Output = RepositoryResult<()>> + Send;
}

/// Maximum accepted identifier length
pub const MAX_ID_LEN: usize = 128;

/// Check that `id` is usable as a record key
///
/// Keys are 1 to [`MAX_ID_LEN`] characters from `[A-Za-z0-9_-]`.
pub fn check_id(id: &str) -> RepositoryResult<()> {
    let well_formed = !id.is_empty()
        && id.len() <= MAX_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if well_formed {
        Ok(())
    } else {
        Err(RepositoryError::invalid_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::MovieId;

    #[test]
    fn test_generated_ids_are_well_formed() {
        assert!(check_id(MovieId::new().as_str()).is_ok());
    }

    #[test]
    fn test_unknown_but_well_formed_id() {
        assert!(check_id("nonexistent-id").is_ok());
        assert!(check_id("507f1f77bcf86cd799439011").is_ok());
    }

    #[test]
    fn test_malformed_ids() {
        for id in ["", "movie:1", "a b", "../etc", "⟨x⟩"] {
            assert!(check_id(id).is_err(), "{id:?} should be rejected");
        }
        assert!(check_id(&"a".repeat(MAX_ID_LEN)).is_ok());
        assert!(check_id(&"a".repeat(MAX_ID_LEN + 1)).is_err());
    }
}
