//! SurrealDB-backed movie gateway
//!
//! Records live in the `movie` table keyed by their [`MovieId`]. Every query
//! projects the record key out as a plain string, so rows decode straight
//! into [`Movie`] without touching SurrealDB's `Thing` representation.

use std::sync::Arc;

use serde::Deserialize;

use super::error::{RepositoryError, RepositoryOperation};
use super::pagination::{Page, PageRequest};
use super::traits::{check_id, MovieRepository, RepositoryResult};
use crate::ids::MovieId;
use crate::models::{validate, validate_patch, Movie, MovieDocument, MovieInput};
use crate::surrealdb_backend::SurrealClient;

/// Table holding the movie records
pub const MOVIE_TABLE: &str = "movie";

const SELECT_FIELDS: &str = "record::id(id) AS key, title, director, releaseYear, genre, rating";

/// Row shape returned by every projection in this module
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MovieRow {
    key: String,
    title: String,
    director: String,
    release_year: i64,
    genre: String,
    rating: f64,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie::new(
            row.key,
            MovieDocument {
                title: row.title,
                director: row.director,
                release_year: row.release_year,
                genre: row.genre,
                rating: row.rating,
            },
        )
    }
}

#[derive(Debug, Deserialize)]
struct CountRow {
    total: i64,
}

/// Movie gateway over a shared SurrealDB client
#[derive(Clone)]
pub struct SurrealMovieRepository {
    client: Arc<SurrealClient>,
}

impl SurrealMovieRepository {
    /// Create a gateway over an already connected client
    pub fn new(client: Arc<SurrealClient>) -> Self {
        Self { client }
    }

    /// Define the movie table if it does not exist yet
    pub async fn initialize(&self) -> RepositoryResult<()> {
        self.client
            .query(format!("DEFINE TABLE IF NOT EXISTS {MOVIE_TABLE} SCHEMALESS"))
            .await
            .and_then(|response| response.check())
            .map_err(|e| RepositoryError::from_store(RepositoryOperation::Initialize, &e))?;

        tracing::debug!(table = MOVIE_TABLE, "Movie table initialized");
        Ok(())
    }

    async fn find(&self, operation: RepositoryOperation, id: &str) -> RepositoryResult<Option<Movie>> {
        let mut response = self
            .client
            .query(format!(
                "SELECT {SELECT_FIELDS} FROM type::thing($table, $key)"
            ))
            .bind(("table", MOVIE_TABLE))
            .bind(("key", id.to_owned()))
            .await
            .map_err(|e| RepositoryError::from_store(operation, &e).with_entity(id))?;

        let row: Option<MovieRow> = response
            .take(0)
            .map_err(|e| RepositoryError::from_store(operation, &e).with_entity(id))?;

        Ok(row.map(Movie::from))
    }
}

impl MovieRepository for SurrealMovieRepository {
    async fn list(&self, request: PageRequest) -> RepositoryResult<Page<Movie>> {
        let op = RepositoryOperation::List;
        let limit = i64::try_from(request.limit).unwrap_or(i64::MAX);
        let start = i64::try_from(request.offset()).unwrap_or(i64::MAX);

        let mut response = self
            .client
            .query(format!(
                "SELECT {SELECT_FIELDS} FROM type::table($table) LIMIT $limit START $start"
            ))
            .query("SELECT count() AS total FROM type::table($table) GROUP ALL")
            .bind(("table", MOVIE_TABLE))
            .bind(("limit", limit))
            .bind(("start", start))
            .await
            .map_err(|e| RepositoryError::from_store(op, &e))?;

        let rows: Vec<MovieRow> = response
            .take(0)
            .map_err(|e| RepositoryError::from_store(op, &e))?;
        let count: Option<CountRow> = response
            .take(1)
            .map_err(|e| RepositoryError::from_store(op, &e))?;

        let total = count.map_or(0, |c| u64::try_from(c.total).unwrap_or(0));
        let items = rows.into_iter().map(Movie::from).collect();

        Ok(Page::new(items, total, request))
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Movie>> {
        let op = RepositoryOperation::FindAll;

        let mut response = self
            .client
            .query(format!("SELECT {SELECT_FIELDS} FROM type::table($table)"))
            .bind(("table", MOVIE_TABLE))
            .await
            .map_err(|e| RepositoryError::from_store(op, &e))?;

        let rows: Vec<MovieRow> = response
            .take(0)
            .map_err(|e| RepositoryError::from_store(op, &e))?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn get_by_id(&self, id: &str) -> RepositoryResult<Option<Movie>> {
        check_id(id)?;
        self.find(RepositoryOperation::FindById, id).await
    }

    async fn create(&self, input: MovieInput) -> RepositoryResult<Movie> {
        let op = RepositoryOperation::Create;
        let document =
            validate(input).map_err(|e| RepositoryError::validation_failed(op, &e))?;
        let id = MovieId::new().to_string();

        let mut response = self
            .client
            .query("CREATE type::thing($table, $key) CONTENT $data RETURN NONE")
            .query(format!(
                "SELECT {SELECT_FIELDS} FROM type::thing($table, $key)"
            ))
            .bind(("table", MOVIE_TABLE))
            .bind(("key", id.clone()))
            .bind(("data", document))
            .await
            .and_then(|response| response.check())
            .map_err(|e| RepositoryError::from_store(op, &e).with_entity(id.as_str()))?;

        let row: Option<MovieRow> = response
            .take(1)
            .map_err(|e| RepositoryError::from_store(op, &e).with_entity(id.as_str()))?;

        let movie = row
            .map(Movie::from)
            .ok_or_else(|| RepositoryError::not_persisted(op, id.as_str()))?;

        tracing::debug!(movie_id = %movie.id, "Movie created");
        Ok(movie)
    }

    async fn update_by_id(&self, id: &str, patch: MovieInput) -> RepositoryResult<Option<Movie>> {
        let op = RepositoryOperation::Update;
        check_id(id)?;

        let Some(existing) = self.find(op, id).await? else {
            return Ok(None);
        };

        let document = validate_patch(&existing.document(), patch)
            .map_err(|e| RepositoryError::validation_failed(op, &e).with_entity(id))?;

        let mut response = self
            .client
            .query("UPDATE type::thing($table, $key) CONTENT $data RETURN NONE")
            .query(format!(
                "SELECT {SELECT_FIELDS} FROM type::thing($table, $key)"
            ))
            .bind(("table", MOVIE_TABLE))
            .bind(("key", id.to_owned()))
            .bind(("data", document))
            .await
            .and_then(|response| response.check())
            .map_err(|e| RepositoryError::from_store(op, &e).with_entity(id))?;

        let row: Option<MovieRow> = response
            .take(1)
            .map_err(|e| RepositoryError::from_store(op, &e).with_entity(id))?;

        Ok(row.map(Movie::from))
    }

    async fn delete_by_id(&self, id: &str) -> RepositoryResult<Option<Movie>> {
        let op = RepositoryOperation::Delete;
        check_id(id)?;

        let mut response = self
            .client
            .query(format!(
                "SELECT {SELECT_FIELDS} FROM type::thing($table, $key)"
            ))
            .query("DELETE type::thing($table, $key) RETURN NONE")
            .bind(("table", MOVIE_TABLE))
            .bind(("key", id.to_owned()))
            .await
            .and_then(|response| response.check())
            .map_err(|e| RepositoryError::from_store(op, &e).with_entity(id))?;

        let row: Option<MovieRow> = response
            .take(0)
            .map_err(|e| RepositoryError::from_store(op, &e).with_entity(id))?;

        if row.is_some() {
            tracing::debug!(movie_id = %id, "Movie deleted");
        }
        Ok(row.map(Movie::from))
    }

    async fn ping(&self) -> RepositoryResult<()> {
        self.client
            .query("RETURN true")
            .await
            .and_then(|response| response.check())
            .map_err(|e| RepositoryError::from_store(RepositoryOperation::Ping, &e))?;
        Ok(())
    }
}
