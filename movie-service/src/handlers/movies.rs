//! Movie endpoint handlers
//!
//! Handlers only extract, delegate to [`crate::service::MovieService`], and
//! shape the response. Every failure is already an [`ApiError`].

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use super::query::ListQuery;
use super::response::MessageResponse;
use crate::models::{Movie, MovieInput};
use crate::repository::{MovieRepository, Page};
use crate::service::{ApiError, ApiOperation};
use crate::state::AppState;

/// `GET /listMovies?page=&limit=`
///
/// A query string that cannot be read at all (a repeated key, for one) is
/// treated as absent, so both values fall back to their defaults.
pub async fn list_movies<R: MovieRepository>(
    State(state): State<AppState<R>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Page<Movie>>, ApiError> {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::debug!("Ignoring unreadable list query: {}", rejection.body_text());
            ListQuery::default()
        }
    };
    let page = state
        .movies()
        .list_movies(query.page.as_deref(), query.limit.as_deref())
        .await?;
    Ok(Json(page))
}

/// `GET /getAllmovies`
pub async fn get_all_movies<R: MovieRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    Ok(Json(state.movies().get_all_movies().await?))
}

/// `GET /getMovie/{id}`
pub async fn get_movie<R: MovieRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    Ok(Json(state.movies().get_movie(&id).await?))
}

/// `POST /addMovie`
pub async fn add_movie<R: MovieRepository>(
    State(state): State<AppState<R>>,
    body: Result<Json<MovieInput>, JsonRejection>,
) -> Result<MessageResponse, ApiError> {
    let Json(input) = body.map_err(|e| ApiError::from_rejection(ApiOperation::Create, e))?;
    state.movies().create_movie(input).await?;
    Ok(MessageResponse::created("Movie created successfully"))
}

/// `PUT /updateMovie/{id}`
pub async fn update_movie<R: MovieRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    body: Result<Json<MovieInput>, JsonRejection>,
) -> Result<MessageResponse, ApiError> {
    let Json(patch) = body.map_err(|e| ApiError::from_rejection(ApiOperation::Update, e))?;
    state.movies().update_movie(&id, patch).await?;
    Ok(MessageResponse::ok("Movie updated successfully"))
}

/// `DELETE /deleteMovie/{id}`
pub async fn delete_movie<R: MovieRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<MessageResponse, ApiError> {
    state.movies().delete_movie(&id).await?;
    Ok(MessageResponse::ok("Movie deleted successfully"))
}
