//! Router assembly
//!
//! Movie routes are nested under `service.base_path`; the health probes stay
//! at the root.
//!
//! ```rust,no_run
//! use movie_service::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let config = Config::default();
//! let client = surrealdb_backend::connect(&config.database).await?;
//! let movies = SurrealMovieRepository::new(std::sync::Arc::new(client));
//! movies.initialize().await?;
//!
//! let app = routes::app(AppState::new(config.clone(), movies));
//! Server::new(config).serve(app).await
//! # }
//! ```

use axum::{routing::get, routing::post, routing::put, Router};

use crate::{
    handlers::movies,
    health::{health, readiness},
    repository::MovieRepository,
    state::AppState,
};

/// The six movie endpoints, relative to the base path
pub fn movie_routes<R: MovieRepository>() -> Router<AppState<R>> {
    Router::new()
        .route("/listMovies", get(movies::list_movies::<R>))
        .route("/getAllmovies", get(movies::get_all_movies::<R>))
        .route("/getMovie/{id}", get(movies::get_movie::<R>))
        .route("/addMovie", post(movies::add_movie::<R>))
        .route("/updateMovie/{id}", put(movies::update_movie::<R>))
        .route(
            "/deleteMovie/{id}",
            axum::routing::delete(movies::delete_movie::<R>),
        )
}

/// The full application router with state attached
pub fn app<R: MovieRepository>(state: AppState<R>) -> Router {
    let base_path = mount_path(&state.config().service.base_path);

    let router = Router::new()
        .route("/health", get(health::<R>))
        .route("/ready", get(readiness::<R>));

    let router = if base_path.is_empty() {
        router.merge(movie_routes())
    } else {
        router.nest(&base_path, movie_routes())
    };

    router.with_state(state)
}

/// Normalise a configured base path to `/segment[/segment]` or empty
fn mount_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
