//! # movie-service
//!
//! REST CRUD service for a movie catalogue, backed by SurrealDB.
//!
//! ## Features
//!
//! - **Movie API**: paginated listing, fetch, create, partial update and delete under `/api/v1/movies`
//! - **Schema validation**: every record is checked before it reaches the store
//! - **Middleware stack**: request IDs, CORS, timeouts, body limits, panic recovery
//! - **Health checks**: liveness and readiness probes
//! - **Graceful shutdown**: SIGTERM and SIGINT handling
//!
//! ## Example
//!
//! ```rust,no_run
//! use movie_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let client = surrealdb_backend::connect(&config.database).await?;
//!     let movies = SurrealMovieRepository::new(std::sync::Arc::new(client));
//!     movies.initialize().await?;
//!
//!     let app = routes::app(AppState::new(config.clone(), movies));
//!     Server::new(config).serve(app).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod health;
pub mod ids;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod repository;
pub mod routes;
pub mod server;
pub mod service;
pub mod state;
pub mod surrealdb_backend;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, MiddlewareConfig, ServiceConfig, SurrealDbConfig};
    pub use crate::error::{Error, Result};
    pub use crate::handlers::{ApiError, ApiErrorKind, ApiOperation, ListQuery, MessageResponse};
    pub use crate::health::{health, readiness};
    pub use crate::ids::{MakeTypedRequestId, MovieId, RequestId};
    pub use crate::models::{Movie, MovieDocument, MovieInput, ValidationError};
    pub use crate::observability::{init_tracing, shutdown_tracing};
    pub use crate::repository::{
        MovieRepository, Page, PageRequest, RepositoryError, SurrealMovieRepository,
    };
    pub use crate::routes;
    pub use crate::server::Server;
    pub use crate::service::MovieService;
    pub use crate::state::AppState;
    pub use crate::surrealdb_backend::{self, SurrealClient};

    pub use axum::Router;
}
