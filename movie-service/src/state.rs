//! Application state management

use std::sync::Arc;

use crate::{config::Config, repository::MovieRepository, service::MovieService};

/// Application state shared across handlers
///
/// Cloned into every request; both fields are reference counted.
pub struct AppState<R> {
    config: Arc<Config>,
    movies: MovieService<R>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            movies: self.movies.clone(),
        }
    }
}

impl<R: MovieRepository> AppState<R> {
    /// Create state over a configuration and a movie gateway
    pub fn new(config: Config, repository: R) -> Self {
        Self {
            config: Arc::new(config),
            movies: MovieService::new(repository),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the movie service
    pub fn movies(&self) -> &MovieService<R> {
        &self.movies
    }
}
