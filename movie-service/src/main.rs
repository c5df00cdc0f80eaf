use std::sync::Arc;

use movie_service::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;

    let client = Arc::new(surrealdb_backend::connect(&config.database).await?);
    let movies = SurrealMovieRepository::new(Arc::clone(&client));
    movies.initialize().await?;

    let app = routes::app(AppState::new(config.clone(), movies));
    let result = Server::new(config).serve(app).await;

    // The router, and the gateway with it, is gone once serve returns
    drop(client);
    tracing::info!("SurrealDB connection closed");
    shutdown_tracing();

    result
}
