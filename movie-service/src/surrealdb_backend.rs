//! SurrealDB connection management
//!
//! Supports runtime protocol selection via URL scheme:
//! - `ws://` / `wss://` - WebSocket connections
//! - `http://` / `https://` - HTTP connections
//! - `mem://` - In-memory database (for testing)

use std::time::Duration;

use crate::config::SurrealDbConfig;
use crate::error::{Error, Result};

/// SurrealDB client type alias using the `Any` engine for runtime protocol selection
pub type SurrealClient = surrealdb::Surreal<surrealdb::engine::any::Any>;

/// Connect to SurrealDB, retrying with exponential backoff
///
/// Gives up after `max_retries` failed retries.
pub async fn connect(config: &SurrealDbConfig) -> Result<SurrealClient> {
    let mut attempt = 0;
    let base_delay = Duration::from_secs(config.retry_delay_secs);

    loop {
        match try_connect(config).await {
            Ok(client) => {
                if attempt > 0 {
                    tracing::info!(
                        "SurrealDB connection established after {} attempt(s)",
                        attempt + 1
                    );
                } else {
                    tracing::info!(
                        url = %sanitize_url(&config.url),
                        ns = %config.namespace,
                        db = %config.database,
                        "SurrealDB connected"
                    );
                }
                return Ok(client);
            }
            Err(e) => {
                attempt += 1;

                if attempt > config.max_retries {
                    tracing::error!(
                        "Failed to connect to SurrealDB after {} attempts: {}",
                        config.max_retries + 1,
                        e
                    );
                    return Err(e);
                }

                let delay = base_delay.saturating_mul(2_u32.saturating_pow(attempt - 1));

                tracing::warn!(
                    "SurrealDB connection attempt {} failed: {}. Retrying in {:?}...",
                    attempt,
                    e,
                    delay
                );

                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// Single connection attempt: connect, sign in, select namespace and database
async fn try_connect(config: &SurrealDbConfig) -> Result<SurrealClient> {
    let url_safe = sanitize_url(&config.url);
    tracing::debug!("Connecting to SurrealDB: {}", url_safe);

    let client = surrealdb::engine::any::connect(config.url.as_str())
        .await
        .map_err(|e| {
            Error::Database(format!(
                "Failed to connect to SurrealDB at '{}': {} ({})",
                url_safe,
                categorize(&e),
                e
            ))
        })?;

    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        client
            .signin(surrealdb::opt::auth::Root {
                username,
                password,
            })
            .await
            .map_err(|e| {
                Error::Database(format!(
                    "Failed to authenticate with SurrealDB at '{}': {} ({})",
                    url_safe,
                    categorize(&e),
                    e
                ))
            })?;
    }

    client
        .use_ns(&config.namespace)
        .use_db(&config.database)
        .await
        .map_err(|e| {
            Error::Database(format!(
                "Failed to select namespace '{}' / database '{}' on '{}': {} ({})",
                config.namespace,
                config.database,
                url_safe,
                categorize(&e),
                e
            ))
        })?;

    Ok(client)
}

/// Remove credentials from a connection URL for logging
pub fn sanitize_url(url: &str) -> String {
    if let (Some(at_pos), Some(scheme_end)) = (url.find('@'), url.find("://")) {
        if at_pos > scheme_end {
            return format!("{}***{}", &url[..scheme_end + 3], &url[at_pos..]);
        }
    }
    url.to_string()
}

fn categorize(err: &surrealdb::Error) -> &'static str {
    let err_str = err.to_string().to_lowercase();

    if err_str.contains("auth") || err_str.contains("credentials") || err_str.contains("signin") {
        "authentication error, check your credentials"
    } else if err_str.contains("connect")
        || err_str.contains("network")
        || err_str.contains("dns")
        || err_str.contains("refused")
    {
        "network error, check connectivity"
    } else if err_str.contains("timeout") {
        "connection timeout"
    } else {
        "connection error"
    }
}
