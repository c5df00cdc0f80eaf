//! Structured JSON logging

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::{Error, Result},
};

/// Install the global JSON subscriber, filtered by `service.log_level`
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &Config) -> Result<()> {
    tracing::subscriber::set_global_default(subscriber(config))
        .map_err(|e| Error::Internal(format!("Failed to initialize tracing: {e}")))?;

    tracing::info!(
        service = %config.service.name,
        environment = %config.service.environment,
        "Tracing initialized"
    );

    Ok(())
}

/// Log the end of the process
pub fn shutdown_tracing() {
    tracing::info!("Tracing shutdown complete");
}

/// JSON subscriber for `config`; an unparsable filter falls back to `info`
fn subscriber(config: &Config) -> impl Subscriber + Send + Sync {
    let filter = EnvFilter::try_new(&config.service.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().json().with_env_filter(filter).finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn config_with_level(level: &str) -> Config {
        let mut config = Config::default();
        config.service.log_level = level.to_string();
        config
    }

    #[test]
    fn test_default_level_is_info() {
        tracing::subscriber::with_default(subscriber(&Config::default()), || {
            assert!(tracing::enabled!(Level::INFO));
            assert!(!tracing::enabled!(Level::DEBUG));
        });
    }

    #[test]
    fn test_configured_level_is_applied() {
        tracing::subscriber::with_default(subscriber(&config_with_level("warn")), || {
            assert!(tracing::enabled!(Level::WARN));
            assert!(!tracing::enabled!(Level::INFO));
        });

        tracing::subscriber::with_default(subscriber(&config_with_level("debug")), || {
            assert!(tracing::enabled!(Level::DEBUG));
        });
    }
}
