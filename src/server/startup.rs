use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::server::{config::Config, connection::SeaOrmConnector, error::AppError};

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();
}

/// Builds the production connector from configuration.
///
/// Logs the effective database settings (password masked) before returning.
///
/// # Arguments
/// - `config` - Application configuration containing the database settings
///
/// # Returns
/// - `Ok(SeaOrmConnector)` - Connector ready to open pools
/// - `Err(AppError::ConfigErr)` - The connection URL could not be assembled
pub fn database_connector(config: &Config) -> Result<SeaOrmConnector, AppError> {
    config.log_database_settings();

    Ok(SeaOrmConnector::new(
        config.connect_options()?,
        config.run_migrations,
    ))
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
