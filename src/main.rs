mod model;
mod server;

use std::{net::SocketAddr, sync::Arc};

use crate::server::{
    config::Config, connection::ConnectionManager, error::AppError, router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let connections = Arc::new(ConnectionManager::new(startup::database_connector(&config)?));

    // Requests retry the connection on demand, so a failed first attempt is not fatal.
    match connections.acquire().await {
        Ok(_) => tracing::info!("Connected to the database"),
        Err(err) => tracing::warn!("Initial database connection failed: {}", err),
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    let app = router::app(AppState::new(connections.clone()));
    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    connections.close().await;
    tracing::info!("Server stopped");

    Ok(())
}
