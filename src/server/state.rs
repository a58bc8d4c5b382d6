//! Application state shared across all request handlers.
//!
//! The state is built once at startup and cloned into each handler through Axum's state
//! extraction. It only carries the connection manager; everything else is per request.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{connection::ConnectionManager, error::AppError};

#[derive(Clone)]
pub struct AppState {
    /// Owner of the database pool.
    ///
    /// Shared behind an `Arc` so every clone of the state sees the same pool and the
    /// same reconnection state.
    pub connections: Arc<ConnectionManager>,
}

impl AppState {
    pub fn new(connections: Arc<ConnectionManager>) -> Self {
        Self { connections }
    }

    /// Healthy database pool for the current request.
    ///
    /// # Returns
    /// - `Ok(DatabaseConnection)` - Pool ready for queries
    /// - `Err(AppError::ConnectionErr)` - The database is unreachable
    pub async fn db(&self) -> Result<DatabaseConnection, AppError> {
        Ok(self.connections.acquire().await?)
    }

    /// Passes a service result through, discarding the pool first when the failure
    /// shows the database connection was lost.
    pub async fn watch<T>(&self, result: Result<T, AppError>) -> Result<T, AppError> {
        if matches!(&result, Err(err) if err.is_connection_lost()) {
            tracing::warn!("Database connection lost, discarding pool");
            self.connections.invalidate().await;
        }

        result
    }
}
