//! Database connection lifecycle.
//!
//! The server keeps a single SeaORM pool in a [`ConnectionManager`]. Every request asks
//! the manager for the pool; the manager pings it first and replaces it when the
//! database went away, so a restarted database server is picked up without restarting
//! the API. Health checks and reconnects run outside the manager's lock, so requests
//! never wait on each other. Opening a pool goes through the [`Connector`] trait so the
//! manager can be tested without a real database server.

use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tokio::sync::Mutex;

use crate::server::error::connection::ConnectionError;

/// Opens a new database pool.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self) -> Result<DatabaseConnection, DbErr>;
}

/// Connector backed by `sea_orm::Database::connect`.
pub struct SeaOrmConnector {
    options: ConnectOptions,
    run_migrations: bool,
}

impl SeaOrmConnector {
    /// # Arguments
    /// - `options` - Pool options, including URL, size and connect timeout
    /// - `run_migrations` - Apply pending migrations after connecting (local databases only)
    pub fn new(options: ConnectOptions, run_migrations: bool) -> Self {
        Self {
            options,
            run_migrations,
        }
    }
}

#[async_trait]
impl Connector for SeaOrmConnector {
    async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        let db = Database::connect(self.options.clone()).await?;

        if self.run_migrations {
            tracing::info!("Applying pending migrations");
            Migrator::up(&db, None).await?;
        }

        Ok(db)
    }
}

/// Current pool and a counter bumped every time it is replaced or dropped.
#[derive(Default)]
struct Slot {
    db: Option<DatabaseConnection>,
    generation: u64,
}

/// Holds the shared pool and recreates it when it stops answering.
///
/// The lock only guards reading and swapping the handle. Health checks and connection
/// attempts run without it, so concurrent requests never queue behind one another.
pub struct ConnectionManager {
    connector: Box<dyn Connector>,
    slot: Mutex<Slot>,
}

impl ConnectionManager {
    pub fn new(connector: impl Connector + 'static) -> Self {
        Self {
            connector: Box::new(connector),
            slot: Mutex::new(Slot::default()),
        }
    }

    /// Returns the current pool, opening a new one when there is none or the current
    /// one fails a ping.
    ///
    /// # Returns
    /// - `Ok(DatabaseConnection)` - Healthy pool (clones share the same pool)
    /// - `Err(ConnectionError::Unavailable)` - The database could not be reached; no
    ///   pool is kept, so the next call tries again
    pub async fn acquire(&self) -> Result<DatabaseConnection, ConnectionError> {
        let (current, generation) = {
            let slot = self.slot.lock().await;
            (slot.db.clone(), slot.generation)
        };

        if let Some(db) = current {
            match db.ping().await {
                Ok(()) => return Ok(db),
                Err(err) => {
                    tracing::warn!("Database pool failed health check, reconnecting: {}", err);
                    if let Some(replacement) = self.discard(generation).await {
                        return Ok(replacement);
                    }
                }
            }
        }

        tracing::info!("Opening database connection pool");
        let db = self
            .connector
            .connect()
            .await
            .map_err(ConnectionError::Unavailable)?;

        Ok(self.install(db).await)
    }

    /// Drops the pool observed at `generation`.
    ///
    /// Returns the pool another task installed in the meantime, if any.
    async fn discard(&self, generation: u64) -> Option<DatabaseConnection> {
        let stale = {
            let mut slot = self.slot.lock().await;
            if slot.generation != generation {
                return slot.db.clone();
            }
            slot.generation += 1;
            slot.db.take()
        };

        if let Some(db) = stale {
            if let Err(err) = db.close().await {
                tracing::debug!("Closing stale pool failed: {}", err);
            }
        }

        None
    }

    /// Stores a newly opened pool, unless another task stored one first.
    async fn install(&self, db: DatabaseConnection) -> DatabaseConnection {
        let existing = {
            let mut slot = self.slot.lock().await;
            match &slot.db {
                Some(existing) => existing.clone(),
                None => {
                    slot.db = Some(db.clone());
                    slot.generation += 1;
                    return db;
                }
            }
        };

        if let Err(err) = db.close().await {
            tracing::debug!("Closing redundant pool failed: {}", err);
        }

        existing
    }

    /// Drops the current pool so the next `acquire` opens a new one.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.lock().await;
        if slot.db.take().is_some() {
            slot.generation += 1;
            tracing::warn!("Database pool invalidated");
        }
    }

    /// Closes the pool on shutdown.
    pub async fn close(&self) {
        let db = {
            let mut slot = self.slot.lock().await;
            slot.generation += 1;
            slot.db.take()
        };
        let Some(db) = db else {
            return;
        };

        match db.close().await {
            Ok(()) => tracing::info!("Database pool closed"),
            Err(err) => tracing::error!("Failed to close database pool: {}", err),
        }
    }
}
