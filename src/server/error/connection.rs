use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectionError {
    /// The database was unreachable or rejected the credentials.
    ///
    /// Carries the driver error. Results in a 500 Internal Server Error; the next
    /// acquisition attempt opens a fresh connection.
    #[error("Failed to connect to the database: {0}")]
    Unavailable(#[source] sea_orm::DbErr),
}

impl ConnectionError {
    /// Client-facing message for connection failures.
    pub const CLIENT_MESSAGE: &'static str = "Não foi possível conectar ao banco de dados.";
}
