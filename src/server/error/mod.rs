//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error type that
//! wraps domain-specific errors and implements `IntoResponse`, so every failure reaches
//! the client in the same `{ success: false, error, details?, sqlError? }` envelope.
//!
//! Database messages are surfaced in `details`; the promoter application shows them to
//! support staff when a sync or settlement fails.

pub mod auth;
pub mod config;
pub mod connection;
pub mod item;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, connection::ConnectionError},
};

/// Generic client-facing message for failures without a more specific context.
const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Promoter authentication failure.
    ///
    /// Delegates to `AuthError::into_response()` for its status code.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// The database could not be reached; the connection manager has already dropped
    /// the failed handle.
    #[error(transparent)]
    ConnectionErr(#[from] ConnectionError),

    /// Database operation error from SeaORM (constraint violation, bad SQL, driver error).
    ///
    /// Results in 500 Internal Server Error with the database message in `details`.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Failure to bind the listener or serve connections.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A stored procedure reported failure through its result code.
    ///
    /// # Fields
    /// - `message` - Client-facing description
    /// - `details` - Best available explanation (error log entry or driver message)
    /// - `sql_error` - Result code reported by the procedure, when there is one
    /// - `source` - Driver error when the call itself failed
    #[error("{message}: {details}")]
    Procedure {
        message: String,
        details: String,
        sql_error: Option<String>,
        source: Option<sea_orm::DbErr>,
    },

    /// A request failed while serving a specific endpoint.
    ///
    /// Wraps the underlying error with the endpoint's client-facing message; the status
    /// code comes from the wrapped error.
    #[error("{context}: {source}")]
    Request {
        context: &'static str,
        #[source]
        source: Box<AppError>,
    },

    /// Missing or malformed request field.
    ///
    /// Results in 400 Bad Request with the provided message. Always raised before any
    /// database work starts.
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    /// Attaches the endpoint's client-facing message to a failure.
    ///
    /// Validation, authentication, connection and procedure errors already carry a
    /// client-facing message and are returned unchanged.
    pub fn context(self, context: &'static str) -> Self {
        match self {
            Self::Validation(_)
            | Self::AuthErr(_)
            | Self::ConnectionErr(_)
            | Self::Procedure { .. }
            | Self::Request { .. } => self,
            source => Self::Request {
                context,
                source: Box::new(source),
            },
        }
    }

    /// Whether the failure came from a lost or unobtainable database connection.
    pub fn is_connection_lost(&self) -> bool {
        match self {
            Self::DbErr(err)
            | Self::Procedure {
                source: Some(err), ..
            } => matches!(
                err,
                sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_)
            ),
            Self::Request { source, .. } => source.is_connection_lost(),
            _ => false,
        }
    }

    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::AuthErr(err) => err.status_code(),
            Self::Request { source, .. } => source.status_code(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!(
            "Corpo da requisição inválido: {}",
            rejection.body_text()
        ))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For connection, database, procedure and I/O errors,
///   with the underlying message in `details`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            Self::AuthErr(err) => return err.into_response(),
            Self::Validation(msg) => ErrorDto::new(msg),
            Self::Procedure {
                message,
                details,
                sql_error,
                ..
            } => {
                tracing::error!(
                    "Procedure failure: {} ({})",
                    details,
                    sql_error.as_deref().unwrap_or("no result code")
                );
                let body = ErrorDto::new(message).with_details(details);
                match sql_error {
                    Some(code) => body.with_sql_error(code),
                    None => body,
                }
            }
            Self::Request { context, source } => {
                tracing::error!("{}: {}", context, source);
                ErrorDto::new(context).with_details(source.to_string())
            }
            Self::ConnectionErr(err) => {
                tracing::error!("{}", err);
                ErrorDto::new(ConnectionError::CLIENT_MESSAGE).with_details(err.to_string())
            }
            err => {
                tracing::error!("{}", err);
                ErrorDto::new(INTERNAL_ERROR_MESSAGE).with_details(err.to_string())
            }
        };

        (status, Json(body)).into_response()
    }
}
