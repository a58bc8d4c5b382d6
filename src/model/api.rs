use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error envelope returned by every endpoint on failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Always `false`.
    pub success: bool,
    /// Client-facing description of what failed.
    pub error: String,
    /// Underlying cause, usually the database message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Result code reported by a stored procedure.
    #[serde(rename = "sqlError", default, skip_serializing_if = "Option::is_none")]
    pub sql_error: Option<String>,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
            sql_error: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_sql_error(mut self, sql_error: impl Into<String>) -> Self {
        self.sql_error = Some(sql_error.into());
        self
    }
}
