use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No active promoter matches the supplied document and secret.
    ///
    /// Covers unknown documents, wrong secrets, clients outside the promoter groups and
    /// inactive records alike, so the response does not reveal which check failed.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid promoter credentials")]
    InvalidCredentials,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - For `InvalidCredentials`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            Self::InvalidCredentials => (
                status,
                Json(ErrorDto::new(
                    "CPF ou senha inválidos, ou promotor não autorizado.",
                )),
            )
                .into_response(),
        }
    }
}
