use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON body extractor whose rejections use the API's error envelope.
///
/// Malformed bodies, wrong content types and type mismatches all become
/// `AppError::Validation` (400 Bad Request) instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
