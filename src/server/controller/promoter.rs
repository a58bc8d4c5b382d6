use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        promoter::{LoginDto, LoginResponseDto},
    },
    server::{
        error::AppError, model::promoter::LoginParams, service::promoter::PromoterService,
        state::AppState, util::json::ApiJson,
    },
};

/// Tag for grouping promoter endpoints in OpenAPI documentation
pub static PROMOTER_TAG: &str = "promoter";

const LOGIN_ERROR: &str = "Erro interno do servidor ao tentar login.";

/// Promoter login.
///
/// Promoters authenticate with their document number (CPF) as both identifier and
/// secret. Only active clients of the promoter groups are accepted.
///
/// # Returns
/// - `200 OK` - Promoter identity with company
/// - `400 Bad Request` - `cpf` or `senha` missing
/// - `401 Unauthorized` - No active promoter matches
/// - `500 Internal Server Error` - Connection or query failure
#[utoipa::path(
    post,
    path = "/api/login-promotor",
    tag = PROMOTER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login succeeded", body = LoginResponseDto),
        (status = 400, description = "Missing credentials", body = ErrorDto),
        (status = 401, description = "Invalid credentials or not a promoter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = LoginParams::from_dto(payload)?;

    let db = state.db().await.map_err(|e| e.context(LOGIN_ERROR))?;
    let promoter = state
        .watch(PromoterService::new(&db).login(params).await)
        .await
        .map_err(|e| e.context(LOGIN_ERROR))?;

    Ok((StatusCode::OK, Json(promoter.into_response_dto())))
}
