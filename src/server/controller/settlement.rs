use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        settlement::{
            FinalizeSettlementDto, FinalizeSettlementResponseDto, RegisterReceiptsDto,
            RegisterReceiptsResponseDto,
        },
    },
    server::{
        error::AppError,
        model::settlement::{FinalizeSettlementParams, RegisterReceiptParams},
        service::settlement::SettlementService,
        state::AppState,
        util::json::ApiJson,
    },
};

/// Tag for grouping settlement endpoints in OpenAPI documentation
pub static SETTLEMENT_TAG: &str = "settlement";

const REGISTER_ERROR: &str = "Erro interno do servidor ao registrar recebimentos.";
const FINALIZE_ERROR: &str = "Erro ao processar finalização do acerto";

/// Register the amounts received for an order.
///
/// Stores the payment breakdown as given by the application; omitted amounts are
/// stored as zero and the registration time is set by the server.
///
/// # Returns
/// - `200 OK` - The stored row
/// - `400 Bad Request` - `REV_COD` or `PED_COD` missing
/// - `500 Internal Server Error` - Connection or insert failure
#[utoipa::path(
    post,
    path = "/api/registrar-recebimentos",
    tag = SETTLEMENT_TAG,
    request_body = RegisterReceiptsDto,
    responses(
        (status = 200, description = "Receipts stored", body = RegisterReceiptsResponseDto),
        (status = 400, description = "Missing reseller or order code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_receipts(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterReceiptsDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterReceiptParams::from_dto(payload)?;

    let db = state.db().await.map_err(|e| e.context(REGISTER_ERROR))?;
    let settlement = state
        .watch(SettlementService::new(&db).register(params).await)
        .await
        .map_err(|e| e.context(REGISTER_ERROR))?;

    Ok((StatusCode::OK, Json(settlement.into_response_dto())))
}

/// Finalize a settlement.
///
/// Forwards the settlement document to the database procedure, which validates and
/// records it. When the procedure reports a failure, the newest entry of the database
/// error journal is returned in `details` and the procedure's result message in
/// `sqlError`.
///
/// # Returns
/// - `200 OK` - Settlement recorded, with its `FCS_COD`
/// - `400 Bad Request` - `dadosAcerto` missing or not an object
/// - `500 Internal Server Error` - Procedure failure, empty procedure result or call error
#[utoipa::path(
    post,
    path = "/api/finalizar-acerto",
    tag = SETTLEMENT_TAG,
    request_body = FinalizeSettlementDto,
    responses(
        (status = 200, description = "Settlement finalized", body = FinalizeSettlementResponseDto),
        (status = 400, description = "Missing settlement document", body = ErrorDto),
        (status = 500, description = "Procedure failure", body = ErrorDto)
    ),
)]
pub async fn finalize_settlement(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<FinalizeSettlementDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = FinalizeSettlementParams::from_dto(payload)?;

    let db = state.db().await.map_err(|e| e.context(FINALIZE_ERROR))?;
    let result = state
        .watch(SettlementService::new(&db).finalize(params).await)
        .await
        .map_err(|e| e.context(FINALIZE_ERROR))?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}
