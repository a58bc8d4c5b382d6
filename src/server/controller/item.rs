use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        item::{SyncItemsDto, SyncItemsResponseDto},
    },
    server::{
        error::AppError, model::item::SyncItemsParams, service::item::ItemSyncService,
        state::AppState, util::json::ApiJson,
    },
};

/// Tag for grouping item endpoints in OpenAPI documentation
pub static ITEM_TAG: &str = "item";

const SYNC_ERROR: &str = "Erro interno ao sincronizar dados.";

/// Synchronize order item changes made offline.
///
/// Applies a batch of item records reported by the promoter application: status and
/// devolution updates, undone devolutions, new items sold outside the order and removal
/// of such items. The whole batch runs in one transaction; an item that fails, including
/// one with a field that cannot be parsed, is listed in `detalhes.itensComFalha` without
/// affecting the others.
///
/// # Arguments
/// - `state` - Application state containing the connection manager
/// - `payload` - Item records in the order they should be applied
///
/// # Returns
/// - `200 OK` - Batch applied, with counts and per-item details
/// - `400 Bad Request` - `itens` missing, empty or not an array
/// - `500 Internal Server Error` - Connection failure or the transaction could not commit
#[utoipa::path(
    post,
    path = "/api/atualizar-status-itens-ipe",
    tag = ITEM_TAG,
    request_body = SyncItemsDto,
    responses(
        (status = 200, description = "Batch applied", body = SyncItemsResponseDto),
        (status = 400, description = "Missing or empty item list", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sync_items(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SyncItemsDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = SyncItemsParams::from_dto(payload)?;

    tracing::info!("Synchronizing {} item(s)", params.items.len());

    let db = state.db().await.map_err(|e| e.context(SYNC_ERROR))?;
    let summary = state
        .watch(ItemSyncService::new(&db).sync(params).await)
        .await
        .map_err(|e| e.context(SYNC_ERROR))?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
