use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{
            DiscountRulesDto, DiscountRulesQueryDto, OrderItemsQueryDto,
            PendingSettlementsQueryDto, RowsDto,
        },
    },
    server::{
        error::AppError,
        model::catalog::{
            rows_into_dto, rules_into_dto, DiscountRulesParams, OrderItemsFilter,
            PendingSettlementsParams,
        },
        service::catalog::CatalogService,
        state::AppState,
        util::json::ApiJson,
    },
};

/// Tag for grouping read-only listing endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

const ORDER_ITEMS_ERROR: &str = "Erro interno do servidor ao executar Stored Procedure.";
const PRODUCTS_ERROR: &str = "Erro ao consultar produtos gerais.";
const PENDING_SETTLEMENTS_ERROR: &str =
    "Erro interno do servidor ao executar Stored Procedure sp_cobranca_acerto.";
const DISCOUNT_RULES_ERROR: &str = "Erro interno ao consultar regras de desconto.";

/// List order items by reseller or order.
///
/// When both codes are sent the order code is used.
///
/// # Returns
/// - `200 OK` - Procedure rows, column names preserved
/// - `400 Bad Request` - Neither `REV_COD` nor `PED_COD` sent
/// - `500 Internal Server Error` - Connection or procedure failure
#[utoipa::path(
    post,
    path = "/api/sp-consulta-ipe-via-rev",
    tag = CATALOG_TAG,
    request_body = OrderItemsQueryDto,
    responses(
        (status = 200, description = "Order items", body = RowsDto),
        (status = 400, description = "Missing reseller and order code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn order_items(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<OrderItemsQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let filter = OrderItemsFilter::from_dto(payload)?;

    let db = state.db().await.map_err(|e| e.context(ORDER_ITEMS_ERROR))?;
    let rows = state
        .watch(CatalogService::new(&db).order_items(filter).await)
        .await
        .map_err(|e| e.context(ORDER_ITEMS_ERROR))?;

    Ok((StatusCode::OK, Json(rows_into_dto(rows))))
}

/// List the products available for sale outside an order.
///
/// # Returns
/// - `200 OK` - Procedure rows, column names preserved
/// - `500 Internal Server Error` - Connection or procedure failure
#[utoipa::path(
    post,
    path = "/api/consultar-produtos-gerais",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Products", body = RowsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn general_products(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.db().await.map_err(|e| e.context(PRODUCTS_ERROR))?;
    let rows = state
        .watch(CatalogService::new(&db).general_products().await)
        .await
        .map_err(|e| e.context(PRODUCTS_ERROR))?;

    Ok((StatusCode::OK, Json(rows_into_dto(rows))))
}

/// List the settlements a promoter still has to collect.
///
/// # Returns
/// - `200 OK` - Procedure rows, column names preserved
/// - `400 Bad Request` - `CLI_COD` missing
/// - `500 Internal Server Error` - Connection or procedure failure
#[utoipa::path(
    post,
    path = "/api/listar-acertos-promotor",
    tag = CATALOG_TAG,
    request_body = PendingSettlementsQueryDto,
    responses(
        (status = 200, description = "Pending settlements", body = RowsDto),
        (status = 400, description = "Missing promoter code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pending_settlements(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<PendingSettlementsQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = PendingSettlementsParams::from_dto(payload)?;

    let db = state
        .db()
        .await
        .map_err(|e| e.context(PENDING_SETTLEMENTS_ERROR))?;
    let rows = state
        .watch(CatalogService::new(&db).pending_settlements(params).await)
        .await
        .map_err(|e| e.context(PENDING_SETTLEMENTS_ERROR))?;

    Ok((StatusCode::OK, Json(rows_into_dto(rows))))
}

/// List the discount bands of an order.
///
/// # Returns
/// - `200 OK` - Bands with type description and their count
/// - `400 Bad Request` - `PED_COD` missing
/// - `500 Internal Server Error` - Connection or query failure
#[utoipa::path(
    post,
    path = "/api/consultar-regras-desconto",
    tag = CATALOG_TAG,
    request_body = DiscountRulesQueryDto,
    responses(
        (status = 200, description = "Discount rules", body = DiscountRulesDto),
        (status = 400, description = "Missing order code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn discount_rules(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<DiscountRulesQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = DiscountRulesParams::from_dto(payload)?;

    let db = state
        .db()
        .await
        .map_err(|e| e.context(DISCOUNT_RULES_ERROR))?;
    let rules = state
        .watch(CatalogService::new(&db).discount_rules(params).await)
        .await
        .map_err(|e| e.context(DISCOUNT_RULES_ERROR))?;

    Ok((StatusCode::OK, Json(rules_into_dto(rules))))
}
