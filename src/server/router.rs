use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{catalog, item, promoter, settlement},
    state::AppState,
};

/// Text returned by the root liveness route.
pub const BANNER: &str = "API de sincronização de promotores está rodando!";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Promoter Sync API",
        description = "Synchronization backend for the promoter sales application"
    ),
    tags(
        (name = "item", description = "Offline order item synchronization"),
        (name = "settlement", description = "Receipts and settlement finalization"),
        (name = "promoter", description = "Promoter authentication"),
        (name = "catalog", description = "Read-only listings backed by database procedures")
    )
)]
pub struct ApiDoc;

/// Builds the API routes with their OpenAPI document served under `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(catalog::order_items))
        .routes(routes!(item::sync_items))
        .routes(routes!(settlement::register_receipts))
        .routes(routes!(settlement::finalize_settlement))
        .routes(routes!(promoter::login))
        .routes(routes!(catalog::general_products))
        .routes(routes!(catalog::pending_settlements))
        .routes(routes!(catalog::discount_rules))
        .split_for_parts();

    router
        .route("/", get(banner))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
}

/// Builds the complete application: routes, request tracing, permissive CORS and state.
pub fn app(state: AppState) -> Router {
    router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn banner() -> &'static str {
    BANNER
}
