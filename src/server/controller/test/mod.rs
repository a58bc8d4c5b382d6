use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::Value;
use tower::ServiceExt;

use crate::server::{
    connection::{ConnectionManager, Connector},
    router,
    state::AppState,
};


/// Hands out an already open connection.
struct FixedConnector(DatabaseConnection);

#[async_trait]
impl Connector for FixedConnector {
    async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        Ok(self.0.clone())
    }
}

/// Always fails, as if the database server were down.
struct UnreachableConnector;

#[async_trait]
impl Connector for UnreachableConnector {
    async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        Err(DbErr::Custom("connection refused".to_string()))
    }
}

fn app_with(db: &DatabaseConnection) -> Router {
    router::app(AppState::new(Arc::new(ConnectionManager::new(
        FixedConnector(db.clone()),
    ))))
}

fn unreachable_app() -> Router {
    router::app(AppState::new(Arc::new(ConnectionManager::new(
        UnreachableConnector,
    ))))
}

/// Sends a JSON POST request and decodes the JSON response body.
async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}
