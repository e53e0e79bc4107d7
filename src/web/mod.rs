//! HTTP interface - axum router, shared state and error responses.

/// Receipt and not-found page handlers
pub mod receipt;

use crate::{config::receipt_template::ReceiptTemplate, errors::Error};
use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::error;

/// Shared data available to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub database: DatabaseConnection,
    /// Template applied to every rendered receipt
    pub template: Arc<ReceiptTemplate>,
}

impl AppState {
    /// Creates a new `AppState` from a connection and a loaded template.
    #[must_use]
    pub fn new(database: DatabaseConnection, template: ReceiptTemplate) -> Self {
        Self {
            database,
            template: Arc::new(template),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/orders/:order_id/receipts/:receipt_id",
            get(receipt::show_receipt),
        )
        .route("/404", get(receipt::not_found))
        .route("/health", get(health))
        .fallback(receipt::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::OrderNotFound { .. } | Self::ReceiptNotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidInput { .. } | Self::InvalidAmount { .. } => StatusCode::BAD_REQUEST,
            Self::Config { .. } | Self::Database(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            error!("Request failed: {}", self);
            return (status, "Internal server error").into_response();
        }
        (status, self.to_string()).into_response()
    }
}
