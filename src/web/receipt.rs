//! Receipt page handlers.

use super::AppState;
use crate::{
    core::order,
    errors::{Error, Result},
    receipt::render_receipt,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::{info, warn};

/// Path every missing-order request is redirected to.
pub const NOT_FOUND_PATH: &str = "/404";

/// `GET /orders/:order_id/receipts/:receipt_id`
///
/// Redirects to [`NOT_FOUND_PATH`] when the order does not exist and answers
/// with an empty 404 when the order exists but the receipt does not.
pub async fn show_receipt(
    State(state): State<AppState>,
    Path((order_id, receipt_id)): Path<(String, String)>,
) -> Result<Response> {
    let Some(details) = order::get_order_by_id(&state.database, &order_id).await? else {
        info!("Order {} not found, redirecting to {}", order_id, NOT_FOUND_PATH);
        return Ok(Redirect::to(NOT_FOUND_PATH).into_response());
    };

    let Some(receipt) = details.find_receipt(&receipt_id) else {
        let err = Error::ReceiptNotFound {
            order_id,
            receipt_id,
        };
        warn!("{}", err);
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let today = chrono::Utc::now().date_naive();
    let html = render_receipt(&state.template, &details, receipt, today);
    info!("Rendered receipt {} for order {}", receipt.id, details.order.id);
    Ok(Html(html).into_response())
}

/// Not-found page, served at [`NOT_FOUND_PATH`] and for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Page not found</title>
</head>
<body style="font-family: sans-serif; text-align: center; padding: 64px;">
    <h1>404</h1>
    <p>The page you are looking for does not exist.</p>
</body>
</html>
"#,
        ),
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        config::receipt_template::ReceiptTemplate,
        test_utils::{create_test_item, create_test_order, setup_test_db, setup_with_receipt},
        web::router,
    };
    use axum::{
        body::{Body, to_bytes},
        http::{Request, header},
    };
    use tower::ServiceExt;

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, location, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_show_receipt_renders_page() -> Result<()> {
        let (db, order, receipt) = setup_with_receipt().await?;
        create_test_item(&db, &order.id, "Kitchen").await?;
        create_test_item(&db, &order.id, "Pantry").await?;
        let app = router(AppState::new(db, ReceiptTemplate::default()));

        let uri = format!("/orders/{}/receipts/{}", order.id, receipt.id);
        let (status, _, body) = get(app, &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Cabinet Shop"));
        assert!(body.contains(&order.client_name));
        assert_eq!(body.matches("<tr data-item-id=").count(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_order_redirects_to_404() -> Result<()> {
        let db = setup_test_db().await?;
        let app = router(AppState::new(db, ReceiptTemplate::default()));

        let (status, location, _) = get(app, "/orders/O404/receipts/R1").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some(NOT_FOUND_PATH));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_receipt_renders_nothing() -> Result<()> {
        let db = setup_test_db().await?;
        let order = create_test_order(&db, "Jane Doe").await?;
        let app = router(AppState::new(db, ReceiptTemplate::default()));

        let uri = format!("/orders/{}/receipts/R-missing", order.id);
        let (status, location, body) = get(app, &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(location.is_none());
        assert!(body.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_not_found_page_and_fallback() -> Result<()> {
        let db = setup_test_db().await?;
        let app = router(AppState::new(db, ReceiptTemplate::default()));

        let (status, _, body) = get(app.clone(), NOT_FOUND_PATH).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("does not exist"));

        let (status, _, _) = get(app, "/no/such/route").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn test_health() -> Result<()> {
        let db = setup_test_db().await?;
        let app = router(AppState::new(db, ReceiptTemplate::default()));

        let (status, _, body) = get(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
        Ok(())
    }

    #[tokio::test]
    async fn test_database_error_is_500() -> Result<()> {
        let db = sea_orm::Database::connect("sqlite::memory:").await?;
        let app = router(AppState::new(db, ReceiptTemplate::default()));

        let (status, _, body) = get(app, "/orders/O1/receipts/R1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Internal server error");
        Ok(())
    }
}
