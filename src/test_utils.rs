//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::order::{self, NewOrder, NewOrderItem, NewReceipt},
    entities,
    errors::Result,
    migration::run_migrations,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all migrations applied.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    run_migrations(&db).await?;
    Ok(db)
}

/// Creates a test order for `client_name` with placeholder contact details.
pub async fn create_test_order(
    db: &DatabaseConnection,
    client_name: &str,
) -> Result<entities::order::Model> {
    order::create_order(
        db,
        NewOrder {
            client_name: client_name.to_string(),
            installation_address: "42 Elm Street\nSpringfield".to_string(),
            phone: "555-0199".to_string(),
            email: "client@example.com".to_string(),
            project_name: "Kitchen Remodel".to_string(),
        },
    )
    .await
}

/// A 30x24x12 solid wood base cabinet priced at 299.99.
#[must_use]
pub fn test_item(space_name: &str) -> NewOrderItem {
    NewOrderItem {
        space_name: space_name.to_string(),
        product_id: "Base Cabinet".to_string(),
        material: "Solid Wood".to_string(),
        height: 30.0,
        width: 24.0,
        depth: 12.0,
        price: 299.99,
    }
}

/// Appends [`test_item`] to an order.
pub async fn create_test_item(
    db: &DatabaseConnection,
    order_id: &str,
    space_name: &str,
) -> Result<entities::order_item::Model> {
    order::add_order_item(db, order_id, test_item(space_name)).await
}

/// Issues a paid receipt for half the order, charging 299.99.
pub async fn create_test_receipt(
    db: &DatabaseConnection,
    order_id: &str,
) -> Result<entities::receipt::Model> {
    order::create_receipt(
        db,
        order_id,
        NewReceipt {
            status: "paid".to_string(),
            payment_percentage: 50.0,
            amount: 299.99,
            created_at: None,
        },
    )
    .await
}

/// Sets up a database holding one order with one receipt.
/// Returns (db, order, receipt).
pub async fn setup_with_receipt() -> Result<(
    DatabaseConnection,
    entities::order::Model,
    entities::receipt::Model,
)> {
    let db = setup_test_db().await?;
    let order = create_test_order(&db, "Jane Doe").await?;
    let receipt = create_test_receipt(&db, &order.id).await?;
    Ok((db, order, receipt))
}
