//! Order business logic - orders, their line items and the receipts issued for them.
//!
//! Orders are read as a whole through [`get_order_by_id`], which returns the
//! order together with its items and receipts in display order.

use crate::{
    entities::{Order, OrderItem, Receipt, order, order_item, receipt},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{PaginatorTrait, QueryOrder, Set, TransactionTrait, prelude::*};
use uuid::Uuid;

/// An order with its line items and receipts, both in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetails {
    /// The order row
    pub order: order::Model,
    /// Line items ordered by position
    pub items: Vec<order_item::Model>,
    /// Receipts ordered by issue time
    pub receipts: Vec<receipt::Model>,
}

impl OrderDetails {
    /// Looks up a receipt belonging to this order by id.
    #[must_use]
    pub fn find_receipt(&self, receipt_id: &str) -> Option<&receipt::Model> {
        self.receipts.iter().find(|r| r.id == receipt_id)
    }
}

/// Input for [`create_order`].
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// Name printed under "Bill To"
    pub client_name: String,
    /// Installation address
    pub installation_address: String,
    /// Client phone
    pub phone: String,
    /// Client email
    pub email: String,
    /// Project name
    pub project_name: String,
}

/// Input for [`add_order_item`].
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    /// Room or area
    pub space_name: String,
    /// Product reference
    pub product_id: String,
    /// Material name
    pub material: String,
    /// Height in inches
    pub height: f64,
    /// Width in inches
    pub width: f64,
    /// Depth in inches
    pub depth: f64,
    /// Line price in dollars
    pub price: f64,
}

/// Input for [`create_receipt`].
#[derive(Debug, Clone)]
pub struct NewReceipt {
    /// Payment status, e.g. `"paid"`
    pub status: String,
    /// Share of the order total, 0 to 100
    pub payment_percentage: f64,
    /// Amount charged in dollars
    pub amount: f64,
    /// Issue time; defaults to now
    pub created_at: Option<DateTime<Utc>>,
}

/// Loads an order with its items and receipts, or `None` if no such order exists.
pub async fn get_order_by_id(
    db: &DatabaseConnection,
    order_id: &str,
) -> Result<Option<OrderDetails>> {
    let Some(order) = Order::find_by_id(order_id.to_string()).one(db).await? else {
        return Ok(None);
    };

    let items = OrderItem::find()
        .filter(order_item::Column::OrderId.eq(order_id))
        .order_by_asc(order_item::Column::Position)
        .order_by_asc(order_item::Column::Id)
        .all(db)
        .await?;

    let receipts = Receipt::find()
        .filter(receipt::Column::OrderId.eq(order_id))
        .order_by_asc(receipt::Column::CreatedAt)
        .order_by_asc(receipt::Column::Id)
        .all(db)
        .await?;

    Ok(Some(OrderDetails {
        order,
        items,
        receipts,
    }))
}

/// Creates an order with no items or receipts.
///
/// # Errors
/// Returns `Error::InvalidInput` if the client name is blank, or a database
/// error if the insert fails.
pub async fn create_order(db: &DatabaseConnection, new: NewOrder) -> Result<order::Model> {
    if new.client_name.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: "Client name cannot be empty".to_string(),
        });
    }

    let order = order::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        client_name: Set(new.client_name.trim().to_string()),
        installation_address: Set(new.installation_address),
        phone: Set(new.phone),
        email: Set(new.email),
        project_name: Set(new.project_name),
        created_at: Set(Utc::now()),
    };
    order.insert(db).await.map_err(Into::into)
}

async fn ensure_order_exists<C: ConnectionTrait>(db: &C, order_id: &str) -> Result<()> {
    if Order::find_by_id(order_id.to_string()).one(db).await?.is_none() {
        return Err(Error::OrderNotFound {
            id: order_id.to_string(),
        });
    }
    Ok(())
}

fn validate_money(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(())
}

/// Appends a line item to the end of an order.
///
/// The next position is read and the row inserted in one transaction; the
/// unique `(order_id, position)` index rejects a concurrent writer that picked
/// the same slot.
///
/// # Errors
/// Returns an error if:
/// - Any dimension is not a positive finite number
/// - The price is negative or not finite
/// - The order does not exist
/// - The database insert fails
pub async fn add_order_item(
    db: &DatabaseConnection,
    order_id: &str,
    new: NewOrderItem,
) -> Result<order_item::Model> {
    for (label, value) in [("height", new.height), ("width", new.width), ("depth", new.depth)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::InvalidInput {
                message: format!("Item {label} must be a positive number, got {value}"),
            });
        }
    }
    validate_money(new.price)?;

    let txn = db.begin().await?;
    ensure_order_exists(&txn, order_id).await?;

    let existing = OrderItem::find()
        .filter(order_item::Column::OrderId.eq(order_id))
        .count(&txn)
        .await?;
    let position = i32::try_from(existing).map_err(|_| Error::InvalidInput {
        message: format!("Order {order_id} has too many items"),
    })?;

    let item = order_item::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        order_id: Set(order_id.to_string()),
        position: Set(position),
        space_name: Set(new.space_name),
        product_id: Set(new.product_id),
        material: Set(new.material),
        height: Set(new.height),
        width: Set(new.width),
        depth: Set(new.depth),
        price: Set(new.price),
    };
    let item = item.insert(&txn).await?;
    txn.commit().await?;
    Ok(item)
}

/// Issues a receipt against an order.
///
/// # Errors
/// Returns an error if:
/// - The status is blank
/// - The payment percentage is outside 0 to 100
/// - The amount is negative or not finite
/// - The order does not exist
/// - The database insert fails
pub async fn create_receipt(
    db: &DatabaseConnection,
    order_id: &str,
    new: NewReceipt,
) -> Result<receipt::Model> {
    if new.status.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: "Receipt status cannot be empty".to_string(),
        });
    }
    if !(0.0..=100.0).contains(&new.payment_percentage) {
        return Err(Error::InvalidInput {
            message: format!(
                "Payment percentage must be between 0 and 100, got {}",
                new.payment_percentage
            ),
        });
    }
    validate_money(new.amount)?;
    ensure_order_exists(db, order_id).await?;

    let receipt = receipt::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        order_id: Set(order_id.to_string()),
        created_at: Set(new.created_at.unwrap_or_else(Utc::now)),
        status: Set(new.status.trim().to_lowercase()),
        payment_percentage: Set(new.payment_percentage),
        amount: Set(new.amount),
    };
    receipt.insert(db).await.map_err(Into::into)
}
