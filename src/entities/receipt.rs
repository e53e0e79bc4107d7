//! Receipt entity - A payment issued against an order.
//!
//! `payment_percentage` is the share of the order total this receipt covers and
//! `amount` is the dollar value actually charged.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Receipt database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "receipts")]
pub struct Model {
    /// UUID v4 identifier
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Order this receipt was issued for
    pub order_id: String,
    /// When the receipt was issued
    pub created_at: DateTimeUtc,
    /// Payment status such as `"paid"` or `"pending"`
    pub status: String,
    /// Percentage of the order total, 0 to 100
    pub payment_percentage: f64,
    /// Amount charged in dollars
    pub amount: f64,
}

/// Receipt relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The owning order
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_delete = "Cascade"
    )]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
