//! Order item entity - One cabinet placed in one space of a client's project.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    /// UUID v4 identifier
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Order this item belongs to
    pub order_id: String,
    /// Zero-based position within the order; items are listed in this order
    pub position: i32,
    /// Room or area the cabinet goes into (e.g. "Kitchen")
    pub space_name: String,
    /// Product reference as entered on the order
    pub product_id: String,
    /// Material name as entered on the order
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

/// Order item relationships
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
