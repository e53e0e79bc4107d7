//! Order entity - A client's cabinet project.
//!
//! An order carries the billing contact and installation address printed on
//! receipts. Line items and receipts hang off it as ordered sequences.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// UUID v4 identifier
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Name printed under "Bill To"
    pub client_name: String,
    /// Installation address, may span several lines
    pub installation_address: String,
    /// Client phone number
    pub phone: String,
    /// Client email address
    pub email: String,
    /// Project name shown in the project details block
    pub project_name: String,
    /// When the order was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One order has many line items
    #[sea_orm(has_many = "super::order_item::Entity")]
    Items,
    /// One order has many receipts
    #[sea_orm(has_many = "super::receipt::Entity")]
    Receipts,
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl Related<super::receipt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Receipts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
