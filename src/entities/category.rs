//! Category entity - Groups products into collections (e.g. "Kitchen Cabinets").
//!
//! Categories are created once at seed time and are not mutated afterwards.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// UUID v4 identifier, generated by the application
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Unique display name
    #[sea_orm(unique)]
    pub name: String,
    /// Free-form description
    pub description: String,
    /// When the category was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Category and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One category has many products
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
