//! Product entity - A cabinet model sold by the shop.
//!
//! Each product belongs to one category and is linked to any number of
//! materials through the `product_materials` join table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// UUID v4 identifier
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Unique product name (e.g. "Base Cabinet")
    #[sea_orm(unique)]
    pub name: String,
    /// Product type code such as `"base"`, `"wall"` or `"tall"`
    pub product_type: String,
    /// Cost per unit in dollars
    pub unit_cost: f64,
    /// Free-form description
    pub description: String,
    /// Category this product is filed under
    pub category_id: String,
    /// When the product was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product belongs to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_delete = "Cascade"
    )]
    Category,
    /// Join rows linking this product to materials
    #[sea_orm(has_many = "super::product_material::Entity")]
    ProductMaterials,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::product_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductMaterials.def()
    }
}

impl Related<super::material::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_material::Relation::Material.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_material::Relation::Product.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
