//! Material entity - Raw materials a product can be built from.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Material database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "materials")]
pub struct Model {
    /// UUID v4 identifier
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Unique display name (e.g. "Solid Wood")
    #[sea_orm(unique)]
    pub name: String,
    /// Free-form description
    pub description: String,
    /// When the material was created
    pub created_at: DateTimeUtc,
}

/// Material relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Join rows linking this material to products
    #[sea_orm(has_many = "super::product_material::Entity")]
    ProductMaterials,
}

impl Related<super::product_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductMaterials.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_material::Relation::Product.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_material::Relation::Material.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
