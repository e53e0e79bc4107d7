//! Catalogue business logic - categories, materials and products.
//!
//! Functions are generic over [`ConnectionTrait`] so they can run either on a
//! plain connection or inside a transaction (the seeder relies on this).

use crate::{
    entities::{
        Category, Material, Product, ProductMaterial, category, material, product,
        product_material,
    },
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, ModelTrait, QueryOrder, Set, prelude::*};
use uuid::Uuid;

/// Input for [`create_product`].
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Unique product name
    pub name: String,
    /// Product type code (e.g. `"base"`)
    pub product_type: String,
    /// Cost per unit in dollars
    pub unit_cost: f64,
    /// Free-form description
    pub description: String,
    /// Existing category to file the product under
    pub category_id: String,
    /// Existing materials to connect the product to
    pub material_ids: Vec<String>,
}

fn validate_name(kind: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: format!("{kind} name cannot be empty"),
        });
    }
    Ok(())
}

/// Creates a category with a freshly generated id.
///
/// # Errors
/// Returns an error if the name is blank or the insert fails (for example on a
/// duplicate name).
pub async fn create_category<C: ConnectionTrait>(
    db: &C,
    name: &str,
    description: &str,
) -> Result<category::Model> {
    validate_name("Category", name)?;

    let category = category::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(name.trim().to_string()),
        description: Set(description.to_string()),
        created_at: Set(chrono::Utc::now()),
    };
    category.insert(db).await.map_err(Into::into)
}

/// Finds a category by its exact name.
pub async fn get_category_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<Option<category::Model>> {
    Category::find()
        .filter(category::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a material with a freshly generated id.
///
/// # Errors
/// Returns an error if the name is blank or the insert fails.
pub async fn create_material<C: ConnectionTrait>(
    db: &C,
    name: &str,
    description: &str,
) -> Result<material::Model> {
    validate_name("Material", name)?;

    let material = material::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(name.trim().to_string()),
        description: Set(description.to_string()),
        created_at: Set(chrono::Utc::now()),
    };
    material.insert(db).await.map_err(Into::into)
}

/// Finds a material by its exact name.
pub async fn get_material_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<Option<material::Model>> {
    Material::find()
        .filter(material::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a product and connects it to its materials.
///
/// The product row and its join rows are separate statements; run this inside
/// a transaction when both must land together.
///
/// # Errors
/// Returns an error if:
/// - The product name is empty or whitespace-only
/// - The unit cost is negative or not finite
/// - The category or any material does not exist
/// - A database statement fails
pub async fn create_product<C: ConnectionTrait>(db: &C, new: NewProduct) -> Result<product::Model> {
    validate_name("Product", &new.name)?;

    if !new.unit_cost.is_finite() || new.unit_cost < 0.0 {
        return Err(Error::InvalidAmount {
            amount: new.unit_cost,
        });
    }

    if Category::find_by_id(new.category_id.clone()).one(db).await?.is_none() {
        return Err(Error::InvalidInput {
            message: format!("Category {} does not exist", new.category_id),
        });
    }

    for material_id in &new.material_ids {
        if Material::find_by_id(material_id.clone()).one(db).await?.is_none() {
            return Err(Error::InvalidInput {
                message: format!("Material {material_id} does not exist"),
            });
        }
    }

    let product = product::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(new.name.trim().to_string()),
        product_type: Set(new.product_type),
        unit_cost: Set(new.unit_cost),
        description: Set(new.description),
        category_id: Set(new.category_id),
        created_at: Set(chrono::Utc::now()),
    }
    .insert(db)
    .await?;

    if !new.material_ids.is_empty() {
        let links = new
            .material_ids
            .into_iter()
            .map(|material_id| product_material::ActiveModel {
                product_id: Set(product.id.clone()),
                material_id: Set(material_id),
            });
        ProductMaterial::insert_many(links)
            .exec_without_returning(db)
            .await?;
    }

    Ok(product)
}

/// Finds a product by its exact name.
pub async fn get_product_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<Option<product::Model>> {
    Product::find()
        .filter(product::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists the materials connected to a product, ordered by name.
pub async fn get_product_materials<C: ConnectionTrait>(
    db: &C,
    product: &product::Model,
) -> Result<Vec<material::Model>> {
    product
        .find_related(Material)
        .order_by_asc(material::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}
