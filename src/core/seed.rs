//! Demonstration data for a fresh database.
//!
//! Seeding inserts one category, one material and one product linked to both.
//! Every record is looked up by name first, so running the seeder again leaves
//! existing rows alone instead of failing on the unique name constraints. The
//! whole run happens in one transaction.

use crate::{
    core::catalog::{self, NewProduct},
    errors::Result,
};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, warn};

/// Seeded category name
pub const CATEGORY_NAME: &str = "Kitchen Cabinets";
/// Seeded category description
pub const CATEGORY_DESCRIPTION: &str = "Kitchen cabinet collection";
/// Seeded material name
pub const MATERIAL_NAME: &str = "Solid Wood";
/// Seeded material description
pub const MATERIAL_DESCRIPTION: &str = "Premium solid wood material";
/// Seeded product name
pub const PRODUCT_NAME: &str = "Base Cabinet";
/// Seeded product type
pub const PRODUCT_TYPE: &str = "base";
/// Seeded product unit cost
pub const PRODUCT_UNIT_COST: f64 = 299.99;
/// Seeded product description
pub const PRODUCT_DESCRIPTION: &str = "Standard base cabinet";

/// What a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Categories inserted by this run
    pub categories_created: usize,
    /// Materials inserted by this run
    pub materials_created: usize,
    /// Products inserted by this run
    pub products_created: usize,
}

impl SeedSummary {
    /// True when the run found everything already present.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.categories_created == 0 && self.materials_created == 0 && self.products_created == 0
    }
}

/// Inserts the demonstration catalogue, skipping records that already exist.
///
/// # Errors
/// Returns an error if any statement fails; nothing is committed in that case.
pub async fn seed_database(db: &DatabaseConnection) -> Result<SeedSummary> {
    let txn = db.begin().await?;
    let mut summary = SeedSummary::default();

    let category = match catalog::get_category_by_name(&txn, CATEGORY_NAME).await? {
        Some(existing) => {
            warn!("Category '{}' already exists. Skipping.", CATEGORY_NAME);
            existing
        }
        None => {
            let created =
                catalog::create_category(&txn, CATEGORY_NAME, CATEGORY_DESCRIPTION).await?;
            info!("Created category '{}' ({})", created.name, created.id);
            summary.categories_created += 1;
            created
        }
    };

    let material = match catalog::get_material_by_name(&txn, MATERIAL_NAME).await? {
        Some(existing) => {
            warn!("Material '{}' already exists. Skipping.", MATERIAL_NAME);
            existing
        }
        None => {
            let created =
                catalog::create_material(&txn, MATERIAL_NAME, MATERIAL_DESCRIPTION).await?;
            info!("Created material '{}' ({})", created.name, created.id);
            summary.materials_created += 1;
            created
        }
    };

    if catalog::get_product_by_name(&txn, PRODUCT_NAME).await?.is_some() {
        warn!("Product '{}' already exists. Skipping.", PRODUCT_NAME);
    } else {
        let created = catalog::create_product(
            &txn,
            NewProduct {
                name: PRODUCT_NAME.to_string(),
                product_type: PRODUCT_TYPE.to_string(),
                unit_cost: PRODUCT_UNIT_COST,
                description: PRODUCT_DESCRIPTION.to_string(),
                category_id: category.id,
                material_ids: vec![material.id],
            },
        )
        .await?;
        info!("Created product '{}' ({})", created.name, created.id);
        summary.products_created += 1;
    }

    txn.commit().await?;
    Ok(summary)
}
