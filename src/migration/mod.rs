//! Schema migrations, applied in order by [`Migrator`].

use sea_orm_migration::prelude::*;

mod m20240101_000001_enable_uuid_extension;
mod m20240101_000002_create_catalog_tables;
mod m20240101_000003_create_order_tables;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::errors::Result;

/// Every migration the application knows about, oldest first.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_enable_uuid_extension::Migration),
            Box::new(m20240101_000002_create_catalog_tables::Migration),
            Box::new(m20240101_000003_create_order_tables::Migration),
        ]
    }
}

/// Applies all pending migrations.
///
/// Safe to call repeatedly: applied migrations are tracked in the
/// `seaql_migrations` table and every DDL statement is guarded with
/// `IF NOT EXISTS`.
pub async fn run_migrations(db: &DatabaseConnection) -> Result<()> {
    let pending = Migrator::get_pending_migrations(db).await?;
    info!("{} pending migration(s)", pending.len());
    for migration in &pending {
        info!("Applying migration: {}", migration.name());
    }

    Migrator::up(db, None).await?;
    Ok(())
}

/// Rolls back every applied migration, newest first.
pub async fn rollback_migrations(db: &DatabaseConnection) -> Result<()> {
    let applied = Migrator::get_applied_migrations(db).await?;
    info!("Rolling back {} migration(s)", applied.len());

    Migrator::reset(db).await?;
    Ok(())
}

/// Applied and pending migration names, in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationStatus {
    /// Names of migrations already recorded as applied
    pub applied: Vec<String>,
    /// Names of migrations not yet applied
    pub pending: Vec<String>,
}

/// Reports which migrations have been applied and which are still pending.
pub async fn migration_status(db: &DatabaseConnection) -> Result<MigrationStatus> {
    let applied = Migrator::get_applied_migrations(db)
        .await?
        .iter()
        .map(|m| m.name().to_string())
        .collect();
    let pending = Migrator::get_pending_migrations(db)
        .await?
        .iter()
        .map(|m| m.name().to_string())
        .collect();

    Ok(MigrationStatus { applied, pending })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Category, Order, Receipt};
    use sea_orm::{Database, EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_run_migrations_creates_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        run_migrations(&db).await?;

        let _ = Category::find().limit(1).all(&db).await?;
        let _ = Order::find().limit(1).all(&db).await?;
        let _ = Receipt::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_run_migrations_twice_succeeds() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        run_migrations(&db).await?;
        run_migrations(&db).await?;

        let status = migration_status(&db).await?;
        assert_eq!(status.applied.len(), 3);
        assert!(status.pending.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_migration_status_on_fresh_database() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;

        let status = migration_status(&db).await?;
        assert!(status.applied.is_empty());
        assert_eq!(
            status.pending,
            vec![
                "m20240101_000001_enable_uuid_extension".to_string(),
                "m20240101_000002_create_catalog_tables".to_string(),
                "m20240101_000003_create_order_tables".to_string(),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_rollback_then_reapply() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        run_migrations(&db).await?;
        rollback_migrations(&db).await?;

        let status = migration_status(&db).await?;
        assert!(status.applied.is_empty());
        assert!(Category::find().limit(1).all(&db).await.is_err());

        run_migrations(&db).await?;
        let _ = Category::find().limit(1).all(&db).await?;
        Ok(())
    }
}
