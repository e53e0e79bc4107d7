use sea_orm::DatabaseBackend;
use sea_orm_migration::prelude::*;

/// Ensures the `uuid-ossp` extension exists on PostgreSQL.
pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240101_000001_enable_uuid_extension"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Extensions only exist on Postgres; other backends have nothing to enable.
        if manager.get_database_backend() == DatabaseBackend::Postgres {
            manager
                .get_connection()
                .execute_unprepared(r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#)
                .await?;
        }
        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // The extension may be shared with other schemas, leave it installed.
        Ok(())
    }
}
