use sea_orm_migration::prelude::*;

/// Creates the order, order item and receipt tables.
pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240101_000003_create_order_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Orders::Id).string_len(36).not_null().primary_key())
                    .col(ColumnDef::new(Orders::ClientName).string_len(255).not_null())
                    .col(ColumnDef::new(Orders::InstallationAddress).text().not_null())
                    .col(ColumnDef::new(Orders::Phone).string_len(64).not_null())
                    .col(ColumnDef::new(Orders::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Orders::ProjectName).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Orders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OrderItems::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(OrderItems::Id).string_len(36).not_null().primary_key())
                    .col(ColumnDef::new(OrderItems::OrderId).string_len(36).not_null())
                    .col(ColumnDef::new(OrderItems::Position).integer().not_null())
                    .col(ColumnDef::new(OrderItems::SpaceName).string_len(255).not_null())
                    .col(ColumnDef::new(OrderItems::ProductId).string_len(255).not_null())
                    .col(ColumnDef::new(OrderItems::Material).string_len(255).not_null())
                    .col(ColumnDef::new(OrderItems::Height).double().not_null())
                    .col(ColumnDef::new(OrderItems::Width).double().not_null())
                    .col(ColumnDef::new(OrderItems::Depth).double().not_null())
                    .col(ColumnDef::new(OrderItems::Price).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_items_order_id")
                            .from(OrderItems::Table, OrderItems::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Receipts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Receipts::Id).string_len(36).not_null().primary_key())
                    .col(ColumnDef::new(Receipts::OrderId).string_len(36).not_null())
                    .col(
                        ColumnDef::new(Receipts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Receipts::Status).string_len(32).not_null())
                    .col(ColumnDef::new(Receipts::PaymentPercentage).double().not_null())
                    .col(ColumnDef::new(Receipts::Amount).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_receipts_order_id")
                            .from(Receipts::Table, Receipts::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_order_items_order_position")
                    .table(OrderItems::Table)
                    .col(OrderItems::OrderId)
                    .col(OrderItems::Position)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_receipts_order_id")
                    .table(Receipts::Table)
                    .col(Receipts::OrderId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Receipts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OrderItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

/// Identifiers for the `orders` table.
#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    ClientName,
    InstallationAddress,
    Phone,
    Email,
    ProjectName,
    CreatedAt,
}

/// Identifiers for the `order_items` table.
#[derive(DeriveIden)]
enum OrderItems {
    Table,
    Id,
    OrderId,
    Position,
    SpaceName,
    ProductId,
    Material,
    Height,
    Width,
    Depth,
    Price,
}

/// Identifiers for the `receipts` table.
#[derive(DeriveIden)]
enum Receipts {
    Table,
    Id,
    OrderId,
    CreatedAt,
    Status,
    PaymentPercentage,
    Amount,
}
