//! Create pedidos table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pedidos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pedidos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // No foreign key: orders reference usuarios.id by convention
                    .col(ColumnDef::new(Pedidos::UserId).integer().not_null())
                    .col(ColumnDef::new(Pedidos::Items).text().not_null())
                    .col(
                        ColumnDef::new(Pedidos::Status)
                            .string_len(20)
                            .not_null()
                            .default("Pendiente"),
                    )
                    .col(
                        ColumnDef::new(Pedidos::Total)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Pedidos::Address).string().not_null())
                    .col(
                        ColumnDef::new(Pedidos::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pedidos_status")
                    .table(Pedidos::Table)
                    .col(Pedidos::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pedidos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Pedidos {
    Table,
    Id,
    UserId,
    Items,
    Status,
    Total,
    Address,
    Date,
}
