//! Create productos table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Productos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Productos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Productos::Code).string_len(50).not_null())
                    .col(ColumnDef::new(Productos::Description).string().not_null())
                    .col(
                        ColumnDef::new(Productos::Price)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // Backs the ON CONFLICT (code) insert
        manager
            .create_index(
                Index::create()
                    .name("idx_productos_code")
                    .table(Productos::Table)
                    .col(Productos::Code)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Productos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Productos {
    Table,
    Id,
    Code,
    Description,
    Price,
}
