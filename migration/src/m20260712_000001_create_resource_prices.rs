use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResourcePrices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResourcePrices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ResourcePrices::Resource)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResourcePrices::Price)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResourcePrices::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_resource_prices_resource")
                    .table(ResourcePrices::Table)
                    .col(ResourcePrices::Resource)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResourcePrices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ResourcePrices {
    Table,
    Id,
    Resource,
    Price,
    Timestamp,
}
