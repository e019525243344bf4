use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum AccessRecords {
    Table,
    Id,
    Code,
    ClientId,
    ExpiryDate,
    IsActive,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccessRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccessRecords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AccessRecords::Code).string().not_null())
                    .col(ColumnDef::new(AccessRecords::ClientId).string().not_null())
                    .col(
                        ColumnDef::new(AccessRecords::ExpiryDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AccessRecords::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(AccessRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 验证路径按 (code, is_active) 过滤，清理路径按 client_id 过滤
        manager
            .create_index(
                Index::create()
                    .table(AccessRecords::Table)
                    .col(AccessRecords::Code)
                    .col(AccessRecords::IsActive)
                    .name("idx_access_records_code_active")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(AccessRecords::Table)
                    .col(AccessRecords::ClientId)
                    .name("idx_access_records_client_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccessRecords::Table).to_owned())
            .await
    }
}
