use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enquiries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enquiries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Enquiries::RefNumber).string_len(32).not_null())
                    .col(ColumnDef::new(Enquiries::PropertyId).uuid())
                    .col(ColumnDef::new(Enquiries::PropertyRef).string_len(32))
                    .col(ColumnDef::new(Enquiries::PropertyTitle).string_len(255))
                    .col(ColumnDef::new(Enquiries::Name).string_len(150).not_null())
                    .col(ColumnDef::new(Enquiries::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Enquiries::Phone).string_len(100))
                    .col(ColumnDef::new(Enquiries::Message).text().not_null())
                    .col(
                        ColumnDef::new(Enquiries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enquiries_property")
                            .from(Enquiries::Table, Enquiries::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_enquiries_created_at
                ON enquiries (created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_enquiries_created_at")
            .await?;

        manager
            .drop_table(Table::drop().table(Enquiries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Enquiries {
    Table,
    Id,
    RefNumber,
    PropertyId,
    PropertyRef,
    PropertyTitle,
    Name,
    Email,
    Phone,
    Message,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
}
