use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blogs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Blogs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Blogs::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Blogs::Slug).string_len(255).not_null())
                    .col(ColumnDef::new(Blogs::Excerpt).text())
                    .col(ColumnDef::new(Blogs::Content).text())
                    .col(ColumnDef::new(Blogs::ImageUrl).text())
                    .col(
                        ColumnDef::new(Blogs::Author)
                            .string_len(100)
                            .not_null()
                            .default("Admin"),
                    )
                    .col(
                        ColumnDef::new(Blogs::Published)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Blogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Blogs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_blogs_published_created
                ON blogs (published, created_at DESC);

                CREATE TRIGGER update_blogs_updated_at
                BEFORE UPDATE ON blogs
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_blogs_updated_at ON blogs;
                DROP INDEX IF EXISTS idx_blogs_published_created;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Blogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Blogs {
    Table,
    Id,
    Title,
    Slug,
    Excerpt,
    Content,
    ImageUrl,
    Author,
    Published,
    CreatedAt,
    UpdatedAt,
}
