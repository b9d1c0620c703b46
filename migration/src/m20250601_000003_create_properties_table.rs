use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Properties::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Properties::RefNumber)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Properties::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Properties::Description).text())
                    .col(ColumnDef::new(Properties::TotalPrice).double())
                    .col(ColumnDef::new(Properties::SquareMeters).double())
                    .col(ColumnDef::new(Properties::Zip).string_len(20))
                    .col(ColumnDef::new(Properties::Place).string_len(150))
                    .col(ColumnDef::new(Properties::City).string_len(100))
                    .col(ColumnDef::new(Properties::Country).string_len(100))
                    .col(ColumnDef::new(Properties::Rooms).integer())
                    .col(ColumnDef::new(Properties::Bathrooms).integer())
                    .col(
                        ColumnDef::new(Properties::Pool)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Properties::Parking)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Properties::Garden)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Properties::PropertyType).string_len(50))
                    .col(
                        ColumnDef::new(Properties::Amenities)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Properties::Images)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Properties::SellerId).uuid())
                    .col(
                        ColumnDef::new(Properties::AgentNumber)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Properties::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Properties::RejectionReason)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Properties::SubmittedBy).uuid())
                    .col(ColumnDef::new(Properties::SubmittedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Properties::PublishedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Properties::OwnerRemoved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Properties::DeletedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Properties::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Properties::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_properties_seller")
                            .from(Properties::Table, Properties::SellerId)
                            .to(Sellers::Table, Sellers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE properties
                ADD CONSTRAINT chk_properties_status
                CHECK (status IN ('pending', 'active', 'inactive', 'rejected', 'archived'));
                "#,
            )
            .await?;

        // Public browse filters on status, admin views on seller
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_properties_status_created
                ON properties (status, created_at DESC);

                CREATE INDEX IF NOT EXISTS idx_properties_seller_id
                ON properties (seller_id);

                CREATE INDEX IF NOT EXISTS idx_properties_city_lower
                ON properties (LOWER(city));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_properties_updated_at
                BEFORE UPDATE ON properties
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
                DROP TRIGGER IF EXISTS update_properties_updated_at ON properties;
                DROP INDEX IF EXISTS idx_properties_city_lower;
                DROP INDEX IF EXISTS idx_properties_seller_id;
                DROP INDEX IF EXISTS idx_properties_status_created;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
    RefNumber,
    Title,
    Description,
    TotalPrice,
    SquareMeters,
    Zip,
    Place,
    City,
    Country,
    Rooms,
    Bathrooms,
    Pool,
    Parking,
    Garden,
    PropertyType,
    Amenities,
    Images,
    SellerId,
    AgentNumber,
    Status,
    RejectionReason,
    SubmittedBy,
    SubmittedAt,
    PublishedAt,
    OwnerRemoved,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Sellers {
    Table,
    Id,
}
