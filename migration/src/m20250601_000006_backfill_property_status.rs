use sea_orm_migration::prelude::*;

/// Stamps publication and submission times on listings imported before the
/// moderation workflow recorded them.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // Imported rows that were already public never got a publish stamp
        db.execute_unprepared(
            r#"
            UPDATE properties
            SET published_at = COALESCE(created_at, CURRENT_TIMESTAMP)
            WHERE status = 'active' AND published_at IS NULL;
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            UPDATE properties
            SET submitted_at = COALESCE(created_at, CURRENT_TIMESTAMP)
            WHERE status = 'pending' AND submitted_at IS NULL;
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // Data-only migration
        Ok(())
    }
}
