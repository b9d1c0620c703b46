pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_admins_table;
mod m20250601_000002_create_sellers_table;
mod m20250601_000003_create_properties_table;
mod m20250601_000004_create_blogs_table;
mod m20250601_000005_create_enquiries_table;
mod m20250601_000006_backfill_property_status;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_admins_table::Migration),
            Box::new(m20250601_000002_create_sellers_table::Migration),
            Box::new(m20250601_000003_create_properties_table::Migration),
            Box::new(m20250601_000004_create_blogs_table::Migration),
            Box::new(m20250601_000005_create_enquiries_table::Migration),
            Box::new(m20250601_000006_backfill_property_status::Migration),
        ]
    }
}
