pub mod property_query_postgres;
pub mod property_repository_postgres;
pub mod sea_orm_entity;
pub mod seller_cascade;

pub use property_query_postgres::PropertyQueryPostgres;
pub use property_repository_postgres::PropertyRepositoryPostgres;
