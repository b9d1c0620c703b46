pub mod property_query;
pub mod property_repository;

pub use property_query::{PropertyListFilter, PropertyQuery, PropertyQueryError};
pub use property_repository::{
    NewPropertyData, PropertyChanges, PropertyRepository, PropertyRepositoryError,
};
