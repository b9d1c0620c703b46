mod email_enquiry_notifier;
mod enquiry_query_postgres;
mod enquiry_repository_postgres;
mod property_lookup_postgres;
pub mod sea_orm_entity;

pub use email_enquiry_notifier::EmailEnquiryNotifier;
pub use enquiry_query_postgres::EnquiryQueryPostgres;
pub use enquiry_repository_postgres::EnquiryRepositoryPostgres;
pub use property_lookup_postgres::PropertyLookupPostgres;
