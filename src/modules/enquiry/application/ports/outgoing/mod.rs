pub mod enquiry_notifier;
pub mod enquiry_query;
pub mod enquiry_repository;
pub mod property_lookup;

pub use enquiry_notifier::{EnquiryNotifier, NotificationError};
pub use enquiry_query::{EnquiryQuery, EnquiryQueryError};
pub use enquiry_repository::{EnquiryRepository, EnquiryRepositoryError, NewEnquiryData};
pub use property_lookup::{PropertyLookup, PropertyLookupError};
