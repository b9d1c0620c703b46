pub mod auth;
pub mod blog;
pub mod dashboard;
pub mod email;
pub mod enquiry;
pub mod property;
pub mod seller;
