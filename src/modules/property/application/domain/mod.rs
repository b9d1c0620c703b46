pub mod actor;
pub mod entities;
pub mod listing;
pub mod locations;
pub mod moderation;
pub mod policy;
pub mod ref_number;
pub mod status;
