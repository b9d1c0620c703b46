pub mod entities;
pub mod notification;
pub mod ref_number;
