mod delete_enquiry;
mod list_enquiries;
mod submit_enquiry;
mod submit_general_enquiry;

pub use delete_enquiry::delete_enquiry_handler;
pub use list_enquiries::list_enquiries_handler;
pub use submit_enquiry::{submit_enquiry_handler, SubmitEnquiryRequest};
pub use submit_general_enquiry::{submit_general_enquiry_handler, GeneralEnquiryRequest};
