mod delete_enquiry_service;
mod list_enquiries_service;
mod notify;
mod submit_enquiry_service;
mod submit_general_enquiry_service;

pub use delete_enquiry_service::DeleteEnquiryService;
pub use list_enquiries_service::ListEnquiriesService;
pub use notify::SharedNotifier;
pub use submit_enquiry_service::SubmitEnquiryService;
pub use submit_general_enquiry_service::SubmitGeneralEnquiryService;
