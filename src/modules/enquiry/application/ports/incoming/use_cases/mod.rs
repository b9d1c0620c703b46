mod delete_enquiry;
mod list_enquiries;
mod submit_enquiry;
mod submit_general_enquiry;

pub use delete_enquiry::{DeleteEnquiryError, DeleteEnquiryUseCase};
pub use list_enquiries::{ListEnquiriesError, ListEnquiriesUseCase};
pub use submit_enquiry::{
    EnquiryCommandError, SubmitEnquiryCommand, SubmitEnquiryError, SubmitEnquiryUseCase,
};
pub use submit_general_enquiry::{GeneralEnquiryCommand, SubmitGeneralEnquiryUseCase};
