use std::sync::Arc;

use crate::enquiry::application::ports::incoming::use_cases::{
    DeleteEnquiryUseCase, ListEnquiriesUseCase, SubmitEnquiryUseCase, SubmitGeneralEnquiryUseCase,
};

#[derive(Clone)]
pub struct EnquiryUseCases {
    pub submit: Arc<dyn SubmitEnquiryUseCase + Send + Sync>,
    pub submit_general: Arc<dyn SubmitGeneralEnquiryUseCase + Send + Sync>,
    pub list: Arc<dyn ListEnquiriesUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteEnquiryUseCase + Send + Sync>,
}
