use async_trait::async_trait;

use crate::enquiry::application::domain::entities::EnquiryView;
use crate::enquiry::application::ports::incoming::use_cases::{
    ListEnquiriesError, ListEnquiriesUseCase,
};
use crate::enquiry::application::ports::outgoing::EnquiryQuery;

pub struct ListEnquiriesService<Q>
where
    Q: EnquiryQuery,
{
    enquiry_query: Q,
}

impl<Q> ListEnquiriesService<Q>
where
    Q: EnquiryQuery,
{
    pub fn new(enquiry_query: Q) -> Self {
        Self { enquiry_query }
    }
}

#[async_trait]
impl<Q> ListEnquiriesUseCase for ListEnquiriesService<Q>
where
    Q: EnquiryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<EnquiryView>, ListEnquiriesError> {
        self.enquiry_query
            .list()
            .await
            .map_err(|e| ListEnquiriesError::RepositoryError(e.to_string()))
    }
}
