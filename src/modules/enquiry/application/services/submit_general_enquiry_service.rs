use async_trait::async_trait;
use chrono::{Datelike, Utc};

use super::notify::{notify_quietly, SharedNotifier};
use crate::enquiry::application::domain::entities::{EnquiryKind, EnquiryReceipt};
use crate::enquiry::application::domain::ref_number::enquiry_ref;
use crate::enquiry::application::ports::incoming::use_cases::{
    GeneralEnquiryCommand, SubmitEnquiryError, SubmitGeneralEnquiryUseCase,
};
use crate::enquiry::application::ports::outgoing::{EnquiryRepository, NewEnquiryData};

pub struct SubmitGeneralEnquiryService<R>
where
    R: EnquiryRepository,
{
    enquiry_repository: R,
    notifier: SharedNotifier,
}

impl<R> SubmitGeneralEnquiryService<R>
where
    R: EnquiryRepository,
{
    pub fn new(enquiry_repository: R, notifier: SharedNotifier) -> Self {
        Self {
            enquiry_repository,
            notifier,
        }
    }
}

#[async_trait]
impl<R> SubmitGeneralEnquiryUseCase for SubmitGeneralEnquiryService<R>
where
    R: EnquiryRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: GeneralEnquiryCommand,
    ) -> Result<EnquiryReceipt, SubmitEnquiryError> {
        let kind = EnquiryKind::General;
        let message = command.full_message();

        let data = NewEnquiryData {
            ref_number: enquiry_ref(kind, Utc::now().year(), &mut rand::thread_rng()),
            property_id: None,
            property_ref: None,
            property_title: Some(kind.default_title().to_string()),
            name: command.name,
            email: command.email,
            phone: Some(command.wish.unwrap_or_default()),
            message,
        };

        let enquiry = self
            .enquiry_repository
            .create(data)
            .await
            .map_err(|e| SubmitEnquiryError::RepositoryError(e.to_string()))?;

        tracing::info!(ref_number = %enquiry.ref_number, "General enquiry received");

        notify_quietly(&self.notifier, &enquiry).await;

        Ok(EnquiryReceipt {
            ref_number: enquiry.ref_number,
        })
    }
}
