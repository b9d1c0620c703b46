use async_trait::async_trait;
use chrono::{Datelike, Utc};

use super::notify::{notify_quietly, SharedNotifier};
use crate::enquiry::application::domain::entities::{EnquiryKind, EnquiryReceipt, LinkedProperty};
use crate::enquiry::application::domain::ref_number::enquiry_ref;
use crate::enquiry::application::ports::incoming::use_cases::{
    SubmitEnquiryCommand, SubmitEnquiryError, SubmitEnquiryUseCase,
};
use crate::enquiry::application::ports::outgoing::{
    EnquiryRepository, NewEnquiryData, PropertyLookup,
};

pub struct SubmitEnquiryService<R, L>
where
    R: EnquiryRepository,
    L: PropertyLookup,
{
    enquiry_repository: R,
    property_lookup: L,
    notifier: SharedNotifier,
}

impl<R, L> SubmitEnquiryService<R, L>
where
    R: EnquiryRepository,
    L: PropertyLookup,
{
    pub fn new(enquiry_repository: R, property_lookup: L, notifier: SharedNotifier) -> Self {
        Self {
            enquiry_repository,
            property_lookup,
            notifier,
        }
    }

    async fn linked_property(&self, command: &SubmitEnquiryCommand) -> Option<LinkedProperty> {
        let id = command.property_id?;

        match self.property_lookup.find_property(id).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(property_id = %id, error = %e, "Enquiry property lookup failed");
                None
            }
        }
    }
}

#[async_trait]
impl<R, L> SubmitEnquiryUseCase for SubmitEnquiryService<R, L>
where
    R: EnquiryRepository + Send + Sync,
    L: PropertyLookup + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitEnquiryCommand,
    ) -> Result<EnquiryReceipt, SubmitEnquiryError> {
        let property = self.linked_property(&command).await;

        let kind = if property.is_some()
            || command.property_title.is_some()
            || command.property_ref.is_some()
        {
            EnquiryKind::Property
        } else {
            EnquiryKind::General
        };

        let property_title = command
            .property_title
            .or_else(|| property.as_ref().map(|p| p.title.clone()))
            .unwrap_or_else(|| kind.default_title().to_string());
        let property_ref = command
            .property_ref
            .or_else(|| property.as_ref().map(|p| p.ref_number.clone()));

        let data = NewEnquiryData {
            ref_number: enquiry_ref(kind, Utc::now().year(), &mut rand::thread_rng()),
            property_id: property.as_ref().map(|p| p.id),
            property_ref,
            property_title: Some(property_title),
            name: command.name,
            email: command.email,
            phone: command.phone,
            message: command.message,
        };

        let enquiry = self
            .enquiry_repository
            .create(data)
            .await
            .map_err(|e| SubmitEnquiryError::RepositoryError(e.to_string()))?;

        tracing::info!(ref_number = %enquiry.ref_number, "Enquiry received");

        notify_quietly(&self.notifier, &enquiry).await;

        Ok(EnquiryReceipt {
            ref_number: enquiry.ref_number,
        })
    }
}
