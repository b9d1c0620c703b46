use async_trait::async_trait;
use uuid::Uuid;

use crate::enquiry::application::domain::entities::EnquiryReceipt;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnquiryCommandError {
    #[error("Missing required fields")]
    MissingFields,
}

/// Trims a value and treats blank as absent.
pub(super) fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `(name, email, message)`, all required.
pub(super) fn required_contact(
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
) -> Result<(String, String, String), EnquiryCommandError> {
    match (present(name), present(email), present(message)) {
        (Some(n), Some(e), Some(m)) => Ok((n, e, m)),
        _ => Err(EnquiryCommandError::MissingFields),
    }
}

#[derive(Debug, Clone)]
pub struct SubmitEnquiryCommand {
    pub name: String,
    pub email: String,
    pub message: String,
    pub phone: Option<String>,
    pub property_id: Option<Uuid>,
    pub property_title: Option<String>,
    pub property_ref: Option<String>,
}

impl SubmitEnquiryCommand {
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
        phone: Option<String>,
        property_id: Option<Uuid>,
        property_title: Option<String>,
        property_ref: Option<String>,
    ) -> Result<Self, EnquiryCommandError> {
        let (name, email, message) = required_contact(name, email, message)?;

        Ok(Self {
            name,
            email,
            message,
            phone: present(phone),
            property_id,
            property_title: present(property_title),
            property_ref: present(property_ref),
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitEnquiryError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitEnquiryUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitEnquiryCommand,
    ) -> Result<EnquiryReceipt, SubmitEnquiryError>;
}
