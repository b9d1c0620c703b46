use async_trait::async_trait;

use super::submit_enquiry::{present, required_contact, EnquiryCommandError, SubmitEnquiryError};
use crate::enquiry::application::domain::entities::EnquiryReceipt;

/// Contact-page enquiry. `wish` is stored as the phone column and the
/// meeting preference is appended to the message.
#[derive(Debug, Clone)]
pub struct GeneralEnquiryCommand {
    pub name: String,
    pub email: String,
    pub message: String,
    pub wish: Option<String>,
    pub meeting: Option<String>,
}

impl GeneralEnquiryCommand {
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
        wish: Option<String>,
        meeting: Option<String>,
    ) -> Result<Self, EnquiryCommandError> {
        let (name, email, message) = required_contact(name, email, message)?;

        Ok(Self {
            name,
            email,
            message,
            wish: present(wish),
            meeting: present(meeting),
        })
    }

    pub fn full_message(&self) -> String {
        format!(
            "{}\n\nMeeting Preference: {}",
            self.message,
            self.meeting.as_deref().unwrap_or("N/A")
        )
    }
}

#[async_trait]
pub trait SubmitGeneralEnquiryUseCase: Send + Sync {
    async fn execute(
        &self,
        command: GeneralEnquiryCommand,
    ) -> Result<EnquiryReceipt, SubmitEnquiryError>;
}
