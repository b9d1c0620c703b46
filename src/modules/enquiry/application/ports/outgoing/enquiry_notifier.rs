use async_trait::async_trait;

use crate::enquiry::application::domain::entities::Enquiry;

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotificationError {
    #[error("Failed to send notification: {0}")]
    SendFailed(String),
}

#[async_trait]
pub trait EnquiryNotifier: Send + Sync {
    /// Notifies the admin inbox and acknowledges the submitter.
    async fn enquiry_received(&self, enquiry: &Enquiry) -> Result<(), NotificationError>;
}
