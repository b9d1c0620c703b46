use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::email::application::ports::outgoing::EmailSender;
use crate::enquiry::application::domain::entities::Enquiry;
use crate::enquiry::application::domain::notification::{acknowledgement, admin_notification};
use crate::enquiry::application::ports::outgoing::{EnquiryNotifier, NotificationError};

/// Sends the admin notification first, then the acknowledgement.
#[derive(Clone)]
pub struct EmailEnquiryNotifier {
    sender: Arc<dyn EmailSender + Send + Sync>,
    admin_email: String,
}

impl fmt::Debug for EmailEnquiryNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailEnquiryNotifier")
            .field("sender", &"<dyn EmailSender>")
            .field("admin_email", &self.admin_email)
            .finish()
    }
}

impl EmailEnquiryNotifier {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, admin_email: String) -> Self {
        Self {
            sender,
            admin_email,
        }
    }
}

#[async_trait]
impl EnquiryNotifier for EmailEnquiryNotifier {
    async fn enquiry_received(&self, enquiry: &Enquiry) -> Result<(), NotificationError> {
        for mail in [
            admin_notification(enquiry, &self.admin_email),
            acknowledgement(enquiry),
        ] {
            self.sender
                .send_email(&mail.to, &mail.subject, &mail.html)
                .await
                .map_err(|e| NotificationError::SendFailed(e.to_string()))?;
        }

        Ok(())
    }
}
