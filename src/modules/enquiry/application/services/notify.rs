use std::sync::Arc;

use crate::enquiry::application::domain::entities::Enquiry;
use crate::enquiry::application::ports::outgoing::EnquiryNotifier;

pub type SharedNotifier = Option<Arc<dyn EnquiryNotifier + Send + Sync>>;

/// Mail failures are logged and never surface to the submitter.
pub async fn notify_quietly(notifier: &SharedNotifier, enquiry: &Enquiry) {
    let Some(notifier) = notifier else {
        return;
    };

    if let Err(e) = notifier.enquiry_received(enquiry).await {
        tracing::warn!(
            ref_number = %enquiry.ref_number,
            error = %e,
            "Enquiry stored but notification failed"
        );
    }
}
