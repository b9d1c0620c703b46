use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnquiryKind {
    Property,
    General,
}

impl EnquiryKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            EnquiryKind::Property => "PROP",
            EnquiryKind::General => "GEN",
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            EnquiryKind::Property => "Property Enquiry",
            EnquiryKind::General => "General Enquiry",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Enquiry {
    pub id: Uuid,
    pub ref_number: String,
    pub property_id: Option<Uuid>,
    pub property_ref: Option<String>,
    pub property_title: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Enquiry {
    pub fn kind(&self) -> EnquiryKind {
        if self.ref_number.starts_with("PROP-") {
            EnquiryKind::Property
        } else {
            EnquiryKind::General
        }
    }
}

/// Listing an enquiry points at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkedProperty {
    pub id: Uuid,
    pub title: String,
    pub ref_number: String,
}

/// Admin view: the enquiry plus the listing it still points at.
#[derive(Debug, Clone, Serialize)]
pub struct EnquiryView {
    #[serde(flatten)]
    pub enquiry: Enquiry,
    pub property: Option<LinkedProperty>,
}

/// What the submitter gets back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnquiryReceipt {
    pub ref_number: String,
}

#[cfg(test)]
pub(crate) fn sample_enquiry(kind: EnquiryKind) -> Enquiry {
    Enquiry {
        id: Uuid::new_v4(),
        ref_number: format!("{}-2025-4321", kind.prefix()),
        property_id: None,
        property_ref: None,
        property_title: Some(kind.default_title().to_string()),
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
        phone: Some("+91 98765 43210".to_string()),
        message: "Is this still available?".to_string(),
        created_at: Utc::now(),
    }
}
