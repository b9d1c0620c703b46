//! Mail bodies sent when an enquiry is stored. Every user-supplied value is
//! HTML-escaped before it is interpolated.

use super::entities::{Enquiry, EnquiryKind};

#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn title_of(enquiry: &Enquiry) -> String {
    escape_html(enquiry.property_title.as_deref().unwrap_or("General"))
}

pub fn admin_notification(enquiry: &Enquiry, admin_email: &str) -> OutgoingMail {
    let subject = match enquiry.kind() {
        EnquiryKind::General => format!("New General Enquiry - Ref: {}", enquiry.ref_number),
        EnquiryKind::Property => format!(
            "New Enquiry - {}",
            enquiry.property_title.as_deref().unwrap_or("General")
        ),
    };

    let property_ref = enquiry
        .property_ref
        .as_deref()
        .map(|r| format!("<p><b>Property Ref:</b> {}</p>", escape_html(r)))
        .unwrap_or_default();

    let html = format!(
        "<h3>New Enquiry</h3>\
         <p><b>Ref:</b> {reference}</p>\
         {property_ref}\
         <p><b>Property:</b> {title}</p>\
         <p><b>Name:</b> {name}</p>\
         <p><b>Email:</b> {email}</p>\
         <p><b>Phone:</b> {phone}</p>\
         <p><b>Message:</b><br/>{message}</p>",
        reference = escape_html(&enquiry.ref_number),
        title = title_of(enquiry),
        name = escape_html(&enquiry.name),
        email = escape_html(&enquiry.email),
        phone = escape_html(enquiry.phone.as_deref().filter(|p| !p.is_empty()).unwrap_or("N/A")),
        message = escape_html(&enquiry.message).replace('\n', "<br/>"),
    );

    OutgoingMail {
        to: admin_email.to_string(),
        subject,
        html,
    }
}

pub fn acknowledgement(enquiry: &Enquiry) -> OutgoingMail {
    let linked = enquiry
        .property_ref
        .as_deref()
        .map(|r| format!("<p>We linked this to property <b>{}</b>.</p>", escape_html(r)))
        .unwrap_or_default();

    let html = format!(
        "<h3>Hello {name},</h3>\
         <p>Thanks for reaching out. We've recorded your enquiry with reference <b>{reference}</b>.</p>\
         {linked}\
         <p>We'll contact you shortly.</p>",
        name = escape_html(&enquiry.name),
        reference = escape_html(&enquiry.ref_number),
    );

    OutgoingMail {
        to: enquiry.email.clone(),
        subject: "We received your enquiry".to_string(),
        html,
    }
}
