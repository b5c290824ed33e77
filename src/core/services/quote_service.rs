// src/core/services/quote_service.rs
// Quote form handling. Validation failures are reported per field so the
// form can mark each input; a valid request composes a plain-text mail the
// host hands to the user's mail client.

use crate::{error::SiteError, services::settings_service::SettingsManager};
use serde::Deserialize;
use validator::Validate;

pub use crate::services::settings_service::{
    SETTING_CONTACT_EMAIL, SETTING_CONTACT_EMAIL_SECONDARY,
};

#[derive(Deserialize, Validate, Clone, Debug)]
pub struct QuoteRequest {
    #[validate(length(min = 1, message = "Full Name is required."))]
    pub name: String,
    #[validate(
        length(min = 1, message = "Email Address is required."),
        email(message = "Please enter a valid email address.")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Please select a service."))]
    pub service_type: String,
    #[validate(length(min = 1, message = "Project Details are required."))]
    pub message: String,
}

impl QuoteRequest {
    pub fn new(name: &str, email: &str, service_type: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            service_type: service_type.trim().to_string(),
            message: message.trim().to_string(),
        }
    }
}

/// A composed mail, ready for the host to hand off (e.g. as a mailto
/// target). Addresses, subject, and body are raw text; any URL escaping is
/// the host's concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailMessage {
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
}

/// Validates the request and composes the quote mail. Recipients come from
/// the primary and secondary contact-email settings; both empty is an
/// error the form surfaces to the visitor.
pub fn compose_quote_mail(
    request: &QuoteRequest,
    settings: &SettingsManager,
) -> Result<MailMessage, SiteError> {
    super::validate_request(request)?;

    let to: Vec<String> = [SETTING_CONTACT_EMAIL, SETTING_CONTACT_EMAIL_SECONDARY]
        .iter()
        .filter_map(|key| settings.value(key))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();
    if to.is_empty() {
        return Err(SiteError::MissingRecipient);
    }

    let subject = format!(
        "Quote Request from {} for {}",
        request.name, request.service_type
    );
    let body = format!(
        "You have received a new quote request from the website.\n\
         \n\
         --------------------------------\n\
         Name: {}\n\
         Email: {}\n\
         Service of Interest: {}\n\
         --------------------------------\n\
         \n\
         Message:\n\
         {}",
        request.name, request.email, request.service_type, request.message
    );

    Ok(MailMessage { to, subject, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::new_shared_session;
    use crate::models::settings::SettingDescriptor;
    use crate::storage::{new_shared_store, MemoryStore};
    use crate::utils::time::ManualClock;
    use std::rc::Rc;

    fn settings(primary: &str, secondary: &str) -> SettingsManager {
        let store = new_shared_store(MemoryStore::new());
        let mut mgr =
            SettingsManager::new(store, new_shared_session(), Rc::new(ManualClock::new(0)));
        mgr.init(vec![
            SettingDescriptor::href(SETTING_CONTACT_EMAIL, primary, Some("mailto:")),
            SettingDescriptor::href(SETTING_CONTACT_EMAIL_SECONDARY, secondary, Some("mailto:")),
        ]);
        mgr
    }

    fn request() -> QuoteRequest {
        QuoteRequest::new(
            " Ada Lovelace ",
            "ada@example.com",
            "Web Design",
            "Need a landing page.",
        )
    }

    #[test]
    fn composes_subject_body_and_both_recipients() {
        let settings = settings("hello@example.com", "backup@example.com");
        let mail = compose_quote_mail(&request(), &settings).unwrap();
        assert_eq!(mail.to, vec!["hello@example.com", "backup@example.com"]);
        assert_eq!(mail.subject, "Quote Request from Ada Lovelace for Web Design");
        assert!(mail
            .body
            .starts_with("You have received a new quote request from the website."));
        assert!(mail.body.contains("Name: Ada Lovelace\n"));
        assert!(mail.body.contains("Email: ada@example.com\n"));
        assert!(mail.body.contains("Service of Interest: Web Design\n"));
        assert!(mail.body.ends_with("Message:\nNeed a landing page."));
    }

    #[test]
    fn secondary_recipient_alone_is_enough() {
        let settings = settings("", "backup@example.com");
        let mail = compose_quote_mail(&request(), &settings).unwrap();
        assert_eq!(mail.to, vec!["backup@example.com"]);
    }

    #[test]
    fn no_configured_recipient_is_an_error() {
        let settings = settings("", "");
        assert_eq!(
            compose_quote_mail(&request(), &settings),
            Err(SiteError::MissingRecipient)
        );
    }

    #[test]
    fn invalid_fields_are_rejected_before_composition() {
        let settings = settings("hello@example.com", "");

        let blank_name = QuoteRequest::new("  ", "ada@example.com", "Web Design", "Hi");
        let err = compose_quote_mail(&blank_name, &settings).unwrap_err();
        assert!(matches!(err, SiteError::InvalidInput(_)));
        assert!(err.to_string().contains("Full Name is required."));

        let bad_email = QuoteRequest::new("Ada", "not-an-email", "Web Design", "Hi");
        let err = compose_quote_mail(&bad_email, &settings).unwrap_err();
        assert!(err.to_string().contains("Please enter a valid email address."));

        let no_service = QuoteRequest::new("Ada", "ada@example.com", "", "Hi");
        assert!(compose_quote_mail(&no_service, &settings).is_err());
    }
}
