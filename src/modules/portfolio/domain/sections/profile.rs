use email_address::EmailAddress;
use serde::Deserialize;

use crate::modules::portfolio::domain::defaults;
use crate::modules::portfolio::domain::entities::{About, Contact};
use crate::modules::portfolio::domain::normalize::{
    self, deserialize_text, optional_text, text, ValidationError,
};
use crate::modules::portfolio::domain::section::{Normalized, Section, SectionKey};

//
// ──────────────────────────────────────────────────────────
// About
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AboutDraft {
    #[serde(deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub bio: String,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub resume_url: Option<String>,
}

impl Section for About {
    const KEY: SectionKey = SectionKey::About;
    type Draft = AboutDraft;

    fn from_draft(draft: AboutDraft) -> Result<Normalized<Self>, ValidationError> {
        let name = text(&draft.name);
        if name.is_empty() {
            return Err(ValidationError::new("about.name", "is required"));
        }

        Ok(Normalized::clean(About {
            name,
            title: text(&draft.title),
            bio: text(&draft.bio),
            location: optional_text(draft.location),
            avatar_url: normalize::url("about.avatar_url", draft.avatar_url)?,
            resume_url: normalize::url("about.resume_url", draft.resume_url)?,
        }))
    }

    fn normalize(self) -> Self {
        About {
            name: text(&self.name),
            title: text(&self.title),
            bio: text(&self.bio),
            location: optional_text(self.location),
            avatar_url: optional_text(self.avatar_url),
            resume_url: optional_text(self.resume_url),
        }
    }

    fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
    }

    fn defaults() -> Self {
        defaults::about()
    }
}

//
// ──────────────────────────────────────────────────────────
// Contact
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    #[serde(deserialize_with = "deserialize_text")]
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub website_url: Option<String>,
}

impl Section for Contact {
    const KEY: SectionKey = SectionKey::Contact;
    type Draft = ContactDraft;

    fn from_draft(draft: ContactDraft) -> Result<Normalized<Self>, ValidationError> {
        let email = text(&draft.email);
        if !email.is_empty() && !EmailAddress::is_valid(&email) {
            return Err(ValidationError::new("contact.email", "invalid email format"));
        }

        Ok(Normalized::clean(Contact {
            email,
            phone: optional_text(draft.phone),
            location: optional_text(draft.location),
            github_url: normalize::url("contact.github_url", draft.github_url)?,
            linkedin_url: normalize::url("contact.linkedin_url", draft.linkedin_url)?,
            website_url: normalize::url("contact.website_url", draft.website_url)?,
        }))
    }

    fn normalize(self) -> Self {
        Contact {
            email: text(&self.email),
            phone: optional_text(self.phone),
            location: optional_text(self.location),
            github_url: optional_text(self.github_url),
            linkedin_url: optional_text(self.linkedin_url),
            website_url: optional_text(self.website_url),
        }
    }

    fn is_empty(&self) -> bool {
        self.email.trim().is_empty()
            && self.phone.is_none()
            && self.location.is_none()
            && self.github_url.is_none()
            && self.linkedin_url.is_none()
            && self.website_url.is_none()
    }

    fn defaults() -> Self {
        defaults::contact()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn about_draft(value: serde_json::Value) -> AboutDraft {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_about_requires_name() {
        let err = About::from_draft(about_draft(json!({ "name": "   ", "title": "Dev" })))
            .unwrap_err();

        assert_eq!(err.field, "about.name");
    }

    #[test]
    fn test_about_trims_and_collapses_blank_optionals() {
        let about = About::from_draft(about_draft(json!({
            "name": "  Jane Doe ",
            "title": " Engineer",
            "bio": "Hi",
            "location": "  ",
            "avatar_url": "https://img.example.com/me.png"
        })))
        .unwrap()
        .content;

        assert_eq!(about.name, "Jane Doe");
        assert_eq!(about.title, "Engineer");
        assert_eq!(about.location, None);
        assert_eq!(
            about.avatar_url.as_deref(),
            Some("https://img.example.com/me.png")
        );
    }

    #[test]
    fn test_about_rejects_non_http_avatar() {
        let err = About::from_draft(about_draft(json!({
            "name": "Jane",
            "avatar_url": "javascript:alert(1)"
        })))
        .unwrap_err();

        assert_eq!(err.field, "about.avatar_url");
    }

    #[test]
    fn test_contact_email_is_trimmed_and_validated() {
        let draft: ContactDraft =
            serde_json::from_value(json!({ "email": " Jane@Example.COM " })).unwrap();
        let contact = Contact::from_draft(draft).unwrap().content;
        assert_eq!(contact.email, "Jane@Example.COM");

        let draft: ContactDraft = serde_json::from_value(json!({ "email": "nope" })).unwrap();
        assert_eq!(
            Contact::from_draft(draft).unwrap_err().field,
            "contact.email"
        );
    }

    #[test]
    fn test_null_text_fields_are_treated_as_blank() {
        let about = About::from_draft(about_draft(json!({
            "name": "Jane",
            "title": null,
            "bio": null
        })))
        .unwrap()
        .content;
        assert_eq!(about.title, "");
        assert_eq!(about.bio, "");

        let draft: ContactDraft =
            serde_json::from_value(json!({ "email": null, "phone": "555-0100" })).unwrap();
        let contact = Contact::from_draft(draft).unwrap().content;
        assert_eq!(contact.email, "");
        assert_eq!(contact.phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn test_contact_empty_detection() {
        assert!(Contact::default().is_empty());
        assert!(!Contact::defaults().is_empty());
    }
}
