//! Form records and the submission status machine.
//!
//! Two forms exist on the site, contact and feedback. Both share the same
//! lifecycle: fields are created empty on mount, edited per keystroke,
//! sent to a configured endpoint and cleared only when the send succeeds.
//!
//! ```ignore
//! let mut flow = FormFlow::<ContactSubmission>::new();
//! flow.set_field("name", "Ada");
//! flow.set_field("email", "ada@example.com");
//! flow.set_field("message", "Hi");
//! flow.submit_with(&config, &submitter).await;
//! assert_eq!(flow.status(), SubmissionStatus::Success);
//! ```

mod flow;
mod status;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use flow::{BlockedSubmit, FormFlow, OutboundSubmission};
pub use status::SubmissionStatus;

/// Shown when the form's endpoint is missing or unusable.
pub const CONFIG_ERROR_MESSAGE: &str = "Configuration error. Please contact support.";

/// Which form a record or endpoint belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Contact,
    Feedback,
}

impl FormKind {
    /// Confirmation shown after a successful send
    pub fn success_message(&self) -> &'static str {
        match self {
            FormKind::Contact => "Message sent successfully! We will get back to you soon.",
            FormKind::Feedback => "Thank you for your feedback!",
        }
    }

    /// Generic retry text shown after any failed send
    pub fn failure_message(&self) -> &'static str {
        match self {
            FormKind::Contact => "Failed to send message. Please try again later.",
            FormKind::Feedback => "Failed to submit feedback. Please try again later.",
        }
    }

    /// Submit button label while idle
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormKind::Contact => "Send Message",
            FormKind::Feedback => "Submit Feedback",
        }
    }

    /// Submit button label while a send is in flight
    pub fn busy_label(&self) -> &'static str {
        match self {
            FormKind::Contact => "Sending...",
            FormKind::Feedback => "Submitting...",
        }
    }

    /// Environment variable holding this form's endpoint URL
    pub fn endpoint_env(&self) -> &'static str {
        match self {
            FormKind::Contact => "CONTACT_FORM_ENDPOINT",
            FormKind::Feedback => "FEEDBACK_FORM_ENDPOINT",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::Contact => f.write_str("contact"),
            FormKind::Feedback => f.write_str("feedback"),
        }
    }
}

/// A flat record of required text fields, addressable by field name.
pub trait FormRecord:
    Serialize + Default + Clone + PartialEq + fmt::Debug + Send + Sync + 'static
{
    /// The form this record is submitted from
    const KIND: FormKind;
    /// Field names in display order; every field is required
    const FIELDS: &'static [&'static str];

    fn field(&self, name: &str) -> Option<&str>;

    fn field_mut(&mut self, name: &str) -> Option<&mut String>;

    /// Required fields that are still the empty string.
    fn missing_fields(&self) -> Vec<&'static str> {
        Self::FIELDS
            .iter()
            .copied()
            .filter(|name| self.field(name).map_or(true, str::is_empty))
            .collect()
    }
}

/// Contact form payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormRecord for ContactSubmission {
    const KIND: FormKind = FormKind::Contact;
    const FIELDS: &'static [&'static str] = &["name", "email", "message"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "message" => Some(&self.message),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "name" => Some(&mut self.name),
            "email" => Some(&mut self.email),
            "message" => Some(&mut self.message),
            _ => None,
        }
    }
}

/// Feedback form payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    pub name: String,
    pub feedback: String,
}

impl FormRecord for FeedbackSubmission {
    const KIND: FormKind = FormKind::Feedback;
    const FIELDS: &'static [&'static str] = &["name", "feedback"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "feedback" => Some(&self.feedback),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "name" => Some(&mut self.name),
            "feedback" => Some(&mut self.feedback),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_kind_messages() {
        assert_eq!(
            FormKind::Contact.success_message(),
            "Message sent successfully! We will get back to you soon."
        );
        assert_eq!(
            FormKind::Feedback.failure_message(),
            "Failed to submit feedback. Please try again later."
        );
        assert_eq!(FormKind::Contact.busy_label(), "Sending...");
        assert_eq!(FormKind::Feedback.submit_label(), "Submit Feedback");
    }

    #[test]
    fn missing_fields_reports_empty_only() {
        let mut record = ContactSubmission::default();
        assert_eq!(record.missing_fields(), vec!["name", "email", "message"]);

        record.name = "Ada".into();
        record.message = "   ".into();
        assert_eq!(record.missing_fields(), vec!["email"]);
    }

    #[test]
    fn field_lookup_by_name() {
        let mut record = FeedbackSubmission::default();
        *record.field_mut("feedback").unwrap() = "Great site".into();
        assert_eq!(record.field("feedback"), Some("Great site"));
        assert!(record.field("email").is_none());
        assert!(record.field_mut("email").is_none());
    }

    #[test]
    fn records_serialize_with_field_names() {
        let record = FeedbackSubmission {
            name: "Grace".into(),
            feedback: "Great site".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Grace", "feedback": "Great site" }));
    }
}
