//! The submit lifecycle for one form instance.

use reqwest::Url;

use super::{FormKind, FormRecord, SubmissionStatus, CONFIG_ERROR_MESSAGE};
use crate::config::SiteConfig;
use crate::error::{ConfigError, SubmissionError};
use crate::transport::Submitter;

/// Why a submit did not start an outbound call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockedSubmit {
    /// Required fields are empty; the status is left untouched.
    MissingFields(Vec<&'static str>),
    /// A send is already in flight for this form instance.
    AlreadySubmitting,
    /// The endpoint is missing or invalid; the status moved to `Error`.
    Configuration(ConfigError),
}

/// A snapshot of the record taken when the submit started, plus its destination.
#[derive(Clone, Debug, PartialEq)]
pub struct OutboundSubmission<R> {
    pub kind: FormKind,
    pub endpoint: Url,
    pub record: R,
}

impl<R: FormRecord> OutboundSubmission<R> {
    /// Perform the single outbound call for this submission.
    pub async fn send(&self, submitter: &dyn Submitter) -> Result<(), SubmissionError> {
        let body = serde_json::to_value(&self.record)
            .map_err(|e| SubmissionError::Encode(e.to_string()))?;
        submitter.deliver(&self.endpoint, &body).await
    }
}

/// Field values plus the idle/submitting/success/error status machine.
///
/// The flow is split into [`begin`](FormFlow::begin) and
/// [`resolve`](FormFlow::resolve) so a UI can hold the state in a signal and
/// release it across the await point; [`submit_with`](FormFlow::submit_with)
/// runs both halves for callers that own the flow.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormFlow<R: FormRecord> {
    record: R,
    status: SubmissionStatus,
    message: String,
}

impl<R: FormRecord> FormFlow<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> FormKind {
        R::KIND
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    /// Current value of a field, or "" for unknown names.
    pub fn value(&self, name: &str) -> &str {
        self.record.field(name).unwrap_or_default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Status line text; empty until a submit resolves.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The submit control is disabled exactly while a send is in flight.
    pub fn submit_disabled(&self) -> bool {
        self.status.is_pending()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submit_disabled() {
            R::KIND.busy_label()
        } else {
            R::KIND.submit_label()
        }
    }

    /// Update one field in place. Returns false for unknown field names.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.record.field_mut(name) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => {
                tracing::debug!(form = %R::KIND, field = name, "Ignoring edit to unknown field");
                false
            }
        }
    }

    /// Start a submit.
    ///
    /// On success the status is `Submitting` and the returned snapshot must be
    /// sent and passed back through [`resolve`](Self::resolve).
    pub fn begin(&mut self, config: &SiteConfig) -> Result<OutboundSubmission<R>, BlockedSubmit> {
        if self.status.is_pending() {
            return Err(BlockedSubmit::AlreadySubmitting);
        }

        let missing = self.record.missing_fields();
        if !missing.is_empty() {
            return Err(BlockedSubmit::MissingFields(missing));
        }

        self.status = SubmissionStatus::Submitting;
        self.message.clear();

        match config.endpoint(R::KIND) {
            Ok(endpoint) => {
                tracing::info!(form = %R::KIND, %endpoint, "Submitting form");
                Ok(OutboundSubmission {
                    kind: R::KIND,
                    endpoint,
                    record: self.record.clone(),
                })
            }
            Err(e) => {
                tracing::error!(
                    form = %R::KIND,
                    env = R::KIND.endpoint_env(),
                    error = %e,
                    "Form endpoint is not configured"
                );
                self.status = SubmissionStatus::Error;
                self.message = CONFIG_ERROR_MESSAGE.to_string();
                Err(BlockedSubmit::Configuration(e))
            }
        }
    }

    /// Finish a submit started with [`begin`](Self::begin).
    ///
    /// Returns false (and changes nothing) if no submit was in flight.
    pub fn resolve(&mut self, outcome: Result<(), SubmissionError>) -> bool {
        if !self.status.is_pending() {
            tracing::debug!(form = %R::KIND, "Dropping outcome for a form that is not submitting");
            return false;
        }

        match outcome {
            Ok(()) => {
                tracing::info!(form = %R::KIND, "Form submitted");
                self.status = SubmissionStatus::Success;
                self.message = R::KIND.success_message().to_string();
                self.record = R::default();
            }
            Err(e) => {
                tracing::warn!(form = %R::KIND, error = %e, "Form submission failed");
                self.status = SubmissionStatus::Error;
                self.message = R::KIND.failure_message().to_string();
            }
        }
        true
    }

    /// Run a whole submit against `submitter` and return the resulting status.
    pub async fn submit_with(
        &mut self,
        config: &SiteConfig,
        submitter: &dyn Submitter,
    ) -> SubmissionStatus {
        if let Ok(outbound) = self.begin(config) {
            let outcome = outbound.send(submitter).await;
            self.resolve(outcome);
        }
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{ContactSubmission, FeedbackSubmission};

    fn configured() -> SiteConfig {
        SiteConfig::new()
            .with_endpoint(FormKind::Contact, Some("https://forms.example.com/contact"))
            .with_endpoint(FormKind::Feedback, Some("https://forms.example.com/feedback"))
    }

    fn filled_contact() -> FormFlow<ContactSubmission> {
        let mut flow = FormFlow::new();
        flow.set_field("name", "Ada");
        flow.set_field("email", "ada@example.com");
        flow.set_field("message", "Hi");
        flow
    }

    #[test]
    fn begin_moves_to_submitting_and_disables_submit() {
        let mut flow = filled_contact();
        let outbound = flow.begin(&configured()).unwrap();

        assert_eq!(flow.status(), SubmissionStatus::Submitting);
        assert!(flow.submit_disabled());
        assert_eq!(flow.submit_label(), "Sending...");
        assert_eq!(outbound.record.name, "Ada");
        assert_eq!(outbound.endpoint.path(), "/contact");
    }

    #[test]
    fn second_begin_while_submitting_is_refused() {
        let mut flow = filled_contact();
        flow.begin(&configured()).unwrap();
        assert_eq!(flow.begin(&configured()), Err(BlockedSubmit::AlreadySubmitting));
        assert_eq!(flow.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn empty_fields_block_without_leaving_idle() {
        let mut flow = FormFlow::<FeedbackSubmission>::new();
        flow.set_field("name", "Grace");

        assert_eq!(
            flow.begin(&configured()),
            Err(BlockedSubmit::MissingFields(vec!["feedback"]))
        );
        assert_eq!(flow.status(), SubmissionStatus::Idle);
        assert_eq!(flow.message(), "");
    }

    #[test]
    fn resolve_success_clears_fields() {
        let mut flow = filled_contact();
        flow.begin(&configured()).unwrap();
        assert!(flow.resolve(Ok(())));

        assert_eq!(flow.status(), SubmissionStatus::Success);
        assert_eq!(flow.record(), &ContactSubmission::default());
        assert!(!flow.submit_disabled());
    }

    #[test]
    fn resolve_failure_keeps_fields() {
        let mut flow = filled_contact();
        flow.begin(&configured()).unwrap();
        flow.resolve(Err(SubmissionError::Status(500)));

        assert_eq!(flow.status(), SubmissionStatus::Error);
        assert_eq!(flow.message(), "Failed to send message. Please try again later.");
        assert_eq!(flow.value("email"), "ada@example.com");
        assert!(!flow.submit_disabled());
    }

    #[test]
    fn stale_resolve_is_ignored() {
        let mut flow = filled_contact();
        assert!(!flow.resolve(Ok(())));
        assert_eq!(flow.status(), SubmissionStatus::Idle);
        assert_eq!(flow.value("name"), "Ada");
    }

    #[test]
    fn resubmit_after_error_returns_to_submitting() {
        let mut flow = filled_contact();
        flow.begin(&configured()).unwrap();
        flow.resolve(Err(SubmissionError::Timeout));

        flow.begin(&configured()).unwrap();
        assert_eq!(flow.status(), SubmissionStatus::Submitting);
        assert_eq!(flow.message(), "");
    }

    #[test]
    fn unknown_field_edits_are_ignored() {
        let mut flow = FormFlow::<FeedbackSubmission>::new();
        assert!(!flow.set_field("email", "x@example.com"));
        assert_eq!(flow.record(), &FeedbackSubmission::default());
    }
}
