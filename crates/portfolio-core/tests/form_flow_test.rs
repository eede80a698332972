//! Form submission flow tests
//!
//! Drive the contact and feedback status machines against scripted
//! submitters and check the observable contract: status, status message,
//! field values and whether an outbound call happened.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use portfolio_core::{
    BlockedSubmit, ContactSubmission, FeedbackSubmission, FormFlow, FormKind, SiteConfig,
    SubmissionError, SubmissionStatus, Submitter, Url, CONFIG_ERROR_MESSAGE,
};

/// Submitter with a fixed outcome that records every call.
struct Scripted {
    outcome: Result<(), SubmissionError>,
    calls: AtomicUsize,
    bodies: Mutex<Vec<serde_json::Value>>,
}

impl Scripted {
    fn succeeding() -> Self {
        Self::with(Ok(()))
    }

    fn failing() -> Self {
        Self::with(Err(SubmissionError::Status(502)))
    }

    fn with(outcome: Result<(), SubmissionError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            bodies: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Submitter for Scripted {
    async fn deliver(
        &self,
        _endpoint: &Url,
        body: &serde_json::Value,
    ) -> Result<(), SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.bodies.lock().unwrap().push(body.clone());
        self.outcome.clone()
    }
}

fn configured() -> SiteConfig {
    SiteConfig::new()
        .with_endpoint(FormKind::Contact, Some("https://forms.example.com/contact"))
        .with_endpoint(FormKind::Feedback, Some("https://forms.example.com/feedback"))
}

fn contact(name: &str, email: &str, message: &str) -> FormFlow<ContactSubmission> {
    let mut flow = FormFlow::new();
    flow.set_field("name", name);
    flow.set_field("email", email);
    flow.set_field("message", message);
    flow
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_contact_success_clears_fields() {
    let submitter = Scripted::succeeding();
    let mut flow = contact("Ada", "ada@example.com", "Hi");

    let status = flow.submit_with(&configured(), &submitter).await;

    assert_eq!(status, SubmissionStatus::Success);
    assert_eq!(
        flow.message(),
        "Message sent successfully! We will get back to you soon."
    );
    assert_eq!(flow.value("name"), "");
    assert_eq!(flow.value("email"), "");
    assert_eq!(flow.value("message"), "");
    assert_eq!(submitter.calls(), 1);

    let bodies = submitter.bodies.lock().unwrap();
    assert_eq!(
        bodies[0],
        serde_json::json!({ "name": "Ada", "email": "ada@example.com", "message": "Hi" })
    );
}

#[tokio::test]
async fn test_feedback_failure_preserves_fields() {
    let submitter = Scripted::failing();
    let mut flow = FormFlow::<FeedbackSubmission>::new();
    flow.set_field("name", "Grace");
    flow.set_field("feedback", "Great site");

    let status = flow.submit_with(&configured(), &submitter).await;

    assert_eq!(status, SubmissionStatus::Error);
    assert_eq!(
        flow.message(),
        "Failed to submit feedback. Please try again later."
    );
    assert_eq!(flow.value("name"), "Grace");
    assert_eq!(flow.value("feedback"), "Great site");
    assert_eq!(submitter.calls(), 1);
}

#[tokio::test]
async fn test_missing_endpoint_is_configuration_error() {
    let submitter = Scripted::succeeding();
    let config = configured().with_endpoint(FormKind::Contact, None::<String>);
    let mut flow = contact("Ada", "ada@example.com", "Hi");

    let status = flow.submit_with(&config, &submitter).await;

    assert_eq!(status, SubmissionStatus::Error);
    assert_eq!(flow.message(), CONFIG_ERROR_MESSAGE);
    assert_eq!(flow.message(), "Configuration error. Please contact support.");
    assert_eq!(submitter.calls(), 0, "no outbound call may be attempted");
    assert_eq!(flow.value("name"), "Ada");
}

#[tokio::test]
async fn test_invalid_endpoint_is_configuration_error() {
    let submitter = Scripted::succeeding();
    let config = configured().with_endpoint(FormKind::Feedback, Some("not a url"));
    let mut flow = FormFlow::<FeedbackSubmission>::new();
    flow.set_field("name", "Grace");
    flow.set_field("feedback", "Great site");

    assert_eq!(flow.submit_with(&config, &submitter).await, SubmissionStatus::Error);
    assert_eq!(flow.message(), CONFIG_ERROR_MESSAGE);
    assert_eq!(submitter.calls(), 0);
}

// ============================================================================
// Required fields
// ============================================================================

#[tokio::test]
async fn test_empty_required_fields_never_leave_idle() {
    let submitter = Scripted::succeeding();
    let cases = [
        ("", "ada@example.com", "Hi"),
        ("Ada", "", "Hi"),
        ("Ada", "ada@example.com", ""),
        ("", "", ""),
    ];

    for (name, email, message) in cases {
        let mut flow = contact(name, email, message);
        let status = flow.submit_with(&configured(), &submitter).await;
        assert_eq!(status, SubmissionStatus::Idle, "case {name:?} {email:?} {message:?}");
        assert_eq!(flow.message(), "");
    }
    assert_eq!(submitter.calls(), 0);
}

#[test]
fn test_blocked_submit_names_missing_fields() {
    let mut flow = contact("Ada", "", "");
    assert_eq!(
        flow.begin(&configured()),
        Err(BlockedSubmit::MissingFields(vec!["email", "message"]))
    );
}

// ============================================================================
// Submit control
// ============================================================================

#[tokio::test]
async fn test_submit_disabled_only_while_submitting() {
    for submitter in [Scripted::succeeding(), Scripted::failing()] {
        let mut flow = contact("Ada", "ada@example.com", "Hi");
        assert!(!flow.submit_disabled());

        let outbound = flow.begin(&configured()).expect("submit should start");
        assert_eq!(flow.status(), SubmissionStatus::Submitting);
        assert!(flow.submit_disabled());

        let outcome = outbound.send(&submitter).await;
        flow.resolve(outcome);
        assert!(!flow.submit_disabled());
        assert!(flow.status().shows_message());
    }
}

#[tokio::test]
async fn test_duplicate_submit_while_pending_is_refused() {
    let submitter = Scripted::succeeding();
    let mut flow = contact("Ada", "ada@example.com", "Hi");

    let first = flow.begin(&configured()).unwrap();
    assert_eq!(flow.begin(&configured()), Err(BlockedSubmit::AlreadySubmitting));

    let outcome = first.send(&submitter).await;
    flow.resolve(outcome);
    assert_eq!(submitter.calls(), 1);
}

#[tokio::test]
async fn test_retry_after_failure_can_succeed() {
    let mut flow = contact("Ada", "ada@example.com", "Hi");

    flow.submit_with(&configured(), &Scripted::failing()).await;
    assert_eq!(flow.status(), SubmissionStatus::Error);

    flow.set_field("message", "Hi again");
    flow.submit_with(&configured(), &Scripted::succeeding()).await;
    assert_eq!(flow.status(), SubmissionStatus::Success);
    assert_eq!(flow.record(), &ContactSubmission::default());
}

#[tokio::test]
async fn test_edits_after_snapshot_do_not_change_payload() {
    let submitter = Scripted::succeeding();
    let mut flow = contact("Ada", "ada@example.com", "Hi");

    let outbound = flow.begin(&configured()).unwrap();
    flow.set_field("message", "changed mid-flight");
    let outcome = outbound.send(&submitter).await;
    flow.resolve(outcome);

    let bodies = submitter.bodies.lock().unwrap();
    assert_eq!(bodies[0]["message"], "Hi");
}
