//! Submission status of a single form instance.

use serde::{Deserialize, Serialize};

/// Where a form is in its submit lifecycle.
///
/// `Success` and `Error` are not terminal: editing and resubmitting moves
/// the form back to `Submitting`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Returns the lowercase name used in logs and CSS classes
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
        }
    }

    /// Whether a send is currently in flight
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    /// Whether the status line beneath the form should be shown
    pub fn shows_message(&self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_default_is_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
    }

    #[test]
    fn only_resolved_states_show_message() {
        assert!(!SubmissionStatus::Idle.shows_message());
        assert!(!SubmissionStatus::Submitting.shows_message());
        assert!(SubmissionStatus::Success.shows_message());
        assert!(SubmissionStatus::Error.shows_message());
    }

    #[test]
    fn pending_only_while_submitting() {
        assert!(SubmissionStatus::Submitting.is_pending());
        assert!(!SubmissionStatus::Error.is_pending());
    }
}
