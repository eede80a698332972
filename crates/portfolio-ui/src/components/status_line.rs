//! Status Line Component
//!
//! Coloured line beneath a form reporting the outcome of the last submit:
//! affirmative styling for success, alerting styling for errors, nothing
//! while idle or submitting.

use dioxus::prelude::*;
use portfolio_core::SubmissionStatus;

/// CSS class for a status, or `None` if no line should be shown.
pub fn status_class(status: SubmissionStatus) -> Option<&'static str> {
    match status {
        SubmissionStatus::Success => Some("status-line status-success"),
        SubmissionStatus::Error => Some("status-line status-error"),
        SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct StatusLineProps {
    pub status: SubmissionStatus,
    pub message: String,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatusLine { status: flow.read().status(), message: flow.read().message().to_string() }
/// }
/// ```
#[component]
pub fn StatusLine(props: StatusLineProps) -> Element {
    let Some(class) = status_class(props.status) else {
        return rsx! {};
    };

    rsx! {
        p {
            class: "{class}",
            role: if props.status == SubmissionStatus::Error { "alert" } else { "status" },
            "{props.message}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes() {
        assert_eq!(
            status_class(SubmissionStatus::Success),
            Some("status-line status-success")
        );
        assert_eq!(
            status_class(SubmissionStatus::Error),
            Some("status-line status-error")
        );
    }

    #[test]
    fn no_line_while_idle_or_submitting() {
        assert!(status_class(SubmissionStatus::Idle).is_none());
        assert!(status_class(SubmissionStatus::Submitting).is_none());
    }
}
