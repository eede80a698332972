//! Error types for the portfolio site

use thiserror::Error;

use crate::forms::FormKind;

/// Endpoint configuration problems, detected before any network attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No endpoint was configured for the form
    #[error("No endpoint configured for the {0} form")]
    MissingEndpoint(FormKind),

    /// The configured endpoint is not an absolute http(s) URL
    #[error("Invalid endpoint for the {kind} form: {reason}")]
    InvalidEndpoint { kind: FormKind, reason: String },
}

/// Outcome of a failed outbound submission. Always recoverable; the user may retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The request did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Connection or transport failure before a response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status
    #[error("Endpoint returned HTTP {0}")]
    Status(u16),

    /// A 2xx response whose body does not match the acknowledgement shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The record could not be encoded as a request body
    #[error("Could not encode request body: {0}")]
    Encode(String),

    /// The endpoint acknowledged the request but refused it (`"ok": false`)
    #[error("Submission refused{}", .0.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Refused(Option<String>),
}

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Endpoint configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Outbound submission failed
    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    /// The HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::MissingEndpoint(FormKind::Contact);
        assert_eq!(format!("{}", err), "No endpoint configured for the contact form");

        let err = SubmissionError::Status(503);
        assert_eq!(err.to_string(), "Endpoint returned HTTP 503");
    }

    #[test]
    fn test_refused_display_includes_reason() {
        assert_eq!(SubmissionError::Refused(None).to_string(), "Submission refused");
        assert_eq!(
            SubmissionError::Refused(Some("spam".into())).to_string(),
            "Submission refused: spam"
        );
    }

    #[test]
    fn test_error_from_submission() {
        let err: PortfolioError = SubmissionError::Timeout.into();
        assert!(matches!(err, PortfolioError::Submission(SubmissionError::Timeout)));
    }
}
