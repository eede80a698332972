//! Outbound delivery of form submissions.
//!
//! A [`Submitter`] performs exactly one request per call and reports a
//! binary outcome. [`HttpSubmitter`] is the real implementation: a JSON
//! `POST` with an explicit timeout whose response is mapped onto
//! [`SubmissionError`] kinds.
//!
//! ## Response contract
//!
//! | Response                                   | Outcome               |
//! |--------------------------------------------|-----------------------|
//! | non-2xx                                    | `Status(code)`        |
//! | 2xx, empty body                            | success               |
//! | 2xx, `{"ok": true}`                        | success               |
//! | 2xx, `{"ok": false, "message": "..."}`     | `Refused(message)`    |
//! | 2xx, anything else                         | `MalformedResponse`   |

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Url;
use serde::Deserialize;

use crate::config::SiteConfig;
use crate::error::{PortfolioError, PortfolioResult, SubmissionError};

/// Sends one serialized record to an endpoint.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn deliver(&self, endpoint: &Url, body: &serde_json::Value)
        -> Result<(), SubmissionError>;
}

/// Acknowledgement body an endpoint may return with a 2xx status.
#[derive(Debug, Deserialize)]
struct Acknowledgement {
    ok: bool,
    #[serde(default)]
    message: Option<String>,
}

/// JSON-over-HTTP submitter backed by a shared `reqwest` client.
#[derive(Clone, Debug)]
pub struct HttpSubmitter {
    client: reqwest::Client,
}

impl HttpSubmitter {
    /// Build a submitter whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> PortfolioResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("portfolio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PortfolioError::HttpClient(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn from_config(config: &SiteConfig) -> PortfolioResult<Self> {
        Self::new(config.request_timeout())
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn deliver(
        &self,
        endpoint: &Url,
        body: &serde_json::Value,
    ) -> Result<(), SubmissionError> {
        let response = self
            .client
            .post(endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%endpoint, status = status.as_u16(), "Endpoint rejected submission");
            return Err(SubmissionError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(classify)?;
        interpret_body(&bytes)
    }
}

/// Map a 2xx response body onto the acknowledgement contract.
pub(crate) fn interpret_body(bytes: &[u8]) -> Result<(), SubmissionError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(());
    }

    let ack: Acknowledgement = serde_json::from_slice(bytes)
        .map_err(|e| SubmissionError::MalformedResponse(e.to_string()))?;

    if ack.ok {
        Ok(())
    } else {
        Err(SubmissionError::Refused(ack.message))
    }
}

fn classify(err: reqwest::Error) -> SubmissionError {
    if err.is_timeout() {
        SubmissionError::Timeout
    } else if err.is_decode() {
        SubmissionError::MalformedResponse(err.to_string())
    } else {
        SubmissionError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_success() {
        assert_eq!(interpret_body(b""), Ok(()));
        assert_eq!(interpret_body(b" \n"), Ok(()));
    }

    #[test]
    fn acknowledgement_bodies() {
        assert_eq!(interpret_body(br#"{"ok": true}"#), Ok(()));
        assert_eq!(
            interpret_body(br#"{"ok": false, "message": "rate limited"}"#),
            Err(SubmissionError::Refused(Some("rate limited".into())))
        );
        assert_eq!(
            interpret_body(br#"{"ok": false}"#),
            Err(SubmissionError::Refused(None))
        );
    }

    #[test]
    fn unexpected_bodies_are_malformed() {
        assert!(matches!(
            interpret_body(b"<html>thanks</html>"),
            Err(SubmissionError::MalformedResponse(_))
        ));
        assert!(matches!(
            interpret_body(br#"{"status": "sent"}"#),
            Err(SubmissionError::MalformedResponse(_))
        ));
    }
}
