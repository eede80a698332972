//! Site configuration: per-form endpoints and the request timeout.
//!
//! Endpoints are kept as raw strings and only validated when a form is
//! submitted, so a missing or malformed value surfaces as a status line on
//! that form instead of preventing the site from starting.

use std::time::Duration;

use reqwest::Url;

use crate::error::ConfigError;
use crate::forms::FormKind;

/// Default upper bound on a single submission request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    contact_endpoint: Option<String>,
    feedback_endpoint: Option<String>,
    request_timeout: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: None,
            feedback_endpoint: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl SiteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or clear, with `None`) the endpoint for one form.
    pub fn with_endpoint(mut self, kind: FormKind, endpoint: Option<impl Into<String>>) -> Self {
        let endpoint = endpoint.map(Into::into);
        match kind {
            FormKind::Contact => self.contact_endpoint = endpoint,
            FormKind::Feedback => self.feedback_endpoint = endpoint,
        }
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// The raw configured value, if any.
    pub fn raw_endpoint(&self, kind: FormKind) -> Option<&str> {
        match kind {
            FormKind::Contact => self.contact_endpoint.as_deref(),
            FormKind::Feedback => self.feedback_endpoint.as_deref(),
        }
    }

    /// Resolve the endpoint for `kind` into an absolute http(s) URL.
    ///
    /// Blank values count as missing.
    pub fn endpoint(&self, kind: FormKind) -> Result<Url, ConfigError> {
        let raw = self
            .raw_endpoint(kind)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingEndpoint(kind))?;

        let url = Url::parse(raw).map_err(|e| ConfigError::InvalidEndpoint {
            kind,
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::InvalidEndpoint {
                kind,
                reason: format!("unsupported scheme '{other}'"),
            }),
        }
    }
}
