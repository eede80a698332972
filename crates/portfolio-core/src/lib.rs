//! Portfolio Core Library
//!
//! UI-free logic behind the portfolio site.
//!
//! ## Overview
//!
//! - **forms**: contact/feedback records and the idle → submitting →
//!   success/error status machine
//! - **transport**: JSON-over-HTTP delivery with timeout and error mapping
//! - **motion**: reversible timelines, hover/focus bindings, reveal-once
//! - **nav**: scrolled header style and the collapsible link panel
//! - **spin**: constant-rate rotation for the 3D mark
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{ContactSubmission, FormFlow, HttpSubmitter, SiteConfig, FormKind};
//!
//! let config = SiteConfig::new()
//!     .with_endpoint(FormKind::Contact, Some("https://forms.example.com/contact"));
//! let submitter = HttpSubmitter::from_config(&config)?;
//!
//! let mut flow = FormFlow::<ContactSubmission>::new();
//! flow.set_field("name", "Ada");
//! flow.set_field("email", "ada@example.com");
//! flow.set_field("message", "Hi");
//! flow.submit_with(&config, &submitter).await;
//! println!("{}", flow.message());
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod forms;
pub mod motion;
pub mod nav;
pub mod spin;
pub mod transport;

// Re-exports
pub use config::{SiteConfig, DEFAULT_REQUEST_TIMEOUT};
pub use error::{ConfigError, PortfolioError, PortfolioResult, SubmissionError};
pub use forms::{
    BlockedSubmit, ContactSubmission, FeedbackSubmission, FormFlow, FormKind, FormRecord,
    OutboundSubmission, SubmissionStatus, CONFIG_ERROR_MESSAGE,
};
pub use nav::{NavBar, SCROLL_THRESHOLD};
pub use spin::Spin;
pub use reqwest::Url;
pub use transport::{HttpSubmitter, Submitter};
