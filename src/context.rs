//! Application-wide context for the portfolio.
//!
//! The site configuration and the form submitter are provided once by `App`
//! and read by the form pages.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let config = use_site_config();
//! let submitter = use_submitter();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use portfolio_core::{HttpSubmitter, SiteConfig, Submitter};

/// Shared submitter type for context.
///
/// `None` when the HTTP client could not be built; submissions then fail
/// with a network error instead of panicking.
pub type SharedSubmitter = Option<Arc<dyn Submitter>>;

/// Get the site configuration set from command line args.
pub fn get_site_config() -> SiteConfig {
    crate::get_site_config()
}

/// Build the submitter used by every form.
pub fn build_submitter(config: &SiteConfig) -> SharedSubmitter {
    match HttpSubmitter::from_config(config) {
        Ok(submitter) => Some(Arc::new(submitter)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client; forms will not submit");
            None
        }
    }
}

/// Hook to access the site configuration from context.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Hook to access the form submitter from context.
pub fn use_submitter() -> SharedSubmitter {
    use_context::<SharedSubmitter>()
}
