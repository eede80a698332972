#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::{FormKind, SiteConfig, DEFAULT_REQUEST_TIMEOUT};
use tracing_subscriber::EnvFilter;

/// Site configuration, set once from the command line and environment
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site configuration (empty if `main` has not stored one)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Personal portfolio - desktop shell
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio with contact and feedback forms")]
struct Args {
    /// Endpoint receiving contact form submissions
    #[arg(long, env = "CONTACT_FORM_ENDPOINT")]
    contact_endpoint: Option<String>,

    /// Endpoint receiving feedback form submissions
    #[arg(long, env = "FEEDBACK_FORM_ENDPOINT")]
    feedback_endpoint: Option<String>,

    /// Seconds before an outbound submission is abandoned
    #[arg(long, env = "FORM_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs())]
    request_timeout_secs: u64,

    /// Log filter directive (RUST_LOG syntax)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log_filter: String,
}

impl Args {
    fn site_config(&self) -> SiteConfig {
        SiteConfig::new()
            .with_endpoint(FormKind::Contact, self.contact_endpoint.clone())
            .with_endpoint(FormKind::Feedback, self.feedback_endpoint.clone())
            .with_request_timeout(Duration::from_secs(self.request_timeout_secs))
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&args.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = args.site_config();
    tracing::info!(
        contact = config.raw_endpoint(FormKind::Contact).is_some(),
        feedback = config.raw_endpoint(FormKind::Feedback).is_some(),
        timeout_secs = args.request_timeout_secs,
        "Starting portfolio"
    );
    let _ = SITE_CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(portfolio_core::content::BRAND)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_build_site_config() {
        let args = Args::try_parse_from([
            "portfolio-desktop",
            "--contact-endpoint",
            "https://forms.example.com/contact",
            "--request-timeout-secs",
            "3",
        ])
        .unwrap();
        let config = args.site_config();
        assert!(config.endpoint(FormKind::Contact).is_ok());
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
    }
}
