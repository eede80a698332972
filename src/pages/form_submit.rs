//! Submit wiring shared by the contact and feedback pages.

use dioxus::prelude::*;
use portfolio_core::{FormFlow, FormRecord, SiteConfig, SubmissionError};

use crate::context::SharedSubmitter;

/// Start a submit for `flow` and resolve it when the request finishes.
///
/// The request runs on its own task, so leaving the page does not abort it;
/// the outcome is dropped along with the page state.
pub fn submit_form<R: FormRecord>(
    mut flow: Signal<FormFlow<R>>,
    config: &SiteConfig,
    submitter: SharedSubmitter,
) {
    let outbound = match flow.write().begin(config) {
        Ok(outbound) => outbound,
        Err(blocked) => {
            tracing::debug!(form = %R::KIND, ?blocked, "Submit blocked");
            return;
        }
    };

    spawn(async move {
        let request = tokio::spawn(async move {
            match submitter {
                Some(submitter) => outbound.send(submitter.as_ref()).await,
                None => Err(SubmissionError::Network("HTTP client unavailable".to_string())),
            }
        });
        let outcome = request
            .await
            .unwrap_or_else(|e| Err(SubmissionError::Network(e.to_string())));
        flow.write().resolve(outcome);
    });
}
