//! Feedback page - name and free-form feedback, posted to the feedback endpoint.

use dioxus::prelude::*;
use portfolio_core::motion::presets;
use portfolio_core::{FeedbackSubmission, FormFlow};
use portfolio_ui::{use_binding_host, Button, FormField, StatusLine};

use crate::context::{use_site_config, use_submitter};
use crate::pages::form_submit::submit_form;

#[component]
pub fn Feedback() -> Element {
    let config = use_site_config();
    let submitter = use_submitter();
    let mut flow = use_signal(FormFlow::<FeedbackSubmission>::new);
    let fields = use_binding_host::<&'static str>(presets::field_focus);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        submit_form(flow, &config, submitter.clone());
    };
    let oninput = move |(name, value): (&'static str, String)| {
        flow.write().set_field(name, value);
    };

    let (name, feedback, status, status_message, disabled, label) = {
        let state = flow.read();
        (
            state.value("name").to_string(),
            state.value("feedback").to_string(),
            state.status(),
            state.message().to_string(),
            state.submit_disabled(),
            state.submit_label(),
        )
    };

    rsx! {
        div { class: "container",
            h1 { class: "page-title", "Submit Feedback" }
            form { class: "form", onsubmit,
                FormField {
                    host: fields,
                    name: "name",
                    label: "Name".to_string(),
                    placeholder: "Your Name".to_string(),
                    value: name,
                    oninput,
                }
                FormField {
                    host: fields,
                    name: "feedback",
                    label: "Feedback".to_string(),
                    rows: 5,
                    placeholder: "Your feedback...".to_string(),
                    value: feedback,
                    oninput,
                }
                Button {
                    button_type: "submit".to_string(),
                    class: "w-full".to_string(),
                    disabled,
                    "{label}"
                }
            }
            StatusLine { status, message: status_message }
        }
    }
}
