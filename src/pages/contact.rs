//! Contact page - name, email and message, posted to the contact endpoint.

use dioxus::prelude::*;
use portfolio_core::motion::presets;
use portfolio_core::{ContactSubmission, FormFlow};
use portfolio_ui::{use_binding_host, Button, FormField, SpinningCube, StatusLine};

use crate::context::{use_site_config, use_submitter};
use crate::pages::form_submit::submit_form;

#[component]
pub fn Contact() -> Element {
    let config = use_site_config();
    let submitter = use_submitter();
    let mut flow = use_signal(FormFlow::<ContactSubmission>::new);
    let fields = use_binding_host::<&'static str>(presets::field_focus);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        submit_form(flow, &config, submitter.clone());
    };
    let oninput = move |(name, value): (&'static str, String)| {
        flow.write().set_field(name, value);
    };

    let (name, email, message, status, status_message, disabled, label) = {
        let state = flow.read();
        (
            state.value("name").to_string(),
            state.value("email").to_string(),
            state.value("message").to_string(),
            state.status(),
            state.message().to_string(),
            state.submit_disabled(),
            state.submit_label(),
        )
    };

    rsx! {
        div { class: "container",
            div { class: "page-mark",
                SpinningCube { size: 64 }
            }
            h1 { class: "page-title", "Contact Us" }
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
                    name: "email",
                    label: "Email".to_string(),
                    input_type: "email".to_string(),
                    placeholder: "your.email@example.com".to_string(),
                    value: email,
                    oninput,
                }
                FormField {
                    host: fields,
                    name: "message",
                    label: "Message".to_string(),
                    rows: 5,
                    placeholder: "Your message...".to_string(),
                    value: message,
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
