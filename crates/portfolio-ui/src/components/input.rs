//! Form Field Components
//!
//! Labelled text inputs and textareas that report edits as
//! `(field name, value)` pairs and animate on focus through a shared
//! [`BindingHost`].

use dioxus::prelude::*;
use portfolio_core::motion::{presets, BindingHost};

use crate::hooks::use_bound_element;

/// Properties for the FormField component
#[derive(Clone, PartialEq, Props)]
pub struct FormFieldProps {
    /// Binding host owned by the page; one binding per field name
    pub host: Signal<BindingHost<&'static str>>,
    /// Field name; also used as the element id
    pub name: &'static str,
    pub label: String,
    pub value: String,
    /// Called with `(name, value)` on every keystroke
    pub oninput: EventHandler<(&'static str, String)>,
    /// Input type (text, email, ...); ignored for textareas
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Render a textarea with this many rows instead of an input
    #[props(default)]
    pub rows: Option<u32>,
    #[props(default = true)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
}

/// Labelled input with a focus/blur animation.
///
/// # Example
///
/// ```rust,ignore
/// let host = use_binding_host(presets::field_focus);
///
/// rsx! {
///     FormField {
///         host,
///         name: "email",
///         label: "Email".to_string(),
///         input_type: "email".to_string(),
///         value: flow.read().value("email").to_string(),
///         oninput: move |(name, value)| { flow.write().set_field(name, value); },
///     }
/// }
/// ```
#[component]
pub fn FormField(props: FormFieldProps) -> Element {
    let name = props.name;
    let oninput = props.oninput;
    let bound = use_bound_element(props.host, name);
    let style = bound.style(presets::FIELD);
    let placeholder = props.placeholder.clone().unwrap_or_default();

    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{name}", "{props.label}" }
            if let Some(rows) = props.rows {
                textarea {
                    id: "{name}",
                    name: "{name}",
                    class: "input-field textarea",
                    style: "{style}",
                    rows: "{rows}",
                    placeholder: "{placeholder}",
                    required: props.required,
                    disabled: props.disabled,
                    value: "{props.value}",
                    onmounted: move |_| bound.mount(),
                    onfocus: move |_| bound.enter(),
                    onblur: move |_| bound.leave(),
                    oninput: move |e| oninput.call((name, e.value())),
                }
            } else {
                input {
                    id: "{name}",
                    name: "{name}",
                    class: "input-field",
                    style: "{style}",
                    r#type: "{props.input_type}",
                    placeholder: "{placeholder}",
                    required: props.required,
                    disabled: props.disabled,
                    value: "{props.value}",
                    onmounted: move |_| bound.mount(),
                    onfocus: move |_| bound.enter(),
                    onblur: move |_| bound.leave(),
                    oninput: move |e| oninput.call((name, e.value())),
                }
            }
        }
    }
}
