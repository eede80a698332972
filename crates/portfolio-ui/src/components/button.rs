//! Button Components
//!
//! - Primary: filled accent button, used for form submits and "View Live"
//! - Outline: bordered secondary action
//! - Ghost: text-only, used for the nav menu toggle

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

fn class_list(variant: ButtonVariant, extra: Option<&str>) -> String {
    match extra.filter(|c| !c.is_empty()) {
        Some(extra) => format!("btn {} {}", variant.class(), extra),
        None => format!("btn {}", variant.class()),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub aria_label: Option<String>,
    #[props(default)]
    pub aria_expanded: Option<bool>,
}

/// Styled button.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         button_type: "submit".to_string(),
///         disabled: flow.read().submit_disabled(),
///         "{flow.read().submit_label()}"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = class_list(props.variant, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            "aria-label": props.aria_label.clone(),
            "aria-expanded": props.aria_expanded.map(|e| e.to_string()),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Anchor styled as a button, for external links.
#[component]
pub fn LinkButton(
    href: String,
    #[props(default)] variant: ButtonVariant,
    children: Element,
) -> Element {
    let full_class = class_list(variant, None);

    rsx! {
        a {
            class: "{full_class}",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(class_list(ButtonVariant::Primary, None), "btn btn-primary");
        assert_eq!(class_list(ButtonVariant::Ghost, Some("")), "btn btn-ghost");
        assert_eq!(
            class_list(ButtonVariant::Outline, Some("w-full")),
            "btn btn-outline w-full"
        );
    }
}
