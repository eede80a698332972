//! Projects page - turning preview solids above the project cards.

use dioxus::prelude::*;
use portfolio_core::content::PROJECTS;
use portfolio_ui::{ButtonVariant, LinkButton, PreviewSolid};

#[component]
pub fn Projects() -> Element {
    rsx! {
        div { class: "container",
            h1 { class: "page-title", "My Projects" }

            div { class: "preview-row",
                for project in PROJECTS {
                    PreviewSolid { key: "{project.id}", shape: project.preview }
                }
            }

            div { class: "project-grid",
                for project in PROJECTS {
                    div { key: "{project.id}", class: "card project-card",
                        h2 { class: "card-title", "{project.name}" }
                        p { class: "project-description", "{project.description}" }
                        div { class: "project-links",
                            LinkButton { href: project.live_url.to_string(), "View Live" }
                            LinkButton {
                                href: project.github_url.to_string(),
                                variant: ButtonVariant::Outline,
                                "GitHub"
                            }
                        }
                    }
                }
            }
        }
    }
}
