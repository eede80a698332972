//! Site footer: small brand mark, copyright line and social links.

use chrono::Datelike;
use dioxus::prelude::*;
use portfolio_core::content::{BRAND, SOCIAL_LINKS};
use portfolio_ui::SpinningCube;

use crate::components::icons::social_icon;

pub fn copyright_line(year: i32) -> String {
    format!("\u{a9} {year} {BRAND}. All rights reserved.")
}

#[component]
pub fn Footer() -> Element {
    let year = use_hook(|| chrono::Local::now().year());
    let copyright = copyright_line(year);

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer-inner",
                div { class: "footer-brand",
                    SpinningCube { size: 24 }
                    p { "{copyright}" }
                }
                div { class: "social-links",
                    for link in SOCIAL_LINKS {
                        a {
                            key: "{link.label}",
                            href: "{link.href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "{link.label}",
                            {social_icon(link.kind)}
                        }
                    }
                }
            }
        }
    }
}
