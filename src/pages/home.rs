//! Home page - brand mark, name and tagline sliding in on one timeline.

use dioxus::prelude::*;
use portfolio_core::content::{OWNER_NAME, TAGLINE};
use portfolio_core::motion::presets;
use portfolio_ui::{use_timeline, SpinningCube};

#[component]
pub fn Home() -> Element {
    let intro = use_timeline(presets::home_intro);

    let logo = intro.read().pose(presets::LOGO).to_style();
    let name = intro.read().pose(presets::NAME).to_style();
    let tagline = intro.read().pose(presets::TAGLINE).to_style();

    rsx! {
        div { class: "hero",
            div { class: "hero-mark", style: "{logo}",
                SpinningCube { size: 160 }
            }
            h1 { class: "hero-name", style: "{name}", "{OWNER_NAME}" }
            p { class: "hero-tagline", style: "{tagline}", "{TAGLINE}" }
        }
    }
}
