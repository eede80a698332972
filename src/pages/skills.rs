//! Skills page - icon grid with a pop-and-bounce hover on each card.

use dioxus::prelude::*;
use portfolio_core::content::{Skill, SKILLS};
use portfolio_core::motion::{presets, BindingHost};
use portfolio_ui::{use_binding_host, use_bound_element};

use crate::components::icons::skill_icon;

#[component]
pub fn Skills() -> Element {
    let host = use_binding_host::<usize>(presets::skill_hover);

    rsx! {
        div { class: "container",
            h1 { class: "page-title", "My Skills" }
            div { class: "skills-grid",
                for (index, skill) in SKILLS.iter().enumerate() {
                    SkillCard { key: "{skill.name}", host, index, skill: *skill }
                }
            }
        }
    }
}

#[component]
fn SkillCard(host: Signal<BindingHost<usize>>, index: usize, skill: Skill) -> Element {
    let bound = use_bound_element(host, index);
    let icon_style = bound.style(presets::ICON);

    rsx! {
        div {
            class: "skill-card",
            onmounted: move |_| bound.mount(),
            onmouseenter: move |_| bound.enter(),
            onmouseleave: move |_| bound.leave(),
            div { class: "skill-icon", style: "{icon_style}", {skill_icon(skill.icon, 64)} }
            p { class: "skill-name", "{skill.name}" }
        }
    }
}
