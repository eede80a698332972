//! Lucide-style stroke icons for skills, social links and the menu toggle.

use dioxus::prelude::*;
use portfolio_core::content::{SkillIcon, SocialKind};

#[component]
fn StrokeIcon(size: u32, children: Element) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {children}
        }
    }
}

pub fn skill_icon(icon: SkillIcon, size: u32) -> Element {
    match icon {
        SkillIcon::Cog => rsx! {
            StrokeIcon { size,
                path { d: "M12 20a8 8 0 1 0 0-16 8 8 0 0 0 0 16Z" }
                path { d: "M12 14a2 2 0 1 0 0-4 2 2 0 0 0 0 4Z" }
                path { d: "M12 2v2" }
                path { d: "M12 22v-2" }
                path { d: "m17 20.66-1-1.73" }
                path { d: "M11 10.27 7 3.34" }
                path { d: "m20.66 17-1.73-1" }
                path { d: "m3.34 7 1.73 1" }
                path { d: "M14 12h8" }
                path { d: "M2 12h2" }
                path { d: "m20.66 7-1.73 1" }
                path { d: "m3.34 17 1.73-1" }
                path { d: "m17 3.34-1 1.73" }
                path { d: "m11 13.73-4 6.93" }
            }
        },
        SkillIcon::Code => rsx! {
            StrokeIcon { size,
                polyline { points: "16 18 22 12 16 6" }
                polyline { points: "8 6 2 12 8 18" }
            }
        },
        SkillIcon::Terminal => rsx! {
            StrokeIcon { size,
                polyline { points: "4 17 10 11 4 5" }
                line { x1: "12", y1: "19", x2: "20", y2: "19" }
            }
        },
        SkillIcon::Database => rsx! {
            StrokeIcon { size,
                ellipse { cx: "12", cy: "5", rx: "9", ry: "3" }
                path { d: "M3 5V19A9 3 0 0 0 21 19V5" }
                path { d: "M3 12A9 3 0 0 0 21 12" }
            }
        },
        SkillIcon::GitBranch => rsx! {
            StrokeIcon { size,
                line { x1: "6", y1: "3", x2: "6", y2: "15" }
                circle { cx: "18", cy: "6", r: "3" }
                circle { cx: "6", cy: "18", r: "3" }
                path { d: "M18 9a9 9 0 0 1-9 9" }
            }
        },
        SkillIcon::Container => rsx! {
            StrokeIcon { size,
                path { d: "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z" }
                path { d: "m3.3 7 8.7 5 8.7-5" }
                path { d: "M12 22V12" }
            }
        },
        SkillIcon::Cloud => rsx! {
            StrokeIcon { size,
                path { d: "M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z" }
            }
        },
    }
}

pub fn social_icon(kind: SocialKind) -> Element {
    match kind {
        SocialKind::Github => rsx! {
            StrokeIcon { size: 24,
                path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
                path { d: "M9 18c-4.51 2-5-2-7-2" }
            }
        },
        SocialKind::Linkedin => rsx! {
            StrokeIcon { size: 24,
                path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
                rect { x: "2", y: "9", width: "4", height: "12" }
                circle { cx: "4", cy: "4", r: "2" }
            }
        },
        SocialKind::Twitter => rsx! {
            StrokeIcon { size: 24,
                path { d: "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" }
            }
        },
    }
}

/// Hamburger when closed, cross when open.
pub fn menu_icon(open: bool) -> Element {
    if open {
        rsx! {
            StrokeIcon { size: 24,
                path { d: "M18 6 6 18" }
                path { d: "m6 6 12 12" }
            }
        }
    } else {
        rsx! {
            StrokeIcon { size: 24,
                line { x1: "4", y1: "6", x2: "20", y2: "6" }
                line { x1: "4", y1: "12", x2: "20", y2: "12" }
                line { x1: "4", y1: "18", x2: "20", y2: "18" }
            }
        }
    }
}
