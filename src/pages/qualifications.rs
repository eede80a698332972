//! Qualifications page - cards that fade up once as they scroll into view.

use dioxus::prelude::*;
use portfolio_core::content::QUALIFICATIONS;
use portfolio_core::motion::RevealOnce;
use portfolio_ui::{use_frame_loop, use_viewport_watch};

const REVEAL_SELECTOR: &str = "[data-reveal-item]";

#[component]
pub fn Qualifications() -> Element {
    let mut reveal = use_signal(|| {
        let mut reveal = RevealOnce::new();
        for index in 0..QUALIFICATIONS.len() {
            reveal.observe(index);
        }
        reveal
    });

    use_viewport_watch(Some(REVEAL_SELECTOR), move |report| {
        if reveal.peek().pending_count() == 0 {
            return;
        }
        let positions: Vec<(usize, f32)> = report
            .items
            .iter()
            .map(|(index, top)| (*index, *top as f32))
            .collect();
        let fired = reveal.write().report_all(
            positions.iter().map(|(index, top)| (index, *top)),
            report.viewport_height as f32,
        );
        if !fired.is_empty() {
            tracing::debug!(?fired, "Qualifications revealed");
        }
    });

    use_frame_loop(move |dt| {
        if reveal.peek().is_animating() {
            reveal.write().advance(dt);
        }
    });

    use_drop(move || {
        if let Ok(mut reveal) = reveal.try_write() {
            let released = reveal.disconnect();
            tracing::trace!(released, "Released reveal registrations");
        }
    });

    let cards: Vec<_> = QUALIFICATIONS
        .iter()
        .enumerate()
        .map(|(index, qualification)| (index, qualification, reveal.read().pose(&index).to_style()))
        .collect();

    rsx! {
        div { class: "container",
            h1 { class: "page-title", "Qualifications" }
            div { class: "qualification-list",
                for (index, qualification, style) in cards {
                    div {
                        key: "{index}",
                        class: "card",
                        "data-reveal-item": "true",
                        "data-watch": "{index}",
                        style: "{style}",
                        h2 { class: "card-title", "{qualification.title}" }
                        p { class: "card-meta", "{qualification.institution} - {qualification.year}" }
                    }
                }
            }
        }
    }
}
