use dioxus::prelude::*;
use portfolio_ui::SpinningCube;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    use_hook(|| tracing::warn!(path = %path, "Unknown route"));

    rsx! {
        div { class: "container not-found",
            SpinningCube { size: 64 }
            h1 { class: "page-title", "Page not found" }
            p { "Nothing lives at {path}." }
            Link { to: Route::Home {}, class: "btn btn-outline", "Back home" }
        }
    }
}
