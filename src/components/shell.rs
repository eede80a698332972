//! Page shell: header and footer stay mounted while the routed page swaps.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{Footer, NavHeader};

#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();

    use_effect(use_reactive!(|(route,)| {
        tracing::info!(route = %route, "Page mounted");
    }));

    rsx! {
        div { class: "shell",
            NavHeader {}
            main { class: "shell-main", Outlet::<Route> {} }
            Footer {}
        }
    }
}
