//! Navigation Header Component
//!
//! Sticky header with the spinning brand mark, the page links and, on narrow
//! viewports, a collapsible link panel. Past a small scroll offset the
//! background fades and a shadow appears.

use dioxus::prelude::*;
use portfolio_core::content::{NavItem, BRAND, NAV_ITEMS};
use portfolio_core::{NavBar, SCROLL_THRESHOLD};
use portfolio_ui::{use_frame_loop, use_viewport_watch, Button, ButtonVariant, SpinningCube};

use crate::app::Route;
use crate::components::icons::menu_icon;
use crate::theme::colors::{header_background, header_shadow};

/// Height of one link row in the collapsible panel, in pixels.
const PANEL_ROW_HEIGHT: f32 = 44.0;

fn panel_natural_height() -> f32 {
    NAV_ITEMS.len() as f32 * PANEL_ROW_HEIGHT
}

fn link_class(item: &NavItem, current: &Route) -> &'static str {
    if current.to_string() == item.href {
        "nav-link active"
    } else {
        "nav-link"
    }
}

/// Navigation Header component
#[component]
pub fn NavHeader() -> Element {
    let mut nav = use_signal(NavBar::new);
    let current = use_route::<Route>();

    use_viewport_watch(None, move |report| {
        let scroll_y = report.scroll_y as f32;
        if (scroll_y > SCROLL_THRESHOLD) != nav.peek().is_scrolled() {
            nav.write().on_scroll(scroll_y);
            tracing::debug!(scroll_y, scrolled = nav.peek().is_scrolled(), "Header style changed");
        }
    });

    use_frame_loop(move |dt| {
        if nav.peek().is_animating() {
            nav.write().advance(dt);
        }
    });

    let pose = nav.read().header_pose();
    let header_style = format!(
        "background-color: {}; box-shadow: {};",
        header_background(pose.opacity),
        header_shadow(pose.accent)
    );
    let panel_open = nav.read().is_panel_open();
    let panel_hidden = !panel_open;
    let panel_style = format!(
        "height: {:.1}px; opacity: {:.3};",
        nav.read().panel_height(panel_natural_height()),
        nav.read().panel_opacity()
    );

    let links: Vec<(NavItem, Route)> = NAV_ITEMS
        .iter()
        .filter_map(|item| Route::from_href(item.href).map(|route| (*item, route)))
        .collect();

    rsx! {
        header { class: "site-header", style: "{header_style}",
            div { class: "site-header-inner",
                Link { to: Route::Home {}, class: "brand",
                    SpinningCube { size: 32 }
                    span { "{BRAND}" }
                }

                nav { class: "nav-links",
                    for (item, route) in links.clone() {
                        Link {
                            key: "{item.href}",
                            to: route,
                            class: link_class(&item, &current),
                            "{item.name}"
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Ghost,
                    class: "nav-toggle".to_string(),
                    aria_label: "Toggle navigation".to_string(),
                    aria_expanded: panel_open,
                    onclick: move |_| {
                        let open = nav.write().toggle_panel();
                        tracing::debug!(open, "Navigation panel toggled");
                    },
                    {menu_icon(panel_open)}
                }
            }

            nav { class: "nav-panel", style: "{panel_style}", "aria-hidden": "{panel_hidden}",
                for (item, route) in links {
                    Link {
                        key: "{item.href}",
                        to: route,
                        class: link_class(&item, &current),
                        onclick: move |_| {
                            nav.write().choose_link();
                        },
                        "{item.name}"
                    }
                }
            }
        }
    }
}
