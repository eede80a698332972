use dioxus::prelude::*;

use crate::components::Shell;
use crate::context::{build_submitter, get_site_config, SharedSubmitter};
use crate::pages::{Contact, Feedback, Home, NotFound, Projects, Qualifications, Skills};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// Every page renders inside [`Shell`], which keeps the header and footer
/// mounted across navigation.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/skills")]
        Skills {},
        #[route("/qualifications")]
        Qualifications {},
        #[route("/projects")]
        Projects {},
        #[route("/contact")]
        Contact {},
        #[route("/feedback")]
        Feedback {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Route for a static navigation href, if it names a page.
    pub fn from_href(href: &str) -> Option<Self> {
        match href {
            "/" => Some(Route::Home {}),
            "/skills" => Some(Route::Skills {}),
            "/qualifications" => Some(Route::Qualifications {}),
            "/projects" => Some(Route::Projects {}),
            "/contact" => Some(Route::Contact {}),
            "/feedback" => Some(Route::Feedback {}),
            _ => None,
        }
    }
}

/// Root application component.
///
/// Provides global styles, site configuration, the form submitter and routing.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_site_config);
    let submitter: SharedSubmitter = use_hook(|| build_submitter(&config));

    use_context_provider(|| config.clone());
    use_context_provider(|| submitter.clone());

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::content::NAV_ITEMS;

    #[test]
    fn every_nav_item_has_a_route() {
        for item in NAV_ITEMS {
            let route = Route::from_href(item.href);
            assert!(route.is_some(), "no route for {}", item.href);
            assert_eq!(route.map(|r| r.to_string()), Some(item.href.to_string()));
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert!(Route::from_href("/blog").is_none());
        assert!(matches!(
            "/blog/post".parse::<Route>(),
            Ok(Route::NotFound { .. })
        ));
    }
}
