//! Routes of the site.

use dioxus::prelude::*;

use crate::components::pages::{Home, NotFound};
use crate::components::SiteShell;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(SiteShell)]
        #[route("/")]
        Home {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

pub fn page_title(view: &AppView) -> &'static str {
    match view {
        AppView::Home {} => "ALL IN | Real Estate",
        AppView::NotFound { .. } => "ALL IN | Page not found",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_follow_the_route() {
        assert_eq!(page_title(&AppView::Home {}), "ALL IN | Real Estate");
        let missing = AppView::NotFound {
            segments: vec!["nope".to_string()],
        };
        assert_eq!(page_title(&missing), "ALL IN | Page not found");
    }

    #[test]
    fn unknown_paths_land_on_not_found() {
        let parsed = "/listings/42".parse::<AppView>();
        assert!(matches!(parsed, Ok(AppView::NotFound { .. })));
        assert!(matches!("/".parse::<AppView>(), Ok(AppView::Home {})));
    }
}
