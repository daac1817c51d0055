use dioxus::prelude::*;

use crate::components::AppView;
use crate::i18n::{t, Locale};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let locale = use_context::<Signal<Locale>>();
    let path = format!("/{}", segments.join("/"));
    let title = t(locale(), "notFound.title");
    let back = t(locale(), "notFound.back");

    rsx! {
        section { class: "not-found",
            h1 { "{title}" }
            code { class: "not-found-path", "{path}" }
            Link { class: "hero-cta", to: AppView::Home {}, "{back}" }
        }
    }
}
