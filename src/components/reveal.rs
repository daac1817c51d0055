use dioxus::prelude::*;

use crate::components::use_visibility;
use crate::config::site_config;

fn reveal_class(revealed: bool, extra: &str) -> String {
    let base = if revealed {
        "reveal reveal-visible"
    } else {
        "reveal"
    };
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

/// Fades its children in the first time the block scrolls into view.
#[component]
pub fn Reveal(
    id: String,
    #[props(default)] delay_ms: u32,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let revealed = use_visibility(&id, site_config().reveal_visibility);
    let class = reveal_class(revealed(), &class);

    rsx! {
        div {
            id: "{id}",
            class: "{class}",
            style: "transition-delay: {delay_ms}ms;",
            {children}
        }
    }
}
