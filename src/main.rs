use dioxus::prelude::*;

mod components;
mod config;
mod i18n;
mod playback;
mod utils;

use components::AppView;

const SITE_CSS: Asset = asset!("/assets/styling/site.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "theme-color", content: "#0b0b0c" }
        document::Meta {
            name: "description",
            content: "ALL IN Real Estate. Selling, acquisition, land, rentals and consulting.",
        }

        document::Stylesheet { href: SITE_CSS }

        Router::<AppView> {}
    }
}
