use crate::components::{page_title, AppView, Icon};
use crate::config::site_config;
use crate::i18n::{t, Locale};
use dioxus::prelude::*;
use tracing::info;

/// Layout shared by every route: locale context, navbar and footer.
#[component]
pub fn SiteShell() -> Element {
    let config = site_config();
    let locale = use_signal(|| config.default_locale);
    use_context_provider(|| locale);

    let route = use_route::<AppView>();
    let dir = if locale().is_rtl() { "rtl" } else { "ltr" };
    let lang = locale().code();
    let phone = t(locale(), "contact.phone");

    rsx! {
        document::Title { "{page_title(&route)}" }
        div { class: "site-shell", dir: "{dir}", lang: "{lang}",
            Navbar {}
            main { class: "site-main",
                Outlet::<AppView> {}
            }
            footer { class: "site-footer",
                span { "© ALL IN Real Estate" }
                span { class: "site-footer-contact", "{phone}" }
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    let mut locale = use_context::<Signal<Locale>>();
    let mut menu_open = use_signal(|| false);
    let links: Vec<(String, String)> = site_config()
        .sections
        .iter()
        .map(|section| (section.clone(), t(locale(), &format!("nav.{section}"))))
        .collect();

    let links_class = if menu_open() {
        "navbar-links navbar-links-open"
    } else {
        "navbar-links"
    };
    let menu_icon = if menu_open() { "x" } else { "menu" };
    let next_locale = locale().toggled().code().to_uppercase();
    let language_label = t(locale(), "nav.language");

    rsx! {
        nav { class: "navbar",
            a { class: "navbar-brand", href: "#home", "ALL IN" }
            ul { class: "{links_class}",
                for (section, label) in links {
                    li { key: "{section}",
                        a {
                            href: "#{section}",
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                }
            }
            div { class: "navbar-actions",
                button {
                    class: "navbar-language",
                    aria_label: "{language_label}",
                    onclick: move |_| {
                        let next = locale().toggled();
                        info!(locale = next.code(), "switching locale");
                        locale.set(next);
                    },
                    Icon { name: "globe".to_string(), class: "navbar-icon".to_string() }
                    span { "{next_locale}" }
                }
                button {
                    class: "navbar-menu-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| menu_open.toggle(),
                    Icon { name: menu_icon.to_string(), class: "navbar-icon".to_string() }
                }
            }
        }
    }
}
