use dioxus::prelude::*;

use crate::components::{use_visibility, Icon, Reveal, SmartClip};
use crate::config::{site_config, Listing, TeamMember};
use crate::i18n::{t, Locale};
use crate::utils::{clip_element_id, slugify};

/// Title and description pair read from `{prefix}.{key}.title|desc`.
#[derive(Clone, PartialEq)]
struct Blurb {
    key: String,
    title: String,
    desc: String,
}

fn blurbs(locale: Locale, prefix: &str, keys: &[String]) -> Vec<Blurb> {
    keys.iter()
        .map(|key| Blurb {
            key: key.clone(),
            title: t(locale, &format!("{prefix}.{key}.title")),
            desc: t(locale, &format!("{prefix}.{key}.desc")),
        })
        .collect()
}

#[derive(Clone, PartialEq)]
struct StatLine {
    key: String,
    value: String,
    label: String,
}

#[component]
pub fn Home() -> Element {
    let locale = use_context::<Signal<Locale>>();
    let config = site_config();
    // One gate for the whole team block; every clip in it shares the signal.
    let team_visible = use_visibility("about", config.clip_visibility);

    let text = |key: &str| t(locale(), key);
    let hero_title = text("hero.title");
    let hero_subtitle = text("hero.subtitle");
    let hero_cta = text("hero.cta");
    let about_title = text("about.title");
    let stories = [
        text("about.story1"),
        text("about.story2"),
        text("about.story3"),
    ];
    let approach_title = text("about.approachTitle");
    let approach = blurbs(locale(), "about.approach", &config.approach);
    let team_title = text("about.teamTitle");
    let portfolio_title = text("portfolio.title");
    let services_title = text("services.title");
    let services = blurbs(locale(), "services.items", &config.services);
    let testimonials_title = text("testimonials.title");
    let stats: Vec<StatLine> = config
        .stats
        .iter()
        .map(|stat| StatLine {
            key: stat.key.clone(),
            value: stat.value.clone(),
            label: text(&format!("testimonials.stats.{}", stat.key)),
        })
        .collect();
    let quotes: Vec<(String, String, String)> = config
        .testimonials
        .iter()
        .map(|key| {
            (
                key.clone(),
                text(&format!("testimonials.quotes.{key}.text")),
                text(&format!("testimonials.quotes.{key}.author")),
            )
        })
        .collect();
    let contact_title = text("contact.title");
    let contact_body = text("contact.body");
    let contact_lines = [
        ("phone", text("contact.phone")),
        ("mail", text("contact.email")),
        ("location", text("contact.address")),
    ];

    rsx! {
        section { id: "home", class: "hero",
            Reveal { id: "hero-copy", class: "hero-copy",
                h1 { class: "hero-title", "{hero_title}" }
                p { class: "hero-subtitle", "{hero_subtitle}" }
                a { class: "hero-cta", href: "#contact", "{hero_cta}" }
            }
        }

        section { id: "about", class: "about",
            Reveal { id: "about-story", class: "about-story",
                h2 { class: "section-title", "{about_title}" }
                for story in stories {
                    p { "{story}" }
                }
            }
            if !approach.is_empty() {
                Reveal { id: "about-approach", class: "about-approach",
                    h3 { class: "approach-title", "{approach_title}" }
                    div { class: "approach-grid",
                        for pillar in approach {
                            div { key: "{pillar.key}", class: "approach-card",
                                h4 { "{pillar.title}" }
                                p { "{pillar.desc}" }
                            }
                        }
                    }
                }
            }
            h3 { class: "team-title", "{team_title}" }
            div { class: "team-list",
                for (index, member) in config.team.iter().enumerate() {
                    TeamMemberCard {
                        key: "{member.key}",
                        member: member.clone(),
                        index,
                        visible: team_visible,
                    }
                }
            }
        }

        section { id: "portfolio", class: "portfolio",
            h2 { class: "section-title", "{portfolio_title}" }
            div { class: "portfolio-grid",
                for (index, listing) in config.listings.iter().enumerate() {
                    ListingCard { key: "{listing.key}", listing: listing.clone(), index }
                }
            }
        }

        section { id: "services", class: "services",
            h2 { class: "section-title", "{services_title}" }
            div { class: "services-grid",
                for (index, service) in services.into_iter().enumerate() {
                    Reveal {
                        key: "{service.key}",
                        id: format!("service-{}", slugify(&service.key)),
                        delay_ms: (index as u32) * 100,
                        class: "service-card",
                        h4 { "{service.title}" }
                        p { "{service.desc}" }
                    }
                }
            }
        }

        section { id: "testimonials", class: "testimonials",
            h2 { class: "section-title", "{testimonials_title}" }
            Reveal { id: "testimonial-stats", class: "stats-grid",
                for stat in stats {
                    div { key: "{stat.key}", class: "stat-card stat-{stat.key}",
                        p { class: "stat-number", "{stat.value}" }
                        p { class: "stat-label", "{stat.label}" }
                    }
                }
            }
            div { class: "quote-list",
                for (index, (key, quote, author)) in quotes.into_iter().enumerate() {
                    Reveal {
                        key: "{key}",
                        id: format!("testimonial-{}", slugify(&key)),
                        delay_ms: (index as u32) * 150,
                        class: "quote-card",
                        blockquote { "{quote}" }
                        cite { "{author}" }
                    }
                }
            }
        }

        section { id: "contact", class: "contact",
            Reveal { id: "contact-card", class: "contact-card",
                h2 { class: "section-title", "{contact_title}" }
                p { "{contact_body}" }
                for (icon, line) in contact_lines {
                    div { class: "contact-line",
                        Icon { name: icon.to_string(), class: "contact-icon".to_string() }
                        span { "{line}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ListingCard(listing: Listing, index: usize) -> Element {
    let locale = use_context::<Signal<Locale>>();
    let field = |name: &str| t(locale(), &format!("portfolio.items.{}.{name}", listing.key));
    let title = field("title");
    let location = field("location");
    let status = t(locale(), listing.status.label_key());

    rsx! {
        Reveal {
            id: format!("listing-{}", slugify(&listing.key)),
            delay_ms: (index as u32) * 100,
            class: "listing-card",
            if let Some(photo) = listing.photo.clone() {
                img { class: "listing-photo", src: "{photo}", alt: "{title}", loading: "lazy" }
            }
            span { class: "listing-status", "{status}" }
            h4 { class: "listing-title", "{title}" }
            div { class: "listing-location",
                Icon { name: "location".to_string(), class: "listing-icon".to_string() }
                span { "{location}" }
            }
            p { class: "listing-price", "{listing.price}" }
        }
    }
}

/// Photo, bio and clip for one team member. Cards alternate sides.
#[component]
fn TeamMemberCard(member: TeamMember, index: usize, visible: ReadSignal<bool>) -> Element {
    let locale = use_context::<Signal<Locale>>();
    let field = |name: &str| t(locale(), &format!("about.team.{}.{name}", member.key));
    let name = field("name");
    let title = field("title");
    let quote = field("quote");
    let bio = field("bio");
    let side = if index % 2 == 0 {
        "team-card-left"
    } else {
        "team-card-right"
    };

    rsx! {
        Reveal {
            id: format!("team-{}", slugify(&member.key)),
            delay_ms: (index as u32) * 150,
            class: format!("team-card {side}"),
            div { class: "team-info",
                if let Some(photo) = member.photo.clone() {
                    img { class: "team-photo", src: "{photo}", alt: "{name}" }
                }
                h4 { class: "team-name", "{name}" }
                span { class: "team-role", "{title}" }
                blockquote { class: "team-quote", "{quote}" }
                p { class: "team-bio", "{bio}" }
            }
            if let Some(clip) = member.clip.clone() {
                SmartClip {
                    id: clip_element_id(&member.key),
                    src: clip.src,
                    stagger_ms: clip.stagger_ms,
                    visible,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_blurbs_read_the_locale_table() {
        let services = blurbs(Locale::En, "services.items", &["selling".to_string()]);
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].key, "selling");
        assert_ne!(services[0].title, "services.items.selling.title");
    }

    #[test]
    fn missing_services_fall_back_to_keys() {
        let services = blurbs(Locale::He, "services.items", &["yachts".to_string()]);
        assert_eq!(services[0].title, "services.items.yachts.title");
    }

    #[test]
    fn every_configured_pillar_and_listing_has_text() {
        let config = site_config();
        for pillar in blurbs(Locale::En, "about.approach", &config.approach) {
            assert!(!pillar.title.starts_with("about.approach."), "{}", pillar.key);
            assert!(!pillar.desc.starts_with("about.approach."), "{}", pillar.key);
        }
        for listing in &config.listings {
            let title = t(Locale::En, &format!("portfolio.items.{}.title", listing.key));
            assert!(!title.starts_with("portfolio.items."), "{}", listing.key);
            assert!(!t(Locale::He, listing.status.label_key()).starts_with("portfolio."));
        }
        for stat in &config.stats {
            let label = t(Locale::En, &format!("testimonials.stats.{}", stat.key));
            assert!(!label.starts_with("testimonials."), "{}", stat.key);
        }
    }

    #[test]
    fn every_section_has_a_nav_label() {
        for section in &site_config().sections {
            let label = t(Locale::He, &format!("nav.{section}"));
            assert!(!label.starts_with("nav."), "{section}");
        }
    }
}
