//! Site configuration, embedded at build time.

use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::{error, warn};

use crate::i18n::Locale;
use crate::playback::VisibilityOptions;

const SITE_JSON: &str = include_str!("../assets/content/site.json");

/// Longest stagger a clip may wait before autoplay.
pub const MAX_STAGGER_MS: u32 = 10_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClipConfig {
    pub src: String,
    #[serde(default)]
    pub stagger_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamMember {
    pub key: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub clip: Option<ClipConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListingStatus {
    ForSale,
    ForRent,
    Sold,
}

impl ListingStatus {
    /// Locale key of the badge shown on the listing card.
    pub fn label_key(self) -> &'static str {
        match self {
            ListingStatus::ForSale => "portfolio.status.forSale",
            ListingStatus::ForRent => "portfolio.status.forRent",
            ListingStatus::Sold => "portfolio.status.sold",
        }
    }
}

/// A showcase property. Titles and places come from the locale table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    pub key: String,
    pub price: String,
    pub status: ListingStatus,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub default_locale: Locale,
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,
    #[serde(default = "default_clip_visibility")]
    pub clip_visibility: VisibilityOptions,
    #[serde(default = "default_reveal_visibility")]
    pub reveal_visibility: VisibilityOptions,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub approach: Vec<String>,
    #[serde(default)]
    pub listings: Vec<Listing>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub testimonials: Vec<String>,
}

fn default_sections() -> Vec<String> {
    vec!["home".to_string(), "about".to_string(), "contact".to_string()]
}

fn default_clip_visibility() -> VisibilityOptions {
    VisibilityOptions::repeating(0.1)
}

fn default_reveal_visibility() -> VisibilityOptions {
    VisibilityOptions::once(0.2)
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            sections: default_sections(),
            clip_visibility: default_clip_visibility(),
            reveal_visibility: default_reveal_visibility(),
            team: Vec::new(),
            services: Vec::new(),
            approach: Vec::new(),
            listings: Vec::new(),
            stats: Vec::new(),
            testimonials: Vec::new(),
        }
    }
}

impl SiteConfig {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let mut config: SiteConfig = serde_json::from_str(raw)?;
        config.normalize();
        Ok(config)
    }

    fn normalize(&mut self) {
        self.clip_visibility = self.clip_visibility.normalized();
        self.reveal_visibility = self.reveal_visibility.normalized();
        for member in &mut self.team {
            if let Some(clip) = member.clip.as_mut() {
                if clip.stagger_ms > MAX_STAGGER_MS {
                    warn!(
                        member = %member.key,
                        stagger_ms = clip.stagger_ms,
                        "clip stagger out of range, clamping"
                    );
                    clip.stagger_ms = MAX_STAGGER_MS;
                }
            }
        }
    }
}

static SITE_CONFIG: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::parse(SITE_JSON) {
    Ok(config) => config,
    Err(err) => {
        error!(%err, "falling back to default site config");
        SiteConfig::default()
    }
});

pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = SiteConfig::parse(SITE_JSON).expect("embedded site.json");
        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(config.clip_visibility, VisibilityOptions::repeating(0.1));
        assert_eq!(config.reveal_visibility, VisibilityOptions::once(0.2));
        let staggers: Vec<u32> = config
            .team
            .iter()
            .filter_map(|m| m.clip.as_ref().map(|c| c.stagger_ms))
            .collect();
        assert_eq!(staggers, vec![500, 700]);
        assert_eq!(
            config.approach,
            vec!["discretion", "expertise", "dedication"]
        );
        assert!(config.sections.iter().any(|s| s == "portfolio"));
        assert!(config.sections.iter().any(|s| s == "testimonials"));
    }

    #[test]
    fn listing_status_reads_camel_case() {
        let config = SiteConfig::parse(
            r#"{ "listings": [
                { "key": "loft", "price": "₪1M", "status": "forRent" },
                { "key": "barn", "price": "₪2M", "status": "sold", "photo": "/images/barn.jpg" }
            ] }"#,
        )
        .unwrap();
        assert_eq!(config.listings[0].status, ListingStatus::ForRent);
        assert_eq!(config.listings[0].photo, None);
        assert_eq!(config.listings[1].status.label_key(), "portfolio.status.sold");
    }

    #[test]
    fn unknown_listing_status_is_rejected() {
        let err = SiteConfig::parse(
            r#"{ "listings": [{ "key": "x", "price": "1", "status": "leased" }] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("invalid site config"));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = SiteConfig::parse("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = SiteConfig::parse(
            r#"{
                "clip_visibility": { "threshold": 3.0, "repeat": true },
                "team": [{ "key": "x", "clip": { "src": "/x.mp4", "stagger_ms": 60000 } }]
            }"#,
        )
        .unwrap();
        assert_eq!(config.clip_visibility.threshold, 1.0);
        assert_eq!(config.team[0].clip.as_ref().unwrap().stagger_ms, MAX_STAGGER_MS);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let err = SiteConfig::parse("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("invalid site config"));
    }
}
