//! Text lookup by locale key.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::error;

const LOCALES_JSON: &str = include_str!("../assets/content/locales.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    He,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::He => "he",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::He)
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::He,
            Locale::He => Locale::En,
        }
    }
}

/// `locale code -> dotted key -> text`
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct Catalog(HashMap<String, HashMap<String, String>>);

impl Catalog {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.0
            .get(locale.code())
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Requested locale, then English, then the key itself.
    pub fn lookup(&self, locale: Locale, key: &str) -> String {
        self.get(locale, key)
            .or_else(|| self.get(Locale::default(), key))
            .unwrap_or(key)
            .to_string()
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::parse(LOCALES_JSON).unwrap_or_else(|err| {
        error!(%err, "locale catalog failed to parse");
        Catalog::default()
    })
});

pub fn t(locale: Locale, key: &str) -> String {
    CATALOG.lookup(locale, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_has_both_locales() {
        let catalog = Catalog::parse(LOCALES_JSON).unwrap();
        assert_eq!(catalog.lookup(Locale::En, "nav.about"), "About");
        assert_eq!(catalog.lookup(Locale::He, "nav.about"), "אודות");
    }

    #[test]
    fn lookup_falls_back_to_english_then_key() {
        let catalog = Catalog::parse(
            r#"{ "en": { "a": "A", "b": "B" }, "he": { "a": "א" } }"#,
        )
        .unwrap();
        assert_eq!(catalog.lookup(Locale::He, "a"), "א");
        assert_eq!(catalog.lookup(Locale::He, "b"), "B");
        assert_eq!(catalog.lookup(Locale::He, "missing.key"), "missing.key");
    }

    #[test]
    fn hebrew_is_right_to_left() {
        assert!(Locale::He.is_rtl());
        assert!(!Locale::En.is_rtl());
        assert_eq!(Locale::En.toggled(), Locale::He);
    }
}
