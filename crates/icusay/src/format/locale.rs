//! Locale resolution for formatters.
//!
//! Formatters receive an ordered list of BCP-47 tags and use the first one
//! that parses. No further negotiation happens here.

use icu_locale_core::subtags::Region;
use icu_locale_core::{Locale, locale};

/// Pick the first well-formed tag, defaulting to English.
pub fn resolve_locale(locales: &[&str]) -> Locale {
    locales
        .iter()
        .find_map(|tag| tag.parse::<Locale>().ok())
        .unwrap_or(locale!("en"))
}

/// The language subtag of a locale (e.g. "en" for "en-GB").
pub fn language(locale: &Locale) -> &str {
    locale.id.language.as_str()
}

/// The region subtag of a locale, if any (e.g. "GB" for "en-GB").
pub fn region(locale: &Locale) -> Option<&str> {
    locale.id.region.as_ref().map(Region::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_malformed_tags() {
        let locale = resolve_locale(&["not a tag", "de-AT"]);
        assert_eq!(language(&locale), "de");
        assert_eq!(region(&locale), Some("AT"));
    }

    #[test]
    fn defaults_to_english() {
        assert_eq!(language(&resolve_locale(&[])), "en");
    }
}
