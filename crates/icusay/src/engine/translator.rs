//! Locale selection and `say` over loaded translations.

use std::collections::HashMap;

use bon::Builder;
use tracing::debug;

use crate::engine::{Interpolator, SayError, Translations};
use crate::format::{CompileError, Formatter, compile_placeholder};
use crate::types::Values;

/// Looks up translation keys for the active locale and interpolates values.
///
/// Translator owns one [`Translations`] map per locale and the
/// [`Interpolator`] whose placeholder cache is keyed by translation key.
/// Switching locale resets that cache, since the same key maps to a different
/// template in each locale.
///
/// # Example
///
/// ```
/// use icusay::{Translations, Translator, values};
///
/// let mut translator = Translator::builder().locale("en").build();
/// let translations: Translations =
///     [("inbox", "{count, plural, one {# message} other {# messages}}")].into_iter().collect();
/// translator.set_translations("en", translations);
///
/// let text = translator.say("inbox", Some(&values! { "count" => 3 })).unwrap();
/// assert_eq!(text.as_deref(), Some("3 messages"));
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct Translator {
    /// Active locale tag (e.g. "en", "de-AT").
    #[builder(default = "en".to_string())]
    locale: String,

    /// Locale tried by formatters when the active tag is malformed.
    #[builder(default = "en".to_string())]
    fallback_locale: String,

    /// Placeholder cache and formatter configuration.
    #[builder(default, into)]
    interpolator: Interpolator,

    /// Loaded translations, keyed by locale tag.
    #[builder(skip)]
    translations: HashMap<String, Translations>,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::builder().build()
    }
}

impl Translator {
    /// Create a Translator for English.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Locale Management
    // =========================================================================

    /// The active locale tag.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Switch the active locale and reset the placeholder cache.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        let locale = locale.into();
        if locale != self.locale {
            self.locale = locale;
            self.interpolator.reset_placeholder_cache();
        }
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    pub fn set_fallback_locale(&mut self, locale: impl Into<String>) {
        self.fallback_locale = locale.into();
    }

    // =========================================================================
    // Translations
    // =========================================================================

    /// Replace all translations for a locale.
    ///
    /// Replacing the active locale's translations resets the placeholder
    /// cache so edited templates are recompiled.
    pub fn set_translations(&mut self, locale: impl Into<String>, translations: Translations) {
        let locale = locale.into();
        debug!(locale = %locale, count = translations.len(), "setting translations");
        if locale == self.locale {
            self.interpolator.reset_placeholder_cache();
        }
        self.translations.insert(locale, translations);
    }

    /// Returns true if translations are loaded for `locale`.
    pub fn has_translations(&self, locale: &str) -> bool {
        self.translations.contains_key(locale)
    }

    /// The raw template for `key` in the active locale.
    pub fn translation(&self, key: &str) -> Option<&str> {
        self.translations.get(&self.locale)?.get(key)
    }

    // =========================================================================
    // Interpolation
    // =========================================================================

    /// Translate `key` into the active locale, interpolating `values`.
    ///
    /// Returns `Ok(None)` when the key has no translation.
    pub fn say(&self, key: &str, values: Option<&Values>) -> Result<Option<String>, SayError> {
        let translations =
            self.translations
                .get(&self.locale)
                .ok_or_else(|| SayError::NoTranslationsLoaded {
                    locale: self.locale.clone(),
                })?;
        let Some(literal) = translations.get(key) else {
            return Ok(None);
        };

        let locales = [self.locale.as_str(), self.fallback_locale.as_str()];
        self.interpolator
            .interpolate(key, literal, values, &locales)
            .map(Some)
    }

    /// Compile a formatter for a value type and format argument.
    pub fn compile_placeholder(
        &self,
        kind: &str,
        format: Option<&str>,
    ) -> Result<Formatter, CompileError> {
        compile_placeholder(kind, format)
    }

    /// Forget every compiled template.
    pub fn reset_placeholder_cache(&self) {
        self.interpolator.reset_placeholder_cache();
    }

    pub fn interpolator(&self) -> &Interpolator {
        &self.interpolator
    }
}
