//! Shared state handed to every formatter.

use std::collections::HashMap;

use bon::Builder;
use icu_locale_core::Locale;

use crate::format::currency::{CurrencyCode, locale_currency};
use crate::format::date::DateFormatters;
use crate::format::decimal::DecimalFormatters;
use crate::format::plural::PluralRulesCache;

/// Configuration and locale-data caches used while rendering placeholders.
///
/// # Example
///
/// ```
/// use icusay::format::{CurrencyCode, FormatContext};
/// use icu_locale_core::locale;
///
/// let context = FormatContext::builder()
///     .default_currency(CurrencyCode::Eur)
///     .locale_currencies([("en-CA".to_string(), CurrencyCode::Cad)].into())
///     .build();
///
/// assert_eq!(context.currency_for(&locale!("en-CA")), CurrencyCode::Cad);
/// assert_eq!(context.currency_for(&locale!("ar")), CurrencyCode::Eur);
/// ```
#[derive(Builder)]
pub struct FormatContext {
    /// Currency for `{n, number, currency}` when the locale has none.
    #[builder(default = CurrencyCode::Usd)]
    default_currency: CurrencyCode,

    /// Locale tag to currency overrides, consulted before the built-in table.
    ///
    /// Tags are matched exactly first, then by language alone.
    #[builder(default)]
    locale_currencies: HashMap<String, CurrencyCode>,

    #[builder(skip)]
    plural_rules: PluralRulesCache,

    #[builder(skip)]
    decimals: DecimalFormatters,

    #[builder(skip)]
    dates: DateFormatters,
}

impl Default for FormatContext {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl FormatContext {
    pub fn default_currency(&self) -> CurrencyCode {
        self.default_currency
    }

    /// The currency `{n, number, currency}` renders for `locale`.
    pub fn currency_for(&self, locale: &Locale) -> CurrencyCode {
        self.locale_currencies
            .get(&locale.to_string())
            .or_else(|| self.locale_currencies.get(locale.id.language.as_str()))
            .copied()
            .or_else(|| locale_currency(locale))
            .unwrap_or(self.default_currency)
    }

    pub fn plural_rules(&self) -> &PluralRulesCache {
        &self.plural_rules
    }

    pub fn decimals(&self) -> &DecimalFormatters {
        &self.decimals
    }

    pub fn dates(&self) -> &DateFormatters {
        &self.dates
    }

    /// Drop all cached locale data.
    pub fn clear_caches(&self) {
        self.plural_rules.clear();
        self.decimals.clear();
        self.dates.clear();
    }
}
