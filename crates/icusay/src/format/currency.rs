//! ISO 4217 currency codes and locale currency conventions.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use icu_locale_core::Locale;

use crate::format::locale::{language, region};

macro_rules! currencies {
    ($($variant:ident => $code:literal, $symbol:literal;)+) => {
        /// Supported three-letter currency codes.
        ///
        /// Parsing is case-insensitive, so number formats may be written as
        /// `usd` or `USD`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum CurrencyCode {
            $($variant,)+
        }

        impl CurrencyCode {
            /// Every supported currency.
            pub const ALL: &'static [CurrencyCode] = &[$(CurrencyCode::$variant,)+];

            /// The upper-case ISO code.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(CurrencyCode::$variant => $code,)+
                }
            }

            /// Symbol used when rendering amounts.
            pub fn symbol(self) -> &'static str {
                match self {
                    $(CurrencyCode::$variant => $symbol,)+
                }
            }
        }
    };
}

currencies! {
    Aed => "AED", "AED";
    Ars => "ARS", "ARS";
    Aud => "AUD", "A$";
    Brl => "BRL", "R$";
    Cad => "CAD", "CA$";
    Chf => "CHF", "CHF";
    Clp => "CLP", "CLP";
    Cny => "CNY", "CN¥";
    Cop => "COP", "COP";
    Czk => "CZK", "CZK";
    Dkk => "DKK", "DKK";
    Egp => "EGP", "EGP";
    Eur => "EUR", "€";
    Gbp => "GBP", "£";
    Hkd => "HKD", "HK$";
    Huf => "HUF", "HUF";
    Idr => "IDR", "IDR";
    Ils => "ILS", "₪";
    Inr => "INR", "₹";
    Isk => "ISK", "ISK";
    Jpy => "JPY", "¥";
    Kes => "KES", "KES";
    Krw => "KRW", "₩";
    Mxn => "MXN", "MX$";
    Myr => "MYR", "MYR";
    Ngn => "NGN", "NGN";
    Nok => "NOK", "NOK";
    Nzd => "NZD", "NZ$";
    Pen => "PEN", "PEN";
    Php => "PHP", "₱";
    Pkr => "PKR", "PKR";
    Pln => "PLN", "PLN";
    Qar => "QAR", "QAR";
    Ron => "RON", "RON";
    Rub => "RUB", "RUB";
    Sar => "SAR", "SAR";
    Sek => "SEK", "SEK";
    Sgd => "SGD", "SGD";
    Thb => "THB", "THB";
    Try => "TRY", "TRY";
    Twd => "TWD", "NT$";
    Uah => "UAH", "UAH";
    Usd => "USD", "$";
    Vnd => "VND", "₫";
    Zar => "ZAR", "ZAR";
}

/// The string is not a supported currency code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCurrency;

impl FromStr for CurrencyCode {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurrencyCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(UnknownCurrency)
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Built-in default currency for a locale.
///
/// The region decides when present; otherwise the language does.
pub fn locale_currency(locale: &Locale) -> Option<CurrencyCode> {
    region(locale)
        .and_then(region_currency)
        .or_else(|| language_currency(language(locale)))
}

fn region_currency(region: &str) -> Option<CurrencyCode> {
    let code = match region {
        "US" | "EC" | "SV" | "PR" => CurrencyCode::Usd,
        "AT" | "BE" | "CY" | "DE" | "EE" | "ES" | "FI" | "FR" | "GR" | "HR" | "IE" | "IT"
        | "LT" | "LU" | "LV" | "MT" | "NL" | "PT" | "SI" | "SK" => CurrencyCode::Eur,
        "AE" => CurrencyCode::Aed,
        "AR" => CurrencyCode::Ars,
        "AU" => CurrencyCode::Aud,
        "BR" => CurrencyCode::Brl,
        "CA" => CurrencyCode::Cad,
        "CH" | "LI" => CurrencyCode::Chf,
        "CL" => CurrencyCode::Clp,
        "CN" => CurrencyCode::Cny,
        "CO" => CurrencyCode::Cop,
        "CZ" => CurrencyCode::Czk,
        "DK" => CurrencyCode::Dkk,
        "EG" => CurrencyCode::Egp,
        "GB" => CurrencyCode::Gbp,
        "HK" => CurrencyCode::Hkd,
        "HU" => CurrencyCode::Huf,
        "ID" => CurrencyCode::Idr,
        "IL" => CurrencyCode::Ils,
        "IN" => CurrencyCode::Inr,
        "IS" => CurrencyCode::Isk,
        "JP" => CurrencyCode::Jpy,
        "KE" => CurrencyCode::Kes,
        "KR" => CurrencyCode::Krw,
        "MX" => CurrencyCode::Mxn,
        "MY" => CurrencyCode::Myr,
        "NG" => CurrencyCode::Ngn,
        "NO" => CurrencyCode::Nok,
        "NZ" => CurrencyCode::Nzd,
        "PE" => CurrencyCode::Pen,
        "PH" => CurrencyCode::Php,
        "PK" => CurrencyCode::Pkr,
        "PL" => CurrencyCode::Pln,
        "QA" => CurrencyCode::Qar,
        "RO" => CurrencyCode::Ron,
        "RU" => CurrencyCode::Rub,
        "SA" => CurrencyCode::Sar,
        "SE" => CurrencyCode::Sek,
        "SG" => CurrencyCode::Sgd,
        "TH" => CurrencyCode::Thb,
        "TR" => CurrencyCode::Try,
        "TW" => CurrencyCode::Twd,
        "UA" => CurrencyCode::Uah,
        "VN" => CurrencyCode::Vnd,
        "ZA" => CurrencyCode::Zar,
        _ => return None,
    };
    Some(code)
}

fn language_currency(language: &str) -> Option<CurrencyCode> {
    let code = match language {
        "en" => CurrencyCode::Usd,
        "de" | "fr" | "es" | "it" | "nl" | "pt" | "fi" | "el" | "et" | "sk" | "sl" | "ga" | "eu"
        | "hr" | "lt" | "lv" | "mt" => CurrencyCode::Eur,
        "cy" => CurrencyCode::Gbp,
        "cs" => CurrencyCode::Czk,
        "da" => CurrencyCode::Dkk,
        "fil" => CurrencyCode::Php,
        "he" => CurrencyCode::Ils,
        "hi" => CurrencyCode::Inr,
        "hu" => CurrencyCode::Huf,
        "id" => CurrencyCode::Idr,
        "is" => CurrencyCode::Isk,
        "ja" => CurrencyCode::Jpy,
        "ko" => CurrencyCode::Krw,
        "ms" => CurrencyCode::Myr,
        "nb" | "nn" | "no" => CurrencyCode::Nok,
        "pl" => CurrencyCode::Pln,
        "ro" => CurrencyCode::Ron,
        "ru" => CurrencyCode::Rub,
        "sv" => CurrencyCode::Sek,
        "th" => CurrencyCode::Thb,
        "tr" => CurrencyCode::Try,
        "uk" => CurrencyCode::Uah,
        "vi" => CurrencyCode::Vnd,
        "zh" => CurrencyCode::Cny,
        _ => return None,
    };
    Some(code)
}

/// Where a language writes currency symbols and percent signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AffixStyle {
    /// Currency symbol goes after the amount.
    pub currency_after: bool,
    /// Separator between the symbol and the amount.
    pub currency_gap: &'static str,
    /// Text appended for percentages.
    pub percent_suffix: &'static str,
}

const NBSP: &str = "\u{a0}";

/// Symbol placement conventions for a language.
pub(crate) fn affix_style(language: &str) -> AffixStyle {
    match language {
        "de" | "fr" | "es" | "it" | "pt" | "ru" | "uk" | "pl" | "cs" | "sk" | "sl" | "hr" | "hu"
        | "ro" | "fi" | "sv" | "nb" | "nn" | "no" | "da" | "et" | "lt" | "lv" | "el" | "is" => {
            AffixStyle {
                currency_after: true,
                currency_gap: NBSP,
                percent_suffix: if language == "it" || language == "pt" {
                    "%"
                } else {
                    "\u{a0}%"
                },
            }
        }
        "nl" => AffixStyle {
            currency_after: false,
            currency_gap: NBSP,
            percent_suffix: "%",
        },
        _ => AffixStyle {
            currency_after: false,
            currency_gap: "",
            percent_suffix: "%",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use icu_locale_core::locale;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("usd".parse::<CurrencyCode>(), Ok(CurrencyCode::Usd));
        assert_eq!("EuR".parse::<CurrencyCode>(), Ok(CurrencyCode::Eur));
        assert_eq!("blah".parse::<CurrencyCode>(), Err(UnknownCurrency));
    }

    #[test]
    fn region_wins_over_language() {
        assert_eq!(locale_currency(&locale!("en")), Some(CurrencyCode::Usd));
        assert_eq!(locale_currency(&locale!("en-GB")), Some(CurrencyCode::Gbp));
        assert_eq!(locale_currency(&locale!("en-CA")), Some(CurrencyCode::Cad));
        assert_eq!(locale_currency(&locale!("ja")), Some(CurrencyCode::Jpy));
        assert_eq!(locale_currency(&locale!("ar")), None);
    }
}
