//! Number, currency and percent formatting.

use icu_locale_core::Locale;

use crate::format::context::FormatContext;
use crate::format::currency::{CurrencyCode, affix_style};
use crate::format::decimal::FractionDigits;
use crate::format::locale::language;
use crate::format::{CompileError, RenderError};

/// Largest digit count accepted as a fixed fraction-digit format.
const MAX_FRACTION_DIGITS: i16 = 20;

/// Where a currency amount takes its currency from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencySource {
    /// Named in the format, e.g. `{n, number, eur}`.
    Explicit(CurrencyCode),
    /// `{n, number, currency}`: the locale's currency.
    Locale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    Decimal(FractionDigits),
    Currency(CurrencySource),
    Percent,
}

/// A compiled `{n, number[, format]}` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    style: NumberStyle,
}

impl NumberFormat {
    /// Resolve a number format argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use icusay::format::{CurrencyCode, CurrencySource, FractionDigits, NumberFormat, NumberStyle};
    ///
    /// let style = |f| NumberFormat::compile(f).unwrap().style();
    /// assert_eq!(style(Some("2")), NumberStyle::Decimal(FractionDigits::exact(2)));
    /// assert_eq!(style(Some("EUR")), NumberStyle::Currency(CurrencySource::Explicit(CurrencyCode::Eur)));
    /// assert_eq!(style(Some("currency")), NumberStyle::Currency(CurrencySource::Locale));
    /// assert_eq!(style(None), NumberStyle::Decimal(FractionDigits::DEFAULT));
    /// assert!(NumberFormat::compile(Some("fancy")).is_err());
    /// ```
    pub fn compile(format: Option<&str>) -> Result<Self, CompileError> {
        let Some(format) = format.filter(|f| !f.is_empty()) else {
            return Ok(Self::new(NumberStyle::Decimal(FractionDigits::DEFAULT)));
        };

        if format.chars().all(|c| c.is_ascii_digit()) {
            return match format.parse::<i16>() {
                Ok(places) if places <= MAX_FRACTION_DIGITS => Ok(Self::new(NumberStyle::Decimal(
                    FractionDigits::exact(places),
                ))),
                _ => Err(unrecognized(format)),
            };
        }
        if let Ok(code) = format.parse::<CurrencyCode>() {
            return Ok(Self::new(NumberStyle::Currency(CurrencySource::Explicit(code))));
        }
        match format {
            "currency" => Ok(Self::new(NumberStyle::Currency(CurrencySource::Locale))),
            "percent" => Ok(Self::new(NumberStyle::Percent)),
            _ => Err(unrecognized(format)),
        }
    }

    pub const fn new(style: NumberStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> NumberStyle {
        self.style
    }

    /// Render `value` for `locale`.
    pub fn format(
        &self,
        value: f64,
        locale: &Locale,
        context: &FormatContext,
    ) -> Result<String, RenderError> {
        let decimals = context.decimals();
        let affixes = affix_style(language(locale));
        match self.style {
            NumberStyle::Decimal(digits) => decimals.format(locale, value, digits),
            NumberStyle::Percent => {
                let body = decimals.format(locale, (value * 100.0).abs(), FractionDigits::DEFAULT)?;
                Ok(format!("{}{body}{}", sign(value), affixes.percent_suffix))
            }
            NumberStyle::Currency(source) => {
                let code = match source {
                    CurrencySource::Explicit(code) => code,
                    CurrencySource::Locale => context.currency_for(locale),
                };
                let body = decimals.format(locale, value.abs(), FractionDigits::CURRENCY)?;
                let symbol = code.symbol();
                // letter symbols such as "CHF" never touch the digits
                let gap = if symbol.ends_with(|c: char| c.is_ascii_alphabetic()) {
                    "\u{a0}"
                } else {
                    affixes.currency_gap
                };
                if affixes.currency_after {
                    Ok(format!("{}{body}{gap}{symbol}", sign(value)))
                } else {
                    Ok(format!("{}{symbol}{gap}{body}", sign(value)))
                }
            }
        }
    }
}

fn sign(value: f64) -> &'static str {
    if value < 0.0 { "-" } else { "" }
}

fn unrecognized(format: &str) -> CompileError {
    CompileError::UnrecognizedNumberFormat {
        format: format.to_string(),
    }
}
