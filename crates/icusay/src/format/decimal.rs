//! Locale-aware decimal rendering on top of ICU4X.

use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use fixed_decimal::{Decimal, FloatPrecision, SignedRoundingMode, UnsignedRoundingMode};
use icu_decimal::DecimalFormatter;
use icu_decimal::options::DecimalFormatterOptions;
use icu_locale_core::Locale;

use crate::format::RenderError;

/// Minimum and maximum number of digits after the decimal separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FractionDigits {
    pub min: i16,
    pub max: i16,
}

impl FractionDigits {
    /// Zero to three fraction digits, trailing zeros trimmed.
    pub const DEFAULT: FractionDigits = FractionDigits { min: 0, max: 3 };

    /// Exactly two fraction digits, as used for currency amounts.
    pub const CURRENCY: FractionDigits = FractionDigits::exact(2);

    /// Exactly `places` fraction digits.
    pub const fn exact(places: i16) -> Self {
        Self {
            min: places,
            max: places,
        }
    }
}

/// Per-locale cache of ICU4X decimal formatters.
#[derive(Default)]
pub struct DecimalFormatters {
    formatters: RefCell<HashMap<String, DecimalFormatter>>,
}

impl DecimalFormatters {
    /// Render `value` with locale digits, separators and grouping.
    ///
    /// Non-finite values are rendered without localization.
    pub fn format(
        &self,
        locale: &Locale,
        value: f64,
        digits: FractionDigits,
    ) -> Result<String, RenderError> {
        if !value.is_finite() {
            return Ok(value.to_string());
        }

        let mut decimal = Decimal::try_from_f64(value, FloatPrecision::RoundTrip).map_err(|_| {
            RenderError::MismatchedValue {
                expected: "finite number",
                found: value.to_string(),
            }
        })?;
        apply_fraction_digits(&mut decimal, digits);

        let mut formatters = self.formatters.borrow_mut();
        let formatter = match formatters.entry(locale.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let formatter =
                    DecimalFormatter::try_new(locale.clone().into(), DecimalFormatterOptions::default())
                        .map_err(|e| RenderError::LocaleData {
                            what: "decimal",
                            locale: locale.to_string(),
                            message: e.to_string(),
                        })?;
                entry.insert(formatter)
            }
        };
        Ok(formatter.format(&decimal).to_string())
    }

    /// Number of cached formatters.
    pub fn len(&self) -> usize {
        self.formatters.borrow().len()
    }

    /// Returns true if no formatter is cached.
    pub fn is_empty(&self) -> bool {
        self.formatters.borrow().is_empty()
    }

    /// Drop every cached formatter.
    pub fn clear(&self) {
        self.formatters.borrow_mut().clear();
    }
}

/// Round half away from zero to at most `max` fraction digits, then pad to
/// at least `min`.
fn apply_fraction_digits(decimal: &mut Decimal, digits: FractionDigits) {
    // rounding pads when the number is shorter than the rounding position
    if *decimal.magnitude_range().start() < -digits.max {
        decimal.round_with_mode(
            -digits.max,
            SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfExpand),
        );
    }
    decimal.trim_end();
    decimal.pad_end(-digits.min);
}
