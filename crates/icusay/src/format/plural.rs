//! Plural and selectordinal clause formatting.
//!
//! Different languages have different plural rules: English has "one" and
//! "other", Russian has "one", "few", "many" and "other", and Arabic uses all
//! six CLDR categories. Rules come from ICU4X and are cached per locale in a
//! [`PluralRulesCache`] owned by the format context.

use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use fixed_decimal::{Decimal, FloatPrecision};
use icu_locale_core::Locale;
use icu_plurals::{PluralCategory, PluralOperands, PluralRuleType, PluralRules};

use crate::format::context::FormatContext;
use crate::format::decimal::FractionDigits;
use crate::format::RenderError;
use crate::parser::{ClauseSyntax, ClauseTable, parse_clauses};

/// Which CLDR rule set selects the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Counting rules: "1 item", "2 items".
    Cardinal,
    /// Ranking rules: "1st", "2nd", "3rd".
    Ordinal,
}

impl From<RuleKind> for PluralRuleType {
    fn from(kind: RuleKind) -> Self {
        match kind {
            RuleKind::Cardinal => PluralRuleType::Cardinal,
            RuleKind::Ordinal => PluralRuleType::Ordinal,
        }
    }
}

/// A compiled `{n, plural, ...}` or `{n, selectordinal, ...}` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct PluralFormat {
    clauses: ClauseTable,
    kind: RuleKind,
}

impl PluralFormat {
    /// Parse the clause body of a plural placeholder.
    pub fn compile(raw: &str, kind: RuleKind) -> Self {
        Self {
            clauses: parse_clauses(raw, ClauseSyntax::Plural),
            kind,
        }
    }

    /// The parsed clauses.
    pub fn clauses(&self) -> &ClauseTable {
        &self.clauses
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Pick the clause for `count` and substitute `#` with the formatted count.
    ///
    /// An exact `=n` clause beats the CLDR category. When neither matches the
    /// result is empty.
    pub fn format(
        &self,
        count: f64,
        locale: &Locale,
        context: &FormatContext,
    ) -> Result<String, RenderError> {
        let text = match self.clauses.get(&exact_key(count)) {
            Some(text) => text,
            None => {
                let category = context.plural_rules().category(locale, self.kind, count)?;
                match self.clauses.get(category_str(category)) {
                    Some(text) => text,
                    None => return Ok(String::new()),
                }
            }
        };

        if !text.contains('#') {
            return Ok(text.to_string());
        }
        let formatted = context
            .decimals()
            .format(locale, count, FractionDigits::DEFAULT)?;
        Ok(text.replace('#', &formatted))
    }
}

/// The `=n` selector for a count.
fn exact_key(count: f64) -> String {
    match as_integer(count) {
        Some(n) => format!("={n}"),
        None => format!("={count}"),
    }
}

fn as_integer(count: f64) -> Option<i64> {
    let n = count as i64;
    (count.fract() == 0.0 && n as f64 == count).then_some(n)
}

/// Translate a `PluralCategory` enum to its string representation.
pub fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Per-locale cache of ICU4X plural rules.
///
/// Rules are built on first use for a locale and rule kind.
#[derive(Default)]
pub struct PluralRulesCache {
    rules: RefCell<HashMap<(String, RuleKind), PluralRules>>,
}

impl PluralRulesCache {
    /// CLDR category of `count` in `locale`.
    ///
    /// # Examples
    ///
    /// ```
    /// use icu_locale_core::locale;
    /// use icusay::format::{PluralRulesCache, RuleKind, category_str};
    ///
    /// let cache = PluralRulesCache::default();
    /// let category = |lang, n| {
    ///     category_str(cache.category(&lang, RuleKind::Cardinal, n).unwrap())
    /// };
    ///
    /// assert_eq!(category(locale!("en"), 1.0), "one");
    /// assert_eq!(category(locale!("en"), 2.0), "other");
    /// assert_eq!(category(locale!("ru"), 2.0), "few");
    /// assert_eq!(category(locale!("ru"), 5.0), "many");
    /// ```
    pub fn category(
        &self,
        locale: &Locale,
        kind: RuleKind,
        count: f64,
    ) -> Result<PluralCategory, RenderError> {
        let operands = match as_integer(count) {
            Some(n) => PluralOperands::from(n),
            None => match Decimal::try_from_f64(count.abs(), FloatPrecision::RoundTrip) {
                Ok(decimal) => PluralOperands::from(&decimal),
                Err(_) => return Ok(PluralCategory::Other),
            },
        };

        let mut rules = self.rules.borrow_mut();
        let rules = match rules.entry((locale.to_string(), kind)) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let built = PluralRules::try_new(locale.clone().into(), PluralRuleType::from(kind).into())
                    .map_err(|e| RenderError::LocaleData {
                        what: "plural rule",
                        locale: locale.to_string(),
                        message: e.to_string(),
                    })?;
                entry.insert(built)
            }
        };
        Ok(rules.category_for(operands))
    }

    /// Number of cached rule sets.
    pub fn len(&self) -> usize {
        self.rules.borrow().len()
    }

    /// Returns true if no rule set is cached.
    pub fn is_empty(&self) -> bool {
        self.rules.borrow().is_empty()
    }

    /// Drop every cached rule set.
    pub fn clear(&self) {
        self.rules.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_keys_drop_integral_fraction() {
        assert_eq!(exact_key(3.0), "=3");
        assert_eq!(exact_key(1.5), "=1.5");
    }
}
