//! Formatter registry and the type formatters behind it.
//!
//! A placeholder's value type picks a [`Formatter`] variant once, when the
//! placeholder is compiled. Rendering then coerces the value to the type the
//! variant expects and formats it for the first usable locale.

mod context;
mod currency;
mod date;
mod decimal;
mod error;
mod locale;
mod number;
mod plural;
mod select;

pub use context::FormatContext;
pub use currency::{CurrencyCode, UnknownCurrency, locale_currency};
pub use date::{
    DateFields, DateFormat, DateFormatters, DateStyle, MonthStyle, TextWidth, TimeFormat,
};
pub use decimal::{DecimalFormatters, FractionDigits};
pub use error::{CompileError, RenderError};
pub use locale::resolve_locale;
pub use number::{CurrencySource, NumberFormat, NumberStyle};
pub use plural::{PluralFormat, PluralRulesCache, RuleKind, category_str};
pub use select::SelectFormat;

use tracing::debug;

use crate::types::Value;

/// The value type a placeholder declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// No type: `{name}`.
    Text,
    Date,
    Time,
    Number,
    Plural,
    SelectOrdinal,
    Select,
}

impl ValueType {
    /// Look up a type name as written in a placeholder. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "" => Some(ValueType::Text),
            "date" => Some(ValueType::Date),
            "time" => Some(ValueType::Time),
            "number" => Some(ValueType::Number),
            "plural" => Some(ValueType::Plural),
            "selectordinal" => Some(ValueType::SelectOrdinal),
            "select" => Some(ValueType::Select),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueType::Text => "",
            ValueType::Date => "date",
            ValueType::Time => "time",
            ValueType::Number => "number",
            ValueType::Plural => "plural",
            ValueType::SelectOrdinal => "selectordinal",
            ValueType::Select => "select",
        }
    }
}

/// A compiled placeholder formatter.
#[derive(Debug, Clone, PartialEq)]
pub enum Formatter {
    /// Renders the value as-is.
    PlainText,
    Date(DateFormat),
    Time(TimeFormat),
    Number(NumberFormat),
    Plural(PluralFormat),
    Select(SelectFormat),
}

impl Formatter {
    /// Render `value` for the first well-formed tag in `locales`.
    pub fn format(
        &self,
        value: &Value,
        locales: &[&str],
        context: &FormatContext,
    ) -> Result<String, RenderError> {
        let locale = resolve_locale(locales);
        match self {
            Formatter::PlainText => Ok(value.to_string()),
            Formatter::Date(format) => format.format(&value.to_date()?, &locale, context),
            Formatter::Time(format) => format.format(&value.to_date()?, &locale, context),
            Formatter::Number(format) => format.format(value.to_number()?, &locale, context),
            Formatter::Plural(format) => format.format(value.to_number()?, &locale, context),
            Formatter::Select(format) => Ok(format.format(&value.to_string())),
        }
    }
}

/// Build the formatter for a placeholder's type and format argument.
///
/// Plural, selectordinal and select placeholders need a clause body; without
/// one they are rejected like an unknown type.
///
/// # Examples
///
/// ```
/// use icusay::format::{CompileError, Formatter, compile_placeholder};
///
/// assert_eq!(compile_placeholder("", None), Ok(Formatter::PlainText));
/// assert!(matches!(compile_placeholder("number", Some("usd")), Ok(Formatter::Number(_))));
/// assert_eq!(
///     compile_placeholder("color", Some("red")),
///     Err(CompileError::UnsupportedFormatType {
///         kind: "color".to_string(),
///         format: Some("red".to_string()),
///     })
/// );
/// ```
pub fn compile_placeholder(kind: &str, format: Option<&str>) -> Result<Formatter, CompileError> {
    let unsupported = || CompileError::UnsupportedFormatType {
        kind: kind.to_string(),
        format: format.map(str::to_string),
    };
    let value_type = ValueType::from_name(kind).ok_or_else(unsupported)?;
    debug!(kind, format, "compiling placeholder");

    let formatter = match value_type {
        ValueType::Text => Formatter::PlainText,
        ValueType::Date => Formatter::Date(DateFormat::compile(format)?),
        ValueType::Time => Formatter::Time(TimeFormat::compile(format)?),
        ValueType::Number => Formatter::Number(NumberFormat::compile(format)?),
        ValueType::Plural => {
            Formatter::Plural(PluralFormat::compile(format.ok_or_else(unsupported)?, RuleKind::Cardinal))
        }
        ValueType::SelectOrdinal => {
            Formatter::Plural(PluralFormat::compile(format.ok_or_else(unsupported)?, RuleKind::Ordinal))
        }
        ValueType::Select => Formatter::Select(SelectFormat::compile(format.ok_or_else(unsupported)?)),
    };
    Ok(formatter)
}
