use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, TimeZone, Utc};

use crate::format::RenderError;

/// Named values substituted into a template.
pub type Values = HashMap<String, Value>;

/// A runtime value that can be substituted into a placeholder.
///
/// Each formatter declares the value type it expects and coerces from the
/// other variants where the conversion is lossless enough to be unsurprising:
/// numeric strings become numbers, and epoch milliseconds or RFC 3339 strings
/// become dates.
///
/// # Example
///
/// ```
/// use icusay::Value;
///
/// let count: Value = 42.into();
/// let price: Value = 9.99.into();
/// let name: Value = "Alice".into();
/// assert_eq!(count.as_number(), Some(42));
/// assert_eq!(price.as_float(), Some(9.99));
/// assert_eq!(name.as_string(), Some("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),

    /// An instant with the offset it should be displayed in.
    Date(DateTime<FixedOffset>),
}

impl Value {
    /// Get this value as an integer, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float, if it is numeric.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a date, if it is one.
    pub fn as_date(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Value::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Coerce this value to a number for number and plural formatters.
    pub fn to_number(&self) -> Result<f64, RenderError> {
        match self {
            Value::Number(n) => Ok(*n as f64),
            Value::Float(f) => Ok(*f),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| self.mismatch("number")),
            Value::Date(_) => Err(self.mismatch("number")),
        }
    }

    /// Coerce this value to a date for date and time formatters.
    ///
    /// Numbers are read as milliseconds since the Unix epoch.
    pub fn to_date(&self) -> Result<DateTime<FixedOffset>, RenderError> {
        let millis = match self {
            Value::Date(d) => return Ok(*d),
            Value::String(s) => {
                return DateTime::parse_from_rfc3339(s.trim()).map_err(|_| self.mismatch("date"));
            }
            Value::Number(n) => Some(*n),
            Value::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            Value::Float(_) => None,
        };
        millis
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
            .map(|d| d.fixed_offset())
            .ok_or_else(|| self.mismatch("date"))
    }

    fn mismatch(&self, expected: &'static str) -> RenderError {
        RenderError::MismatchedValue {
            expected,
            found: self.to_string(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Date(d) => write!(f, "{}", d.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

// From implementations for common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as i64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as i64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as i64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(d: DateTime<FixedOffset>) -> Self {
        Value::Date(d)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d.fixed_offset())
    }
}

impl From<NaiveDate> for Value {
    /// Midnight UTC on the given day.
    fn from(d: NaiveDate) -> Self {
        Value::Date(d.and_time(Default::default()).and_utc().fixed_offset())
    }
}
