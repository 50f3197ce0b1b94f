//! Error types for compiling and rendering placeholders.

use thiserror::Error;

/// An error raised when a placeholder's type or format is not understood.
///
/// Compile errors surface the first time a template is parsed, never at
/// render time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The placeholder names a value type with no formatter, or a plural or
    /// select placeholder is missing its clause body.
    #[error("unsupported type \"{kind}\" and format \"{}\"", format.as_deref().unwrap_or_default())]
    UnsupportedFormatType {
        kind: String,
        format: Option<String>,
    },

    /// The number format is not a digit count, currency code, or preset.
    #[error("number format \"{format}\" is not recognized")]
    UnrecognizedNumberFormat { format: String },

    /// The date or time format is not a named style or built-in conversion.
    #[error("date format \"{format}\" is not recognized")]
    UnrecognizedDateFormat { format: String },
}

/// An error raised while rendering a value with a compiled formatter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The value cannot be read as the formatter's value type.
    #[error("expected a {expected} value, got '{found}'")]
    MismatchedValue {
        expected: &'static str,
        found: String,
    },

    /// Locale data required for formatting could not be loaded.
    #[error("no {what} data for locale '{locale}': {message}")]
    LocaleData {
        what: &'static str,
        locale: String,
        message: String,
    },
}
