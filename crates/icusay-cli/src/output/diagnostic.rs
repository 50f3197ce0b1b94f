//! Miette diagnostics for translation file problems.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use icusay::CompileError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A placeholder in a translation file that failed to compile.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("message '{key}': {message}")]
#[diagnostic(code(icusay::placeholder))]
pub struct PlaceholderDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("this placeholder")]
    span: SourceSpan,

    key: String,

    message: String,

    #[help]
    help: Option<String>,
}

impl PlaceholderDiagnostic {
    /// Point at `literal` inside the file, or at the message key when the
    /// literal is written with JSON escapes.
    pub fn new(path: &Path, content: &str, key: &str, literal: &str, err: &CompileError) -> Self {
        let (offset, len) = match content.find(literal) {
            Some(offset) => (offset, literal.len()),
            None => content
                .find(&format!("\"{key}\""))
                .map_or((0, 0), |offset| (offset, key.len() + 2)),
        };

        PlaceholderDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, len).into(),
            key: key.to_string(),
            message: err.to_string(),
            help: Some(help_for(err).to_string()),
        }
    }
}

fn help_for(err: &CompileError) -> &'static str {
    match err {
        CompileError::UnsupportedFormatType { kind, .. }
            if kind == "plural" || kind == "select" || kind == "selectordinal" =>
        {
            "add clauses, e.g. {count, plural, one {# item} other {# items}}"
        }
        CompileError::UnsupportedFormatType { .. } => {
            "supported types are date, time, number, plural, select and selectordinal"
        }
        CompileError::UnrecognizedNumberFormat { .. } => {
            "use a digit count, a currency code, `currency` or `percent`"
        }
        CompileError::UnrecognizedDateFormat { .. } => {
            "use a named style such as `short` or `longWithTime`, or iso8601, rfc1123, timestamp"
        }
    }
}

/// A translation file that is not a flat JSON object of strings.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid translation file: {message}")]
#[diagnostic(code(icusay::json))]
pub struct JsonDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,
}

impl JsonDiagnostic {
    /// Create a diagnostic from a serde_json error with source context.
    pub fn from_json_error(path: &Path, content: &str, err: &serde_json::Error) -> Self {
        let (line, column) = (err.line(), err.column());

        // Convert line:column to byte offset.
        // Sum of (line_length + 1) for lines before error line, plus column.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        JsonDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: err.to_string(),
        }
    }
}
