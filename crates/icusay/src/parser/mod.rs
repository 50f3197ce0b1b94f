//! Template and clause parsers.
//!
//! This module scans translation strings for ICU-style placeholders and parses
//! the `selector {text}` bodies used by plural and select placeholders. Both
//! parsers are lenient: text that does not match the grammar is left as
//! literal text rather than reported as an error.

pub mod ast;
mod clause;
mod placeholder;

pub use ast::*;
pub use clause::{PLURAL_CATEGORIES, parse_clauses};
pub use placeholder::{parse_template, scan_placeholders};
