//! Diagnostic and table rendering for CLI output.

pub mod diagnostic;
pub mod table;
