//! Select clause formatting.

use crate::parser::{ClauseSyntax, ClauseTable, parse_clauses};

/// A compiled `{choice, select, ...}` placeholder.
///
/// # Example
///
/// ```
/// use icusay::format::SelectFormat;
///
/// let format = SelectFormat::compile("male {He} female {She} other {They}");
/// assert_eq!(format.format("female"), "She");
/// assert_eq!(format.format("robot"), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectFormat {
    clauses: ClauseTable,
}

impl SelectFormat {
    pub fn compile(raw: &str) -> Self {
        Self {
            clauses: parse_clauses(raw, ClauseSyntax::Select),
        }
    }

    pub fn clauses(&self) -> &ClauseTable {
        &self.clauses
    }

    /// Text of the clause keyed exactly by `choice`, or empty.
    ///
    /// There is no implicit fallback to `other`.
    pub fn format(&self, choice: &str) -> String {
        self.clauses.get(choice).unwrap_or_default().to_string()
    }
}
