//! Public AST types for message templates and clause bodies.
//!
//! These types are public to enable external tooling (linters, checkers, etc.).

use std::collections::BTreeMap;

/// A scanned template string, split into literal text and placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// Iterate the placeholders of this template in left-to-right order.
    pub fn placeholders(&self) -> impl Iterator<Item = &PlaceholderSpec> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(spec) => Some(spec),
            Segment::Literal(_) => None,
        })
    }

    /// Returns true if the template contains no placeholders.
    pub fn is_plain(&self) -> bool {
        self.placeholders().next().is_none()
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, including any malformed `{…}` sequences.
    Literal(String),
    /// A recognised placeholder: `{name}`, `{name, type}` or `{name, type, format}`.
    Placeholder(PlaceholderSpec),
}

/// One placeholder occurrence as written in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSpec {
    /// The exact matched text, e.g. `{balance, number, currency}`.
    pub literal: String,
    /// Key into the values map, e.g. `balance`.
    pub name: String,
    /// Value type, e.g. `number`.
    pub kind: Option<String>,
    /// Type-specific format argument, e.g. `currency`, or a clause body for
    /// plural and select placeholders.
    pub format: Option<String>,
}

impl PlaceholderSpec {
    /// The value type, or the empty string for untyped placeholders.
    pub fn kind_str(&self) -> &str {
        self.kind.as_deref().unwrap_or_default()
    }
}

/// Which selector tokens a clause body accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseSyntax {
    /// CLDR categories (`zero`, `one`, `two`, `few`, `many`, `other`) and
    /// exact matches (`=0`, `=1`, ...).
    Plural,
    /// Arbitrary word tokens (`male`, `female`, `other`, ...).
    Select,
}

/// Selector to text mapping parsed from a plural or select clause body.
///
/// Later clauses with the same selector replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseTable {
    clauses: BTreeMap<String, String>,
}

impl ClauseTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the text for a selector.
    pub fn get(&self, selector: &str) -> Option<&str> {
        self.clauses.get(selector).map(String::as_str)
    }

    /// Returns true if the selector has a clause.
    pub fn contains(&self, selector: &str) -> bool {
        self.clauses.contains_key(selector)
    }

    /// Insert or replace the text for a selector.
    pub fn insert(&mut self, selector: impl Into<String>, text: impl Into<String>) {
        self.clauses.insert(selector.into(), text.into());
    }

    /// Number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Returns true if no clause was parsed.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Iterate selectors and their text in selector order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.clauses
            .iter()
            .map(|(selector, text)| (selector.as_str(), text.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ClauseTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = ClauseTable::new();
        for (selector, text) in iter {
            table.insert(selector, text);
        }
        table
    }
}
