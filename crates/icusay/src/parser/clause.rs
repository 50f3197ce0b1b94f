//! Clause body parser for plural and select placeholders.
//!
//! A clause body is a sequence of `selector {text}` pairs:
//!
//! ```text
//! =0 {no items} one {# item} other {# items}
//! male {He} female {She} other {They}
//! ```
//!
//! Text between clauses that is not a valid `selector {text}` pair is skipped.

use super::ast::{ClauseSyntax, ClauseTable};
use super::placeholder::{balanced, word};
use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, opt, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{any, take_while};

/// CLDR plural categories accepted as plural selectors.
pub const PLURAL_CATEGORIES: &[&str] = &["zero", "one", "two", "few", "many", "other"];

/// Parse a clause body into a selector to text table.
///
/// # Example
///
/// ```
/// use icusay::parser::{ClauseSyntax, parse_clauses};
///
/// let table = parse_clauses("=0 {no items} one {# item} other {# items}", ClauseSyntax::Plural);
/// assert_eq!(table.get("=0"), Some("no items"));
/// assert_eq!(table.get("other"), Some("# items"));
/// ```
pub fn parse_clauses(body: &str, syntax: ClauseSyntax) -> ClauseTable {
    let mut remaining = body;
    let found: Vec<Option<(&str, &str)>> = repeat(
        0..,
        alt((
            clause(syntax).map(Some),
            word.value(None),
            any.value(None),
        )),
    )
    .parse_next(&mut remaining)
    .unwrap_or_default();

    found.into_iter().flatten().collect()
}

/// Parse one `selector {text}` pair.
fn clause<'i>(
    syntax: ClauseSyntax,
) -> impl Parser<&'i str, (&'i str, &'i str), ErrMode<ContextError>> {
    move |input: &mut &'i str| {
        let key = selector(syntax, input)?;
        ws(input)?;
        let text = delimited('{', balanced, '}').parse_next(input)?;
        Ok((key, text))
    }
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_whitespace())
        .void()
        .parse_next(input)
}

/// Parse a selector token valid for the given syntax.
fn selector<'i>(syntax: ClauseSyntax, input: &mut &'i str) -> ModalResult<&'i str> {
    match syntax {
        ClauseSyntax::Plural => alt((
            ('=', opt('-'), digit1, opt(('.', digit1))).take(),
            word.verify(|w: &str| PLURAL_CATEGORIES.contains(&w)),
        ))
        .parse_next(input),
        ClauseSyntax::Select => word.parse_next(input),
    }
}
