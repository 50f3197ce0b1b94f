//! Placeholder scanner using winnow.
//!
//! Scans template strings for ICU-style placeholders:
//! - `{name}`
//! - `{name, type}`
//! - `{name, type, format}`
//! - `{name, plural, one {...} other {...}}` (clause bodies for plural and select)
//!
//! Anything that does not match is kept as literal text. The scanner never fails.

use super::ast::*;
use winnow::combinator::{alt, delimited, opt, peek, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{any, take_while};

/// Value types whose format argument may be a clause body.
const CLAUSE_KINDS: &[&str] = &["plural", "select", "selectordinal"];

/// Scan a template string into literal and placeholder segments.
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    match repeat(0.., segment).parse_next(&mut remaining) {
        Ok(segments) => Template {
            segments: merge_literals(segments),
        },
        Err(_) => Template {
            segments: vec![Segment::Literal(input.to_string())],
        },
    }
}

/// Return every placeholder occurrence in left-to-right order.
///
/// # Example
///
/// ```
/// use icusay::parser::scan_placeholders;
///
/// let found = scan_placeholders("Pay {total, number, usd} by {due, date}");
/// assert_eq!(found[0].literal, "{total, number, usd}");
/// assert_eq!(found[0].format.as_deref(), Some("usd"));
/// assert_eq!(found[1].name, "due");
/// ```
pub fn scan_placeholders(input: &str) -> Vec<PlaceholderSpec> {
    parse_template(input)
        .segments
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(spec) => Some(spec),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment: a placeholder, a run of plain text, or a stray brace.
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((
        placeholder.map(Segment::Placeholder),
        take_while(1.., |c: char| c != '{').map(|s: &str| Segment::Literal(s.to_string())),
        any.map(|c: char| Segment::Literal(c.to_string())),
    ))
    .parse_next(input)
}

/// Parse `{name(, type(, format)?)?}`.
fn placeholder(input: &mut &str) -> ModalResult<PlaceholderSpec> {
    let ((name, typed), literal) = delimited('{', (word, opt(preceded(separator, kind_and_format))), '}')
        .with_taken()
        .parse_next(input)?;

    let (kind, format) = match typed {
        Some((kind, format)) => (Some(kind.to_string()), format.map(str::to_string)),
        None => (None, None),
    };

    Ok(PlaceholderSpec {
        literal: literal.to_string(),
        name: name.to_string(),
        kind,
        format,
    })
}

/// Parse the type and its optional format argument.
fn kind_and_format<'i>(input: &mut &'i str) -> ModalResult<(&'i str, Option<&'i str>)> {
    let kind = word.parse_next(input)?;
    let format = if CLAUSE_KINDS.contains(&kind) {
        opt(preceded(
            separator,
            alt((terminated(word, peek('}')), clause_body)),
        ))
        .parse_next(input)?
    } else {
        opt(preceded(separator, word)).parse_next(input)?
    };
    Ok((kind, format))
}

/// A comma followed by at least one whitespace character.
fn separator(input: &mut &str) -> ModalResult<()> {
    (',', take_while(1.., |c: char| c.is_whitespace()))
        .void()
        .parse_next(input)
}

/// Parse a clause body: brace-balanced text containing at least one `{...}` group.
fn clause_body<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    balanced
        .verify(|body: &str| body.contains('{'))
        .parse_next(input)
}

/// Parse text whose braces are balanced, stopping before an unmatched `}`.
pub(super) fn balanced<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    repeat::<_, _, (), _, _>(
        0..,
        alt((
            take_while(1.., |c: char| c != '{' && c != '}').void(),
            delimited('{', balanced, '}').void(),
        )),
    )
    .take()
    .parse_next(input)
}

/// Parse a word: one or more ASCII alphanumerics or underscores.
pub(super) fn word<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_word_char).parse_next(input)
}

/// Check if a character is a word character.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
