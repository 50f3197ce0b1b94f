//! Integration tests for the placeholder scanner.

use icusay::parser::{PlaceholderSpec, Segment, parse_template, scan_placeholders};

fn triple(spec: &PlaceholderSpec) -> (&str, Option<&str>, Option<&str>) {
    (
        spec.name.as_str(),
        spec.kind.as_deref(),
        spec.format.as_deref(),
    )
}

// =============================================================================
// Basic scanning
// =============================================================================

#[test]
fn test_no_placeholders() {
    assert!(scan_placeholders("Hello, world!").is_empty());
    assert!(parse_template("Hello, world!").is_plain());
}

#[test]
fn test_empty_template() {
    assert_eq!(parse_template("").segments, vec![]);
}

#[test]
fn test_all_three_forms_in_order() {
    let found = scan_placeholders("{a} then {b, number} then {c, number, usd}");
    let triples: Vec<_> = found.iter().map(triple).collect();
    assert_eq!(
        triples,
        vec![
            ("a", None, None),
            ("b", Some("number"), None),
            ("c", Some("number"), Some("usd")),
        ]
    );
    assert_eq!(found[2].literal, "{c, number, usd}");
}

#[test]
fn test_segments_keep_surrounding_text() {
    let template = parse_template("Hello {name}!");
    assert_eq!(template.segments.len(), 3);
    assert_eq!(template.segments[0], Segment::Literal("Hello ".into()));
    assert_eq!(template.segments[2], Segment::Literal("!".into()));
    match &template.segments[1] {
        Segment::Placeholder(spec) => assert_eq!(spec.literal, "{name}"),
        Segment::Literal(text) => panic!("expected placeholder, got literal {text:?}"),
    }
}

#[test]
fn test_same_name_tracked_per_occurrence() {
    let found = scan_placeholders("{n, number} or {n, number, 2}");
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].format, None);
    assert_eq!(found[1].format.as_deref(), Some("2"));
}

#[test]
fn test_multiple_whitespace_after_comma() {
    let found = scan_placeholders("{when,\n   date,\tlong}");
    assert_eq!(triple(&found[0]), ("when", Some("date"), Some("long")));
}

// =============================================================================
// Malformed placeholders stay literal
// =============================================================================

#[test]
fn test_comma_without_whitespace_is_literal() {
    let template = parse_template("{name,number}");
    assert!(template.is_plain());
    assert_eq!(template.segments, vec![Segment::Literal("{name,number}".into())]);
}

#[test]
fn test_padded_name_is_literal() {
    assert!(scan_placeholders("{ name }").is_empty());
}

#[test]
fn test_non_word_name_is_literal() {
    assert!(scan_placeholders("{first-name} {#}").is_empty());
}

#[test]
fn test_unclosed_brace_is_literal() {
    let template = parse_template("Total: {amount, number");
    assert!(template.is_plain());
}

#[test]
fn test_doubled_braces_match_inner_placeholder() {
    let found = scan_placeholders("{{name}}");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].literal, "{name}");
}

#[test]
fn test_malformed_before_valid() {
    let found = scan_placeholders("{bad,x} {good}");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "good");
}

// =============================================================================
// Clause bodies
// =============================================================================

#[test]
fn test_plural_clause_body() {
    let found = scan_placeholders("You have {count, plural, one {# item} other {# items}}.");
    assert_eq!(found.len(), 1);
    assert_eq!(
        triple(&found[0]),
        ("count", Some("plural"), Some("one {# item} other {# items}"))
    );
    assert_eq!(
        found[0].literal,
        "{count, plural, one {# item} other {# items}}"
    );
}

#[test]
fn test_select_clause_body_spanning_lines() {
    let template = "{gender, select,\n   male {He}\n   female {She}\n   other {They}\n} will respond shortly.";
    let found = scan_placeholders(template);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind.as_deref(), Some("select"));
    assert!(found[0].format.as_deref().is_some_and(|f| f.contains("female {She}")));
}

#[test]
fn test_nested_clause_body() {
    let found = scan_placeholders("{n, plural, one {{who} has # file} other {{who} has # files}}");
    assert_eq!(found.len(), 1);
    assert_eq!(
        found[0].format.as_deref(),
        Some("one {{who} has # file} other {{who} has # files}")
    );
}

#[test]
fn test_word_format_for_plural_kind() {
    let found = scan_placeholders("{n, plural, other}");
    assert_eq!(triple(&found[0]), ("n", Some("plural"), Some("other")));
}

#[test]
fn test_clause_body_only_for_clause_kinds() {
    assert!(scan_placeholders("{n, number, one {#}}").is_empty());
}
