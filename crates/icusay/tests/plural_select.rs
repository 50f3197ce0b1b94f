//! Integration tests for plural, selectordinal and select formatting.

use icusay::format::{FormatContext, PluralFormat, RuleKind, SelectFormat};
use icusay::{Formatter, RenderError, Value, compile_placeholder};
use icu_locale_core::{Locale, locale};

const ITEMS: &str = "=0 {no items} one {# item} other {# items}";

fn plural(body: &str, count: f64, locale: Locale) -> String {
    PluralFormat::compile(body, RuleKind::Cardinal)
        .format(count, &locale, &FormatContext::default())
        .unwrap()
}

// =============================================================================
// Plural selection
// =============================================================================

#[test]
fn test_english_categories() {
    assert_eq!(plural(ITEMS, 0.0, locale!("en")), "no items");
    assert_eq!(plural(ITEMS, 1.0, locale!("en")), "1 item");
    assert_eq!(plural(ITEMS, 5.0, locale!("en")), "5 items");
}

#[test]
fn test_exact_match_beats_category() {
    let body = "=1 {exactly one} one {# item} other {# items}";
    assert_eq!(plural(body, 1.0, locale!("en")), "exactly one");
    assert_eq!(plural(body, 2.0, locale!("en")), "2 items");
}

#[test]
fn test_count_is_locale_formatted() {
    assert_eq!(plural(ITEMS, 1000.0, locale!("en")), "1,000 items");
    assert_eq!(plural(ITEMS, 1000.0, locale!("de")), "1.000 items");
}

#[test]
fn test_every_hash_is_replaced() {
    assert_eq!(plural("other {# of #}", 3.0, locale!("en")), "3 of 3");
}

#[test]
fn test_missing_category_is_empty() {
    assert_eq!(plural("one {# item}", 5.0, locale!("en")), "");
}

#[test]
fn test_fractional_count() {
    assert_eq!(plural(ITEMS, 1.5, locale!("en")), "1.5 items");
    assert_eq!(plural(ITEMS, 1.0, locale!("en")), "1 item");
    let body = "one {a} few {b} many {c} other {d}";
    assert_eq!(plural(body, 1.5, locale!("ru")), "d");
}

#[test]
fn test_fractional_and_negative_exact_matches() {
    let body = "=1.5 {one and a half} =-1 {overdrawn} other {# items}";
    assert_eq!(plural(body, 1.5, locale!("en")), "one and a half");
    assert_eq!(plural(body, -1.0, locale!("en")), "overdrawn");
    assert_eq!(plural(body, 2.5, locale!("en")), "2.5 items");
}

#[test]
fn test_russian_categories() {
    let body = "one {# файл} few {# файла} many {# файлов} other {# файла}";
    assert_eq!(plural(body, 1.0, locale!("ru")), "1 файл");
    assert_eq!(plural(body, 2.0, locale!("ru")), "2 файла");
    assert_eq!(plural(body, 5.0, locale!("ru")), "5 файлов");
    assert_eq!(plural(body, 21.0, locale!("ru")), "21 файл");
}

#[test]
fn test_arabic_uses_zero_and_two() {
    let body = "zero {zero} one {one} two {two} few {few} many {many} other {other}";
    assert_eq!(plural(body, 0.0, locale!("ar")), "zero");
    assert_eq!(plural(body, 2.0, locale!("ar")), "two");
    assert_eq!(plural(body, 11.0, locale!("ar")), "many");
}

#[test]
fn test_ordinal_rules() {
    let format = PluralFormat::compile("one {#st} two {#nd} few {#rd} other {#th}", RuleKind::Ordinal);
    let context = FormatContext::default();
    let render = |n: f64| format.format(n, &locale!("en"), &context).unwrap();
    assert_eq!(render(1.0), "1st");
    assert_eq!(render(2.0), "2nd");
    assert_eq!(render(3.0), "3rd");
    assert_eq!(render(4.0), "4th");
    assert_eq!(render(11.0), "11th");
    assert_eq!(render(22.0), "22nd");
}

#[test]
fn test_rules_cached_per_locale_and_kind() {
    let context = FormatContext::default();
    let cardinal = PluralFormat::compile(ITEMS, RuleKind::Cardinal);
    let ordinal = PluralFormat::compile(ITEMS, RuleKind::Ordinal);
    for n in [1.0, 2.0, 3.0] {
        cardinal.format(n, &locale!("en"), &context).unwrap();
    }
    ordinal.format(1.0, &locale!("en"), &context).unwrap();
    cardinal.format(1.0, &locale!("ru"), &context).unwrap();
    assert_eq!(context.plural_rules().len(), 3);

    context.clear_caches();
    assert!(context.plural_rules().is_empty());
    assert!(context.decimals().is_empty());
}

// =============================================================================
// Through the registry
// =============================================================================

#[test]
fn test_plural_value_coercion() {
    let formatter = compile_placeholder("plural", Some(ITEMS)).unwrap();
    let context = FormatContext::default();
    let text = formatter
        .format(&Value::from("1"), &["en"], &context)
        .unwrap();
    assert_eq!(text, "1 item");

    let err = formatter
        .format(&Value::from("lots"), &["en"], &context)
        .unwrap_err();
    assert_eq!(
        err,
        RenderError::MismatchedValue {
            expected: "number",
            found: "lots".to_string()
        }
    );
}

#[test]
fn test_selectordinal_uses_ordinal_rules() {
    let formatter = compile_placeholder("selectordinal", Some("one {#st} other {#th}")).unwrap();
    match &formatter {
        Formatter::Plural(format) => assert_eq!(format.kind(), RuleKind::Ordinal),
        other => panic!("expected plural formatter, got {other:?}"),
    }
    let text = formatter
        .format(&Value::from(21), &["en"], &FormatContext::default())
        .unwrap();
    assert_eq!(text, "21st");
}

// =============================================================================
// Select
// =============================================================================

#[test]
fn test_select_lookup() {
    let format = SelectFormat::compile("male {He} female {She} other {They}");
    assert_eq!(format.format("male"), "He");
    assert_eq!(format.format("female"), "She");
    assert_eq!(format.format("other"), "They");
}

#[test]
fn test_select_has_no_implicit_other() {
    let format = SelectFormat::compile("male {He} other {They}");
    assert_eq!(format.format("unknown"), "");
}

#[test]
fn test_select_stringifies_value() {
    let formatter = compile_placeholder("select", Some("1 {first} 2 {second}")).unwrap();
    let text = formatter
        .format(&Value::from(2), &["en"], &FormatContext::default())
        .unwrap();
    assert_eq!(text, "second");
}
