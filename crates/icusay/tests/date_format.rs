//! Integration tests for date and time formatting.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use icusay::format::{
    CompileError, DateFields, DateFormat, DateStyle, FormatContext, MonthStyle, TextWidth,
    TimeFormat,
};
use icu_locale_core::{Locale, locale};

/// 2012-12-20 19:00:00 UTC, a Thursday.
fn sample() -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2012, 12, 20, 19, 0, 0)
        .unwrap()
        .fixed_offset()
}

/// CLDR puts a narrow no-break space before "AM"/"PM"; compare with a plain one.
fn plain(text: String) -> String {
    text.replace('\u{202f}', " ")
}

fn render_date(format: DateFormat, date: &DateTime<FixedOffset>, locale: Locale) -> String {
    plain(format.format(date, &locale, &FormatContext::default()).unwrap())
}

fn render(format: &str, locale: Locale) -> String {
    render_date(DateFormat::compile(Some(format)).unwrap(), &sample(), locale)
}

// =============================================================================
// Named styles in English
// =============================================================================

#[test]
fn test_named_styles() {
    let cases = [
        ("short", "12/20/2012"),
        ("long", "Thursday, December 20, 2012"),
        ("longWithTime", "Thursday, December 20, 2012, 7:00 PM"),
        ("longWithExactTime", "Thursday, December 20, 2012, 7:00:00 PM"),
        ("shortWithTime", "12/20/2012, 7:00 PM"),
        ("shortWithExactTime", "12/20/2012, 7:00:00 PM"),
        ("monthDay", "December 20"),
        ("shortMonthDay", "Dec 20"),
        ("monthYear", "December 2012"),
        ("shortMonthYear", "Dec 2012"),
        ("timeOnly", "7:00 PM"),
        ("exactTime", "7:00:00 PM"),
    ];
    for (format, expected) in cases {
        assert_eq!(render(format, locale!("en")), expected, "format: {format}");
    }
}

#[test]
fn test_single_letter_aliases() {
    assert_eq!(render("d", locale!("en")), "12/20/2012");
    assert_eq!(render("D", locale!("en")), "Thursday, December 20, 2012");
    assert_eq!(render("g", locale!("en")), "12/20/2012, 7:00 PM");
    assert_eq!(render("M", locale!("en")), "December 20");
    assert_eq!(render("t", locale!("en")), "7:00 PM");
    assert_eq!(render("T", locale!("en")), "7:00:00 PM");
}

#[test]
fn test_absent_format_is_short() {
    let format = DateFormat::compile(None).unwrap();
    assert_eq!(render_date(format, &sample(), locale!("en")), "12/20/2012");
}

#[test]
fn test_rendered_in_value_offset() {
    let offset = FixedOffset::east_opt(-5 * 3600).unwrap();
    let date = sample().with_timezone(&offset);
    let format = TimeFormat::compile(Some("short")).unwrap();
    let text = format.format(&date, &locale!("en"), &FormatContext::default()).unwrap();
    assert_eq!(plain(text), "2:00 PM");
}

// =============================================================================
// Built-in conversions
// =============================================================================

#[test]
fn test_builtins() {
    assert_eq!(render("iso8601", locale!("en")), "2012-12-20T19:00:00.000Z");
    assert_eq!(render("rfc1123", locale!("en")), "Thu, 20 Dec 2012 19:00:00 GMT");
    assert_eq!(render("timestamp", locale!("en")), "1356030000000");
}

#[test]
fn test_builtin_aliases() {
    assert_eq!(render("O", locale!("en")), render("o", locale!("en")));
    assert_eq!(render("R", locale!("de")), "Thu, 20 Dec 2012 19:00:00 GMT");
}

#[test]
fn test_builtins_ignore_locale_and_offset() {
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let date = sample().with_timezone(&offset);
    let iso = render_date(DateFormat::Iso8601, &date, locale!("ja"));
    assert_eq!(iso, "2012-12-20T19:00:00.000Z");
}

// =============================================================================
// Other languages
// =============================================================================

#[test]
fn test_british_english() {
    assert_eq!(render("short", locale!("en-GB")), "20/12/2012");
    assert_eq!(render("timeOnly", locale!("en-GB")), "19:00");
}

#[test]
fn test_german() {
    assert_eq!(render("short", locale!("de")), "20.12.2012");
    assert_eq!(render("long", locale!("de")), "Donnerstag, 20. Dezember 2012");
    assert_eq!(render("timeOnly", locale!("de")), "19:00");
}

#[test]
fn test_french() {
    assert_eq!(render("long", locale!("fr")), "jeudi 20 décembre 2012");
    assert_eq!(render("monthYear", locale!("fr")), "décembre 2012");
}

#[test]
fn test_spanish() {
    assert_eq!(render("monthDay", locale!("es")), "20 de diciembre");
}

#[test]
fn test_non_latin_month_names() {
    let cases = [
        (locale!("ar"), "ديسمبر"),
        (locale!("hi"), "दिसंबर"),
        (locale!("he"), "דצמבר"),
        (locale!("cs"), "prosince"),
    ];
    for (locale, month) in cases {
        let text = render("long", locale.clone());
        assert!(text.contains(month), "{locale}: {text}");
        assert!(!text.contains("December"), "{locale}: {text}");
        assert!(!text.contains("Thursday"), "{locale}: {text}");
    }
}

#[test]
fn test_czech_numeric_date_is_day_first() {
    let text = render("short", locale!("cs"));
    assert!(text.starts_with("20."), "{text}");
    assert_ne!(text, "12/20/2012");
}

#[test]
fn test_era_is_localized() {
    let fields = DateFields {
        era: true,
        ..DateStyle::Short.fields()
    };
    let english = render_date(DateFormat::Fields(fields), &sample(), locale!("en"));
    let german = render_date(DateFormat::Fields(fields), &sample(), locale!("de"));
    assert!(english.ends_with("AD"), "{english}");
    assert!(!german.contains("AD"), "{german}");
}

// =============================================================================
// Custom field sets
// =============================================================================

#[test]
fn test_custom_fields() {
    let fields = DateFields {
        weekday: Some(TextWidth::Short),
        month: Some(MonthStyle::Text(TextWidth::Short)),
        day: true,
        ..DateFields::default()
    };
    let text = render_date(DateFormat::Fields(fields), &sample(), locale!("en"));
    assert_eq!(text, "Thu, Dec 20");
}

#[test]
fn test_time_zone_name() {
    let fields = DateFields {
        time_zone_name: true,
        ..DateStyle::TimeOnly.fields()
    };
    let text = render_date(DateFormat::Fields(fields), &sample(), locale!("en"));
    assert_eq!(text, "7:00 PM UTC");
}

#[test]
fn test_formatters_cached_per_locale_and_style() {
    let context = FormatContext::default();
    let long = DateFormat::compile(Some("long")).unwrap();
    for locale in [locale!("en"), locale!("en"), locale!("de")] {
        long.format(&sample(), &locale, &context).unwrap();
    }
    DateFormat::Iso8601.format(&sample(), &locale!("en"), &context).unwrap();
    assert_eq!(context.dates().len(), 2);
    context.clear_caches();
    assert!(context.dates().is_empty());
}

// =============================================================================
// Compile errors
// =============================================================================

#[test]
fn test_unrecognized_date_format() {
    assert_eq!(
        DateFormat::compile(Some("yesterday")),
        Err(CompileError::UnrecognizedDateFormat {
            format: "yesterday".to_string()
        })
    );
    assert!(DateFormat::compile(Some("Short")).is_err());
    assert!(DateFormat::compile(Some("x")).is_err());
}

#[test]
fn test_time_formats() {
    assert_eq!(TimeFormat::compile(None), Ok(TimeFormat::Short));
    assert_eq!(TimeFormat::compile(Some("long")), Ok(TimeFormat::Long));
    let err = TimeFormat::compile(Some("medium")).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @r#"date format "medium" is not recognized"#);
}
