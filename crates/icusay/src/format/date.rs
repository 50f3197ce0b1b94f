//! Date and time formatting.
//!
//! Named styles are field tables: each style says which parts of the instant
//! are shown and how wide. The visible fields select an ICU4X field set, so
//! field order, separators, month and weekday names, numbering system and
//! hour cycle all come from CLDR data for the locale.

use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::{DateTime, Datelike, FixedOffset, SecondsFormat, Timelike, Utc};
use icu_calendar::{Date, Iso};
use icu_datetime::DateTimeFormatter;
use icu_datetime::fieldsets;
use icu_datetime::fieldsets::enums::{
    CalendarPeriodFieldSet, CompositeDateTimeFieldSet, DateAndTimeFieldSet, DateFieldSet,
    TimeFieldSet,
};
use icu_datetime::input::{DateTime as IcuDateTime, Time};
use icu_datetime::options::{Length, YearStyle};
use icu_locale_core::Locale;

use crate::format::context::FormatContext;
use crate::format::locale::language;
use crate::format::{CompileError, RenderError};

/// Width of a textual field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextWidth {
    /// "Thu", "Dec".
    Short,
    /// "Thursday", "December".
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthStyle {
    /// "12".
    Numeric,
    Text(TextWidth),
}

/// Which fields of an instant are shown. Everything is hidden by default.
///
/// Widths are requests: the widest text field picks the CLDR length used for
/// the whole date, and an hour always comes with its minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateFields {
    pub weekday: Option<TextWidth>,
    pub era: bool,
    pub year: bool,
    pub month: Option<MonthStyle>,
    pub day: bool,
    pub hour: bool,
    pub minute: bool,
    pub second: bool,
    pub time_zone_name: bool,
}

/// Time precision of a field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeDetail {
    Minutes,
    Seconds,
}

/// Attach the requested time precision to a day-based field set.
macro_rules! with_time {
    ($set:expr, $date:ident, $date_time:ident, $time:expr) => {{
        let set = $set;
        match $time {
            None => CompositeDateTimeFieldSet::Date(DateFieldSet::$date(set)),
            Some(TimeDetail::Minutes) => {
                CompositeDateTimeFieldSet::DateTime(DateAndTimeFieldSet::$date_time(set.with_time_hm()))
            }
            Some(TimeDetail::Seconds) => {
                CompositeDateTimeFieldSet::DateTime(DateAndTimeFieldSet::$date_time(set.with_time_hms()))
            }
        }
    }};
}

impl DateFields {
    const NUMERIC_DATE: DateFields = DateFields {
        weekday: None,
        era: false,
        year: true,
        month: Some(MonthStyle::Numeric),
        day: true,
        hour: false,
        minute: false,
        second: false,
        time_zone_name: false,
    };

    const LONG_DATE: DateFields = DateFields {
        weekday: Some(TextWidth::Long),
        month: Some(MonthStyle::Text(TextWidth::Long)),
        ..Self::NUMERIC_DATE
    };

    const NONE: DateFields = DateFields {
        year: false,
        month: None,
        day: false,
        ..Self::NUMERIC_DATE
    };

    const fn with_time(self, exact: bool) -> Self {
        Self {
            hour: true,
            minute: true,
            second: exact,
            ..self
        }
    }

    /// Render the visible fields of `date` in its own offset.
    pub fn render(
        &self,
        date: &DateTime<FixedOffset>,
        locale: &Locale,
        context: &FormatContext,
    ) -> Result<String, RenderError> {
        let mut text = context.dates().format(locale, self, date)?;
        if self.time_zone_name {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&zone_name(date.offset()));
        }
        Ok(text)
    }

    fn length(&self) -> Length {
        let month = match self.month {
            Some(MonthStyle::Text(width)) => Some(width),
            Some(MonthStyle::Numeric) | None => None,
        };
        let widths = [self.weekday, month];
        if widths.contains(&Some(TextWidth::Long)) {
            Length::Long
        } else if widths.contains(&Some(TextWidth::Short)) {
            Length::Medium
        } else {
            Length::Short
        }
    }

    fn year_style(&self) -> YearStyle {
        if self.era {
            YearStyle::WithEra
        } else {
            YearStyle::Full
        }
    }

    fn time_detail(&self) -> Option<TimeDetail> {
        if self.second {
            Some(TimeDetail::Seconds)
        } else if self.hour || self.minute {
            Some(TimeDetail::Minutes)
        } else {
            None
        }
    }

    /// Field sets rendered one after another for these fields.
    ///
    /// With `attach_time` a day-based date and its time share one field set
    /// and CLDR's joining pattern. Month or year periods never take a time, so
    /// their time is always a separate part.
    fn field_sets(&self, attach_time: bool) -> Vec<CompositeDateTimeFieldSet> {
        let time = self.time_detail();
        if self.day || self.weekday.is_some() {
            let attached = time.filter(|_| attach_time);
            let date = self.day_set(attached);
            let separate = if attached.is_some() { None } else { time };
            [Some(date), separate.map(time_set)].into_iter().flatten().collect()
        } else {
            [self.period_set(), time.map(time_set)]
                .into_iter()
                .flatten()
                .collect()
        }
    }

    fn day_set(&self, time: Option<TimeDetail>) -> CompositeDateTimeFieldSet {
        let length = self.length();
        let years = self.year_style();
        match (self.year, self.month.is_some(), self.day, self.weekday.is_some()) {
            (true, _, _, false) => with_time!(
                fieldsets::YMD::for_length(length).with_year_style(years),
                YMD,
                YMDT,
                time
            ),
            (true, _, _, true) => with_time!(
                fieldsets::YMDE::for_length(length).with_year_style(years),
                YMDE,
                YMDET,
                time
            ),
            (false, true, _, false) => with_time!(fieldsets::MD::for_length(length), MD, MDT, time),
            (false, true, _, true) => with_time!(fieldsets::MDE::for_length(length), MDE, MDET, time),
            (false, false, true, false) => with_time!(fieldsets::D::for_length(length), D, DT, time),
            (false, false, true, true) => with_time!(fieldsets::DE::for_length(length), DE, DET, time),
            (false, false, false, _) => with_time!(fieldsets::E::for_length(length), E, ET, time),
        }
    }

    fn period_set(&self) -> Option<CompositeDateTimeFieldSet> {
        let length = self.length();
        let years = self.year_style();
        let period = match (self.year, self.month.is_some()) {
            (true, true) => {
                CalendarPeriodFieldSet::YM(fieldsets::YM::for_length(length).with_year_style(years))
            }
            (false, true) => CalendarPeriodFieldSet::M(fieldsets::M::for_length(length)),
            (true, false) => {
                CalendarPeriodFieldSet::Y(fieldsets::Y::for_length(length).with_year_style(years))
            }
            (false, false) => return None,
        };
        Some(CompositeDateTimeFieldSet::CalendarPeriod(period))
    }
}

fn time_set(detail: TimeDetail) -> CompositeDateTimeFieldSet {
    let set = match detail {
        TimeDetail::Minutes => fieldsets::T::hm(),
        TimeDetail::Seconds => fieldsets::T::hms(),
    };
    CompositeDateTimeFieldSet::Time(TimeFieldSet::T(set))
}

/// "UTC" for a zero offset, otherwise "GMT+05:30".
fn zone_name(offset: &FixedOffset) -> String {
    if offset.local_minus_utc() == 0 {
        "UTC".to_string()
    } else {
        format!("GMT{offset}")
    }
}

/// The wall-clock reading of `date` in its own offset, on the ISO calendar.
fn wall_clock(date: &DateTime<FixedOffset>) -> Result<IcuDateTime<Iso>, RenderError> {
    let out_of_range = || RenderError::MismatchedValue {
        expected: "date in the supported range",
        found: date.to_rfc3339_opts(SecondsFormat::Secs, true),
    };
    let small = |n: u32| u8::try_from(n).map_err(|_| out_of_range());
    let local = date.naive_local();

    let day = Date::try_new_iso(local.year(), small(local.month())?, small(local.day())?)
        .map_err(|_| out_of_range())?;
    let time = Time::try_new(
        small(local.hour())?,
        small(local.minute())?,
        small(local.second())?,
        0,
    )
    .map_err(|_| out_of_range())?;
    Ok(IcuDateTime { date: day, time })
}

/// Per-locale cache of ICU4X date formatters, one list per field table.
#[derive(Default)]
pub struct DateFormatters {
    formatters: RefCell<HashMap<(String, DateFields), Vec<DateTimeFormatter<CompositeDateTimeFieldSet>>>>,
}

impl DateFormatters {
    /// Render the visible `fields` of `date` for `locale`.
    ///
    /// English joins a date and its time with ", ", as in
    /// "Thursday, December 20, 2012, 7:00 PM". Other languages use their CLDR
    /// joining pattern.
    pub fn format(
        &self,
        locale: &Locale,
        fields: &DateFields,
        date: &DateTime<FixedOffset>,
    ) -> Result<String, RenderError> {
        let input = wall_clock(date)?;

        let mut formatters = self.formatters.borrow_mut();
        let parts = match formatters.entry((locale.to_string(), *fields)) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let attach_time = language(locale) != "en";
                let parts = fields
                    .field_sets(attach_time)
                    .into_iter()
                    .map(|set| {
                        DateTimeFormatter::try_new(locale.clone().into(), set).map_err(|e| {
                            RenderError::LocaleData {
                                what: "date",
                                locale: locale.to_string(),
                                message: e.to_string(),
                            }
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                entry.insert(parts)
            }
        };

        Ok(parts
            .iter()
            .map(|formatter| formatter.format(&input).to_string())
            .collect::<Vec<_>>()
            .join(", "))
    }

    /// Number of cached field tables across all locales.
    pub fn len(&self) -> usize {
        self.formatters.borrow().len()
    }

    /// Returns true if no formatter is cached.
    pub fn is_empty(&self) -> bool {
        self.formatters.borrow().is_empty()
    }

    /// Drop every cached formatter.
    pub fn clear(&self) {
        self.formatters.borrow_mut().clear();
    }
}

/// Named date styles and their single-letter aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `short`, `d`: "12/20/2012".
    Short,
    /// `long`, `D`: "Thursday, December 20, 2012".
    Long,
    /// `shortWithTime`, `g`: "12/20/2012, 7:00 PM".
    ShortWithTime,
    /// `shortWithExactTime`, `G`: "12/20/2012, 7:00:00 PM".
    ShortWithExactTime,
    /// `longWithTime`, `f`: "Thursday, December 20, 2012, 7:00 PM".
    LongWithTime,
    /// `longWithExactTime`, `F`: "Thursday, December 20, 2012, 7:00:00 PM".
    LongWithExactTime,
    /// `monthDay`, `M`: "December 20".
    MonthDay,
    /// `shortMonthDay`, `m`: "Dec 20".
    ShortMonthDay,
    /// `monthYear`, `Y`: "December 2012".
    MonthYear,
    /// `shortMonthYear`, `y`: "Dec 2012".
    ShortMonthYear,
    /// `timeOnly`, `t`: "7:00 PM".
    TimeOnly,
    /// `exactTime`, `T`: "7:00:00 PM".
    ExactTime,
}

impl DateStyle {
    pub const ALL: &'static [DateStyle] = &[
        DateStyle::Short,
        DateStyle::Long,
        DateStyle::ShortWithTime,
        DateStyle::ShortWithExactTime,
        DateStyle::LongWithTime,
        DateStyle::LongWithExactTime,
        DateStyle::MonthDay,
        DateStyle::ShortMonthDay,
        DateStyle::MonthYear,
        DateStyle::ShortMonthYear,
        DateStyle::TimeOnly,
        DateStyle::ExactTime,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DateStyle::Short => "short",
            DateStyle::Long => "long",
            DateStyle::ShortWithTime => "shortWithTime",
            DateStyle::ShortWithExactTime => "shortWithExactTime",
            DateStyle::LongWithTime => "longWithTime",
            DateStyle::LongWithExactTime => "longWithExactTime",
            DateStyle::MonthDay => "monthDay",
            DateStyle::ShortMonthDay => "shortMonthDay",
            DateStyle::MonthYear => "monthYear",
            DateStyle::ShortMonthYear => "shortMonthYear",
            DateStyle::TimeOnly => "timeOnly",
            DateStyle::ExactTime => "exactTime",
        }
    }

    pub fn alias(self) -> char {
        match self {
            DateStyle::Short => 'd',
            DateStyle::Long => 'D',
            DateStyle::ShortWithTime => 'g',
            DateStyle::ShortWithExactTime => 'G',
            DateStyle::LongWithTime => 'f',
            DateStyle::LongWithExactTime => 'F',
            DateStyle::MonthDay => 'M',
            DateStyle::ShortMonthDay => 'm',
            DateStyle::MonthYear => 'Y',
            DateStyle::ShortMonthYear => 'y',
            DateStyle::TimeOnly => 't',
            DateStyle::ExactTime => 'T',
        }
    }

    /// Look a style up by name or alias. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::ALL.iter().copied().find(|style| style.alias() == c),
            _ => Self::ALL.iter().copied().find(|style| style.name() == name),
        }
    }

    pub fn fields(self) -> DateFields {
        let short_text = Some(MonthStyle::Text(TextWidth::Short));
        let long_text = Some(MonthStyle::Text(TextWidth::Long));
        match self {
            DateStyle::Short => DateFields::NUMERIC_DATE,
            DateStyle::Long => DateFields::LONG_DATE,
            DateStyle::ShortWithTime => DateFields::NUMERIC_DATE.with_time(false),
            DateStyle::ShortWithExactTime => DateFields::NUMERIC_DATE.with_time(true),
            DateStyle::LongWithTime => DateFields::LONG_DATE.with_time(false),
            DateStyle::LongWithExactTime => DateFields::LONG_DATE.with_time(true),
            DateStyle::MonthDay => DateFields {
                month: long_text,
                day: true,
                ..DateFields::NONE
            },
            DateStyle::ShortMonthDay => DateFields {
                month: short_text,
                day: true,
                ..DateFields::NONE
            },
            DateStyle::MonthYear => DateFields {
                month: long_text,
                year: true,
                ..DateFields::NONE
            },
            DateStyle::ShortMonthYear => DateFields {
                month: short_text,
                year: true,
                ..DateFields::NONE
            },
            DateStyle::TimeOnly => DateFields::NONE.with_time(false),
            DateStyle::ExactTime => DateFields::NONE.with_time(true),
        }
    }
}

/// A compiled `{d, date[, format]}` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// Locale-aware rendering of selected fields.
    Fields(DateFields),
    /// `iso8601`: "2012-12-20T19:00:00.000Z".
    Iso8601,
    /// `rfc1123`: "Thu, 20 Dec 2012 19:00:00 GMT".
    Rfc1123,
    /// `timestamp`: milliseconds since the Unix epoch.
    Timestamp,
}

impl DateFormat {
    /// Resolve a date format argument. An absent format means `short`.
    ///
    /// # Examples
    ///
    /// ```
    /// use icusay::format::{DateFormat, DateStyle};
    ///
    /// assert_eq!(DateFormat::compile(None), Ok(DateFormat::Fields(DateStyle::Short.fields())));
    /// assert_eq!(DateFormat::compile(Some("D")), DateFormat::compile(Some("long")));
    /// assert_eq!(DateFormat::compile(Some("o")), Ok(DateFormat::Iso8601));
    /// assert!(DateFormat::compile(Some("fortnightly")).is_err());
    /// ```
    pub fn compile(format: Option<&str>) -> Result<Self, CompileError> {
        let Some(format) = format.filter(|f| !f.is_empty()) else {
            return Ok(DateFormat::Fields(DateStyle::Short.fields()));
        };
        match format {
            "iso8601" | "O" | "o" => Ok(DateFormat::Iso8601),
            "rfc1123" | "R" | "r" => Ok(DateFormat::Rfc1123),
            "timestamp" => Ok(DateFormat::Timestamp),
            _ => DateStyle::from_name(format)
                .map(|style| DateFormat::Fields(style.fields()))
                .ok_or_else(|| CompileError::UnrecognizedDateFormat {
                    format: format.to_string(),
                }),
        }
    }

    pub fn format(
        &self,
        date: &DateTime<FixedOffset>,
        locale: &Locale,
        context: &FormatContext,
    ) -> Result<String, RenderError> {
        match self {
            DateFormat::Fields(fields) => fields.render(date, locale, context),
            DateFormat::Iso8601 => Ok(date
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Millis, true)),
            DateFormat::Rfc1123 => Ok(date
                .with_timezone(&Utc)
                .format("%a, %d %b %Y %H:%M:%S GMT")
                .to_string()),
            DateFormat::Timestamp => Ok(date.timestamp_millis().to_string()),
        }
    }
}

/// A compiled `{d, time[, format]}` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// `short`: "7:00 PM".
    Short,
    /// `long`: "7:00:00 PM".
    Long,
}

impl TimeFormat {
    /// Resolve a time format argument. An absent format means `short`.
    pub fn compile(format: Option<&str>) -> Result<Self, CompileError> {
        match format.unwrap_or_default() {
            "" | "short" => Ok(TimeFormat::Short),
            "long" => Ok(TimeFormat::Long),
            other => Err(CompileError::UnrecognizedDateFormat {
                format: other.to_string(),
            }),
        }
    }

    pub fn fields(self) -> DateFields {
        DateFields::NONE.with_time(self == TimeFormat::Long)
    }

    pub fn format(
        &self,
        date: &DateTime<FixedOffset>,
        locale: &Locale,
        context: &FormatContext,
    ) -> Result<String, RenderError> {
        self.fields().render(date, locale, context)
    }
}
