use crate::Result;
use anyhow::Context;
use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
};
use time::{
    Date, Duration, OffsetDateTime, PrimitiveDateTime, Time,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

/// Temporal representations a validator can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalKind {
    Time,
    Date,
    Duration,
    DateTime,
    DateTimeOffset,
}

/// A successfully parsed temporal value, tagged with its representation.
/// Ordering is defined within one representation only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Temporal {
    Time(Time),
    Date(Date),
    Duration(Duration),
    DateTime(PrimitiveDateTime),
    DateTimeOffset(OffsetDateTime),
}

impl Temporal {
    pub const fn kind(&self) -> TemporalKind {
        match self {
            Self::Time(..) => TemporalKind::Time,
            Self::Date(..) => TemporalKind::Date,
            Self::Duration(..) => TemporalKind::Duration,
            Self::DateTime(..) => TemporalKind::DateTime,
            Self::DateTimeOffset(..) => TemporalKind::DateTimeOffset,
        }
    }

    /// Renders the value with the given output pattern. Durations have no
    /// `time` formatter and always use the fixed `hh:mm:ss.fffffff` shape.
    pub fn format(&self, pattern: &[BorrowedFormatItem<'_>]) -> Result<String> {
        match self {
            Self::Time(v) => v.format(pattern),
            Self::Date(v) => v.format(pattern),
            Self::DateTime(v) => v.format(pattern),
            Self::DateTimeOffset(v) => v.format(pattern),
            Self::Duration(v) => return Ok(format_duration(v)),
        }
        .with_context(|| format!("Cannot format {self}"))
    }
}

impl PartialOrd for Temporal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Time(l), Self::Time(r)) => Some(l.cmp(r)),
            (Self::Date(l), Self::Date(r)) => Some(l.cmp(r)),
            (Self::Duration(l), Self::Duration(r)) => Some(l.cmp(r)),
            (Self::DateTime(l), Self::DateTime(r)) => Some(l.cmp(r)),
            (Self::DateTimeOffset(l), Self::DateTimeOffset(r)) => Some(l.cmp(r)),
            _ => None,
        }
    }
}

impl Display for Temporal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Time(v) => v.fmt(f),
            Self::Date(v) => v.fmt(f),
            Self::Duration(v) => f.write_str(&format_duration(v)),
            Self::DateTime(v) => v.fmt(f),
            Self::DateTimeOffset(v) => v.fmt(f),
        }
    }
}

/// Parses `value` into the requested temporal representation, trying the
/// invariant calendar formats in order. No locale specific month names or
/// separators are accepted.
pub fn parse_temporal(kind: TemporalKind, value: &str) -> Option<Temporal> {
    match kind {
        TemporalKind::Time => parse_time(value).map(Temporal::Time),
        TemporalKind::Date => Date::parse(value, format_description!("[year]-[month]-[day]"))
            .ok()
            .map(Temporal::Date),
        TemporalKind::Duration => parse_duration(value).map(Temporal::Duration),
        TemporalKind::DateTime => parse_date_time(value).map(Temporal::DateTime),
        TemporalKind::DateTimeOffset => parse_date_time_offset(value).map(Temporal::DateTimeOffset),
    }
}

fn parse_time(value: &str) -> Option<Time> {
    Time::parse(
        value,
        format_description!("[hour]:[minute]:[second].[subsecond]"),
    )
    .or(Time::parse(
        value,
        format_description!("[hour]:[minute]:[second]"),
    ))
    .or(Time::parse(value, format_description!("[hour]:[minute]")))
    .ok()
}

fn parse_date_time(value: &str) -> Option<PrimitiveDateTime> {
    PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    )
    .or(PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    ))
    .or(PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    ))
    .or(PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
    ))
    .or(PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    ))
    .or(PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day] [hour]:[minute]"),
    ))
    .or(Date::parse(value, format_description!("[year]-[month]-[day]")).map(Date::midnight))
    .ok()
}

fn parse_date_time_offset(value: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(value, &Rfc3339)
        .or(OffsetDateTime::parse(
            value,
            format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond][offset_hour sign:mandatory]:[offset_minute]"
            ),
        ))
        .or(OffsetDateTime::parse(
            value,
            format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
            ),
        ))
        .or(OffsetDateTime::parse(
            value,
            format_description!(
                "[year]-[month]-[day]T[hour]:[minute][offset_hour sign:mandatory]:[offset_minute]"
            ),
        ))
        .or(OffsetDateTime::parse(
            value,
            format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond][offset_hour sign:mandatory]:[offset_minute]"
            ),
        ))
        .or(OffsetDateTime::parse(
            value,
            format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
            ),
        ))
        .or(OffsetDateTime::parse(
            value,
            format_description!(
                "[year]-[month]-[day] [hour]:[minute][offset_hour sign:mandatory]:[offset_minute]"
            ),
        ))
        .ok()
}

/// Durations come as `[-][d.]hh:mm[:ss[.fffffff]]` or a bare day count.
/// Hours are capped at 23, minutes and seconds at 59, fractions at 7 digits.
fn parse_duration(value: &str) -> Option<Duration> {
    let (negative, rest) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    let mut parts = rest.split(':');
    let first = parts.next()?;

    // A bare number is a day count, the TimeSpan style shorthand.
    if rest.find(':').is_none() {
        let days = first.parse::<i64>().ok()?;
        let duration = Duration::seconds(days.checked_mul(86_400)?);
        return Some(if negative { -duration } else { duration });
    }

    let (days, hours) = match first.split_once('.') {
        Some((days, hours)) => (days.parse::<i64>().ok()?, hours),
        None => (0, first),
    };
    let hours = parse_component(hours, 23)?;
    let minutes = parse_component(parts.next()?, 59)?;
    let (seconds, nanos) = match parts.next() {
        Some(part) => match part.split_once('.') {
            Some((seconds, fraction)) => {
                if fraction.is_empty()
                    || fraction.len() > 7
                    || !fraction.bytes().all(|b| b.is_ascii_digit())
                {
                    return None;
                }
                // 7 fractional digits are 100ns units; scale up to nanoseconds.
                let nanos = format!("{fraction:0<9}").parse::<i64>().ok()?;
                (parse_component(seconds, 59)?, nanos)
            }
            None => (parse_component(part, 59)?, 0),
        },
        None => (0, 0),
    };
    if parts.next().is_some() {
        return None;
    }
    // The day count comes straight from the input; everything below it is
    // already capped, so only the day multiplication can overflow.
    let total = days
        .checked_mul(86_400)?
        .checked_add(hours * 3_600 + minutes * 60 + seconds)?;
    let duration = Duration::seconds(total) + Duration::nanoseconds(nanos);
    Some(if negative { -duration } else { duration })
}

fn parse_component(part: &str, max: i64) -> Option<i64> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let parsed = part.parse::<i64>().ok()?;
    (parsed <= max).then_some(parsed)
}

/// Fixed `hh:mm:ss.fffffff` rendering (hours absorb whole days).
pub fn format_duration(duration: &Duration) -> String {
    let sign = if duration.is_negative() { "-" } else { "" };
    let nanos = duration.whole_nanoseconds().unsigned_abs();
    let (hours, rest) = (nanos / 3_600_000_000_000, nanos % 3_600_000_000_000);
    let (minutes, rest) = (rest / 60_000_000_000, rest % 60_000_000_000);
    let (seconds, rest) = (rest / 1_000_000_000, rest % 1_000_000_000);
    let ticks = rest / 100;
    format!("{sign}{hours:02}:{minutes:02}:{seconds:02}.{ticks:07}")
}
