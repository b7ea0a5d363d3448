use sqlvalid::{
    BooleanKind, Number, NumericKind, Temporal, TemporalKind, format_duration, parse_boolean,
    parse_number, parse_temporal,
};
use time::{Duration, macros::format_description};

#[test]
fn booleans() {
    assert_eq!(parse_boolean(BooleanKind::Plain, "true"), Some(true));
    assert_eq!(parse_boolean(BooleanKind::Plain, "FALSE"), Some(false));
    assert_eq!(parse_boolean(BooleanKind::Plain, "1"), None);
    assert_eq!(parse_boolean(BooleanKind::Plain, "yes"), None);
    assert_eq!(parse_boolean(BooleanKind::Extended, "1"), Some(true));
    assert_eq!(parse_boolean(BooleanKind::Extended, "0"), Some(false));
    assert_eq!(parse_boolean(BooleanKind::Extended, "True"), Some(true));
    assert_eq!(parse_boolean(BooleanKind::Extended, "2"), None);
}

#[test]
fn integer_widths() {
    assert_eq!(parse_number(NumericKind::UInt8, "255"), Some(Number::UInt8(255)));
    assert_eq!(parse_number(NumericKind::UInt8, "256"), None);
    assert_eq!(parse_number(NumericKind::UInt8, "-1"), None);
    assert_eq!(parse_number(NumericKind::Int16, "-32768"), Some(Number::Int16(-32768)));
    assert_eq!(parse_number(NumericKind::Int16, "32768"), None);
    assert_eq!(parse_number(NumericKind::Int32, "2147483647"), Some(Number::Int32(2147483647)));
    assert_eq!(
        parse_number(NumericKind::BigInt, "170141183460469231731687303715884105727"),
        Some(Number::BigInt(i128::MAX)),
    );
    // The wide representation is i128-bounded, not arbitrary precision.
    assert_eq!(
        parse_number(NumericKind::BigInt, "170141183460469231731687303715884105728"),
        None,
    );
    assert_eq!(parse_number(NumericKind::Int64, "12.5"), None);
}

#[test]
fn decimal_separator_normalization() {
    assert_eq!(parse_number(NumericKind::Float64, "1,5"), Some(Number::Float64(1.5)));
    assert_eq!(parse_number(NumericKind::Float32, "-2,25"), Some(Number::Float32(-2.25)));
    let Some(Number::Decimal(parsed)) = parse_number(NumericKind::Decimal, "10,01") else {
        panic!("expected a decimal");
    };
    assert_eq!(parsed.to_string(), "10.01");
}

#[test]
fn big_decimal_stays_textual() {
    let literal = "99999999999999999999999999999999999999.5";
    assert_eq!(
        parse_number(NumericKind::BigDecimal, literal),
        Some(Number::BigDecimal(literal.into())),
    );
    // The sign prefix is normalized away, the rest is kept verbatim.
    assert_eq!(
        parse_number(NumericKind::BigDecimal, "+12.5"),
        Some(Number::BigDecimal("12.5".into())),
    );
    assert_eq!(parse_number(NumericKind::BigDecimal, "1e10"), None);
    assert_eq!(parse_number(NumericKind::BigDecimal, "abc"), None);
}

#[test]
fn number_ordering_is_per_representation() {
    assert!(Number::Int32(1) < Number::Int32(2));
    assert!(Number::BigDecimal("2".into()) > Number::BigDecimal("1.5".into()));
    assert_eq!(Number::Int32(1).partial_cmp(&Number::Int64(1)), None);
    assert_eq!(
        Number::Float64(f64::NAN).partial_cmp(&Number::Float64(0.0)),
        None,
    );
}

#[test]
fn temporals() {
    let time = parse_temporal(TemporalKind::Time, "23:59:59.9999999");
    assert!(matches!(time, Some(Temporal::Time(..))));
    assert!(parse_temporal(TemporalKind::Time, "15:45").is_some());
    assert!(parse_temporal(TemporalKind::Time, "25:00:00").is_none());

    assert!(parse_temporal(TemporalKind::Date, "2025-01-17").is_some());
    assert!(parse_temporal(TemporalKind::Date, "2025-13-01").is_none());

    // A bare date parses as midnight of that day.
    let midnight = parse_temporal(TemporalKind::DateTime, "2025-01-17");
    let explicit = parse_temporal(TemporalKind::DateTime, "2025-01-17 00:00:00");
    assert_eq!(midnight, explicit);
    assert!(parse_temporal(TemporalKind::DateTime, "2025-01-17T15:45:00.123").is_some());

    assert!(parse_temporal(TemporalKind::DateTimeOffset, "2025-01-17T15:45:00Z").is_some());
    assert!(
        parse_temporal(TemporalKind::DateTimeOffset, "2025-01-17 15:45:00.9999999+03:00")
            .is_some()
    );
    assert!(parse_temporal(TemporalKind::DateTimeOffset, "2025-01-17 15:45:00").is_none());
}

#[test]
fn durations() {
    assert_eq!(
        parse_temporal(TemporalKind::Duration, "02:03"),
        Some(Temporal::Duration(Duration::hours(2) + Duration::minutes(3))),
    );
    assert_eq!(
        parse_temporal(TemporalKind::Duration, "1.02:03:04.5"),
        Some(Temporal::Duration(
            Duration::days(1)
                + Duration::hours(2)
                + Duration::minutes(3)
                + Duration::seconds(4)
                + Duration::milliseconds(500),
        )),
    );
    assert_eq!(
        parse_temporal(TemporalKind::Duration, "2"),
        Some(Temporal::Duration(Duration::days(2))),
    );
    assert_eq!(
        parse_temporal(TemporalKind::Duration, "-01:30"),
        Some(Temporal::Duration(-Duration::minutes(90))),
    );
    // Hours cap at 23; more than a day needs the day prefix.
    assert_eq!(parse_temporal(TemporalKind::Duration, "25:00"), None);
    assert_eq!(parse_temporal(TemporalKind::Duration, "01:60"), None);
    assert_eq!(parse_temporal(TemporalKind::Duration, "01:00:00.12345678"), None);
}

#[test]
fn duration_day_count_overflow_is_a_parse_failure() {
    // Day counts past the representable range must report as unparseable,
    // never abort, in both the bare and the d.hh:mm forms.
    assert_eq!(parse_temporal(TemporalKind::Duration, "999999999999999999"), None);
    assert_eq!(parse_temporal(TemporalKind::Duration, "-999999999999999999"), None);
    assert_eq!(
        parse_temporal(TemporalKind::Duration, "999999999999999999.01:00"),
        None,
    );
    // Just inside the representable range still parses.
    assert!(parse_temporal(TemporalKind::Duration, "106751991167300").is_some());
}

#[test]
fn duration_rendering() {
    assert_eq!(format_duration(&Duration::ZERO), "00:00:00.0000000");
    assert_eq!(
        format_duration(&(Duration::hours(26) + Duration::milliseconds(500))),
        "26:00:00.5000000",
    );
    assert_eq!(format_duration(&-Duration::minutes(90)), "-01:30:00.0000000");
}

#[test]
fn temporal_formatting() {
    let pattern = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let Some(parsed) = parse_temporal(TemporalKind::DateTime, "2025-01-17 15:45") else {
        panic!("expected a datetime");
    };
    assert_eq!(parsed.format(pattern).unwrap(), "2025-01-17 15:45:00");

    let Some(duration) = parse_temporal(TemporalKind::Duration, "02:03") else {
        panic!("expected a duration");
    };
    // Durations ignore the pattern and use the fixed shape.
    assert_eq!(duration.format(pattern).unwrap(), "02:03:00.0000000");
}
