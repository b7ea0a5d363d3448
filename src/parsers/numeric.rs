use crate::compare;
use rust_decimal::Decimal;
use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Numeric representations a validator can be configured with. Selected
/// explicitly by the caller, never inferred from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    UInt8,
    Int16,
    Int32,
    Int64,
    /// Wide integer backing every integer SQL type; `i128` leaves ~19 digits
    /// of headroom above the BigInt bounds.
    BigInt,
    Float32,
    Float64,
    /// Fixed point decimal within the `rust_decimal` range (~±7.9×10^28).
    Decimal,
    /// Extended fixed point decimal kept as a digit string so the ±(10^38 − 1)
    /// range can be enforced through [`compare`](crate::compare).
    BigDecimal,
}

/// A successfully parsed number, tagged with its representation. Ordering is
/// defined within one representation only; comparing across kinds (or against
/// NaN) yields `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    UInt8(u8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    BigInt(i128),
    Float32(f32),
    Float64(f64),
    Decimal(Decimal),
    BigDecimal(String),
}

impl Number {
    pub const fn kind(&self) -> NumericKind {
        match self {
            Self::UInt8(..) => NumericKind::UInt8,
            Self::Int16(..) => NumericKind::Int16,
            Self::Int32(..) => NumericKind::Int32,
            Self::Int64(..) => NumericKind::Int64,
            Self::BigInt(..) => NumericKind::BigInt,
            Self::Float32(..) => NumericKind::Float32,
            Self::Float64(..) => NumericKind::Float64,
            Self::Decimal(..) => NumericKind::Decimal,
            Self::BigDecimal(..) => NumericKind::BigDecimal,
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::UInt8(l), Self::UInt8(r)) => Some(l.cmp(r)),
            (Self::Int16(l), Self::Int16(r)) => Some(l.cmp(r)),
            (Self::Int32(l), Self::Int32(r)) => Some(l.cmp(r)),
            (Self::Int64(l), Self::Int64(r)) => Some(l.cmp(r)),
            (Self::BigInt(l), Self::BigInt(r)) => Some(l.cmp(r)),
            (Self::Float32(l), Self::Float32(r)) => l.partial_cmp(r),
            (Self::Float64(l), Self::Float64(r)) => l.partial_cmp(r),
            (Self::Decimal(l), Self::Decimal(r)) => l.partial_cmp(r),
            (Self::BigDecimal(l), Self::BigDecimal(r)) => compare::try_compare(l, r),
            _ => None,
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UInt8(v) => v.fmt(f),
            Self::Int16(v) => v.fmt(f),
            Self::Int32(v) => v.fmt(f),
            Self::Int64(v) => v.fmt(f),
            Self::BigInt(v) => v.fmt(f),
            Self::Float32(v) => f.write_str(ryu::Buffer::new().format(*v)),
            Self::Float64(v) => f.write_str(ryu::Buffer::new().format(*v)),
            Self::Decimal(v) => v.fmt(f),
            Self::BigDecimal(v) => f.write_str(v),
        }
    }
}

/// Parses `value` into the requested numeric representation using locale
/// invariant rules; a comma decimal separator is normalized to a dot first.
/// Overflowing the target width is a parse failure — including the wide
/// `BigInt` representation, which is bounded by `i128` rather than being
/// arbitrary precision.
pub fn parse_number(kind: NumericKind, value: &str) -> Option<Number> {
    let value = value.replace(',', ".");
    match kind {
        NumericKind::UInt8 => value.parse().ok().map(Number::UInt8),
        NumericKind::Int16 => value.parse().ok().map(Number::Int16),
        NumericKind::Int32 => value.parse().ok().map(Number::Int32),
        NumericKind::Int64 => value.parse().ok().map(Number::Int64),
        NumericKind::BigInt => value.parse().ok().map(Number::BigInt),
        NumericKind::Float32 => value.parse().ok().map(Number::Float32),
        NumericKind::Float64 => value.parse().ok().map(Number::Float64),
        NumericKind::Decimal => Decimal::from_str(&value).ok().map(Number::Decimal),
        NumericKind::BigDecimal => compare::is_numeric_literal(&value)
            .then(|| Number::BigDecimal(value.trim_start_matches('+').to_string())),
    }
}
