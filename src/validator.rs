use crate::{
    BinaryValidator, BooleanKind, BooleanValidator, DateTimeValidator, Encoding, Messages,
    Number, NumericValidator, SqlDataType, StringValidator, Temporal, UniqueIdentifierValidator,
    Validation, truncate_text,
};
use log::{debug, trace};
use rust_decimal::Decimal;
use time::macros::{date, datetime, format_description, time};

/// Extended SQL decimal limits, ±(10^38 − 1). Beyond every native numeric
/// width, hence kept as digit strings and enforced through the string
/// comparator.
const BIG_DECIMAL_MIN: &str = "-99999999999999999999999999999999999999";
const BIG_DECIMAL_MAX: &str = "99999999999999999999999999999999999999";

/// Checks whether a string can be converted into a given SQL data type,
/// returning the canonical rendering and a status message.
///
/// One pre-configured validator instance exists per supported type (plus the
/// extended Bit and Decimal variants), built once here with the documented
/// SQL Server limits. After construction the set is immutable, so a facade
/// can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct SqlValueValidator {
    bit: BooleanValidator,
    bit_extended: BooleanValidator,
    tiny_int: NumericValidator,
    small_int: NumericValidator,
    int: NumericValidator,
    big_int: NumericValidator,
    small_money: NumericValidator,
    money: NumericValidator,
    decimal: NumericValidator,
    decimal_extended: NumericValidator,
    float: NumericValidator,
    real: NumericValidator,
    small_date_time: DateTimeValidator,
    date: DateTimeValidator,
    date_time: DateTimeValidator,
    date_time2: DateTimeValidator,
    time: DateTimeValidator,
    date_time_offset: DateTimeValidator,
    fixed_char: StringValidator,
    var_char: StringValidator,
    fixed_nchar: StringValidator,
    var_nchar: StringValidator,
    unique_identifier: UniqueIdentifierValidator,
    binary: BinaryValidator,
    var_binary: BinaryValidator,
    timestamp: BinaryValidator,
}

impl SqlValueValidator {
    /// Builds the validator set with the built-in English messages.
    pub fn new() -> Self {
        Self::with_messages(Messages::english())
    }

    /// Builds the validator set with an injected message catalog.
    pub fn with_messages(messages: Messages) -> Self {
        debug!("Building the validator set for {} SQL types", SqlDataType::ALL.len());
        let m = &messages;
        Self {
            bit: BooleanValidator::new(
                SqlDataType::Bit,
                "TRUE or FALSE",
                BooleanKind::Plain,
                m.clone(),
            ),
            bit_extended: BooleanValidator::new(
                SqlDataType::Bit,
                "TRUE or FALSE, '1' or '0'",
                BooleanKind::Extended,
                m.clone(),
            ),
            tiny_int: NumericValidator::new(
                SqlDataType::TinyInt,
                "8-bit unsigned integer (0 to 255)",
                Number::BigInt(0),
                Number::BigInt(255),
                m.clone(),
            ),
            small_int: NumericValidator::new(
                SqlDataType::SmallInt,
                "16-bit signed integer (-32,768 to 32,767)",
                Number::BigInt(-32768),
                Number::BigInt(32767),
                m.clone(),
            ),
            int: NumericValidator::new(
                SqlDataType::Int,
                "32-bit signed integer (-2,147,483,648 to 2,147,483,647)",
                Number::BigInt(-2147483648),
                Number::BigInt(2147483647),
                m.clone(),
            ),
            big_int: NumericValidator::new(
                SqlDataType::BigInt,
                "64-bit signed integer (-9,223,372,036,854,775,808 to 9,223,372,036,854,775,807)",
                Number::BigInt(i64::MIN as i128),
                Number::BigInt(i64::MAX as i128),
                m.clone(),
            ),
            small_money: NumericValidator::new(
                SqlDataType::SmallMoney,
                "Money (-214,748.3648 to 214,748.3647, accuracy 0.0001)",
                Number::Decimal(Decimal::from_i128_with_scale(i32::MIN as i128, 4)),
                Number::Decimal(Decimal::from_i128_with_scale(i32::MAX as i128, 4)),
                m.clone(),
            ),
            money: NumericValidator::new(
                SqlDataType::Money,
                "Money (-922,337,203,685,477.5808 to 922,337,203,685,477.5807, accuracy 0.0001)",
                Number::Decimal(Decimal::from_i128_with_scale(i64::MIN as i128, 4)),
                Number::Decimal(Decimal::from_i128_with_scale(i64::MAX as i128, 4)),
                m.clone(),
            ),
            decimal: NumericValidator::new(
                SqlDataType::Decimal,
                "Fixed precision and scale number within the native Decimal range (up to 28-29 significant digits)",
                Number::Decimal(Decimal::MIN),
                Number::Decimal(Decimal::MAX),
                m.clone(),
            ),
            decimal_extended: NumericValidator::new(
                SqlDataType::Decimal,
                "Fixed precision and scale number (-10^38 + 1 to 10^38 - 1, up to 38 significant digits)",
                Number::BigDecimal(BIG_DECIMAL_MIN.into()),
                Number::BigDecimal(BIG_DECIMAL_MAX.into()),
                m.clone(),
            ),
            float: NumericValidator::new(
                SqlDataType::Float,
                "Double precision floating point (-1.7976931348623157E+308 to 1.7976931348623157E+308)",
                Number::Float64(f64::MIN),
                Number::Float64(f64::MAX),
                m.clone(),
            ),
            real: NumericValidator::new(
                SqlDataType::Real,
                "Single precision floating point (-3.4028235E+38 to 3.4028235E+38)",
                Number::Float32(f32::MIN),
                Number::Float32(f32::MAX),
                m.clone(),
            ),
            small_date_time: DateTimeValidator::new(
                SqlDataType::SmallDateTime,
                "Date and time with minute accuracy (1900 to 2079)",
                format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
                Temporal::DateTime(datetime!(1900-01-01 00:00:00)),
                Temporal::DateTime(datetime!(2079-06-06 23:59:59)),
                m.clone(),
            ),
            date: DateTimeValidator::new(
                SqlDataType::Date,
                "Date only (0001 to 9999)",
                format_description!("[year]-[month]-[day]"),
                Temporal::Date(date!(0001-01-01)),
                Temporal::Date(date!(9999-12-31)),
                m.clone(),
            ),
            date_time: DateTimeValidator::new(
                SqlDataType::DateTime,
                "Date and time (1753 to 9999) with accuracy of about 3 milliseconds",
                format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"),
                Temporal::DateTime(datetime!(1753-01-01 00:00:00)),
                Temporal::DateTime(datetime!(9999-12-31 23:59:59.997)),
                m.clone(),
            ),
            date_time2: DateTimeValidator::new(
                SqlDataType::DateTime2,
                "Date and time (0001 to 9999) with 100 nanosecond accuracy",
                format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:7]"),
                Temporal::DateTime(datetime!(0001-01-01 00:00:00)),
                Temporal::DateTime(datetime!(9999-12-31 23:59:59.9999999)),
                m.clone(),
            ),
            time: DateTimeValidator::new(
                SqlDataType::Time,
                "Time of day (00:00:00 to 23:59:59.9999999) with 100 nanosecond accuracy",
                format_description!("[hour]:[minute]:[second].[subsecond digits:7]"),
                Temporal::Time(time!(00:00:00)),
                Temporal::Time(time!(23:59:59.9999999)),
                m.clone(),
            ),
            date_time_offset: DateTimeValidator::new(
                SqlDataType::DateTimeOffset,
                "Date and time with a time zone offset (0001 to 9999), 100 nanosecond accuracy",
                format_description!(
                    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:7][offset_hour sign:mandatory]:[offset_minute]"
                ),
                Temporal::DateTimeOffset(datetime!(0001-01-01 00:00:00 UTC)),
                Temporal::DateTimeOffset(datetime!(9999-12-31 23:59:59.9999999 UTC)),
                m.clone(),
            ),
            fixed_char: StringValidator::new(
                SqlDataType::Char,
                "Fixed length string (1-8000 characters, ASCII)",
                0,
                8000,
                8000,
                Encoding::Ascii,
                m.clone(),
            ),
            var_char: StringValidator::new(
                SqlDataType::VarChar,
                "Variable length string (1-8000 bytes, ASCII)",
                0,
                8000,
                i32::MAX,
                Encoding::Ascii,
                m.clone(),
            ),
            fixed_nchar: StringValidator::new(
                SqlDataType::NChar,
                "Fixed length Unicode string (1-4000 characters)",
                0,
                4000,
                4000,
                Encoding::Utf16,
                m.clone(),
            ),
            var_nchar: StringValidator::new(
                SqlDataType::NVarChar,
                "Variable length Unicode string (1-4000 characters)",
                0,
                4000,
                i32::MAX / 2,
                Encoding::Utf16,
                m.clone(),
            ),
            unique_identifier: UniqueIdentifierValidator::new(
                SqlDataType::UniqueIdentifier,
                "Globally unique identifier (GUID)",
                m.clone(),
            ),
            binary: BinaryValidator::new(
                SqlDataType::Binary,
                "Fixed size binary data (1-8000 bytes)",
                0,
                8000,
                8000,
                m.clone(),
            ),
            var_binary: BinaryValidator::new(
                SqlDataType::VarBinary,
                "Variable length binary data (1-8000 bytes)",
                0,
                8000,
                i32::MAX,
                m.clone(),
            ),
            timestamp: BinaryValidator::new(
                SqlDataType::Timestamp,
                "Unique row version in a table (8 bytes)",
                8,
                8,
                8,
                messages,
            ),
        }
    }

    /// Validates with the default size (`0`) and the plain variant. See
    /// [`SqlValueValidator::validate_with`].
    pub fn validate(&self, data_type: SqlDataType, value: &str) -> Validation {
        self.validate_with(data_type, value, 0, false)
    }

    /// Checks whether `value` can be converted into `data_type` and returns
    /// the canonical rendering plus a status message.
    ///
    /// `size` only affects the variable length types (VarChar, NVarChar,
    /// VarBinary): `0` keeps the type's default maximum, a negative value
    /// unlocks the MAX style capacity and a positive value caps the length.
    ///
    /// `use_extended` only affects Bit and Decimal: it switches to the
    /// validator accepting `1`/`0` literals, respectively the one enforcing
    /// the full ±(10^38 − 1) SQL decimal range.
    pub fn validate_with(
        &self,
        data_type: SqlDataType,
        value: &str,
        size: i32,
        use_extended: bool,
    ) -> Validation {
        trace!("Validating '{}' as {data_type}", truncate_text(value));
        match data_type {
            SqlDataType::Bit if use_extended => self.bit_extended.validate(value),
            SqlDataType::Bit => self.bit.validate(value),
            SqlDataType::TinyInt => self.tiny_int.validate(value),
            SqlDataType::SmallInt => self.small_int.validate(value),
            SqlDataType::Int => self.int.validate(value),
            SqlDataType::BigInt => self.big_int.validate(value),
            SqlDataType::SmallMoney => self.small_money.validate(value),
            SqlDataType::Money => self.money.validate(value),
            SqlDataType::Decimal if use_extended => self.decimal_extended.validate(value),
            SqlDataType::Decimal => self.decimal.validate(value),
            SqlDataType::Float => self.float.validate(value),
            SqlDataType::Real => self.real.validate(value),
            SqlDataType::SmallDateTime => self.small_date_time.validate(value),
            SqlDataType::Date => self.date.validate(value),
            SqlDataType::DateTime => self.date_time.validate(value),
            SqlDataType::DateTime2 => self.date_time2.validate(value),
            SqlDataType::Time => self.time.validate(value),
            SqlDataType::DateTimeOffset => self.date_time_offset.validate(value),
            SqlDataType::Char => self.fixed_char.validate(value),
            SqlDataType::VarChar => self.var_char.validate_sized(value, Some(size)),
            SqlDataType::NChar => self.fixed_nchar.validate(value),
            SqlDataType::NVarChar => self.var_nchar.validate_sized(value, Some(size)),
            SqlDataType::UniqueIdentifier => self.unique_identifier.validate(value),
            SqlDataType::Binary => self.binary.validate(value),
            SqlDataType::VarBinary => self.var_binary.validate_sized(value, Some(size)),
            SqlDataType::Timestamp => self.timestamp.validate(value),
        }
    }

    /// The human readable description of the validator serving `data_type`.
    pub fn description(&self, data_type: SqlDataType, use_extended: bool) -> &str {
        match data_type {
            SqlDataType::Bit if use_extended => self.bit_extended.description(),
            SqlDataType::Bit => self.bit.description(),
            SqlDataType::TinyInt => self.tiny_int.description(),
            SqlDataType::SmallInt => self.small_int.description(),
            SqlDataType::Int => self.int.description(),
            SqlDataType::BigInt => self.big_int.description(),
            SqlDataType::SmallMoney => self.small_money.description(),
            SqlDataType::Money => self.money.description(),
            SqlDataType::Decimal if use_extended => self.decimal_extended.description(),
            SqlDataType::Decimal => self.decimal.description(),
            SqlDataType::Float => self.float.description(),
            SqlDataType::Real => self.real.description(),
            SqlDataType::SmallDateTime => self.small_date_time.description(),
            SqlDataType::Date => self.date.description(),
            SqlDataType::DateTime => self.date_time.description(),
            SqlDataType::DateTime2 => self.date_time2.description(),
            SqlDataType::Time => self.time.description(),
            SqlDataType::DateTimeOffset => self.date_time_offset.description(),
            SqlDataType::Char => self.fixed_char.description(),
            SqlDataType::VarChar => self.var_char.description(),
            SqlDataType::NChar => self.fixed_nchar.description(),
            SqlDataType::NVarChar => self.var_nchar.description(),
            SqlDataType::UniqueIdentifier => self.unique_identifier.description(),
            SqlDataType::Binary => self.binary.description(),
            SqlDataType::VarBinary => self.var_binary.description(),
            SqlDataType::Timestamp => self.timestamp.description(),
        }
    }
}

impl Default for SqlValueValidator {
    fn default() -> Self {
        Self::new()
    }
}
