use sqlvalid::{Messages, SqlDataType, SqlValueValidator};

#[test]
fn missing_and_whitespace_prechecks() {
    let validator = SqlValueValidator::new();
    for data_type in SqlDataType::ALL {
        let missing = validator.validate(data_type, "");
        assert!(!missing.is_valid());
        assert_eq!(missing.message, "Value is missing", "{data_type}");
        let whitespace = validator.validate(data_type, " \t ");
        assert!(!whitespace.is_valid());
        assert_eq!(whitespace.message, "Value contains only whitespace", "{data_type}");
    }
}

#[test]
fn bit() {
    let validator = SqlValueValidator::new();
    let result = validator.validate(SqlDataType::Bit, "true");
    assert_eq!(result.value.as_deref(), Some("true"));
    assert_eq!(result.message, "OK");
    assert_eq!(
        validator.validate(SqlDataType::Bit, "FALSE").value.as_deref(),
        Some("false"),
    );
    // Digits are only accepted by the extended variant.
    let plain = validator.validate(SqlDataType::Bit, "1");
    assert_eq!(plain.message, "Value '1' does not match the Rust bool type");
    let extended = validator.validate_with(SqlDataType::Bit, "1", 0, true);
    assert_eq!(extended.value.as_deref(), Some("true"));
    assert_eq!(
        validator.validate_with(SqlDataType::Bit, "0", 0, true).value.as_deref(),
        Some("false"),
    );
    assert!(!validator.validate_with(SqlDataType::Bit, "2", 0, true).is_valid());
}

#[test]
fn integers() {
    let validator = SqlValueValidator::new();
    assert_eq!(
        validator.validate(SqlDataType::TinyInt, "255").value.as_deref(),
        Some("255"),
    );
    let above = validator.validate(SqlDataType::TinyInt, "256");
    assert_eq!(
        above.message,
        "Value '256' exceeds the allowed range (0 - 255) for type SQL TinyInt",
    );
    let below = validator.validate(SqlDataType::TinyInt, "-1");
    assert_eq!(
        below.message,
        "Value '-1' is below the allowed range (0 - 255) for type SQL TinyInt",
    );
    assert!(validator.validate(SqlDataType::SmallInt, "-32768").is_valid());
    assert!(!validator.validate(SqlDataType::SmallInt, "32768").is_valid());
    assert!(validator.validate(SqlDataType::Int, "2147483647").is_valid());
    assert!(!validator.validate(SqlDataType::Int, "2147483648").is_valid());
    assert!(validator.validate(SqlDataType::BigInt, "9223372036854775807").is_valid());
    assert!(!validator.validate(SqlDataType::BigInt, "9223372036854775808").is_valid());
    let invalid = validator.validate(SqlDataType::Int, "12.5");
    assert_eq!(invalid.message, "Value '12.5' does not match the SQL Int type");
}

#[test]
fn money_ignores_digit_grouping_spaces() {
    let validator = SqlValueValidator::new();
    let result = validator.validate(SqlDataType::Money, "922 337 203 685 477.5807");
    assert_eq!(result.value.as_deref(), Some("922337203685477.5807"));
    assert!(validator.validate(SqlDataType::SmallMoney, "214748.3647").is_valid());
    assert!(!validator.validate(SqlDataType::SmallMoney, "214748.3648").is_valid());
    assert!(!validator.validate(SqlDataType::Money, "922337203685477.5808").is_valid());
}

#[test]
fn decimal_plain_and_extended() {
    let validator = SqlValueValidator::new();
    assert!(
        validator
            .validate(SqlDataType::Decimal, "9999999999999999999999999999")
            .is_valid()
    );
    let invalid = validator.validate(SqlDataType::Decimal, "12a");
    assert_eq!(invalid.message, "Value '12a' does not match the Rust Decimal type");

    // The extended variant reaches the full SQL range of ±(10^38 − 1).
    let nines = "99999999999999999999999999999999999999";
    let result = validator.validate_with(SqlDataType::Decimal, nines, 0, true);
    assert_eq!(result.value.as_deref(), Some(nines));
    let above = validator.validate_with(
        SqlDataType::Decimal,
        "100000000000000000000000000000000000000",
        0,
        true,
    );
    assert!(!above.is_valid());
    assert!(above.message.contains("exceeds the allowed range"));
    assert!(above.message.contains("SQL Decimal"));
    let below = validator.validate_with(
        SqlDataType::Decimal,
        "-100000000000000000000000000000000000000",
        0,
        true,
    );
    assert!(below.message.contains("is below the allowed range"));
}

#[test]
fn floats() {
    let validator = SqlValueValidator::new();
    let result = validator.validate(SqlDataType::Real, "3.4028235e38");
    assert_eq!(result.value.as_deref(), Some("3.4028235e38"));
    assert!(validator.validate(SqlDataType::Float, "-1.25").is_valid());
    assert!(validator.validate(SqlDataType::Float, "1,5").is_valid());
    let nan = validator.validate(SqlDataType::Float, "NaN");
    assert_eq!(nan.message, "Value 'NaN' does not match the SQL Float type");
}

#[test]
fn date_and_time_types() {
    let validator = SqlValueValidator::new();
    assert_eq!(
        validator
            .validate(SqlDataType::SmallDateTime, "2079-01-06 15:45:00")
            .value
            .as_deref(),
        Some("2079-01-06 15:45:00"),
    );
    let above = validator.validate(SqlDataType::SmallDateTime, "2099-01-01 00:00:00");
    assert!(!above.is_valid());
    assert!(above.message.contains("exceeds the allowed range"));

    assert_eq!(
        validator.validate(SqlDataType::Date, "2025-01-17").value.as_deref(),
        Some("2025-01-17"),
    );
    assert_eq!(
        validator
            .validate(SqlDataType::DateTime, "9999-01-06 15:45:00.999")
            .value
            .as_deref(),
        Some("9999-01-06 15:45:00.999"),
    );
    assert!(!validator.validate(SqlDataType::DateTime, "1752-12-31 23:59:59").is_valid());
    assert_eq!(
        validator
            .validate(SqlDataType::DateTime2, "9999-12-31 23:59:59.9999999")
            .value
            .as_deref(),
        Some("9999-12-31 23:59:59.9999999"),
    );
    // Output is normalized to the canonical pattern.
    assert_eq!(
        validator.validate(SqlDataType::Time, "15:45").value.as_deref(),
        Some("15:45:00.0000000"),
    );
    assert_eq!(
        validator
            .validate(SqlDataType::DateTimeOffset, "9999-12-31 23:59:59.9999999+03:00")
            .value
            .as_deref(),
        Some("9999-12-31 23:59:59.9999999+03:00"),
    );
    let invalid = validator.validate(SqlDataType::Date, "17.01.2025");
    assert_eq!(invalid.message, "Value '17.01.2025' does not match the SQL Date type");
}

#[test]
fn strings() {
    let validator = SqlValueValidator::new();
    let result = validator.validate(SqlDataType::Char, "This is a Char value");
    assert_eq!(result.value.as_deref(), Some("This is a Char value"));
    let mismatch = validator.validate(SqlDataType::Char, "héllo");
    assert_eq!(mismatch.message, "String does not match the expected encoding ASCII");
    // Unicode is fine for the N-prefixed types.
    assert!(validator.validate(SqlDataType::NChar, "héllo😀").is_valid());
    assert!(validator.validate(SqlDataType::NVarChar, "привет").is_valid());
}

#[test]
fn string_length_boundaries() {
    let validator = SqlValueValidator::new();
    assert!(validator.validate(SqlDataType::Char, &"a".repeat(8000)).is_valid());
    let over = validator.validate(SqlDataType::Char, &"a".repeat(8001));
    assert_eq!(over.message, "String length exceeds the allowed maximum - 8000");
    assert!(validator.validate(SqlDataType::NChar, &"я".repeat(4000)).is_valid());
    assert!(!validator.validate(SqlDataType::NChar, &"я".repeat(4001)).is_valid());
}

#[test]
fn string_size_override() {
    let validator = SqlValueValidator::new();
    let capped = validator.validate_with(SqlDataType::VarChar, "hello", 3, false);
    assert_eq!(capped.message, "String length exceeds the allowed maximum - 3");
    assert!(validator.validate_with(SqlDataType::VarChar, "hello", 5, false).is_valid());
    // Negative unlocks the MAX style capacity.
    assert!(validator.validate_with(SqlDataType::VarChar, "hello", -1, false).is_valid());
    assert!(validator.validate_with(SqlDataType::NVarChar, "hello", 0, false).is_valid());
}

#[test]
fn unique_identifier() {
    let validator = SqlValueValidator::new();
    let canonical = "dfe518e8-ba00-40cc-84dc-8fd52e072703";
    let result = validator.validate(SqlDataType::UniqueIdentifier, canonical);
    assert_eq!(result.value.as_deref(), Some(canonical));
    // Braced and uppercase forms normalize to the dashed lowercase one.
    let braced = validator.validate(
        SqlDataType::UniqueIdentifier,
        "{DFE518E8-BA00-40CC-84DC-8FD52E072703}",
    );
    assert_eq!(braced.value.as_deref(), Some(canonical));
    let invalid = validator.validate(SqlDataType::UniqueIdentifier, "not-a-guid");
    assert_eq!(
        invalid.message,
        "Value 'not-a-guid' does not match the SQL UniqueIdentifier type",
    );
}

#[test]
fn binary() {
    let validator = SqlValueValidator::new();
    assert_eq!(
        validator.validate(SqlDataType::Binary, "49 50 51").value.as_deref(),
        Some("0x495051"),
    );
    assert_eq!(
        validator.validate(SqlDataType::Binary, "0xAA-BB-CC").value.as_deref(),
        Some("0xAABBCC"),
    );
    // "0" is the conventional empty payload.
    assert_eq!(
        validator.validate(SqlDataType::Binary, "0").value.as_deref(),
        Some("0x"),
    );
    let odd = validator.validate(SqlDataType::Binary, "ABC");
    assert_eq!(
        odd.message,
        "Value 'ABC' must have an even number of characters for type SQL Binary",
    );
    let invalid = validator.validate(SqlDataType::Binary, "GG");
    assert_eq!(
        invalid.message,
        "Value 'GG' contains invalid characters for the hexadecimal format of type SQL Binary",
    );
}

#[test]
fn binary_size_override() {
    let validator = SqlValueValidator::new();
    let capped = validator.validate_with(SqlDataType::VarBinary, "AABBCC", 2, false);
    assert_eq!(capped.message, "Byte array length exceeds the allowed maximum - 2");
    assert!(validator.validate_with(SqlDataType::VarBinary, "AABBCC", 3, false).is_valid());
    assert!(validator.validate_with(SqlDataType::VarBinary, "AABBCC", -1, false).is_valid());
    assert!(validator.validate_with(SqlDataType::VarBinary, "AABBCC", 0, false).is_valid());
}

#[test]
fn timestamp_is_exactly_eight_bytes() {
    let validator = SqlValueValidator::new();
    let result = validator.validate(SqlDataType::Timestamp, "00000000000007D8");
    assert_eq!(result.value.as_deref(), Some("0x00000000000007D8"));
    let short = validator.validate(SqlDataType::Timestamp, "FFFF");
    assert_eq!(short.message, "Byte array length is less than the allowed minimum - 8");
    let long = validator.validate(SqlDataType::Timestamp, "00000000000007D8AA");
    assert_eq!(long.message, "Byte array length exceeds the allowed maximum - 8");
}

#[test]
fn long_values_are_truncated_in_messages() {
    let validator = SqlValueValidator::new();
    let value = "x".repeat(60);
    let result = validator.validate(SqlDataType::Int, &value);
    let expected = format!(
        "Value '{}...' does not match the SQL Int type",
        "x".repeat(37),
    );
    assert_eq!(result.message, expected);
}

#[test]
fn placeholder_like_values_stay_verbatim() {
    // A value spelling a placeholder must not be substituted by the next
    // template argument.
    let validator = SqlValueValidator::new();
    let result = validator.validate(SqlDataType::Int, "{1}");
    assert_eq!(result.message, "Value '{1}' does not match the SQL Int type");
    let result = validator.validate(SqlDataType::Int, "{0}{1}{2}");
    assert_eq!(result.message, "Value '{0}{1}{2}' does not match the SQL Int type");
}

#[test]
fn russian_catalog() {
    let validator = SqlValueValidator::with_messages(Messages::russian());
    let result = validator.validate(SqlDataType::TinyInt, "256");
    assert_eq!(
        result.message,
        "Значение '256' превышает допустимый диапазон (0 - 255) для типа SQL TinyInt",
    );
    assert_eq!(validator.validate(SqlDataType::TinyInt, "255").message, "OK");
    assert_eq!(
        validator.validate(SqlDataType::TinyInt, "").message,
        "Значение отсутствует",
    );
}

#[test]
fn descriptions() {
    let validator = SqlValueValidator::new();
    assert_eq!(
        validator.description(SqlDataType::TinyInt, false),
        "8-bit unsigned integer (0 to 255)",
    );
    assert_ne!(
        validator.description(SqlDataType::Decimal, false),
        validator.description(SqlDataType::Decimal, true),
    );
    assert_ne!(
        validator.description(SqlDataType::Bit, false),
        validator.description(SqlDataType::Bit, true),
    );
}
