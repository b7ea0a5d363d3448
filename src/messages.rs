use std::fmt::Display;

/// Localized message templates consumed by every validator. Templates use
/// positional `{0}`/`{1}`/... placeholders; the documented argument order per
/// field is fixed (see each field). A catalog is injected once at facade
/// construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Prefix used to build display names of SQL side types, e.g. "SQL Int".
    pub sql_label: String,
    /// Prefix used to build display names of host side types, e.g. "Rust Decimal".
    pub native_label: String,

    pub success: String,
    pub missing_value: String,
    pub whitespace_value: String,
    /// `{0}` value, `{1}` type display name.
    pub invalid_value: String,

    /// `{0}` value, `{1}` minimum, `{2}` maximum, `{3}` type display name.
    pub range_low: String,
    /// `{0}` value, `{1}` minimum, `{2}` maximum, `{3}` type display name.
    pub range_high: String,

    /// `{0}` encoding display name.
    pub encoding_mismatch: String,
    /// `{0}` effective maximum length.
    pub length_exceed: String,
    /// `{0}` minimum length.
    pub length_short: String,

    /// `{0}` value, `{1}` type display name.
    pub odd_length: String,
    /// `{0}` minimum byte count.
    pub byte_length_too_small: String,
    /// `{0}` effective maximum byte count.
    pub byte_length_too_large: String,
    /// `{0}` value, `{1}` type display name.
    pub invalid_hex_chars: String,
}

impl Messages {
    pub fn english() -> Self {
        Self {
            sql_label: "SQL".into(),
            native_label: "Rust".into(),
            success: "OK".into(),
            missing_value: "Value is missing".into(),
            whitespace_value: "Value contains only whitespace".into(),
            invalid_value: "Value '{0}' does not match the {1} type".into(),
            range_low: "Value '{0}' is below the allowed range ({1} - {2}) for type {3}".into(),
            range_high: "Value '{0}' exceeds the allowed range ({1} - {2}) for type {3}".into(),
            encoding_mismatch: "String does not match the expected encoding {0}".into(),
            length_exceed: "String length exceeds the allowed maximum - {0}".into(),
            length_short: "String length is less than the allowed minimum - {0}".into(),
            odd_length: "Value '{0}' must have an even number of characters for type {1}".into(),
            byte_length_too_small: "Byte array length is less than the allowed minimum - {0}"
                .into(),
            byte_length_too_large: "Byte array length exceeds the allowed maximum - {0}".into(),
            invalid_hex_chars:
                "Value '{0}' contains invalid characters for the hexadecimal format of type {1}"
                    .into(),
        }
    }

    pub fn russian() -> Self {
        Self {
            sql_label: "SQL".into(),
            native_label: "Rust".into(),
            success: "OK".into(),
            missing_value: "Значение отсутствует".into(),
            whitespace_value: "Значение содержит только пробелы".into(),
            invalid_value: "Значение '{0}' не соответствует типу {1}".into(),
            range_low: "Значение '{0}' ниже допустимого диапазона ({1} - {2}) для типа {3}".into(),
            range_high: "Значение '{0}' превышает допустимый диапазон ({1} - {2}) для типа {3}"
                .into(),
            encoding_mismatch: "Строка не соответствует ожидаемой кодировке {0}".into(),
            length_exceed: "Длина строки превышает допустимый максимум - {0}".into(),
            length_short: "Длина строки меньше допустимого минимума - {0}".into(),
            odd_length: "Значение '{0}' должно иметь чётное количество символов для типа {1}"
                .into(),
            byte_length_too_small: "Длина массива байтов меньше допустимого минимума - {0}".into(),
            byte_length_too_large: "Длина массива байтов превышает допустимый максимум - {0}"
                .into(),
            invalid_hex_chars:
                "Значение '{0}' содержит недопустимые символы для шестнадцатеричного формата типа {1}"
                    .into(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::english()
    }
}

/// Fills the `{0}`/`{1}`/... placeholders of a template with the given
/// arguments. The template is scanned once and arguments are emitted
/// positionally, so placeholder-looking text inside an argument stays
/// verbatim. Anything that is not a `{digits}` placeholder with a matching
/// argument is copied through unchanged.
pub fn render(template: &str, args: &[&dyn Display]) -> String {
    let mut result = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        rest = &rest[open..];
        let placeholder = rest[1..].find('}').map(|close| &rest[1..close + 1]);
        let argument = placeholder
            .filter(|index| !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|index| index.parse::<usize>().ok())
            .and_then(|index| args.get(index));
        match argument {
            Some(argument) => {
                result.push_str(&argument.to_string());
                // Skip "{", the digits and "}".
                rest = &rest[placeholder.map_or(0, str::len) + 2..];
            }
            None => {
                result.push('{');
                rest = &rest[1..];
            }
        }
    }
    result.push_str(rest);
    result
}

/// Caps a value embedded into a message at 40 characters, appending `...`
/// when cut.
pub fn truncate_text(input: &str) -> String {
    const MAX_LENGTH: usize = 40;
    if input.chars().count() > MAX_LENGTH {
        let kept = input.chars().take(MAX_LENGTH - 3).collect::<String>();
        format!("{kept}...")
    } else {
        input.to_string()
    }
}
