use crate::{
    Messages, SqlDataType, Validation, render, truncate_text, validators::precheck,
};

/// Validator for the binary family (Binary, VarBinary, Timestamp). Accepts a
/// hexadecimal payload, optionally `0x` prefixed, with spaces and hyphens
/// allowed as grouping; the literal `"0"` denotes an empty payload. Lengths
/// are counted in decoded bytes.
#[derive(Debug, Clone)]
pub struct BinaryValidator {
    sql_type: SqlDataType,
    description: String,
    min_length: i32,
    max_length: i32,
    max_length_unlock: i32,
    messages: Messages,
}

impl BinaryValidator {
    pub fn new(
        sql_type: SqlDataType,
        description: impl Into<String>,
        min_length: i32,
        max_length: i32,
        max_length_unlock: i32,
        messages: Messages,
    ) -> Self {
        Self {
            sql_type,
            description: description.into(),
            min_length,
            max_length,
            max_length_unlock,
            messages,
        }
    }

    pub fn sql_type(&self) -> SqlDataType {
        self.sql_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn validate(&self, value: &str) -> Validation {
        self.validate_sized(value, None)
    }

    /// Size override semantics mirror [`StringValidator::validate_sized`]
    /// except for the clamp order: a size above the configured maximum jumps
    /// to the unlocked capacity first, then `0` falls back to the maximum and
    /// negatives unlock. The order is part of the contract.
    ///
    /// [`StringValidator::validate_sized`]: crate::StringValidator::validate_sized
    pub fn validate_sized(&self, value: &str, size: Option<i32>) -> Validation {
        if let Some(failed) = precheck(value, &self.messages) {
            return failed;
        }
        let type_name = format!("{} {}", self.messages.sql_label, self.sql_type);

        // "0" is the conventional spelling of an empty payload.
        let hex = if value == "0" { "0x" } else { value };
        let hex = hex.replace([' ', '-'], "");
        let hex = match hex.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("0x") => &hex[2..],
            _ => &hex[..],
        };

        if hex.len() % 2 != 0 {
            return Validation::fail(render(
                &self.messages.odd_length,
                &[&value, &type_name],
            ));
        }
        let Ok(bytes) = hex::decode(hex) else {
            return Validation::fail(render(
                &self.messages.invalid_hex_chars,
                &[&truncate_text(value), &type_name],
            ));
        };

        let length = bytes.len() as i64;
        if let Some(size) = size {
            // Branch order matters: an oversize cap widens to the unlocked
            // capacity before the zero and negative fallbacks apply.
            let mut size = i64::from(size);
            if size > self.max_length.into() {
                size = self.max_length_unlock.into();
            }
            if size == 0 {
                size = self.max_length.into();
            }
            if size < 0 {
                size = self.max_length_unlock.into();
            }
            if length > size {
                return Validation::fail(render(
                    &self.messages.byte_length_too_large,
                    &[&size],
                ));
            }
        } else {
            if length < self.min_length.into() {
                return Validation::fail(render(
                    &self.messages.byte_length_too_small,
                    &[&self.min_length],
                ));
            }
            if length > self.max_length.into() {
                return Validation::fail(render(
                    &self.messages.byte_length_too_large,
                    &[&self.max_length],
                ));
            }
        }
        Validation::pass(
            format!("0x{}", hex::encode_upper(&bytes)),
            &self.messages.success,
        )
    }
}
