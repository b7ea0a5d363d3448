use crate::{
    Encoding, Messages, SqlDataType, Validation, render, validators::precheck,
};

/// Validator for fixed and variable length character types. Lengths are
/// counted in characters; `max_length_unlock` is the capacity reachable when
/// the size constraint is explicitly relaxed (a MAX style column).
#[derive(Debug, Clone)]
pub struct StringValidator {
    sql_type: SqlDataType,
    description: String,
    min_length: i32,
    max_length: i32,
    max_length_unlock: i32,
    encoding: Encoding,
    messages: Messages,
}

impl StringValidator {
    pub fn new(
        sql_type: SqlDataType,
        description: impl Into<String>,
        min_length: i32,
        max_length: i32,
        max_length_unlock: i32,
        encoding: Encoding,
        messages: Messages,
    ) -> Self {
        Self {
            sql_type,
            description: description.into(),
            min_length,
            max_length,
            max_length_unlock,
            encoding,
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

    /// `size` overrides the length policy: `0` falls back to the configured
    /// maximum, a negative value unlocks the MAX capacity, and anything above
    /// the unlocked capacity is clamped down to it. Without an override the
    /// configured `[min_length, max_length]` window applies.
    pub fn validate_sized(&self, value: &str, size: Option<i32>) -> Validation {
        if let Some(failed) = precheck(value, &self.messages) {
            return failed;
        }
        if !self.encoding.round_trips(value) {
            return Validation::fail(render(
                &self.messages.encoding_mismatch,
                &[&self.encoding],
            ));
        }
        let length = value.chars().count() as i64;
        if let Some(size) = size {
            // Branch order matters and differs from the binary family.
            let mut size = i64::from(size);
            if size == 0 {
                size = self.max_length.into();
            }
            if size < 0 {
                size = self.max_length_unlock.into();
            }
            if size > self.max_length_unlock.into() {
                size = self.max_length_unlock.into();
            }
            if length > size {
                return Validation::fail(render(&self.messages.length_exceed, &[&size]));
            }
        } else {
            if length < self.min_length.into() {
                return Validation::fail(render(
                    &self.messages.length_short,
                    &[&self.min_length],
                ));
            }
            if length > self.max_length.into() {
                return Validation::fail(render(
                    &self.messages.length_exceed,
                    &[&self.max_length],
                ));
            }
        }
        Validation::pass(value, &self.messages.success)
    }
}
