use crate::{
    Messages, Number, NumericKind, SqlDataType, Validation, parse_number, render, truncate_text,
    validators::precheck,
};
use std::cmp::Ordering;

/// Validator for every numeric family: integers, money, decimals and floats.
/// The representation is carried by the bound variants; both bounds must be
/// built from the same [`Number`] variant.
///
/// The `BigDecimal` configuration range checks through the string comparator,
/// so the extended SQL decimal limits of ±(10^38 − 1) are enforced exactly
/// even though they exceed every native numeric width.
#[derive(Debug, Clone)]
pub struct NumericValidator {
    sql_type: SqlDataType,
    description: String,
    min: Number,
    max: Number,
    messages: Messages,
}

impl NumericValidator {
    pub fn new(
        sql_type: SqlDataType,
        description: impl Into<String>,
        min: Number,
        max: Number,
        messages: Messages,
    ) -> Self {
        debug_assert!(min.kind() == max.kind());
        Self {
            sql_type,
            description: description.into(),
            min,
            max,
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
        if let Some(failed) = precheck(value, &self.messages) {
            return failed;
        }
        // The plain Decimal configuration matches the native decimal range,
        // not a SQL documented one, and is reported as such.
        let type_name = match self.min.kind() {
            NumericKind::Decimal => format!("{} Decimal", self.messages.native_label),
            _ => format!("{} {}", self.messages.sql_label, self.sql_type),
        };
        let cleaned = value.replace(' ', "");
        let Some(parsed) = parse_number(self.min.kind(), &cleaned) else {
            return Validation::fail(render(
                &self.messages.invalid_value,
                &[&truncate_text(value), &type_name],
            ));
        };
        match parsed.partial_cmp(&self.min) {
            Some(Ordering::Less) => {
                return Validation::fail(render(
                    &self.messages.range_low,
                    &[&truncate_text(value), &self.min, &self.max, &type_name],
                ));
            }
            // Unordered (NaN): not a usable value for a range bounded type.
            None => {
                return Validation::fail(render(
                    &self.messages.invalid_value,
                    &[&truncate_text(value), &type_name],
                ));
            }
            _ => {}
        }
        if parsed.partial_cmp(&self.max) == Some(Ordering::Greater) {
            return Validation::fail(render(
                &self.messages.range_high,
                &[&truncate_text(value), &self.min, &self.max, &type_name],
            ));
        }
        Validation::pass(parsed.to_string(), &self.messages.success)
    }
}
