use crate::{
    Messages, SqlDataType, Temporal, Validation, parse_temporal, render, truncate_text,
    validators::precheck,
};
use std::cmp::Ordering;
use time::format_description::BorrowedFormatItem;

/// Validator for the date/time family. Bounds fix the representation (both
/// must be the same [`Temporal`] variant); `output` is the canonical pattern
/// a value in range is rendered with.
#[derive(Debug, Clone)]
pub struct DateTimeValidator {
    sql_type: SqlDataType,
    description: String,
    output: &'static [BorrowedFormatItem<'static>],
    min: Temporal,
    max: Temporal,
    messages: Messages,
}

impl DateTimeValidator {
    pub fn new(
        sql_type: SqlDataType,
        description: impl Into<String>,
        output: &'static [BorrowedFormatItem<'static>],
        min: Temporal,
        max: Temporal,
        messages: Messages,
    ) -> Self {
        debug_assert!(min.kind() == max.kind());
        Self {
            sql_type,
            description: description.into(),
            output,
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
        let type_name = format!("{} {}", self.messages.sql_label, self.sql_type);
        let invalid = || {
            Validation::fail(render(
                &self.messages.invalid_value,
                &[&truncate_text(value), &type_name],
            ))
        };
        let Some(parsed) = parse_temporal(self.min.kind(), value) else {
            return invalid();
        };
        if parsed.partial_cmp(&self.min) == Some(Ordering::Less) {
            return Validation::fail(render(
                &self.messages.range_low,
                &[&truncate_text(value), &self.min, &self.max, &self.sql_type],
            ));
        }
        if parsed.partial_cmp(&self.max) == Some(Ordering::Greater) {
            return Validation::fail(render(
                &self.messages.range_high,
                &[&truncate_text(value), &self.min, &self.max, &self.sql_type],
            ));
        }
        match parsed.format(self.output) {
            Ok(formatted) => Validation::pass(formatted, &self.messages.success),
            Err(_) => invalid(),
        }
    }
}
