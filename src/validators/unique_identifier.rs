use crate::{
    Messages, SqlDataType, Validation, render, truncate_text, validators::precheck,
};
use uuid::Uuid;

/// Validator for UniqueIdentifier. Accepts the standard UUID textual forms
/// (dashed, plain, braced, urn) and returns the canonical dashed lowercase
/// rendering.
#[derive(Debug, Clone)]
pub struct UniqueIdentifierValidator {
    sql_type: SqlDataType,
    description: String,
    messages: Messages,
}

impl UniqueIdentifierValidator {
    pub fn new(
        sql_type: SqlDataType,
        description: impl Into<String>,
        messages: Messages,
    ) -> Self {
        Self {
            sql_type,
            description: description.into(),
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
        match Uuid::parse_str(value) {
            Ok(parsed) => Validation::pass(
                parsed.hyphenated().to_string(),
                &self.messages.success,
            ),
            Err(_) => {
                let type_name = format!("{} {}", self.messages.sql_label, self.sql_type);
                Validation::fail(render(
                    &self.messages.invalid_value,
                    &[&truncate_text(value), &type_name],
                ))
            }
        }
    }
}
