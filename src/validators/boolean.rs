use crate::{
    BooleanKind, Messages, SqlDataType, Validation, parse_boolean, render, truncate_text,
    validators::precheck,
};

/// Validator for the Bit family. The kind decides whether only the textual
/// `true`/`false` literals are accepted or the SQL `1`/`0` digits as well.
#[derive(Debug, Clone)]
pub struct BooleanValidator {
    sql_type: SqlDataType,
    description: String,
    kind: BooleanKind,
    messages: Messages,
}

impl BooleanValidator {
    pub fn new(
        sql_type: SqlDataType,
        description: impl Into<String>,
        kind: BooleanKind,
        messages: Messages,
    ) -> Self {
        Self {
            sql_type,
            description: description.into(),
            kind,
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
        match parse_boolean(self.kind, value.trim()) {
            Some(parsed) => Validation::pass(parsed.to_string(), &self.messages.success),
            None => {
                let type_name = match self.kind {
                    BooleanKind::Plain => format!("{} bool", self.messages.native_label),
                    BooleanKind::Extended => {
                        format!("{} {}", self.messages.sql_label, self.sql_type)
                    }
                };
                Validation::fail(render(
                    &self.messages.invalid_value,
                    &[&truncate_text(value), &type_name],
                ))
            }
        }
    }
}
