mod binary;
mod boolean;
mod datetime;
mod numeric;
mod string;
mod unique_identifier;

pub use binary::*;
pub use boolean::*;
pub use datetime::*;
pub use numeric::*;
pub use string::*;
pub use unique_identifier::*;

use crate::Messages;

/// Outcome of a single validation. `value` holds the canonical rendering of
/// the input when, and only when, `message` is the catalog's success
/// template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub value: Option<String>,
    pub message: String,
}

impl Validation {
    pub fn pass(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            value: None,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }
}

/// Pre-checks shared by every validator, applied before any family specific
/// logic: empty input, then whitespace-only input.
pub(crate) fn precheck(value: &str, messages: &Messages) -> Option<Validation> {
    if value.is_empty() {
        return Some(Validation::fail(messages.missing_value.clone()));
    }
    if value.trim().is_empty() {
        return Some(Validation::fail(messages.whitespace_value.clone()));
    }
    None
}
