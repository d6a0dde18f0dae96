use once_cell::sync::Lazy;
use regex::Regex;

use crate::validation::error::{FieldError, InvalidFieldError};
use crate::validation::protocols::FieldValidation;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

pub struct EmailValidation {
    field: String,
}

impl EmailValidation {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl FieldValidation for EmailValidation {
    fn field(&self) -> &str {
        &self.field
    }

    // An empty value is left to RequiredFieldValidation.
    fn validate(&self, value: &str) -> Result<(), FieldError> {
        if value.is_empty() || EMAIL_REGEX.is_match(value) {
            return Ok(());
        }

        Err(InvalidFieldError.into())
    }
}
