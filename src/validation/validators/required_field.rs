use crate::validation::error::{FieldError, RequiredFieldError};
use crate::validation::protocols::FieldValidation;

pub struct RequiredFieldValidation {
    field: String,
}

impl RequiredFieldValidation {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl FieldValidation for RequiredFieldValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, value: &str) -> Result<(), FieldError> {
        if value.trim().is_empty() {
            return Err(RequiredFieldError.into());
        }

        Ok(())
    }
}
