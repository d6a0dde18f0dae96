use crate::validation::error::{FieldError, InvalidFieldError};
use crate::validation::protocols::FieldValidation;

pub struct MinLengthValidation {
    field: String,
    min_length: usize,
}

impl MinLengthValidation {
    pub fn new(field: impl Into<String>, min_length: usize) -> Self {
        Self {
            field: field.into(),
            min_length,
        }
    }
}

impl FieldValidation for MinLengthValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, value: &str) -> Result<(), FieldError> {
        if value.chars().count() < self.min_length {
            return Err(InvalidFieldError.into());
        }

        Ok(())
    }
}
