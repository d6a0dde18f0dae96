use crate::validation::error::{FieldError, InvalidFieldError};
use crate::validation::protocols::FieldValidation;

/// Fails unless the field value equals `value_to_compare`.
pub struct CompareFieldsValidation {
    field: String,
    value_to_compare: String,
}

impl CompareFieldsValidation {
    pub fn new(field: impl Into<String>, value_to_compare: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value_to_compare: value_to_compare.into(),
        }
    }
}

impl FieldValidation for CompareFieldsValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, value: &str) -> Result<(), FieldError> {
        if value != self.value_to_compare {
            return Err(InvalidFieldError.into());
        }

        Ok(())
    }
}
