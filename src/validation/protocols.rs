use crate::validation::error::FieldError;

/// A single rule bound to one form field.
pub trait FieldValidation: Send + Sync {
    fn field(&self) -> &str;
    fn validate(&self, value: &str) -> Result<(), FieldError>;
}
