use crate::validation::protocols::FieldValidation;
use crate::validation::validators::{
    CompareFieldsValidation, EmailValidation, MinLengthValidation, RequiredFieldValidation,
};

/// Fluent rule list for one field, e.g. `ValidationBuilder::field("email").required().email()`.
pub struct ValidationBuilder {
    field: String,
    validators: Vec<Box<dyn FieldValidation>>,
}

impl ValidationBuilder {
    pub fn field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            validators: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.validators
            .push(Box::new(RequiredFieldValidation::new(self.field.clone())));
        self
    }

    pub fn email(mut self) -> Self {
        self.validators
            .push(Box::new(EmailValidation::new(self.field.clone())));
        self
    }

    pub fn min(mut self, length: usize) -> Self {
        self.validators
            .push(Box::new(MinLengthValidation::new(self.field.clone(), length)));
        self
    }

    pub fn same_as(mut self, value_to_compare: impl Into<String>) -> Self {
        self.validators.push(Box::new(CompareFieldsValidation::new(
            self.field.clone(),
            value_to_compare,
        )));
        self
    }

    pub fn build(self) -> Vec<Box<dyn FieldValidation>> {
        self.validators
    }
}
