use crate::presentation::protocols::validation::Validation;
use crate::validation::protocols::FieldValidation;

#[derive(Default)]
pub struct ValidationComposite {
    validators: Vec<Box<dyn FieldValidation>>,
}

impl ValidationComposite {
    pub fn build(validators: Vec<Box<dyn FieldValidation>>) -> Self {
        Self { validators }
    }
}

impl Validation for ValidationComposite {
    fn validate(&self, field: &str, value: &str) -> Option<String> {
        self.validators
            .iter()
            .filter(|validator| validator.field() == field)
            .find_map(|validator| validator.validate(value).err())
            .map(|error| error.to_string())
    }
}
