mod compare_fields;
mod email;
mod min_length;
mod required_field;

pub use compare_fields::CompareFieldsValidation;
pub use email::EmailValidation;
pub use min_length::MinLengthValidation;
pub use required_field::RequiredFieldValidation;
