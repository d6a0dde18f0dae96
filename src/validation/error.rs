use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("Required field")]
pub struct RequiredFieldError;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("Invalid value")]
pub struct InvalidFieldError;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error(transparent)]
    Required(#[from] RequiredFieldError),
    #[error(transparent)]
    Invalid(#[from] InvalidFieldError),
}
