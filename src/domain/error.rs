use thiserror::Error;

pub type DomainResult<T> = core::result::Result<T, DomainError>;

#[rustfmt::skip]
pub mod message {
    pub static INVALID_CREDENTIALS: &str = "Invalid credentials";
    pub static EMAIL_IN_USE: &str = "This email is already in use";
    pub static UNEXPECTED: &str = "Something went wrong. Please try again later";
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    #[error("{}", message::INVALID_CREDENTIALS)]
    InvalidCredentials,
    #[error("{}", message::EMAIL_IN_USE)]
    EmailInUse,
    #[error("{}", message::UNEXPECTED)]
    Unexpected,
}
