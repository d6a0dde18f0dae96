pub mod builder;
pub mod composite;
pub mod error;
pub mod protocols;
pub mod validators;
