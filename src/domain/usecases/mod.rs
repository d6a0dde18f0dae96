pub mod add_account;
pub mod authentication;
