pub mod pages;
pub mod protocols;
