pub mod protocols;
pub mod usecases;
