pub mod convert;
pub mod dto;

pub use convert::ModelError;
