pub mod config;
pub mod logging;

pub mod checksum;
pub mod decode;
pub mod error;
pub mod validate;

pub use error::ChecksumError;
pub use validate::{validate, validate_bytes, validate_reader, Validation};
