//! Error type for reading and validating a subscription document.

use std::io;
use std::string::FromUtf8Error;

/// Why a document could not be validated.
///
/// A checksum that is present but wrong is not an error; see
/// [`Validation::Mismatch`](crate::validate::Validation::Mismatch).
#[derive(Debug, thiserror::Error)]
pub enum ChecksumError {
    /// The input stream could not be read.
    #[error("failed reading data")]
    Read(#[source] io::Error),
    /// The input bytes are not valid UTF-8. Nothing past decoding is attempted.
    #[error("failed reading data, most likely not encoded as UTF-8")]
    Encoding(#[from] FromUtf8Error),
    /// No `! Checksum:` directive line in the document.
    #[error("data doesn't contain a checksum, nothing to validate")]
    MissingChecksum,
}
