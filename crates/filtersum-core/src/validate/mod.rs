//! Validation of a document against its declared checksum.
//!
//! Three terminal outcomes: [`Validation::Valid`], [`Validation::Mismatch`],
//! or [`ChecksumError::MissingChecksum`] when there is nothing to compare.

use std::fmt;
use std::io::Read;

use serde::Serialize;

use crate::checksum::{canonicalize, compute_checksum, extract_checksum};
use crate::decode;
use crate::error::ChecksumError;

/// Result of comparing the declared checksum with the computed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Validation {
    Valid {
        checksum: String,
    },
    /// `found` is the declared token, `expected` is what the content hashes to.
    Mismatch {
        found: String,
        expected: String,
    },
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid { .. })
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Valid { .. } => write!(f, "Checksum is valid"),
            Validation::Mismatch { found, expected } => {
                write!(f, "Wrong checksum: found {}, expected {}", found, expected)
            }
        }
    }
}

/// Validate decoded document text.
///
/// Only the first directive is compared; every directive line is excluded
/// from the digest.
pub fn validate(text: &str) -> Result<Validation, ChecksumError> {
    let found = extract_checksum(text).ok_or(ChecksumError::MissingChecksum)?;
    tracing::debug!(found, "extracted checksum directive");

    let canonical = canonicalize(text);
    let expected = compute_checksum(&canonical);
    tracing::debug!(canonical_bytes = canonical.len(), %expected, "computed checksum");

    if found == expected {
        tracing::info!(checksum = %expected, "checksum is valid");
        Ok(Validation::Valid { checksum: expected })
    } else {
        tracing::warn!(found, %expected, "checksum mismatch");
        Ok(Validation::Mismatch {
            found: found.to_string(),
            expected,
        })
    }
}

/// Decode raw bytes, then validate. Encoding failures stop before extraction.
pub fn validate_bytes(raw: Vec<u8>) -> Result<Validation, ChecksumError> {
    let text = decode::decode(raw)?;
    validate(&text)
}

/// Read the whole stream, then validate.
pub fn validate_reader<R: Read>(reader: R) -> Result<Validation, ChecksumError> {
    let text = decode::read_document(reader)?;
    validate(&text)
}

#[cfg(test)]
mod tests;
