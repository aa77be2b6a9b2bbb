use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use md5::{Digest, Md5};

use super::canonicalize;

/// MD5 of the UTF-8 bytes, standard base64, trailing `=` removed.
pub fn compute_checksum(canonical: &str) -> String {
    let digest = Md5::digest(canonical.as_bytes());
    let encoded = STANDARD.encode(digest);
    encoded.trim_end_matches('=').to_string()
}

/// Checksum a document should declare: [`compute_checksum`] over its canonical form.
pub fn checksum_of(text: &str) -> String {
    compute_checksum(&canonicalize(text))
}
