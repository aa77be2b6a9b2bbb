//! Checksum protocol for filter subscriptions.
//!
//! A document declares its checksum on a directive line such as
//! `! Checksum: EOoE5ujiC4S4RvWZjgX6iA`. The token is the MD5 digest of the
//! document's canonical form, base64-encoded with the `=` padding removed.
//! The canonical form has no carriage returns, no blank lines and no
//! directive lines, so publishers and downloaders agree on the digest no
//! matter how the file was saved.

mod canonical;
mod digest;
mod directive;

pub use canonical::canonicalize;
pub use digest::{checksum_of, compute_checksum};
pub use directive::extract_checksum;
