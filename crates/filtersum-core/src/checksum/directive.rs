//! Checksum directive line (`! Checksum: <token>`).

use once_cell::sync::Lazy;
use regex::Regex;

/// One directive line including its terminating `\n`.
///
/// The whitespace and word classes are ASCII-only and only the keyword is
/// case-insensitive. The leading whitespace class also spans newlines, so a
/// directive swallows whitespace-only lines directly above it. A directive on
/// a last line without `\n` does not match.
pub(super) static DIRECTIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[\t\n\x0B\x0C\r ]*![\t\n\x0B\x0C\r ]*(?i-u:checksum)[\t\n\x0B\x0C\r :\-]+([A-Za-z0-9_+/=]+).*\n",
    )
    .unwrap_or_else(|err| panic!("checksum directive pattern should compile: {err}"))
});

/// Returns the token declared by the first directive line, if any.
///
/// The grammar is permissive: underscores and interior `=` are captured even
/// though no computed checksum contains them, so such a document reports a
/// mismatch rather than a missing checksum.
pub fn extract_checksum(text: &str) -> Option<&str> {
    DIRECTIVE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
