//! Canonical form of a document, the exact bytes the checksum covers.

use once_cell::sync::Lazy;
use regex::Regex;

use super::directive::DIRECTIVE_RE;

static NEWLINE_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n+").unwrap_or_else(|err| panic!("newline run pattern should compile: {err}"))
});

/// Strip `\r`, collapse runs of `\n` to one, then drop every directive line.
///
/// The order is fixed: the directive pattern relies on LF-only text with no
/// blank lines.
pub fn canonicalize(text: &str) -> String {
    let without_cr = text.replace('\r', "");
    let collapsed = NEWLINE_RUN_RE.replace_all(&without_cr, "\n");
    DIRECTIVE_RE.replace_all(&collapsed, "").into_owned()
}
