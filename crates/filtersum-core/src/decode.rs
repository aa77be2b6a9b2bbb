//! Input decoding: the whole document is read first, then decoded as strict UTF-8.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ChecksumError;

/// Decode raw document bytes. Any invalid UTF-8 sequence fails the whole document;
/// there is no lossy fallback. A leading byte order mark is kept as text.
pub fn decode(raw: Vec<u8>) -> Result<String, ChecksumError> {
    let len = raw.len();
    let text = String::from_utf8(raw)?;
    tracing::debug!(bytes = len, "decoded document");
    Ok(text)
}

/// Read the stream to the end, then decode it.
pub fn read_document<R: Read>(mut reader: R) -> Result<String, ChecksumError> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw).map_err(ChecksumError::Read)?;
    decode(raw)
}

/// Read and decode a local file.
pub fn read_path(path: &Path) -> Result<String, ChecksumError> {
    let file = File::open(path).map_err(ChecksumError::Read)?;
    read_document(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn decode_ascii_and_multibyte() {
        let text = decode("! Titel: Größe\n||bücher.example^\n".as_bytes().to_vec()).unwrap();
        assert_eq!(text, "! Titel: Größe\n||bücher.example^\n");
    }

    #[test]
    fn decode_keeps_bom() {
        let text = decode(b"\xEF\xBB\xBFrule\n".to_vec()).unwrap();
        assert!(text.starts_with('\u{feff}'));
    }

    #[test]
    fn decode_rejects_latin1() {
        // "Gr\xf6\xdfe" is ISO-8859-1, not UTF-8.
        let err = decode(b"! Gr\xf6\xdfe\n".to_vec()).unwrap_err();
        assert!(matches!(err, ChecksumError::Encoding(_)));
    }

    #[test]
    fn decode_rejects_truncated_sequence() {
        let err = decode(vec![b'a', 0xE2, 0x82]).unwrap_err();
        assert!(matches!(err, ChecksumError::Encoding(_)));
    }

    #[test]
    fn read_document_empty_stream() {
        let text = read_document(std::io::empty()).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn read_path_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"rule1\nrule2\n").unwrap();
        f.flush().unwrap();
        assert_eq!(read_path(f.path()).unwrap(), "rule1\nrule2\n");
    }

    #[test]
    fn read_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_path(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, ChecksumError::Read(_)));
    }
}
