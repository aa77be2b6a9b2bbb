//! Tests for document validation.

use super::{validate, validate_bytes, validate_reader, Validation};
use crate::checksum::{canonicalize, compute_checksum};
use crate::error::ChecksumError;

const BODY: &str = "[Adblock Plus 2.0]\n||ads.example.com^\n";
const BODY_SUM: &str = "jIM4kfZagj2ZgO2vLAOf8A";

#[test]
fn mismatch_reports_found_and_expected() {
    let outcome = validate("! Checksum: abc123\nrule1\nrule2\n").unwrap();
    assert_eq!(
        outcome,
        Validation::Mismatch {
            found: "abc123".to_string(),
            expected: "EOoE5ujiC4S4RvWZjgX6iA".to_string(),
        }
    );
    assert!(!outcome.is_valid());
    assert_eq!(
        outcome.to_string(),
        "Wrong checksum: found abc123, expected EOoE5ujiC4S4RvWZjgX6iA"
    );
}

#[test]
fn valid_document() {
    let doc = format!("[Adblock Plus 2.0]\n! Checksum: {}\n||ads.example.com^\n", BODY_SUM);
    let outcome = validate(&doc).unwrap();
    assert!(outcome.is_valid());
    assert_eq!(outcome.to_string(), "Checksum is valid");
}

#[test]
fn valid_document_with_crlf() {
    let doc = format!(
        "[Adblock Plus 2.0]\r\n! Checksum: {}\r\n||ads.example.com^\r\n",
        BODY_SUM
    );
    assert!(validate(&doc).unwrap().is_valid());
}

#[test]
fn missing_checksum_is_an_error() {
    let err = validate("rule1\nrule2\n").unwrap_err();
    assert!(matches!(err, ChecksumError::MissingChecksum));
}

#[test]
fn empty_input_is_missing_checksum() {
    assert!(matches!(
        validate_bytes(Vec::new()),
        Err(ChecksumError::MissingChecksum)
    ));
}

#[test]
fn invalid_utf8_fails_before_extraction() {
    let mut raw = format!("! Checksum: {}\n", BODY_SUM).into_bytes();
    raw.extend_from_slice(b"[Adblock Plus 2.0]\n||ads.\xff.com^\n");
    assert!(matches!(validate_bytes(raw), Err(ChecksumError::Encoding(_))));
}

#[test]
fn invalid_utf8_without_directive_is_still_encoding_error() {
    assert!(matches!(
        validate_bytes(vec![b'r', 0xc3, b'\n']),
        Err(ChecksumError::Encoding(_))
    ));
}

#[test]
fn reader_input() {
    let doc = format!("! Checksum: {}\n{}", BODY_SUM, BODY);
    let outcome = validate_reader(doc.as_bytes()).unwrap();
    assert!(outcome.is_valid());
}

#[test]
fn directive_position_does_not_matter() {
    let sum = compute_checksum(&canonicalize(BODY));
    let directive = format!("! Checksum: {}\n", sum);
    let lines: Vec<&str> = BODY.split_inclusive('\n').collect();
    for at in 0..=lines.len() {
        let mut doc = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i == at {
                doc.push_str(&directive);
            }
            doc.push_str(line);
        }
        if at == lines.len() {
            doc.push_str(&directive);
        }
        assert!(validate(&doc).unwrap().is_valid(), "directive at line {}", at);
    }
}

#[test]
fn first_directive_is_compared_second_ignored() {
    let good_first = format!("! Checksum: {}\n! Checksum: bogus\n{}", BODY_SUM, BODY);
    assert!(validate(&good_first).unwrap().is_valid());

    let bad_first = format!("! Checksum: bogus\n! Checksum: {}\n{}", BODY_SUM, BODY);
    assert_eq!(
        validate(&bad_first).unwrap(),
        Validation::Mismatch {
            found: "bogus".to_string(),
            expected: BODY_SUM.to_string(),
        }
    );
}

#[test]
fn json_shape() {
    let valid = Validation::Valid {
        checksum: BODY_SUM.to_string(),
    };
    assert_eq!(
        serde_json::to_string(&valid).unwrap(),
        r#"{"status":"valid","checksum":"jIM4kfZagj2ZgO2vLAOf8A"}"#
    );
    let mismatch = Validation::Mismatch {
        found: "a".to_string(),
        expected: "b".to_string(),
    };
    assert_eq!(
        serde_json::to_string(&mismatch).unwrap(),
        r#"{"status":"mismatch","found":"a","expected":"b"}"#
    );
}
