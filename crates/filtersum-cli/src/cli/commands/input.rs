//! Document input: a file path, or stdin for no path / `-`.

use anyhow::{Context, Result};
use filtersum_core::decode;
use std::io;
use std::path::Path;

pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            decode::read_path(p).with_context(|| format!("read {}", p.display()))
        }
        _ => decode::read_document(io::stdin().lock()).context("read stdin"),
    }
}
