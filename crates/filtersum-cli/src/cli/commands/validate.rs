//! `filtersum validate` – compare the declared checksum with the computed one.

use anyhow::Result;
use filtersum_core::config::OutputFormat;
use filtersum_core::{validate, Validation};
use std::path::Path;

use super::input::read_input;

/// Print the outcome; returns whether the checksum is valid.
pub fn run_validate(path: Option<&Path>, format: OutputFormat) -> Result<bool> {
    let text = read_input(path)?;
    let outcome = validate(&text)?;
    println!("{}", render(&outcome, format)?);
    Ok(outcome.is_valid())
}

pub(crate) fn render(outcome: &Validation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(outcome.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(outcome)?),
    }
}
