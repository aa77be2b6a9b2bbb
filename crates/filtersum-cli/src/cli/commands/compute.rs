//! `filtersum compute` – print the checksum for a subscription.

use anyhow::Result;
use filtersum_core::checksum;
use std::path::Path;

use super::input::read_input;

pub fn run_compute(path: Option<&Path>) -> Result<()> {
    let text = read_input(path)?;
    if let Some(declared) = checksum::extract_checksum(&text) {
        tracing::debug!(declared, "ignoring declared checksum");
    }
    println!("{}", checksum::checksum_of(&text));
    Ok(())
}
