//! Stdin reading utilities

use anyhow::{Context, Result};
use std::io::Read;

/// Read all of stdin as UTF-8 text.
///
/// Blocks until the stream closes, so interactive callers end their verse
/// with Ctrl-D.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read verse from stdin")?;

    Ok(buffer)
}
