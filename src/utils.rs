// src/utils.rs
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Message text from an inline argument, a file, or stdin, in that order
pub fn read_message(inline: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(message) = inline {
        return Ok(message);
    }

    if let Some(path) = file {
        return read_file_content(path);
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read message from stdin")?;
    Ok(buffer)
}

/// Read file content as string with proper error context
pub fn read_file_content(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Collapse runs of whitespace so multi-line text fits on one terminal line
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
