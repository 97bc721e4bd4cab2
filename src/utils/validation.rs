//! Path and input validation utilities.
//!
//! This module provides common validation functions so the CLI commands report
//! missing catalogs and bad mood names the same way.

use owo_colors::OwoColorize;
use std::error::Error;
use std::path::Path;

/// Validate that a catalog file exists and is a regular file.
///
/// # Example
///
/// ```ignore
/// use moodbox::utils::validation::validate_catalog_file;
/// use std::path::Path;
///
/// validate_catalog_file(Path::new("data.json"))?;
/// ```
pub fn validate_catalog_file(path: &Path) -> Result<(), Box<dyn Error>> {
    if !path.exists() {
        return Err(format!(
            "{} Catalog does not exist: {} (set one with 'moodbox config set catalog_path <path>')",
            "Error:".red().bold(),
            path.display()
        )
        .into());
    }
    if !path.is_file() {
        return Err(format!(
            "{} Catalog is not a file: {}",
            "Error:".red().bold(),
            path.display()
        )
        .into());
    }
    Ok(())
}

/// Trim a mood name and reject empty ones.
pub fn validate_mood_name(name: &str) -> Result<&str, Box<dyn Error>> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(format!("{} Mood name cannot be empty", "Error:".red().bold()).into());
    }
    Ok(trimmed)
}
