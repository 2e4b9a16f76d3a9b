// ABOUTME: Utility functions for the md-slides application
// ABOUTME: Provides path validation and input/output path mapping helpers

use crate::errors::{Result, SlidesError};
use std::path::{Path, PathBuf};

pub const OUTPUT_EXTENSION: &str = "pptx";

/// Validate that a file exists
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SlidesError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(SlidesError::ValidationError(format!(
            "Path is not a file: {:?}",
            path
        )));
    }
    Ok(())
}

/// Validate that a directory exists
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SlidesError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(SlidesError::ValidationError(format!(
            "Path is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(SlidesError::FileReadError)?;
    } else if !path.is_dir() {
        return Err(SlidesError::ValidationError(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a file's parent directory exists
pub fn ensure_parent_directory_exists(file_path: &Path) -> Result<()> {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory_exists(parent),
        _ => Ok(()),
    }
}

/// Directory that relative image paths in a markdown file resolve against
pub fn base_directory(markdown_path: &Path) -> PathBuf {
    match markdown_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Map a markdown file under `input_root` to its presentation under `output_root`,
/// keeping the relative directory and base file name.
pub fn output_path_for(input_root: &Path, markdown_path: &Path, output_root: &Path) -> PathBuf {
    let relative = markdown_path
        .strip_prefix(input_root)
        .unwrap_or(markdown_path);
    let mut output = output_root.to_path_buf();
    if let Some(parent) = relative.parent() {
        output.push(parent);
    }
    // Append the extension to the stem so dotted names like `talk.v1` survive
    let mut name = relative
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "slides".into());
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    output.push(name);
    output
}
