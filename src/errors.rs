// ABOUTME: Error types for the md-slides application
// ABOUTME: Provides structured error handling for each stage of the pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlidesError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("PPTX generation error: {0}")]
    PptxError(String),

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No markdown files found matching pattern: {0}")]
    NoInputFilesError(String),
}

impl From<zip::result::ZipError> for SlidesError {
    fn from(err: zip::result::ZipError) -> Self {
        SlidesError::PptxError(format!("ZIP operation failed: {}", err))
    }
}

impl From<std::fmt::Error> for SlidesError {
    fn from(err: std::fmt::Error) -> Self {
        SlidesError::PptxError(format!("XML formatting failed: {}", err))
    }
}

impl From<image::ImageError> for SlidesError {
    fn from(err: image::ImageError) -> Self {
        SlidesError::ImageError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SlidesError>;
