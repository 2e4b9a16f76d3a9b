// ABOUTME: Conversion driver for the md-slides application
// ABOUTME: Runs parse and render for a single file or every markdown file in a directory

use crate::config::Config;
use crate::errors::{Result, SlidesError};
use crate::model::SlideRecord;
use crate::parser::parse_markdown;
use crate::pptx::generate_pptx;
use crate::utils;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Parse a markdown file into slide records
pub fn parse_file(markdown_path: &Path) -> Result<Vec<SlideRecord>> {
    utils::validate_file_exists(markdown_path)?;
    let text = fs::read_to_string(markdown_path).map_err(SlidesError::FileReadError)?;
    let slides = parse_markdown(&text);
    info!("Parsed {} slides from {:?}", slides.len(), markdown_path);
    Ok(slides)
}

/// Convert one markdown file into a presentation, returning the slide count
pub fn convert_file(markdown_path: &Path, output_path: &Path, config: &Config) -> Result<usize> {
    info!("Converting {:?} -> {:?}", markdown_path, output_path);

    let slides = parse_file(markdown_path)?;
    generate_pptx(
        &slides,
        output_path,
        config,
        &utils::base_directory(markdown_path),
    )?;

    Ok(slides.len())
}

/// Find every `.md` file below a directory, sorted by path
pub fn find_markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    utils::validate_directory_exists(dir)?;

    let glob_pattern = format!(
        "{}/**/*.md",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    let mut paths: Vec<PathBuf> = glob::glob(&glob_pattern)
        .map_err(|e| SlidesError::ValidationError(format!("Invalid glob pattern: {}", e)))?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable path: {}", e);
                None
            }
        })
        .filter(|p| p.is_file())
        .collect();

    // Sort paths so files are converted in a stable order
    paths.sort();

    info!("Found {} markdown files", paths.len());
    if paths.is_empty() {
        return Err(SlidesError::NoInputFilesError(glob_pattern));
    }

    Ok(paths)
}

/// Convert every markdown file below `input_dir`, one at a time.
///
/// Each output keeps the input's relative directory and base name under
/// `output_dir`. `on_saved` is called after each file is written. The first
/// failure stops the run.
pub fn convert_directory<F>(
    input_dir: &Path,
    output_dir: &Path,
    config: &Config,
    mut on_saved: F,
) -> Result<Vec<PathBuf>>
where
    F: FnMut(&Path, usize),
{
    let inputs = find_markdown_files(input_dir)?;
    let mut outputs = Vec::with_capacity(inputs.len());

    for markdown_path in &inputs {
        let output_path = utils::output_path_for(input_dir, markdown_path, output_dir);
        let count = convert_file(markdown_path, &output_path, config)?;
        on_saved(&output_path, count);
        outputs.push(output_path);
    }

    Ok(outputs)
}
