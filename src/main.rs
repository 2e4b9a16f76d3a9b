// ABOUTME: Main entry point for the md-slides program.
// ABOUTME: Provides CLI interface and runs conversions from the library.

use anyhow::Context;
use clap::Parser;
use md_slides::Config;
use std::path::{Path, PathBuf};

const DEFAULT_INPUT_FILE: &str = "input/slides.md";
const DEFAULT_OUTPUT_FILE: &str = "output/slides.pptx";
const DEFAULT_INPUT_DIR: &str = "input";
const DEFAULT_OUTPUT_DIR: &str = "output";

/// Convert Markdown files to PowerPoint presentations
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input markdown file (directory with --recursive), default is "input/slides.md"
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output PowerPoint file (directory with --recursive), default is "output/slides.pptx"
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Convert every .md file below the input directory
    #[arg(short, long)]
    recursive: bool,

    /// Font size in points for top-level items
    #[arg(long, value_name = "PT", value_parser = font_size_arg())]
    level_one_size: Option<u32>,

    /// Font size in points for second-level items
    #[arg(long, value_name = "PT", value_parser = font_size_arg())]
    level_two_size: Option<u32>,

    /// Font size in points for third-level items
    #[arg(long, value_name = "PT", value_parser = font_size_arg())]
    level_three_size: Option<u32>,

    /// Whether top-level items are bold
    #[arg(long, value_name = "BOOL", value_parser = parse_bool_flag)]
    bold_level_one: Option<bool>,

    /// Slide aspect ratio: '4:3' or '16:9'
    #[arg(long)]
    aspect_ratio: Option<String>,

    /// Increase logging verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn font_size_arg() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..=i64::from(md_slides::config::MAX_FONT_SIZE))
}

fn parse_bool_flag(value: &str) -> Result<bool, String> {
    md_slides::config::parse_bool(value).map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env().with_overrides(
        cli.level_one_size,
        cli.level_two_size,
        cli.level_three_size,
        cli.bold_level_one,
        cli.aspect_ratio,
    );

    if cli.recursive {
        let input = cli.file.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));
        let output = cli.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        md_slides::convert_directory(&input, &output, &config, |path: &Path, _| {
            println!("Presentation saved as {}", path.display());
        })
        .with_context(|| format!("Failed to convert directory {}", input.display()))?;
    } else {
        let input = cli.file.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE));
        let output = cli.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));

        md_slides::convert_file(&input, &output, &config)
            .with_context(|| format!("Failed to convert {}", input.display()))?;
        println!("Presentation saved as {}", output.display());
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
