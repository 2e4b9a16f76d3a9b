// ABOUTME: Library module for the md-slides program.
// ABOUTME: Contains the markdown parser and the PPTX renderer.

// Reexport modules
pub mod config;
pub mod convert;
pub mod errors;
pub mod inline;
pub mod model;
pub mod parser;
pub mod pptx;
pub mod template;
pub mod utils;

// Reexport common types and functions
pub use config::Config;
pub use convert::{convert_directory, convert_file, find_markdown_files, parse_file};
pub use errors::{Result, SlidesError};
pub use inline::parse_inline;
pub use model::{ContentItem, InlineSpan, SlideRecord, TextStyle};
pub use parser::parse_markdown;
pub use pptx::{generate_pptx, write_pptx};
