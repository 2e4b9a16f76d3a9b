// ABOUTME: Markdown parser for slide-structured input
// ABOUTME: Splits text into slide records with indentation-derived outline levels

use crate::model::{ContentItem, SlideRecord};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Number of leading spaces per outline level
pub const INDENT_WIDTH: usize = 2;

/// `Slide 3: Title`, with the numeric id optional
static SLIDE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*Slide(?:\s+(\d+))?\s*:\s*(.*?)\s*$").unwrap());

/// `## Heading`, level is the number of hashes minus one
static HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(#{1,6})\s+(.*?)\s*$").unwrap());

const BULLET_MARKERS: &[&str] = &["- ", "* ", "+ "];

/// How a single source line is interpreted
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    SlideMarker { id: Option<&'a str>, title: &'a str },
    Heading { text: &'a str, level: usize },
    Item { text: &'a str, level: usize },
    Blank,
}

/// Parse markdown text into slide records in source order.
///
/// Content appearing before the first slide marker is dropped. A repeated
/// numeric slide id reopens the earlier slide and appends to it.
pub fn parse_markdown(text: &str) -> Vec<SlideRecord> {
    let mut slides: Vec<SlideRecord> = Vec::new();
    let mut ids: HashMap<&str, usize> = HashMap::new();
    let mut current: Option<usize> = None;

    for (line_no, line) in text.lines().enumerate() {
        match classify_line(line) {
            Line::SlideMarker { id, title } => {
                let existing = id.and_then(|id| ids.get(id).copied());
                let index = match existing {
                    Some(index) => {
                        debug!("Line {}: reopening slide {:?}", line_no + 1, id);
                        index
                    }
                    None => {
                        slides.push(SlideRecord::new(title));
                        let index = slides.len() - 1;
                        if let Some(id) = id {
                            ids.insert(id, index);
                        }
                        index
                    }
                };
                current = Some(index);
            }
            Line::Blank => {}
            Line::Heading { text, level } | Line::Item { text, level } => match current {
                Some(index) => slides[index].content.push(ContentItem::new(text, level)),
                None => debug!("Line {}: no slide yet, dropping {:?}", line_no + 1, text),
            },
        }
    }

    slides
}

/// Classify one line of input
pub fn classify_line(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        return Line::Blank;
    }

    if let Some(caps) = SLIDE_PATTERN.captures(line) {
        return Line::SlideMarker {
            id: caps.get(1).map(|m| m.as_str()),
            title: caps.get(2).map_or("", |m| m.as_str()),
        };
    }

    if let Some(caps) = HEADING_PATTERN.captures(line) {
        let hashes = caps.get(1).map_or(1, |m| m.as_str().len());
        return Line::Heading {
            text: caps.get(2).map_or("", |m| m.as_str()),
            level: hashes - 1,
        };
    }

    let level = indent_level(line);
    let mut text = line.trim();
    if text == "-" {
        text = "";
    }
    for marker in BULLET_MARKERS {
        if let Some(stripped) = text.strip_prefix(marker) {
            text = stripped.trim_start();
            break;
        }
    }

    Line::Item { text, level }
}

/// Outline level from leading whitespace; a tab counts as one full indent.
pub fn indent_level(line: &str) -> usize {
    let width: usize = line
        .chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { INDENT_WIDTH } else { 1 })
        .sum();
    width / INDENT_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_slide_marker() {
        assert_eq!(
            classify_line("Slide 12: Roadmap"),
            Line::SlideMarker {
                id: Some("12"),
                title: "Roadmap"
            }
        );
        assert_eq!(
            classify_line("Slide: Untitled id"),
            Line::SlideMarker {
                id: None,
                title: "Untitled id"
            }
        );
    }

    #[test]
    fn test_classify_heading() {
        assert_eq!(
            classify_line("### Deep"),
            Line::Heading {
                text: "Deep",
                level: 2
            }
        );
        // no space after the hashes is not a heading
        assert_eq!(
            classify_line("#hashtag"),
            Line::Item {
                text: "#hashtag",
                level: 0
            }
        );
    }

    #[test]
    fn test_indent_level() {
        assert_eq!(indent_level("- a"), 0);
        assert_eq!(indent_level(" - a"), 0);
        assert_eq!(indent_level("  - a"), 1);
        assert_eq!(indent_level("     - a"), 2);
        assert_eq!(indent_level("\t\t- a"), 2);
    }

    #[test]
    fn test_bullet_markers_stripped() {
        assert_eq!(classify_line("* star"), Line::Item { text: "star", level: 0 });
        assert_eq!(classify_line("    + plus"), Line::Item { text: "plus", level: 2 });
        assert_eq!(classify_line("-"), Line::Item { text: "", level: 0 });
        assert_eq!(classify_line("-dash"), Line::Item { text: "-dash", level: 0 });
    }

    #[test]
    fn test_slide_word_inside_text_is_content() {
        assert_eq!(
            classify_line("- Slide decks are fun"),
            Line::Item {
                text: "Slide decks are fun",
                level: 0
            }
        );
    }
}
