// ABOUTME: Data model shared by the parser and the PPTX renderer
// ABOUTME: Slide records, outline items and the inline span representation

/// One slide: a title and its outline items in source order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlideRecord {
    pub title: String,
    pub content: Vec<ContentItem>,
}

impl SlideRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Vec::new(),
        }
    }
}

/// A single outline paragraph
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    /// Source text with the bullet marker removed; inline markers are kept
    pub text: String,
    /// Outline depth, 0 for top-level bullets
    pub level: usize,
    /// Inline spans parsed from `text`
    pub spans: Vec<InlineSpan>,
}

impl ContentItem {
    /// Build an item, parsing inline formatting from `text`
    pub fn new(text: impl Into<String>, level: usize) -> Self {
        let text = text.into();
        let spans = crate::inline::parse_inline(&text);
        Self { text, level, spans }
    }

    /// Text with all inline markers removed, images excluded
    pub fn plain_text(&self) -> String {
        self.spans
            .iter()
            .filter_map(|span| match span {
                InlineSpan::Text { text, .. } | InlineSpan::Link { text, .. } => {
                    Some(text.as_str())
                }
                InlineSpan::Image { .. } => None,
            })
            .collect()
    }
}

/// Character styling applied to a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
    pub code: bool,
}

impl TextStyle {
    pub fn plain() -> Self {
        Self::default()
    }

    /// Union of two styles
    pub fn merge(self, other: TextStyle) -> Self {
        Self {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            strike: self.strike || other.strike,
            code: self.code || other.code,
        }
    }

    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Self::default()
        }
    }

    pub fn underline() -> Self {
        Self {
            underline: true,
            ..Self::default()
        }
    }

    pub fn strike() -> Self {
        Self {
            strike: true,
            ..Self::default()
        }
    }

    pub fn code() -> Self {
        Self {
            code: true,
            ..Self::default()
        }
    }
}

/// A styled piece of a paragraph
#[derive(Debug, Clone, PartialEq)]
pub enum InlineSpan {
    Text { text: String, style: TextStyle },
    Link { text: String, url: String, style: TextStyle },
    Image { alt: String, path: String },
}

impl InlineSpan {
    pub fn text(text: impl Into<String>, style: TextStyle) -> Self {
        InlineSpan::Text {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::text(text, TextStyle::plain())
    }
}
