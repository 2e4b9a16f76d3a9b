// ABOUTME: Inline formatting parser for slide content lines
// ABOUTME: Turns bold/italic/underline/strike/code/link/image markup into styled spans

use crate::model::{InlineSpan, TextStyle};
use once_cell::sync::Lazy;
use regex::Regex;

/// `![alt](path)` with an optional quoted title
static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^!\[([^\]]*)\]\(\s*([^)\s]+)(?:\s+"[^"]*")?\s*\)"#).unwrap());

/// `[text](url)` with an optional quoted title
static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\[([^\]]+)\]\(\s*([^)\s]+)(?:\s+"[^"]*")?\s*\)"#).unwrap());

const ITALIC: TextStyle = TextStyle {
    bold: false,
    italic: true,
    underline: false,
    strike: false,
    code: false,
};
const BOLD: TextStyle = TextStyle {
    bold: true,
    italic: false,
    underline: false,
    strike: false,
    code: false,
};
const BOLD_ITALIC: TextStyle = TextStyle {
    bold: true,
    italic: true,
    underline: false,
    strike: false,
    code: false,
};
const UNDERLINE: TextStyle = TextStyle {
    bold: false,
    italic: false,
    underline: true,
    strike: false,
    code: false,
};
const STRIKE: TextStyle = TextStyle {
    bold: false,
    italic: false,
    underline: false,
    strike: true,
    code: false,
};

type Delimiters = &'static [(&'static str, TextStyle)];

const STARS: Delimiters = &[("**", BOLD), ("*", ITALIC)];
const STAR_RUN: Delimiters = &[("***", BOLD_ITALIC), ("*", ITALIC), ("**", BOLD)];
const UNDERSCORES: Delimiters = &[("__", UNDERLINE), ("_", ITALIC)];
const UNDERSCORE_RUN: Delimiters = &[("_", ITALIC), ("__", UNDERLINE)];
const TILDES: Delimiters = &[("~~", STRIKE)];

/// Delimiters to try for a marker run, in order.
///
/// A run of three or more that has no matching triple closer is split with the
/// single delimiter outermost first, so `***a** b*` is italic around bold.
fn delimiters_for(marker: u8, run: usize) -> Delimiters {
    match (marker, run >= 3) {
        (b'*', true) => STAR_RUN,
        (b'*', false) => STARS,
        (b'_', true) => UNDERSCORE_RUN,
        (b'_', false) => UNDERSCORES,
        (b'~', _) => TILDES,
        _ => &[],
    }
}

/// Parse inline markup into a flat list of styled spans.
///
/// Nested delimiters combine: the style of an inner run is the union of every
/// enclosing delimiter's style. Unclosed or empty delimiters stay literal.
/// Adjacent runs with the same style are merged.
pub fn parse_inline(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    parse_into(text, TextStyle::plain(), &mut spans);
    coalesce(spans)
}

fn parse_into(text: &str, style: TextStyle, out: &mut Vec<InlineSpan>) {
    let bytes = text.as_bytes();
    let mut literal = String::new();
    let mut i = 0;

    'scan: while i < bytes.len() {
        let rest = &text[i..];

        match bytes[i] {
            b'\\' => {
                if let Some(next) = rest[1..].chars().next() {
                    if next.is_ascii_punctuation() {
                        literal.push(next);
                        i += 1 + next.len_utf8();
                        continue;
                    }
                }
            }
            b'!' => {
                if let Some(caps) = IMAGE_PATTERN.captures(rest) {
                    flush(&mut literal, style, out);
                    out.push(InlineSpan::Image {
                        alt: caps[1].to_string(),
                        path: caps[2].to_string(),
                    });
                    i += caps[0].len();
                    continue;
                }
            }
            b'[' => {
                if let Some(caps) = LINK_PATTERN.captures(rest) {
                    flush(&mut literal, style, out);
                    let url = caps[2].to_string();
                    let mut label = Vec::new();
                    parse_into(&caps[1], style, &mut label);
                    out.extend(label.into_iter().map(|span| match span {
                        InlineSpan::Text { text, style } => InlineSpan::Link {
                            text,
                            url: url.clone(),
                            style,
                        },
                        other => other,
                    }));
                    i += caps[0].len();
                    continue;
                }
            }
            b'`' => {
                let ticks = run_length(bytes, i, b'`');
                if let Some(end) = find_code_close(&bytes[i + ticks..], ticks) {
                    let code = &rest[ticks..ticks + end];
                    if !code.is_empty() {
                        flush(&mut literal, style, out);
                        out.push(InlineSpan::text(code, style.merge(TextStyle::code())));
                        i += ticks + end + ticks;
                        continue;
                    }
                }
                literal.push_str(&rest[..ticks]);
                i += ticks;
                continue;
            }
            b'*' | b'_' | b'~' => {
                let run = run_length(bytes, i, bytes[i]);
                for (delim, delim_style) in delimiters_for(bytes[i], run) {
                    if !rest.starts_with(delim) || !opens(text, i, delim) {
                        continue;
                    }
                    let body = &rest[delim.len()..];
                    if let Some(close) = find_closing(body, delim) {
                        flush(&mut literal, style, out);
                        parse_into(&body[..close], style.merge(*delim_style), out);
                        i += delim.len() * 2 + close;
                        continue 'scan;
                    }
                }
                // Unmatched: keep the whole delimiter run as text
                literal.push_str(&rest[..run]);
                i += run;
                continue;
            }
            _ => {}
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        literal.push(ch);
        i += ch.len_utf8();
    }

    flush(&mut literal, style, out);
}

fn flush(literal: &mut String, style: TextStyle, out: &mut Vec<InlineSpan>) {
    if !literal.is_empty() {
        out.push(InlineSpan::text(std::mem::take(literal), style));
    }
}

fn run_length(bytes: &[u8], start: usize, byte: u8) -> usize {
    bytes[start..].iter().take_while(|&&b| b == byte).count()
}

/// Whether the delimiter at `pos` can open a span.
///
/// The next character must not be whitespace, and underscore delimiters
/// never open inside a word.
fn opens(text: &str, pos: usize, delim: &str) -> bool {
    let after = text[pos + delim.len()..].chars().next();
    if after.map_or(true, char::is_whitespace) {
        return false;
    }
    if delim.starts_with('_') {
        if let Some(before) = text[..pos].chars().next_back() {
            if before.is_alphanumeric() {
                return false;
            }
        }
    }
    true
}

/// Offset of the closing delimiter within `body`, if any.
///
/// The closer sits at the end of its delimiter run, so `**a *b***` closes the
/// bold span after the italic one. A single-character delimiter counts the
/// spans opened inside its body and closes only once they are all closed, so
/// `*a **b***` closes bold then italic. Code spans and escapes are skipped.
fn find_closing(body: &str, delim: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    let marker = delim.as_bytes()[0];
    let mut open_single = 0usize;
    let mut open_double = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b == b'\\' {
            i += 1 + body[i + 1..].chars().next().map_or(0, char::len_utf8);
            continue;
        }
        if b == b'`' {
            let ticks = run_length(bytes, i, b'`');
            match find_code_close(&bytes[i + ticks..], ticks) {
                Some(end) => i += ticks + end + ticks,
                None => i += ticks,
            }
            continue;
        }
        if b != marker {
            i += 1;
            continue;
        }

        let run = run_length(bytes, i, marker);
        let end = i + run;

        if delim.len() > 1 {
            let close = end - delim.len().min(run);
            if run >= delim.len() && close > 0 && closes(body, close, delim) {
                return Some(close);
            }
            i = end;
            continue;
        }

        let before = body[..i].chars().next_back();
        let after = body[end..].chars().next();
        let right_flanking = before.map_or(false, |c| !c.is_whitespace());
        let left_flanking = after.map_or(false, |c| !c.is_whitespace())
            && !(marker == b'_' && before.map_or(false, char::is_alphanumeric));

        let mut remaining = run;
        if right_flanking {
            if open_single > 0 {
                open_single -= 1;
                remaining -= 1;
            }
            if remaining >= 2 && open_double > 0 {
                open_double -= 1;
                remaining -= 2;
            }
            if remaining == 1 && open_single == 0 && open_double == 0 && closes(body, end - 1, delim)
            {
                return Some(end - 1);
            }
        }
        if remaining > 0 && left_flanking {
            open_double += remaining / 2;
            open_single += remaining % 2;
        }
        i = end;
    }

    None
}

/// Whether the delimiter at `pos` can close a span: it must follow a
/// non-space character, and underscore delimiters must not precede a word
/// character.
fn closes(body: &str, pos: usize, delim: &str) -> bool {
    let before = body[..pos].chars().next_back();
    if before.map_or(true, char::is_whitespace) {
        return false;
    }
    if delim.starts_with('_') {
        if let Some(after) = body[pos + delim.len()..].chars().next() {
            if after.is_alphanumeric() {
                return false;
            }
        }
    }
    true
}

/// Offset of a backtick run of exactly `ticks` length.
fn find_code_close(bytes: &[u8], ticks: usize) -> Option<usize> {
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'`' {
            let run = run_length(bytes, i, b'`');
            if run == ticks {
                return Some(i);
            }
            i += run;
        } else {
            i += 1;
        }
    }
    None
}

/// Merge neighbouring runs that share a style (and URL, for links).
fn coalesce(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    let mut merged: Vec<InlineSpan> = Vec::with_capacity(spans.len());

    for span in spans {
        let empty = matches!(
            &span,
            InlineSpan::Text { text, .. } | InlineSpan::Link { text, .. } if text.is_empty()
        );
        if empty {
            continue;
        }
        if let Some(last) = merged.last_mut() {
            if extend_run(last, &span) {
                continue;
            }
        }
        merged.push(span);
    }

    merged
}

fn extend_run(prev: &mut InlineSpan, next: &InlineSpan) -> bool {
    match (prev, next) {
        (
            InlineSpan::Text { text, style },
            InlineSpan::Text {
                text: next_text,
                style: next_style,
            },
        ) if *style == *next_style => {
            text.push_str(next_text);
            true
        }
        (
            InlineSpan::Link { text, url, style },
            InlineSpan::Link {
                text: next_text,
                url: next_url,
                style: next_style,
            },
        ) if *url == *next_url && *style == *next_style => {
            text.push_str(next_text);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styled(text: &str, style: TextStyle) -> InlineSpan {
        InlineSpan::text(text, style)
    }

    #[test]
    fn test_plain_text_is_single_span() {
        assert_eq!(parse_inline("Hello world"), vec![InlineSpan::plain("Hello world")]);
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(
            parse_inline("**a** and *b*"),
            vec![
                styled("a", TextStyle::bold()),
                InlineSpan::plain(" and "),
                styled("b", TextStyle::italic()),
            ]
        );
    }

    #[test]
    fn test_triple_star_is_bold_italic() {
        assert_eq!(
            parse_inline("***both***"),
            vec![styled("both", TextStyle::bold().merge(TextStyle::italic()))]
        );
    }

    #[test]
    fn test_nested_styles_union() {
        assert_eq!(
            parse_inline("**bold _both_ end**"),
            vec![
                styled("bold ", TextStyle::bold()),
                styled("both", TextStyle::bold().merge(TextStyle::italic())),
                styled(" end", TextStyle::bold()),
            ]
        );
    }

    #[test]
    fn test_italic_closing_inside_bold_run() {
        assert_eq!(
            parse_inline("**bold *it***"),
            vec![
                styled("bold ", TextStyle::bold()),
                styled("it", TextStyle::bold().merge(TextStyle::italic())),
            ]
        );
    }

    #[test]
    fn test_italic_skips_double_stars() {
        assert_eq!(
            parse_inline("*a **b** c*"),
            vec![
                styled("a ", TextStyle::italic()),
                styled("b", TextStyle::italic().merge(TextStyle::bold())),
                styled(" c", TextStyle::italic()),
            ]
        );
    }

    #[test]
    fn test_bold_closing_inside_italic_run() {
        assert_eq!(
            parse_inline("*a **b***"),
            vec![
                styled("a ", TextStyle::italic()),
                styled("b", TextStyle::italic().merge(TextStyle::bold())),
            ]
        );
    }

    #[test]
    fn test_triple_run_splits_italic_around_bold() {
        assert_eq!(
            parse_inline("***a** b*"),
            vec![
                styled("a", TextStyle::italic().merge(TextStyle::bold())),
                styled(" b", TextStyle::italic()),
            ]
        );
    }

    #[test]
    fn test_triple_run_splits_bold_around_italic() {
        assert_eq!(
            parse_inline("***a* b**"),
            vec![
                styled("a", TextStyle::bold().merge(TextStyle::italic())),
                styled(" b", TextStyle::bold()),
            ]
        );
    }

    #[test]
    fn test_underline_closing_inside_underscore_italic() {
        assert_eq!(
            parse_inline("_a __b___"),
            vec![
                styled("a ", TextStyle::italic()),
                styled("b", TextStyle::italic().merge(TextStyle::underline())),
            ]
        );
    }

    #[test]
    fn test_escaped_star_does_not_close() {
        assert_eq!(
            parse_inline(r"*a \* b*"),
            vec![styled("a * b", TextStyle::italic())]
        );
    }

    #[test]
    fn test_underline_and_strike() {
        assert_eq!(
            parse_inline("__under__ ~~gone~~"),
            vec![
                styled("under", TextStyle::underline()),
                InlineSpan::plain(" "),
                styled("gone", TextStyle::strike()),
            ]
        );
    }

    #[test]
    fn test_unclosed_delimiters_stay_literal() {
        assert_eq!(parse_inline("**a"), vec![InlineSpan::plain("**a")]);
        assert_eq!(parse_inline("2 * 3 * 4"), vec![InlineSpan::plain("2 * 3 * 4")]);
        assert_eq!(parse_inline("****"), vec![InlineSpan::plain("****")]);
    }

    #[test]
    fn test_intraword_underscores_stay_literal() {
        assert_eq!(
            parse_inline("call snake_case_name now"),
            vec![InlineSpan::plain("call snake_case_name now")]
        );
    }

    #[test]
    fn test_code_is_literal() {
        assert_eq!(
            parse_inline("run `a *b* c` now"),
            vec![
                InlineSpan::plain("run "),
                styled("a *b* c", TextStyle::code()),
                InlineSpan::plain(" now"),
            ]
        );
    }

    #[test]
    fn test_code_inside_bold() {
        assert_eq!(
            parse_inline("**use `x`**"),
            vec![
                styled("use ", TextStyle::bold()),
                styled("x", TextStyle::bold().merge(TextStyle::code())),
            ]
        );
    }

    #[test]
    fn test_link_with_styled_label() {
        assert_eq!(
            parse_inline("see [the **docs**](https://example.com)!"),
            vec![
                InlineSpan::plain("see "),
                InlineSpan::Link {
                    text: "the ".to_string(),
                    url: "https://example.com".to_string(),
                    style: TextStyle::plain(),
                },
                InlineSpan::Link {
                    text: "docs".to_string(),
                    url: "https://example.com".to_string(),
                    style: TextStyle::bold(),
                },
                InlineSpan::plain("!"),
            ]
        );
    }

    #[test]
    fn test_image() {
        assert_eq!(
            parse_inline("Chart: ![sales](img/sales.png \"Q1\")"),
            vec![
                InlineSpan::plain("Chart: "),
                InlineSpan::Image {
                    alt: "sales".to_string(),
                    path: "img/sales.png".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_malformed_link_is_text() {
        assert_eq!(
            parse_inline("[broken](no close"),
            vec![InlineSpan::plain("[broken](no close")]
        );
    }

    #[test]
    fn test_escapes() {
        assert_eq!(
            parse_inline(r"\*not italic\*"),
            vec![InlineSpan::plain("*not italic*")]
        );
    }

    #[test]
    fn test_unicode_text_survives() {
        assert_eq!(
            parse_inline("**héllo** wörld"),
            vec![styled("héllo", TextStyle::bold()), InlineSpan::plain(" wörld")]
        );
    }
}
