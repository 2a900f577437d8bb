//! Fills the datasheet template from a tag mapping.

use once_cell::sync::Lazy;
use pulldown_cmark::{html, Event, HeadingLevel, Parser, Tag};
use regex::Regex;

use crate::tags::{get_tag, MissingField, TagKey, TagMapping};

use super::config::RenderConfig;
use super::document::{Datasheet, SectionBlock};
use super::template::{HeadingText, TEMPLATE};

/// Markup emitted for a field with no content.
pub const EMPTY_PARAGRAPH: &str = "<p></p>";

/// A value that is nothing but one URL.
static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(?:https?|ftp)://|mailto:)[^\s<>]+$").unwrap());

/// Renders tag mappings into datasheets.
///
/// Rendering never fails: a missing field becomes an empty paragraph and is
/// listed in [`Datasheet::missing_fields`].
#[derive(Debug, Clone, Default)]
pub struct DatasheetRenderer {
    config: RenderConfig,
}

impl DatasheetRenderer {
    /// Create a renderer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with custom configuration.
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a datasheet from `tags`.
    pub fn render(&self, tags: &TagMapping) -> Datasheet {
        let mut sections = Vec::with_capacity(TEMPLATE.len());
        let mut missing = Vec::new();
        let mut markdown = String::new();

        for block in TEMPLATE {
            let heading = match block.heading {
                HeadingText::Fixed(text) => text.to_string(),
                HeadingText::Tag(key) => single_line(read_field(tags, key, &mut missing)),
            };
            push_heading(&mut markdown, block.level, &heading);

            let body = match block.body {
                Some(key) => {
                    let value = read_field(tags, key, &mut missing);
                    markdown.push_str(&self.body_markup(value));
                    markdown.push_str("\n\n");
                    value.to_string()
                }
                None => String::new(),
            };

            sections.push(SectionBlock {
                level: block.level,
                heading,
                body,
                field: block.body,
            });
        }

        let html = self.to_html(&markdown);

        tracing::debug!(
            sections = sections.len(),
            missing = missing.len(),
            bytes = html.len(),
            "rendered datasheet"
        );

        Datasheet::new(sections, markdown, html, missing)
    }

    /// Markup for one field body.
    fn body_markup(&self, value: &str) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return EMPTY_PARAGRAPH.to_string();
        }

        if self.config.autolink_urls && URL_PATTERN.is_match(trimmed) {
            return format!("<{}>", trimmed);
        }

        let body = normalize_line_endings(value.trim_end());
        let closed = close_open_blocks(&body);
        if self.keeps_next_heading(&closed) {
            return closed;
        }

        tracing::debug!(bytes = body.len(), "field markup left a block open, rendering as code");
        literal_block(&body)
    }

    /// Whether a heading placed after `body` still parses as a top-level
    /// heading, i.e. the body leaves no block open.
    fn keeps_next_heading(&self, body: &str) -> bool {
        let doc = format!("{}\n\n# end\n", body);
        let mut depth = 0usize;
        let mut last_top_is_heading = false;

        for event in Parser::new_ext(&doc, self.config.markup_options()) {
            match event {
                Event::Start(tag) => {
                    if depth == 0 {
                        last_top_is_heading =
                            matches!(tag, Tag::Heading { level: HeadingLevel::H1, .. });
                    }
                    depth += 1;
                }
                Event::End(_) => depth = depth.saturating_sub(1),
                _ => {}
            }
        }

        last_top_is_heading
    }

    /// Single markup pass over the whole assembled document.
    fn to_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.config.markup_options());
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

/// Render with the default configuration.
pub fn get_datasheet(tags: &TagMapping) -> Datasheet {
    DatasheetRenderer::new().render(tags)
}

fn read_field<'a>(tags: &'a TagMapping, key: TagKey, missing: &mut Vec<MissingField>) -> &'a str {
    if !tags.contains(key) {
        missing.push(MissingField {
            key: key.as_str().to_string(),
        });
    }
    get_tag(tags, key.as_str())
}

fn push_heading(markdown: &mut String, level: u8, text: &str) {
    for _ in 0..level {
        markdown.push('#');
    }
    if !text.is_empty() {
        markdown.push(' ');
        markdown.push_str(&escape_closing_hashes(text));
    }
    markdown.push_str("\n\n");
}

/// A trailing `#` run would be read as the heading's closing sequence.
fn escape_closing_hashes(text: &str) -> String {
    let kept = text.trim_end_matches('#');
    if kept.len() == text.len() {
        return text.to_string();
    }
    format!("{}\\{}", kept, &text[kept.len()..])
}

/// Headings are one line; fold any line breaks into spaces.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// CommonMark treats a lone `\r` as a line ending too.
fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Raw-text HTML blocks and the end tag that closes each.
const RAW_TEXT_BLOCKS: [(&str, &str); 4] = [
    ("script", "</script>"),
    ("pre", "</pre>"),
    ("style", "</style>"),
    ("textarea", "</textarea>"),
];

/// A block that runs until an explicit closing line, not a blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenBlock {
    Fence { indent: usize, marker: char, run: usize },
    Html { terminator: &'static str },
}

/// Close a code fence or HTML block left open by a field value so it cannot
/// swallow the headings that follow it.
fn close_open_blocks(body: &str) -> String {
    let mut open: Option<OpenBlock> = None;

    for line in body.lines() {
        match open {
            Some(OpenBlock::Fence { marker, run, .. }) => {
                if let Some((_, rest)) = block_start(line) {
                    let closing = rest.chars().take_while(|c| *c == marker).count();
                    if closing >= run && rest[closing..].trim().is_empty() {
                        open = None;
                    }
                }
            }
            Some(OpenBlock::Html { terminator }) => {
                if contains_ignore_case(line, terminator) {
                    open = None;
                }
            }
            None => {
                let Some((indent, rest)) = block_start(line) else {
                    continue;
                };
                if let Some((marker, run)) = fence_opener(rest) {
                    open = Some(OpenBlock::Fence { indent, marker, run });
                } else if let Some((opener, terminator)) = html_opener(rest) {
                    if !contains_ignore_case(&rest[opener..], terminator) {
                        open = Some(OpenBlock::Html { terminator });
                    }
                }
            }
        }
    }

    match open {
        Some(OpenBlock::Fence { indent, marker, run }) => {
            let fence: String = std::iter::repeat_n(marker, run).collect();
            format!("{}\n{}{}", body, " ".repeat(indent), fence)
        }
        Some(OpenBlock::Html { terminator }) => format!("{}\n{}", body, terminator),
        None => body.to_string(),
    }
}

/// Strip up to three spaces of indentation. More than that is indented code.
fn block_start(line: &str) -> Option<(usize, &str)> {
    let indent = line.bytes().take_while(|b| *b == b' ').count();
    let rest = &line[indent..];
    if indent > 3 || rest.starts_with('\t') {
        None
    } else {
        Some((indent, rest))
    }
}

fn fence_opener(rest: &str) -> Option<(char, usize)> {
    let marker = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let run = rest.chars().take_while(|c| *c == marker).count();
    if run < 3 {
        return None;
    }
    // A backtick fence's info string may not contain backticks.
    if marker == '`' && rest[run..].contains('`') {
        return None;
    }
    Some((marker, run))
}

/// Opener length and terminator of an HTML block that ends at a token.
fn html_opener(rest: &str) -> Option<(usize, &'static str)> {
    if rest.starts_with("<!--") {
        return Some((4, "-->"));
    }
    if rest.starts_with("<![CDATA[") {
        return Some((9, "]]>"));
    }
    if rest.starts_with("<?") {
        return Some((2, "?>"));
    }

    let after = rest.strip_prefix('<')?;
    if let Some(decl) = after.strip_prefix('!') {
        return decl
            .starts_with(|c: char| c.is_ascii_alphabetic())
            .then_some((2, ">"));
    }

    RAW_TEXT_BLOCKS.iter().find_map(|&(tag, terminator)| {
        let name = after.get(..tag.len())?;
        if !name.eq_ignore_ascii_case(tag) {
            return None;
        }
        match after[tag.len()..].chars().next() {
            None | Some('>') => Some((1 + tag.len(), terminator)),
            Some(c) if c.is_whitespace() => Some((1 + tag.len(), terminator)),
            _ => None,
        }
    })
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_ascii_lowercase().contains(needle)
}

/// Fenced code block that no line of `body` can close.
fn literal_block(body: &str) -> String {
    let longest = body
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest.max(2) + 1);
    format!("{}\n{}\n{}", fence, body, fence)
}
