//! Rendered datasheet document.

use serde::Serialize;

use crate::tags::{MissingField, TagKey};

/// One heading and its paragraph, as filled in from the tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionBlock {
    /// Heading level (1 for the title).
    pub level: u8,
    /// Heading text after substitution.
    pub heading: String,
    /// Paragraph text, empty when the field was missing or blank.
    pub body: String,
    /// Field the body was read from, if the block has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<TagKey>,
}

/// A rendered datasheet.
///
/// Built once per render call and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Datasheet {
    sections: Vec<SectionBlock>,
    markdown: String,
    html: String,
    missing: Vec<MissingField>,
}

impl Datasheet {
    pub(crate) fn new(
        sections: Vec<SectionBlock>,
        markdown: String,
        html: String,
        missing: Vec<MissingField>,
    ) -> Self {
        Self {
            sections,
            markdown,
            html,
            missing,
        }
    }

    /// Section blocks in document order.
    pub fn sections(&self) -> &[SectionBlock] {
        &self.sections
    }

    /// Heading texts in document order.
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.heading.as_str())
    }

    /// The assembled markdown source.
    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    /// The HTML fragment produced from the markdown.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Fields that were absent from the tag mapping.
    pub fn missing_fields(&self) -> &[MissingField] {
        &self.missing
    }

    /// True when every field was present in the tag mapping.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Wrap the fragment in a standalone HTML page.
    pub fn to_html_page(&self, title: &str) -> String {
        let mut page = String::with_capacity(self.html.len() + 256);
        page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        page.push_str("<meta charset=\"utf-8\">\n");
        page.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        page.push_str("</head>\n<body>\n");
        page.push_str(&self.html);
        page.push_str("</body>\n</html>\n");
        page
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Datasheet {
        Datasheet::new(
            vec![SectionBlock {
                level: 1,
                heading: "T".to_string(),
                body: String::new(),
                field: Some(TagKey::DatasheetDescription),
            }],
            "# T\n\n<p></p>\n\n".to_string(),
            "<h1>T</h1>\n<p></p>\n".to_string(),
            vec![MissingField {
                key: "datasheet_description".to_string(),
            }],
        )
    }

    #[test]
    fn test_accessors() {
        let sheet = sample();
        assert_eq!(sheet.headings().collect::<Vec<_>>(), vec!["T"]);
        assert!(!sheet.is_complete());
        assert_eq!(sheet.missing_fields()[0].key, "datasheet_description");
    }

    #[test]
    fn test_html_page_escapes_title() {
        let page = sample().to_html_page("A <b> & \"c\"");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>A &lt;b&gt; &amp; &quot;c&quot;</title>"));
        assert!(page.contains("<body>\n<h1>T</h1>\n<p></p>\n</body>"));
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["sections"][0]["heading"], "T");
        assert_eq!(json["sections"][0]["field"], "datasheet_description");
        assert_eq!(json["missing"][0]["key"], "datasheet_description");
    }
}
