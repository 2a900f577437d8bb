//! Integration tests for datasheet rendering.

use datasheet::render::{fixed_headings, EMPTY_PARAGRAPH};
use datasheet::{get_datasheet, get_tag, DatasheetRenderer, RenderConfig, TagKey, TagMapping};

/// A fully tagged model, as a notebook would register it.
fn complete_tags() -> TagMapping {
    TagMapping::new()
        .with("title", "Diabetes Regression Model")
        .with("datasheet_description", "Predicts disease progression one year after baseline.")
        .with("details", "Ridge regression trained on ten baseline variables.")
        .with("date", "2021-03-01")
        .with("type", "Regression")
        .with("version", "1.0")
        .with("help", "https://example.com/ml-support")
        .with("usecase_primary", "Research on progression risk factors.")
        .with("usecase_secondary", "- Teaching material\n- Benchmark baseline")
        .with("usecase_outofscope", "Clinical decision making.")
        .with("dataset_description", "442 patients, ten features.")
        .with("motivation", "Standard public regression benchmark.")
        .with("caveats", "Small sample; **not** representative of all populations.")
}

/// Position of each needle in `haystack`, each searched after the previous one.
fn positions_in_order(haystack: &str, needles: &[String]) -> Option<Vec<usize>> {
    let mut from = 0;
    let mut found = Vec::new();
    for needle in needles {
        let at = haystack[from..].find(needle.as_str())? + from;
        found.push(at);
        from = at + needle.len();
    }
    Some(found)
}

fn heading_tags() -> Vec<String> {
    let mut tags = Vec::new();
    for heading in fixed_headings() {
        let level = match heading {
            "Model Details" | "Intended Uses" | "Evaluation Data" => 2,
            _ => 3,
        };
        tags.push(format!("<h{level}>{heading}</h{level}>"));
    }
    tags
}

// =============================================================================
// Missing fields
// =============================================================================

#[test]
fn test_empty_mapping_renders_every_heading_in_order() {
    let sheet = get_datasheet(&TagMapping::new());

    assert!(positions_in_order(sheet.html(), &heading_tags()).is_some());
    assert_eq!(sheet.missing_fields().len(), TagKey::ALL.len());
    assert!(!sheet.is_complete());
}

#[test]
fn test_missing_tag_lookup_returns_empty() {
    let tags = TagMapping::new().with("title", "T");
    for key in TagKey::ALL.iter().skip(1) {
        assert_eq!(get_tag(&tags, key.as_str()), "");
    }
    assert_eq!(get_tag(&tags, "not_a_field"), "");
}

#[test]
fn test_title_and_details_only() {
    let tags = TagMapping::new().with("title", "T").with("details", "D");
    let sheet = get_datasheet(&tags);
    let html = sheet.html();

    assert!(html.starts_with("<h1>T</h1>\n"));
    assert!(html.contains("<h2>Model Details</h2>\n<p>D</p>\n"));

    let title_at = html.find("<h1>T</h1>").unwrap();
    let details_at = html.find("<h2>Model Details</h2>").unwrap();
    assert!(title_at < details_at);

    // Every other field is an empty paragraph.
    assert_eq!(html.matches(EMPTY_PARAGRAPH).count(), 11);
    assert!(html.contains("<h3>Date</h3>\n<p></p>\n"));
    assert!(html.contains("<h3>Caveats</h3>\n<p></p>\n"));

    let missing: Vec<&str> = sheet.missing_fields().iter().map(|m| m.key.as_str()).collect();
    assert_eq!(missing.len(), 11);
    assert!(!missing.contains(&"title"));
    assert!(!missing.contains(&"details"));
    assert!(missing.contains(&"usecase_outofscope"));
}

#[test]
fn test_present_but_blank_is_empty_but_not_missing() {
    let tags = TagMapping::new().with("caveats", "   ");
    let sheet = get_datasheet(&tags);

    assert!(sheet.html().contains("<h3>Caveats</h3>\n<p></p>\n"));
    assert!(!sheet.missing_fields().iter().any(|m| m.key == "caveats"));
}

// =============================================================================
// Markup
// =============================================================================

#[test]
fn test_secondary_use_list_renders_as_list() {
    let tags = TagMapping::new().with("usecase_secondary", "- item one\n- item two");
    let sheet = get_datasheet(&tags);
    let html = sheet.html();

    assert!(html.contains("<ul>\n<li>item one</li>\n<li>item two</li>\n</ul>"));
    assert_eq!(html.matches("<li>").count(), 2);

    let list_at = html.find("<ul>").unwrap();
    let heading_at = html.find("<h3>Secondary Use Cases</h3>").unwrap();
    let next_at = html.find("<h3>Out-of-Scope Use Cases</h3>").unwrap();
    assert!(heading_at < list_at && list_at < next_at);
}

#[test]
fn test_help_url_renders_as_link() {
    let url = "https://example.com/ml-support";
    let sheet = get_datasheet(&TagMapping::new().with("help", url));

    let expected = format!("<h3>Help</h3>\n<p><a href=\"{url}\">{url}</a></p>");
    assert!(sheet.html().contains(&expected), "{}", sheet.html());
}

#[test]
fn test_emphasis_in_values() {
    let sheet = get_datasheet(&complete_tags());
    assert!(sheet.html().contains("<strong>not</strong>"));
}

#[test]
fn test_tables_follow_config() {
    let table = "| metric | value |\n|---|---|\n| r2 | 0.45 |";
    let tags = TagMapping::new().with("dataset_description", table);

    let with_tables = DatasheetRenderer::new().render(&tags);
    assert!(with_tables.html().contains("<table>"));

    let plain = DatasheetRenderer::with_config(RenderConfig::commonmark()).render(&tags);
    assert!(!plain.html().contains("<table>"));
}

#[test]
fn test_unterminated_html_blocks_keep_later_headings() {
    let values = [
        "<!-- internal note",
        "<script>",
        "<pre>",
        "<style>\nbody {}",
        "<textarea>",
        "<?php",
        "<!DOCTYPE",
        "<![CDATA[ raw",
        "Uses SHAP values.\n<!-- reviewer: check",
    ];

    for value in values {
        let sheet = get_datasheet(&TagMapping::new().with("details", value));
        assert!(
            positions_in_order(sheet.html(), &heading_tags()).is_some(),
            "{:?} hid a heading:\n{}",
            value,
            sheet.html()
        );
    }
}

#[test]
fn test_unterminated_comment_stays_a_comment() {
    let sheet = get_datasheet(&TagMapping::new().with("details", "<!-- internal note"));

    assert!(sheet.html().contains("<!-- internal note\n-->"));
    assert!(sheet.html().contains("<h3>Date</h3>"));
    assert_eq!(sheet.sections()[2].body, "<!-- internal note");
}

#[test]
fn test_nested_open_blocks_keep_later_headings() {
    let tags = TagMapping::new()
        .with("details", "- step one\n  ```\n  code")
        .with("motivation", "<div>\n<!--\n\n```");
    let sheet = get_datasheet(&tags);

    assert!(positions_in_order(sheet.html(), &heading_tags()).is_some());
    assert!(sheet.html().contains("<h3>Caveats</h3>"));
}

#[test]
fn test_title_ending_in_hash_is_kept() {
    let sheet = get_datasheet(&TagMapping::new().with("title", "Model #"));
    assert!(sheet.html().starts_with("<h1>Model #</h1>"));

    let sheet = get_datasheet(&TagMapping::new().with("title", "###"));
    assert!(sheet.html().starts_with("<h1>###</h1>"));
    assert_eq!(sheet.sections()[0].heading, "###");
}

// =============================================================================
// Document
// =============================================================================

#[test]
fn test_complete_mapping_has_no_missing_fields() {
    let sheet = get_datasheet(&complete_tags());

    assert!(sheet.is_complete());
    assert!(!sheet.html().contains(EMPTY_PARAGRAPH));
    assert_eq!(sheet.headings().next(), Some("Diabetes Regression Model"));
}

#[test]
fn test_rendering_is_idempotent() {
    let tags = complete_tags();
    let first = get_datasheet(&tags);
    let second = get_datasheet(&tags);

    assert_eq!(first.html(), second.html());
    assert_eq!(first.markdown(), second.markdown());
    assert_eq!(first, second);
}

#[test]
fn test_sections_carry_raw_values() {
    let sheet = get_datasheet(&complete_tags());
    let secondary = sheet
        .sections()
        .iter()
        .find(|s| s.field == Some(TagKey::UsecaseSecondary))
        .unwrap();

    assert_eq!(secondary.heading, "Secondary Use Cases");
    assert_eq!(secondary.level, 3);
    assert_eq!(secondary.body, "- Teaching material\n- Benchmark baseline");
}

#[test]
fn test_unknown_tags_are_ignored() {
    let tags = complete_tags().with("framework", "sklearn");
    assert_eq!(get_datasheet(&tags), get_datasheet(&complete_tags()));
}

#[test]
fn test_html_page_wraps_fragment() {
    let sheet = get_datasheet(&complete_tags());
    let page = sheet.to_html_page("Diabetes Regression Model");

    assert!(page.contains("<title>Diabetes Regression Model</title>"));
    assert!(page.contains(sheet.html()));
    assert!(page.trim_end().ends_with("</html>"));
}
