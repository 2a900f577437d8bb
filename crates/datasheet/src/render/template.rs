//! The fixed datasheet layout.

use crate::tags::TagKey;

/// Where a block's heading text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeadingText {
    Fixed(&'static str),
    Tag(TagKey),
}

/// One heading plus an optional field body.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TemplateBlock {
    pub level: u8,
    pub heading: HeadingText,
    pub body: Option<TagKey>,
}

const fn block(level: u8, heading: &'static str, body: Option<TagKey>) -> TemplateBlock {
    TemplateBlock {
        level,
        heading: HeadingText::Fixed(heading),
        body,
    }
}

/// Blocks in render order. Every block is always emitted.
pub(crate) const TEMPLATE: &[TemplateBlock] = &[
    TemplateBlock {
        level: 1,
        heading: HeadingText::Tag(TagKey::Title),
        body: Some(TagKey::DatasheetDescription),
    },
    block(2, "Model Details", Some(TagKey::Details)),
    block(3, "Date", Some(TagKey::Date)),
    block(3, "Type", Some(TagKey::Type)),
    block(3, "Version", Some(TagKey::Version)),
    block(3, "Help", Some(TagKey::Help)),
    block(2, "Intended Uses", None),
    block(3, "Primary Use Case", Some(TagKey::UsecasePrimary)),
    block(3, "Secondary Use Cases", Some(TagKey::UsecaseSecondary)),
    block(3, "Out-of-Scope Use Cases", Some(TagKey::UsecaseOutOfScope)),
    block(2, "Evaluation Data", None),
    block(3, "Dataset Description", Some(TagKey::DatasetDescription)),
    block(3, "Motivation", Some(TagKey::Motivation)),
    block(3, "Caveats", Some(TagKey::Caveats)),
];

/// Headings that do not depend on tag values, in order.
pub fn fixed_headings() -> Vec<&'static str> {
    TEMPLATE
        .iter()
        .filter_map(|block| match block.heading {
            HeadingText::Fixed(text) => Some(text),
            HeadingText::Tag(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_is_read_once() {
        let mut read: Vec<TagKey> = Vec::new();
        for block in TEMPLATE {
            if let HeadingText::Tag(key) = block.heading {
                read.push(key);
            }
            if let Some(key) = block.body {
                read.push(key);
            }
        }

        assert_eq!(read, TagKey::ALL.to_vec());
    }

    #[test]
    fn test_fixed_headings_order() {
        assert_eq!(
            fixed_headings(),
            vec![
                "Model Details",
                "Date",
                "Type",
                "Version",
                "Help",
                "Intended Uses",
                "Primary Use Case",
                "Secondary Use Cases",
                "Out-of-Scope Use Cases",
                "Evaluation Data",
                "Dataset Description",
                "Motivation",
                "Caveats",
            ]
        );
    }
}
