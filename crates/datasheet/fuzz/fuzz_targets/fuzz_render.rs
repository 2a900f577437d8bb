//! Fuzz target for datasheet rendering.
//!
//! This fuzzer tests that the renderer:
//! 1. Never panics on any tag values, including hostile markup
//! 2. Always emits every template block
//! 3. Never lets a value hide the last heading in the HTML

#![no_main]

use libfuzzer_sys::fuzz_target;
use datasheet::{get_datasheet, TagKey, TagMapping};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs
    if data.len() > 10_000 {
        return;
    }

    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    // Either a JSON tag object, or raw text used as every field value
    let tags: TagMapping = serde_json::from_str(content).unwrap_or_else(|_| {
        TagKey::ALL
            .iter()
            .map(|key| (key.as_str(), content))
            .collect()
    });

    let sheet = get_datasheet(&tags);
    assert_eq!(sheet.sections().len(), 14);
    assert!(sheet.html().contains("<h3>Caveats</h3>"));
});
