//! Fuzz target for `key=value` tag argument parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use datasheet::parse_tag_arg;

fuzz_target!(|data: &[u8]| {
    if let Ok(arg) = std::str::from_utf8(data) {
        if let Ok((key, value)) = parse_tag_arg(arg) {
            assert!(!key.is_empty());
            assert!(arg.ends_with(&value));
        }
    }
});
