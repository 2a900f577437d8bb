//! Model tags: the fixed field vocabulary, the tag mapping, and lookup
//! with an empty-string default.

mod key;
mod mapping;

pub use key::TagKey;
pub use mapping::{get_tag, parse_tag_arg, MissingField, TagMapping};
