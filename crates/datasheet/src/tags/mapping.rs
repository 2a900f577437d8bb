//! Tag mapping and lookup.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{DatasheetError, Result};

use super::key::TagKey;

/// Free-text tags attached to one model version.
///
/// Keys keep their insertion order so a mapping written out reads back the
/// way it was registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagMapping(IndexMap<String, String>);

impl TagMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a tag, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up a tag. `None` means the key is absent; the caller picks the default.
    pub fn lookup(&self, key: impl AsRef<str>) -> Option<&str> {
        self.0.get(key.as_ref()).map(String::as_str)
    }

    /// Returns true if the key is present (even with an empty value).
    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.0.contains_key(key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys that are not part of the datasheet vocabulary.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|key| !TagKey::is_known(key))
            .collect()
    }

    /// Vocabulary keys with no entry in this mapping.
    pub fn missing_keys(&self) -> Vec<TagKey> {
        TagKey::ALL
            .iter()
            .copied()
            .filter(|key| !self.contains(key))
            .collect()
    }
}

impl From<IndexMap<String, String>> for TagMapping {
    fn from(map: IndexMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for TagMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V> Extend<(K, V)> for TagMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

/// A requested field that was absent from the mapping.
///
/// Rendering records these instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingField {
    pub key: String,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing datasheet field '{}'", self.key)
    }
}

/// Look up a tag, or log a warning and return `""` if it is absent.
pub fn get_tag<'a>(tags: &'a TagMapping, key: &str) -> &'a str {
    match tags.lookup(key) {
        Some(value) => value,
        None => {
            tracing::warn!(field = key, "tag not found, using empty value");
            ""
        }
    }
}

/// Parse a `key=value` assignment. The value may itself contain `=`.
pub fn parse_tag_arg(arg: &str) -> Result<(String, String)> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| DatasheetError::InvalidTag(arg.to_string()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(DatasheetError::InvalidTag(arg.to_string()));
    }

    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_present_and_absent() {
        let tags = TagMapping::new().with("title", "Fraud model");

        assert_eq!(tags.lookup("title"), Some("Fraud model"));
        assert_eq!(tags.lookup(TagKey::Title), Some("Fraud model"));
        assert_eq!(tags.lookup("caveats"), None);
    }

    #[test]
    fn test_get_tag_defaults_to_empty() {
        let tags = TagMapping::new().with("date", "2021-03-01");

        assert_eq!(get_tag(&tags, "date"), "2021-03-01");
        assert_eq!(get_tag(&tags, "help"), "");
        assert_eq!(get_tag(&TagMapping::new(), "anything"), "");
    }

    #[test]
    fn test_present_but_empty_is_not_missing() {
        let tags = TagMapping::new().with("caveats", "");

        assert!(tags.contains("caveats"));
        assert_eq!(tags.lookup("caveats"), Some(""));
        assert!(!tags.missing_keys().contains(&TagKey::Caveats));
    }

    #[test]
    fn test_unknown_and_missing_keys() {
        let tags = TagMapping::new()
            .with("title", "T")
            .with("framework", "onnx");

        assert_eq!(tags.unknown_keys(), vec!["framework"]);
        let missing = tags.missing_keys();
        assert_eq!(missing.len(), 12);
        assert!(!missing.contains(&TagKey::Title));
    }

    #[test]
    fn test_insertion_order_preserved_in_json() {
        let tags: TagMapping = [("zeta", "1"), ("alpha", "2")].into_iter().collect();
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"{"zeta":"1","alpha":"2"}"#);

        let back: TagMapping = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tags);
    }

    #[test]
    fn test_parse_tag_arg() {
        assert_eq!(
            parse_tag_arg("help=https://example.com/?a=b").unwrap(),
            ("help".to_string(), "https://example.com/?a=b".to_string())
        );
        assert_eq!(
            parse_tag_arg("caveats=").unwrap(),
            ("caveats".to_string(), String::new())
        );
        assert!(matches!(
            parse_tag_arg("no-equals"),
            Err(DatasheetError::InvalidTag(_))
        ));
        assert!(parse_tag_arg("=value").is_err());
    }

    #[test]
    fn test_missing_field_display() {
        let missing = MissingField {
            key: "motivation".to_string(),
        };
        assert_eq!(missing.to_string(), "missing datasheet field 'motivation'");
    }
}
