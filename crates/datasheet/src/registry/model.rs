//! Registry record types.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DatasheetError, Result};
use crate::tags::TagMapping;

static MODEL_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{0,254}$").unwrap());

/// Check that `name` is usable as a model name.
///
/// Names start with a letter or digit and contain only letters, digits,
/// `.`, `_` and `-`, up to 255 characters.
pub fn validate_model_name(name: &str) -> Result<()> {
    if MODEL_NAME.is_match(name) {
        Ok(())
    } else {
        Err(DatasheetError::InvalidModelName(name.to_string()))
    }
}

/// Framework the model artifact was produced with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkInfo {
    /// Framework name (e.g., "ScikitLearn", "PyTorch", "Onnx").
    pub name: String,

    /// Framework version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl FrameworkInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// A request to register a new model version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub path: PathBuf,
    #[serde(default)]
    pub framework: FrameworkInfo,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: TagMapping,
}

impl Registration {
    /// Start a registration for the artifact at `path`.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            framework: FrameworkInfo::default(),
            description: String::new(),
            tags: TagMapping::new(),
        }
    }

    pub fn with_framework(mut self, framework: FrameworkInfo) -> Self {
        self.framework = framework;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replace all tags.
    pub fn with_tags(mut self, tags: TagMapping) -> Self {
        self.tags = tags;
        self
    }

    /// Add a single tag.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key, value);
        self
    }
}

/// A registered model version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelHandle {
    pub name: String,

    /// Version number, starting at 1 for each name.
    pub version: u32,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub framework: FrameworkInfo,

    /// Artifact path as given at registration.
    pub path: PathBuf,

    #[serde(default)]
    pub tags: TagMapping,

    pub registered_at: DateTime<Utc>,

    /// `sha256:<hex>` of the artifact, when computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

impl ModelHandle {
    /// Build the handle for `registration` at `version`.
    pub(crate) fn from_registration(
        registration: Registration,
        version: u32,
        digest: Option<String>,
    ) -> Self {
        Self {
            name: registration.name,
            version,
            description: registration.description,
            framework: registration.framework,
            path: registration.path,
            tags: registration.tags,
            registered_at: Utc::now(),
            digest,
        }
    }

    /// `name:version` identifier.
    pub fn id(&self) -> String {
        format!("{}:{}", self.name, self.version)
    }
}
