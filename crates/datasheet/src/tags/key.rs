//! The fixed vocabulary of datasheet tag names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A known datasheet field name.
///
/// Registries may hold any key; these are the ones the datasheet template
/// reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKey {
    /// Document heading.
    Title,
    /// Paragraph under the title.
    DatasheetDescription,
    /// Free-text model details.
    Details,
    /// Model date.
    Date,
    /// Model type or architecture.
    Type,
    /// Model version as written by its authors.
    Version,
    /// Help contact, usually a URL or address.
    Help,
    /// Primary intended use.
    UsecasePrimary,
    /// Secondary intended uses.
    UsecaseSecondary,
    /// Uses that are out of scope.
    #[serde(rename = "usecase_outofscope")]
    UsecaseOutOfScope,
    /// Evaluation dataset description.
    DatasetDescription,
    /// Motivation for the evaluation data.
    Motivation,
    /// Known caveats.
    Caveats,
}

impl TagKey {
    /// Every known key, in datasheet order.
    pub const ALL: [TagKey; 13] = [
        TagKey::Title,
        TagKey::DatasheetDescription,
        TagKey::Details,
        TagKey::Date,
        TagKey::Type,
        TagKey::Version,
        TagKey::Help,
        TagKey::UsecasePrimary,
        TagKey::UsecaseSecondary,
        TagKey::UsecaseOutOfScope,
        TagKey::DatasetDescription,
        TagKey::Motivation,
        TagKey::Caveats,
    ];

    /// The tag name as stored in the registry.
    pub fn as_str(&self) -> &'static str {
        match self {
            TagKey::Title => "title",
            TagKey::DatasheetDescription => "datasheet_description",
            TagKey::Details => "details",
            TagKey::Date => "date",
            TagKey::Type => "type",
            TagKey::Version => "version",
            TagKey::Help => "help",
            TagKey::UsecasePrimary => "usecase_primary",
            TagKey::UsecaseSecondary => "usecase_secondary",
            TagKey::UsecaseOutOfScope => "usecase_outofscope",
            TagKey::DatasetDescription => "dataset_description",
            TagKey::Motivation => "motivation",
            TagKey::Caveats => "caveats",
        }
    }

    /// Returns true if `key` names one of the known fields.
    pub fn is_known(key: &str) -> bool {
        key.parse::<TagKey>().is_ok()
    }
}

impl FromStr for TagKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TagKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Unknown datasheet field: {}", s))
    }
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for TagKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
