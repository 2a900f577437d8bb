//! Registry trait.

use crate::error::{DatasheetError, Result};

use super::model::{ModelHandle, Registration};

/// Storage for versioned model records and their tags.
///
/// Implementations must be thread-safe (Send + Sync) so a catalog can be
/// shared.
pub trait ModelRegistry: Send + Sync {
    /// Register a new version of `registration.name`.
    ///
    /// The first registration of a name gets version 1; each later one gets
    /// the next number.
    fn register(&self, registration: Registration) -> Result<ModelHandle>;

    /// Fetch a specific version.
    ///
    /// Fails with `ModelNotFound` for an unknown name and `VersionNotFound`
    /// for an unknown version of a known name.
    fn lookup_version(&self, name: &str, version: u32) -> Result<ModelHandle>;

    /// Registered versions of `name`, ascending. Empty for unknown names.
    fn versions(&self, name: &str) -> Result<Vec<u32>>;

    /// Registered model names, sorted.
    fn models(&self) -> Result<Vec<String>>;

    /// Name of this backend (for logging/debugging).
    fn name(&self) -> &str;

    /// Fetch the latest version of `name`.
    fn lookup(&self, name: &str) -> Result<ModelHandle> {
        let latest = self
            .versions(name)?
            .into_iter()
            .max()
            .ok_or_else(|| DatasheetError::ModelNotFound {
                name: name.to_string(),
            })?;

        self.lookup_version(name, latest)
    }
}
