//! In-memory registry for tests and notebooks.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::{DatasheetError, Result};

use super::model::{validate_model_name, ModelHandle, Registration};
use super::provider::ModelRegistry;

/// Registry that keeps every version in memory.
///
/// Does not touch the filesystem: artifact paths are recorded as given and
/// no digest is computed.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    models: RwLock<BTreeMap<String, Vec<ModelHandle>>>,
}

impl InMemoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> DatasheetError {
    DatasheetError::Registry("registry lock poisoned".to_string())
}

impl ModelRegistry for InMemoryRegistry {
    fn register(&self, registration: Registration) -> Result<ModelHandle> {
        validate_model_name(&registration.name)?;

        let mut models = self.models.write().map_err(|_| poisoned())?;
        let versions = models.entry(registration.name.clone()).or_default();
        let version = versions.last().map(|h| h.version + 1).unwrap_or(1);

        let handle = ModelHandle::from_registration(registration, version, None);
        versions.push(handle.clone());

        tracing::debug!(model = %handle.name, version, "registered model in memory");
        Ok(handle)
    }

    fn lookup_version(&self, name: &str, version: u32) -> Result<ModelHandle> {
        let models = self.models.read().map_err(|_| poisoned())?;
        let versions = models.get(name).ok_or_else(|| DatasheetError::ModelNotFound {
            name: name.to_string(),
        })?;

        versions
            .iter()
            .find(|h| h.version == version)
            .cloned()
            .ok_or_else(|| DatasheetError::VersionNotFound {
                name: name.to_string(),
                version,
            })
    }

    fn versions(&self, name: &str) -> Result<Vec<u32>> {
        let models = self.models.read().map_err(|_| poisoned())?;
        Ok(models
            .get(name)
            .map(|versions| versions.iter().map(|h| h.version).collect())
            .unwrap_or_default())
    }

    fn models(&self) -> Result<Vec<String>> {
        let models = self.models.read().map_err(|_| poisoned())?;
        Ok(models.keys().cloned().collect())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
