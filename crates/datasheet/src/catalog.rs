//! Catalog: registry plus renderer behind one API.

use std::sync::Arc;

use crate::error::Result;
use crate::registry::{InMemoryRegistry, ModelHandle, ModelRegistry, Registration};
use crate::render::{Datasheet, DatasheetRenderer, RenderConfig};
use crate::tags::TagMapping;

/// Configuration for a [`Catalog`].
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Renderer configuration.
    pub render: RenderConfig,
}

/// Registers models and renders their datasheets.
pub struct Catalog {
    registry: Arc<dyn ModelRegistry>,
    renderer: DatasheetRenderer,
}

impl Catalog {
    /// Create a catalog over `registry` with default configuration.
    pub fn new(registry: impl ModelRegistry + 'static) -> Self {
        Self::with_config(registry, CatalogConfig::default())
    }

    /// Create a catalog with custom configuration.
    pub fn with_config(registry: impl ModelRegistry + 'static, config: CatalogConfig) -> Self {
        Self::from_shared(Arc::new(registry), config)
    }

    /// Create a catalog over a registry that is shared elsewhere.
    pub fn from_shared(registry: Arc<dyn ModelRegistry>, config: CatalogConfig) -> Self {
        Self {
            registry,
            renderer: DatasheetRenderer::with_config(config.render),
        }
    }

    /// A catalog over a fresh in-memory registry.
    pub fn in_memory() -> Self {
        Self::new(InMemoryRegistry::new())
    }

    pub fn registry(&self) -> &dyn ModelRegistry {
        self.registry.as_ref()
    }

    pub fn renderer(&self) -> &DatasheetRenderer {
        &self.renderer
    }

    /// Register a new model version with its tags.
    pub fn register(&self, registration: Registration) -> Result<ModelHandle> {
        self.registry.register(registration)
    }

    /// Tags of the latest version of `name`.
    pub fn tags(&self, name: &str) -> Result<TagMapping> {
        Ok(self.registry.lookup(name)?.tags)
    }

    /// Render the datasheet of the latest version of `name`.
    pub fn datasheet(&self, name: &str) -> Result<Datasheet> {
        let handle = self.registry.lookup(name)?;
        Ok(self.render_handle(&handle))
    }

    /// Render the datasheet of a specific version.
    pub fn datasheet_version(&self, name: &str, version: u32) -> Result<Datasheet> {
        let handle = self.registry.lookup_version(name, version)?;
        Ok(self.render_handle(&handle))
    }

    /// Render the datasheet for an already fetched handle.
    pub fn render_handle(&self, handle: &ModelHandle) -> Datasheet {
        let sheet = self.renderer.render(&handle.tags);
        if !sheet.is_complete() {
            tracing::info!(
                model = %handle.id(),
                missing = sheet.missing_fields().len(),
                "datasheet rendered with missing fields"
            );
        }
        sheet
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::in_memory()
    }
}
