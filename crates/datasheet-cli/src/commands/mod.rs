//! CLI command implementations.

pub mod list;
pub mod register;
pub mod show;
pub mod tags;

use datasheet::{ModelHandle, ModelRegistry};

/// Fetch a specific version, or the latest when none is given.
pub(crate) fn fetch(
    registry: &dyn ModelRegistry,
    name: &str,
    version: Option<u32>,
) -> datasheet::Result<ModelHandle> {
    match version {
        Some(v) => registry.lookup_version(name, v),
        None => registry.lookup(name),
    }
}
