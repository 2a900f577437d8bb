//! Model registry: versioned model records carrying tags.
//!
//! The registry is the tag store the datasheet is rendered from. Two
//! backends are provided:
//!
//! - [`FileRegistry`] - one JSON record per version under a root directory
//! - [`InMemoryRegistry`] - process-local, for tests and scripts
//!
//! # Example
//!
//! ```no_run
//! use datasheet::registry::{FileRegistry, FrameworkInfo, ModelRegistry, Registration};
//!
//! let registry = FileRegistry::open(".datasheet/registry");
//! let handle = registry
//!     .register(
//!         Registration::new("credit-risk", "outputs/model.pkl")
//!             .with_framework(FrameworkInfo::new("ScikitLearn").with_version("1.3.0"))
//!             .with_tag("title", "Credit Risk Model"),
//!     )
//!     .unwrap();
//!
//! println!("Registered {}", handle.id());
//! let latest = registry.lookup("credit-risk").unwrap();
//! println!("Title: {:?}", latest.tags.lookup("title"));
//! ```

mod file;
mod memory;
mod model;
mod provider;

pub use file::{artifact_digest, FileRegistry, RegistryConfig, DEFAULT_REGISTRY_DIR};
pub use memory::InMemoryRegistry;
pub use model::{validate_model_name, FrameworkInfo, ModelHandle, Registration};
pub use provider::ModelRegistry;
