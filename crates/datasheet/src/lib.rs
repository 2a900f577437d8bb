//! Datasheet: model documentation rendered from registry tags.
//!
//! A model is registered with a set of free-text tags (title, intended uses,
//! evaluation data, caveats, ...). A datasheet is produced by reading those
//! tags into a fixed template and converting the result to HTML.
//!
//! # Core Principles
//!
//! - **Never fails on content**: a missing tag renders as an empty paragraph
//!   and is reported as a diagnostic
//! - **Explicit inputs**: the renderer reads only the tag mapping it is given
//! - **Deterministic**: the same tags always produce the same document
//!
//! # Example
//!
//! ```
//! use datasheet::{Catalog, Registration};
//!
//! let catalog = Catalog::in_memory();
//! catalog
//!     .register(
//!         Registration::new("credit-risk", "outputs/model.pkl")
//!             .with_tag("title", "Credit Risk Model")
//!             .with_tag("help", "https://example.com/support"),
//!     )
//!     .unwrap();
//!
//! let sheet = catalog.datasheet("credit-risk").unwrap();
//! assert!(sheet.html().contains("<h1>Credit Risk Model</h1>"));
//! println!("Missing: {}", sheet.missing_fields().len());
//! ```

pub mod error;
pub mod registry;
pub mod render;
pub mod tags;

mod catalog;

pub use crate::catalog::{Catalog, CatalogConfig};
pub use error::{DatasheetError, Result};
pub use registry::{
    FileRegistry, FrameworkInfo, InMemoryRegistry, ModelHandle, ModelRegistry, Registration,
    RegistryConfig,
};
pub use render::{get_datasheet, Datasheet, DatasheetRenderer, RenderConfig, SectionBlock};
pub use tags::{get_tag, parse_tag_arg, MissingField, TagKey, TagMapping};
