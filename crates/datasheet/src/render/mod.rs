//! Datasheet rendering.
//!
//! The renderer fills a fixed template of headings and paragraphs from a
//! [`TagMapping`](crate::TagMapping), assembles the whole document as
//! markdown, and converts it to HTML in one pass.
//!
//! ```text
//! # <title>
//! <datasheet_description>
//! ## Model Details        <details>
//! ### Date / Type / Version / Help
//! ## Intended Uses
//! ### Primary Use Case / Secondary Use Cases / Out-of-Scope Use Cases
//! ## Evaluation Data
//! ### Dataset Description / Motivation / Caveats
//! ```
//!
//! # Example
//!
//! ```
//! use datasheet::{get_datasheet, TagMapping};
//!
//! let tags = TagMapping::new()
//!     .with("title", "Churn classifier")
//!     .with("details", "Gradient boosted trees.");
//!
//! let sheet = get_datasheet(&tags);
//! assert!(sheet.html().contains("<h1>Churn classifier</h1>"));
//! assert_eq!(sheet.missing_fields().len(), 11);
//! ```

mod config;
mod document;
mod renderer;
mod template;

pub use config::RenderConfig;
pub use document::{Datasheet, SectionBlock};
pub use renderer::{get_datasheet, DatasheetRenderer, EMPTY_PARAGRAPH};
pub use template::fixed_headings;
