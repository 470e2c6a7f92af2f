//! # PageCraft Export
//!
//! Static HTML export for PageCraft designs. Produces one self-contained
//! `.html` document per design: positioned fragments per element, inline
//! styles converted from the design's camelCase style maps, and page
//! navigation for multi-page designs.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod html;

pub use error::{ExportError, ExportResult};
pub use html::{ExportConfig, HtmlExporter};

/// Export crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
