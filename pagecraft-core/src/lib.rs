//! # PageCraft Core
//!
//! Headless page-builder logic: the element and page model, selection, drag
//! gestures, snapshot-based undo/redo, and the design file schema.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               pagecraft-core                │
//! ├─────────────────────────────────────────────┤
//! │  Element Store   │  Drag Controller         │
//! │  - Elements      │  - Grab offsets          │
//! │  - Pages         │  - Clamp + grid snap     │
//! │  - Kind registry │  - Draft overlay         │
//! ├─────────────────────────────────────────────┤
//! │  History Stack   │  Design Schema           │
//! │  - Snapshots     │  - Save/load JSON        │
//! │  - Undo/redo     │  - Full-parse-first      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! All operations are synchronous and in-memory; the only fallible boundary
//! is design file parsing, which never leaves the editor in a partial state.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod drag;
pub mod editor;
pub mod element;
pub mod error;
pub mod history;
pub mod page;
pub mod registry;
pub mod schema;
pub mod viewport;

pub use drag::{clamp_position, snap_to_grid, DragGesture};
pub use editor::{Editor, ReorderDirection};
pub use element::{Element, ElementId, ElementKind, Position, StyleMap, StyleValue};
pub use error::{BuilderError, BuilderResult};
pub use history::{History, Snapshot};
pub use page::{Document, Page, PageId, DEFAULT_CANVAS_HEIGHT};
pub use registry::{defaults, KindDefaults, ELEMENT_HEIGHT_ALLOWANCE};
pub use schema::{DesignDocument, DEFAULT_DESIGN_FILENAME, DESIGN_VERSION};
pub use viewport::{rescale_positions, Viewport};

/// Core crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
