//! Pages and the multi-page design document.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::element::{Element, ElementId};
use crate::viewport::Viewport;

/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f32 = 1200.0;

/// Unique identifier for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(Uuid);

impl PageId {
    /// Create a new unique page ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a page ID from its string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid UUID.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for PageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One screen of a design: a name plus its ordered elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Unique identifier.
    pub id: PageId,
    /// Display name.
    pub name: String,
    /// Elements in insertion order; paint order is by `z_index`.
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Page {
    /// Create a new empty page with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PageId::new(),
            name: name.into(),
            elements: Vec::new(),
        }
    }

    /// Get an element by ID.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an element by ID.
    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Elements sorted by ascending z-index, insertion order breaking ties.
    #[must_use]
    pub fn elements_in_z_order(&self) -> Vec<&Element> {
        let mut ordered: Vec<_> = self.elements.iter().collect();
        ordered.sort_by_key(|e| e.z_index);
        ordered
    }

    /// The next free z-index above all current elements.
    #[must_use]
    pub fn next_z_index(&self) -> i32 {
        self.elements
            .iter()
            .map(|e| e.z_index)
            .max()
            .map_or(0, |z| z + 1)
    }
}

/// The complete design: all pages, the focused page, and the preview viewport.
///
/// A document always holds at least one page; construction and design file
/// loading both enforce this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// All pages, in navigation order.
    pub pages: Vec<Page>,
    /// The currently focused page.
    pub selected_page: PageId,
    /// Simulated device viewport.
    pub viewport: Viewport,
    /// Canvas height in pixels.
    #[serde(default = "Document::default_canvas_height")]
    pub canvas_height: f32,
}

impl Document {
    /// Create a document with a single empty page.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let page = Page::new("Page 1");
        let selected_page = page.id;
        Self {
            pages: vec![page],
            selected_page,
            viewport,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
        }
    }

    const fn default_canvas_height() -> f32 {
        DEFAULT_CANVAS_HEIGHT
    }

    /// Canvas width in pixels, derived from the viewport.
    #[must_use]
    pub const fn canvas_width(&self) -> f32 {
        self.viewport.width()
    }

    /// Get a page by ID.
    #[must_use]
    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Get a mutable reference to a page by ID.
    pub fn page_mut(&mut self, id: PageId) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.id == id)
    }

    /// The currently focused page.
    ///
    /// Falls back to the first page if the selected ID is stale (e.g. right
    /// after a snapshot restore removed it).
    #[must_use]
    pub fn current_page(&self) -> &Page {
        self.page(self.selected_page)
            .unwrap_or_else(|| &self.pages[0])
    }

    /// Mutable access to the currently focused page.
    pub fn current_page_mut(&mut self) -> &mut Page {
        let idx = self
            .pages
            .iter()
            .position(|p| p.id == self.selected_page)
            .unwrap_or(0);
        &mut self.pages[idx]
    }

    /// Total element count across all pages.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.pages.iter().map(|p| p.elements.len()).sum()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Viewport::Desktop)
    }
}
