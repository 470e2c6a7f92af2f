//! The editor handle: one entry point owning the document, selection,
//! history, and any in-flight drag gesture.
//!
//! All mutations flow through this type, which is what keeps the history
//! stack consistent: every committed user action appends exactly one
//! snapshot, and per-frame drag moves stay in a draft until the gesture
//! ends. Selection is stored as an ID and resolved by lookup, so it can
//! never drift from the element store.

use crate::drag::{clamp_position, snap_to_grid, DragGesture};
use crate::element::{Element, ElementId, ElementKind, Position, StyleMap};
use crate::error::BuilderResult;
use crate::history::{History, Snapshot};
use crate::page::{Document, Page, PageId};
use crate::registry;
use crate::schema::DesignDocument;
use crate::viewport::{rescale_positions, Viewport};

/// Offset applied to a duplicated element's position, in pixels.
const DUPLICATE_OFFSET: f32 = 20.0;

/// Direction for z-order reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderDirection {
    /// Swap with the next element above in z-order.
    Up,
    /// Swap with the next element below in z-order.
    Down,
}

/// The page-builder editor.
#[derive(Debug, Clone)]
pub struct Editor {
    document: Document,
    selection: Option<ElementId>,
    history: History,
    drag: Option<DragGesture>,
    /// Grid step for drag snapping; `None` disables snapping.
    grid_step: Option<f32>,
}

impl Editor {
    /// Create an editor with a single empty page.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::from_document(Document::new(viewport))
    }

    /// Create an editor over an existing document.
    #[must_use]
    pub fn from_document(document: Document) -> Self {
        let history = History::new(Snapshot {
            pages: document.pages.clone(),
            viewport: document.viewport,
        });
        Self {
            document,
            selection: None,
            history,
            drag: None,
            grid_step: None,
        }
    }

    /// The live document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The currently focused page.
    #[must_use]
    pub fn current_page(&self) -> &Page {
        self.document.current_page()
    }

    /// Enable grid snapping with the given step, or disable it with `None`.
    pub fn set_grid_step(&mut self, step: Option<f32>) {
        self.grid_step = step;
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            pages: self.document.pages.clone(),
            viewport: self.document.viewport,
        }
    }

    fn commit(&mut self) {
        self.history.commit(self.snapshot());
    }

    // -----------------------------------------------------------------------
    // Element store
    // -----------------------------------------------------------------------

    /// Drop a new element of `kind` onto the current page.
    ///
    /// Defaults come from the kind registry; the drop position is clamped
    /// into canvas bounds. The new element becomes the selection.
    pub fn create_element(&mut self, kind: ElementKind, drop_position: Position) -> ElementId {
        let defaults = registry::defaults(kind);
        let position = clamp_position(
            drop_position,
            defaults.width,
            self.document.canvas_width(),
            self.document.canvas_height,
        );

        let page = self.document.current_page_mut();
        let z_index = page.next_z_index();
        let mut element = Element::new(kind, defaults.width)
            .with_position(position)
            .with_styles(defaults.styles)
            .with_z_index(z_index);
        if let Some(content) = defaults.content {
            element = element.with_content(content);
        }
        if let Some(placeholder) = defaults.placeholder {
            element = element.with_placeholder(placeholder);
        }
        let id = element.id;
        page.elements.push(element);

        tracing::debug!("created {kind} element {id} at ({}, {})", position.x, position.y);
        self.commit();
        self.selection = Some(id);
        id
    }

    /// Merge a style patch into an element, last write wins per key.
    ///
    /// Returns `false` (and leaves state untouched) if the ID is unknown.
    pub fn update_styles(&mut self, id: ElementId, patch: StyleMap) -> bool {
        let Some(element) = self.document.current_page_mut().element_mut(id) else {
            tracing::warn!("style update for unknown element {id} ignored");
            return false;
        };
        element.merge_styles(patch);
        self.commit();
        true
    }

    /// Set an element's content text.
    pub fn set_content(&mut self, id: ElementId, content: impl Into<String>) -> bool {
        let Some(element) = self.document.current_page_mut().element_mut(id) else {
            tracing::warn!("content update for unknown element {id} ignored");
            return false;
        };
        element.content = Some(content.into());
        self.commit();
        true
    }

    /// Set an element's placeholder text.
    ///
    /// Meaningful only for input-like kinds, but stored regardless.
    pub fn set_placeholder(&mut self, id: ElementId, placeholder: impl Into<String>) -> bool {
        let Some(element) = self.document.current_page_mut().element_mut(id) else {
            tracing::warn!("placeholder update for unknown element {id} ignored");
            return false;
        };
        if !element.kind.is_input_like() {
            tracing::debug!("placeholder set on non-input {} element {id}", element.kind);
        }
        element.placeholder = Some(placeholder.into());
        self.commit();
        true
    }

    /// Set an element's position from direct numeric entry.
    ///
    /// This path does not clamp; it is the documented escape hatch from the
    /// soft canvas bounds.
    pub fn set_position(&mut self, id: ElementId, position: Position) -> bool {
        let Some(element) = self.document.current_page_mut().element_mut(id) else {
            tracing::warn!("position update for unknown element {id} ignored");
            return false;
        };
        element.position = position;
        self.commit();
        true
    }

    /// Set an element's width in pixels.
    pub fn set_width(&mut self, id: ElementId, width: f32) -> bool {
        let Some(element) = self.document.current_page_mut().element_mut(id) else {
            tracing::warn!("width update for unknown element {id} ignored");
            return false;
        };
        element.width = width.max(0.0);
        self.commit();
        true
    }

    /// Delete an element. Clears the selection if it pointed at the element.
    pub fn delete_element(&mut self, id: ElementId) -> bool {
        let page = self.document.current_page_mut();
        let before = page.elements.len();
        page.elements.retain(|e| e.id != id);
        if page.elements.len() == before {
            tracing::warn!("delete of unknown element {id} ignored");
            return false;
        }
        if self.selection == Some(id) {
            self.selection = None;
        }
        tracing::debug!("deleted element {id}");
        self.commit();
        true
    }

    /// Swap an element's z-index with its nearest neighbor in z-order.
    ///
    /// No-op at the top/bottom boundary or for unknown IDs.
    pub fn reorder_element(&mut self, id: ElementId, direction: ReorderDirection) -> bool {
        let page = self.document.current_page_mut();
        let Some(target_z) = page.element(id).map(|e| e.z_index) else {
            tracing::warn!("reorder of unknown element {id} ignored");
            return false;
        };

        // Nearest z-index strictly above (Up) or below (Down) the target.
        let neighbor = match direction {
            ReorderDirection::Up => page
                .elements
                .iter()
                .filter(|e| e.z_index > target_z)
                .min_by_key(|e| e.z_index)
                .map(|e| (e.id, e.z_index)),
            ReorderDirection::Down => page
                .elements
                .iter()
                .filter(|e| e.z_index < target_z)
                .max_by_key(|e| e.z_index)
                .map(|e| (e.id, e.z_index)),
        };
        let Some((neighbor_id, neighbor_z)) = neighbor else {
            return false;
        };

        if let Some(element) = page.element_mut(id) {
            element.z_index = neighbor_z;
        }
        if let Some(element) = page.element_mut(neighbor_id) {
            element.z_index = target_z;
        }
        self.commit();
        true
    }

    /// Duplicate an element with a fresh ID, offset by (+20, +20).
    ///
    /// The copy is appended above all existing elements and selected.
    pub fn duplicate_element(&mut self, id: ElementId) -> Option<ElementId> {
        let page = self.document.current_page_mut();
        let Some(source) = page.element(id) else {
            tracing::warn!("duplicate of unknown element {id} ignored");
            return None;
        };
        let mut copy = source.clone();
        copy.id = ElementId::new();
        copy.position.x += DUPLICATE_OFFSET;
        copy.position.y += DUPLICATE_OFFSET;
        copy.z_index = page.next_z_index();
        let copy_id = copy.id;
        page.elements.push(copy);

        self.commit();
        self.selection = Some(copy_id);
        Some(copy_id)
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Select an element on the current page.
    pub fn select_element(&mut self, id: ElementId) -> bool {
        if self.document.current_page().element(id).is_none() {
            tracing::warn!("select of unknown element {id} ignored");
            return false;
        }
        self.selection = Some(id);
        true
    }

    /// Clear the selection (background click).
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// The selected element's ID, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.selection
    }

    /// The selected element, resolved by lookup on the current page.
    #[must_use]
    pub fn selected_element(&self) -> Option<&Element> {
        self.selection
            .and_then(|id| self.document.current_page().element(id))
    }

    // -----------------------------------------------------------------------
    // Drag/move
    // -----------------------------------------------------------------------

    /// Begin moving an element grabbed at `pointer`.
    ///
    /// Selects the element and records the grab offset. Returns `false` for
    /// unknown IDs.
    pub fn begin_move(&mut self, id: ElementId, pointer: Position) -> bool {
        let Some(element) = self.document.current_page().element(id) else {
            tracing::warn!("move of unknown element {id} ignored");
            return false;
        };
        self.drag = Some(DragGesture::new(id, pointer, element.position));
        self.selection = Some(id);
        true
    }

    /// Update the in-flight drag for a pointer position.
    ///
    /// Clamps to canvas bounds, applies grid snapping if enabled, and writes
    /// the result to the gesture draft only. Returns the draft position, or
    /// `None` when no gesture is live.
    pub fn pointer_move(&mut self, pointer: Position) -> Option<Position> {
        let (element_id, candidate) = {
            let drag = self.drag.as_ref()?;
            (drag.element_id, drag.candidate(pointer))
        };
        let width = self
            .document
            .current_page()
            .element(element_id)
            .map_or(0.0, |e| e.width);

        let mut target = clamp_position(
            candidate,
            width,
            self.document.canvas_width(),
            self.document.canvas_height,
        );
        if let Some(step) = self.grid_step {
            target = snap_to_grid(target, step);
        }
        if let Some(drag) = self.drag.as_mut() {
            drag.draft = target;
        }
        Some(target)
    }

    /// End the drag gesture, merging the draft into the document.
    ///
    /// Commits exactly one history entry for the whole gesture. Returns
    /// `false` if no gesture was live.
    pub fn end_move(&mut self) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        let Some(element) = self.document.current_page_mut().element_mut(drag.element_id) else {
            // Element vanished mid-gesture (e.g. restored snapshot); nothing
            // to merge.
            return false;
        };
        element.position = drag.draft;
        self.commit();
        true
    }

    /// Pointer left the canvas during a drag.
    ///
    /// Behaves exactly like a normal release: the current draft position is
    /// committed, not reverted.
    pub fn pointer_leave(&mut self) -> bool {
        self.end_move()
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.drag.is_some()
    }

    /// An element's effective position: the drag draft while that element is
    /// being moved, its committed position otherwise.
    #[must_use]
    pub fn element_position(&self, id: ElementId) -> Option<Position> {
        if let Some(drag) = &self.drag {
            if drag.element_id == id {
                return Some(drag.draft);
            }
        }
        self.document.current_page().element(id).map(|e| e.position)
    }

    // -----------------------------------------------------------------------
    // Viewport
    // -----------------------------------------------------------------------

    /// Switch the preview viewport, rescaling x-positions proportionally on
    /// every page. One history entry per change; same-viewport calls are
    /// no-ops.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.document.viewport {
            return;
        }
        let from = self.document.viewport.width();
        let to = viewport.width();
        for page in &mut self.document.pages {
            rescale_positions(&mut page.elements, from, to);
        }
        self.document.viewport = viewport;
        tracing::debug!("viewport switched to {viewport} ({from} -> {to} px)");
        self.commit();
    }

    /// The current preview viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.document.viewport
    }

    // -----------------------------------------------------------------------
    // History
    // -----------------------------------------------------------------------

    /// Undo one committed action. Returns `false` at the bottom of history.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.apply_snapshot(snapshot);
        true
    }

    /// Redo one undone action. Returns `false` at the top of history.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.apply_snapshot(snapshot);
        true
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.history.begin_restore();
        self.document.pages = snapshot.pages;
        self.document.viewport = snapshot.viewport;
        if self.document.page(self.document.selected_page).is_none() {
            self.document.selected_page = self.document.pages[0].id;
        }
        // The restored elements may not match what the selection pointed at.
        self.selection = None;
        self.drag = None;
        self.history.end_restore();
    }

    // -----------------------------------------------------------------------
    // Pages
    // -----------------------------------------------------------------------

    /// Add a new empty page, focus it, and commit.
    pub fn add_page(&mut self, name: impl Into<String>) -> PageId {
        let page = Page::new(name);
        let id = page.id;
        self.document.pages.push(page);
        self.commit();
        self.document.selected_page = id;
        self.selection = None;
        id
    }

    /// Rename a page. Unknown IDs are silent no-ops.
    pub fn rename_page(&mut self, id: PageId, name: impl Into<String>) -> bool {
        let Some(page) = self.document.page_mut(id) else {
            tracing::warn!("rename of unknown page {id} ignored");
            return false;
        };
        page.name = name.into();
        self.commit();
        true
    }

    /// Remove a page. The last remaining page cannot be removed.
    ///
    /// If the removed page was focused, focus moves to the first remaining
    /// page and the selection is cleared.
    pub fn remove_page(&mut self, id: PageId) -> bool {
        if self.document.pages.len() <= 1 {
            tracing::warn!("refusing to remove the last page");
            return false;
        }
        let before = self.document.pages.len();
        self.document.pages.retain(|p| p.id != id);
        if self.document.pages.len() == before {
            tracing::warn!("remove of unknown page {id} ignored");
            return false;
        }
        if self.document.selected_page == id {
            self.document.selected_page = self.document.pages[0].id;
            self.selection = None;
        }
        self.commit();
        true
    }

    /// Focus a page. Clears the selection; page focus is not undoable, so no
    /// history entry is committed.
    pub fn select_page(&mut self, id: PageId) -> bool {
        if self.document.page(id).is_none() {
            tracing::warn!("select of unknown page {id} ignored");
            return false;
        }
        self.document.selected_page = id;
        self.selection = None;
        true
    }

    // -----------------------------------------------------------------------
    // Save / load
    // -----------------------------------------------------------------------

    /// The canonical serialized representation of the current design.
    #[must_use]
    pub fn design_document(&self) -> DesignDocument {
        DesignDocument::from_document(&self.document)
    }

    /// Serialize the current design to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> BuilderResult<String> {
        self.design_document().to_json()
    }

    /// Replace the live design with one parsed from JSON.
    ///
    /// The file is parsed and validated completely before any live state is
    /// touched; on failure the editor is unchanged. On success the new state
    /// is applied and one history entry is pushed, so the load itself is
    /// undoable.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON or a structurally invalid design.
    pub fn load_json(&mut self, json: &str) -> BuilderResult<()> {
        let document = DesignDocument::from_json(json)?.into_document()?;
        tracing::info!(
            "loaded design: {} pages, {} elements",
            document.pages.len(),
            document.element_count(),
        );
        self.document = document;
        self.selection = None;
        self.drag = None;
        self.commit();
        Ok(())
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Viewport::Desktop)
    }
}
