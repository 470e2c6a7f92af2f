//! Linear, truncating undo/redo over full-design snapshots.

use serde::{Deserialize, Serialize};

use crate::page::Page;
use crate::viewport::Viewport;

/// An immutable deep snapshot of the design taken after a committed mutation.
///
/// Page focus and selection are deliberately not part of the snapshot; only
/// the pages and the viewport are undoable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// All pages with their elements.
    pub pages: Vec<Page>,
    /// Preview viewport at commit time.
    pub viewport: Viewport,
}

/// The undo/redo stack: a linear sequence of snapshots plus a current index.
///
/// Invariants: `index < entries.len()` whenever the stack is non-empty, and
/// the live editor state equals `entries[index]` immediately after any
/// undo or redo.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Snapshot>,
    index: usize,
    /// Set while a snapshot is being restored; commits issued during a
    /// restore are dropped so the restoration itself never re-enters history.
    restoring: bool,
}

impl History {
    /// Create a history seeded with the initial design state.
    ///
    /// Seeding makes the pre-first-edit state reachable by undo.
    #[must_use]
    pub fn new(initial: Snapshot) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
            restoring: false,
        }
    }

    /// Append a snapshot after a committed mutation.
    ///
    /// Entries beyond the current index (undone states) are truncated first,
    /// so redo is no longer possible after a fresh edit. Dropped silently
    /// while a restore is in progress.
    pub fn commit(&mut self, snapshot: Snapshot) {
        if self.restoring {
            tracing::debug!("dropping commit issued during restore");
            return;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(snapshot);
        self.index = self.entries.len() - 1;
    }

    /// Step back one entry and return a copy of it, or `None` at the bottom.
    ///
    /// The snapshot is cloned out so later edits can never mutate the stored
    /// entry in place.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.entries[self.index].clone())
    }

    /// Step forward one entry and return a copy of it, or `None` at the top.
    pub fn redo(&mut self) -> Option<Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.entries[self.index].clone())
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Mark the start of a snapshot restore.
    pub fn begin_restore(&mut self) {
        self.restoring = true;
    }

    /// Mark the end of a snapshot restore. Must be called in the same
    /// synchronous task as [`History::begin_restore`].
    pub fn end_restore(&mut self) {
        self.restoring = false;
    }

    /// Number of entries currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current index into the stack.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The entry at the current index.
    #[must_use]
    pub fn current(&self) -> &Snapshot {
        &self.entries[self.index]
    }

    /// Reset to a single seed entry (used when loading a design file).
    pub fn reset(&mut self, initial: Snapshot) {
        self.entries = vec![initial];
        self.index = 0;
        self.restoring = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, ElementKind, Position};

    fn snapshot_with_x(x: f32) -> Snapshot {
        let mut page = Page::new("test");
        page.elements
            .push(Element::new(ElementKind::Button, 140.0).with_position(Position::new(x, 0.0)));
        Snapshot {
            pages: vec![page],
            viewport: Viewport::Desktop,
        }
    }

    fn empty_snapshot() -> Snapshot {
        Snapshot {
            pages: vec![Page::new("test")],
            viewport: Viewport::Desktop,
        }
    }

    #[test]
    fn test_undo_at_bottom_is_noop() {
        let mut history = History::new(empty_snapshot());
        assert!(!history.can_undo());
        assert!(history.undo().is_none());
        assert_eq!(history.index(), 0);
    }

    #[test]
    fn test_redo_at_top_is_noop() {
        let mut history = History::new(empty_snapshot());
        history.commit(snapshot_with_x(1.0));
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_undo_then_redo_restores_entries() {
        let mut history = History::new(empty_snapshot());
        let s1 = snapshot_with_x(1.0);
        let s2 = snapshot_with_x(2.0);
        history.commit(s1.clone());
        history.commit(s2.clone());

        assert_eq!(history.undo().expect("undo"), s1);
        assert_eq!(history.redo().expect("redo"), s2);
        assert_eq!(history.index(), 2);
    }

    #[test]
    fn test_truncation_on_commit_after_undo() {
        // [S0,S1,S2,S3] at index 3, undo twice, commit S4 -> [S0,S1,S4] at 2.
        let mut history = History::new(empty_snapshot());
        history.commit(snapshot_with_x(1.0));
        history.commit(snapshot_with_x(2.0));
        history.commit(snapshot_with_x(3.0));
        assert_eq!(history.len(), 4);

        history.undo();
        history.undo();
        assert_eq!(history.index(), 1);

        let s4 = snapshot_with_x(4.0);
        history.commit(s4.clone());
        assert_eq!(history.len(), 3);
        assert_eq!(history.index(), 2);
        assert_eq!(*history.current(), s4);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_commit_during_restore_is_dropped() {
        let mut history = History::new(empty_snapshot());
        history.commit(snapshot_with_x(1.0));

        history.begin_restore();
        history.commit(snapshot_with_x(99.0));
        history.end_restore();

        assert_eq!(history.len(), 2);
        assert!(
            (history.current().pages[0].elements[0].position.x - 1.0).abs() < f32::EPSILON
        );
    }

    #[test]
    fn test_snapshots_are_isolated_from_later_edits() {
        let mut history = History::new(empty_snapshot());
        let mut snapshot = snapshot_with_x(5.0);
        history.commit(snapshot.clone());

        // Mutating the caller's copy must not affect the stored entry.
        snapshot.pages[0].elements[0].position.x = 500.0;
        assert!(
            (history.current().pages[0].elements[0].position.x - 5.0).abs() < f32::EPSILON
        );
    }
}
