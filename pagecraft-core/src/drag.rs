//! Drag gesture bookkeeping: pointer offsets, clamping, and grid snapping.
//!
//! A gesture keeps a draft position separate from the committed document.
//! Per-frame pointer moves only update the draft; the document changes (and
//! history records exactly one entry) when the gesture ends.

use crate::element::{ElementId, Position};
use crate::registry::ELEMENT_HEIGHT_ALLOWANCE;

/// An in-progress move of one element.
#[derive(Debug, Clone)]
pub struct DragGesture {
    /// The element being moved.
    pub element_id: ElementId,
    /// Pointer hotspot offset, so the element does not jump to the pointer.
    offset_x: f32,
    offset_y: f32,
    /// Current draft position; starts at the element's committed position.
    pub draft: Position,
}

impl DragGesture {
    /// Begin a gesture for an element at `element_position`, grabbed at
    /// `pointer`.
    #[must_use]
    pub fn new(element_id: ElementId, pointer: Position, element_position: Position) -> Self {
        Self {
            element_id,
            offset_x: pointer.x - element_position.x,
            offset_y: pointer.y - element_position.y,
            draft: element_position,
        }
    }

    /// The candidate element position for a pointer location, before
    /// clamping or snapping.
    #[must_use]
    pub fn candidate(&self, pointer: Position) -> Position {
        Position::new(pointer.x - self.offset_x, pointer.y - self.offset_y)
    }
}

/// Clamp a position so the element stays within the canvas.
///
/// X is held to `[0, canvas_width - element_width]` and y to
/// `[0, canvas_height - ELEMENT_HEIGHT_ALLOWANCE]`. If the element is wider
/// than the canvas the x range collapses to 0.
#[must_use]
pub fn clamp_position(
    position: Position,
    element_width: f32,
    canvas_width: f32,
    canvas_height: f32,
) -> Position {
    let max_x = (canvas_width - element_width).max(0.0);
    let max_y = (canvas_height - ELEMENT_HEIGHT_ALLOWANCE).max(0.0);
    Position::new(position.x.clamp(0.0, max_x), position.y.clamp(0.0, max_y))
}

/// Snap each axis to the nearest multiple of `step`.
///
/// A non-positive step disables snapping.
#[must_use]
pub fn snap_to_grid(position: Position, step: f32) -> Position {
    if step <= 0.0 {
        return position;
    }
    Position::new(
        (position.x / step).round() * step,
        (position.y / step).round() * step,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_keeps_grab_offset() {
        let id = ElementId::new();
        let gesture = DragGesture::new(id, Position::new(60.0, 70.0), Position::new(50.0, 50.0));

        // Pointer moved by (+70, +30); element should follow by the same delta.
        let candidate = gesture.candidate(Position::new(130.0, 100.0));
        assert!((candidate.x - 120.0).abs() < f32::EPSILON);
        assert!((candidate.y - 80.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_clamp_keeps_element_inside_canvas() {
        let clamped = clamp_position(Position::new(-10.0, -5.0), 100.0, 1200.0, 800.0);
        assert!((clamped.x - 0.0).abs() < f32::EPSILON);
        assert!((clamped.y - 0.0).abs() < f32::EPSILON);

        let clamped = clamp_position(Position::new(5000.0, 5000.0), 100.0, 1200.0, 800.0);
        assert!((clamped.x - 1100.0).abs() < f32::EPSILON);
        assert!((clamped.y - 750.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_clamp_with_oversized_element() {
        let clamped = clamp_position(Position::new(50.0, 10.0), 500.0, 375.0, 800.0);
        assert!((clamped.x - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_snap_rounds_to_nearest_multiple() {
        let snapped = snap_to_grid(Position::new(23.0, 37.0), 10.0);
        assert!((snapped.x - 20.0).abs() < f32::EPSILON);
        assert!((snapped.y - 40.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_snap_disabled_for_zero_step() {
        let position = Position::new(23.4, 37.6);
        let snapped = snap_to_grid(position, 0.0);
        assert_eq!(snapped, position);
    }
}
