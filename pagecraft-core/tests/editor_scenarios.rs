//! End-to-end editor scenarios: history laws, clamping, and save/load.

use pagecraft_core::{
    DesignDocument, Editor, ElementKind, Page, Position, StyleMap, Viewport,
};

fn page_states(editor: &Editor) -> (Vec<Page>, Viewport) {
    (editor.document().pages.clone(), editor.viewport())
}

#[test]
fn undo_redo_inverse_law() {
    let mut editor = Editor::new(Viewport::Desktop);

    // N committed actions of mixed kinds.
    let a = editor.create_element(ElementKind::Heading, Position::new(40.0, 40.0));
    let b = editor.create_element(ElementKind::Button, Position::new(80.0, 200.0));
    editor.set_content(a, "Hello");
    let mut patch = StyleMap::new();
    patch.insert("color".to_string(), "#ff0000".into());
    editor.update_styles(b, patch);
    editor.set_viewport(Viewport::Tablet);
    let commits = 5;

    let final_state = page_states(&editor);

    for _ in 0..commits {
        assert!(editor.undo());
    }
    assert!(!editor.can_undo());
    assert_eq!(editor.document().element_count(), 0);

    for _ in 0..commits {
        assert!(editor.redo());
    }
    assert!(!editor.can_redo());
    assert_eq!(page_states(&editor), final_state);
}

#[test]
fn new_edit_after_undo_truncates_redo() {
    let mut editor = Editor::new(Viewport::Desktop);
    editor.create_element(ElementKind::Text, Position::new(10.0, 10.0));
    editor.create_element(ElementKind::Text, Position::new(20.0, 20.0));
    editor.create_element(ElementKind::Text, Position::new(30.0, 30.0));

    editor.undo();
    editor.undo();
    assert!(editor.can_redo());

    // A fresh edit makes the undone states unreachable.
    editor.create_element(ElementKind::Divider, Position::new(5.0, 5.0));
    assert!(!editor.can_redo());
    assert_eq!(editor.document().element_count(), 2);
}

#[test]
fn clamp_invariant_for_drops_and_drags() {
    let mut editor = Editor::new(Viewport::Mobile);
    let canvas_width = editor.document().canvas_width();
    let canvas_height = editor.document().canvas_height;

    let drops = [
        Position::new(-1000.0, -1000.0),
        Position::new(0.0, 0.0),
        Position::new(canvas_width, canvas_height),
        Position::new(1e6, 1e6),
        Position::new(187.5, 600.0),
    ];

    for kind in ElementKind::ALL {
        for drop in drops {
            let id = editor.create_element(kind, drop);
            let (position, width) = {
                let element = editor
                    .current_page()
                    .element(id)
                    .expect("element exists after create");
                (element.position, element.width)
            };
            assert!(position.x >= 0.0);
            assert!(position.x <= canvas_width - width);
            assert!(position.y >= 0.0);
            assert!(position.y <= canvas_height - 50.0);

            // Drag the element around; the draft obeys the same bounds.
            editor.begin_move(id, position);
            for pointer in drops {
                let draft = editor.pointer_move(pointer).expect("drag is live");
                assert!(draft.x >= 0.0);
                assert!(draft.y >= 0.0);
                assert!(draft.y <= canvas_height - 50.0);
            }
            editor.end_move();
        }
    }
}

#[test]
fn history_snapshots_are_isolated_from_live_edits() {
    let mut editor = Editor::new(Viewport::Desktop);
    let id = editor.create_element(ElementKind::Button, Position::new(100.0, 100.0));

    // Mutate the live store repeatedly after the commit.
    editor.set_position(id, Position::new(900.0, 900.0));
    editor.set_content(id, "changed");

    // Rewinding to the first commit shows the original values, untouched by
    // the later in-place edits.
    editor.undo();
    editor.undo();
    let element = editor
        .current_page()
        .element(id)
        .expect("element from first commit");
    assert!((element.position.x - 100.0).abs() < f32::EPSILON);
    assert_eq!(element.content.as_deref(), Some("Click me"));
}

#[test]
fn save_load_round_trip_is_field_exact() {
    let mut editor = Editor::new(Viewport::Tablet);
    let id = editor.create_element(ElementKind::Input, Position::new(60.0, 90.0));
    editor.set_placeholder(id, "Email address");
    let mut patch = StyleMap::new();
    patch.insert("borderColor".to_string(), "#22c55e".into());
    patch.insert("opacity".to_string(), 0.9.into());
    editor.update_styles(id, patch);
    editor.add_page("Confirmation");
    editor.create_element(ElementKind::Heading, Position::new(10.0, 10.0));

    let json = editor.to_json().expect("serialize");
    let reparsed = DesignDocument::from_json(&json).expect("parse");
    assert_eq!(reparsed, editor.design_document());

    let mut fresh = Editor::new(Viewport::Desktop);
    fresh.load_json(&json).expect("load");
    assert_eq!(fresh.document().pages, editor.document().pages);
    assert_eq!(fresh.viewport(), editor.viewport());
}

#[test]
fn create_move_undo_reverts_only_the_move() {
    let mut editor = Editor::new(Viewport::Desktop);

    let id = editor.create_element(ElementKind::Button, Position::new(50.0, 50.0));
    editor.begin_move(id, Position::new(50.0, 50.0));
    editor.pointer_move(Position::new(120.0, 80.0));
    editor.end_move();

    let element = editor.current_page().element(id).expect("element");
    assert!((element.position.x - 120.0).abs() < f32::EPSILON);
    assert!((element.position.y - 80.0).abs() < f32::EPSILON);

    assert!(editor.undo());
    let element = editor.current_page().element(id).expect("element survives");
    assert!((element.position.x - 50.0).abs() < f32::EPSILON);
    assert!((element.position.y - 50.0).abs() < f32::EPSILON);
}

#[test]
fn viewport_rescale_scenario() {
    let mut editor = Editor::new(Viewport::Desktop);
    let id = editor.create_element(ElementKind::Button, Position::new(300.0, 140.0));

    editor.set_viewport(Viewport::Mobile);
    let element = editor.current_page().element(id).expect("element");
    assert!((element.position.x - 93.75).abs() < f32::EPSILON);
    assert!((element.position.y - 140.0).abs() < f32::EPSILON);
}

#[test]
fn delete_clears_selection_scenario() {
    let mut editor = Editor::new(Viewport::Desktop);
    let kept = editor.create_element(ElementKind::Text, Position::new(10.0, 10.0));
    let doomed = editor.create_element(ElementKind::Link, Position::new(30.0, 30.0));

    editor.select_element(doomed);
    editor.delete_element(doomed);
    assert_eq!(editor.selection(), None);

    editor.select_element(kept);
    let other = editor.create_element(ElementKind::Divider, Position::new(50.0, 50.0));
    editor.select_element(kept);
    editor.delete_element(other);
    assert_eq!(editor.selection(), Some(kept));
}
