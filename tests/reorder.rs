//! Tests for block reordering: the splice primitive and drag-and-drop gestures.
mod common;
use blockflow::prelude::*;
use common::*;

fn drag(editor: &mut PipelineEditor, from: usize, target: usize, point: DropPoint) -> bool {
    editor.drag_start(from);
    editor.drag_over(target, point);
    let moved = editor.drop_on(target, point);
    editor.drag_end();
    moved
}

#[test]
fn test_move_round_trip() {
    let mut editor = editor_with(&["A", "B", "C"]);
    assert!(editor.move_block(0, 2));
    assert_eq!(order(&editor), vec!["B", "C", "A"]);
    assert!(editor.move_block(2, 0));
    assert_eq!(order(&editor), vec!["A", "B", "C"]);
    assert_consistent(&editor);
}

#[test]
fn test_successive_moves_use_current_order() {
    let mut editor = editor_with(&["A", "B", "C", "D"]);
    editor.move_block(0, 2);
    assert_eq!(order(&editor), vec!["B", "C", "A", "D"]);
    editor.move_block(1, 3);
    assert_eq!(order(&editor), vec!["B", "A", "D", "C"]);
    assert_consistent(&editor);
}

#[test]
fn test_move_out_of_range_leaves_state_untouched() {
    let mut editor = editor_with(&["A", "B", "C"]);
    let before = editor.snapshot();
    assert!(!editor.move_block(3, 0));
    assert!(!editor.move_block(0, 3));
    assert!(!editor.move_block(usize::MAX, 1));
    assert_eq!(editor.snapshot(), before);
}

#[test]
fn test_drag_onto_last_bottom_half() {
    let mut editor = editor_with(&["A", "B", "C"]);
    assert!(drag(&mut editor, 0, 2, BOTTOM));
    assert_eq!(order(&editor), vec!["B", "C", "A"]);
    assert_consistent(&editor);
}

#[test]
fn test_drag_onto_last_top_half() {
    let mut editor = editor_with(&["A", "B", "C"]);
    assert!(drag(&mut editor, 0, 2, TOP));
    assert_eq!(order(&editor), vec!["B", "A", "C"]);
    assert_consistent(&editor);
}

#[test]
fn test_drag_down_applies_shift_correction() {
    let mut editor = editor_with(&["A", "B", "C", "D"]);
    assert_eq!(drop_destination(1, 3, DropHalf::Top), Some(2));
    assert!(drag(&mut editor, 1, 3, TOP));
    assert_eq!(order(&editor), vec!["A", "C", "B", "D"]);
}

#[test]
fn test_drag_up() {
    let mut editor = editor_with(&["A", "B", "C", "D"]);
    assert!(drag(&mut editor, 3, 1, TOP));
    assert_eq!(order(&editor), vec!["A", "D", "B", "C"]);

    let mut editor = editor_with(&["A", "B", "C", "D"]);
    assert!(drag(&mut editor, 3, 0, BOTTOM));
    assert_eq!(order(&editor), vec!["A", "D", "B", "C"]);
}

#[test]
fn test_drag_round_trip_through_gestures() {
    let mut editor = editor_with(&["A", "B", "C"]);
    assert!(drag(&mut editor, 0, 2, BOTTOM));
    assert_eq!(order(&editor), vec!["B", "C", "A"]);
    assert!(drag(&mut editor, 2, 0, TOP));
    assert_eq!(order(&editor), vec!["A", "B", "C"]);
}

#[test]
fn test_drop_on_self_or_neighbour_gap_is_noop() {
    let mut editor = editor_with(&["A", "B", "C"]);
    let before = editor.snapshot();
    assert!(!drag(&mut editor, 1, 1, TOP));
    assert!(!drag(&mut editor, 1, 1, BOTTOM));
    assert!(!drag(&mut editor, 1, 2, TOP));
    assert!(!drag(&mut editor, 1, 0, BOTTOM));
    assert_eq!(editor.snapshot(), before);
}

#[test]
fn test_drop_without_drag_start_is_noop() {
    let mut editor = editor_with(&["A", "B", "C"]);
    let before = editor.snapshot();
    assert!(!editor.drop_on(0, TOP));
    assert_eq!(editor.snapshot(), before);
}

#[test]
fn test_drag_cancelled_without_drop_is_noop() {
    let mut editor = editor_with(&["A", "B", "C"]);
    let before = editor.snapshot();

    assert!(editor.drag_start(0));
    editor.drag_over(1, BOTTOM);
    editor.drag_over(2, TOP);
    editor.drag_leave();
    editor.drag_end();

    assert_eq!(editor.snapshot(), before);
    assert!(!editor.drag().is_active());
    // A late drop after the gesture ended must not resurrect it.
    assert!(!editor.drop_on(2, BOTTOM));
    assert_eq!(editor.snapshot(), before);
}

#[test]
fn test_drop_outside_any_target_is_noop() {
    let mut editor = editor_with(&["A", "B"]);
    let before = editor.snapshot();
    editor.drag_start(0);
    assert!(!editor.drop_on(7, BOTTOM));
    assert_eq!(editor.snapshot(), before);
}

#[test]
fn test_drag_over_reports_indicator() {
    let mut editor = editor_with(&["A", "B", "C"]);
    assert_eq!(editor.drag_over(1, TOP), None);
    editor.drag_start(0);
    assert_eq!(
        editor.drag_over(2, BOTTOM),
        Some(DropIndicator {
            index: 2,
            half: DropHalf::Bottom
        })
    );
    assert_eq!(editor.drag().origin_index(), Some(0));
    assert_eq!(editor.drag_over(9, TOP), None);
}

#[test]
fn test_block_deleted_mid_drag() {
    let mut editor = editor_with(&["A", "B", "C"]);
    editor.drag_start(0);
    editor.delete_block(&BlockId::from("A"));
    let before = editor.snapshot();
    assert!(!editor.drop_on(1, BOTTOM));
    assert_eq!(editor.snapshot(), before);
}

#[test]
fn test_selection_survives_reordering() {
    let mut editor = editor_with(&["A", "B", "C"]);
    let c = BlockId::from("C");
    editor.select_block(&c);
    drag(&mut editor, 2, 0, TOP);
    assert_eq!(editor.selected_id(), Some(&c));
    assert_eq!(editor.selected_block().map(Block::position), Some(0));
}
