mod common;

use common::{grid, grid_16x16, with_selection};
use tilegrid::{DragGesture, EdgeMask, GridKey, HitResult, MarginEdge, TileRect};

#[test]
fn click_then_drag_creates_a_selection() {
    let mut engine = grid_16x16();
    engine.begin_gesture(HitResult::Content, (12, 20));
    assert_eq!(engine.state().selection, Some(TileRect::new(1, 2, 1, 1)));

    engine.update_gesture((28, 20));
    assert_eq!(engine.state().selection, Some(TileRect::new(1, 2, 3, 1)));

    engine.end_gesture();
    assert_eq!(engine.state().selection, Some(TileRect::new(1, 2, 3, 1)));
}

#[test]
fn left_edge_resize_pins_the_right_edge() {
    let mut engine = with_selection(16, 16, TileRect::new(2, 2, 4, 4));
    let press = (14, 30);
    let hit = engine.hit_test(press);
    assert_eq!(hit, HitResult::Selection { edges: EdgeMask::LEFT, is_interior: false });

    engine.begin_gesture(hit, press);
    engine.update_gesture((10, 30));
    let selection = engine.state().selection.unwrap();
    assert_eq!(selection, TileRect::new(1, 2, 5, 4));
    assert_eq!(selection.right(), 6);
}

#[test]
fn grab_zone_edge_snaps_to_the_tile_under_the_pointer() {
    let mut engine = with_selection(16, 16, TileRect::new(2, 2, 4, 4));
    // The right grab zone [48, 51) lies on tile 6, so the edge jumps there
    // as soon as the drag starts, before the pointer moves.
    let press = (48, 30);
    let hit = engine.hit_test(press);
    assert_eq!(hit, HitResult::Selection { edges: EdgeMask::RIGHT, is_interior: false });
    engine.begin_gesture(hit, press);
    engine.update_gesture(press);
    assert_eq!(engine.state().selection, Some(TileRect::new(2, 2, 5, 4)));
    engine.update_gesture((47, 30));
    assert_eq!(engine.state().selection, Some(TileRect::new(2, 2, 4, 4)));
}

#[test]
fn arrow_past_the_right_bound_is_ignored() {
    let mut engine = with_selection(6, 6, TileRect::new(4, 0, 2, 2));
    engine.keyboard(GridKey::Right, false);
    assert_eq!(engine.state().selection, Some(TileRect::new(4, 0, 2, 2)));
}

#[test]
fn stale_selection_is_clipped_before_keyboard_use() {
    let mut engine = with_selection(6, 6, TileRect::new(5, 0, 2, 2));
    assert_eq!(engine.state().selection, Some(TileRect::new(5, 0, 1, 2)));
    engine.keyboard(GridKey::Right, false);
    engine.keyboard(GridKey::Right, true);
    assert_eq!(engine.state().selection, Some(TileRect::new(5, 0, 1, 2)));

    let mut engine = with_selection(6, 6, TileRect::new(7, 0, 1, 1));
    engine.keyboard(GridKey::Right, true);
    assert_eq!(engine.state().selection, None);
}

#[test]
fn arrow_moves_the_whole_selection() {
    let mut engine = with_selection(6, 6, TileRect::new(1, 1, 2, 2));
    engine.keyboard(GridKey::Down, false);
    engine.keyboard(GridKey::Left, false);
    assert_eq!(engine.state().selection, Some(TileRect::new(0, 2, 2, 2)));
    engine.keyboard(GridKey::Left, false);
    assert_eq!(engine.state().selection, Some(TileRect::new(0, 2, 2, 2)));
}

#[test]
fn right_edge_of_one_tile_selection_never_collapses() {
    let mut engine = with_selection(16, 16, TileRect::new(4, 4, 1, 1));
    // Pixel box is [32, 40); 41 is inside the right grab zone.
    let press = (41, 36);
    let hit = engine.hit_test(press);
    assert_eq!(hit, HitResult::Selection { edges: EdgeMask::RIGHT, is_interior: false });
    engine.begin_gesture(hit, press);
    for x in (-20..41).rev() {
        engine.update_gesture((x, 36));
        let selection = engine.state().selection.unwrap();
        assert_eq!(selection.x, 4);
        assert!(selection.width >= 1);
    }
    assert_eq!(engine.state().selection, Some(TileRect::new(4, 4, 1, 1)));
}

#[test]
fn corner_click_toggles_select_all() {
    let original = TileRect::new(3, 3, 2, 2);
    let mut engine = with_selection(16, 16, original);
    let corner = HitResult::Margin { edge: MarginEdge::Corner };

    engine.begin_gesture(corner, (-2, -2));
    assert_eq!(engine.state().selection, Some(TileRect::new(0, 0, 16, 16)));
    assert_eq!(engine.state().gesture, DragGesture::None);

    engine.begin_gesture(corner, (-2, -2));
    assert_eq!(engine.state().selection, None);
}

#[test]
fn corner_click_round_trips_from_empty() {
    let mut engine = grid_16x16();
    let corner = HitResult::Margin { edge: MarginEdge::Corner };
    engine.begin_gesture(corner, (-2, -2));
    engine.begin_gesture(corner, (-2, -2));
    assert_eq!(engine.state().selection, None);
}

#[test]
fn corner_click_on_empty_grid_does_nothing() {
    let mut engine = grid(0, 0);
    engine.begin_gesture(HitResult::Margin { edge: MarginEdge::Corner }, (-2, -2));
    assert_eq!(engine.state().selection, None);
}

#[test]
fn end_gesture_twice_is_a_no_op() {
    let mut engine = grid_16x16();
    engine.pointer_down((12, 20));
    engine.end_gesture();
    let releases = engine.host().releases;
    let invalidations = engine.host().content_invalidations;
    engine.end_gesture();
    assert_eq!(engine.host().releases, releases);
    assert_eq!(engine.host().content_invalidations, invalidations);
    assert_eq!(engine.state().gesture, DragGesture::None);
}

#[test]
fn capture_is_held_for_the_whole_gesture() {
    let mut engine = with_selection(16, 16, TileRect::new(2, 2, 4, 4));
    engine.pointer_down((30, 30));
    assert!(matches!(engine.state().gesture, DragGesture::MovingSelection { .. }));
    assert_eq!(engine.host().captures, 1);
    engine.pointer_move((60, 60));
    engine.pointer_leave();
    assert_eq!(engine.host().releases, 0);
    assert!(engine.state().hover.is_some());
    engine.pointer_up();
    assert_eq!(engine.host().releases, 1);
}

#[test]
fn move_is_relative_to_the_grab_point() {
    let mut engine = with_selection(16, 16, TileRect::new(2, 2, 4, 4));
    // Grab the selection's third column, then move one tile right.
    engine.pointer_down((33, 20));
    engine.pointer_move((41, 20));
    assert_eq!(engine.state().selection, Some(TileRect::new(3, 2, 4, 4)));
}

#[test]
fn zoom_and_scroll_feed_hit_testing() {
    let mut engine = grid_16x16();
    engine.set_zoom(2);
    engine.set_viewport(64, 64);
    engine.scroll_by(32, 16);
    engine.begin_gesture(HitResult::Content, (12, 20));
    // (12 + 32) / 16 = 2, (20 + 16) / 16 = 2
    assert_eq!(engine.state().selection, Some(TileRect::new(2, 2, 1, 1)));
}

#[test]
fn top_margin_drag_selects_columns() {
    let mut engine = grid_16x16();
    engine.pointer_down((44, -3));
    engine.pointer_move((20, 100));
    engine.pointer_up();
    assert_eq!(engine.state().selection, Some(TileRect::new(2, 0, 4, 16)));
}

#[test]
fn resize_shrinks_selection_into_new_bounds() {
    let mut engine = with_selection(16, 16, TileRect::new(10, 10, 6, 6));
    engine.resize(12, 14);
    assert_eq!(engine.state().selection, Some(TileRect::new(10, 10, 2, 4)));
    engine.resize(4, 4);
    assert_eq!(engine.state().selection, None);
}

#[test]
fn direct_edit_mode_does_not_select() {
    let mut engine = grid_16x16();
    engine.host_mut().selection_mode = false;
    engine.pointer_down((12, 20));
    engine.pointer_move((60, 60));
    engine.pointer_up();
    assert_eq!(engine.state().selection, None);
    assert_eq!(engine.host().pressed.len(), 1);
}
