use super::*;

const CUT_ZONE: Rect = Rect { left: 400.0, top: 200.0, right: 700.0, bottom: 400.0 };

fn tile_rect(state: &PlayState, tile: TileColor) -> Rect {
    Rect::from_origin_size(state.positions[tile], 180.0, 60.0)
}

fn grab(state: &mut PlayState, tile: TileColor) {
    let rect = tile_rect(state, tile);
    let origin = rect.origin();
    let pointer = Point::new(origin.x + 20.0, origin.y + 15.0);
    state.begin_drag(tile, pointer, rect);
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_places_tiles_at_initial_positions() {
    let state = PlayState::default();
    for color in TileColor::ALL {
        assert_eq!(state.positions[color], color.initial_position());
    }
    assert!(state.drag.is_none());
    assert!(state.cut_message.is_empty());
}

// =============================================================
// Drag lifecycle
// =============================================================

#[test]
fn begin_drag_records_tile_and_offset() {
    let mut state = PlayState::default();
    grab(&mut state, TileColor::Blue);
    assert_eq!(state.dragged(), Some(TileColor::Blue));
    assert_eq!(state.drag.map(|d| d.offset), Some(Point::new(20.0, 15.0)));
}

#[test]
fn position_tracks_pointer_minus_offset_at_every_sample() {
    let mut state = PlayState::default();
    grab(&mut state, TileColor::Red);
    let offset = Point::new(20.0, 15.0);

    for pointer in [
        Point::new(50.0, 250.0),
        Point::new(120.5, 260.25),
        Point::new(450.0, 300.0),
        Point::new(-30.0, 5.0),
    ] {
        state.continue_drag(pointer, Some(CUT_ZONE));
        assert_eq!(state.positions.red, pointer - offset);
    }
}

#[test]
fn continue_drag_without_active_drag_is_noop() {
    let mut state = PlayState::default();
    state.edit_message(TileColor::Green, "hello");
    state.continue_drag(Point::new(500.0, 300.0), Some(CUT_ZONE));
    assert_eq!(state, {
        let mut expected = PlayState::default();
        expected.edit_message(TileColor::Green, "hello");
        expected
    });
}

#[test]
fn only_dragged_tile_moves() {
    let mut state = PlayState::default();
    grab(&mut state, TileColor::Purple);
    state.continue_drag(Point::new(300.0, 300.0), None);

    for color in TileColor::ALL {
        if color != TileColor::Purple {
            assert_eq!(state.positions[color], color.initial_position());
        }
    }
}

#[test]
fn end_drag_always_resets_position() {
    let mut state = PlayState::default();
    grab(&mut state, TileColor::Orange);
    state.continue_drag(Point::new(90.0, 90.0), Some(CUT_ZONE));
    assert!(state.end_drag().is_none());
    assert_eq!(state.positions.orange, TileColor::Orange.initial_position());
    assert!(!state.is_dragging());

    state.edit_message(TileColor::Orange, "bye");
    grab(&mut state, TileColor::Orange);
    state.continue_drag(Point::new(500.0, 300.0), Some(CUT_ZONE));
    assert!(state.end_drag().is_some());
    assert_eq!(state.positions.orange, TileColor::Orange.initial_position());
}

#[test]
fn end_drag_without_active_drag_is_noop() {
    let mut state = PlayState::default();
    state.cut_message = "left over".to_owned();
    assert!(state.end_drag().is_none());
    assert_eq!(state.cut_message, "left over");
}

#[test]
fn begin_drag_during_drag_sends_previous_tile_home() {
    let mut state = PlayState::default();
    grab(&mut state, TileColor::Green);
    state.continue_drag(Point::new(300.0, 300.0), None);
    grab(&mut state, TileColor::Red);

    assert_eq!(state.positions.green, TileColor::Green.initial_position());
    assert_eq!(state.dragged(), Some(TileColor::Red));
}

// =============================================================
// Cut detection
// =============================================================

#[test]
fn cut_message_follows_pointer_in_and_out_of_zone() {
    let mut state = PlayState::default();
    state.edit_message(TileColor::Green, "hello");
    grab(&mut state, TileColor::Green);

    state.continue_drag(Point::new(500.0, 300.0), Some(CUT_ZONE));
    assert_eq!(state.cut_message, "hello");

    state.continue_drag(Point::new(100.0, 300.0), Some(CUT_ZONE));
    assert!(state.cut_message.is_empty());
}

#[test]
fn cut_zone_edges_are_inclusive() {
    let mut state = PlayState::default();
    state.edit_message(TileColor::Blue, "edge");
    grab(&mut state, TileColor::Blue);
    state.continue_drag(Point::new(CUT_ZONE.right, CUT_ZONE.bottom), Some(CUT_ZONE));
    assert_eq!(state.cut_message, "edge");
}

#[test]
fn unknown_cut_zone_leaves_cut_message_alone() {
    let mut state = PlayState::default();
    state.edit_message(TileColor::Green, "hello");
    grab(&mut state, TileColor::Green);
    state.continue_drag(Point::new(500.0, 300.0), Some(CUT_ZONE));
    state.continue_drag(Point::new(10.0, 10.0), None);
    assert_eq!(state.cut_message, "hello");
}

#[test]
fn releasing_green_inside_zone_cuts_its_message() {
    let mut state = PlayState::default();
    state.edit_message(TileColor::Green, "hello");
    grab(&mut state, TileColor::Green);
    state.continue_drag(Point::new(550.0, 320.0), Some(CUT_ZONE));

    let cut = state.end_drag();
    assert_eq!(cut, Some(Cut { tile: TileColor::Green, message: "hello".to_owned() }));
    assert_eq!(state.cut_message, "hello");
}

#[test]
fn releasing_outside_zone_does_not_cut() {
    let mut state = PlayState::default();
    state.edit_message(TileColor::Green, "hello");
    grab(&mut state, TileColor::Green);
    state.continue_drag(Point::new(550.0, 320.0), Some(CUT_ZONE));
    state.continue_drag(Point::new(150.0, 320.0), Some(CUT_ZONE));
    assert!(state.end_drag().is_none());
}

#[test]
fn empty_message_inside_zone_does_not_cut() {
    let mut state = PlayState::default();
    grab(&mut state, TileColor::Red);
    state.continue_drag(Point::new(550.0, 320.0), Some(CUT_ZONE));
    assert!(state.cut_message.is_empty());
    assert!(state.end_drag().is_none());
}

#[test]
fn click_without_motion_recuts_lingering_message() {
    let mut state = PlayState::default();
    state.edit_message(TileColor::Green, "hello");
    grab(&mut state, TileColor::Green);
    state.continue_drag(Point::new(550.0, 320.0), Some(CUT_ZONE));
    assert!(state.end_drag().is_some());
    assert_eq!(state.cut_message, "hello");

    grab(&mut state, TileColor::Red);
    assert_eq!(state.cut_message, "hello");
    let cut = state.end_drag().expect("lingering message is cut");
    assert_eq!(cut, Cut { tile: TileColor::Red, message: "hello".to_owned() });
}

#[test]
fn first_move_after_click_recomputes_cut_message() {
    let mut state = PlayState::default();
    state.edit_message(TileColor::Green, "hello");
    grab(&mut state, TileColor::Green);
    state.continue_drag(Point::new(550.0, 320.0), Some(CUT_ZONE));
    assert!(state.end_drag().is_some());

    grab(&mut state, TileColor::Red);
    state.continue_drag(Point::new(50.0, 50.0), Some(CUT_ZONE));
    assert_eq!(state.cut_message, "");
    assert!(state.end_drag().is_none());
}

#[test]
fn cut_uses_message_at_last_move_not_at_release() {
    let mut state = PlayState::default();
    state.edit_message(TileColor::Blue, "first");
    grab(&mut state, TileColor::Blue);
    state.continue_drag(Point::new(550.0, 320.0), Some(CUT_ZONE));
    state.edit_message(TileColor::Blue, "second");

    let cut = state.end_drag().map(|c| c.message);
    assert_eq!(cut.as_deref(), Some("first"));
}

// =============================================================
// Messages
// =============================================================

#[test]
fn edit_message_stores_text_verbatim() {
    let mut state = PlayState::default();
    let long = "  spaced <b>markup</b> ".repeat(500);
    state.edit_message(TileColor::Purple, long.clone());
    assert_eq!(state.messages.purple, long);
    assert!(state.messages.green.is_empty());
}
