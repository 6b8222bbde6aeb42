use super::*;

#[test]
fn begin_records_offset_from_tile_origin() {
    let rect = Rect::from_origin_size(Point::new(10.0, 100.0), 180.0, 60.0);
    let drag = DragSession::begin(TileColor::Green, Point::new(25.0, 130.0), rect);
    assert_eq!(drag.tile, TileColor::Green);
    assert_eq!(drag.offset, Point::new(15.0, 30.0));
}

#[test]
fn position_keeps_grab_point_under_pointer() {
    let rect = Rect::from_origin_size(Point::new(10.0, 100.0), 180.0, 60.0);
    let drag = DragSession::begin(TileColor::Green, Point::new(25.0, 130.0), rect);
    assert_eq!(drag.position_at(Point::new(25.0, 130.0)), Point::new(10.0, 100.0));
    assert_eq!(drag.position_at(Point::new(400.0, 50.0)), Point::new(385.0, 20.0));
}
