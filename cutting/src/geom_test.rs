use super::*;

#[test]
fn point_arithmetic() {
    let a = Point::new(30.0, 45.0);
    let b = Point::new(10.0, 5.0);
    assert_eq!(a - b, Point::new(20.0, 40.0));
    assert_eq!(b - a, Point::new(-20.0, -40.0));
}

#[test]
fn rect_from_origin_size() {
    let r = Rect::from_origin_size(Point::new(100.0, 50.0), 200.0, 80.0);
    assert_eq!(r, Rect::new(100.0, 50.0, 300.0, 130.0));
    assert_eq!(r.origin(), Point::new(100.0, 50.0));
}

#[test]
fn rect_contains_interior_and_border() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Point::new(5.0, 5.0)));
    assert!(r.contains(Point::new(0.0, 0.0)));
    assert!(r.contains(Point::new(10.0, 10.0)));
}

#[test]
fn rect_excludes_outside_points() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!r.contains(Point::new(-0.5, 5.0)));
    assert!(!r.contains(Point::new(5.0, 10.5)));
    assert!(!r.contains(Point::new(11.0, 11.0)));
}
