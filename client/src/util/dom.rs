//! DOM geometry and page location helpers.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use cutting::geom::Point;
#[cfg(feature = "csr")]
use cutting::geom::Rect;

/// Viewport pointer position of a mouse event.
pub fn pointer(ev: &leptos::ev::MouseEvent) -> Point {
    client_point(ev.client_x(), ev.client_y())
}

fn client_point(x: i32, y: i32) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

/// Current bounding rect of an element in viewport coordinates.
#[cfg(feature = "csr")]
pub fn element_rect(element: &web_sys::Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.right(), r.bottom())
}

/// `(protocol, hostname)` of the page, e.g. `("https:", "cut.example")`.
///
/// Falls back to `("http:", "localhost")` when the location is unreadable.
pub fn page_location() -> (String, String) {
    #[cfg(feature = "csr")]
    {
        if let Some(location) = web_sys::window().map(|w| w.location()) {
            let protocol = location.protocol().unwrap_or_else(|_| "http:".to_owned());
            let hostname = location.hostname().unwrap_or_else(|_| "localhost".to_owned());
            return (protocol, hostname);
        }
    }
    ("http:".to_owned(), "localhost".to_owned())
}
