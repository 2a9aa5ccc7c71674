//! Pointer event mapping for the drawing canvas.

#[cfg(feature = "hydrate")]
use canvas::geom::Point;
#[cfg(feature = "hydrate")]
use canvas::input::Button;

/// Canvas-local position of a pointer event.
#[cfg(feature = "hydrate")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "hydrate")]
pub fn pointer_button(ev: &leptos::ev::PointerEvent) -> Button {
    Button::from_dom(ev.button())
}
