//! Drag bookkeeping for typeset entries.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use canvas::geom::Point;

use crate::state::session::EntryId;

/// An in-progress drag of one entry, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub id: EntryId,
    /// Pointer position when the drag began.
    pub pointer_start: Point,
    /// Entry position when the drag began.
    pub origin: Point,
}

impl DragState {
    #[must_use]
    pub fn new(id: EntryId, pointer_start: Point, origin: Point) -> Self {
        Self { id, pointer_start, origin }
    }

    /// Entry position for the current pointer position.
    #[must_use]
    pub fn position_at(&self, pointer: Point) -> Point {
        Point::new(
            self.origin.x + (pointer.x - self.pointer_start.x),
            self.origin.y + (pointer.y - self.pointer_start.y),
        )
    }
}
