use super::*;

#[test]
fn position_at_start_is_origin() {
    let drag = DragState::new(EntryId::new(), Point::new(50.0, 60.0), Point::new(10.0, 200.0));
    assert_eq!(drag.position_at(Point::new(50.0, 60.0)), Point::new(10.0, 200.0));
}

#[test]
fn position_follows_pointer_delta() {
    let drag = DragState::new(EntryId::new(), Point::new(50.0, 60.0), Point::new(10.0, 200.0));
    assert_eq!(drag.position_at(Point::new(80.0, 40.0)), Point::new(40.0, 180.0));
}

#[test]
fn position_may_leave_the_viewport() {
    let drag = DragState::new(EntryId::new(), Point::new(0.0, 0.0), Point::new(5.0, 5.0));
    assert_eq!(drag.position_at(Point::new(-20.0, -30.0)), Point::new(-15.0, -25.0));
}
