#![allow(clippy::float_cmp)]

use std::cell::RefCell;
use std::rc::Rc;

use canvas::input::Button;

use super::*;
use crate::state::session::SessionState;

fn entry(expr: &str, result: &str, assign: bool) -> ResultEntry {
    ResultEntry { expr: expr.to_owned(), result: result.to_owned(), assign }
}

fn inked_core() -> EngineCore {
    let mut core = EngineCore::with_size(120, 90);
    core.on_pointer_down(Point::new(20.0, 30.0), Button::Primary);
    core.on_pointer_move(Point::new(60.0, 40.0));
    core.on_pointer_up();
    core
}

/// Schedule publications the way the page does, into a shared session.
fn publish_into(
    scheduler: &TaskScheduler,
    session: &Rc<RefCell<SessionState>>,
    entries: &[ResultEntry],
) -> Vec<TaskId> {
    let epoch = session.borrow().epoch();
    let target = Rc::clone(session);
    schedule_publications(scheduler, entries, move |result| {
        target.borrow_mut().publish(epoch, result);
    })
}

// =============================================================
// Request preparation
// =============================================================

#[test]
fn empty_canvas_is_not_sent() {
    let core = EngineCore::with_size(120, 90);
    let err = prepare_request(&core, &Bindings::new()).unwrap_err();
    assert_eq!(err, CalculateError::EmptyCanvas);
}

#[test]
fn unsized_canvas_is_not_sent() {
    let err = prepare_request(&EngineCore::new(), &Bindings::new()).unwrap_err();
    assert_eq!(err, CalculateError::EmptyCanvas);
}

#[test]
fn request_carries_png_and_bindings() {
    let mut bindings = Bindings::new();
    bindings.insert("x".to_owned(), "3".to_owned());

    let (request, bounds) = prepare_request(&inked_core(), &bindings).unwrap();

    assert!(request.image.starts_with("data:image/png;base64,"));
    assert_eq!(request.dict_of_vars, bindings);
    assert!(bounds.min_x <= 20 && bounds.max_x >= 60);
    assert!(bounds.min_y <= 30 && bounds.max_y >= 40);
}

#[test]
fn anchor_follows_current_ink() {
    let requested = InkBounds::at(10, 10);
    let mut current = InkBounds::at(40, 20);
    current.include(60, 40);
    assert_eq!(response_anchor(Some(current), requested), Point::new(50.0, 30.0));
}

#[test]
fn anchor_falls_back_to_requested_region() {
    let mut requested = InkBounds::at(0, 0);
    requested.include(20, 10);
    assert_eq!(response_anchor(None, requested), Point::new(10.0, 5.0));
}

// =============================================================
// Publication
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn publications_wait_for_their_timer() {
    let scheduler = TaskScheduler::new();
    let session = Rc::new(RefCell::new(SessionState::new()));
    let ids = publish_into(&scheduler, &session, &[entry("1+1", "2", false), entry("y", "5", true)]);
    assert_eq!(ids.len(), 2);
    assert!(session.borrow().entries.is_empty());

    assert!(scheduler.fire(ids[0]));
    assert_eq!(session.borrow().entries.len(), 1);
    assert!(scheduler.fire(ids[1]));

    let session = session.borrow();
    assert_eq!(session.entries.len(), 2);
    assert_eq!(session.result.as_ref().map(|r| r.answer.as_str()), Some("5"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn reset_cancels_pending_publications() {
    let scheduler = TaskScheduler::new();
    let session = Rc::new(RefCell::new(SessionState::new()));
    let ids = publish_into(&scheduler, &session, &[entry("1+1", "2", false), entry("2*3", "6", false)]);
    assert!(scheduler.fire(ids[0]));

    assert_eq!(scheduler.cancel_all(), 1);
    session.borrow_mut().reset();

    assert!(!scheduler.fire(ids[1]));
    assert!(session.borrow().entries.is_empty());
    assert_eq!(session.borrow().result, None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn publication_from_before_reset_is_dropped() {
    let scheduler = TaskScheduler::new();
    let session = Rc::new(RefCell::new(SessionState::new()));
    let ids = publish_into(&scheduler, &session, &[entry("1+1", "2", false)]);

    // Timer survives (e.g. a different scheduler instance), but the epoch moved.
    session.borrow_mut().reset();
    assert!(scheduler.fire(ids[0]));
    assert!(session.borrow().entries.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn no_entries_schedules_nothing() {
    let scheduler = TaskScheduler::new();
    let session = Rc::new(RefCell::new(SessionState::new()));
    assert!(publish_into(&scheduler, &session, &[]).is_empty());
    assert_eq!(scheduler.cancel_all(), 0);
}
