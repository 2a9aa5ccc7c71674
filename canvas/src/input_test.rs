use super::*;

// =============================================================
// Button
// =============================================================

#[test]
fn button_all_variants_distinct() {
    let variants = [Button::Primary, Button::Middle, Button::Secondary];
    for (i, a) in variants.iter().enumerate() {
        for (j, b) in variants.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Button::Primary);
    assert_eq!(Button::from_dom(1), Button::Middle);
    assert_eq!(Button::from_dom(2), Button::Secondary);
}

#[test]
fn button_from_unknown_dom_code_is_primary() {
    assert_eq!(Button::from_dom(-1), Button::Primary);
    assert_eq!(Button::from_dom(4), Button::Primary);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
    assert!(!InputState::default().is_drawing());
}

#[test]
fn drawing_state_reports_drawing() {
    let state = InputState::Drawing { last: Point::new(1.0, 2.0) };
    assert!(state.is_drawing());
}

#[test]
fn drawing_state_carries_last_point() {
    let state = InputState::Drawing { last: Point::new(7.0, 9.0) };
    match state {
        InputState::Drawing { last } => assert_eq!(last, Point::new(7.0, 9.0)),
        InputState::Idle => panic!("expected Drawing"),
    }
}
