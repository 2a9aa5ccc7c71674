#![allow(clippy::float_cmp)]

use super::*;
use crate::palette::SWATCHES;

// =============================================================
// Helpers
// =============================================================

fn core() -> EngineCore {
    EngineCore::with_size(100, 80)
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn draw_stroke(core: &mut EngineCore, points: &[(f64, f64)]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    core.on_pointer_down(pt(first.0, first.1), Button::Primary);
    for (x, y) in rest {
        core.on_pointer_move(pt(*x, *y));
    }
    core.on_pointer_up();
}

// =============================================================
// Construction / viewport
// =============================================================

#[test]
fn new_core_is_idle_white_and_unfilled() {
    let core = EngineCore::new();
    assert_eq!(core.color, Rgb::WHITE);
    assert_eq!(core.input, InputState::Idle);
    assert!(!core.background_filled);
    assert!(core.ink_bounds().is_none());
}

#[test]
fn set_viewport_resizes_surface() {
    let mut core = EngineCore::new();
    let actions = core.set_viewport(640, 480);
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(core.surface.width(), 640);
    assert_eq!(core.surface.height(), 480);
}

#[test]
fn set_viewport_same_size_keeps_ink() {
    let mut core = core();
    draw_stroke(&mut core, &[(10.0, 10.0), (30.0, 10.0)]);
    assert!(core.set_viewport(100, 80).is_empty());
    assert!(core.ink_bounds().is_some());
}

// =============================================================
// Pointer lifecycle
// =============================================================

#[test]
fn pointer_down_starts_drawing() {
    let mut core = core();
    core.on_pointer_down(pt(5.0, 6.0), Button::Primary);
    assert_eq!(core.input, InputState::Drawing { last: pt(5.0, 6.0) });
    assert!(core.input.is_drawing());
}

#[test]
fn pointer_down_alone_paints_nothing() {
    let mut core = core();
    core.on_pointer_down(pt(5.0, 6.0), Button::Primary);
    assert!(core.surface.is_blank());
}

#[test]
fn first_pointer_down_fills_background_once() {
    let mut core = core();
    let first = core.on_pointer_down(pt(1.0, 1.0), Button::Primary);
    assert_eq!(first, vec![Action::BackgroundFilled, Action::RenderNeeded]);
    assert!(core.background_filled);
    core.on_pointer_up();
    let second = core.on_pointer_down(pt(2.0, 2.0), Button::Primary);
    assert!(second.is_empty());
    assert!(core.background_filled);
}

#[test]
fn secondary_button_does_not_draw() {
    let mut core = core();
    assert!(core.on_pointer_down(pt(1.0, 1.0), Button::Secondary).is_empty());
    assert!(!core.input.is_drawing());
    assert!(core.on_pointer_move(pt(20.0, 20.0)).is_empty());
    assert!(core.surface.is_blank());
    assert!(!core.background_filled);
}

#[test]
fn move_while_idle_is_ignored() {
    let mut core = core();
    assert!(core.on_pointer_move(pt(10.0, 10.0)).is_empty());
    assert!(core.surface.is_blank());
}

#[test]
fn move_while_drawing_strokes_and_advances() {
    let mut core = core();
    core.on_pointer_down(pt(10.0, 10.0), Button::Primary);
    let actions = core.on_pointer_move(pt(40.0, 10.0));
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(core.input, InputState::Drawing { last: pt(40.0, 10.0) });
    assert_eq!(core.surface.pixel(25, 10), Some([255, 255, 255, 255]));
}

#[test]
fn pointer_up_ends_path() {
    let mut core = core();
    core.on_pointer_down(pt(10.0, 10.0), Button::Primary);
    core.on_pointer_up();
    assert!(!core.input.is_drawing());
    core.on_pointer_move(pt(50.0, 50.0));
    assert_eq!(core.surface.pixel(50, 50), Some([0, 0, 0, 0]));
}

#[test]
fn pointer_leave_ends_path() {
    let mut core = core();
    core.on_pointer_down(pt(10.0, 10.0), Button::Primary);
    core.on_pointer_leave();
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn new_path_does_not_connect_to_previous() {
    let mut core = core();
    draw_stroke(&mut core, &[(10.0, 10.0), (20.0, 10.0)]);
    draw_stroke(&mut core, &[(80.0, 70.0), (90.0, 70.0)]);
    // Midpoint between the two strokes stays empty.
    assert_eq!(core.surface.pixel(50, 40), Some([0, 0, 0, 0]));
}

// =============================================================
// Color
// =============================================================

#[test]
fn stroke_uses_current_color() {
    let mut core = core();
    let red = SWATCHES[1].color;
    core.set_color(red);
    draw_stroke(&mut core, &[(10.0, 10.0), (30.0, 10.0)]);
    assert_eq!(core.surface.pixel(20, 10), Some([red.r, red.g, red.b, 255]));
}

#[test]
fn selecting_color_never_alters_existing_pixels() {
    for swatch in SWATCHES {
        let mut core = core();
        draw_stroke(&mut core, &[(10.0, 10.0), (60.0, 50.0), (90.0, 20.0)]);
        let before = core.surface.pixels().to_vec();
        core.set_color(swatch.color);
        assert_eq!(core.surface.pixels(), before.as_slice());
    }
}

#[test]
fn color_change_mid_stroke_applies_to_later_segments_only() {
    let mut core = core();
    let blue = SWATCHES[5].color;
    core.on_pointer_down(pt(10.0, 10.0), Button::Primary);
    core.on_pointer_move(pt(30.0, 10.0));
    core.set_color(blue);
    core.on_pointer_move(pt(30.0, 60.0));
    assert_eq!(core.surface.pixel(20, 10), Some([255, 255, 255, 255]));
    assert_eq!(core.surface.pixel(30, 40), Some([blue.r, blue.g, blue.b, 255]));
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_empties_surface_after_any_strokes() {
    let strokes: [&[(f64, f64)]; 3] = [
        &[(1.0, 1.0), (99.0, 79.0)],
        &[(50.0, 0.0), (50.0, 80.0), (0.0, 40.0)],
        &[(5.0, 5.0), (5.0, 5.0)],
    ];
    for count in 0..=strokes.len() {
        let mut core = core();
        for stroke in &strokes[..count] {
            draw_stroke(&mut core, stroke);
        }
        assert_eq!(core.clear(), vec![Action::RenderNeeded]);
        assert!(core.surface.is_blank());
        assert!(core.surface.pixels().iter().all(|b| *b == 0));
        assert!(core.ink_bounds().is_none());
    }
}

#[test]
fn clear_mid_stroke_keeps_drawing_flag() {
    let mut core = core();
    core.on_pointer_down(pt(10.0, 10.0), Button::Primary);
    core.on_pointer_move(pt(20.0, 10.0));
    core.clear();
    assert!(core.input.is_drawing());
    core.on_pointer_move(pt(40.0, 10.0));
    assert_eq!(core.surface.pixel(30, 10), Some([255, 255, 255, 255]));
    assert_eq!(core.surface.pixel(15, 10), Some([0, 0, 0, 0]));
}

#[test]
fn clear_keeps_background_filled() {
    let mut core = core();
    draw_stroke(&mut core, &[(1.0, 1.0), (2.0, 2.0)]);
    core.clear();
    assert!(core.background_filled);
}

// =============================================================
// Bounds / snapshot
// =============================================================

#[test]
fn ink_bounds_track_strokes() {
    let mut core = core();
    draw_stroke(&mut core, &[(20.0, 30.0), (60.0, 30.0)]);
    let Some(bounds) = core.ink_bounds() else {
        panic!("expected ink");
    };
    assert!(bounds.min_x <= 20 && bounds.max_x >= 59);
    let center = bounds.center();
    assert!((center.x - 40.0).abs() <= 1.0);
    assert!((center.y - 30.0).abs() <= 1.0);
}

#[test]
fn snapshot_is_png_data_uri() {
    let mut core = core();
    draw_stroke(&mut core, &[(20.0, 30.0), (60.0, 30.0)]);
    let uri = core.snapshot().unwrap();
    assert!(uri.starts_with("data:image/png;base64,"));
}

#[test]
fn snapshot_of_unsized_surface_fails() {
    let core = EngineCore::new();
    assert!(matches!(core.snapshot(), Err(EncodeError::EmptySurface { .. })));
}
