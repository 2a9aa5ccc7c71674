use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::STROKE_WIDTH_PX;
use crate::encode::{EncodeError, png_data_uri};
use crate::geom::{InkBounds, Point};
use crate::input::{Button, InputState};
use crate::palette::Rgb;
use crate::render;
use crate::surface::Surface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The surface changed and should be blitted to the canvas.
    RenderNeeded,
    /// The first stroke started; the host paints the canvas background.
    BackgroundFilled,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub surface: Surface,
    pub color: Rgb,
    pub input: InputState,
    /// Set by the first pointer-down of the session; never cleared.
    pub background_filled: bool,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self { surface: Surface::default(), color: Rgb::WHITE, input: InputState::default(), background_filled: false }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a surface of the given size.
    #[must_use]
    pub fn with_size(width: u32, height: u32) -> Self {
        Self { surface: Surface::new(width, height), ..Self::default() }
    }

    // --- Viewport ---

    /// Resize the surface. A no-op when the size is unchanged; otherwise the
    /// surface is reallocated and existing ink is lost.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> Vec<Action> {
        if self.surface.width() == width && self.surface.height() == height {
            return Vec::new();
        }
        self.surface.resize(width, height);
        vec![Action::RenderNeeded]
    }

    // --- Palette ---

    /// Set the color used by subsequent strokes.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    // --- Input events ---

    /// Begin a new path at `point`. Only the primary button draws.
    pub fn on_pointer_down(&mut self, point: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.input = InputState::Drawing { last: point };
        if self.background_filled {
            return Vec::new();
        }
        self.background_filled = true;
        vec![Action::BackgroundFilled, Action::RenderNeeded]
    }

    /// Stroke from the previous point to `point` while a path is active.
    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        let InputState::Drawing { last } = self.input else {
            return Vec::new();
        };
        self.surface
            .stroke_segment(last, point, STROKE_WIDTH_PX, self.color);
        self.input = InputState::Drawing { last: point };
        vec![Action::RenderNeeded]
    }

    /// End the active path.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if self.input.is_drawing() {
            self.input = InputState::Idle;
        }
        Vec::new()
    }

    /// End the active path when the pointer leaves the canvas.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.on_pointer_up()
    }

    // --- Surface ---

    /// Erase all ink. The input state is left alone, so a stroke in progress
    /// keeps drawing into the cleared surface.
    pub fn clear(&mut self) -> Vec<Action> {
        self.surface.clear();
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// Bounding box of the painted ink, `None` when nothing is drawn.
    #[must_use]
    pub fn ink_bounds(&self) -> Option<InkBounds> {
        self.surface.ink_bounds()
    }

    /// PNG data URI of the current surface.
    ///
    /// # Errors
    ///
    /// Returns an [`EncodeError`] if the surface cannot be encoded.
    pub fn snapshot(&self) -> Result<String, EncodeError> {
        png_data_uri(&self.surface)
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let core = EngineCore::with_size(canvas.width(), canvas.height());
        Self { canvas, core }
    }

    // --- Viewport ---

    /// Match the backing store and surface to the element's CSS size.
    pub fn set_viewport(&mut self, width_css: u32, height_css: u32) -> Vec<Action> {
        if self.canvas.width() != width_css {
            self.canvas.set_width(width_css);
        }
        if self.canvas.height() != height_css {
            self.canvas.set_height(height_css);
        }
        self.core.set_viewport(width_css, height_css)
    }

    // --- Delegated inputs ---

    pub fn set_color(&mut self, color: Rgb) {
        self.core.set_color(color);
    }

    pub fn on_pointer_down(&mut self, point: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(point, button)
    }

    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        self.core.on_pointer_move(point)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn clear(&mut self) -> Vec<Action> {
        self.core.clear()
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::apply_background(&self.canvas, self.core.background_filled)?;
        render::draw(&ctx, &self.core.surface)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn ink_bounds(&self) -> Option<InkBounds> {
        self.core.ink_bounds()
    }
}
