//! Rendering: copies the pixel surface onto the browser canvas.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads the surface and produces pixels; it does not mutate engine state.
//!
//! All fallible DOM calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::{Clamped, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::consts::FILLED_BACKGROUND;
use crate::surface::Surface;

/// Replace the canvas contents with the surface pixels.
///
/// # Errors
///
/// Returns `Err` if the image data cannot be created or written.
pub fn draw(ctx: &CanvasRenderingContext2d, surface: &Surface) -> Result<(), JsValue> {
    if surface.width() == 0 || surface.height() == 0 {
        return Ok(());
    }
    let image =
        ImageData::new_with_u8_clamped_array_and_sh(Clamped(surface.pixels()), surface.width(), surface.height())?;
    ctx.put_image_data(&image, 0.0, 0.0)
}

/// Paint the element background solid once the user has started drawing.
///
/// The background is CSS-only, so the surface (and its PNG snapshot) stays
/// transparent where there is no ink.
///
/// # Errors
///
/// Returns `Err` if the style property cannot be set.
pub fn apply_background(canvas: &HtmlCanvasElement, filled: bool) -> Result<(), JsValue> {
    if !filled {
        return Ok(());
    }
    canvas.style().set_property("background", FILLED_BACKGROUND)
}
