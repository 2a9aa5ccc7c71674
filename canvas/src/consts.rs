//! Shared numeric constants for the canvas crate.

// ── Strokes ─────────────────────────────────────────────────────

/// Stroke width in surface pixels. Caps are always round.
pub const STROKE_WIDTH_PX: f64 = 3.0;

/// Alpha written for every painted pixel.
pub const OPAQUE_ALPHA: u8 = 255;

// ── Pixel layout ────────────────────────────────────────────────

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Offset of the alpha channel inside an RGBA8 pixel.
pub const ALPHA_OFFSET: usize = 3;

// ── Host ────────────────────────────────────────────────────────

/// CSS background painted behind the surface once the user starts drawing.
pub const FILLED_BACKGROUND: &str = "black";
