//! Pixel surface: the RGBA8 buffer strokes are painted into.
//!
//! The surface mirrors the browser canvas one pixel per CSS pixel. Strokes are
//! rasterized here rather than through the 2D context so the ink bounding box,
//! the PNG snapshot and the reset semantics can all be computed and tested
//! without a browser. [`crate::render`] copies the buffer to the real canvas.
//!
//! A pixel counts as ink when its alpha channel is non-zero.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::consts::{ALPHA_OFFSET, BYTES_PER_PIXEL, OPAQUE_ALPHA};
use crate::geom::{InkBounds, Point, distance_to_segment};
use crate::palette::Rgb;

/// RGBA8 pixel buffer, row-major, origin at the top-left.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    /// Create a fully transparent surface.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, pixels: vec![0; buffer_len(width, height)] }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, `width * height * 4` long.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Reallocate to a new size. Existing pixels are discarded, matching what a
    /// browser does when a canvas backing store is resized.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; buffer_len(width, height)];
    }

    /// Make every pixel fully transparent.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Paint one opaque pixel. Returns `false` when `(x, y)` is off-surface.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) -> bool {
        let Some(offset) = self.offset(x, y) else {
            return false;
        };
        let Some(px) = self.pixels.get_mut(offset..offset + BYTES_PER_PIXEL) else {
            return false;
        };
        px.copy_from_slice(&[color.r, color.g, color.b, OPAQUE_ALPHA]);
        true
    }

    /// Rasterize a round-capped line segment of the given width.
    ///
    /// A pixel is painted when its center lies within `width / 2` of the
    /// segment. A zero-length segment paints a dot.
    pub fn stroke_segment(&mut self, from: Point, to: Point, width: f64, color: Rgb) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let radius = (width / 2.0).max(0.5);
        let Some((x0, x1)) = pixel_span(from.x.min(to.x) - radius, from.x.max(to.x) + radius, self.width) else {
            return;
        };
        let Some((y0, y1)) = pixel_span(from.y.min(to.y) - radius, from.y.max(to.y) + radius, self.height) else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if distance_to_segment(center, from, to) <= radius {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Bounding box of every non-transparent pixel, or `None` for a blank surface.
    ///
    /// Scans the full buffer.
    #[must_use]
    pub fn ink_bounds(&self) -> Option<InkBounds> {
        let width = self.width as usize;
        if width == 0 {
            return None;
        }
        let mut bounds: Option<InkBounds> = None;
        for (index, px) in self.pixels.chunks_exact(BYTES_PER_PIXEL).enumerate() {
            if px[ALPHA_OFFSET] == 0 {
                continue;
            }
            let (Ok(x), Ok(y)) = (u32::try_from(index % width), u32::try_from(index / width)) else {
                continue;
            };
            match bounds.as_mut() {
                Some(b) => b.include(x, y),
                None => bounds = Some(InkBounds::at(x, y)),
            }
        }
        bounds
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

/// Clamp a continuous `[lo, hi]` range to pixel indices in `0..limit`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_span(lo: f64, hi: f64, limit: u32) -> Option<(u32, u32)> {
    let max_index = f64::from(limit) - 1.0;
    let start = lo.floor().max(0.0);
    let end = hi.ceil().min(max_index);
    if !start.is_finite() || !end.is_finite() || start > end {
        return None;
    }
    Some((start as u32, end as u32))
}

#[cfg(test)]
impl Surface {
    /// Whether no pixel carries ink.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .all(|px| px[ALPHA_OFFSET] == 0)
    }

    /// RGBA value at `(x, y)`, or `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let offset = self.offset(x, y)?;
        let px = self.pixels.get(offset..offset + BYTES_PER_PIXEL)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}
