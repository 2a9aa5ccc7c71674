//! Stroke colors and the fixed swatch set offered by the toolbar.
//!
//! Colors are opaque RGB triples. The toolbar renders each swatch with
//! [`Rgb::to_css`], and the host hands the picked value back to
//! [`crate::engine::EngineCore::set_color`]. Changing the color only affects
//! strokes drawn afterwards; existing pixels are never rewritten.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

/// An opaque stroke color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS functional notation, e.g. `rgb(255, 255, 255)`.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

/// A named entry in the toolbar palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub color: Rgb,
}

/// The fixed palette, in toolbar order. The first entry is the default color.
pub const SWATCHES: [Swatch; 11] = [
    Swatch { name: "white", color: Rgb::WHITE },
    Swatch { name: "red", color: Rgb::new(0xee, 0x33, 0x33) },
    Swatch { name: "pink", color: Rgb::new(0xe6, 0x49, 0x80) },
    Swatch { name: "purple", color: Rgb::new(0xbe, 0x4b, 0xdb) },
    Swatch { name: "brown", color: Rgb::new(0x89, 0x32, 0x00) },
    Swatch { name: "blue", color: Rgb::new(0x22, 0x8b, 0xe6) },
    Swatch { name: "indigo", color: Rgb::new(0x33, 0x33, 0xee) },
    Swatch { name: "green", color: Rgb::new(0x40, 0xc0, 0x57) },
    Swatch { name: "dark-green", color: Rgb::new(0x00, 0xaa, 0x00) },
    Swatch { name: "yellow", color: Rgb::new(0xfa, 0xb0, 0x05) },
    Swatch { name: "orange", color: Rgb::new(0xfd, 0x7e, 0x14) },
];
