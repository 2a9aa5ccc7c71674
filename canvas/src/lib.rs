//! Freehand drawing engine for the math sketchpad.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! pixels the user draws: translating raw pointer events into rasterized
//! strokes, tracking the active stroke color, locating the painted ink, and
//! encoding the surface as a PNG data URI for the recognition service. The
//! host Leptos layer only wires DOM events to the engine and forwards the
//! resulting [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`surface`] | RGBA pixel buffer, stroke rasterization, ink bounds scan |
//! | [`geom`] | Points, segment distance, ink bounding boxes |
//! | [`palette`] | Stroke colors and the fixed swatch set |
//! | [`input`] | Pointer button types and the drawing state machine |
//! | [`encode`] | PNG / data URI encoding of the surface |
//! | [`render`] | Blits the surface onto a 2D canvas context |
//! | [`consts`] | Shared numeric constants (stroke width, pixel layout) |

pub mod consts;
pub mod encode;
pub mod engine;
pub mod geom;
pub mod input;
pub mod palette;
pub mod render;
pub mod surface;
