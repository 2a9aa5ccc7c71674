//! Utility helpers shared across client UI modules.
//!
//! Browser concerns (timers, script injection, pointer mapping) live here so
//! pages and components stay declarative.

pub mod canvas_input;
pub mod drag;
pub mod scheduler;
pub mod typeset;
