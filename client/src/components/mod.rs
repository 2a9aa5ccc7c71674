//! Reusable UI components for the home page.

pub mod canvas_host;
pub mod status_bar;
pub mod toolbar;
pub mod typeset_layer;
