//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns pixels and stroke rasterization; this host maps
//! pointer events and the active color into engine calls and blits the surface
//! after every change. The engine lives in an [`EngineHandle`] shared with the
//! home page, which needs it for snapshots and resets.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use canvas::engine::{Action, Engine, EngineCore};
use canvas::geom::InkBounds;
use canvas::palette::Rgb;

#[cfg(feature = "hydrate")]
use crate::state::ui::UiState;
#[cfg(feature = "hydrate")]
use crate::util::canvas_input::{pointer_button, pointer_point};

/// Shared slot for the engine. Empty until the canvas element mounts.
#[derive(Clone, Default)]
pub struct EngineHandle(Rc<RefCell<Option<Engine>>>);

impl EngineHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.0.borrow().is_some()
    }

    /// Run `f` against the mounted engine.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> Option<R> {
        self.0.borrow_mut().as_mut().map(f)
    }

    pub fn install(&self, engine: Engine) {
        *self.0.borrow_mut() = Some(engine);
    }

    pub fn set_color(&self, color: Rgb) {
        self.with_mut(|engine| engine.set_color(color));
    }

    /// Erase all ink and redraw.
    pub fn clear(&self) {
        self.with_mut(|engine| {
            let actions = engine.clear();
            process_actions(engine, &actions);
        });
    }

    #[must_use]
    pub fn ink_bounds(&self) -> Option<InkBounds> {
        self.0.borrow().as_ref().and_then(Engine::ink_bounds)
    }

    /// Run `f` against the engine's pixel state, or `None` before mount.
    pub fn with_core<R>(&self, f: impl FnOnce(&EngineCore) -> R) -> Option<R> {
        self.0.borrow().as_ref().map(|engine| f(&engine.core))
    }
}

fn render(engine: &Engine) {
    if let Err(err) = engine.render() {
        leptos::logging::warn!("canvas: render failed: {err:?}");
    }
}

fn process_actions(engine: &Engine, actions: &[Action]) {
    if !actions.is_empty() {
        render(engine);
    }
}

/// Size the engine to the window: full width, and the height left below the
/// canvas element's top edge.
#[cfg(feature = "hydrate")]
fn sync_viewport(engine: &mut Engine, canvas: &web_sys::HtmlCanvasElement) -> Vec<Action> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let top = f64::from(canvas.offset_top());
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (width, height) = (width.max(0.0) as u32, (height - top).max(0.0) as u32);
    engine.set_viewport(width, height)
}

/// Full-viewport drawing canvas.
///
/// On hydration, this mounts `canvas::engine::Engine` into `engine`, keeps its
/// stroke color in sync with [`crate::state::ui::UiState::active_color`], and forwards pointer
/// input.
#[component]
pub fn CanvasHost(engine: EngineHandle) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let ui = expect_context::<RwSignal<UiState>>();
        {
            let engine = engine.clone();
            Effect::new(move || {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                if engine.is_mounted() {
                    return;
                }
                let mut instance = Engine::new(canvas.clone());
                sync_viewport(&mut instance, &canvas);
                instance.set_color(ui.get_untracked().active_color);
                render(&instance);
                engine.install(instance);
            });
        }
        {
            let engine = engine.clone();
            Effect::new(move || {
                let color = ui.get().active_color;
                engine.set_color(color);
            });
        }
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = engine.clone();
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                let point = pointer_point(&ev);
                let button = pointer_button(&ev);
                engine.with_mut(|engine| {
                    let actions = engine.on_pointer_down(point, button);
                    process_actions(engine, &actions);
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = engine.clone();
            move |ev: leptos::ev::PointerEvent| {
                let point = pointer_point(&ev);
                engine.with_mut(|engine| {
                    let actions = engine.on_pointer_move(point);
                    process_actions(engine, &actions);
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let engine = engine.clone();
            move |_ev: leptos::ev::PointerEvent| {
                engine.with_mut(|engine| {
                    let actions = engine.on_pointer_up();
                    process_actions(engine, &actions);
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            let engine = engine.clone();
            move |_ev: leptos::ev::PointerEvent| {
                engine.with_mut(|engine| {
                    let actions = engine.on_pointer_leave();
                    process_actions(engine, &actions);
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    #[cfg(not(feature = "hydrate"))]
    let _ = engine;

    view! {
        <canvas
            class="canvas-host"
            node_ref=canvas_ref
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
