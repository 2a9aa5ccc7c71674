//! Overlay of typeset results above the drawing canvas.
//!
//! Each entry is an absolutely positioned element whose inner text is the
//! entry's inline-math markup. Markup is inserted as a text node; the
//! [`Typesetter`] turns it into typeset math after the entry list changes.
//! Entries are draggable one at a time; a drag moves only that entry.

#[cfg(feature = "hydrate")]
use std::rc::Rc;

use leptos::prelude::*;

use canvas::geom::Point;

use crate::state::session::{EntryId, SessionState, TypesetEntry};
use crate::util::drag::DragState;
use crate::util::typeset::Typesetter;

fn position_style(position: Point) -> String {
    format!("left: {}px; top: {}px;", position.x, position.y)
}

fn client_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[component]
fn TypesetItem(entry: TypesetEntry, drag: RwSignal<Option<DragState>>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let id: EntryId = entry.id;

    let style = move || {
        session.with(|s| s.entry(id).map(|e| position_style(e.position))).unwrap_or_default()
    };
    let class = move || {
        if drag.get().is_some_and(|d| d.id == id) {
            "typeset-entry typeset-entry--dragging"
        } else {
            "typeset-entry"
        }
    };

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            if let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                if let Err(err) = el.set_pointer_capture(ev.pointer_id()) {
                    leptos::logging::warn!("typeset: pointer capture failed: {err:?}");
                }
            }
        }
        let origin = session.with_untracked(|s| s.entry(id).map(|e| e.position));
        if let Some(origin) = origin {
            drag.set(Some(DragState::new(id, client_point(&ev), origin)));
        }
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let Some(state) = drag.get_untracked().filter(|d| d.id == id) else {
            return;
        };
        let position = state.position_at(client_point(&ev));
        session.update(|s| {
            s.move_entry(id, position);
        });
    };

    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        if drag.get_untracked().is_some_and(|d| d.id == id) {
            drag.set(None);
        }
    };

    view! {
        <div
            class=class
            style=style
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
        >
            <div class="typeset-entry__math">{entry.latex}</div>
        </div>
    }
}

/// Layer rendering every [`TypesetEntry`] of the session.
#[component]
pub fn TypesetLayer(typesetter: std::rc::Rc<dyn Typesetter>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let drag = RwSignal::new(None::<DragState>);

    // Typeset when entries are added, not when one is dragged.
    #[cfg(feature = "hydrate")]
    {
        let entry_count = Memo::new(move |_| session.with(|s| s.entries.len()));
        Effect::new(move || {
            if entry_count.get() == 0 {
                return;
            }
            let typesetter = Rc::clone(&typesetter);
            request_animation_frame(move || typesetter.typeset());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = typesetter;

    view! {
        <div class="typeset-layer">
            <For
                each=move || session.with(|s| s.entries.clone())
                key=|entry| entry.id
                children=move |entry| view! { <TypesetItem entry=entry drag=drag /> }
            />
        </div>
    }
}
