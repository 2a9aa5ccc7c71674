//! Top bar with the reset button, color palette, and calculate button.

use leptos::prelude::*;

use canvas::palette::SWATCHES;

use crate::state::ui::UiState;

/// Top toolbar for the home page.
///
/// Reset and color changes go straight into [`UiState`]; calculate is handed
/// to the page, which owns the engine and the recognition client.
#[component]
pub fn Toolbar<F>(on_calculate: F) -> impl IntoView
where
    F: Fn(leptos::ev::MouseEvent) + Clone + 'static,
{
    let ui = expect_context::<RwSignal<UiState>>();

    let swatches = SWATCHES
        .iter()
        .map(|swatch| {
            let color = swatch.color;
            let style = format!("background-color: {}", color.to_css());
            view! {
                <button
                    class=move || {
                        if ui.get().active_color == color {
                            "toolbar__swatch toolbar__swatch--active"
                        } else {
                            "toolbar__swatch"
                        }
                    }
                    style=style
                    title=swatch.name
                    aria-label=swatch.name
                    on:click=move |_| ui.update(|u| u.active_color = color)
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class="toolbar">
            <button class="btn toolbar__reset" on:click=move |_| ui.update(UiState::request_reset)>
                "Reset"
            </button>
            <div class="toolbar__palette">{swatches}</div>
            <button class="btn toolbar__calculate" on:click=on_calculate>
                {move || if ui.get().is_busy() { "Calculating…" } else { "Calculate" }}
            </button>
        </div>
    }
}
