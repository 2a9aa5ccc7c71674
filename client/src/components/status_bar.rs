//! Bottom status bar showing request activity and the latest notice.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::ui::{NoticeLevel, UiState};

fn notice_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Warning => "status-bar__notice status-bar__notice--warning",
        NoticeLevel::Error => "status-bar__notice status-bar__notice--error",
    }
}

/// Status bar at the bottom of the home page. Clicking a notice dismisses it.
#[component]
pub fn StatusBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = expect_context::<RwSignal<SessionState>>();

    let entry_count = move || session.with(|s| s.entries.len());
    let binding_count = move || session.with(|s| s.bindings.len());

    view! {
        <div class="status-bar">
            <span class="status-bar__item">
                {move || if ui.get().is_busy() { "recognizing…" } else { "idle" }}
            </span>
            <span class="status-bar__item">{move || format!("{} results", entry_count())}</span>
            <span class="status-bar__item">{move || format!("{} variables", binding_count())}</span>
            <span class="status-bar__spacer"></span>
            {move || {
                ui.get()
                    .notice
                    .map(|notice| {
                        view! {
                            <span
                                class=notice_class(notice.level)
                                title="Dismiss"
                                on:click=move |_| ui.update(UiState::dismiss_notice)
                            >
                                {notice.message}
                            </span>
                        }
                    })
            }}
        </div>
    }
}
