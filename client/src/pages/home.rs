//! Home page: the drawing canvas, its toolbar, and the typeset overlay.
//!
//! ARCHITECTURE
//! ============
//! The page owns the per-mount resources that are not reactive values: the
//! engine handle, the publication scheduler, the in-flight request table and
//! the typesetter. A [`Recognizer`] bundles them with the shared signals and
//! runs the calculate and reset flows.
//!
//! Calculate is a linear pipeline: measure ink, snapshot, POST, fold
//! assignments, move the anchor, then publish each entry after its own delay.
//! Reset cancels everything still pending from the current session and starts
//! a new session epoch so late work is dropped.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

#[cfg(feature = "hydrate")]
use std::rc::Rc;

use canvas::engine::EngineCore;
use canvas::geom::{InkBounds, Point};
use leptos::prelude::*;

use crate::components::canvas_host::{CanvasHost, EngineHandle};
use crate::components::status_bar::StatusBar;
use crate::components::toolbar::Toolbar;
use crate::components::typeset_layer::TypesetLayer;
use crate::net::error::CalculateError;
use crate::net::types::{Bindings, CalculateRequest, ResultEntry};
use crate::state::session::RecognitionResult;
use crate::util::scheduler::{PUBLISH_DELAY_MS, TaskId, TaskScheduler};
#[cfg(not(feature = "hydrate"))]
use crate::util::typeset::NoopTypesetter;
use crate::util::typeset::Typesetter;

#[cfg(feature = "hydrate")]
use leptos::logging::{log, warn};

#[cfg(feature = "hydrate")]
use crate::net::api::{InflightRequests, calculate};
#[cfg(feature = "hydrate")]
use crate::state::config::AppConfig;
#[cfg(feature = "hydrate")]
use crate::state::session::{Epoch, SessionState};
#[cfg(feature = "hydrate")]
use crate::state::ui::UiState;
#[cfg(feature = "hydrate")]
use crate::util::typeset::MathJaxTypesetter;

/// Measure the ink and build the calculate request. Nothing is sent for an
/// empty canvas.
///
/// # Errors
///
/// [`CalculateError::EmptyCanvas`] when no ink is drawn, and
/// [`CalculateError::Encode`] when the PNG snapshot fails.
pub fn prepare_request(
    core: &EngineCore,
    bindings: &Bindings,
) -> Result<(CalculateRequest, InkBounds), CalculateError> {
    let bounds = core.ink_bounds().ok_or(CalculateError::EmptyCanvas)?;
    let image = core.snapshot().map_err(|e| CalculateError::Encode(e.to_string()))?;
    Ok((CalculateRequest { image, dict_of_vars: bindings.clone() }, bounds))
}

/// Where a response's entries stack: the ink as it is now, or the region that
/// was sent if the canvas has been cleared since.
#[must_use]
pub fn response_anchor(current: Option<InkBounds>, requested: InkBounds) -> Point {
    current.unwrap_or(requested).center()
}

/// Schedule one delayed `publish` per entry, in response order.
pub fn schedule_publications<F>(scheduler: &TaskScheduler, entries: &[ResultEntry], publish: F) -> Vec<TaskId>
where
    F: Fn(RecognitionResult) + Clone + 'static,
{
    entries
        .iter()
        .map(|entry| {
            let result = RecognitionResult::from(entry);
            let publish = publish.clone();
            scheduler.schedule(PUBLISH_DELAY_MS, move || publish(result))
        })
        .collect()
}

/// Runs the calculate and reset flows against one mounted page.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
struct Recognizer {
    engine: EngineHandle,
    scheduler: TaskScheduler,
    inflight: InflightRequests,
    session: RwSignal<SessionState>,
    ui: RwSignal<UiState>,
    config: RwSignal<AppConfig>,
}

#[cfg(feature = "hydrate")]
impl Recognizer {
    fn calculate(&self) {
        match self.prepare() {
            Ok((request, bounds)) => self.submit(request, bounds),
            Err(err) => self.fail(&err),
        }
    }

    fn prepare(&self) -> Result<(CalculateRequest, InkBounds), CalculateError> {
        self.engine
            .with_core(|core| self.session.with_untracked(|s| prepare_request(core, &s.bindings)))
            .unwrap_or(Err(CalculateError::EmptyCanvas))
    }

    fn submit(&self, request: CalculateRequest, bounds: InkBounds) {
        let epoch = self.session.with_untracked(SessionState::epoch);
        let base_url = self.config.with_untracked(|c| c.api_url.clone());
        let (id, abort) = self.inflight.track();
        self.ui.update(UiState::begin_request);
        log!(
            "calculate: posting {}x{} ink region with {} bindings",
            bounds.width(),
            bounds.height(),
            request.dict_of_vars.len()
        );

        let this = self.clone();
        leptos::task::spawn_local(async move {
            let outcome = calculate(&base_url, &request, &abort).await;
            this.inflight.finish(id);
            this.ui.try_update(UiState::end_request);
            match outcome {
                Ok(entries) => this.apply(epoch, &entries, bounds),
                Err(err) => this.fail(&err),
            }
        });
    }

    /// Fold assignments, move the anchor to the ink, and schedule one
    /// publication per entry.
    fn apply(&self, epoch: Epoch, entries: &[ResultEntry], requested: InkBounds) {
        let anchor = response_anchor(self.engine.ink_bounds(), requested);
        let accepted = self
            .session
            .try_update(|s| s.accept_response(epoch, entries, anchor))
            .unwrap_or(false);
        if !accepted {
            log!("calculate: dropping response from an earlier session");
            return;
        }
        log!("calculate: {} results", entries.len());
        let this = self.clone();
        schedule_publications(&self.scheduler, entries, move |result| this.publish(epoch, result));
    }

    /// Append the result as a typeset entry; the sketch it came from is
    /// cleared so the answer takes its place.
    fn publish(&self, epoch: Epoch, result: RecognitionResult) {
        let published = self.session.try_update(|s| s.publish(epoch, result)).flatten();
        if published.is_some() {
            self.engine.clear();
        }
    }

    fn fail(&self, err: &CalculateError) {
        if !err.is_silent() {
            warn!("calculate: {err}");
        }
        self.ui.try_update(|u| u.show_error(err));
    }

    fn reset(&self) {
        let timers = self.scheduler.cancel_all();
        let requests = self.inflight.abort_all();
        self.engine.clear();
        self.session.update(SessionState::reset);
        self.ui.update(|u| {
            u.reset_pending = false;
            u.dismiss_notice();
        });
        log!("reset: cancelled {timers} publications and {requests} requests");
    }

    /// Drop every pending timer and request. Used on unmount.
    fn shutdown(&self) {
        self.scheduler.cancel_all();
        self.inflight.abort_all();
    }
}

/// Drawing page mounted at `/`.
#[component]
pub fn HomePage() -> impl IntoView {
    let engine = EngineHandle::new();

    #[cfg(feature = "hydrate")]
    let mathjax = Rc::new(MathJaxTypesetter::mount());
    #[cfg(feature = "hydrate")]
    let typesetter: Rc<dyn Typesetter> = mathjax.clone();
    #[cfg(not(feature = "hydrate"))]
    let typesetter: std::rc::Rc<dyn Typesetter> = std::rc::Rc::new(NoopTypesetter);

    #[cfg(feature = "hydrate")]
    let recognizer = Recognizer {
        engine: engine.clone(),
        scheduler: TaskScheduler::new(),
        inflight: InflightRequests::new(),
        session: expect_context::<RwSignal<SessionState>>(),
        ui: expect_context::<RwSignal<UiState>>(),
        config: expect_context::<RwSignal<AppConfig>>(),
    };

    #[cfg(feature = "hydrate")]
    {
        let recognizer = recognizer.clone();
        let ui = recognizer.ui;
        Effect::new(move || {
            if ui.with(|u| u.reset_pending) {
                recognizer.reset();
            }
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let teardown = StoredValue::new_local((recognizer.clone(), mathjax));
        on_cleanup(move || {
            teardown.try_with_value(|(recognizer, mathjax)| {
                recognizer.shutdown();
                mathjax.unmount();
            });
        });
    }

    let on_calculate = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::MouseEvent| recognizer.calculate()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <div class="home">
            <Toolbar on_calculate=on_calculate />
            <div class="home__stage">
                <CanvasHost engine=engine />
                <TypesetLayer typesetter=typesetter />
            </div>
            <StatusBar />
        </div>
    }
}
