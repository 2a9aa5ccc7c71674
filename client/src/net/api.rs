//! HTTP calls made by the browser.
//!
//! Client-side (hydrate): real requests via `gloo-net`.
//! Server-side (SSR): stubs, since recognition only happens in the browser.
//!
//! CANCELLATION
//! ============
//! Every calculate request carries a [`RequestAbort`]. Reset and unmount abort
//! all in-flight requests through [`InflightRequests::abort_all`]; an aborted
//! request resolves to [`CalculateError::Cancelled`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::cell::RefCell;
use std::rc::Rc;

use super::error::CalculateError;
use super::types::{CalculateRequest, CalculateResponse, ClientConfig, ResultEntry};
use crate::util::scheduler::{TaskId, TaskTable};

/// Path appended to the recognition base URL.
pub const CALCULATE_PATH: &str = "/calculate";

/// Host-server endpoint exposing [`ClientConfig`].
pub const CONFIG_PATH: &str = "/api/config";

/// `{base_url}/calculate`, tolerating a trailing slash on the base.
#[must_use]
pub fn calculate_endpoint(base_url: &str) -> String {
    format!("{}{CALCULATE_PATH}", base_url.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn status_failed_message(status: u16) -> String {
    format!("status {status}")
}

/// Parse a calculate response body into its entries, preserving order.
///
/// # Errors
///
/// Returns [`CalculateError::MalformedResponse`] when the body is not
/// `{ "data": [ { "expr", "result", "assign" }, ... ] }`.
pub fn parse_calculate_response(body: &str) -> Result<Vec<ResultEntry>, CalculateError> {
    serde_json::from_str::<CalculateResponse>(body)
        .map(|resp| resp.data)
        .map_err(|e| CalculateError::MalformedResponse(e.to_string()))
}

/// Abort handle for one request.
///
/// Cloning shares the underlying `AbortController`.
#[derive(Clone, Default)]
pub struct RequestAbort {
    #[cfg(feature = "hydrate")]
    controller: Option<web_sys::AbortController>,
    #[cfg(not(feature = "hydrate"))]
    aborted: Rc<std::cell::Cell<bool>>,
}

impl RequestAbort {
    /// Create a fresh handle. In the browser this owns a new `AbortController`;
    /// if one cannot be created the request simply runs uncancellable.
    #[must_use]
    pub fn new() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self { controller: web_sys::AbortController::new().ok() }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    pub fn abort(&self) {
        #[cfg(feature = "hydrate")]
        if let Some(controller) = &self.controller {
            controller.abort();
        }
        #[cfg(not(feature = "hydrate"))]
        self.aborted.set(true);
    }

    #[must_use]
    pub fn is_aborted(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.controller.as_ref().is_some_and(|c| c.signal().aborted())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.aborted.get()
        }
    }

    #[cfg(feature = "hydrate")]
    fn signal(&self) -> Option<web_sys::AbortSignal> {
        self.controller.as_ref().map(web_sys::AbortController::signal)
    }
}

/// Requests that have been sent but not answered yet.
///
/// Cloning shares the same table.
#[derive(Clone, Default)]
pub struct InflightRequests(Rc<RefCell<TaskTable<RequestAbort>>>);

impl InflightRequests {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request and return its id with the abort handle.
    pub fn track(&self) -> (TaskId, RequestAbort) {
        let abort = RequestAbort::new();
        let id = self.0.borrow_mut().insert(abort.clone());
        (id, abort)
    }

    /// Forget a request that has resolved.
    pub fn finish(&self, id: TaskId) {
        self.0.borrow_mut().complete(id);
    }

    /// Abort every tracked request. Returns how many were aborted.
    pub fn abort_all(&self) -> usize {
        let handles = self.0.borrow_mut().drain();
        for abort in &handles {
            abort.abort();
        }
        handles.len()
    }
}

/// Send the canvas snapshot and bindings to `{base_url}/calculate`.
///
/// # Errors
///
/// [`CalculateError::Network`] on transport failure or a non-success status,
/// [`CalculateError::MalformedResponse`] when the body does not parse, and
/// [`CalculateError::Cancelled`] when `abort` fired first.
pub async fn calculate(
    base_url: &str,
    request: &CalculateRequest,
    abort: &RequestAbort,
) -> Result<Vec<ResultEntry>, CalculateError> {
    #[cfg(feature = "hydrate")]
    {
        let url = calculate_endpoint(base_url);
        let signal = abort.signal();
        let sent = gloo_net::http::Request::post(&url)
            .abort_signal(signal.as_ref())
            .json(request)
            .map_err(|e| CalculateError::Encode(e.to_string()))?
            .send()
            .await;
        let resp = match sent {
            Ok(resp) => resp,
            Err(_) if abort.is_aborted() => return Err(CalculateError::Cancelled),
            Err(e) => return Err(CalculateError::Network(e.to_string())),
        };
        if !resp.ok() {
            return Err(CalculateError::Network(status_failed_message(resp.status())));
        }
        let body = match resp.text().await {
            Ok(body) => body,
            Err(_) if abort.is_aborted() => return Err(CalculateError::Cancelled),
            Err(e) => return Err(CalculateError::Network(e.to_string())),
        };
        if abort.is_aborted() {
            return Err(CalculateError::Cancelled);
        }
        parse_calculate_response(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base_url, request);
        if abort.is_aborted() {
            return Err(CalculateError::Cancelled);
        }
        Err(CalculateError::Network("not available on server".to_owned()))
    }
}

/// Fetch the recognition base URL from the host server.
/// Returns `None` on failure or on the server.
pub async fn fetch_config() -> Option<ClientConfig> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CONFIG_PATH).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<ClientConfig>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
