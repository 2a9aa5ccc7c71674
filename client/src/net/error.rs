//! Errors surfaced by the calculate action.
//!
//! Every variant is recoverable: the status bar shows it and the session keeps
//! going. No variant leaves partially applied state behind.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a calculate action did not produce results.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalculateError {
    /// Nothing has been drawn; the request was never sent.
    #[error("nothing to calculate: the canvas is empty")]
    EmptyCanvas,

    /// The canvas snapshot could not be encoded.
    #[error("could not encode the drawing: {0}")]
    Encode(String),

    /// Transport failure or a non-success HTTP status.
    #[error("recognition request failed: {0}")]
    Network(String),

    /// The response body did not match `{ data: [{ expr, result, assign }] }`.
    #[error("unexpected response from the recognition service: {0}")]
    MalformedResponse(String),

    /// A reset or unmount aborted the request.
    #[error("recognition request cancelled")]
    Cancelled,
}

impl CalculateError {
    /// Warnings describe skipped work rather than a failure.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::EmptyCanvas)
    }

    /// Cancellations are expected and not shown to the user.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
