//! Local UI chrome state: active color, request activity, notices, and the
//! reset trigger.
//!
//! Kept apart from [`super::session`] so the toolbar and status bar can change
//! without touching recognition data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use canvas::palette::Rgb;

use crate::net::error::CalculateError;

/// Severity of a status-bar notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// A dismissible message shown in the status bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Stroke color for new strokes.
    pub active_color: Rgb,
    /// Calculate requests sent but not yet answered.
    pub in_flight: u32,
    /// One-shot trigger consumed by the home page.
    pub reset_pending: bool,
    pub notice: Option<Notice>,
}

impl UiState {
    pub fn request_reset(&mut self) {
        self.reset_pending = true;
    }

    pub fn begin_request(&mut self) {
        self.in_flight += 1;
        self.notice = None;
    }

    pub fn end_request(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Surface a calculate failure. Cancellations are dropped.
    pub fn show_error(&mut self, err: &CalculateError) {
        if err.is_silent() {
            return;
        }
        let level = if err.is_warning() { NoticeLevel::Warning } else { NoticeLevel::Error };
        self.notice = Some(Notice { level, message: err.to_string() });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
