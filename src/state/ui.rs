//! UI interaction state

#![allow(dead_code)]

use crate::ui::i18n::Lang;

/// Whether a status line entry is informational or an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One entry for the status line, optionally expiring
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
    /// Absolute egui time (seconds) after which the message disappears
    pub expires_at: Option<f64>,
}

/// UI state: language, transient status message, pending confirmation
#[derive(Debug, Clone)]
pub struct UiState {
    /// Active display language, passed explicitly into render functions
    pub lang: Lang,

    /// Current status line content (saved indicator, validation error)
    pub status: Option<StatusMessage>,

    /// Clear-settings confirmation window is open
    pub confirm_clear: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            lang: Lang::default(),
            status: None,
            confirm_clear: false,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an error message (stays until replaced or cleared)
    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Error,
            text: text.into(),
            expires_at: None,
        });
    }

    /// Set an informational message that expires at `expires_at`
    pub fn set_info(&mut self, text: impl Into<String>, expires_at: f64) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Info,
            text: text.into(),
            expires_at: Some(expires_at),
        });
    }

    /// Clear the current status message
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Drop an expired message. Call once per frame with the current egui time.
    pub fn tick(&mut self, now: f64) {
        if let Some(status) = &self.status {
            if status.expires_at.is_some_and(|at| now >= at) {
                self.status = None;
            }
        }
    }

    pub fn has_error(&self) -> bool {
        self.status
            .as_ref()
            .is_some_and(|s| s.kind == StatusKind::Error)
    }
}
