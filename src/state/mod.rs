//! Application state management
//!
//! Organizes the DoseOxide application state into focused components: the
//! persisted settings being edited, the ephemeral calculation inputs, the
//! last computed recommendation and the UI interaction state.

mod ui;

pub use ui::{StatusKind, StatusMessage, UiState};

use chrono::{DateTime, Local};

use crate::dose::{DoseInput, DoseResult, Period};
use crate::settings::Settings;

/// A computed recommendation together with the context it was computed in,
/// for the result panel.
#[derive(Debug, Clone)]
pub struct ComputedDose {
    /// Full-precision doses (rounded at render time)
    pub result: DoseResult,

    /// The correction factor that was applied
    pub factor: f64,

    /// The period the factor came from (`None` for a flat schedule)
    pub period: Option<Period>,

    /// Wall-clock time of the calculation
    pub at: DateTime<Local>,
}

/// Main application state container
pub struct AppState {
    /// Settings as currently edited in the form (persisted on explicit save)
    pub settings: Settings,

    /// Raw text of the current glucose input field
    pub glucose_input: String,

    /// Raw text of the carbs input field
    pub carbs_input: String,

    /// Most recent calculation, if any
    pub last_result: Option<ComputedDose>,

    /// UI interaction state
    pub ui: UiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            glucose_input: String::new(),
            carbs_input: String::new(),
            last_result: None,
            ui: UiState::default(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the free-form text fields into a `DoseInput`. Empty or
    /// unparseable text becomes `None`; validation decides what that means.
    pub fn dose_input(&self) -> DoseInput {
        DoseInput {
            current_glucose: parse_field(&self.glucose_input),
            carbs: parse_field(&self.carbs_input),
        }
    }
}

fn parse_field(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    // Accept a decimal comma, the original audience's locale.
    trimmed.replace(',', ".").parse::<f64>().ok()
}
