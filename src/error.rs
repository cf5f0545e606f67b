//! Error types for DoseOxide
//!
//! This module provides structured error handling using thiserror,
//! replacing ad-hoc String-based errors with proper typed errors.

use thiserror::Error;

/// Input or settings field referenced by a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CurrentGlucose,
    Carbs,
    CarbRatio,
    CorrectionFactor,
    TargetGlucose,
}

impl Field {
    /// English display name (see `ui::i18n` for localized names)
    pub fn name(&self) -> &'static str {
        match self {
            Field::CurrentGlucose => "current glucose",
            Field::Carbs => "carbs to consume",
            Field::CarbRatio => "insulin:carb ratio",
            Field::CorrectionFactor => "correction factor",
            Field::TargetGlucose => "target glucose",
        }
    }
}

/// Main error type for DoseOxide operations
#[derive(Error, Debug)]
pub enum DoseError {
    /// A required calculation field is absent, non-numeric, or not positive.
    /// The only error kind the calculator itself produces.
    #[error("Missing or invalid value for {}", .field.name())]
    MissingOrInvalid { field: Field },

    /// Settings file I/O error
    #[error("Failed to access settings file: {0}")]
    FileIo(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for DoseOxide operations
pub type Result<T> = std::result::Result<T, DoseError>;

/// UI-friendly error message formatting
impl DoseError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            DoseError::MissingOrInvalid { field } => {
                format!("Please enter a value greater than zero for {}", field.name())
            }
            DoseError::FileIo(e) => format!("Settings file error: {}", e),
            DoseError::Json(e) => format!("Settings format error: {}", e),
        }
    }

    /// Get a short title for the error (for the status line)
    pub fn title(&self) -> &'static str {
        match self {
            DoseError::MissingOrInvalid { .. } => "Invalid Input",
            DoseError::FileIo(_) => "File Error",
            DoseError::Json(_) => "Settings Error",
        }
    }
}
