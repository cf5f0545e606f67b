//! Persisted user settings
//!
//! The settings carry the personal dosing parameters: insulin:carb ratio,
//! target glucose and the correction factor schedule. Values are optional at
//! rest (the store never invents numbers); validation happens at calculation
//! time in `dose::compute_dose`.

mod store;

pub use store::{FileMedium, KvMedium, MemoryMedium, SettingsStore, default_settings_path};

use serde::{Deserialize, Serialize};

use crate::constants::defaults;
use crate::dose::Period;

/// Correction factor configuration. Either one flat factor, or one factor
/// per time-of-day period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CorrectionSchedule {
    /// A single factor used regardless of time of day
    Flat { factor: Option<f64> },

    /// One factor per period; the active period picks which one applies
    ByPeriod {
        morning: Option<f64>,
        afternoon: Option<f64>,
        evening: Option<f64>,
        predawn: Option<f64>,
    },
}

impl Default for CorrectionSchedule {
    fn default() -> Self {
        CorrectionSchedule::Flat { factor: None }
    }
}

impl CorrectionSchedule {
    /// Factor applying at `period`. The flat schedule ignores the period.
    pub fn factor_for(&self, period: Period) -> Option<f64> {
        match self {
            CorrectionSchedule::Flat { factor } => *factor,
            CorrectionSchedule::ByPeriod {
                morning,
                afternoon,
                evening,
                predawn,
            } => match period {
                Period::Morning => *morning,
                Period::Afternoon => *afternoon,
                Period::Evening => *evening,
                Period::Predawn => *predawn,
            },
        }
    }

    /// Mutable factor slot for `period`. The flat schedule has one slot
    /// shared by every period.
    pub fn slot_mut(&mut self, period: Period) -> &mut Option<f64> {
        match self {
            CorrectionSchedule::Flat { factor } => factor,
            CorrectionSchedule::ByPeriod {
                morning,
                afternoon,
                evening,
                predawn,
            } => match period {
                Period::Morning => morning,
                Period::Afternoon => afternoon,
                Period::Evening => evening,
                Period::Predawn => predawn,
            },
        }
    }

    pub fn is_by_period(&self) -> bool {
        matches!(self, CorrectionSchedule::ByPeriod { .. })
    }

    /// An empty per-period schedule, for switching modes in the UI
    pub fn empty_by_period() -> Self {
        CorrectionSchedule::ByPeriod {
            morning: None,
            afternoon: None,
            evening: None,
            predawn: None,
        }
    }
}

/// The whole persisted configuration. Serialized as one JSON document and
/// written to the medium in a single operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Grams of carbohydrate offset by one unit of insulin
    pub carb_ratio: Option<f64>,

    /// Baseline glucose for correction dosing, mg/dL
    pub target_glucose: Option<f64>,

    /// Correction factor configuration
    #[serde(default)]
    pub schedule: CorrectionSchedule,

    /// Active time-of-day period (only meaningful for a by-period schedule)
    #[serde(default)]
    pub period: Period,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            carb_ratio: None,
            target_glucose: Some(defaults::TARGET_GLUCOSE),
            schedule: CorrectionSchedule::default(),
            period: Period::default(),
        }
    }
}
