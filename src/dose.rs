//! Dose calculation
//!
//! Pure bolus arithmetic: carbohydrate-ratio dosing plus correction-factor
//! dosing. No I/O, no UI, no globals; the presentation layer parses user text
//! into a `DoseInput`, pairs it with the persisted `Settings` and renders the
//! returned `DoseResult` or surfaces the validation error.

use serde::{Deserialize, Serialize};

use crate::error::{DoseError, Field, Result};
use crate::settings::Settings;

/// Time-of-day slot selecting which correction factor applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Predawn,
}

impl Period {
    /// All periods, in display order
    pub const ALL: [Period; 4] = [
        Period::Morning,
        Period::Afternoon,
        Period::Evening,
        Period::Predawn,
    ];
}

/// User-entered values for one calculation. Ephemeral; nothing is retained
/// between calls.
///
/// Fields are optional because they come from free-form text inputs: an empty
/// or unparseable field arrives as `None` and is rejected by validation, not
/// silently defaulted. Carbs are the one genuinely optional field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DoseInput {
    /// Current blood glucose in mg/dL
    pub current_glucose: Option<f64>,

    /// Grams of carbohydrate about to be consumed (absent or zero: no carb dose)
    pub carbs: Option<f64>,
}

/// Computed recommendation, full precision. Round only for display via
/// [`DoseResult::rounded`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoseResult {
    /// Insulin units covering the carbohydrates
    pub carb_dose: f64,

    /// Insulin units bringing glucose down to target (clamped at zero)
    pub correction_dose: f64,

    /// Sum of the two, clamped at zero
    pub total_dose: f64,
}

impl DoseResult {
    /// Copy with every dose rounded to one decimal place, for display.
    pub fn rounded(&self) -> DoseResult {
        DoseResult {
            carb_dose: round1(self.carb_dose),
            correction_dose: round1(self.correction_dose),
            total_dose: round1(self.total_dose),
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Reject absent, non-numeric and non-positive values, naming the field.
fn require_positive(field: Field, value: Option<f64>) -> Result<f64> {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(DoseError::MissingOrInvalid { field }),
    }
}

/// Compute a recommended insulin dose.
///
/// The active correction factor is resolved from the settings schedule (the
/// per-period factor of the selected period, or the flat factor). Every
/// required field is validated before any arithmetic runs. A glucose reading
/// below target yields a correction dose of exactly zero; it never reduces
/// the carb dose.
pub fn compute_dose(input: &DoseInput, settings: &Settings) -> Result<DoseResult> {
    // Validation first: all required fields present, numeric and > 0.
    let factor = require_positive(
        Field::CorrectionFactor,
        settings.schedule.factor_for(settings.period),
    )?;
    let carb_ratio = require_positive(Field::CarbRatio, settings.carb_ratio)?;
    let target = require_positive(Field::TargetGlucose, settings.target_glucose)?;
    let glucose = require_positive(Field::CurrentGlucose, input.current_glucose)?;

    // Carbs are optional, but a present value must be a non-negative number.
    if let Some(carbs) = input.carbs {
        if !carbs.is_finite() || carbs < 0.0 {
            return Err(DoseError::MissingOrInvalid { field: Field::Carbs });
        }
    }

    // Correction dose, clamped: below-target glucose never subtracts insulin.
    let correction_dose = ((glucose - target) / factor).max(0.0);

    let carb_dose = match input.carbs {
        Some(carbs) if carbs > 0.0 => carbs / carb_ratio,
        _ => 0.0,
    };

    // Both addends are already non-negative; the outer clamp is defensive.
    let total_dose = (carb_dose + correction_dose).max(0.0);

    Ok(DoseResult {
        carb_dose,
        correction_dose,
        total_dose,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::CorrectionSchedule;

    fn flat_settings(factor: f64, carb_ratio: f64, target: f64) -> Settings {
        Settings {
            carb_ratio: Some(carb_ratio),
            target_glucose: Some(target),
            schedule: CorrectionSchedule::Flat {
                factor: Some(factor),
            },
            period: Period::Morning,
        }
    }

    #[test]
    fn test_correction_and_carb_dose() {
        // 180 mg/dL vs 100 target at factor 50, 60 g at ratio 15
        let settings = flat_settings(50.0, 15.0, 100.0);
        let input = DoseInput {
            current_glucose: Some(180.0),
            carbs: Some(60.0),
        };

        let result = compute_dose(&input, &settings).unwrap();
        assert_eq!(result.correction_dose, 1.6);
        assert_eq!(result.carb_dose, 4.0);
        assert!((result.total_dose - 5.6).abs() < 1e-12);
        assert_eq!(result.rounded().total_dose, 5.6);
    }

    #[test]
    fn test_below_target_clamps_to_zero() {
        // 90 mg/dL is below the 100 target: no correction, and no negative
        // adjustment against the (absent) carb dose.
        let settings = flat_settings(50.0, 15.0, 100.0);
        let input = DoseInput {
            current_glucose: Some(90.0),
            carbs: Some(0.0),
        };

        let result = compute_dose(&input, &settings).unwrap();
        assert_eq!(result.correction_dose, 0.0);
        assert_eq!(result.carb_dose, 0.0);
        assert_eq!(result.total_dose, 0.0);
    }

    #[test]
    fn test_below_target_keeps_carb_dose_intact() {
        let settings = flat_settings(50.0, 10.0, 100.0);
        let input = DoseInput {
            current_glucose: Some(60.0),
            carbs: Some(30.0),
        };

        let result = compute_dose(&input, &settings).unwrap();
        assert_eq!(result.correction_dose, 0.0);
        assert_eq!(result.carb_dose, 3.0);
        assert_eq!(result.total_dose, 3.0);
    }

    #[test]
    fn test_absent_carbs_means_zero_carb_dose() {
        let settings = flat_settings(40.0, 12.0, 110.0);
        let input = DoseInput {
            current_glucose: Some(190.0),
            carbs: None,
        };

        let result = compute_dose(&input, &settings).unwrap();
        assert_eq!(result.carb_dose, 0.0);
        assert_eq!(result.correction_dose, 2.0);
    }

    #[test]
    fn test_missing_carb_ratio_is_an_error() {
        let mut settings = flat_settings(50.0, 15.0, 100.0);
        settings.carb_ratio = None;
        let input = DoseInput {
            current_glucose: Some(180.0),
            carbs: Some(60.0),
        };

        let err = compute_dose(&input, &settings).unwrap_err();
        assert!(matches!(
            err,
            DoseError::MissingOrInvalid {
                field: Field::CarbRatio
            }
        ));
    }

    #[test]
    fn test_zero_and_nan_fields_are_rejected() {
        let settings = flat_settings(50.0, 15.0, 100.0);

        let zero_glucose = DoseInput {
            current_glucose: Some(0.0),
            carbs: None,
        };
        assert!(matches!(
            compute_dose(&zero_glucose, &settings).unwrap_err(),
            DoseError::MissingOrInvalid {
                field: Field::CurrentGlucose
            }
        ));

        let nan_glucose = DoseInput {
            current_glucose: Some(f64::NAN),
            carbs: None,
        };
        assert!(compute_dose(&nan_glucose, &settings).is_err());

        let negative_carbs = DoseInput {
            current_glucose: Some(150.0),
            carbs: Some(-5.0),
        };
        assert!(matches!(
            compute_dose(&negative_carbs, &settings).unwrap_err(),
            DoseError::MissingOrInvalid { field: Field::Carbs }
        ));
    }

    #[test]
    fn test_period_resolution_picks_matching_factor() {
        let mut settings = Settings {
            carb_ratio: Some(10.0),
            target_glucose: Some(100.0),
            schedule: CorrectionSchedule::ByPeriod {
                morning: Some(40.0),
                afternoon: Some(50.0),
                evening: Some(60.0),
                predawn: None,
            },
            period: Period::Afternoon,
        };
        let input = DoseInput {
            current_glucose: Some(200.0),
            carbs: None,
        };

        let result = compute_dose(&input, &settings).unwrap();
        assert_eq!(result.correction_dose, 2.0);

        // The predawn slot has no factor configured.
        settings.period = Period::Predawn;
        assert!(matches!(
            compute_dose(&input, &settings).unwrap_err(),
            DoseError::MissingOrInvalid {
                field: Field::CorrectionFactor
            }
        ));
    }

    #[test]
    fn test_compute_dose_is_deterministic() {
        let settings = flat_settings(37.0, 13.0, 105.0);
        let input = DoseInput {
            current_glucose: Some(243.0),
            carbs: Some(47.0),
        };

        let a = compute_dose(&input, &settings).unwrap();
        let b = compute_dose(&input, &settings).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_total_is_never_negative() {
        // Extreme but valid inputs still produce a non-negative total.
        let settings = flat_settings(1.0, 1.0, 10_000.0);
        let input = DoseInput {
            current_glucose: Some(1.0),
            carbs: Some(0.0),
        };

        let result = compute_dose(&input, &settings).unwrap();
        assert!(result.total_dose >= 0.0);
        assert_eq!(result.total_dose, 0.0);
    }

    #[test]
    fn test_rounding_is_display_only() {
        // 100 / 30 = 3.333...; the stored result keeps full precision.
        let settings = flat_settings(30.0, 30.0, 100.0);
        let input = DoseInput {
            current_glucose: Some(200.0),
            carbs: Some(100.0),
        };

        let result = compute_dose(&input, &settings).unwrap();
        assert!((result.carb_dose - 100.0 / 30.0).abs() < 1e-12);
        assert_eq!(result.rounded().carb_dose, 3.3);
        assert_eq!(result.rounded().correction_dose, 3.3);
        assert_eq!(result.rounded().total_dose, 6.7);
    }
}
