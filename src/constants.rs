//! Application-wide constants and default values
//!
//! This module centralizes all magic numbers and default values used throughout
//! the application, making them easier to maintain and configure.

/// Dosing defaults
pub mod defaults {
    /// Default target glucose in mg/dL (baseline for correction dosing)
    pub const TARGET_GLUCOSE: f64 = 100.0;

    /// Drag speed for glucose-valued inputs (mg/dL)
    pub const GLUCOSE_DRAG_SPEED: f64 = 1.0;

    /// Drag speed for ratio-valued inputs (g or mg/dL per unit)
    pub const RATIO_DRAG_SPEED: f64 = 0.5;
}

/// Settings persistence
pub mod storage {
    /// Namespace prefix for every key this application owns in the medium.
    /// `clear()` removes exactly the keys carrying this prefix.
    pub const KEY_PREFIX: &str = "insulin_";

    /// Key (under the prefix) holding the whole settings object as one document
    pub const SETTINGS_KEY: &str = "settings";

    /// Key (under the prefix) holding the UI language
    pub const LANG_KEY: &str = "lang";

    /// Settings file name inside the application directory
    pub const SETTINGS_FILE: &str = "settings.json";

    /// Environment variable overriding the application directory
    pub const DIR_ENV: &str = "DOSE_OXIDE_DIR";

    /// Application directory under $HOME
    pub const APP_DIR: &str = ".dose-oxide";
}

/// Display and formatting
pub mod display {
    /// How long the "settings saved" indicator stays visible, in seconds
    pub const SAVED_INDICATOR_SECS: f64 = 3.0;

    /// Opacity applied to correction factor fields of inactive periods
    pub const INACTIVE_PERIOD_OPACITY: f32 = 0.5;
}

/// UI layout defaults
pub mod layout {
    /// Numeric input field width
    pub const INPUT_WIDTH: f32 = 110.0;

    /// Standard UI element padding
    pub const STANDARD_PADDING: f32 = 10.0;

    /// Initial window size
    pub const WINDOW_SIZE: [f32; 2] = [540.0, 720.0];

    /// Minimum window size
    pub const MIN_WINDOW_SIZE: [f32; 2] = [420.0, 540.0];
}
