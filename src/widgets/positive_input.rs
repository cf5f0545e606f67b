//! Optional positive-number input widget for settings fields

use egui::{Response, Ui};

use crate::constants::layout;

/// A labeled numeric input bound to an `Option<f64>`. Zero shows as "unset":
/// the bound option only holds strictly positive values, matching the rule
/// that zero or missing settings block calculation.
pub struct PositiveInput<'a> {
    label: &'a str,
    value: &'a mut Option<f64>,
    speed: f64,
    suffix: &'a str,
}

impl<'a> PositiveInput<'a> {
    /// Create a new positive input bound to `value`
    pub fn new(label: &'a str, value: &'a mut Option<f64>) -> Self {
        Self {
            label,
            value,
            speed: 1.0,
            suffix: "",
        }
    }

    /// Set the drag speed
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set a unit suffix shown inside the field
    pub fn suffix(mut self, suffix: &'a str) -> Self {
        self.suffix = suffix;
        self
    }

    /// Show the widget
    pub fn show(self, ui: &mut Ui) -> Response {
        ui.horizontal(|ui| {
            let mut v = self.value.unwrap_or(0.0);
            ui.add_sized(
                [layout::INPUT_WIDTH, ui.spacing().interact_size.y],
                egui::DragValue::new(&mut v)
                    .speed(self.speed)
                    .range(0.0..=f64::MAX)
                    .suffix(self.suffix),
            );
            ui.label(self.label);

            *self.value = if v > 0.0 { Some(v) } else { None };
        })
        .response
    }
}
