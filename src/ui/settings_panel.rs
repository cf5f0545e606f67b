//! Personal settings form: ratios, target, correction factor schedule

use crate::app::DoseOxide;
use crate::constants::{defaults, display};
use crate::dose::Period;
use crate::settings::CorrectionSchedule;
use crate::ui::i18n;
use crate::widgets::PositiveInput;

/// Render the settings panel
pub fn render_settings_panel(app: &mut DoseOxide, ui: &mut eframe::egui::Ui) {
    let lang = app.state.ui.lang;
    let t = i18n::labels(lang);

    ui.heading(t.config_title);
    ui.separator();

    PositiveInput::new(t.label_carb_ratio, &mut app.state.settings.carb_ratio)
        .speed(defaults::RATIO_DRAG_SPEED)
        .suffix(" g")
        .show(ui);
    PositiveInput::new(t.label_target_glucose, &mut app.state.settings.target_glucose)
        .speed(defaults::GLUCOSE_DRAG_SPEED)
        .suffix(" mg/dL")
        .show(ui);

    ui.add_space(4.0);

    // Flat factor or one factor per time-of-day period
    let mut by_period = app.state.settings.schedule.is_by_period();
    ui.horizontal(|ui| {
        ui.radio_value(&mut by_period, false, t.schedule_flat);
        ui.radio_value(&mut by_period, true, t.schedule_by_period);
    });
    if by_period != app.state.settings.schedule.is_by_period() {
        app.state.settings.schedule = if by_period {
            CorrectionSchedule::empty_by_period()
        } else {
            CorrectionSchedule::default()
        };
    }

    if app.state.settings.schedule.is_by_period() {
        let mut period = app.state.settings.period;
        eframe::egui::ComboBox::from_label(t.label_period)
            .selected_text(i18n::period_label(lang, period))
            .show_ui(ui, |ui| {
                for p in Period::ALL {
                    ui.selectable_value(&mut period, p, i18n::period_label(lang, p));
                }
            });
        app.state.settings.period = period;

        ui.label(t.label_correction_factor);
        for p in Period::ALL {
            let active = p == app.state.settings.period;
            let label = i18n::period_label(lang, p);
            let slot = app.state.settings.schedule.slot_mut(p);
            // Dim the factor fields of inactive periods to focus the active one
            ui.scope(|ui| {
                if !active {
                    ui.set_opacity(display::INACTIVE_PERIOD_OPACITY);
                }
                PositiveInput::new(label, slot)
                    .speed(defaults::RATIO_DRAG_SPEED)
                    .suffix(" mg/dL")
                    .show(ui);
            });
        }
    } else {
        let slot = app.state.settings.schedule.slot_mut(Period::Morning);
        PositiveInput::new(t.label_correction_factor, slot)
            .speed(defaults::RATIO_DRAG_SPEED)
            .suffix(" mg/dL")
            .show(ui);
    }

    ui.add_space(4.0);

    ui.horizontal(|ui| {
        if ui.button(t.btn_save).clicked() {
            let now = ui.input(|i| i.time);
            app.save_settings(now);
        }
        // Clearing goes through a confirmation window; the store clear
        // itself is unconditional.
        if ui.button(t.btn_clear).clicked() {
            app.state.ui.confirm_clear = true;
        }
    });
}
