//! Application struct and frame loop (the Presenter)
//!
//! `DoseOxide` wires the pure calculation core and the settings store to the
//! egui panels. All user-visible reporting goes through the `UiState` status
//! line; the core modules never touch the UI.

use chrono::Local;
use eframe::egui;

use crate::constants::{display, layout, storage};
use crate::dose;
use crate::settings::{FileMedium, Settings, SettingsStore, default_settings_path};
use crate::state::{AppState, ComputedDose, StatusKind};
use crate::ui::i18n::{self, Lang};
use crate::ui::{
    render_confirm_clear, render_dose_panel, render_result_panel, render_settings_panel,
};

pub struct DoseOxide {
    pub state: AppState,
    store: SettingsStore<FileMedium>,
}

impl DoseOxide {
    /// Open the default settings file and load whatever it holds.
    pub fn startup() -> Self {
        Self::with_store(SettingsStore::new(FileMedium::open(
            default_settings_path(),
        )))
    }

    pub fn with_store(store: SettingsStore<FileMedium>) -> Self {
        let mut state = AppState::new();
        if let Some(settings) = store.load() {
            state.settings = settings;
        }
        if let Some(lang) = store
            .load_str(storage::LANG_KEY)
            .as_deref()
            .and_then(Lang::from_code)
        {
            state.ui.lang = lang;
        }
        Self { state, store }
    }

    /// Switch the display language and remember the choice.
    pub fn set_lang(&mut self, lang: Lang) {
        self.state.ui.lang = lang;
        if let Err(e) = self.store.save_str(storage::LANG_KEY, lang.code()) {
            self.state.ui.set_error(e.user_message());
        }
    }

    /// Run one calculation from the current inputs and settings.
    pub fn calculate(&mut self) {
        let input = self.state.dose_input();
        match dose::compute_dose(&input, &self.state.settings) {
            Ok(result) => {
                let settings = &self.state.settings;
                // The factor is resolvable here, compute_dose validated it.
                if let Some(factor) = settings.schedule.factor_for(settings.period) {
                    let period = settings.schedule.is_by_period().then_some(settings.period);
                    self.state.last_result = Some(ComputedDose {
                        result,
                        factor,
                        period,
                        at: Local::now(),
                    });
                    self.state.ui.clear_status();
                }
            }
            Err(e) => {
                self.state.last_result = None;
                self.state
                    .ui
                    .set_error(i18n::error_message(self.state.ui.lang, &e));
            }
        }
    }

    /// Persist the settings form; `now` is the current egui time, used to
    /// expire the saved indicator.
    pub fn save_settings(&mut self, now: f64) {
        match self.store.save(&self.state.settings) {
            Ok(()) => {
                let message = i18n::labels(self.state.ui.lang).saved_message;
                self.state
                    .ui
                    .set_info(message, now + display::SAVED_INDICATOR_SECS);
            }
            Err(e) => self.state.ui.set_error(e.user_message()),
        }
    }

    /// Drop all persisted settings and reset the form to defaults.
    /// Confirmation happened in the UI before this is called.
    pub fn clear_settings(&mut self, now: f64) {
        if let Err(e) = self.store.clear() {
            self.state.ui.set_error(e.user_message());
            return;
        }
        self.state.settings = Settings::default();
        self.state.last_result = None;
        let message = i18n::labels(self.state.ui.lang).cleared_message;
        self.state
            .ui
            .set_info(message, now + display::SAVED_INDICATOR_SECS);
    }

    /// Copy a one-line summary of the last result to the system clipboard.
    pub fn copy_result(&mut self, now: f64) {
        let Some(computed) = &self.state.last_result else {
            return;
        };
        let t = i18n::labels(self.state.ui.lang);
        let r = computed.result.rounded();
        let text = format!(
            "{}: {:.1} U ({}: {:.1} U, {}: {:.1} U)",
            t.total_dose, r.total_dose, t.carb_dose, r.carb_dose, t.correction_dose, r.correction_dose
        );
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
            Ok(()) => {
                self.state
                    .ui
                    .set_info(t.copied_message, now + display::SAVED_INDICATOR_SECS);
            }
            Err(e) => self.state.ui.set_error(format!("Clipboard error: {}", e)),
        }
    }
}

impl eframe::App for DoseOxide {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.state.ui.tick(now);

        // Enter calculates, unless a confirmation window is waiting
        if !self.state.ui.confirm_clear && ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.calculate();
        }

        let t = i18n::labels(self.state.ui.lang);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(t.main_title);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let lang = self.state.ui.lang;
                        if ui.selectable_label(lang == Lang::En, "EN").clicked() {
                            self.set_lang(Lang::En);
                        }
                        if ui.selectable_label(lang == Lang::Pt, "PT").clicked() {
                            self.set_lang(Lang::Pt);
                        }
                    });
                });
                ui.separator();

                render_settings_panel(self, ui);
                ui.add_space(layout::STANDARD_PADDING);
                render_dose_panel(self, ui);
                ui.add_space(layout::STANDARD_PADDING);
                render_result_panel(self, ui);
                ui.add_space(layout::STANDARD_PADDING);

                ui.group(|ui| {
                    ui.strong(t.info_title);
                    ui.small(t.info_text);
                });

                // Status line at the bottom
                if let Some(status) = &self.state.ui.status {
                    ui.separator();
                    let color = match status.kind {
                        StatusKind::Info => egui::Color32::from_rgb(44, 160, 44),
                        StatusKind::Error => egui::Color32::from_rgb(214, 39, 40),
                    };
                    ui.colored_label(color, &status.text);
                }
            });
        });

        render_confirm_clear(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dose::Period;
    use crate::settings::CorrectionSchedule;

    fn app_with_tempdir() -> (DoseOxide, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(FileMedium::open(dir.path().join("settings.json")));
        (DoseOxide::with_store(store), dir)
    }

    #[test]
    fn test_calculate_from_text_inputs() {
        let (mut app, _dir) = app_with_tempdir();
        app.state.settings = Settings {
            carb_ratio: Some(15.0),
            target_glucose: Some(100.0),
            schedule: CorrectionSchedule::Flat { factor: Some(50.0) },
            period: Period::Morning,
        };
        app.state.glucose_input = "180".to_string();
        app.state.carbs_input = "60".to_string();

        app.calculate();

        let computed = app.state.last_result.as_ref().unwrap();
        assert_eq!(computed.result.rounded().total_dose, 5.6);
        assert_eq!(computed.factor, 50.0);
        assert_eq!(computed.period, None);
        assert!(app.state.ui.status.is_none());
    }

    #[test]
    fn test_calculate_with_missing_settings_sets_error() {
        let (mut app, _dir) = app_with_tempdir();
        app.state.glucose_input = "180".to_string();

        app.calculate();

        assert!(app.state.last_result.is_none());
        assert!(app.state.ui.has_error());
    }

    #[test]
    fn test_settings_survive_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let store = SettingsStore::new(FileMedium::open(&path));
        let mut app = DoseOxide::with_store(store);
        app.state.settings.carb_ratio = Some(12.0);
        app.state.settings.schedule = CorrectionSchedule::Flat { factor: Some(40.0) };
        app.save_settings(0.0);
        app.set_lang(Lang::En);

        // Fresh app instance over the same file keeps both.
        let reopened = DoseOxide::with_store(SettingsStore::new(FileMedium::open(&path)));
        assert_eq!(reopened.state.settings.carb_ratio, Some(12.0));
        assert_eq!(reopened.state.ui.lang, Lang::En);
    }

    #[test]
    fn test_clear_resets_to_defaults() {
        let (mut app, _dir) = app_with_tempdir();
        app.state.settings.carb_ratio = Some(12.0);
        app.save_settings(0.0);

        app.clear_settings(0.0);

        assert_eq!(app.state.settings, Settings::default());
        assert_eq!(app.store.load(), None);
        assert!(!app.state.ui.has_error());
    }
}
