//! Confirmation window guarding the clear-settings action

use crate::app::DoseOxide;
use crate::ui::i18n;

pub fn render_confirm_clear(app: &mut DoseOxide, ctx: &eframe::egui::Context) {
    if !app.state.ui.confirm_clear {
        return;
    }
    let t = i18n::labels(app.state.ui.lang);

    eframe::egui::Window::new(t.confirm_clear_title)
        .anchor(eframe::egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(t.confirm_clear_text);
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button(t.btn_yes).clicked() {
                    let now = ui.input(|i| i.time);
                    app.clear_settings(now);
                    app.state.ui.confirm_clear = false;
                }
                if ui.button(t.btn_no).clicked() {
                    app.state.ui.confirm_clear = false;
                }
            });
        });

    if ctx.input(|i| i.key_pressed(eframe::egui::Key::Escape)) {
        app.state.ui.confirm_clear = false;
    }
}
