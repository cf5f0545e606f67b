//! Calculation inputs: current glucose and carbs to consume

use crate::app::DoseOxide;
use crate::constants::layout;
use crate::ui::i18n;

/// Render the dose input panel
pub fn render_dose_panel(app: &mut DoseOxide, ui: &mut eframe::egui::Ui) {
    let t = i18n::labels(app.state.ui.lang);

    ui.heading(t.calc_title);
    ui.separator();

    ui.horizontal(|ui| {
        ui.add(
            eframe::egui::TextEdit::singleline(&mut app.state.glucose_input)
                .desired_width(layout::INPUT_WIDTH)
                .hint_text("mg/dL"),
        );
        ui.label(t.label_current_glucose);
    });

    ui.horizontal(|ui| {
        ui.add(
            eframe::egui::TextEdit::singleline(&mut app.state.carbs_input)
                .desired_width(layout::INPUT_WIDTH)
                .hint_text("g"),
        );
        ui.label(t.label_carbs);
    });

    ui.add_space(4.0);

    if ui.button(t.btn_calculate).clicked() {
        app.calculate();
    }
}
