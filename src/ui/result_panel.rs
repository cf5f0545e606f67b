//! Result display: recommended dose breakdown

use crate::app::DoseOxide;
use crate::ui::i18n;

/// Render the result panel (nothing is shown until a calculation ran)
pub fn render_result_panel(app: &mut DoseOxide, ui: &mut eframe::egui::Ui) {
    let lang = app.state.ui.lang;
    let t = i18n::labels(lang);

    let Some(computed) = app.state.last_result.clone() else {
        return;
    };
    let rounded = computed.result.rounded();

    ui.group(|ui| {
        ui.heading(t.result_title);
        ui.strong(format!("{:.1} U", rounded.total_dose));
        ui.separator();

        ui.label(format!("{}: {:.1} U", t.carb_dose, rounded.carb_dose));
        ui.label(format!(
            "{}: {:.1} U",
            t.correction_dose, rounded.correction_dose
        ));

        ui.separator();
        if let Some(period) = computed.period {
            ui.label(format!(
                "{}: {}",
                t.period_used,
                i18n::period_label(lang, period)
            ));
        }
        ui.label(format!("{}: {:.0} mg/dL", t.factor_used, computed.factor));
        ui.label(format!(
            "{} {}",
            t.calculated_at,
            computed.at.format("%H:%M")
        ));

        if ui.button(t.btn_copy).clicked() {
            let now = ui.input(|i| i.time);
            app.copy_result(now);
        }
    });
}
