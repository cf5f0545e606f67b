pub mod i18n;

mod confirm_dialog;
mod dose_panel;
mod result_panel;
mod settings_panel;

pub use confirm_dialog::render_confirm_clear;
pub use dose_panel::render_dose_panel;
pub use result_panel::render_result_panel;
pub use settings_panel::render_settings_panel;
