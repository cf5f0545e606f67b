//! Bilingual label tables (Portuguese / English)
//!
//! The active language lives in `UiState` and is passed explicitly into the
//! render functions; nothing here is global or mutable.

use crate::dose::Period;
use crate::error::{DoseError, Field};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Pt,
    En,
}

impl Lang {
    /// Short code used as the persisted value
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Pt => "pt",
            Lang::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "pt" => Some(Lang::Pt),
            "en" => Some(Lang::En),
            _ => None,
        }
    }
}

/// All user-visible strings for one language
pub struct Labels {
    pub main_title: &'static str,
    pub config_title: &'static str,
    pub label_carb_ratio: &'static str,
    pub label_target_glucose: &'static str,
    pub label_correction_factor: &'static str,
    pub schedule_flat: &'static str,
    pub schedule_by_period: &'static str,
    pub label_period: &'static str,
    pub btn_save: &'static str,
    pub btn_clear: &'static str,
    pub calc_title: &'static str,
    pub label_current_glucose: &'static str,
    pub label_carbs: &'static str,
    pub btn_calculate: &'static str,
    pub result_title: &'static str,
    pub carb_dose: &'static str,
    pub correction_dose: &'static str,
    pub total_dose: &'static str,
    pub period_used: &'static str,
    pub factor_used: &'static str,
    pub calculated_at: &'static str,
    pub btn_copy: &'static str,
    pub copied_message: &'static str,
    pub saved_message: &'static str,
    pub cleared_message: &'static str,
    pub confirm_clear_title: &'static str,
    pub confirm_clear_text: &'static str,
    pub btn_yes: &'static str,
    pub btn_no: &'static str,
    pub info_title: &'static str,
    pub info_text: &'static str,
    pub fill_field: &'static str,
}

static PT: Labels = Labels {
    main_title: "Calculadora de Insulina",
    config_title: "Configurações Pessoais",
    label_carb_ratio: "Razão Insulina:Carboidrato (1 unidade para X gramas)",
    label_target_glucose: "Glicemia Alvo (mg/dL)",
    label_correction_factor: "Fator de Correção (1 unidade reduz X mg/dL)",
    schedule_flat: "Fator único",
    schedule_by_period: "Fator por período",
    label_period: "Período do dia",
    btn_save: "Salvar Configurações",
    btn_clear: "Limpar Configurações",
    calc_title: "Calcular Dose",
    label_current_glucose: "Glicemia Atual (mg/dL)",
    label_carbs: "Carboidratos a Consumir (gramas)",
    btn_calculate: "Calcular Insulina",
    result_title: "Dose Recomendada",
    carb_dose: "Dose para carboidratos",
    correction_dose: "Dose de correção",
    total_dose: "Dose total",
    period_used: "Período utilizado",
    factor_used: "Fator utilizado",
    calculated_at: "Calculado às",
    btn_copy: "Copiar",
    copied_message: "Resultado copiado!",
    saved_message: "✓ Configurações salvas!",
    cleared_message: "Configurações limpas com sucesso!",
    confirm_clear_title: "Limpar configurações?",
    confirm_clear_text: "Tem certeza que deseja limpar todas as configurações salvas?",
    btn_yes: "Sim",
    btn_no: "Não",
    info_title: "⚕ Aviso Importante",
    info_text: "Esta calculadora é apenas uma ferramenta educacional. Sempre consulte \
                seu médico ou profissional de saúde antes de ajustar suas doses de \
                insulina.",
    fill_field: "Por favor, preencha um valor maior que zero para",
};

static EN: Labels = Labels {
    main_title: "Insulin Calculator",
    config_title: "Personal Settings",
    label_carb_ratio: "Insulin:Carb Ratio (1 unit per X grams)",
    label_target_glucose: "Target Glucose (mg/dL)",
    label_correction_factor: "Correction Factor (1 unit lowers X mg/dL)",
    schedule_flat: "Single factor",
    schedule_by_period: "Factor per period",
    label_period: "Period of day",
    btn_save: "Save Settings",
    btn_clear: "Clear Settings",
    calc_title: "Calculate Dose",
    label_current_glucose: "Current Glucose (mg/dL)",
    label_carbs: "Carbs to Consume (grams)",
    btn_calculate: "Calculate Insulin",
    result_title: "Recommended Dose",
    carb_dose: "Dose for carbs",
    correction_dose: "Correction dose",
    total_dose: "Total dose",
    period_used: "Period used",
    factor_used: "Factor used",
    calculated_at: "Calculated at",
    btn_copy: "Copy",
    copied_message: "Result copied!",
    saved_message: "✓ Settings saved!",
    cleared_message: "Settings cleared successfully!",
    confirm_clear_title: "Clear settings?",
    confirm_clear_text: "Are you sure you want to clear all saved settings?",
    btn_yes: "Yes",
    btn_no: "No",
    info_title: "⚕ Important Notice",
    info_text: "This calculator is only an educational tool. Always consult your \
                doctor or healthcare professional before adjusting your insulin \
                doses.",
    fill_field: "Please enter a value greater than zero for",
};

pub fn labels(lang: Lang) -> &'static Labels {
    match lang {
        Lang::Pt => &PT,
        Lang::En => &EN,
    }
}

/// Display label for a time-of-day period
pub fn period_label(lang: Lang, period: Period) -> &'static str {
    match (lang, period) {
        (Lang::Pt, Period::Morning) => "Manhã",
        (Lang::Pt, Period::Afternoon) => "Tarde",
        (Lang::Pt, Period::Evening) => "Noite",
        (Lang::Pt, Period::Predawn) => "Madrugada",
        (Lang::En, Period::Morning) => "Morning",
        (Lang::En, Period::Afternoon) => "Afternoon",
        (Lang::En, Period::Evening) => "Evening",
        (Lang::En, Period::Predawn) => "Pre-dawn",
    }
}

/// Display name for a validated field
pub fn field_label(lang: Lang, field: Field) -> &'static str {
    match (lang, field) {
        (Lang::Pt, Field::CurrentGlucose) => "glicemia atual",
        (Lang::Pt, Field::Carbs) => "carboidratos",
        (Lang::Pt, Field::CarbRatio) => "razão I:C",
        (Lang::Pt, Field::CorrectionFactor) => "fator de correção",
        (Lang::Pt, Field::TargetGlucose) => "glicemia alvo",
        (Lang::En, field) => field.name(),
    }
}

/// Localized user-facing message for an error
pub fn error_message(lang: Lang, err: &DoseError) -> String {
    match err {
        DoseError::MissingOrInvalid { field } => {
            format!("{} {}", labels(lang).fill_field, field_label(lang, *field))
        }
        _ => err.user_message(),
    }
}
