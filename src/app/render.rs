use crate::config::{OutputFormat, Settings};
use crate::core::Adjustment;
use crate::domain::model::{AdjustmentDirection, InrBand, NewDose};
use crate::utils::error::Result;
use serde::Serialize;

pub const DISCLAIMER: &str = "This calculator provides a *simplified* dosage estimate for \
informational purposes only. It is NOT a substitute for professional medical advice, diagnosis, \
or treatment. Always consult with your healthcare provider for any decisions regarding your \
medication and treatment plan.";

pub const ESTIMATE_NOTE: &str = "(This is a calculated estimate based on a simplified algorithm.)";

#[derive(Debug, Clone, Serialize)]
pub struct DosageReport {
    pub inr: f64,
    pub current_weekly_dose: f64,
    pub new_weekly_dose: NewDose,
    pub unit: String,
    pub band: InrBand,
    pub direction: AdjustmentDirection,
    pub percent_change: i32,
    pub rationale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
}

impl DosageReport {
    pub fn from_adjustment(adjustment: &Adjustment, settings: &Settings) -> Self {
        Self {
            inr: adjustment.inr.value(),
            current_weekly_dose: adjustment.current_weekly_dose.mg(),
            new_weekly_dose: adjustment.new_weekly_dose,
            unit: settings.unit.clone(),
            band: adjustment.band,
            direction: adjustment.direction(),
            percent_change: adjustment.percent_change(),
            rationale: adjustment.rationale(),
            disclaimer: settings.show_disclaimer.then(|| DISCLAIMER.to_string()),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();

        if let Some(disclaimer) = &self.disclaimer {
            lines.push("Important Disclaimer:".to_string());
            lines.push(disclaimer.clone());
            lines.push(String::new());
        }

        lines.push(format!(
            "Suggested New Weekly Dosage: {} {}",
            self.new_weekly_dose, self.unit
        ));
        lines.push(self.rationale.clone());
        lines.push(ESTIMATE_NOTE.to_string());

        lines.join("\n")
    }
}
