use crate::core::rounding::to_fixed_2;
use crate::core::{Adjustment, DosageAdjuster, DosageRule, DoseRequest};
use crate::utils::error::{DoseError, InputField, Result};
use crate::utils::validation::is_decimal_text;

/// State of the dosage form: two text fields, the last suggestion and the
/// last error message. Every edit invalidates the previous suggestion.
#[derive(Debug, Clone, Default)]
pub struct DoseForm<R: DosageRule = DosageAdjuster> {
    rule: R,
    inr: String,
    current_weekly_dose: String,
    new_weekly_dose: Option<String>,
    error: Option<String>,
}

impl DoseForm<DosageAdjuster> {
    pub fn new() -> Self {
        Self::with_rule(DosageAdjuster)
    }
}

impl<R: DosageRule> DoseForm<R> {
    pub fn with_rule(rule: R) -> Self {
        Self {
            rule,
            inr: String::new(),
            current_weekly_dose: String::new(),
            new_weekly_dose: None,
            error: None,
        }
    }

    pub fn set_inr(&mut self, text: &str) -> Result<()> {
        self.edit(InputField::Inr, text)
    }

    pub fn set_current_weekly_dose(&mut self, text: &str) -> Result<()> {
        self.edit(InputField::CurrentWeeklyDose, text)
    }

    fn edit(&mut self, field: InputField, text: &str) -> Result<()> {
        if !is_decimal_text(text) {
            let err = DoseError::InputFormatError {
                field,
                value: text.to_string(),
            };
            tracing::debug!("Rejected {} entry {:?}", field, text);
            // 保留原本的輸入，只顯示錯誤訊息
            self.error = Some(err.user_friendly_message());
            return Err(err);
        }

        match field {
            InputField::Inr => self.inr = text.to_string(),
            InputField::CurrentWeeklyDose => self.current_weekly_dose = text.to_string(),
        }
        self.error = None;
        self.new_weekly_dose = None;
        Ok(())
    }

    /// Run the dosage rule on the current field contents.
    pub fn calculate(&mut self) -> Result<Adjustment> {
        let request = DoseRequest::new(parse_decimal(&self.inr), parse_decimal(&self.current_weekly_dose));
        tracing::debug!(
            "Calculating with INR {:?} and weekly dose {:?}",
            self.inr,
            self.current_weekly_dose
        );

        match self.rule.assess(&request) {
            Ok(adjustment) => {
                let fixed = to_fixed_2(adjustment.new_weekly_dose.mg());
                tracing::info!(
                    band = ?adjustment.band,
                    "Suggested weekly dose {} mg (was {} mg)",
                    fixed,
                    adjustment.current_weekly_dose
                );
                self.new_weekly_dose = Some(fixed);
                self.error = None;
                Ok(adjustment)
            }
            Err(e) => {
                let err = DoseError::from(e);
                tracing::warn!("Dosage calculation rejected: {}", err);
                self.error = Some(err.user_friendly_message());
                self.new_weekly_dose = None;
                Err(err)
            }
        }
    }

    pub fn inr(&self) -> &str {
        &self.inr
    }

    pub fn current_weekly_dose(&self) -> &str {
        &self.current_weekly_dose
    }

    /// Fixed two-decimal suggestion from the last successful calculation.
    pub fn new_weekly_dose(&self) -> Option<&str> {
        self.new_weekly_dose.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Text with no digits (empty, or a lone ".") becomes NaN and is later
/// rejected by the rule.
fn parse_decimal(text: &str) -> f64 {
    text.parse().unwrap_or(f64::NAN)
}
