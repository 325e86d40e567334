use crate::core::adjuster::{TARGET_MAX_INR, TARGET_MIN_INR, VERY_HIGH_INR, VERY_LOW_INR};
use crate::utils::error::{AdjustmentError, InputField};
use crate::utils::validation::validate_positive_finite;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A validated INR lab result.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Inr(f64);

impl Inr {
    pub fn new(value: f64) -> Result<Self, AdjustmentError> {
        validate_positive_finite(InputField::Inr, value).map(Self)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Inr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated total weekly dose in mg.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct WeeklyDose(f64);

impl WeeklyDose {
    pub fn new(value: f64) -> Result<Self, AdjustmentError> {
        validate_positive_finite(InputField::CurrentWeeklyDose, value).map(Self)
    }

    pub fn mg(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for WeeklyDose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw numbers handed to the dosage rule. Nothing here is validated yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoseRequest {
    pub inr: f64,
    pub current_weekly_dose: f64,
}

impl DoseRequest {
    pub fn new(inr: f64, current_weekly_dose: f64) -> Self {
        Self {
            inr,
            current_weekly_dose,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InrBand {
    VeryLow,
    SlightlyLow,
    Therapeutic,
    SlightlyHigh,
    VeryHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentDirection {
    Increase,
    Maintain,
    Decrease,
}

/// Suggested weekly dose, already rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct NewDose(f64);

impl NewDose {
    pub(crate) fn from_rounded(mg: f64) -> Self {
        Self(mg)
    }

    pub fn mg(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for NewDose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

// Always the fixed two-decimal text, never a bare float.
impl Serialize for NewDose {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of one successful dosage assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Adjustment {
    pub inr: Inr,
    pub current_weekly_dose: WeeklyDose,
    pub band: InrBand,
    pub new_weekly_dose: NewDose,
}

impl Adjustment {
    pub fn direction(&self) -> AdjustmentDirection {
        self.band.direction()
    }

    pub fn multiplier(&self) -> f64 {
        self.band.multiplier()
    }

    /// Signed percentage applied to the weekly dose, e.g. `-10` or `20`.
    pub fn percent_change(&self) -> i32 {
        self.band.percent_change()
    }

    pub fn rationale(&self) -> String {
        let step = self.percent_change().abs();
        let (min, max) = (TARGET_MIN_INR, TARGET_MAX_INR);
        match self.band {
            InrBand::VeryLow => format!(
                "INR {} is below {:.1}: increase weekly dose by {}%",
                self.inr, VERY_LOW_INR, step
            ),
            InrBand::SlightlyLow => format!(
                "INR {} is below the {:.1}-{:.1} target range: increase weekly dose by {}%",
                self.inr, min, max, step
            ),
            InrBand::Therapeutic => format!(
                "INR {} is within the {:.1}-{:.1} target range: maintain current weekly dose",
                self.inr, min, max
            ),
            InrBand::SlightlyHigh => format!(
                "INR {} is above the {:.1}-{:.1} target range: decrease weekly dose by {}%",
                self.inr, min, max, step
            ),
            InrBand::VeryHigh => format!(
                "INR {} is above {:.1}: decrease weekly dose by {}%",
                self.inr, VERY_HIGH_INR, step
            ),
        }
    }
}
