use crate::core::rounding::round_to_cents;
use crate::domain::model::{
    Adjustment, AdjustmentDirection, DoseRequest, Inr, InrBand, NewDose, WeeklyDose,
};
use crate::domain::ports::DosageRule;
use crate::utils::error::AdjustmentError;

/// Below this INR the dose is raised by 20%.
pub const VERY_LOW_INR: f64 = 1.5;
pub const TARGET_MIN_INR: f64 = 2.0;
pub const TARGET_MAX_INR: f64 = 3.0;
/// Above this INR the dose is lowered by 20%.
pub const VERY_HIGH_INR: f64 = 3.5;

pub const VERY_LOW_MULTIPLIER: f64 = 1.20;
pub const SLIGHTLY_LOW_MULTIPLIER: f64 = 1.10;
pub const THERAPEUTIC_MULTIPLIER: f64 = 1.00;
pub const SLIGHTLY_HIGH_MULTIPLIER: f64 = 0.90;
pub const VERY_HIGH_MULTIPLIER: f64 = 0.80;

impl InrBand {
    /// Place a measurement in exactly one band. The target range is inclusive
    /// at both ends; 1.5 and 3.5 belong to the 10% bands.
    pub fn classify(inr: Inr) -> Self {
        let m = inr.value();
        if m < TARGET_MIN_INR {
            if m < VERY_LOW_INR {
                InrBand::VeryLow
            } else {
                InrBand::SlightlyLow
            }
        } else if m > TARGET_MAX_INR {
            if m > VERY_HIGH_INR {
                InrBand::VeryHigh
            } else {
                InrBand::SlightlyHigh
            }
        } else {
            InrBand::Therapeutic
        }
    }

    pub fn direction(&self) -> AdjustmentDirection {
        match self {
            InrBand::VeryLow | InrBand::SlightlyLow => AdjustmentDirection::Increase,
            InrBand::Therapeutic => AdjustmentDirection::Maintain,
            InrBand::SlightlyHigh | InrBand::VeryHigh => AdjustmentDirection::Decrease,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            InrBand::VeryLow => VERY_LOW_MULTIPLIER,
            InrBand::SlightlyLow => SLIGHTLY_LOW_MULTIPLIER,
            InrBand::Therapeutic => THERAPEUTIC_MULTIPLIER,
            InrBand::SlightlyHigh => SLIGHTLY_HIGH_MULTIPLIER,
            InrBand::VeryHigh => VERY_HIGH_MULTIPLIER,
        }
    }

    pub fn percent_change(&self) -> i32 {
        match self {
            InrBand::VeryLow => 20,
            InrBand::SlightlyLow => 10,
            InrBand::Therapeutic => 0,
            InrBand::SlightlyHigh => -10,
            InrBand::VeryHigh => -20,
        }
    }
}

/// The weekly warfarin adjustment heuristic. Stateless; share it freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DosageAdjuster;

impl DosageAdjuster {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, request: &DoseRequest) -> Result<Adjustment, AdjustmentError> {
        let inr = Inr::new(request.inr)?;
        let current = WeeklyDose::new(request.current_weekly_dose)?;

        let band = InrBand::classify(inr);
        let new_weekly_dose = NewDose::from_rounded(round_to_cents(current.mg() * band.multiplier()));

        Ok(Adjustment {
            inr,
            current_weekly_dose: current,
            band,
            new_weekly_dose,
        })
    }
}

impl DosageRule for DosageAdjuster {
    fn assess(&self, request: &DoseRequest) -> Result<Adjustment, AdjustmentError> {
        DosageAdjuster::assess(self, request)
    }
}

/// Suggested new weekly dose for an INR result and the current weekly dose (mg).
pub fn adjust(measurement: f64, current_dose: f64) -> Result<NewDose, AdjustmentError> {
    DosageAdjuster
        .assess(&DoseRequest::new(measurement, current_dose))
        .map(|adjustment| adjustment.new_weekly_dose)
}
