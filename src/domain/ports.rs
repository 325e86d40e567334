use crate::domain::model::{Adjustment, DoseRequest};
use crate::utils::error::AdjustmentError;

/// A dosage decision rule the form layer can be driven by.
pub trait DosageRule: Send + Sync {
    fn assess(&self, request: &DoseRequest) -> Result<Adjustment, AdjustmentError>;
}
