pub mod adjuster;
pub mod rounding;

pub use crate::domain::model::{Adjustment, DoseRequest, InrBand, NewDose};
pub use crate::domain::ports::DosageRule;
pub use adjuster::{adjust, DosageAdjuster};
