pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{OutputFormat, Settings, TomlConfig};

pub use app::{DosageReport, DoseForm};
pub use crate::core::{adjust, Adjustment, DosageAdjuster, DosageRule, DoseRequest, InrBand, NewDose};
pub use utils::error::{AdjustmentError, DoseError, InputField, Result};
