pub mod form;
pub mod render;

pub use form::DoseForm;
pub use render::{DosageReport, DISCLAIMER};
