// Domain layer: value types and the rule port. No I/O and no logging here.

pub mod model;
pub mod ports;
