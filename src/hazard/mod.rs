//! IEC 62471 hazard criteria

pub mod evaluator;
pub mod weighting;

pub use evaluator::{evaluate_ir_hazard, evaluate_retinal_hazard, HazardResult, Verdict};
pub use weighting::{retinal_hazard_weight, retinal_hazard_weights};
