//! IEC 62471 photobiological eye-safety assessment for infrared illuminators
//!
//! This crate turns a single measured optical power value plus two reference
//! spectral tables (illuminator relative spectral intensity, power-sensor
//! responsivity) into an absolute spectral irradiance curve, and evaluates the
//! two IEC 62471 safety criteria built on top of it:
//!
//! - **Infrared radiation hazard** (section 4.3.7): total irradiance over
//!   700-3000 nm against the 100 W/m² indefinite-exposure limit.
//! - **Retinal burn hazard** (section 4.3.6): R(λ)-weighted spectral radiance
//!   over 780-1400 nm against the 6000/α limit.
//!
//! The core is a pure, deterministic pipeline with no I/O; CSV ingestion and
//! report formatting are separate consumers wired together by the
//! `safety_report` binary.

pub mod error;
pub mod geometry;
pub mod hazard;
pub mod irradiance;
pub mod pipeline;
pub mod reference;
pub mod report;
pub mod sensor;
pub mod spectral;
pub mod tables;

// Re-exports for easier access
pub use error::{AssessmentError, ComputationError, ConfigError, DataError, IngestError};
pub use geometry::{source_geometry, SourceGeometry};
pub use hazard::evaluator::{evaluate_ir_hazard, evaluate_retinal_hazard, HazardResult, Verdict};
pub use hazard::weighting::{retinal_hazard_weight, retinal_hazard_weights};
pub use pipeline::{assess, AssessmentConfig, MeasurementContext, SafetyAssessment};
pub use sensor::SensorCalibration;
pub use spectral::{SpectralCurve, SpectralSample, WavelengthGrid};
