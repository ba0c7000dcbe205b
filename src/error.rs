//! Error taxonomy for the assessment pipeline.
//!
//! Three specific kinds cover the failure modes of the core: malformed
//! reference tables, invalid configuration, and degenerate numerics. All
//! operations fail fast with the specific kind; there is no retry and no
//! silent substitution of defaults. The report binary is the only layer that
//! catches and presents these.

use thiserror::Error;

/// Malformed or insufficient reference table data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("reference table needs at least 2 samples, got {0}")]
    InsufficientSamples(usize),

    #[error("table wavelengths must be strictly increasing (violated at row {0})")]
    NotAscending(usize),

    #[error("could not parse table row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
}

/// Failure to read a reference table from disk.
///
/// Separates the file/reader concern from [`DataError`], which describes the
/// table contents themselves regardless of where they came from.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read reference table: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Data(#[from] DataError),
}

/// Invalid calibration, geometry, or grid parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error(
        "sensor responsivity at the calibration wavelength ({wavelength_nm} nm) \
         is {value}; cannot normalize"
    )]
    UnusableCalibration { wavelength_nm: f64, value: f64 },

    #[error("wavelength grid requires w1 > w0, got {w0}..{w1}")]
    EmptyGridRange { w0: f64, w1: f64 },
}

/// Non-positive or non-finite result where the derivation requires a
/// positive finite quantity.
#[derive(Debug, Error)]
pub enum ComputationError {
    #[error("integral term is {0}; expected a positive finite value")]
    DegenerateIntegral(f64),
}

/// Umbrella error returned by the orchestration entry point.
#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Computation(#[from] ComputationError),
}
