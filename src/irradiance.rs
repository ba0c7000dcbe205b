//! Absolute spectral irradiance derivation.
//!
//! The measured power relates to spectral irradiance through
//!
//! ```text
//! P = Σ E(λ) · S(λ) · A · Δλ        over the wavelength grid
//! ```
//!
//! where `E(λ)` is spectral irradiance (W/m²/nm), `S(λ)` the sensor's
//! normalized sensitivity and `A` its active area (m²). Only the relative
//! shape `E_rel(λ)` is known, so `E(λ) = I · E_rel(λ)` and the single scalar
//! `I` is solved from the power measurement.
//!
//! Every sum here is a left-Riemann sum over the half-open grid: left-endpoint
//! samples times the step, never the trapezoid rule. The convention determines
//! the hazard/safe boundary to the precision reported and must match the
//! historical results exactly.

use crate::error::ComputationError;
use crate::sensor::SensorCalibration;
use crate::spectral::{SpectralCurve, WavelengthGrid};

/// Solve for the scalar `I` (W/m²) that converts relative spectral intensity
/// into absolute spectral irradiance.
///
/// `I = P / [Σ E_rel(λ) · S(λ) · Δλ · A]`
///
/// # Errors
///
/// `ComputationError` if the integral term is zero, negative, or non-finite
/// (a shape/sensitivity mismatch, not a measurement problem).
pub fn scaling_factor(
    measured_power_w: f64,
    illuminator: &SpectralCurve,
    sensor: &SensorCalibration,
    grid: &WavelengthGrid,
    sensor_area_m2: f64,
) -> Result<f64, ComputationError> {
    let dw = grid.step();

    let mut denominator = 0.0;
    for &w in grid.values() {
        denominator += illuminator.evaluate(w) * sensor.normalized_sensitivity(w) * dw
            * sensor_area_m2;
    }

    if !denominator.is_finite() || denominator <= 0.0 {
        return Err(ComputationError::DegenerateIntegral(denominator));
    }

    Ok(measured_power_w / denominator)
}

/// Absolute spectral irradiance (W/m²/nm) at each grid wavelength:
/// `scaling_factor × E_rel(λ)`.
pub fn synthesize_spectral_irradiance(
    scaling_factor: f64,
    illuminator: &SpectralCurve,
    grid: &WavelengthGrid,
) -> Vec<f64> {
    grid.values()
        .iter()
        .map(|&w| scaling_factor * illuminator.evaluate(w))
        .collect()
}

/// Wavelength-integrated irradiance (W/m²): `Σ array[i] · Δλ`, left-Riemann.
pub fn total_irradiance(spectral_irradiance: &[f64], dw: f64) -> f64 {
    spectral_irradiance.iter().sum::<f64>() * dw
}
