//! Spectral sample value type and reference-table validation.

use serde::Deserialize;

use crate::error::DataError;

/// One (wavelength, value) entry of a spectral reference table.
///
/// The value is dimensionless relative intensity for illuminator tables and
/// responsivity (mA/W) for sensor tables; only ratios of sensor values enter
/// the derivation, so the responsivity unit cancels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SpectralSample {
    /// Wavelength in nanometers
    pub wavelength_nm: f64,

    /// Tabulated value at that wavelength
    pub value: f64,
}

impl SpectralSample {
    pub fn new(wavelength_nm: f64, value: f64) -> Self {
        Self {
            wavelength_nm,
            value,
        }
    }
}

/// Validate a reference table: at least two samples, wavelengths strictly
/// increasing (unique).
///
/// Disordered input is rejected, not silently sorted; the caller owns the
/// decision to sort or dedupe.
pub fn validate_table(samples: &[SpectralSample]) -> Result<(), DataError> {
    if samples.len() < 2 {
        return Err(DataError::InsufficientSamples(samples.len()));
    }

    for i in 1..samples.len() {
        if samples[i].wavelength_nm <= samples[i - 1].wavelength_nm {
            return Err(DataError::NotAscending(i));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(points: &[(f64, f64)]) -> Vec<SpectralSample> {
        points
            .iter()
            .map(|&(w, v)| SpectralSample::new(w, v))
            .collect()
    }

    #[test]
    fn test_valid_table() {
        let samples = table(&[(400.0, 0.1), (500.0, 0.5), (600.0, 0.2)]);
        assert!(validate_table(&samples).is_ok());
    }

    #[test]
    fn test_too_few_samples() {
        let samples = table(&[(400.0, 0.1)]);
        assert!(matches!(
            validate_table(&samples),
            Err(DataError::InsufficientSamples(1))
        ));
    }

    #[test]
    fn test_not_ascending() {
        let samples = table(&[(400.0, 0.1), (600.0, 0.5), (500.0, 0.2)]);
        assert!(matches!(
            validate_table(&samples),
            Err(DataError::NotAscending(2))
        ));
    }

    #[test]
    fn test_duplicate_wavelength_rejected() {
        let samples = table(&[(400.0, 0.1), (400.0, 0.5)]);
        assert!(matches!(
            validate_table(&samples),
            Err(DataError::NotAscending(1))
        ));
    }
}
