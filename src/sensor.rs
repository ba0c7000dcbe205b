//! Sensor calibration model.
//!
//! Power meters report a single number calibrated at one wavelength; a broad
//! source deposits power across the sensor's whole responsivity curve. This
//! module wraps the responsivity curve and exposes sensitivity normalized to
//! the calibration wavelength, which is the correction factor the irradiance
//! derivation needs.

use crate::error::ConfigError;
use crate::spectral::SpectralCurve;

/// A power sensor's responsivity curve normalized against its calibration
/// wavelength.
#[derive(Debug, Clone)]
pub struct SensorCalibration {
    responsivity: SpectralCurve,
    calibrated_wavelength_nm: f64,
    reference_responsivity: f64,
}

impl SensorCalibration {
    /// Calibration wavelength of the reference measurement setup (nm).
    pub const DEFAULT_CALIBRATION_NM: f64 = 940.0;

    /// Wrap a responsivity curve, normalizing against the given calibration
    /// wavelength.
    ///
    /// # Errors
    ///
    /// `ConfigError` if the responsivity at the calibration wavelength is
    /// zero or non-finite -- the normalization would be meaningless.
    pub fn new(
        responsivity: SpectralCurve,
        calibrated_wavelength_nm: f64,
    ) -> Result<Self, ConfigError> {
        let reference_responsivity = responsivity.evaluate(calibrated_wavelength_nm);
        if reference_responsivity == 0.0 || !reference_responsivity.is_finite() {
            return Err(ConfigError::UnusableCalibration {
                wavelength_nm: calibrated_wavelength_nm,
                value: reference_responsivity,
            });
        }

        Ok(Self {
            responsivity,
            calibrated_wavelength_nm,
            reference_responsivity,
        })
    }

    /// Sensitivity at `wavelength_nm` relative to the calibration wavelength.
    ///
    /// Dimensionless; equals 1.0 at the calibration wavelength by
    /// construction.
    pub fn normalized_sensitivity(&self, wavelength_nm: f64) -> f64 {
        self.responsivity.evaluate(wavelength_nm) / self.reference_responsivity
    }

    /// Batch form of [`normalized_sensitivity`](Self::normalized_sensitivity).
    pub fn normalized_sensitivities(&self, wavelengths: &[f64]) -> Vec<f64> {
        wavelengths
            .iter()
            .map(|&w| self.normalized_sensitivity(w))
            .collect()
    }

    /// The wavelength the sensor was calibrated at (nm).
    pub fn calibrated_wavelength_nm(&self) -> f64 {
        self.calibrated_wavelength_nm
    }
}
