//! Fixed-step wavelength grid for numerical integration.

use crate::error::ConfigError;

/// Ordered wavelengths from `w0` (inclusive) to `w1` (exclusive) with fixed
/// step `dw`, in nanometers.
///
/// The half-open convention pairs with the left-Riemann summation used
/// throughout the derivation: every `Σ f(λ)·Δλ` in the pipeline is a sum of
/// left-endpoint samples over this grid. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct WavelengthGrid {
    w0: f64,
    w1: f64,
    dw: f64,
    values: Vec<f64>,
}

impl WavelengthGrid {
    /// Build the grid covering `[w0, w1)` with step `dw`.
    ///
    /// # Errors
    ///
    /// `ConfigError` if `dw <= 0` or `w1 <= w0`.
    pub fn new(w0: f64, w1: f64, dw: f64) -> Result<Self, ConfigError> {
        if !(dw > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "grid step dw",
                value: dw,
            });
        }
        if w1 <= w0 {
            return Err(ConfigError::EmptyGridRange { w0, w1 });
        }

        // Index-scaled generation avoids accumulating the step error
        let mut values = Vec::new();
        let mut i = 0usize;
        loop {
            let w = w0 + i as f64 * dw;
            if w >= w1 {
                break;
            }
            values.push(w);
            i += 1;
        }

        Ok(Self { w0, w1, dw, values })
    }

    /// Grid wavelengths in ascending order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Step size in nanometers.
    pub fn step(&self) -> f64 {
        self.dw
    }

    /// Inclusive lower bound of the grid range.
    pub fn lower_nm(&self) -> f64 {
        self.w0
    }

    /// Exclusive upper bound of the grid range.
    pub fn upper_nm(&self) -> f64 {
        self.w1
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
