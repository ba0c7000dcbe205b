//! Cubic spline interpolation over spectral reference tables.
//!
//! Implements cubic-spline interpolation with not-a-knot boundary conditions,
//! the conventional default for smooth curves fit through measured spectral
//! data. Each segment is a cubic polynomial with C² continuity across knots;
//! the not-a-knot conditions additionally force the third derivative to be
//! continuous across the first and last interior knots, which removes the
//! artificial flattening a natural spline imposes at the table ends.

use crate::error::DataError;
use crate::spectral::sample::{validate_table, SpectralSample};

/// Smooth interpolant built once from a discrete spectral reference table.
///
/// The curve exclusively owns its sorted samples and the coefficients derived
/// from them; it is immutable after construction and safe to share across
/// threads.
///
/// Wavelengths outside the tabulated range are evaluated by extending the
/// nearest end segment's polynomial -- the same interpolation rule with no
/// special-casing. This is documented behavior, not an error, but accuracy
/// degrades quickly far outside the measured range.
#[derive(Debug, Clone)]
pub struct SpectralCurve {
    knots: Vec<f64>,
    coeffs: Vec<[f64; 4]>, // a, b, c, d coefficients for each segment
}

impl SpectralCurve {
    /// Build a curve from a reference table.
    ///
    /// # Errors
    ///
    /// Returns `DataError` if the table has fewer than 2 samples or its
    /// wavelengths are not strictly increasing.
    pub fn build(samples: &[SpectralSample]) -> Result<Self, DataError> {
        validate_table(samples)?;

        let knots: Vec<f64> = samples.iter().map(|s| s.wavelength_nm).collect();
        let values: Vec<f64> = samples.iter().map(|s| s.value).collect();
        let coeffs = compute_coefficients(&knots, &values);

        Ok(Self { knots, coeffs })
    }

    /// Evaluate the curve at a single wavelength (nm).
    ///
    /// At a tabulated wavelength this returns the table value exactly.
    /// Outside `[min_wavelength, max_wavelength]` the nearest end segment is
    /// extrapolated.
    pub fn evaluate(&self, wavelength_nm: f64) -> f64 {
        let segment = self.segment_index(wavelength_nm);
        let dx = wavelength_nm - self.knots[segment];
        let [a, b, c, d] = self.coeffs[segment];

        a + dx * (b + dx * (c + dx * d))
    }

    /// Evaluate the curve at every wavelength in the slice, preserving order.
    pub fn evaluate_batch(&self, wavelengths: &[f64]) -> Vec<f64> {
        wavelengths.iter().map(|&w| self.evaluate(w)).collect()
    }

    /// Lowest tabulated wavelength (nm).
    pub fn min_wavelength(&self) -> f64 {
        self.knots[0]
    }

    /// Highest tabulated wavelength (nm).
    pub fn max_wavelength(&self) -> f64 {
        self.knots[self.knots.len() - 1]
    }

    /// Find which segment to evaluate for the given wavelength.
    ///
    /// Binary search over the interior knots; out-of-range wavelengths map to
    /// the outermost segments so extrapolation reuses their polynomials.
    fn segment_index(&self, x: f64) -> usize {
        let n = self.knots.len();
        if x <= self.knots[0] {
            return 0;
        }
        if x >= self.knots[n - 2] {
            return n - 2;
        }

        let mut left = 0;
        let mut right = n - 1;
        while left < right - 1 {
            let mid = (left + right) / 2;
            if x < self.knots[mid] {
                right = mid;
            } else {
                left = mid;
            }
        }
        left
    }
}

/// Compute the [a, b, c, d] cubic coefficients for each segment from the
/// knot second derivatives.
fn compute_coefficients(x: &[f64], y: &[f64]) -> Vec<[f64; 4]> {
    let n = x.len();
    let h: Vec<f64> = (0..n - 1).map(|i| x[i + 1] - x[i]).collect();
    let sigma = second_derivatives(x, y, &h);

    let mut coeffs = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        let a = y[i];
        let b = (y[i + 1] - y[i]) / h[i] - h[i] * (2.0 * sigma[i] + sigma[i + 1]) / 6.0;
        let c = sigma[i] / 2.0;
        let d = (sigma[i + 1] - sigma[i]) / (6.0 * h[i]);
        coeffs.push([a, b, c, d]);
    }

    coeffs
}

/// Solve for the second derivative of the spline at each knot under
/// not-a-knot end conditions.
///
/// The interior continuity equations form a tridiagonal system; the two
/// not-a-knot conditions are folded into its first and last rows by
/// eliminating the end-knot unknowns, then the system is solved with the
/// Thomas algorithm (diagonally dominant for positive interval widths).
///
/// Degenerate orders follow the conventional rule: two samples give the
/// connecting straight line, three samples the single parabola through them.
fn second_derivatives(x: &[f64], y: &[f64], h: &[f64]) -> Vec<f64> {
    let n = x.len();

    if n == 2 {
        return vec![0.0; 2];
    }
    if n == 3 {
        // One parabola through all three points: constant second derivative
        let curvature = 2.0 * ((y[2] - y[1]) / h[1] - (y[1] - y[0]) / h[0]) / (h[0] + h[1]);
        return vec![curvature; 3];
    }

    // Unknowns are the interior second derivatives sigma[1..=n-2]
    let m = n - 2;
    let mut sub = vec![0.0; m];
    let mut diag = vec![0.0; m];
    let mut sup = vec![0.0; m];
    let mut rhs = vec![0.0; m];

    for k in 0..m {
        let i = k + 1; // knot index
        sub[k] = h[i - 1];
        diag[k] = 2.0 * (h[i - 1] + h[i]);
        sup[k] = h[i];
        rhs[k] = 6.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
    }

    // Not-a-knot: sigma[0] = sigma[1] - h0*(sigma[2]-sigma[1])/h1, substituted
    // into the first interior equation (and mirrored at the far end).
    diag[0] = (h[0] + h[1]) * (h[0] + 2.0 * h[1]) / h[1];
    sup[0] = (h[1] * h[1] - h[0] * h[0]) / h[1];

    let hl = h[n - 2];
    let hk = h[n - 3];
    sub[m - 1] = (hk * hk - hl * hl) / hk;
    diag[m - 1] = (hl + hk) * (hl + 2.0 * hk) / hk;

    // Thomas algorithm: forward elimination, then back substitution
    for k in 1..m {
        let w = sub[k] / diag[k - 1];
        diag[k] -= w * sup[k - 1];
        rhs[k] -= w * rhs[k - 1];
    }

    let mut interior = vec![0.0; m];
    interior[m - 1] = rhs[m - 1] / diag[m - 1];
    for k in (0..m - 1).rev() {
        interior[k] = (rhs[k] - sup[k] * interior[k + 1]) / diag[k];
    }

    let mut sigma = vec![0.0; n];
    sigma[1..=n - 2].copy_from_slice(&interior);
    sigma[0] = sigma[1] - h[0] * (sigma[2] - sigma[1]) / h[1];
    sigma[n - 1] = sigma[n - 2] + h[n - 2] * (sigma[n - 2] - sigma[n - 3]) / h[n - 3];

    sigma
}
