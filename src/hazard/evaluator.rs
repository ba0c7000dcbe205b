//! IEC 62471 hazard criteria evaluation.
//!
//! Two criteria apply to a continuous-wave IR illuminator:
//!
//! - **Infrared radiation hazard** (section 4.3.7): the total irradiance over
//!   700-3000 nm must stay below 100 W/m² for indefinite exposure. Above the
//!   limit the time-dependent criterion `E ≤ 18000·t^-0.75` inverts to a
//!   maximum safe exposure time.
//! - **Retinal burn hazard** (section 4.3.6): the R(λ)-weighted spectral
//!   radiance over 780-1400 nm must stay below `6000/α` W/m²/sr. The standard
//!   defines no time-limited relief for this criterion here.
//!
//! Both sums follow the left-Riemann convention used by the rest of the
//! derivation.

use crate::hazard::weighting::retinal_hazard_weight;

/// Indefinite-exposure IR irradiance limit (W/m²).
pub const IR_IRRADIANCE_LIMIT_W_M2: f64 = 100.0;

/// Coefficient of the time-dependent IR limit `E ≤ 18000·t^-0.75`.
const IR_TIME_LIMIT_COEFFICIENT: f64 = 18000.0;

/// Numerator of the retinal radiance limit `6000/α` (W/m²/sr·rad).
pub const RETINAL_LIMIT_NUMERATOR: f64 = 6000.0;

/// IR hazard integration band, inclusive (nm).
const IR_BAND_NM: (f64, f64) = (700.0, 3000.0);

/// Retinal hazard integration band, inclusive (nm).
const RETINAL_BAND_NM: (f64, f64) = (780.0, 1400.0);

/// Pass/fail outcome of one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Safe,
    Hazardous,
}

/// Outcome of one hazard evaluation.
///
/// Ephemeral: produced per evaluation call with no side effects.
#[derive(Debug, Clone, Copy)]
pub struct HazardResult {
    pub verdict: Verdict,

    /// The computed metric (total irradiance or weighted radiance)
    pub value: f64,

    /// The applicable limit in the same unit as `value`
    pub limit: f64,

    /// `limit / value`, present only when safe
    pub safety_margin: Option<f64>,

    /// Maximum safe exposure time in seconds; present only for a hazardous
    /// IR verdict (the retinal criterion defines none)
    pub max_exposure_time_s: Option<f64>,
}

/// Evaluate the infrared radiation hazard (IEC 62471 section 4.3.7).
///
/// `wavelengths` and `spectral_irradiance` are parallel arrays; the sum runs
/// over grid points with λ in [700, 3000] nm inclusive, times `dw`.
pub fn evaluate_ir_hazard(
    spectral_irradiance: &[f64],
    wavelengths: &[f64],
    dw: f64,
) -> HazardResult {
    let total: f64 = wavelengths
        .iter()
        .zip(spectral_irradiance)
        .filter(|(&w, _)| w >= IR_BAND_NM.0 && w <= IR_BAND_NM.1)
        .map(|(_, &e)| e)
        .sum::<f64>()
        * dw;

    if total < IR_IRRADIANCE_LIMIT_W_M2 {
        HazardResult {
            verdict: Verdict::Safe,
            value: total,
            limit: IR_IRRADIANCE_LIMIT_W_M2,
            safety_margin: Some(IR_IRRADIANCE_LIMIT_W_M2 / total),
            max_exposure_time_s: None,
        }
    } else {
        // Invert E <= 18000 * t^-0.75 for the exposure time at this level
        let max_exposure_time_s = (total / IR_TIME_LIMIT_COEFFICIENT).powf(-4.0 / 3.0);
        HazardResult {
            verdict: Verdict::Hazardous,
            value: total,
            limit: IR_IRRADIANCE_LIMIT_W_M2,
            safety_margin: None,
            max_exposure_time_s: Some(max_exposure_time_s),
        }
    }
}

/// Evaluate the retinal burn hazard (IEC 62471 section 4.3.6).
///
/// Weighted sum `Σ L(λ)·R(λ)·Δλ` over λ in [780, 1400] nm against the
/// `6000/α` limit, where `alpha_rad` is the (clamped) angular subtense.
pub fn evaluate_retinal_hazard(
    spectral_radiance: &[f64],
    wavelengths: &[f64],
    dw: f64,
    alpha_rad: f64,
) -> HazardResult {
    let weighted: f64 = wavelengths
        .iter()
        .zip(spectral_radiance)
        .filter(|(&w, _)| w >= RETINAL_BAND_NM.0 && w <= RETINAL_BAND_NM.1)
        .map(|(&w, &l)| l * retinal_hazard_weight(w))
        .sum::<f64>()
        * dw;

    let limit = RETINAL_LIMIT_NUMERATOR / alpha_rad;

    if weighted < limit {
        HazardResult {
            verdict: Verdict::Safe,
            value: weighted,
            limit,
            safety_margin: Some(limit / weighted),
            max_exposure_time_s: None,
        }
    } else {
        HazardResult {
            verdict: Verdict::Hazardous,
            value: weighted,
            limit,
            safety_margin: None,
            max_exposure_time_s: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Grid of `count` wavelengths starting at `w0` with step `dw`.
    fn grid(w0: f64, dw: f64, count: usize) -> Vec<f64> {
        (0..count).map(|i| w0 + i as f64 * dw).collect()
    }

    #[test]
    fn test_ir_safe_with_exact_margin() {
        // 20 points * 0.5 W/m²/nm * 5 nm = 50 W/m² total
        let wavelengths = grid(700.0, 5.0, 20);
        let irradiance = vec![0.5; 20];

        let result = evaluate_ir_hazard(&irradiance, &wavelengths, 5.0);

        assert_eq!(result.verdict, Verdict::Safe);
        assert_relative_eq!(result.value, 50.0, epsilon = 1e-12);
        assert_relative_eq!(result.limit, 100.0);
        assert_relative_eq!(result.safety_margin.unwrap(), 2.0, epsilon = 1e-12);
        assert!(result.max_exposure_time_s.is_none());
    }

    #[test]
    fn test_ir_hazardous_exposure_time() {
        // 20 points * 2.0 W/m²/nm * 5 nm = 200 W/m² total
        let wavelengths = grid(700.0, 5.0, 20);
        let irradiance = vec![2.0; 20];

        let result = evaluate_ir_hazard(&irradiance, &wavelengths, 5.0);

        assert_eq!(result.verdict, Verdict::Hazardous);
        assert_relative_eq!(result.value, 200.0, epsilon = 1e-12);
        assert!(result.safety_margin.is_none());
        // Closed form of the inverted time-dependent limit
        let expected = (200.0f64 / 18000.0).powf(-4.0 / 3.0);
        assert_relative_eq!(
            result.max_exposure_time_s.unwrap(),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_ir_band_mask_inclusive() {
        // Only the in-band points count; 700 and 3000 are included
        let wavelengths = vec![695.0, 700.0, 3000.0, 3005.0];
        let irradiance = vec![1.0; 4];

        let result = evaluate_ir_hazard(&irradiance, &wavelengths, 5.0);

        assert_relative_eq!(result.value, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ir_limit_boundary_is_hazardous() {
        // Exactly at the limit is not "below the limit"
        let wavelengths = grid(700.0, 5.0, 20);
        let irradiance = vec![1.0; 20];

        let result = evaluate_ir_hazard(&irradiance, &wavelengths, 5.0);

        assert_eq!(result.verdict, Verdict::Hazardous);
    }

    #[test]
    fn test_retinal_safe_margin() {
        // On the 0.2 plateau (1050, 1150]: 20 points * 25000 * 0.2 * 5 = 500000
        let wavelengths = grid(1055.0, 5.0, 20);
        let radiance = vec![25000.0; 20];

        let result = evaluate_retinal_hazard(&radiance, &wavelengths, 5.0, 0.011);

        assert_eq!(result.verdict, Verdict::Safe);
        assert_relative_eq!(result.value, 500000.0, epsilon = 1e-9);
        assert_relative_eq!(result.limit, 6000.0 / 0.011, epsilon = 1e-9);
        assert_relative_eq!(
            result.safety_margin.unwrap(),
            6000.0 / 0.011 / 500000.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_retinal_hazardous_has_no_exposure_time() {
        let wavelengths = grid(1055.0, 5.0, 20);
        let radiance = vec![50000.0; 20];

        let result = evaluate_retinal_hazard(&radiance, &wavelengths, 5.0, 0.011);

        assert_eq!(result.verdict, Verdict::Hazardous);
        assert!(result.safety_margin.is_none());
        assert!(result.max_exposure_time_s.is_none());
    }

    #[test]
    fn test_retinal_band_mask() {
        // 770 nm is outside [780, 1400]; 780 is weighted by R(780)
        let wavelengths = vec![770.0, 780.0];
        let radiance = vec![1000.0, 1000.0];

        let result = evaluate_retinal_hazard(&radiance, &wavelengths, 5.0, 0.1);

        let expected = 1000.0 * retinal_hazard_weight(780.0) * 5.0;
        assert_relative_eq!(result.value, expected, epsilon = 1e-12);
    }
}
