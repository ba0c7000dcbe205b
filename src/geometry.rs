//! Source geometry: angular subtense, solid angle, radiance conversion.
//!
//! IEC 62471 evaluates the retinal hazard per steradian, so the apparent size
//! of the source matters. The standard defines 0.011 rad as the minimum
//! angular subtense for point-source classification; smaller or more distant
//! sources are clamped to it, which prevents overestimating the
//! per-steradian hazard of a near-point source.

use crate::error::ConfigError;

/// Minimum angular subtense for point-source hazard classification (rad).
pub const MIN_ANGULAR_SUBTENSE_RAD: f64 = 0.011;

/// Derived angular geometry of an illuminator as seen from the eye.
#[derive(Debug, Clone, Copy)]
pub struct SourceGeometry {
    /// Angular subtense α (rad), clamped to the point-source minimum
    pub angular_subtense_rad: f64,

    /// Source diameter (m) after any clamp adjustment
    pub effective_diameter_m: f64,

    /// Solid angle subtended by the (effective) source (sr)
    pub solid_angle_sr: f64,
}

/// Angular subtense under the small-angle approximation, with the standard's
/// minimum clamp.
///
/// Returns `(alpha_rad, effective_diameter_m)`. When `diameter/distance`
/// falls below 0.011 rad the angle is reported as 0.011 rad and the
/// effective diameter becomes `0.011 × distance`; re-applying the clamp to a
/// clamped result is a no-op.
///
/// # Errors
///
/// `ConfigError` for non-positive diameter or distance.
pub fn angular_subtense(diameter_m: f64, distance_m: f64) -> Result<(f64, f64), ConfigError> {
    if !(diameter_m > 0.0) {
        return Err(ConfigError::NonPositive {
            name: "illuminator diameter",
            value: diameter_m,
        });
    }
    if !(distance_m > 0.0) {
        return Err(ConfigError::NonPositive {
            name: "illuminator distance",
            value: distance_m,
        });
    }

    let raw = diameter_m / distance_m;
    if raw < MIN_ANGULAR_SUBTENSE_RAD {
        Ok((
            MIN_ANGULAR_SUBTENSE_RAD,
            MIN_ANGULAR_SUBTENSE_RAD * distance_m,
        ))
    } else {
        Ok((raw, diameter_m))
    }
}

/// Solid angle of a circular source of the given diameter at the given
/// distance: `2π·(1 − d/√(d² + (D/2)²))` sr.
pub fn solid_angle(distance_m: f64, diameter_m: f64) -> f64 {
    let half = diameter_m / 2.0;
    2.0 * std::f64::consts::PI
        * (1.0 - distance_m / (distance_m * distance_m + half * half).sqrt())
}

/// Full geometry derivation: clamp the subtense, then compute the solid
/// angle from the effective diameter.
pub fn source_geometry(distance_m: f64, diameter_m: f64) -> Result<SourceGeometry, ConfigError> {
    let (alpha, effective_diameter) = angular_subtense(diameter_m, distance_m)?;

    Ok(SourceGeometry {
        angular_subtense_rad: alpha,
        effective_diameter_m: effective_diameter,
        solid_angle_sr: solid_angle(distance_m, effective_diameter),
    })
}

/// Convert spectral irradiance (W/m²/nm) to spectral radiance (W/m²/sr/nm)
/// by dividing out the source solid angle, elementwise.
pub fn spectral_radiance(spectral_irradiance: &[f64], solid_angle_sr: f64) -> Vec<f64> {
    spectral_irradiance
        .iter()
        .map(|&e| e / solid_angle_sr)
        .collect()
}
