//! Built-in reference spectral tables for the default measurement setup.
//!
//! The default scenario measures a Thorlabs M940L3 940 nm LED with a Thorlabs
//! S121C silicon photodiode power sensor. Both tables are digitized from the
//! vendor datasheets; external CSV tables (see [`crate::tables`]) override
//! them when a different illuminator or sensor is in play.

use crate::spectral::SpectralSample;

/// Active aperture diameter of the Thorlabs S121C sensor (m).
pub const S121C_ACTIVE_DIAMETER_M: f64 = 9.7e-3;

/// Active area of the S121C sensor (m²), circular aperture.
pub fn s121c_active_area_m2() -> f64 {
    std::f64::consts::PI * (S121C_ACTIVE_DIAMETER_M / 2.0).powi(2)
}

/// Relative spectral intensity of the Thorlabs M940L3 LED, normalized to its
/// 940 nm peak. 850-1030 nm in 10 nm steps.
pub fn m940l3_relative_intensity() -> Vec<SpectralSample> {
    const TABLE: [(f64, f64); 19] = [
        (850.0, 0.002),
        (860.0, 0.004),
        (870.0, 0.008),
        (880.0, 0.02),
        (890.0, 0.05),
        (900.0, 0.12),
        (910.0, 0.28),
        (920.0, 0.55),
        (930.0, 0.85),
        (940.0, 1.00),
        (950.0, 0.92),
        (960.0, 0.68),
        (970.0, 0.42),
        (980.0, 0.22),
        (990.0, 0.10),
        (1000.0, 0.05),
        (1010.0, 0.02),
        (1020.0, 0.01),
        (1030.0, 0.005),
    ];

    TABLE
        .iter()
        .map(|&(w, v)| SpectralSample::new(w, v))
        .collect()
}

/// Spectral responsivity of the Thorlabs S121C sensor (mA/W), 400-1100 nm in
/// 50 nm steps. Only ratios against the 940 nm value are used, so the unit
/// cancels in the derivation.
pub fn s121c_responsivity() -> Vec<SpectralSample> {
    const TABLE: [(f64, f64); 15] = [
        (400.0, 115.0),
        (450.0, 185.0),
        (500.0, 255.0),
        (550.0, 310.0),
        (600.0, 365.0),
        (650.0, 415.0),
        (700.0, 460.0),
        (750.0, 505.0),
        (800.0, 550.0),
        (850.0, 590.0),
        (900.0, 625.0),
        (950.0, 650.0),
        (1000.0, 645.0),
        (1050.0, 520.0),
        (1100.0, 220.0),
    ];

    TABLE
        .iter()
        .map(|&(w, v)| SpectralSample::new(w, v))
        .collect()
}
