//! End-to-end assessment against the built-in reference tables.

use approx::assert_relative_eq;
use irsafety::hazard::Verdict;
use irsafety::pipeline::{assess, AssessmentConfig, MeasurementContext};
use irsafety::{reference, SpectralSample};

/// The reference measurement setup: Thorlabs M940L3 LED at 3.5 mW through a
/// Thorlabs S121C sensor, 0.5 m away, 50 mm aperture.
fn reference_config() -> AssessmentConfig {
    let context = MeasurementContext::new(
        3.5e-3,
        0.5,
        0.05,
        reference::s121c_active_area_m2(),
    )
    .unwrap();
    AssessmentConfig::new(context)
}

#[test]
fn test_reference_setup_is_safe() {
    let assessment = assess(
        &reference::m940l3_relative_intensity(),
        &reference::s121c_responsivity(),
        &reference_config(),
    )
    .unwrap();

    assert_eq!(assessment.ir_hazard.verdict, Verdict::Safe);
    assert_eq!(assessment.retinal_hazard.verdict, Verdict::Safe);
    assert!(assessment.ir_hazard.safety_margin.unwrap() > 1.0);
    assert!(assessment.retinal_hazard.safety_margin.unwrap() > 1.0);

    // A few milliwatts over a 50 mm aperture sits well inside the band
    // between trivially zero and the 100 W/m² limit
    assert!(assessment.total_irradiance_w_m2 > 10.0);
    assert!(assessment.total_irradiance_w_m2 < 100.0);
}

#[test]
fn test_reference_setup_derivation_shape() {
    let config = reference_config();
    let assessment = assess(
        &reference::m940l3_relative_intensity(),
        &reference::s121c_responsivity(),
        &config,
    )
    .unwrap();

    assert!(assessment.scaling_factor_w_m2.is_finite());
    assert!(assessment.scaling_factor_w_m2 > 0.0);

    // Grid covers the LED table span, half-open: [850, 1030) at 5 nm
    assert_eq!(assessment.grid.len(), 36);
    assert_eq!(
        assessment.spectral_irradiance_w_m2_nm.len(),
        assessment.grid.len()
    );
    assert_eq!(
        assessment.spectral_radiance_w_m2_sr_nm.len(),
        assessment.grid.len()
    );

    // 50 mm at 0.5 m subtends 0.1 rad, no point-source clamp
    assert_relative_eq!(assessment.geometry.angular_subtense_rad, 0.1);
    assert_relative_eq!(assessment.geometry.effective_diameter_m, 0.05);
}

#[test]
fn test_total_irradiance_scales_linearly_with_power() {
    let illuminator = reference::m940l3_relative_intensity();
    let sensor = reference::s121c_responsivity();

    let config_1x = reference_config();
    let mut config_3x = config_1x;
    config_3x.context = config_1x
        .context
        .with_power(3.0 * config_1x.context.measured_power_w())
        .unwrap();

    let at_1x = assess(&illuminator, &sensor, &config_1x).unwrap();
    let at_3x = assess(&illuminator, &sensor, &config_3x).unwrap();

    assert_relative_eq!(
        at_3x.total_irradiance_w_m2,
        3.0 * at_1x.total_irradiance_w_m2,
        max_relative = 1e-12
    );
}

#[test]
fn test_flat_synthetic_round_trip() {
    // Flat illuminator and sensor shapes make every integral exact, so the
    // derived irradiance integrates back to the measured power over the
    // sensor area.
    let illuminator = vec![
        SpectralSample::new(800.0, 1.0),
        SpectralSample::new(900.0, 1.0),
        SpectralSample::new(1000.0, 1.0),
    ];
    let sensor = vec![
        SpectralSample::new(400.0, 550.0),
        SpectralSample::new(750.0, 550.0),
        SpectralSample::new(1100.0, 550.0),
    ];

    let context = MeasurementContext::new(2.0e-3, 0.5, 0.05, 5.0e-5).unwrap();
    let config = AssessmentConfig::new(context);

    let assessment = assess(&illuminator, &sensor, &config).unwrap();

    assert_relative_eq!(
        assessment.total_irradiance_w_m2 * context.sensor_area_m2(),
        context.measured_power_w(),
        max_relative = 1e-12
    );
}

#[test]
fn test_point_source_clamp_applies_at_distance() {
    // Pushed to 10 m the 50 mm aperture subtends 0.005 rad, under the
    // 0.011 rad minimum
    let mut config = reference_config();
    config.context = config.context.with_distance(10.0).unwrap();

    let assessment = assess(
        &reference::m940l3_relative_intensity(),
        &reference::s121c_responsivity(),
        &config,
    )
    .unwrap();

    assert_relative_eq!(assessment.geometry.angular_subtense_rad, 0.011);
    assert_relative_eq!(assessment.geometry.effective_diameter_m, 0.11);
}
