//! End-to-end assessment pipeline.
//!
//! Wires the stages together in a fixed order: validate tables, fit the
//! interpolation curves, build the wavelength grid from the illuminator
//! table's span, solve the irradiance scaling factor, derive geometry and
//! radiance, and evaluate both hazard criteria. Pure and deterministic; the
//! same inputs always produce the same assessment.

use crate::error::{AssessmentError, ConfigError};
use crate::geometry::{source_geometry, spectral_radiance, SourceGeometry};
use crate::hazard::{evaluate_ir_hazard, evaluate_retinal_hazard, HazardResult};
use crate::irradiance::{scaling_factor, synthesize_spectral_irradiance, total_irradiance};
use crate::sensor::SensorCalibration;
use crate::spectral::{SpectralCurve, SpectralSample, WavelengthGrid};

/// Default integration step (nm), matching the historical evaluation.
pub const DEFAULT_GRID_STEP_NM: f64 = 5.0;

/// Physical measurement setup: one power reading plus the geometry it was
/// taken in.
///
/// Fields are private so the positivity checks in [`new`](Self::new) hold
/// for the lifetime of the value; variations on a context go through the
/// validated `with_*` builders.
#[derive(Debug, Clone, Copy)]
pub struct MeasurementContext {
    measured_power_w: f64,
    distance_m: f64,
    illuminator_diameter_m: f64,
    sensor_area_m2: f64,
    calibrated_wavelength_nm: f64,
}

impl MeasurementContext {
    /// Build a context, validating every quantity is positive.
    ///
    /// The calibration wavelength is fixed at 940 nm, the setting of the
    /// reference measurement setup.
    pub fn new(
        measured_power_w: f64,
        distance_m: f64,
        illuminator_diameter_m: f64,
        sensor_area_m2: f64,
    ) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("measured power", measured_power_w),
            ("illuminator distance", distance_m),
            ("illuminator diameter", illuminator_diameter_m),
            ("sensor area", sensor_area_m2),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        Ok(Self {
            measured_power_w,
            distance_m,
            illuminator_diameter_m,
            sensor_area_m2,
            calibrated_wavelength_nm: SensorCalibration::DEFAULT_CALIBRATION_NM,
        })
    }

    /// Same context with a different power reading, revalidated.
    pub fn with_power(self, measured_power_w: f64) -> Result<Self, ConfigError> {
        if !(measured_power_w > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "measured power",
                value: measured_power_w,
            });
        }
        Ok(Self {
            measured_power_w,
            ..self
        })
    }

    /// Same context at a different distance, revalidated.
    pub fn with_distance(self, distance_m: f64) -> Result<Self, ConfigError> {
        if !(distance_m > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "illuminator distance",
                value: distance_m,
            });
        }
        Ok(Self { distance_m, ..self })
    }

    /// Optical power reported by the meter (W).
    pub fn measured_power_w(&self) -> f64 {
        self.measured_power_w
    }

    /// Eye-to-illuminator distance (m).
    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    /// Physical diameter of the emitting aperture (m).
    pub fn illuminator_diameter_m(&self) -> f64 {
        self.illuminator_diameter_m
    }

    /// Active area of the power sensor (m²).
    pub fn sensor_area_m2(&self) -> f64 {
        self.sensor_area_m2
    }

    /// Wavelength the power meter was calibrated at (nm).
    pub fn calibrated_wavelength_nm(&self) -> f64 {
        self.calibrated_wavelength_nm
    }
}

/// Full configuration of one assessment run.
#[derive(Debug, Clone, Copy)]
pub struct AssessmentConfig {
    pub context: MeasurementContext,

    /// Integration step Δλ (nm)
    pub grid_step_nm: f64,
}

impl AssessmentConfig {
    pub fn new(context: MeasurementContext) -> Self {
        Self {
            context,
            grid_step_nm: DEFAULT_GRID_STEP_NM,
        }
    }
}

/// Everything the pipeline derives, kept for reporting.
#[derive(Debug, Clone)]
pub struct SafetyAssessment {
    /// Wavelength grid the derivation ran over
    pub grid: WavelengthGrid,

    /// Scaling factor `I` converting relative intensity to W/m²
    pub scaling_factor_w_m2: f64,

    /// Absolute spectral irradiance at each grid wavelength (W/m²/nm)
    pub spectral_irradiance_w_m2_nm: Vec<f64>,

    /// Wavelength-integrated irradiance (W/m²)
    pub total_irradiance_w_m2: f64,

    /// Derived source geometry, subtense clamp applied
    pub geometry: SourceGeometry,

    /// Spectral radiance at each grid wavelength (W/m²/sr/nm)
    pub spectral_radiance_w_m2_sr_nm: Vec<f64>,

    /// Infrared radiation hazard outcome
    pub ir_hazard: HazardResult,

    /// Retinal burn hazard outcome
    pub retinal_hazard: HazardResult,
}

/// Run the full assessment.
///
/// The grid spans the illuminator table's wavelength range, half-open at the
/// top, so the derivation never extrapolates the illuminator spectrum.
///
/// # Errors
///
/// `AssessmentError` wrapping whichever stage failed: malformed tables,
/// invalid configuration, or a degenerate scaling integral.
pub fn assess(
    illuminator_table: &[SpectralSample],
    sensor_table: &[SpectralSample],
    config: &AssessmentConfig,
) -> Result<SafetyAssessment, AssessmentError> {
    let context = &config.context;

    let illuminator = SpectralCurve::build(illuminator_table)?;
    let responsivity = SpectralCurve::build(sensor_table)?;
    let sensor = SensorCalibration::new(responsivity, context.calibrated_wavelength_nm)?;

    let grid = WavelengthGrid::new(
        illuminator.min_wavelength(),
        illuminator.max_wavelength(),
        config.grid_step_nm,
    )?;

    let factor = scaling_factor(
        context.measured_power_w,
        &illuminator,
        &sensor,
        &grid,
        context.sensor_area_m2,
    )?;
    let spectral_irradiance = synthesize_spectral_irradiance(factor, &illuminator, &grid);
    let total = total_irradiance(&spectral_irradiance, grid.step());

    let geometry = source_geometry(context.distance_m, context.illuminator_diameter_m)?;
    let radiance = spectral_radiance(&spectral_irradiance, geometry.solid_angle_sr);

    let ir_hazard = evaluate_ir_hazard(&spectral_irradiance, grid.values(), grid.step());
    let retinal_hazard = evaluate_retinal_hazard(
        &radiance,
        grid.values(),
        grid.step(),
        geometry.angular_subtense_rad,
    );

    Ok(SafetyAssessment {
        grid,
        scaling_factor_w_m2: factor,
        spectral_irradiance_w_m2_nm: spectral_irradiance,
        total_irradiance_w_m2: total,
        geometry,
        spectral_radiance_w_m2_sr_nm: radiance,
        ir_hazard,
        retinal_hazard,
    })
}
