//! Plain-text report rendering.
//!
//! Formats a finished [`SafetyAssessment`](crate::pipeline::SafetyAssessment)
//! for terminal output. Pure consumer of the assessment; nothing here feeds
//! back into the derivation.

use std::fmt::Write;

use crate::hazard::{HazardResult, Verdict};
use crate::pipeline::{AssessmentConfig, SafetyAssessment};

const BAR: &str = "============================================================";

/// Render the full assessment as a multi-line report.
pub fn render(assessment: &SafetyAssessment, config: &AssessmentConfig) -> String {
    let context = &config.context;
    let mut out = String::new();

    // Infallible: fmt::Write on String cannot fail
    let _ = writeln!(out, "{BAR}");
    let _ = writeln!(out, "IEC 62471 EYE SAFETY ASSESSMENT");
    let _ = writeln!(out, "{BAR}");
    let _ = writeln!(
        out,
        "Measured power:        {:.3e} W",
        context.measured_power_w()
    );
    let _ = writeln!(out, "Distance:              {:.3} m", context.distance_m());
    let _ = writeln!(
        out,
        "Illuminator diameter:  {:.3} m",
        context.illuminator_diameter_m()
    );
    let _ = writeln!(
        out,
        "Sensor area:           {:.3e} m^2",
        context.sensor_area_m2()
    );
    let _ = writeln!(
        out,
        "Wavelength grid:       [{:.0}, {:.0}) nm, step {:.1} nm ({} points)",
        assessment.grid.lower_nm(),
        assessment.grid.upper_nm(),
        assessment.grid.step(),
        assessment.grid.len()
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Scaling factor:        {:.4e} W/m^2",
        assessment.scaling_factor_w_m2
    );
    let _ = writeln!(
        out,
        "Total irradiance:      {:.4} W/m^2",
        assessment.total_irradiance_w_m2
    );
    let _ = writeln!(
        out,
        "Angular subtense:      {:.4} rad",
        assessment.geometry.angular_subtense_rad
    );
    let _ = writeln!(
        out,
        "Solid angle:           {:.4e} sr",
        assessment.geometry.solid_angle_sr
    );
    let _ = writeln!(out);

    render_hazard(
        &mut out,
        "IR RADIATION HAZARD (700-3000 nm)",
        "irradiance",
        "W/m^2",
        &assessment.ir_hazard,
    );
    let _ = writeln!(out);
    render_hazard(
        &mut out,
        "RETINAL BURN HAZARD (780-1400 nm)",
        "weighted radiance",
        "W/m^2/sr",
        &assessment.retinal_hazard,
    );
    let _ = writeln!(out, "{BAR}");

    out
}

fn render_hazard(out: &mut String, title: &str, metric: &str, unit: &str, result: &HazardResult) {
    let _ = writeln!(out, "--- {title} ---");
    let _ = writeln!(out, "{metric}: {:.4} {unit}", result.value);
    let _ = writeln!(out, "limit:     {:.4} {unit}", result.limit);

    match result.verdict {
        Verdict::Safe => {
            let _ = writeln!(out, "verdict:   SAFE for continuous exposure");
            if let Some(margin) = result.safety_margin {
                let _ = writeln!(out, "margin:    {margin:.2}x below the limit");
            }
        }
        Verdict::Hazardous => {
            let _ = writeln!(out, "verdict:   HAZARDOUS");
            if let Some(t) = result.max_exposure_time_s {
                let _ = writeln!(out, "max safe exposure time: {t:.1} s");
            }
        }
    }
}
