//! Retinal burn hazard weighting function R(λ), IEC 62471 Table 4.2.
//!
//! A pure, stateless piecewise function over exactly six wavelength ranges.
//! The ranges are modeled as an ordered table of bounds with explicit
//! inclusivity flags, evaluated by lookup; the bound inequalities are taken
//! verbatim from the standard so there are no gaps or overlaps between
//! segments. Outside [380, 1400] nm the standard leaves R undefined and this
//! implementation returns zero contribution.
//!
//! The function has a genuine ~0.25% step at 1050 nm: the (700, 1050] branch
//! ends at 10^(-0.7) ≈ 0.1995 while the next plateau is exactly 0.2. That
//! discontinuity belongs to the standard and is preserved.

/// Tabulated wavelengths for the 380-500 nm branch (nm, step 5).
const BLUE_TABLE_WAVELENGTHS: [f64; 25] = [
    380.0, 385.0, 390.0, 395.0, 400.0, 405.0, 410.0, 415.0, 420.0, 425.0, 430.0, 435.0, 440.0,
    445.0, 450.0, 455.0, 460.0, 465.0, 470.0, 475.0, 480.0, 485.0, 490.0, 495.0, 500.0,
];

/// R(λ) values for the 380-500 nm branch, IEC 62471 Table 4.2.
const BLUE_TABLE_VALUES: [f64; 25] = [
    0.1, 0.13, 0.25, 0.5, 1.0, 2.0, 4.0, 8.0, 9.0, 9.5, 9.8, 10.0, 10.0, 9.7, 9.4, 9.0, 8.0, 7.0,
    6.2, 5.5, 4.5, 4.0, 2.2, 1.6, 1.0,
];

/// Closed-form (or tabulated) rule applied within one wavelength range.
#[derive(Debug, Clone, Copy)]
enum SegmentFormula {
    /// Linear interpolation over the Table 4.2 lookup points
    BlueTable,
    /// Constant 1.0
    Unity,
    /// 10^((700 − λ)/500)
    InfraredRolloff,
    /// Constant 0.2
    Plateau,
    /// 0.2 · 10^(0.02·(1150 − λ))
    PlateauDecay,
    /// Constant 0.02
    FarInfrared,
}

impl SegmentFormula {
    fn eval(self, wavelength_nm: f64) -> f64 {
        match self {
            SegmentFormula::BlueTable => blue_table_interp(wavelength_nm),
            SegmentFormula::Unity => 1.0,
            SegmentFormula::InfraredRolloff => 10f64.powf((700.0 - wavelength_nm) / 500.0),
            SegmentFormula::Plateau => 0.2,
            SegmentFormula::PlateauDecay => 0.2 * 10f64.powf(0.02 * (1150.0 - wavelength_nm)),
            SegmentFormula::FarInfrared => 0.02,
        }
    }
}

/// One row of the range table: bounds, their inclusivity, and the formula.
#[derive(Debug, Clone, Copy)]
struct Segment {
    lower_nm: f64,
    upper_nm: f64,
    includes_lower: bool,
    includes_upper: bool,
    formula: SegmentFormula,
}

impl Segment {
    fn contains(&self, wavelength_nm: f64) -> bool {
        let above = if self.includes_lower {
            wavelength_nm >= self.lower_nm
        } else {
            wavelength_nm > self.lower_nm
        };
        let below = if self.includes_upper {
            wavelength_nm <= self.upper_nm
        } else {
            wavelength_nm < self.upper_nm
        };
        above && below
    }
}

/// The six ranges of Table 4.2, bound inequalities verbatim.
const SEGMENTS: [Segment; 6] = [
    Segment {
        lower_nm: 380.0,
        upper_nm: 500.0,
        includes_lower: true,
        includes_upper: false,
        formula: SegmentFormula::BlueTable,
    },
    Segment {
        lower_nm: 500.0,
        upper_nm: 700.0,
        includes_lower: true,
        includes_upper: true,
        formula: SegmentFormula::Unity,
    },
    Segment {
        lower_nm: 700.0,
        upper_nm: 1050.0,
        includes_lower: false,
        includes_upper: true,
        formula: SegmentFormula::InfraredRolloff,
    },
    Segment {
        lower_nm: 1050.0,
        upper_nm: 1150.0,
        includes_lower: false,
        includes_upper: true,
        formula: SegmentFormula::Plateau,
    },
    Segment {
        lower_nm: 1150.0,
        upper_nm: 1200.0,
        includes_lower: false,
        includes_upper: true,
        formula: SegmentFormula::PlateauDecay,
    },
    Segment {
        lower_nm: 1200.0,
        upper_nm: 1400.0,
        includes_lower: false,
        includes_upper: true,
        formula: SegmentFormula::FarInfrared,
    },
];

/// Linear interpolation within the 380-500 nm lookup table.
fn blue_table_interp(wavelength_nm: f64) -> f64 {
    // Callers guarantee wavelength is within the table range
    for i in 0..BLUE_TABLE_WAVELENGTHS.len() - 1 {
        let w0 = BLUE_TABLE_WAVELENGTHS[i];
        let w1 = BLUE_TABLE_WAVELENGTHS[i + 1];
        if wavelength_nm >= w0 && wavelength_nm <= w1 {
            let t = (wavelength_nm - w0) / (w1 - w0);
            return BLUE_TABLE_VALUES[i] * (1.0 - t) + BLUE_TABLE_VALUES[i + 1] * t;
        }
    }
    unreachable!("blue table lookup outside [380, 500]")
}

/// Evaluate R(λ) at a single wavelength (nm).
///
/// Returns 0.0 outside [380, 1400] nm.
pub fn retinal_hazard_weight(wavelength_nm: f64) -> f64 {
    for segment in &SEGMENTS {
        if segment.contains(wavelength_nm) {
            return segment.formula.eval(wavelength_nm);
        }
    }
    0.0
}

/// Batch form of [`retinal_hazard_weight`]; identical results, input order
/// preserved.
pub fn retinal_hazard_weights(wavelengths: &[f64]) -> Vec<f64> {
    wavelengths
        .iter()
        .map(|&w| retinal_hazard_weight(w))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unity_plateau() {
        assert_relative_eq!(retinal_hazard_weight(500.0), 1.0);
        assert_relative_eq!(retinal_hazard_weight(600.0), 1.0);
        assert_relative_eq!(retinal_hazard_weight(700.0), 1.0);
    }

    #[test]
    fn test_continuous_at_700() {
        // The (700, 1050] branch starts at 10^0 = 1, matching the plateau
        assert_relative_eq!(retinal_hazard_weight(700.0001), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_step_discontinuity_at_1050() {
        // The standard's own ~0.25% step: 10^(-0.7) vs the 0.2 plateau.
        // Asserted as-is, not smoothed over.
        assert_relative_eq!(
            retinal_hazard_weight(1050.0),
            10f64.powf(-0.7),
            epsilon = 1e-12
        );
        assert_relative_eq!(retinal_hazard_weight(1050.0001), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_blue_table_endpoints_and_peak() {
        assert_relative_eq!(retinal_hazard_weight(380.0), 0.1);
        assert_relative_eq!(retinal_hazard_weight(400.0), 1.0);
        assert_relative_eq!(retinal_hazard_weight(435.0), 10.0);
        // 500 belongs to the unity range, not the table
        assert_relative_eq!(retinal_hazard_weight(500.0), 1.0);
    }

    #[test]
    fn test_blue_table_interpolation() {
        // Midpoint between 380 (0.1) and 385 (0.13)
        assert_relative_eq!(retinal_hazard_weight(382.5), 0.115, epsilon = 1e-12);
    }

    #[test]
    fn test_plateau_decay_branch() {
        assert_relative_eq!(retinal_hazard_weight(1150.0), 0.2);
        // 0.2 * 10^(0.02*(1150-1200)) = 0.2 * 10^-1 = 0.02, continuous at 1200
        assert_relative_eq!(retinal_hazard_weight(1200.0), 0.02, epsilon = 1e-12);
        assert_relative_eq!(retinal_hazard_weight(1300.0), 0.02);
        assert_relative_eq!(retinal_hazard_weight(1400.0), 0.02);
    }

    #[test]
    fn test_zero_outside_defined_range() {
        assert_eq!(retinal_hazard_weight(379.9999), 0.0);
        assert_eq!(retinal_hazard_weight(1400.0001), 0.0);
        assert_eq!(retinal_hazard_weight(200.0), 0.0);
        assert_eq!(retinal_hazard_weight(3000.0), 0.0);
    }

    #[test]
    fn test_infrared_rolloff() {
        assert_relative_eq!(
            retinal_hazard_weight(940.0),
            10f64.powf((700.0 - 940.0) / 500.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_batch_matches_scalar() {
        let wavelengths: Vec<f64> = (370..1410).map(|w| w as f64).collect();
        let batch = retinal_hazard_weights(&wavelengths);

        for (w, v) in wavelengths.iter().zip(&batch) {
            assert_eq!(retinal_hazard_weight(*w), *v);
        }
    }

    #[test]
    fn test_no_gaps_or_overlaps() {
        // Every wavelength in [380, 1400] must fall in exactly one segment
        let mut w = 380.0;
        while w <= 1400.0 {
            let hits = SEGMENTS.iter().filter(|s| s.contains(w)).count();
            assert_eq!(hits, 1, "wavelength {} hit {} segments", w, hits);
            w += 0.25;
        }
    }
}
