//! IEC 62471 eye-safety report generator.
//!
//! Runs the assessment pipeline against either the built-in Thorlabs
//! M940L3 / S121C reference tables or external CSV tables, and prints a
//! plain-text report.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use irsafety::pipeline::{assess, AssessmentConfig, MeasurementContext};
use irsafety::reference;
use irsafety::report;
use irsafety::tables::load_spectral_table;

#[derive(Parser, Debug)]
#[command(author, version, about = "IEC 62471 eye-safety assessment for IR illuminators")]
struct Args {
    /// Measured optical power (W)
    #[arg(long, default_value_t = 3.5e-3)]
    power: f64,

    /// Eye-to-illuminator distance (m)
    #[arg(long, default_value_t = 0.5)]
    distance: f64,

    /// Illuminator aperture diameter (m)
    #[arg(long, default_value_t = 0.05)]
    diameter: f64,

    /// Power-sensor active area (m^2); defaults to the Thorlabs S121C
    #[arg(long)]
    sensor_area: Option<f64>,

    /// Wavelength integration step (nm)
    #[arg(long, default_value_t = 5.0)]
    grid_step: f64,

    /// CSV of illuminator relative spectral intensity (wavelength_nm,value);
    /// defaults to the built-in Thorlabs M940L3 table
    #[arg(long)]
    illuminator_csv: Option<PathBuf>,

    /// CSV of sensor spectral responsivity (wavelength_nm,value); defaults to
    /// the built-in Thorlabs S121C table
    #[arg(long)]
    sensor_csv: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let illuminator_table = match &args.illuminator_csv {
        Some(path) => {
            info!("loading illuminator table from {}", path.display());
            load_spectral_table(path)?
        }
        None => reference::m940l3_relative_intensity(),
    };
    let sensor_table = match &args.sensor_csv {
        Some(path) => {
            info!("loading sensor table from {}", path.display());
            load_spectral_table(path)?
        }
        None => reference::s121c_responsivity(),
    };

    let sensor_area = args
        .sensor_area
        .unwrap_or_else(reference::s121c_active_area_m2);

    let context = MeasurementContext::new(args.power, args.distance, args.diameter, sensor_area)?;
    let config = AssessmentConfig {
        context,
        grid_step_nm: args.grid_step,
    };

    info!(
        "assessing {} W at {} m, {} m aperture",
        args.power, args.distance, args.diameter
    );
    let assessment = assess(&illuminator_table, &sensor_table, &config)?;

    print!("{}", report::render(&assessment, &config));

    Ok(())
}
