//! Spectral reference tables, interpolation, and wavelength grids

pub mod curve;
pub mod grid;
pub mod sample;

pub use curve::SpectralCurve;
pub use grid::WavelengthGrid;
pub use sample::{validate_table, SpectralSample};
