//! CSV ingestion for external spectral reference tables.
//!
//! A table file is two columns, wavelength (nm) then value, with a header
//! row. Whitespace around fields is tolerated; anything else that fails to
//! parse is an error naming the offending row.

use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::{DataError, IngestError};
use crate::spectral::{validate_table, SpectralSample};

/// Load a spectral reference table from a CSV file.
///
/// # Errors
///
/// `IngestError::Csv` if the file cannot be read; `IngestError::Data` if a
/// row fails to parse or the resulting table fails validation (fewer than
/// two samples or wavelengths not strictly increasing).
pub fn load_spectral_table<P: AsRef<Path>>(path: P) -> Result<Vec<SpectralSample>, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)?;

    let mut samples = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let sample: SpectralSample =
            record
                .deserialize(None)
                .map_err(|e| DataError::MalformedRow {
                    // +2: one for the header line, one for 1-based numbering
                    row: index + 2,
                    reason: e.to_string(),
                })?;
        samples.push(sample);
    }

    validate_table(&samples)?;
    Ok(samples)
}
