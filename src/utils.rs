//! Structure loading and annotation helpers.

use crate::error::PredictionError;
use pdbtbx::{PDBError, ReadOptions, StrictnessLevel, PDB};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// Open an atomic data file with [`pdbtbx::ReadOptions`] in loose mode.
///
/// Both PDB and mmCIF inputs are handled. HETATM records are kept: the
/// ligand is usually the point of the calculation. Non-fatal reader
/// diagnostics are returned alongside the structure for the caller to log.
pub fn load_model(input_file: &str) -> Result<(PDB, Vec<PDBError>), PredictionError> {
    ReadOptions::default()
        .set_only_atomic_coords(true)
        .set_level(StrictnessLevel::Loose)
        .read(input_file)
        .map_err(|errors| PredictionError::StructureRead {
            path: input_file.to_string(),
            details: errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
        })
}

/// Extract the electrostatics energy from a HADDOCK-annotated PDB file.
///
/// HADDOCK writes its energy terms as a `REMARK energies: e1,e2,...` line
/// ahead of the coordinate records; the electrostatics term is the seventh
/// value. Returns `None` when the annotation is absent, and stops scanning
/// at the first ATOM record since remarks precede coordinates. A value that
/// does not parse as a float is logged and treated as absent.
pub fn extract_electrostatics(input_file: impl AsRef<Path>) -> Result<Option<f64>, PredictionError> {
    let path = input_file.as_ref();
    let read_err = |e: std::io::Error| PredictionError::StructureRead {
        path: path.display().to_string(),
        details: e.to_string(),
    };

    let file = File::open(path).map_err(read_err)?;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(read_err)?;
        if line.starts_with("REMARK energies") {
            let values = line.trim_end().trim_start_matches("REMARK energies: ");
            return match values.split(',').nth(6).map(|v| v.trim().parse::<f64>()) {
                Some(Ok(electrostatics)) => Ok(Some(electrostatics)),
                _ => {
                    warn!("Could not read an electrostatics energy from {line:?}");
                    Ok(None)
                }
            };
        }
        if line.starts_with("ATOM") {
            break;
        }
    }
    Ok(None)
}
