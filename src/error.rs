//! The crate-wide error type for prediction runs.

use crate::chains::ChainSpecError;
use crate::contacts::ExternalToolError;
use thiserror::Error;

/// Everything that can abort a prediction run.
///
/// None of these are transient, so nothing is ever retried.
#[derive(Debug, Error)]
pub enum PredictionError {
    /// The chain-group specification failed validation.
    #[error(transparent)]
    ChainSpec(#[from] ChainSpecError),

    /// Contact detection found no atom pairs between the two groups.
    ///
    /// This can reflect a legitimate input (chains genuinely not in
    /// contact), so callers typically report it as a warning rather than a
    /// hard failure.
    #[error("there are no contacts between the specified chains")]
    NoContacts,

    /// The external contact tool failed.
    #[error(transparent)]
    ContactTool(#[from] ExternalToolError),

    /// The structure file could not be read.
    #[error("failed to read structure {path}: {details}")]
    StructureRead {
        /// Path of the offending file.
        path: String,
        /// Reader diagnostics, one per line.
        details: String,
    },
}
