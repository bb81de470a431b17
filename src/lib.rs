#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

//! # Prodigy-lig Library
//!
//! This library predicts the binding affinity of a biomolecular complex in a
//! PDB or mmCIF file from the atomic contacts between two groups of chains.
//! Contacts are classified into ten element-pair categories and the counts
//! are fed into pre-trained linear regression models, optionally together
//! with an electrostatics energy from a refinement run.
//!
//! The typical entry point is a [`PredictionSession`]:
//!
//! ```no_run
//! use prodigy_lig::{load_model, DistanceContacts, PredictionSession};
//!
//! let (pdb, _warnings) = load_model("path/to/complex.pdb").unwrap();
//! let session = PredictionSession::new(
//!     "complex",
//!     ("A", "B,C"),
//!     Some(-48.8),
//!     10.5,
//!     Box::new(DistanceContacts),
//! )
//! .unwrap();
//! let result = session.predict(&pdb).unwrap();
//! println!("{}", result.tabular_report());
//! ```

mod chains;
mod classify;
mod contacts;
mod error;
mod scoring;
mod session;
mod utils;

// Re-export key public types
pub use chains::{parse_chain_group, parse_chain_groups, ChainGroup, ChainSpecError};
pub use classify::{classify_atom, AtomClass, ContactCategory, ContactHistogram};
pub use contacts::{
    Contact, ContactAtom, ContactDetector, DistanceContacts, ExternalContacts, ExternalToolError,
};
pub use error::PredictionError;
pub use scoring::{calculate_dg, calculate_dg_electrostatics, calculate_score};
pub use session::{PredictionResult, PredictionSession};
pub use utils::{extract_electrostatics, load_model};
