//! Atomic contact detection between two interactor groups.
//!
//! Two interchangeable strategies produce the same contact records: an
//! in-process distance scan ([`DistanceContacts`]) and an external all-atom
//! contact executable ([`ExternalContacts`]). Downstream classification
//! treats their outputs identically.

pub mod distance;
pub mod external;
pub mod structs;

// Re-exports
pub use distance::DistanceContacts;
pub use external::{ExternalContacts, ExternalToolError};
pub use structs::{Contact, ContactAtom};

use crate::chains::ChainGroup;
use crate::error::PredictionError;
use pdbtbx::PDB;

/// Strategy interface for contact detection.
///
/// Implementations must agree on semantics: an atom pair with one atom in
/// each group and an inter-atomic distance within `cutoff` (inclusive) is a
/// contact. The variant is chosen once, at session construction time.
pub trait ContactDetector {
    /// Enumerate all inter-group atom pairs within `cutoff` Ångströms.
    ///
    /// An empty result is not an error at this level; the caller decides how
    /// to surface a contact-free interface.
    fn detect(
        &self,
        pdb: &PDB,
        groups: &[ChainGroup; 2],
        cutoff: f64,
    ) -> Result<Vec<Contact>, PredictionError>;
}
