//! The contact records shared by every detection strategy.

use core::fmt;

/// One endpoint of an atomic contact.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactAtom {
    /// Chain identifier.
    pub chain: String,
    /// Residue name.
    pub resn: String,
    /// Residue sequence number.
    pub resi: isize,
    /// Atom name, e.g. `CA` or `CL1`.
    pub atomn: String,
}

/// An atom pair from opposite interactor groups within the distance cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    /// The atom from the first interactor group.
    pub ligand: ContactAtom,
    /// The atom from the second interactor group.
    pub receptor: ContactAtom,
    /// Euclidean distance between the two atoms in Ångströms.
    pub distance: f64,
}

impl fmt::Display for ContactAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chain {chain}, Residue {resn} {resi}, Atom {atomn}",
            chain = self.chain,
            resn = self.resn,
            resi = self.resi,
            atomn = self.atomn
        )
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ligand [{ligand}] is {dist:.2} Å from Receptor [{receptor}]",
            ligand = self.ligand,
            dist = self.distance,
            receptor = self.receptor
        )
    }
}
