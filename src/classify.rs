//! Classification of atomic contacts into element-pair categories.
//!
//! The scoring models only see a coarse chemical summary of the interface:
//! every contact falls into one of ten symmetric element-pair buckets based
//! on the names of the two atoms involved.

use crate::contacts::Contact;
use core::fmt;
use serde::Serialize;

/// Coarse element class of an atom, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomClass {
    /// Carbon atoms (`C*`, chlorine excluded).
    Carbon,
    /// Nitrogen atoms (`N*`).
    Nitrogen,
    /// Oxygen atoms (`O*`).
    Oxygen,
    /// Everything else, chlorine included.
    Other,
}

/// Classify an atom by the element prefix of its name.
///
/// Chlorine atoms (`CL*`) would otherwise be mistaken for carbons, so they
/// land in [`AtomClass::Other`] together with sulfur, phosphorus, metals and
/// any other element.
pub fn classify_atom(atom_name: &str) -> AtomClass {
    if atom_name.starts_with('C') && !atom_name.starts_with("CL") {
        AtomClass::Carbon
    } else if atom_name.starts_with('O') {
        AtomClass::Oxygen
    } else if atom_name.starts_with('N') {
        AtomClass::Nitrogen
    } else {
        AtomClass::Other
    }
}

/// The ten symmetric element-pair categories used by the scoring models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactCategory {
    /// Carbon with carbon (`CC`).
    CarbonCarbon,
    /// Nitrogen with nitrogen (`NN`).
    NitrogenNitrogen,
    /// Oxygen with oxygen (`OO`).
    OxygenOxygen,
    /// Other with other (`XX`).
    OtherOther,
    /// Carbon with nitrogen (`CN`).
    CarbonNitrogen,
    /// Carbon with oxygen (`CO`).
    CarbonOxygen,
    /// Carbon with other (`CX`).
    CarbonOther,
    /// Nitrogen with oxygen (`NO`).
    NitrogenOxygen,
    /// Nitrogen with other (`NX`).
    NitrogenOther,
    /// Oxygen with other (`OX`).
    OxygenOther,
}

impl ContactCategory {
    /// Combine two atom classes into their pair category.
    ///
    /// The pairing is order-independent: (C, N) and (N, C) both map to
    /// [`ContactCategory::CarbonNitrogen`].
    pub fn from_classes(a: AtomClass, b: AtomClass) -> Self {
        use AtomClass::*;
        match (a, b) {
            (Carbon, Carbon) => Self::CarbonCarbon,
            (Nitrogen, Nitrogen) => Self::NitrogenNitrogen,
            (Oxygen, Oxygen) => Self::OxygenOxygen,
            (Other, Other) => Self::OtherOther,
            (Carbon, Nitrogen) | (Nitrogen, Carbon) => Self::CarbonNitrogen,
            (Carbon, Oxygen) | (Oxygen, Carbon) => Self::CarbonOxygen,
            (Carbon, Other) | (Other, Carbon) => Self::CarbonOther,
            (Nitrogen, Oxygen) | (Oxygen, Nitrogen) => Self::NitrogenOxygen,
            (Nitrogen, Other) | (Other, Nitrogen) => Self::NitrogenOther,
            (Oxygen, Other) | (Other, Oxygen) => Self::OxygenOther,
        }
    }
}

impl fmt::Display for ContactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::CarbonCarbon => "CC",
            Self::NitrogenNitrogen => "NN",
            Self::OxygenOxygen => "OO",
            Self::OtherOther => "XX",
            Self::CarbonNitrogen => "CN",
            Self::CarbonOxygen => "CO",
            Self::CarbonOther => "CX",
            Self::NitrogenOxygen => "NO",
            Self::NitrogenOther => "NX",
            Self::OxygenOther => "OX",
        };
        write!(f, "{label}")
    }
}

/// Counts of contacts per element-pair category.
///
/// All ten categories are always present; the sum of the fields equals the
/// number of classified contacts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ContactHistogram {
    /// Carbon-carbon contacts.
    pub cc: u32,
    /// Nitrogen-nitrogen contacts.
    pub nn: u32,
    /// Oxygen-oxygen contacts.
    pub oo: u32,
    /// Other-other contacts.
    pub xx: u32,
    /// Carbon-nitrogen contacts.
    pub cn: u32,
    /// Carbon-oxygen contacts.
    pub co: u32,
    /// Carbon-other contacts.
    pub cx: u32,
    /// Nitrogen-oxygen contacts.
    pub no: u32,
    /// Nitrogen-other contacts.
    pub nx: u32,
    /// Oxygen-other contacts.
    pub ox: u32,
}

impl ContactHistogram {
    /// Classify every contact and accumulate the category counts.
    pub fn from_contacts(contacts: &[Contact]) -> Self {
        let mut hist = Self::default();
        for contact in contacts {
            let category = ContactCategory::from_classes(
                classify_atom(&contact.ligand.atomn),
                classify_atom(&contact.receptor.atomn),
            );
            hist.bump(category);
        }
        hist
    }

    fn bump(&mut self, category: ContactCategory) {
        use ContactCategory::*;
        let slot = match category {
            CarbonCarbon => &mut self.cc,
            NitrogenNitrogen => &mut self.nn,
            OxygenOxygen => &mut self.oo,
            OtherOther => &mut self.xx,
            CarbonNitrogen => &mut self.cn,
            CarbonOxygen => &mut self.co,
            CarbonOther => &mut self.cx,
            NitrogenOxygen => &mut self.no,
            NitrogenOther => &mut self.nx,
            OxygenOther => &mut self.ox,
        };
        *slot += 1;
    }

    /// Total number of classified contacts.
    pub fn total(&self) -> u32 {
        self.cc
            + self.nn
            + self.oo
            + self.xx
            + self.cn
            + self.co
            + self.cx
            + self.no
            + self.nx
            + self.ox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::ContactAtom;

    fn contact(atomn_1: &str, atomn_2: &str) -> Contact {
        let atom = |chain: &str, atomn: &str| ContactAtom {
            chain: chain.to_string(),
            resn: "ALA".to_string(),
            resi: 1,
            atomn: atomn.to_string(),
        };
        Contact {
            ligand: atom("A", atomn_1),
            receptor: atom("B", atomn_2),
            distance: 5.0,
        }
    }

    #[test]
    fn atom_names_map_to_element_classes() {
        assert_eq!(classify_atom("CA"), AtomClass::Carbon);
        assert_eq!(classify_atom("CD1"), AtomClass::Carbon);
        assert_eq!(classify_atom("OXT"), AtomClass::Oxygen);
        assert_eq!(classify_atom("NE2"), AtomClass::Nitrogen);
        // Chlorine is carved out of the carbon prefix
        assert_eq!(classify_atom("CL1"), AtomClass::Other);
        assert_eq!(classify_atom("SD"), AtomClass::Other);
        assert_eq!(classify_atom("FE"), AtomClass::Other);
        assert_eq!(classify_atom("1HB"), AtomClass::Other);
    }

    #[test]
    fn pair_categories_are_order_independent() {
        use AtomClass::*;
        assert_eq!(
            ContactCategory::from_classes(Carbon, Nitrogen),
            ContactCategory::from_classes(Nitrogen, Carbon)
        );
        assert_eq!(
            ContactCategory::from_classes(Oxygen, Other),
            ContactCategory::from_classes(Other, Oxygen)
        );
        assert_eq!(
            ContactCategory::from_classes(Carbon, Carbon),
            ContactCategory::CarbonCarbon
        );
    }

    #[test]
    fn category_labels() {
        assert_eq!(ContactCategory::CarbonNitrogen.to_string(), "CN");
        assert_eq!(ContactCategory::OtherOther.to_string(), "XX");
    }

    #[test]
    fn histogram_accumulates_all_contacts() {
        let contacts = vec![
            contact("CA", "CB"),
            contact("CA", "NE2"),
            contact("NZ", "CG"),
            contact("OXT", "CL1"),
            contact("OD1", "OE1"),
        ];
        let hist = ContactHistogram::from_contacts(&contacts);

        assert_eq!(hist.cc, 1);
        assert_eq!(hist.cn, 2);
        assert_eq!(hist.ox, 1);
        assert_eq!(hist.oo, 1);
        assert_eq!(hist.total(), contacts.len() as u32);
    }

    #[test]
    fn empty_contact_list_yields_all_zero_histogram() {
        let hist = ContactHistogram::from_contacts(&[]);
        assert_eq!(hist, ContactHistogram::default());
        assert_eq!(hist.total(), 0);
    }
}
