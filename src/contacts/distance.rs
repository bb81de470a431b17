//! In-process contact detection by brute-force distance scanning.

use super::structs::{Contact, ContactAtom};
use super::ContactDetector;
use crate::chains::ChainGroup;
use crate::error::PredictionError;
use nalgebra as na;
use pdbtbx::{
    ContainsAtomConformer, ContainsAtomConformerResidue, ContainsAtomConformerResidueChain, PDB,
};
use tracing::debug;

/// Contact detection by exhaustive pairwise distance comparison.
///
/// Complexes handled by this tool are small (hundreds to low thousands of
/// atoms), so the O(n * m) scan stays well within budget and no spatial
/// index is used.
pub struct DistanceContacts;

impl ContactDetector for DistanceContacts {
    fn detect(
        &self,
        pdb: &PDB,
        groups: &[ChainGroup; 2],
        cutoff: f64,
    ) -> Result<Vec<Contact>, PredictionError> {
        let mut buckets: [Vec<(ContactAtom, na::Vector3<f64>)>; 2] = [Vec::new(), Vec::new()];

        for hier in pdb.atoms_with_hierarchy() {
            let chain_id = hier.chain().id();
            // A chain listed in both groups counts towards the first one.
            let Some(side) = groups.iter().position(|g| g.contains(chain_id)) else {
                continue;
            };
            let (x, y, z) = hier.atom().pos();
            let atom = ContactAtom {
                chain: chain_id.to_string(),
                resn: hier.residue().name().unwrap_or("").to_string(),
                resi: hier.residue().serial_number(),
                atomn: hier.atom().name().to_string(),
            };
            buckets[side].push((atom, na::Vector3::new(x, y, z)));
        }

        let [ligands, receptors] = buckets;
        debug!(
            "Scanning {} ligand against {} receptor atoms",
            ligands.len(),
            receptors.len()
        );

        let mut contacts = Vec::new();
        for (lig_atom, lig_pos) in &ligands {
            for (rec_atom, rec_pos) in &receptors {
                let distance = (lig_pos - rec_pos).norm();
                if distance <= cutoff {
                    contacts.push(Contact {
                        ligand: lig_atom.clone(),
                        receptor: rec_atom.clone(),
                        distance,
                    });
                }
            }
        }
        Ok(contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::parse_chain_group;
    use crate::utils::load_model;

    fn atom_line(
        serial: usize,
        name: &str,
        chain: char,
        resi: isize,
        pos: (f64, f64, f64),
        element: &str,
    ) -> String {
        format!(
            "ATOM  {serial:>5} {name:<4} ALA {chain}{resi:>4}    {x:8.3}{y:8.3}{z:8.3}  1.00  0.00          {element:>2}",
            x = pos.0,
            y = pos.1,
            z = pos.2,
        )
    }

    fn load_fixture(lines: &[String]) -> pdbtbx::PDB {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("complex.pdb");
        std::fs::write(&path, format!("{}\nEND\n", lines.join("\n"))).unwrap();
        let (pdb, _warnings) = load_model(path.to_str().unwrap()).unwrap();
        pdb
    }

    fn two_groups() -> [ChainGroup; 2] {
        [parse_chain_group("A").unwrap(), parse_chain_group("B").unwrap()]
    }

    #[test]
    fn finds_pairs_within_the_cutoff() {
        let pdb = load_fixture(&[
            atom_line(1, "CA", 'A', 1, (0.0, 0.0, 0.0), "C"),
            atom_line(2, "CB", 'B', 1, (3.0, 0.0, 0.0), "C"),
            atom_line(3, "CG", 'B', 2, (30.0, 0.0, 0.0), "C"),
        ]);

        let contacts = DistanceContacts
            .detect(&pdb, &two_groups(), 10.5)
            .unwrap();

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].ligand.chain, "A");
        assert_eq!(contacts[0].receptor.chain, "B");
        assert_eq!(contacts[0].receptor.atomn, "CB");
        assert!((contacts[0].distance - 3.0).abs() < 1e-9);
    }

    #[test]
    fn cutoff_boundary_is_inclusive() {
        let pdb = load_fixture(&[
            atom_line(1, "CA", 'A', 1, (0.0, 0.0, 0.0), "C"),
            atom_line(2, "CA", 'B', 1, (0.0, 0.0, 10.5), "C"),
        ]);
        let groups = two_groups();

        let at_cutoff = DistanceContacts.detect(&pdb, &groups, 10.5).unwrap();
        assert_eq!(at_cutoff.len(), 1);

        let below_cutoff = DistanceContacts.detect(&pdb, &groups, 10.4999).unwrap();
        assert!(below_cutoff.is_empty());
    }

    #[test]
    fn atoms_outside_both_groups_are_discarded() {
        let pdb = load_fixture(&[
            atom_line(1, "CA", 'A', 1, (0.0, 0.0, 0.0), "C"),
            atom_line(2, "CA", 'B', 1, (2.0, 0.0, 0.0), "C"),
            atom_line(3, "CA", 'C', 1, (1.0, 0.0, 0.0), "C"),
        ]);

        let contacts = DistanceContacts
            .detect(&pdb, &two_groups(), 10.5)
            .unwrap();

        assert_eq!(contacts.len(), 1);
    }

    #[test]
    fn empty_bucket_yields_an_empty_result() {
        let pdb = load_fixture(&[atom_line(1, "CA", 'A', 1, (0.0, 0.0, 0.0), "C")]);

        let contacts = DistanceContacts
            .detect(&pdb, &two_groups(), 10.5)
            .unwrap();

        assert!(contacts.is_empty());
    }

    #[test]
    fn multi_chain_groups_count_contacts_from_every_member() {
        let groups = [
            parse_chain_group("A,B").unwrap(),
            parse_chain_group("C").unwrap(),
        ];
        let pdb = load_fixture(&[
            atom_line(1, "CA", 'A', 1, (0.0, 0.0, 0.0), "C"),
            atom_line(2, "CA", 'B', 1, (1.0, 0.0, 0.0), "C"),
            atom_line(3, "CA", 'C', 1, (2.0, 0.0, 0.0), "C"),
        ]);

        let contacts = DistanceContacts.detect(&pdb, &groups, 10.5).unwrap();

        assert_eq!(contacts.len(), 2);
        assert!(contacts.iter().all(|c| c.receptor.chain == "C"));
    }
}
