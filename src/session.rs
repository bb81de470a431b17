//! Orchestration of a single prediction run and its result record.

use crate::chains::{parse_chain_group, ChainGroup};
use crate::classify::ContactHistogram;
use crate::contacts::ContactDetector;
use crate::error::PredictionError;
use crate::scoring::{calculate_dg, calculate_dg_electrostatics, calculate_score};
use pdbtbx::PDB;
use serde::Serialize;
use tracing::debug;

/// A single-use prediction run over one structure.
///
/// Construct one session per structure. [`PredictionSession::predict`]
/// consumes the session, so a finished (or failed) run cannot be restarted;
/// nothing of it survives but the returned [`PredictionResult`].
pub struct PredictionSession {
    id: String,
    groups: [ChainGroup; 2],
    electrostatics: Option<f64>,
    cutoff: f64,
    detector: Box<dyn ContactDetector>,
}

impl PredictionSession {
    /// Set up a prediction for the structure identified by `id`.
    ///
    /// The two raw chain specifications are validated here, so a malformed
    /// spec fails the construction before any detection work happens. The
    /// detection strategy is fixed for the lifetime of the session.
    pub fn new(
        id: impl Into<String>,
        interactors: (&str, &str),
        electrostatics: Option<f64>,
        cutoff: f64,
        detector: Box<dyn ContactDetector>,
    ) -> Result<Self, PredictionError> {
        let groups = [
            parse_chain_group(interactors.0)?,
            parse_chain_group(interactors.1)?,
        ];
        debug!(
            "Parsed interactor groups {lig} and {rec}",
            lig = groups[0],
            rec = groups[1]
        );
        Ok(Self {
            id: id.into(),
            groups,
            electrostatics,
            cutoff,
            detector,
        })
    }

    /// Run the full pipeline: detect contacts, classify them, apply the
    /// scoring models and assemble the result.
    ///
    /// Fails with [`PredictionError::NoContacts`] when the two groups share
    /// no atom pair within the cutoff. The electrostatics-dependent outputs
    /// are only computed when an energy was supplied at construction.
    pub fn predict(self, pdb: &PDB) -> Result<PredictionResult, PredictionError> {
        let contacts = self.detector.detect(pdb, &self.groups, self.cutoff)?;
        if contacts.is_empty() {
            return Err(PredictionError::NoContacts);
        }
        debug!("Found {} contacts between the groups", contacts.len());

        let contact_counts = ContactHistogram::from_contacts(&contacts);

        let dg = calculate_dg(&contact_counts);
        let (dg_score, dg_elec) = match self.electrostatics {
            Some(elec) => (
                Some(calculate_score(&contact_counts, elec)),
                Some(calculate_dg_electrostatics(&contact_counts, elec)),
            ),
            None => (None, None),
        };

        Ok(PredictionResult {
            structure: self.id,
            chains: self.groups,
            electrostatics: self.electrostatics,
            cutoff: self.cutoff,
            dg_score,
            dg_elec,
            dg,
            contact_counts,
        })
    }
}

/// The immutable outcome of one prediction run.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    /// Structure identifier; doubles as the job name in reports.
    pub structure: String,
    /// The two interactor groups, in specification order.
    pub chains: [ChainGroup; 2],
    /// Electrostatics energy used by the scoring, if one was available.
    pub electrostatics: Option<f64>,
    /// Distance cutoff in Ångströms.
    pub cutoff: f64,
    /// Score model output; present iff electrostatics were supplied.
    pub dg_score: Option<f64>,
    /// Affinity prediction with electrostatics; present iff supplied.
    pub dg_elec: Option<f64>,
    /// Affinity prediction without electrostatics; always present.
    pub dg: f64,
    /// Per-category contact counts behind the predictions.
    pub contact_counts: ContactHistogram,
}

impl PredictionResult {
    /// Tab-separated report with a header row and two-decimal numbers.
    ///
    /// With electrostatics the columns are job name, affinity prediction and
    /// score; without, a single low-refinement affinity column.
    pub fn tabular_report(&self) -> String {
        match (self.dg_elec, self.dg_score) {
            (Some(dg_elec), Some(dg_score)) => format!(
                "Job name\tDGprediction (Kcal/mol)\tDGscore\n{name}\t{dg_elec:.2}\t{dg_score:.2}\n",
                name = self.structure,
            ),
            _ => format!(
                "Job name\tDGprediction (low refinement) (Kcal/mol)\n{name}\t{dg:.2}\n",
                name = self.structure,
                dg = self.dg,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::DistanceContacts;
    use crate::utils::load_model;
    use approx::assert_relative_eq;

    fn load_fixture(contents: &str) -> PDB {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("complex.pdb");
        std::fs::write(&path, contents).unwrap();
        let (pdb, _warnings) = load_model(path.to_str().unwrap()).unwrap();
        pdb
    }

    // One C-C contact at 3.0 Å between chains A and B, plus a far-away atom.
    const TWO_CHAIN_FIXTURE: &str = "\
ATOM      1  CA  ALA A   1       0.000   0.000   0.000  1.00  0.00           C
ATOM      2  CB  ALA B   1       3.000   0.000   0.000  1.00  0.00           C
ATOM      3  CG  ALA B   2      90.000   0.000   0.000  1.00  0.00           C
END
";

    fn session(electrostatics: Option<f64>) -> PredictionSession {
        PredictionSession::new(
            "complex",
            ("A", "B"),
            electrostatics,
            10.5,
            Box::new(DistanceContacts),
        )
        .unwrap()
    }

    #[test]
    fn full_run_with_electrostatics() {
        let pdb = load_fixture(TWO_CHAIN_FIXTURE);
        let result = session(Some(-30.5)).predict(&pdb).unwrap();

        assert_eq!(result.contact_counts.cc, 1);
        assert_eq!(result.contact_counts.total(), 1);
        assert_relative_eq!(result.dg, -5.1923181, epsilon = 1e-6);
        assert_relative_eq!(result.dg_score.unwrap(), 176.48807, epsilon = 1e-6);
        assert_relative_eq!(result.dg_elec.unwrap(), -5.4529099, epsilon = 1e-6);
    }

    #[test]
    fn electrostatics_dependent_outputs_are_omitted_without_an_energy() {
        let pdb = load_fixture(TWO_CHAIN_FIXTURE);
        let result = session(None).predict(&pdb).unwrap();

        assert!(result.dg_score.is_none());
        assert!(result.dg_elec.is_none());
        assert_relative_eq!(result.dg, -5.1923181, epsilon = 1e-6);
    }

    #[test]
    fn no_contacts_is_a_terminal_condition() {
        let pdb = load_fixture(
            "\
ATOM      1  CA  ALA A   1       0.000   0.000   0.000  1.00  0.00           C
ATOM      2  CB  ALA B   1      90.000   0.000   0.000  1.00  0.00           C
END
",
        );
        let result = session(Some(-30.5)).predict(&pdb);
        assert!(matches!(result, Err(PredictionError::NoContacts)));
    }

    #[test]
    fn malformed_chain_spec_fails_at_construction() {
        let result = PredictionSession::new(
            "complex",
            ("A,", "B"),
            None,
            10.5,
            Box::new(DistanceContacts),
        );
        assert!(matches!(result, Err(PredictionError::ChainSpec(_))));
    }

    #[test]
    fn report_shape_with_electrostatics() {
        let pdb = load_fixture(TWO_CHAIN_FIXTURE);
        let result = session(Some(-30.5)).predict(&pdb).unwrap();

        assert_eq!(
            result.tabular_report(),
            "Job name\tDGprediction (Kcal/mol)\tDGscore\ncomplex\t-5.45\t176.49\n"
        );
    }

    #[test]
    fn report_shape_without_electrostatics() {
        let pdb = load_fixture(TWO_CHAIN_FIXTURE);
        let result = session(None).predict(&pdb).unwrap();

        assert_eq!(
            result.tabular_report(),
            "Job name\tDGprediction (low refinement) (Kcal/mol)\ncomplex\t-5.19\n"
        );
    }

    #[test]
    fn result_serializes_with_the_expected_keys() {
        let pdb = load_fixture(TWO_CHAIN_FIXTURE);
        let result = session(Some(-30.5)).predict(&pdb).unwrap();

        let json: serde_json::Value = serde_json::to_value(&result).unwrap();
        assert_eq!(json["structure"], "complex");
        assert_eq!(json["chains"][0][0], "A");
        assert_eq!(json["cutoff"], 10.5);
        assert_eq!(json["contact_counts"]["CC"], 1);
        assert_eq!(json["contact_counts"]["XX"], 0);
        assert!(json["dg"].is_number());
        assert!(json["dg_score"].is_number());
    }
}
