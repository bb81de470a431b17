//! The pre-trained linear regression models behind the predictions.
//!
//! Each model is a fixed-weight dot product over the contact histogram, two
//! of them with the electrostatics energy as an extra term. The weights never
//! change at runtime, so they live in compile-time constants.

use crate::classify::ContactHistogram;

/// Weights of the score model, trained with electrostatics.
#[derive(Debug, Clone, Copy)]
struct ScoreWeights {
    elec: f64,
    cc: f64,
    nn: f64,
    oo: f64,
    xx: f64,
    intercept: f64,
}

const SCORE_MODEL: ScoreWeights = ScoreWeights {
    elec: 0.343794,
    cc: -0.037597,
    nn: 0.138738,
    oo: 0.160043,
    xx: -3.088861,
    intercept: 187.011384,
};

/// Weights of the binding affinity model trained without electrostatics.
#[derive(Debug, Clone, Copy)]
struct DgWeights {
    nn: f64,
    xx: f64,
    cn: f64,
    intercept: f64,
}

const DG_MODEL: DgWeights = DgWeights {
    nn: 0.0354707,
    xx: -0.1277895,
    cn: -0.0072166,
    intercept: -5.1923181,
};

/// Weights of the binding affinity model trained with electrostatics.
#[derive(Debug, Clone, Copy)]
struct DgElecWeights {
    elec: f64,
    cc: f64,
    nn: f64,
    xx: f64,
    intercept: f64,
}

const DG_ELEC_MODEL: DgElecWeights = DgElecWeights {
    elec: 0.0115148,
    cc: -0.0014852,
    nn: 0.0057097,
    xx: -0.1301806,
    intercept: -5.1002233,
};

/// The PRODIGY-LIG score from the contact counts and the electrostatics
/// energy.
pub fn calculate_score(counts: &ContactHistogram, electrostatics: f64) -> f64 {
    SCORE_MODEL.elec * electrostatics
        + SCORE_MODEL.cc * f64::from(counts.cc)
        + SCORE_MODEL.nn * f64::from(counts.nn)
        + SCORE_MODEL.oo * f64::from(counts.oo)
        + SCORE_MODEL.xx * f64::from(counts.xx)
        + SCORE_MODEL.intercept
}

/// Binding affinity prediction from the contact counts alone, for structures
/// without a refinement-stage electrostatics energy (low refinement).
pub fn calculate_dg(counts: &ContactHistogram) -> f64 {
    DG_MODEL.nn * f64::from(counts.nn)
        + DG_MODEL.xx * f64::from(counts.xx)
        + DG_MODEL.cn * f64::from(counts.cn)
        + DG_MODEL.intercept
}

/// Binding affinity prediction using the electrostatics energy.
pub fn calculate_dg_electrostatics(counts: &ContactHistogram, electrostatics: f64) -> f64 {
    DG_ELEC_MODEL.elec * electrostatics
        + DG_ELEC_MODEL.cc * f64::from(counts.cc)
        + DG_ELEC_MODEL.nn * f64::from(counts.nn)
        + DG_ELEC_MODEL.xx * f64::from(counts.xx)
        + DG_ELEC_MODEL.intercept
}
