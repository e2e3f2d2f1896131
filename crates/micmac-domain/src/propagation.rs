//! Cross-impact propagation
//!
//! Direct scores are the row and column sums of the MID. Indirect scores sum
//! the row and column totals of MID² through MID^d, where d is the
//! truncation depth. This is a fixed-depth approximation: there is no check
//! for rank stabilization beyond d.

use crate::impact::ImpactMatrix;
use crate::matrix::Matrix;

/// Direct influence (row sums) and dependence (column sums)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectScores {
    /// Total outgoing impact per variable
    pub influence: Vec<u32>,
    /// Total incoming impact per variable
    pub dependence: Vec<u32>,
}

/// Accumulated influence and dependence from matrix powers 2..=depth
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectScores {
    /// Indirect influence per variable
    pub influence: Vec<f64>,
    /// Indirect dependence per variable
    pub dependence: Vec<f64>,
}

impl IndirectScores {
    /// Whether every score is a finite number
    pub fn is_finite(&self) -> bool {
        self.influence
            .iter()
            .chain(&self.dependence)
            .all(|v| v.is_finite())
    }
}

/// Compute direct scores from the raw matrix
pub fn direct_scores(mid: &ImpactMatrix) -> DirectScores {
    DirectScores {
        influence: mid.row_totals(),
        dependence: mid.column_totals(),
    }
}

/// Compute indirect scores by summing powers 2 through `depth` of `direct`
///
/// A depth below 2 yields all-zero scores.
pub fn indirect_scores(direct: &Matrix, depth: usize) -> IndirectScores {
    let n = direct.size();
    let mut influence = vec![0.0; n];
    let mut dependence = vec![0.0; n];

    let mut power = direct.clone();
    for k in 2..=depth {
        power = power.multiply(direct);

        for (acc, sum) in influence.iter_mut().zip(power.row_sums()) {
            *acc += sum;
        }
        for (acc, sum) in dependence.iter_mut().zip(power.column_sums()) {
            *acc += sum;
        }

        tracing::trace!(power = k, total = power.total(), "Accumulated matrix power");
    }

    IndirectScores {
        influence,
        dependence,
    }
}

/// Potential influence: direct influence scaled by the diagonal of the
/// weight matrix
///
/// Only `weights[i][i]` is read for variable i, so a "P" anywhere else in
/// row i does not change its potential influence.
pub fn potential_influence(direct_influence: &[u32], weights: &Matrix) -> Vec<f64> {
    direct_influence
        .iter()
        .zip(weights.diagonal())
        .map(|(&inf, w)| f64::from(inf) * w)
        .collect()
}
