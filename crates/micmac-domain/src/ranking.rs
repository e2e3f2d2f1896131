//! Variable rankings by any computed metric

use crate::analysis::MetricsRow;
use serde::{Deserialize, Serialize};

/// A per-variable score that can be ranked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Row sum of the MID
    DirectInfluence,
    /// Column sum of the MID
    DirectDependence,
    /// Accumulated row sums of the matrix powers
    IndirectInfluence,
    /// Accumulated column sums of the matrix powers
    IndirectDependence,
    /// Direct influence scaled by the potential weight
    PotentialInfluence,
}

impl Metric {
    /// Metric name
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::DirectInfluence => "direct-influence",
            Metric::DirectDependence => "direct-dependence",
            Metric::IndirectInfluence => "indirect-influence",
            Metric::IndirectDependence => "indirect-dependence",
            Metric::PotentialInfluence => "potential-influence",
        }
    }

    /// Read this metric from a row
    pub fn value(&self, row: &MetricsRow) -> f64 {
        match self {
            Metric::DirectInfluence => f64::from(row.direct_influence),
            Metric::DirectDependence => f64::from(row.direct_dependence),
            Metric::IndirectInfluence => row.indirect_influence,
            Metric::IndirectDependence => row.indirect_dependence,
            Metric::PotentialInfluence => row.potential_influence,
        }
    }
}

/// Row indices ordered by `metric`, highest first
///
/// Ties keep the original variable order.
pub fn rank_by(rows: &[MetricsRow], metric: Metric) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&a, &b| metric.value(&rows[b]).total_cmp(&metric.value(&rows[a])));
    order
}

/// One-based rank of every row (inverse of [`rank_by`])
pub fn positions(rows: &[MetricsRow], metric: Metric) -> Vec<usize> {
    let mut positions = vec![0; rows.len()];
    for (rank, index) in rank_by(rows, metric).into_iter().enumerate() {
        positions[index] = rank + 1;
    }
    positions
}

/// Direct influence rank minus indirect influence rank, per row
///
/// Positive values mean the variable climbs once indirect effects count.
pub fn influence_rank_shift(rows: &[MetricsRow]) -> Vec<i64> {
    let direct = positions(rows, Metric::DirectInfluence);
    let indirect = positions(rows, Metric::IndirectInfluence);
    direct
        .into_iter()
        .zip(indirect)
        .map(|(d, i)| d as i64 - i as i64)
        .collect()
}
