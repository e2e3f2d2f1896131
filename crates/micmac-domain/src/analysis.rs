//! The MICMAC engine: one analysis request from names and matrix to results

use crate::classification::{classify_all, Classification, Thresholds};
use crate::config::EngineConfig;
use crate::error::MicmacError;
use crate::impact::ImpactMatrix;
use crate::plot::{direct_plane, indirect_plane, Plane, PlotDataset};
use crate::propagation::{direct_scores, indirect_scores, potential_influence};
use crate::ranking::{self, Metric};
use crate::variable::VariableSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Computed metrics for one variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRow {
    /// Variable name
    pub name: String,
    /// Row sum of the MID
    pub direct_influence: u32,
    /// Column sum of the MID
    pub direct_dependence: u32,
    /// Accumulated row sums of MID² .. MID^d
    pub indirect_influence: f64,
    /// Accumulated column sums of MID² .. MID^d
    pub indirect_dependence: f64,
    /// Direct influence scaled by the potential weight
    pub potential_influence: f64,
    /// Quadrant on the direct plane
    pub classification: Classification,
}

/// Result of one analysis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// One row per variable, in variable order
    pub rows: Vec<MetricsRow>,
    /// Means used for classification and the direct-plane quadrant lines
    pub thresholds: Thresholds,
    /// Highest matrix power included in indirect scores
    pub truncation_depth: usize,
}

impl Analysis {
    /// Dataset for the direct plane
    pub fn direct_plane(&self) -> PlotDataset {
        direct_plane(&self.rows, self.thresholds)
    }

    /// Dataset for the indirect plane
    pub fn indirect_plane(&self) -> PlotDataset {
        indirect_plane(&self.rows)
    }

    /// Dataset for either plane
    pub fn plane(&self, plane: Plane) -> PlotDataset {
        match plane {
            Plane::Direct => self.direct_plane(),
            Plane::Indirect => self.indirect_plane(),
        }
    }

    /// Rows ordered by `metric`, highest first
    pub fn ranking(&self, metric: Metric) -> Vec<&MetricsRow> {
        ranking::rank_by(&self.rows, metric)
            .into_iter()
            .map(|i| &self.rows[i])
            .collect()
    }

    /// Direct minus indirect influence rank, per row
    pub fn influence_rank_shift(&self) -> Vec<i64> {
        ranking::influence_rank_shift(&self.rows)
    }

    /// Row for a variable name
    pub fn row(&self, name: &str) -> Option<&MetricsRow> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// Number of variables in each quadrant, in [`Classification::ALL`] order
    pub fn quadrant_counts(&self) -> [(Classification, usize); 4] {
        Classification::ALL.map(|c| {
            let count = self.rows.iter().filter(|r| r.classification == c).count();
            (c, count)
        })
    }
}

/// Stateless MICMAC engine
///
/// # Examples
///
/// ```
/// use micmac_domain::{Classification, MicmacEngine};
///
/// let engine = MicmacEngine::default_config();
/// let names = vec!["A".to_string(), "B".to_string(), "C".to_string()];
/// let matrix = vec![
///     vec!["0", "1", "2"],
///     vec!["0", "0", "3"],
///     vec!["1", "0", "0"],
/// ];
///
/// let analysis = engine.analyze_tokens(names, &matrix).unwrap();
/// assert_eq!(analysis.rows[0].direct_influence, 3);
/// assert_eq!(analysis.rows[2].classification, Classification::Dependent);
/// ```
#[derive(Debug, Clone)]
pub struct MicmacEngine {
    config: EngineConfig,
}

impl MicmacEngine {
    /// Create an engine, validating the configuration
    pub fn new(config: EngineConfig) -> Result<Self, MicmacError> {
        config.validate().map_err(MicmacError::Config)?;
        Ok(Self { config })
    }

    /// Create an engine with default configuration
    pub fn default_config() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run an analysis over raw text tokens
    ///
    /// Names are validated before the matrix is built, so a duplicate name
    /// or an out-of-range count rejects the request without touching the
    /// matrix.
    pub fn analyze_tokens<R, S>(
        &self,
        names: Vec<String>,
        tokens: &[R],
    ) -> Result<Analysis, MicmacError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let variables = VariableSet::new(names, &self.config)?;
        check_row_count(tokens.len(), variables.len())?;
        let matrix = ImpactMatrix::from_tokens(tokens)?;
        self.run(variables, &matrix)
    }

    /// Run an analysis over an already-typed matrix
    pub fn analyze(
        &self,
        names: Vec<String>,
        matrix: &ImpactMatrix,
    ) -> Result<Analysis, MicmacError> {
        let variables = VariableSet::new(names, &self.config)?;
        check_row_count(matrix.size(), variables.len())?;
        self.run(variables, matrix)
    }

    fn run(
        &self,
        variables: VariableSet,
        matrix: &ImpactMatrix,
    ) -> Result<Analysis, MicmacError> {
        let depth = self.config.truncation_depth;
        debug!(variables = variables.len(), depth, "Starting MICMAC analysis");

        let direct = direct_scores(matrix);
        let indirect = indirect_scores(&matrix.weights(), depth);
        debug!("Propagated indirect scores up to power {}", depth);
        if !indirect.is_finite() {
            return Err(MicmacError::Config(format!(
                "indirect scores overflow at truncation_depth {} for {} variables",
                depth,
                variables.len()
            )));
        }

        let weights =
            matrix.potential_weights(self.config.potential_weight, self.config.weight_basis);
        let potential = potential_influence(&direct.influence, &weights);

        let (thresholds, labels) = classify_all(&direct.influence, &direct.dependence);
        debug!(
            mean_influence = thresholds.mean_influence,
            mean_dependence = thresholds.mean_dependence,
            "Computed classification thresholds"
        );

        let rows: Vec<MetricsRow> = variables
            .into_names()
            .into_iter()
            .enumerate()
            .map(|(i, name)| MetricsRow {
                name,
                direct_influence: direct.influence[i],
                direct_dependence: direct.dependence[i],
                indirect_influence: indirect.influence[i],
                indirect_dependence: indirect.dependence[i],
                potential_influence: potential[i],
                classification: labels[i],
            })
            .collect();

        info!(
            variables = rows.len(),
            potential_cells = matrix.potential_mask().count(),
            "MICMAC analysis complete"
        );

        Ok(Analysis {
            rows,
            thresholds,
            truncation_depth: depth,
        })
    }
}

fn check_row_count(rows: usize, expected: usize) -> Result<(), MicmacError> {
    if rows != expected {
        return Err(MicmacError::MatrixRows { rows, expected });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_TRUNCATION_DEPTH;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn reference() -> Analysis {
        MicmacEngine::default_config()
            .analyze_tokens(
                names(&["A", "B", "C"]),
                &[
                    vec!["0", "1", "2"],
                    vec!["0", "0", "3"],
                    vec!["1", "0", "0"],
                ],
            )
            .unwrap()
    }

    #[test]
    fn test_reference_analysis() {
        let analysis = reference();
        let inf: Vec<u32> = analysis.rows.iter().map(|r| r.direct_influence).collect();
        let dep: Vec<u32> = analysis.rows.iter().map(|r| r.direct_dependence).collect();
        assert_eq!(inf, vec![3, 3, 1]);
        assert_eq!(dep, vec![1, 1, 5]);

        let labels: Vec<Classification> =
            analysis.rows.iter().map(|r| r.classification).collect();
        assert_eq!(
            labels,
            vec![
                Classification::Driving,
                Classification::Driving,
                Classification::Dependent
            ]
        );
        assert_eq!(analysis.truncation_depth, 5);
    }

    #[test]
    fn test_no_potential_cells_means_potential_equals_direct() {
        let analysis = reference();
        for row in &analysis.rows {
            assert_eq!(row.potential_influence, f64::from(row.direct_influence));
        }
    }

    #[test]
    fn test_duplicate_names_rejected_before_matrix() {
        // Ragged matrix would also fail, but the name check comes first
        let result = MicmacEngine::default_config()
            .analyze_tokens(names(&["A", "B", "A"]), &[vec!["0"]]);
        assert_eq!(result, Err(MicmacError::DuplicateVariable("A".to_string())));
    }

    #[test]
    fn test_row_count_mismatch() {
        let result = MicmacEngine::default_config().analyze_tokens(
            names(&["A", "B", "C"]),
            &[vec!["0", "0", "0"], vec!["0", "0", "0"]],
        );
        assert_eq!(
            result,
            Err(MicmacError::MatrixRows {
                rows: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = MicmacEngine::new(EngineConfig::default().with_truncation_depth(0));
        assert!(matches!(result, Err(MicmacError::Config(_))));
    }

    #[test]
    fn test_deep_truncation_rejected_before_overflow() {
        let config = EngineConfig::default().with_truncation_depth(400);
        assert!(matches!(MicmacEngine::new(config), Err(MicmacError::Config(_))));
    }

    #[test]
    fn test_maximum_depth_stays_finite() {
        let engine =
            MicmacEngine::new(EngineConfig::default().with_truncation_depth(MAX_TRUNCATION_DEPTH))
                .unwrap();
        let analysis = engine
            .analyze_tokens(
                names(&["A", "B", "C"]),
                &[vec!["3", "3", "0"], vec!["3", "3", "0"], vec!["0", "0", "1"]],
            )
            .unwrap();

        for row in &analysis.rows {
            assert!(row.indirect_influence.is_finite());
            assert!(row.indirect_dependence.is_finite());
        }
        assert_eq!(analysis.rows[2].indirect_influence, 49.0);
    }

    #[test]
    fn test_plane_thresholds_match_classification() {
        let analysis = reference();
        let plane = analysis.direct_plane();
        assert_eq!(plane.reference_lines, Some(analysis.thresholds));
        for (point, row) in plane.points.iter().zip(&analysis.rows) {
            assert_eq!(point.classification, Some(row.classification));
        }
    }

    #[test]
    fn test_ranking_and_counts() {
        let analysis = reference();
        let ranked: Vec<&str> = analysis
            .ranking(Metric::DirectDependence)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(ranked, vec!["C", "A", "B"]);

        let counts = analysis.quadrant_counts();
        assert_eq!(counts[1], (Classification::Driving, 2));
        assert_eq!(counts[2], (Classification::Dependent, 1));
        assert_eq!(analysis.row("B").map(|r| r.direct_influence), Some(3));
    }

    #[test]
    fn test_typed_matrix_entry_point() {
        let matrix = ImpactMatrix::from_tokens(&[
            vec!["0", "P", "0"],
            vec!["0", "0", "1"],
            vec!["2", "0", "0"],
        ])
        .unwrap();
        let analysis = MicmacEngine::default_config()
            .analyze(names(&["X", "Y", "Z"]), &matrix)
            .unwrap();
        assert_eq!(analysis.rows[0].direct_influence, 3);
        // "P" off the diagonal does not change potential influence
        assert_eq!(analysis.rows[0].potential_influence, 3.0);
    }
}
