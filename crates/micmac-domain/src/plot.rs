//! Plot-ready datasets for the influence/dependence planes

use crate::analysis::MetricsRow;
use crate::classification::{Classification, Thresholds};
use serde::{Deserialize, Serialize};

/// Which plane a dataset describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    /// Direct dependence (x) against direct influence (y)
    Direct,
    /// Indirect dependence (x) against indirect influence (y)
    Indirect,
}

impl Plane {
    /// Plane name
    pub fn as_str(&self) -> &'static str {
        match self {
            Plane::Direct => "direct",
            Plane::Indirect => "indirect",
        }
    }
}

/// One variable on a plane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    /// Variable name
    pub name: String,
    /// Dependence
    pub x: f64,
    /// Influence
    pub y: f64,
    /// Marker size, proportional to potential influence
    pub size: f64,
    /// Marker color group (direct plane only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
}

/// Points for one plane plus its optional quadrant lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotDataset {
    /// Plane described
    pub plane: Plane,
    /// One point per variable, in variable order
    pub points: Vec<PlotPoint>,
    /// Quadrant lines: x = mean dependence, y = mean influence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_lines: Option<Thresholds>,
}

/// Direct plane, colored by classification, split by the classification
/// thresholds
pub fn direct_plane(rows: &[MetricsRow], thresholds: Thresholds) -> PlotDataset {
    PlotDataset {
        plane: Plane::Direct,
        points: rows
            .iter()
            .map(|row| PlotPoint {
                name: row.name.clone(),
                x: f64::from(row.direct_dependence),
                y: f64::from(row.direct_influence),
                size: row.potential_influence,
                classification: Some(row.classification),
            })
            .collect(),
        reference_lines: Some(thresholds),
    }
}

/// Indirect plane, without classification or quadrant lines
pub fn indirect_plane(rows: &[MetricsRow]) -> PlotDataset {
    PlotDataset {
        plane: Plane::Indirect,
        points: rows
            .iter()
            .map(|row| PlotPoint {
                name: row.name.clone(),
                x: row.indirect_dependence,
                y: row.indirect_influence,
                size: row.potential_influence,
                classification: None,
            })
            .collect(),
        reference_lines: None,
    }
}
