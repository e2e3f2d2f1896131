//! Quadrant classification on the direct influence/dependence plane

use serde::{Deserialize, Serialize};
use std::fmt;

/// Quadrant a variable falls into relative to the mean direct scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Above-mean influence and dependence
    #[serde(rename = "Key/Challenge")]
    KeyChallenge,

    /// Above-mean influence only
    #[serde(rename = "Driving")]
    Driving,

    /// Above-mean dependence only
    #[serde(rename = "Dependent")]
    Dependent,

    /// Neither above the mean
    #[serde(rename = "Autonomous")]
    Autonomous,
}

impl Classification {
    /// All labels, in quadrant order
    pub const ALL: [Classification; 4] = [
        Classification::KeyChallenge,
        Classification::Driving,
        Classification::Dependent,
        Classification::Autonomous,
    ];

    /// Display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::KeyChallenge => "Key/Challenge",
            Classification::Driving => "Driving",
            Classification::Dependent => "Dependent",
            Classification::Autonomous => "Autonomous",
        }
    }

    /// Label used in the tabular export
    pub fn export_label(&self) -> &'static str {
        match self {
            Classification::KeyChallenge => "Clave / Reto",
            Classification::Driving => "Motriz",
            Classification::Dependent => "Dependiente",
            Classification::Autonomous => "Autónoma",
        }
    }

    /// Parse either the display or the export label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| {
            c.as_str().to_lowercase() == needle || c.export_label().to_lowercase() == needle
        })
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid classification: {}", s))
    }
}

/// Mean direct influence and dependence; the quadrant boundaries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Mean direct influence (horizontal line on the direct plane)
    pub mean_influence: f64,
    /// Mean direct dependence (vertical line on the direct plane)
    pub mean_dependence: f64,
}

impl Thresholds {
    /// Compute the means once for the whole analysis
    pub fn from_direct(influence: &[u32], dependence: &[u32]) -> Self {
        Self {
            mean_influence: mean(influence),
            mean_dependence: mean(dependence),
        }
    }

    /// Classify one variable; comparisons are strict
    pub fn classify(&self, influence: f64, dependence: f64) -> Classification {
        let influential = influence > self.mean_influence;
        let dependent = dependence > self.mean_dependence;

        match (influential, dependent) {
            (true, true) => Classification::KeyChallenge,
            (true, false) => Classification::Driving,
            (false, true) => Classification::Dependent,
            (false, false) => Classification::Autonomous,
        }
    }
}

fn mean(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64
}

/// Classify every variable against the same thresholds
pub fn classify_all(influence: &[u32], dependence: &[u32]) -> (Thresholds, Vec<Classification>) {
    let thresholds = Thresholds::from_direct(influence, dependence);
    let labels = influence
        .iter()
        .zip(dependence)
        .map(|(&inf, &dep)| thresholds.classify(f64::from(inf), f64::from(dep)))
        .collect();
    (thresholds, labels)
}
