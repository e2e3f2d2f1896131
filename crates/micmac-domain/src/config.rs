//! Configuration for the MICMAC engine
//!
//! Defines the propagation depth, the accepted variable count range, and how
//! potential influence is weighted.

use serde::{Deserialize, Serialize};

/// Highest matrix power summed into indirect scores by default
pub const DEFAULT_TRUNCATION_DEPTH: usize = 5;

/// Highest accepted truncation depth; deeper powers of a dense matrix
/// overflow f64
pub const MAX_TRUNCATION_DEPTH: usize = 50;

/// Smallest variable count that gives a meaningful classification
pub const DEFAULT_MIN_VARIABLES: usize = 3;

/// Largest variable count accepted by default
pub const DEFAULT_MAX_VARIABLES: usize = 100;

/// Weight applied to potential-influence cells
pub const DEFAULT_POTENTIAL_WEIGHT: f64 = 1.2;

/// Which cells receive the potential weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightBasis {
    /// Only cells entered as "P"
    #[default]
    PotentialToken,

    /// Every cell whose normalized weight is the maximum (3), whether it was
    /// entered as "3" or "P"
    MaximumStrength,
}

/// Configuration for an analysis run
///
/// # Examples
///
/// ```
/// use micmac_domain::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.truncation_depth, 5);
/// assert!(config.validate().is_ok());
///
/// let deeper = EngineConfig::default().with_truncation_depth(8);
/// assert_eq!(deeper.truncation_depth, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Highest power of the direct matrix included in indirect scores.
    /// Powers 2 through this value are summed.
    pub truncation_depth: usize,

    /// Minimum number of variables
    pub min_variables: usize,

    /// Maximum number of variables
    pub max_variables: usize,

    /// Multiplier for direct influence where the potential weight applies
    pub potential_weight: f64,

    /// Cells that carry the potential weight
    pub weight_basis: WeightBasis,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            truncation_depth: DEFAULT_TRUNCATION_DEPTH,
            min_variables: DEFAULT_MIN_VARIABLES,
            max_variables: DEFAULT_MAX_VARIABLES,
            potential_weight: DEFAULT_POTENTIAL_WEIGHT,
            weight_basis: WeightBasis::PotentialToken,
        }
    }
}

impl EngineConfig {
    /// Override the truncation depth
    pub fn with_truncation_depth(mut self, depth: usize) -> Self {
        self.truncation_depth = depth;
        self
    }

    /// Override the maximum variable count
    pub fn with_max_variables(mut self, max: usize) -> Self {
        self.max_variables = max;
        self
    }

    /// Override the weight basis
    pub fn with_weight_basis(mut self, basis: WeightBasis) -> Self {
        self.weight_basis = basis;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.truncation_depth < 2 {
            return Err("truncation_depth must be at least 2".to_string());
        }
        if self.truncation_depth > MAX_TRUNCATION_DEPTH {
            return Err(format!("truncation_depth cannot exceed {}", MAX_TRUNCATION_DEPTH));
        }
        if self.min_variables == 0 {
            return Err("min_variables must be greater than 0".to_string());
        }
        if self.min_variables > self.max_variables {
            return Err("min_variables cannot exceed max_variables".to_string());
        }
        if !self.potential_weight.is_finite() || self.potential_weight <= 0.0 {
            return Err("potential_weight must be a positive number".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
