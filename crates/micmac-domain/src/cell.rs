//! Impact cell module - the closed set of values a matrix cell can hold

use std::fmt;

/// A single cross-impact judgement: how strongly the row variable acts on
/// the column variable.
///
/// Text only enters through [`ImpactCell::from_token`], which is where the
/// lenient "anything unrecognized means no influence" rule lives. Past that
/// boundary every cell is one of these five values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImpactCell {
    /// No influence (0)
    #[default]
    None,

    /// Weak influence (1)
    Weak,

    /// Moderate influence (2)
    Moderate,

    /// Strong influence (3)
    Strong,

    /// Potential influence ("P"), counted as strong in arithmetic
    Potential,
}

impl ImpactCell {
    /// Numeric weight used by propagation
    pub fn weight(&self) -> u8 {
        match self {
            ImpactCell::None => 0,
            ImpactCell::Weak => 1,
            ImpactCell::Moderate => 2,
            ImpactCell::Strong | ImpactCell::Potential => 3,
        }
    }

    /// Whether the cell was entered as a potential influence
    pub fn is_potential(&self) -> bool {
        matches!(self, ImpactCell::Potential)
    }

    /// Canonical token for this cell
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactCell::None => "0",
            ImpactCell::Weak => "1",
            ImpactCell::Moderate => "2",
            ImpactCell::Strong => "3",
            ImpactCell::Potential => "P",
        }
    }

    /// Parse a token strictly (case-insensitive, surrounding whitespace ignored)
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_uppercase().as_str() {
            "0" => Some(ImpactCell::None),
            "1" => Some(ImpactCell::Weak),
            "2" => Some(ImpactCell::Moderate),
            "3" => Some(ImpactCell::Strong),
            "P" => Some(ImpactCell::Potential),
            _ => None,
        }
    }

    /// Parse a token leniently: unrecognized or blank text is no influence
    pub fn from_token(token: &str) -> Self {
        Self::parse(token).unwrap_or_else(|| {
            if !token.trim().is_empty() {
                tracing::warn!("Unrecognized impact token '{}', treating as 0", token);
            }
            ImpactCell::None
        })
    }
}

impl fmt::Display for ImpactCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ImpactCell {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid impact token: {}", s))
    }
}

/// Map a raw token straight to its numeric weight
pub fn to_numeric(token: &str) -> u8 {
    ImpactCell::from_token(token).weight()
}
