//! MICMAC Domain Layer
//!
//! Structural analysis of a system of variables from a cross-impact matrix.
//! Given N uniquely named variables and an N×N matrix of direct impacts
//! (0 to 3, or "P" for potential), the engine computes direct, indirect and
//! potential influence/dependence for every variable and places each one in
//! a quadrant of the influence/dependence plane.
//!
//! ## Key Concepts
//!
//! - **MID**: the Matrix of Direct Impacts, row = influencer, column = influenced
//! - **Direct scores**: row and column sums of the MID
//! - **Indirect scores**: row and column sums of MID² through MID^d (d = 5 by default)
//! - **Potential influence**: direct influence weighted by "P" cells
//! - **Quadrants**: Key/Challenge, Driving, Dependent, Autonomous
//!
//! ## Architecture
//!
//! The engine is a pure function of (names, matrix, config). It holds no
//! state between requests and performs no I/O; input parsing and export
//! live in other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod cell;
pub mod classification;
pub mod config;
pub mod error;
pub mod impact;
pub mod matrix;
pub mod plot;
pub mod propagation;
pub mod ranking;
pub mod variable;

// Re-exports for convenience
pub use analysis::{Analysis, MetricsRow, MicmacEngine};
pub use cell::{to_numeric, ImpactCell};
pub use classification::{Classification, Thresholds};
pub use config::{EngineConfig, WeightBasis, MAX_TRUNCATION_DEPTH};
pub use error::MicmacError;
pub use impact::{ImpactMatrix, PotentialMask};
pub use matrix::Matrix;
pub use plot::{Plane, PlotDataset, PlotPoint};
pub use ranking::Metric;
pub use variable::VariableSet;
