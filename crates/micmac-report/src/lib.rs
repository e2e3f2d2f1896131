//! MICMAC Report
//!
//! Interchange formats around the MICMAC engine: reading a cross-impact
//! matrix from CSV or JSON, exporting the results table as CSV (and reading
//! it back), and describing the two influence/dependence planes as JSON or
//! SVG.
//!
//! # Example Usage
//!
//! ```
//! use micmac_domain::MicmacEngine;
//! use micmac_report::{render_svg, results_to_csv, MatrixInput};
//!
//! let input = MatrixInput::from_csv_str(",A,B,C\nA,0,1,2\nB,0,0,3\nC,1,0,P\n").unwrap();
//! let analysis = input.analyze(&MicmacEngine::default_config()).unwrap();
//!
//! let csv = results_to_csv(&analysis.rows).unwrap();
//! assert!(csv.starts_with("Variable,Inf. Directa"));
//!
//! let svg = render_svg(&analysis.direct_plane());
//! assert!(svg.contains("<circle"));
//! ```

#![warn(missing_docs)]

mod error;
mod input;
mod plot;
mod svg;
mod table;

pub use error::{ReportError, Result};
pub use input::{InputFormat, MatrixInput};
pub use plot::{PlotDocument, PlotLayout, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use svg::render_svg;
pub use table::{
    read_results, results_to_csv, round1, write_results, write_results_file, ExportedRow, HEADERS,
};
