//! Raw impact matrix and its normalization
//!
//! The raw matrix keeps every cell as an [`ImpactCell`] so that the
//! "P" tokens survive normalization. Arithmetic runs on the numeric
//! [`Matrix`] derived from it; the [`PotentialMask`] records where the "P"
//! tokens were.

use crate::cell::ImpactCell;
use crate::config::WeightBasis;
use crate::error::MicmacError;
use crate::matrix::Matrix;

/// Matrix of Direct Impacts (MID) as entered: row = influencer,
/// column = influenced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactMatrix {
    size: usize,
    cells: Vec<ImpactCell>,
}

impl ImpactMatrix {
    /// Create a matrix with every cell set to no influence
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![ImpactCell::None; size * size],
        }
    }

    /// Build from rows of cells; the rows must form a square
    pub fn from_rows(rows: Vec<Vec<ImpactCell>>) -> Result<Self, MicmacError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(MicmacError::MatrixRow {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            cells.extend(values);
        }
        Ok(Self { size, cells })
    }

    /// Build from rows of raw text tokens, mapping unrecognized text to no
    /// influence
    pub fn from_tokens<R, S>(rows: &[R]) -> Result<Self, MicmacError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let cells = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|token| ImpactCell::from_token(token.as_ref()))
                    .collect()
            })
            .collect();
        Self::from_rows(cells)
    }

    /// Number of variables (rows and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> ImpactCell {
        self.cells[row * self.size + col]
    }

    /// Replace the cell at (row, col)
    pub fn set(&mut self, row: usize, col: usize, cell: ImpactCell) {
        self.cells[row * self.size + col] = cell;
    }

    /// Cells of one row
    pub fn row(&self, row: usize) -> &[ImpactCell] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Numeric weights of every cell, as real numbers for propagation
    pub fn weights(&self) -> Matrix {
        let mut matrix = Matrix::zeros(self.size);
        for i in 0..self.size {
            for j in 0..self.size {
                matrix.set(i, j, f64::from(self.get(i, j).weight()));
            }
        }
        matrix
    }

    /// Cells entered as "P"
    pub fn potential_mask(&self) -> PotentialMask {
        PotentialMask {
            size: self.size,
            cells: self.cells.iter().map(ImpactCell::is_potential).collect(),
        }
    }

    /// Helper matrix W: `weight` where the basis applies, 1.0 elsewhere
    pub fn potential_weights(&self, weight: f64, basis: WeightBasis) -> Matrix {
        let mut matrix = Matrix::zeros(self.size);
        for i in 0..self.size {
            for j in 0..self.size {
                let cell = self.get(i, j);
                let weighted = match basis {
                    WeightBasis::PotentialToken => cell.is_potential(),
                    WeightBasis::MaximumStrength => cell.weight() == ImpactCell::Strong.weight(),
                };
                matrix.set(i, j, if weighted { weight } else { 1.0 });
            }
        }
        matrix
    }

    /// Row sums of the numeric weights (direct influence)
    pub fn row_totals(&self) -> Vec<u32> {
        (0..self.size)
            .map(|i| self.row(i).iter().map(|c| u32::from(c.weight())).sum())
            .collect()
    }

    /// Column sums of the numeric weights (direct dependence)
    pub fn column_totals(&self) -> Vec<u32> {
        let mut totals = vec![0u32; self.size];
        for i in 0..self.size {
            for (total, cell) in totals.iter_mut().zip(self.row(i)) {
                *total += u32::from(cell.weight());
            }
        }
        totals
    }
}

/// Boolean matrix marking the cells entered as "P"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotentialMask {
    size: usize,
    cells: Vec<bool>,
}

impl PotentialMask {
    /// Whether (row, col) was a potential cell
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.size + col]
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of potential cells
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> Vec<Vec<&'static str>> {
        vec![
            vec!["0", "1", "p"],
            vec!["x", "P", "3"],
            vec!["", "2", " 1 "],
        ]
    }

    #[test]
    fn test_from_tokens_normalizes() {
        let mid = ImpactMatrix::from_tokens(&tokens()).unwrap();
        assert_eq!(mid.size(), 3);
        assert_eq!(mid.get(0, 2), ImpactCell::Potential);
        assert_eq!(mid.get(1, 0), ImpactCell::None);
        assert_eq!(mid.get(2, 0), ImpactCell::None);
        assert_eq!(mid.get(2, 2), ImpactCell::Weak);

        let weights = mid.weights();
        assert_eq!(weights.row_sums(), vec![4.0, 6.0, 3.0]);
    }

    #[test]
    fn test_potential_mask() {
        let mid = ImpactMatrix::from_tokens(&tokens()).unwrap();
        let mask = mid.potential_mask();
        assert!(mask.get(0, 2));
        assert!(mask.get(1, 1));
        assert!(!mask.get(1, 2));
        assert_eq!(mask.count(), 2);
    }

    #[test]
    fn test_potential_weights_token_basis() {
        let mid = ImpactMatrix::from_tokens(&tokens()).unwrap();
        let w = mid.potential_weights(1.2, WeightBasis::PotentialToken);
        assert_eq!(w.get(0, 2), 1.2);
        assert_eq!(w.get(1, 1), 1.2);
        assert_eq!(w.get(1, 2), 1.0);
        assert_eq!(w.get(0, 0), 1.0);
    }

    #[test]
    fn test_potential_weights_strength_basis() {
        let mid = ImpactMatrix::from_tokens(&tokens()).unwrap();
        let w = mid.potential_weights(1.2, WeightBasis::MaximumStrength);
        assert_eq!(w.get(1, 2), 1.2);
        assert_eq!(w.get(0, 2), 1.2);
        assert_eq!(w.get(2, 1), 1.0);
    }

    #[test]
    fn test_totals() {
        let mid = ImpactMatrix::from_tokens(&[
            vec!["0", "1", "2"],
            vec!["0", "0", "3"],
            vec!["1", "0", "0"],
        ])
        .unwrap();
        assert_eq!(mid.row_totals(), vec![3, 3, 1]);
        assert_eq!(mid.column_totals(), vec![1, 1, 5]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = ImpactMatrix::from_tokens(&[vec!["0", "1"], vec!["0"]]);
        assert_eq!(
            result,
            Err(MicmacError::MatrixRow {
                row: 1,
                len: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn test_set_and_row() {
        let mut mid = ImpactMatrix::empty(3);
        mid.set(1, 2, ImpactCell::Strong);
        assert_eq!(mid.row(1), &[ImpactCell::None, ImpactCell::None, ImpactCell::Strong]);
    }
}
