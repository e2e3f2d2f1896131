//! Dense square matrix used for power-sum propagation

use crate::error::MicmacError;

/// Row-major square matrix of real numbers
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    size: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a size × size matrix of zeros
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            data: vec![0.0; size * size],
        }
    }

    /// Create a matrix from rows; the rows must form a square
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MicmacError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(MicmacError::MatrixRow {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Self { size, data })
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.size + col]
    }

    /// Set the value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.size + col] = value;
    }

    /// Diagonal entries, top-left to bottom-right
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.size).map(|i| self.get(i, i)).collect()
    }

    /// Matrix product `self · other`
    ///
    /// # Panics
    /// Panics if the two matrices differ in size
    pub fn multiply(&self, other: &Matrix) -> Matrix {
        assert_eq!(self.size, other.size, "Matrix sizes must match");
        let n = self.size;
        let mut product = Matrix::zeros(n);

        // i-k-j order keeps the inner loop on contiguous rows
        for i in 0..n {
            for k in 0..n {
                let a = self.get(i, k);
                if a == 0.0 {
                    continue;
                }
                let product_row = &mut product.data[i * n..(i + 1) * n];
                let other_row = &other.data[k * n..(k + 1) * n];
                for (p, &b) in product_row.iter_mut().zip(other_row) {
                    *p += a * b;
                }
            }
        }

        product
    }

    /// Sum of each row
    pub fn row_sums(&self) -> Vec<f64> {
        self.data
            .chunks(self.size.max(1))
            .take(self.size)
            .map(|row| row.iter().sum())
            .collect()
    }

    /// Sum of each column
    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.size];
        for row in self.data.chunks(self.size.max(1)).take(self.size) {
            for (sum, &value) in sums.iter_mut().zip(row) {
                *sum += value;
            }
        }
        sums
    }

    /// Sum of every entry
    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::from_rows(&[
            vec![0.0, 1.0, 2.0],
            vec![0.0, 0.0, 3.0],
            vec![1.0, 0.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_row_and_column_sums() {
        let m = sample();
        assert_eq!(m.row_sums(), vec![3.0, 3.0, 1.0]);
        assert_eq!(m.column_sums(), vec![1.0, 1.0, 5.0]);
        assert_eq!(m.total(), 7.0);
    }

    #[test]
    fn test_multiply() {
        let m = sample();
        let squared = m.multiply(&m);
        let expected = Matrix::from_rows(&[
            vec![2.0, 0.0, 3.0],
            vec![3.0, 0.0, 0.0],
            vec![0.0, 1.0, 2.0],
        ])
        .unwrap();
        assert_eq!(squared, expected);
    }

    #[test]
    fn test_identity_multiply() {
        let m = sample();
        let mut identity = Matrix::zeros(3);
        for i in 0..3 {
            identity.set(i, i, 1.0);
        }
        assert_eq!(m.multiply(&identity), m);
        assert_eq!(identity.multiply(&m), m);
    }

    #[test]
    fn test_diagonal() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.diagonal(), vec![1.0, 4.0]);
    }

    #[test]
    fn test_empty_matrix() {
        let m = Matrix::zeros(0);
        assert!(m.row_sums().is_empty());
        assert!(m.column_sums().is_empty());
    }

    #[test]
    fn test_non_square_rows() {
        let result = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert_eq!(
            result,
            Err(MicmacError::MatrixRow {
                row: 1,
                len: 1,
                expected: 2
            })
        );
    }
}
