//! Square matrices and the naive O(n³) product.

use std::ops::{Index, IndexMut};

use crate::error::{BenchError, Result};

/// Dense square matrix stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates an `n`×`n` matrix filled with zeros.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// Creates the `n`×`n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Creates a matrix by evaluating `f(row, col)` in row-major order.
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Self { n, data }
    }

    /// Builds a matrix from row vectors.
    ///
    /// Returns an error if the rows do not form a square.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if let Some(bad) = rows.iter().position(|r| r.len() != n) {
            return Err(BenchError::Invalid(format!(
                "row {} has {} columns, expected {}",
                bad,
                rows[bad].len(),
                n
            )));
        }
        Ok(Self {
            n,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Returns the dimension `n`.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Computes `self × other` with the textbook triple loop.
    ///
    /// No blocking, transposition or SIMD: this is the cubic baseline being
    /// measured. The result is zero-initialized before accumulation.
    ///
    /// # Example
    ///
    /// ```
    /// use running_times_core::Matrix;
    ///
    /// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// let c = Matrix::identity(2).multiply(&a).unwrap();
    /// assert_eq!(c, a);
    /// ```
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.n != other.n {
            return Err(BenchError::Invalid(format!(
                "cannot multiply {0}x{0} by {1}x{1}",
                self.n, other.n
            )));
        }

        let n = self.n;
        let mut c = Matrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    c.data[i * n + j] += self.data[i * n + k] * other.data[k * n + j];
                }
            }
        }
        Ok(c)
    }

    /// Returns true if every element differs by at most `tolerance`.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.n == other.n
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.n + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i * self.n + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{random_matrix, SeededSource};

    #[test]
    fn test_identity_left_multiply() {
        let m = Matrix::from_rows(vec![vec![0.25, -3.5], vec![7.0, 0.125]]).unwrap();
        let product = Matrix::identity(2).multiply(&m).unwrap();
        assert!(product.approx_eq(&m, 1e-12));
    }

    #[test]
    fn test_identity_right_multiply_random() {
        let m = random_matrix(5, &mut SeededSource::new(9));
        let product = m.multiply(&Matrix::identity(5)).unwrap();
        assert!(product.approx_eq(&m, 1e-12));
    }

    #[test]
    fn test_known_product() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let expected = Matrix::from_rows(vec![vec![19.0, 22.0], vec![43.0, 50.0]]).unwrap();

        assert!(a.multiply(&b).unwrap().approx_eq(&expected, 1e-12));
    }

    #[test]
    fn test_associativity_small() {
        let mut source = SeededSource::new(11);
        let a = random_matrix(3, &mut source);
        let b = random_matrix(3, &mut source);
        let c = random_matrix(3, &mut source);

        let left = a.multiply(&b).unwrap().multiply(&c).unwrap();
        let right = a.multiply(&b.multiply(&c).unwrap()).unwrap();
        assert!(left.approx_eq(&right, 1e-9));
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = Matrix::zeros(2).multiply(&Matrix::zeros(3)).unwrap_err();
        assert!(matches!(err, BenchError::Invalid(_)));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    }

    #[test]
    fn test_index() {
        let mut m = Matrix::zeros(3);
        m[(1, 2)] = 4.0;
        assert_eq!(m[(1, 2)], 4.0);
        assert_eq!(m.as_slice()[5], 4.0);
    }

    #[test]
    fn test_empty_product() {
        let c = Matrix::zeros(0).multiply(&Matrix::zeros(0)).unwrap();
        assert_eq!(c.size(), 0);
    }
}
