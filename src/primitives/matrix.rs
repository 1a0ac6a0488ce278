//! Matrix type for 2D numeric data.

use super::Vector;
use crate::error::{LinalgError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D grid of `f64` values (row-major storage).
///
/// Element `(r, c)` lives at linear index `r * cols + c`.
///
/// # Examples
///
/// ```
/// use ml_linalg::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.at(1, 0).expect("in bounds"), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// Unvalidated wire shape of a [`Matrix`]; converted through `from_vec`.
#[derive(Deserialize)]
struct MatrixRepr {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl TryFrom<MatrixRepr> for Matrix {
    type Error = LinalgError;

    fn try_from(repr: MatrixRepr) -> Result<Self> {
        Self::from_vec(repr.rows, repr.cols, repr.data)
    }
}

/// Number of elements in a `rows x cols` matrix.
fn element_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or_else(|| {
        LinalgError::invalid_argument("shape", format!("{rows} x {cols} overflows usize"))
    })
}

impl Default for Matrix {
    /// The 1x1 zero matrix.
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl Matrix {
    /// Creates a `rows x cols` matrix of zeros.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// Creates a `rows x cols` matrix with every entry equal to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`. Use
    /// [`Matrix::try_filled`] to get an error instead.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        match Self::try_filled(rows, cols, value) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible form of [`Matrix::filled`].
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidArgument`] if `rows * cols` overflows `usize`.
    pub fn try_filled(rows: usize, cols: usize, value: f64) -> Result<Self> {
        let len = element_count(rows, cols)?;
        Ok(Self {
            data: vec![value; len],
            rows,
            cols,
        })
    }

    /// Creates a matrix of zeros.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols)
    }

    /// Creates an `n x n` identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n * n` overflows `usize`. Use [`Matrix::try_identity`] to
    /// get an error instead.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        match Self::try_identity(n) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible form of [`Matrix::identity`].
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidArgument`] if `n * n` overflows `usize`.
    pub fn try_identity(n: usize) -> Result<Self> {
        let mut m = Self::try_filled(n, n, 0.0)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Creates a new matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidArgument`] if data length doesn't match
    /// `rows * cols`, or if that product overflows `usize`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let len = element_count(rows, cols)?;
        if data.len() != len {
            return Err(LinalgError::invalid_argument(
                "data",
                format!("length {} != rows * cols = {len}", data.len()),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Stacks equal-length vectors as the rows of a new matrix.
    ///
    /// An empty slice yields a `0 x 0` matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the vectors differ in length.
    pub fn from_rows(rows: &[Vector]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vector::dims);
        if let Some(row) = rows.iter().find(|row| row.dims() != cols) {
            return Err(LinalgError::dimension_mismatch(
                "from_rows",
                cols.to_string(),
                row.dims().to_string(),
            ));
        }
        // Every row holds `cols` live elements, so the total cannot overflow.
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            data.extend_from_slice(row.as_slice());
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns a copy of the underlying row-major data.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Gets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`] if either index is out of bounds.
    pub fn at(&self, row: usize, col: usize) -> Result<f64> {
        let idx = self.offset(row, col)?;
        Ok(self.data[idx])
    }

    /// Mutable access to the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`] if either index is out of bounds.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut f64> {
        let idx = self.offset(row, col)?;
        Ok(&mut self.data[idx])
    }

    /// Sets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`] if either index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        *self.at_mut(row, col)? = value;
        Ok(())
    }

    /// Returns a copy of row `row_idx` as a Vector.
    ///
    /// # Errors
    ///
    /// Returns an error if `row_idx >= rows`.
    pub fn row(&self, row_idx: usize) -> Result<Vector> {
        if row_idx >= self.rows {
            return Err(LinalgError::index_out_of_range(
                row_idx.to_string(),
                self.rows.to_string(),
            ));
        }
        let start = row_idx * self.cols;
        Ok(Vector::from_slice(&self.data[start..start + self.cols]))
    }

    /// Returns a copy of column `col_idx` as a Vector.
    ///
    /// # Errors
    ///
    /// Returns an error if `col_idx >= cols`.
    pub fn column(&self, col_idx: usize) -> Result<Vector> {
        if col_idx >= self.cols {
            return Err(LinalgError::index_out_of_range(
                col_idx.to_string(),
                self.cols.to_string(),
            ));
        }
        Ok((0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect())
    }

    /// Same as [`Matrix::column`].
    ///
    /// # Errors
    ///
    /// Returns an error if `col_idx >= cols`.
    pub fn col(&self, col_idx: usize) -> Result<Vector> {
        self.column(col_idx)
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.data.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Matrix-matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns an error if `self.cols != other.rows`, or
    /// [`LinalgError::InvalidArgument`] if the result shape overflows `usize`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(LinalgError::dimension_mismatch(
                "matmul",
                format!("{}x{} * {}xN", self.rows, self.cols, self.cols),
                format!("{}x{} * {}x{}", self.rows, self.cols, other.rows, other.cols),
            ));
        }
        let len = element_count(self.rows, other.cols)?;
        Ok(self.matmul_unchecked(other, len))
    }

    /// Matrix-vector multiplication.
    ///
    /// # Errors
    ///
    /// Returns an error if `self.cols != vec.dims()`.
    pub fn matvec(&self, vec: &Vector) -> Result<Vector> {
        if self.cols != vec.dims() {
            return Err(LinalgError::dimension_mismatch(
                "matvec",
                self.cols.to_string(),
                vec.dims().to_string(),
            ));
        }
        Ok(self.matvec_unchecked(vec))
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes don't match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_shape("add", other)?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes don't match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_shape("sub", other)?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        self.map(|x| scalar * x)
    }

    /// Adds a scalar to each element.
    #[must_use]
    pub fn add_scalar(&self, scalar: f64) -> Self {
        self.map(|x| x + scalar)
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(LinalgError::index_out_of_range(
                format!("({row}, {col})"),
                format!("({}, {})", self.rows, self.cols),
            ));
        }
        Ok(row * self.cols + col)
    }

    pub(crate) fn check_shape(&self, op: &'static str, other: &Self) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(LinalgError::dimension_mismatch(
                op,
                format!("{}x{}", self.rows, self.cols),
                format!("{}x{}", other.rows, other.cols),
            ));
        }
        Ok(())
    }

    // Callers must have checked shapes.
    pub(crate) fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn matmul_unchecked(&self, other: &Self, len: usize) -> Self {
        log::trace!(
            "matmul {}x{} * {}x{}",
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );
        let mut result = vec![0.0; len];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                result[i * other.cols + j] = sum;
            }
        }
        Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        }
    }

    fn matvec_unchecked(&self, vec: &Vector) -> Vector {
        let rhs = vec.as_slice();
        (0..self.rows)
            .map(|i| {
                self.data[i * self.cols..(i + 1) * self.cols]
                    .iter()
                    .zip(rhs)
                    .map(|(a, b)| a * b)
                    .sum()
            })
            .collect()
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            write!(f, "| ")?;
            for x in &self.data[row * self.cols..(row + 1) * self.cols] {
                fmt::Display::fmt(x, f)?;
                write!(f, " ")?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
