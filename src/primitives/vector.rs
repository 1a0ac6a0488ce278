//! Vector type for 1D numeric data.

use crate::error::{LinalgError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-length sequence of `f64` values.
///
/// Every `Vector` owns its storage; `clone` is a deep copy.
///
/// # Examples
///
/// ```
/// use ml_linalg::Vector;
///
/// let a = Vector::filled(2, 1.0);
/// let b = Vector::filled(2, 2.0);
/// let c = a.add(&b).expect("same dims");
/// assert_eq!(c, Vector::filled(2, 3.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Creates a vector of `dims` zeros.
    #[must_use]
    pub fn new(dims: usize) -> Self {
        Self::filled(dims, 0.0)
    }

    /// Creates a vector of `dims` elements, each equal to `value`.
    #[must_use]
    pub fn filled(dims: usize, value: f64) -> Self {
        Self {
            data: vec![value; dims],
        }
    }

    /// Creates a vector of zeros.
    #[must_use]
    pub fn zeros(dims: usize) -> Self {
        Self::new(dims)
    }

    /// Creates a vector that takes ownership of `data`.
    #[must_use]
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Creates a vector by copying a slice.
    #[must_use]
    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Number of components.
    #[must_use]
    pub fn dims(&self) -> usize {
        self.data.len()
    }

    /// Same as [`Vector::dims`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns a copy of the underlying data.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Iterates over the components in order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Reads the component at `i`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`] if `i >= dims`.
    pub fn at(&self, i: usize) -> Result<f64> {
        self.data
            .get(i)
            .copied()
            .ok_or_else(|| LinalgError::index_out_of_range(i.to_string(), self.dims().to_string()))
    }

    /// Mutable access to the component at `i`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`] if `i >= dims`.
    pub fn at_mut(&mut self, i: usize) -> Result<&mut f64> {
        let dims = self.dims();
        self.data
            .get_mut(i)
            .ok_or_else(|| LinalgError::index_out_of_range(i.to_string(), dims.to_string()))
    }

    /// Overwrites the component at `i`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`] if `i >= dims`.
    pub fn set(&mut self, i: usize, value: f64) -> Result<()> {
        *self.at_mut(i)? = value;
        Ok(())
    }

    /// Adds another vector element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_dims("add", other)?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Subtracts another vector element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_dims("sub", other)?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Multiplies another vector element-wise (Hadamard product).
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn mul_elementwise(&self, other: &Self) -> Result<Self> {
        self.check_dims("mul_elementwise", other)?;
        Ok(self.zip_with(other, |a, b| a * b))
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

    /// Sum of all components.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Euclidean length, `sqrt(sum(x_i^2))`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Same as [`Vector::length`].
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.length()
    }

    /// Dot product.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn dot(&self, other: &Self) -> Result<f64> {
        self.check_dims("dot", other)?;
        Ok(self.dot_unchecked(other))
    }

    /// Euclidean distance, `length(self - other)`.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn distance(&self, other: &Self) -> Result<f64> {
        self.check_dims("distance", other)?;
        Ok(self.zip_with(other, |a, b| a - b).length())
    }

    pub(crate) fn check_dims(&self, op: &'static str, other: &Self) -> Result<()> {
        if self.dims() != other.dims() {
            return Err(LinalgError::dimension_mismatch(
                op,
                self.dims().to_string(),
                other.dims().to_string(),
            ));
        }
        Ok(())
    }

    // Callers must have checked dims.
    pub(crate) fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    fn dot_unchecked(&self, other: &Self) -> f64 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }
}

/// Dot product of two vectors.
///
/// # Errors
///
/// Returns an error if dimensions don't match.
pub fn dot(a: &Vector, b: &Vector) -> Result<f64> {
    a.dot(b)
}

/// Euclidean distance between two vectors.
///
/// # Errors
///
/// Returns an error if dimensions don't match.
pub fn distance(a: &Vector, b: &Vector) -> Result<f64> {
    a.distance(b)
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Self::from_vec(data)
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(x, f)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_vector_contract.rs"]
mod tests_vector_contract;
