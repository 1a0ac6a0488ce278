//! Operator overloads for [`Vector`] and [`Matrix`].
//!
//! These are the panicking shorthand for the checked named methods
//! (`add`, `sub`, `matmul`, ...). Operators are implemented on references
//! so that `a.add(&b)` keeps resolving to the inherent `Result`-returning
//! method.

use super::{Matrix, Vector};
use crate::error::LinalgError;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

macro_rules! elementwise_op {
    ($ty:ty, $trait:ident, $method:ident, $check:ident, $name:literal, $op:tt) => {
        impl $trait<&$ty> for &$ty {
            type Output = $ty;

            /// # Panics
            ///
            /// Panics if the operand shapes differ.
            fn $method(self, rhs: &$ty) -> $ty {
                if let Err(e) = self.$check($name, rhs) {
                    panic!("{e}");
                }
                self.zip_with(rhs, |a, b| a $op b)
            }
        }
    };
}

macro_rules! scalar_ops {
    ($ty:ty) => {
        impl Mul<f64> for &$ty {
            type Output = $ty;

            fn mul(self, rhs: f64) -> $ty {
                self.mul_scalar(rhs)
            }
        }

        impl Mul<&$ty> for f64 {
            type Output = $ty;

            fn mul(self, rhs: &$ty) -> $ty {
                rhs.mul_scalar(self)
            }
        }

        impl Add<f64> for &$ty {
            type Output = $ty;

            fn add(self, rhs: f64) -> $ty {
                self.add_scalar(rhs)
            }
        }

        impl Add<&$ty> for f64 {
            type Output = $ty;

            fn add(self, rhs: &$ty) -> $ty {
                rhs.add_scalar(self)
            }
        }
    };
}

elementwise_op!(Vector, Add, add, check_dims, "add", +);
elementwise_op!(Vector, Sub, sub, check_dims, "sub", -);
elementwise_op!(Vector, Mul, mul, check_dims, "mul_elementwise", *);
elementwise_op!(Matrix, Add, add, check_shape, "add", +);
elementwise_op!(Matrix, Sub, sub, check_shape, "sub", -);

scalar_ops!(Vector);
scalar_ops!(Matrix);

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    /// Matrix product.
    ///
    /// # Panics
    ///
    /// Panics if `self.cols() != rhs.rows()`.
    fn mul(self, rhs: &Matrix) -> Matrix {
        match self.matmul(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Mul<&Vector> for &Matrix {
    type Output = Vector;

    /// Matrix-vector product.
    ///
    /// # Panics
    ///
    /// Panics if `self.cols() != rhs.dims()`.
    fn mul(self, rhs: &Vector) -> Vector {
        match self.matvec(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if `idx >= dims`.
    fn index(&self, idx: usize) -> &f64 {
        self.as_slice().get(idx).unwrap_or_else(|| {
            panic!(
                "{}",
                LinalgError::index_out_of_range(idx.to_string(), self.dims().to_string())
            )
        })
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, idx: usize) -> &mut f64 {
        match self.at_mut(idx) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if `row >= rows` or `col >= cols`.
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows() && col < self.cols(),
            "index ({row}, {col}) out of range (len=({}, {}))",
            self.rows(),
            self.cols()
        );
        &self.as_slice()[row * self.cols() + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        match self.at_mut(row, col) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

#[cfg(test)]
#[path = "ops_tests.rs"]
mod tests;
