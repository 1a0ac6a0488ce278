//! Core compute primitives (Vector, Matrix).
//!
//! Both types own their storage and every arithmetic operation returns a
//! newly allocated value.

mod matrix;
mod ops;
mod vector;

pub use matrix::Matrix;
pub use vector::{distance, dot, Vector};
