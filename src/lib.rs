//! ml_linalg: dense `Vector` and `Matrix` primitives for machine learning code.
//!
//! Both types store `f64` values in owned, contiguous buffers. Matrices are
//! row-major: element `(r, c)` lives at linear index `r * cols + c`.
//!
//! # Quick Start
//!
//! ```
//! use ml_linalg::prelude::*;
//!
//! let a = Matrix::filled(2, 2, 2.0);
//! let b = Matrix::filled(2, 2, 3.0);
//! let c = a.matmul(&b).expect("inner dimensions agree");
//! assert_eq!(c, Matrix::filled(2, 2, 12.0));
//!
//! let u = Vector::filled(2, 2.0);
//! let v = Vector::filled(2, 3.0);
//! assert_eq!(dot(&u, &v).expect("same dims"), 12.0);
//! ```
//!
//! # Errors
//!
//! Named operations return [`Result`] and reject incompatible shapes with
//! [`LinalgError::DimensionMismatch`] and bad indices with
//! [`LinalgError::IndexOutOfRange`]. The operator forms (`+`, `-`, `*`, `[]`)
//! panic on the same conditions, like slice indexing does.
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`error`]: Error taxonomy

pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{LinalgError, Result};
pub use primitives::{distance, dot, Matrix, Vector};
