//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use ml_linalg::prelude::*;
//! ```

pub use crate::error::LinalgError;
pub use crate::primitives::{distance, dot, Matrix, Vector};
