//! The core crate for riskmatrix. Defines the axes, points, categories and
//! coordinate comparison rules used throughout.

pub mod common_macros;
mod error;
pub mod matrix;

pub use error::{MatrixResult, RiskMatrixError};
