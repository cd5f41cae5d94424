//! # Riskmatrix
//!
//! A library to deal with risk matrix data: labeled axes of ordered
//! discrete points, coordinates formed from one point per axis, and
//! user-defined risk categories mapped onto those coordinates.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! riskmatrix = "0.1"
//! ```
//!
//! ```rust
//! use riskmatrix::prelude::*;
//!
//! let mut matrix = RiskMatrix::new("Example risk matrix");
//!
//! // Axis registration order is comparison priority.
//! matrix.add_axis("Probability", 3, true)?;
//! matrix.add_axis("Severity", 3, false)?;
//! matrix.add_category("LOW", "Low risk", "#ffffff", "#00ff00")?;
//!
//! let probability = matrix.axis("Probability").unwrap().points().to_vec();
//! let severity = matrix.axis("Severity").unwrap().points().to_vec();
//! matrix.map_coordinates(
//!     "LOW",
//!     &[
//!         vec![probability[0].clone(), severity[0].clone()],
//!         vec![probability[0].clone(), severity[1].clone()],
//!     ],
//! )?;
//!
//! let a2 = matrix.get_coordinate("A2")?;
//! assert_eq!(matrix.get_category(&a2)?.unwrap().code, "LOW");
//!
//! // Aggregate ordering is lexicographic by axis priority, not by sum.
//! let b1 = matrix.get_coordinate("B1")?;
//! assert!(b1.compare(&a2)?.is_gt());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Comparison semantics
//!
//! Coordinates support two deliberately separate comparisons:
//!
//! - [`Coordinate::location_equals`](structures::matrix::Coordinate::location_equals):
//!   strict positional identity (the same point on every axis).
//! - [`Coordinate::compare`](structures::matrix::Coordinate::compare):
//!   aggregate tri-state ordering, lexicographic over point values in
//!   axis-priority order. Summed weight is never authoritative.
//!
//! Comparing coordinates built against different matrices is refused with
//! an error instead of silently comparing mismatched axes.

// Re-export the core structures crate
pub use riskmatrix_structures as structures;

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::structures::matrix::{
        max_coordinate, min_coordinate, sort_coordinates, Axis, AxisPoint, Category, Coordinate,
        PointDefinition, RiskMatrix,
    };
    pub use crate::structures::{MatrixResult, RiskMatrixError};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_facade_imports() {
        // Just test that re-exports work
        use crate::prelude::*;
        let matrix = RiskMatrix::new("smoke");
        assert_eq!(matrix.name, "smoke");
        assert!(matrix.axes().is_empty());
    }
}
