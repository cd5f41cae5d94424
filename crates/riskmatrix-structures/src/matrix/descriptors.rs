use crate::RiskMatrixError;
use crate::{define_index, define_nonzero_count};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

//region Axis indexing

define_index!(
    AxisRank,
    u8,
    "Priority rank of an axis within a risk matrix.

The rank is the axis's position in the matrix's ordered axis list and is
assigned at registration time (0 = highest priority). Aggregate coordinate
comparison walks axes in rank order, so the first registered axis is
consulted first and later axes only break ties.

# Range
Values are limited to 0-255 (u8); a matrix supports at most 256 axes."
);

//endregion

//region Point counting

define_nonzero_count!(
    PointValue,
    u32,
    "The 1-based ordinal value of a point on its axis. Cannot be zero."
);

define_nonzero_count!(AxisSize, u32, "The number of points on an axis cannot be zero.");

//endregion

//region Matrix identity

/// Opaque identity of a single `RiskMatrix` instance.
///
/// Every point and coordinate is branded with the id of the matrix that
/// created it, so cross-matrix use is detected by value instead of through
/// owning back-pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatrixId(Uuid);

impl MatrixId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::now_v7())
    }
}

impl std::fmt::Display for MatrixId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//endregion
