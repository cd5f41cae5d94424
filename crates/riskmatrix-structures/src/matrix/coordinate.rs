/*!
Coordinate value object and the aggregate comparison rules.

A coordinate assigns one point to every axis of its matrix. Two comparison
semantics exist and are deliberately kept apart:

1. **Location equality** (`location_equals`, also `PartialEq`/`Hash`):
   the identical point on every axis. Pure structural identity.
2. **Aggregate ordering** (`compare`): lexicographic comparison of the
   point values in axis-priority order. The first registered axis is
   compared first; later axes only break ties. Summed weight (`total`) is
   informational and never authoritative: coordinates with equal totals
   but different distributions still order by the highest-priority
   differing axis.

Comparing coordinates from different matrices is refused with
`IncompatibleCoordinates` rather than silently comparing mismatched axes.
*/

use crate::matrix::axis::AxisPoint;
use crate::matrix::descriptors::{AxisRank, MatrixId, PointValue};
use crate::{MatrixResult, RiskMatrixError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;

/// One point chosen from every axis, forming a full position in the risk
/// space.
///
/// Built through `RiskMatrix::coordinate` (or `get_coordinate`), which
/// validates axis count and per-position axis membership before this value
/// object exists; the object itself stays dumb.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    matrix: MatrixId,
    points: Vec<AxisPoint>,
}

impl Coordinate {
    pub(crate) fn new(matrix: MatrixId, points: Vec<AxisPoint>) -> Self {
        Self { matrix, points }
    }

    /// The points of this coordinate, in axis-priority order.
    pub fn points(&self) -> &[AxisPoint] {
        &self.points
    }

    /// Brand of the matrix this coordinate was built against.
    pub fn matrix_id(&self) -> MatrixId {
        self.matrix
    }

    //region Derived views

    /// The compact label: one point label per axis, concatenated in
    /// axis-priority order. E.g. "B2". Deterministic, used as the matrix's
    /// cache key.
    pub fn label(&self) -> String {
        self.points.iter().map(|point| point.label.as_str()).collect()
    }

    /// (axis rank, point value) pairs in axis-priority order.
    pub fn location(&self) -> Vec<(AxisRank, PointValue)> {
        self.points.iter().map(|point| (point.axis, point.value)).collect()
    }

    /// Point values in axis-priority order; the sequence aggregate
    /// comparison operates on.
    pub fn score_vector(&self) -> Vec<PointValue> {
        self.points.iter().map(|point| point.value).collect()
    }

    /// Sum of point values over all axes. Informal weight only; ordering
    /// uses the lexicographic score vector, never this sum.
    pub fn total(&self) -> u32 {
        self.points.iter().map(|point| point.value.get()).sum()
    }

    //endregion

    //region Comparison

    /// True iff both coordinates hold the identical point on every axis.
    ///
    /// Structural identity, independent of axis priority. Implies
    /// `compare` returning `Equal`, but carries the stronger guarantee of
    /// per-axis identity.
    pub fn location_equals(&self, other: &Coordinate) -> bool {
        self.matrix == other.matrix
            && self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(&other.points)
                .all(|(own, theirs)| own.axis == theirs.axis && own.value == theirs.value)
    }

    /// Aggregate tri-state comparison: lexicographic over the score vector
    /// in axis-priority order.
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleCoordinates` when the coordinates were built
    /// against different matrices, or against different axis configurations
    /// of the same matrix.
    pub fn compare(&self, other: &Coordinate) -> MatrixResult<Ordering> {
        if self.matrix != other.matrix {
            return Err(RiskMatrixError::IncompatibleCoordinates(format!(
                "'{}' and '{}' belong to different matrices",
                self.label(),
                other.label()
            )));
        }
        if self.points.len() != other.points.len() {
            return Err(RiskMatrixError::IncompatibleCoordinates(format!(
                "'{}' and '{}' were built against different axis configurations",
                self.label(),
                other.label()
            )));
        }

        Ok(self.score_ordering(other))
    }

    /// Infallible lexicographic comparison; callers must have checked
    /// compatibility.
    fn score_ordering(&self, other: &Coordinate) -> Ordering {
        self.points
            .iter()
            .map(|point| point.value)
            .cmp(other.points.iter().map(|point| point.value))
    }

    //endregion
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Pick the coordinate that compares greatest under aggregate ordering.
///
/// Returns `Ok(None)` for an empty iterator. When several coordinates
/// compare equal, the first of them is kept.
pub fn max_coordinate<'a, I>(coordinates: I) -> MatrixResult<Option<&'a Coordinate>>
where
    I: IntoIterator<Item = &'a Coordinate>,
{
    let mut best: Option<&Coordinate> = None;
    for candidate in coordinates {
        best = match best {
            None => Some(candidate),
            Some(current) => match candidate.compare(current)? {
                Ordering::Greater => Some(candidate),
                _ => Some(current),
            },
        };
    }
    Ok(best)
}

/// Pick the coordinate that compares least under aggregate ordering.
pub fn min_coordinate<'a, I>(coordinates: I) -> MatrixResult<Option<&'a Coordinate>>
where
    I: IntoIterator<Item = &'a Coordinate>,
{
    let mut best: Option<&Coordinate> = None;
    for candidate in coordinates {
        best = match best {
            None => Some(candidate),
            Some(current) => match candidate.compare(current)? {
                Ordering::Less => Some(candidate),
                _ => Some(current),
            },
        };
    }
    Ok(best)
}

/// Sort coordinates ascending under aggregate ordering.
///
/// Compatibility is verified up front so the sort itself cannot fail
/// half-way through.
pub fn sort_coordinates(coordinates: &mut [Coordinate]) -> MatrixResult<()> {
    if let Some((first, rest)) = coordinates.split_first() {
        for other in rest {
            first.compare(other)?;
        }
    }
    coordinates.sort_by(|a, b| a.score_ordering(b));
    Ok(())
}
