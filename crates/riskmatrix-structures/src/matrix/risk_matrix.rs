/*!
The RiskMatrix aggregate root.

Owns the priority-ordered axis list, the category registry and the
coordinate-to-category mapping. Coordinates are cached under their
deterministic label; that table is the authoritative category association
even though callers are free to hold their own Coordinate values.
*/

use crate::matrix::axis::{Axis, AxisPoint, PointDefinition};
use crate::matrix::category::Category;
use crate::matrix::coordinate::Coordinate;
use crate::matrix::descriptors::{AxisRank, AxisSize, MatrixId};
use crate::{MatrixResult, RiskMatrixError};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt::Display;
use tracing::debug;

/// The main struct to build a risk matrix.
///
/// Configuration happens through `add_axis`, `add_category` and
/// `map_coordinates`; queries through `get_coordinate`, `get_category` and
/// the comparison operations on [`Coordinate`]. All state is in-memory and
/// mutation is single-writer by construction (`&mut self`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskMatrix {
    /// Human-readable name
    pub name: String,
    id: MatrixId,
    axes: Vec<Axis>,
    categories: AHashMap<String, Category>,
    /// Coordinate label -> category code
    coordinate_category: AHashMap<String, String>,
    /// Mapped coordinates cached by their deterministic label
    coordinates: AHashMap<String, Coordinate>,
    /// Additional user-defined properties
    #[serde(default)]
    pub properties: HashMap<String, serde_json::Value>,
}

impl RiskMatrix {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: MatrixId::generate(),
            axes: Vec::new(),
            categories: AHashMap::new(),
            coordinate_category: AHashMap::new(),
            coordinates: AHashMap::new(),
            properties: HashMap::new(),
        }
    }

    /// Brand identifying this matrix instance.
    pub fn id(&self) -> MatrixId {
        self.id
    }

    //region Axes

    /// The axes in priority order (registration order).
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Look up an axis by name.
    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.axes.iter().find(|axis| axis.name == name)
    }

    /// Add an axis of `size` generated points to the matrix.
    ///
    /// The new axis is appended to the priority-ordered axis list, so
    /// registration order is comparison priority. Labels are decimal
    /// numbers, or spreadsheet-style letters when `use_letters` is set.
    ///
    /// # Errors
    ///
    /// Fails with a `Configuration` error if `size` is zero, the name is
    /// empty or already taken, or the axis limit (256) is reached.
    pub fn add_axis(&mut self, name: &str, size: u32, use_letters: bool) -> MatrixResult<&Axis> {
        self.check_axis_name(name)?;
        let rank = self.next_rank()?;
        let size = AxisSize::new(size)?;
        let axis = Axis::generate(self.id, rank, name, size, use_letters)?;

        debug!("Added axis '{}' with {} points at rank {}", name, size, rank);
        let position = self.axes.len();
        self.axes.push(axis);
        Ok(&self.axes[position])
    }

    /// Add an axis built from user-supplied point definitions.
    ///
    /// Point values are assigned 1..=n in input order; the definition codes
    /// become the labels used in coordinate strings.
    pub fn add_axis_with_points(
        &mut self,
        name: &str,
        points: &[PointDefinition],
    ) -> MatrixResult<&Axis> {
        self.check_axis_name(name)?;
        let rank = self.next_rank()?;
        let axis = Axis::from_definitions(self.id, rank, name, points)?;

        debug!("Added axis '{}' with {} points at rank {}", name, points.len(), rank);
        let position = self.axes.len();
        self.axes.push(axis);
        Ok(&self.axes[position])
    }

    fn check_axis_name(&self, name: &str) -> MatrixResult<()> {
        if name.trim().is_empty() {
            return Err(RiskMatrixError::Configuration(
                "axis name cannot be empty".into(),
            ));
        }
        if self.axes.iter().any(|axis| axis.name == name) {
            return Err(RiskMatrixError::Configuration(format!(
                "an axis named '{}' already exists",
                name
            )));
        }
        Ok(())
    }

    fn next_rank(&self) -> MatrixResult<AxisRank> {
        u8::try_from(self.axes.len())
            .map(AxisRank::from)
            .map_err(|_| {
                RiskMatrixError::Configuration("a matrix supports at most 256 axes".into())
            })
    }

    //endregion

    //region Categories

    /// All registered categories, in no particular order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// Look up a category by code.
    pub fn category(&self, code: &str) -> Option<&Category> {
        self.categories.get(code)
    }

    /// Register a category.
    ///
    /// # Errors
    ///
    /// Fails with a `Configuration` error if the code is already registered
    /// or any field is empty.
    pub fn add_category(
        &mut self,
        code: &str,
        description: &str,
        foreground_color: &str,
        background_color: &str,
    ) -> MatrixResult<&Category> {
        if self.categories.contains_key(code) {
            return Err(RiskMatrixError::Configuration(format!(
                "a category coded '{}' is already registered",
                code
            )));
        }
        let category = Category::new(code, description, foreground_color, background_color)?;

        debug!("Registered category '{}'", code);
        Ok(self.categories.entry(code.to_string()).or_insert(category))
    }

    //endregion

    //region Coordinates

    /// Build a coordinate from one point per axis, in axis order.
    ///
    /// This is the validating factory every mapping and lookup goes
    /// through: point count must equal the axis count, every point must be
    /// branded with this matrix's id, and point i must be the stored point
    /// of the axis at rank i.
    ///
    /// # Errors
    ///
    /// `Configuration` for count or membership mismatches;
    /// `IncompatibleCoordinates` for points branded by another matrix.
    pub fn coordinate(&self, points: &[AxisPoint]) -> MatrixResult<Coordinate> {
        if self.axes.is_empty() {
            return Err(RiskMatrixError::Configuration(
                "the matrix has no axes; add axes before building coordinates".into(),
            ));
        }
        if points.len() != self.axes.len() {
            return Err(RiskMatrixError::Configuration(format!(
                "expected {} points (one per axis), got {}",
                self.axes.len(),
                points.len()
            )));
        }

        for (axis, point) in self.axes.iter().zip(points) {
            if point.matrix != self.id {
                return Err(RiskMatrixError::IncompatibleCoordinates(format!(
                    "point '{}' belongs to another matrix",
                    point.label
                )));
            }
            if point.axis != axis.rank {
                return Err(RiskMatrixError::Configuration(format!(
                    "point '{}' sits on axis rank {} but was supplied for axis '{}' (rank {})",
                    point.label, point.axis, axis.name, axis.rank
                )));
            }
            match axis.point(point.value.get()) {
                Some(stored) if stored == point => {}
                _ => {
                    return Err(RiskMatrixError::Configuration(format!(
                        "point '{}' does not exist on axis '{}'",
                        point.label, axis.name
                    )));
                }
            }
        }

        Ok(Coordinate::new(self.id, points.to_vec()))
    }

    /// All coordinates that have been mapped to a category.
    pub fn mapped_coordinates(&self) -> impl Iterator<Item = &Coordinate> {
        self.coordinates.values()
    }

    //endregion

    //region Mapping & lookup

    /// Map a single coordinate (given as one point per axis) to a category.
    ///
    /// Re-mapping to the same category is an idempotent no-op; re-mapping
    /// to a different category fails instead of silently drifting.
    ///
    /// # Errors
    ///
    /// `Configuration` if the category is unregistered, the points do not
    /// form a valid coordinate, or the coordinate is already mapped to a
    /// different category; `IncompatibleCoordinates` for foreign points.
    pub fn map_coordinate(
        &mut self,
        category_code: &str,
        points: &[AxisPoint],
    ) -> MatrixResult<Coordinate> {
        if !self.categories.contains_key(category_code) {
            return Err(RiskMatrixError::Configuration(format!(
                "category '{}' is not registered",
                category_code
            )));
        }
        let coordinate = self.coordinate(points)?;
        let label = coordinate.label();

        if let Some(existing) = self.coordinate_category.get(&label) {
            if existing != category_code {
                return Err(RiskMatrixError::Configuration(format!(
                    "coordinate '{}' is already mapped to category '{}'",
                    label, existing
                )));
            }
            return Ok(coordinate);
        }

        debug!("Mapped coordinate '{}' to category '{}'", label, category_code);
        self.coordinate_category
            .insert(label.clone(), category_code.to_string());
        self.coordinates.insert(label, coordinate.clone());
        Ok(coordinate)
    }

    /// Map a batch of coordinates to one category.
    ///
    /// Each tuple holds one point per axis, in the matrix's axis order.
    pub fn map_coordinates(
        &mut self,
        category_code: &str,
        tuples: &[Vec<AxisPoint>],
    ) -> MatrixResult<()> {
        for points in tuples {
            self.map_coordinate(category_code, points)?;
        }
        Ok(())
    }

    /// Resolve a compact label like "B2" back to a coordinate.
    ///
    /// The label encodes one point per axis in priority order. Mapped
    /// coordinates are served from the cache; any other reachable point
    /// combination is resolved against the axis configuration.
    ///
    /// # Errors
    ///
    /// Fails with a `Lookup` error if the matrix has no axes or the label
    /// does not resolve to exactly one point per axis.
    pub fn get_coordinate(&self, label: &str) -> MatrixResult<Coordinate> {
        if self.axes.is_empty() {
            return Err(RiskMatrixError::Lookup(
                "the matrix has no axes to resolve against".into(),
            ));
        }
        if let Some(cached) = self.coordinates.get(label) {
            return Ok(cached.clone());
        }

        let points = self.resolve_label(label).ok_or_else(|| {
            RiskMatrixError::Lookup(format!(
                "label '{}' does not resolve to one point per axis",
                label
            ))
        })?;
        Ok(Coordinate::new(self.id, points))
    }

    /// Get the category a coordinate is mapped to, or `None` if unmapped.
    ///
    /// The association is looked up by exact location (the deterministic
    /// label), never by aggregate score.
    ///
    /// # Errors
    ///
    /// `IncompatibleCoordinates` if the coordinate was not built against
    /// this matrix's current axis configuration.
    pub fn get_category(&self, coordinate: &Coordinate) -> MatrixResult<Option<&Category>> {
        if coordinate.matrix_id() != self.id || coordinate.points().len() != self.axes.len() {
            return Err(RiskMatrixError::IncompatibleCoordinates(format!(
                "coordinate '{}' was not built against this matrix",
                coordinate.label()
            )));
        }
        Ok(self
            .coordinate_category
            .get(&coordinate.label())
            .and_then(|code| self.categories.get(code)))
    }

    /// Match the label against each axis's point labels, longest first,
    /// backtracking so that "A12" prefers point 12 over point 1 when the
    /// remainder would not parse otherwise.
    fn resolve_label(&self, label: &str) -> Option<Vec<AxisPoint>> {
        fn descend(axes: &[Axis], rest: &str, resolved: &mut Vec<AxisPoint>) -> bool {
            let Some((axis, remaining)) = axes.split_first() else {
                return rest.is_empty();
            };
            let mut candidates: Vec<&AxisPoint> = axis.points().iter().collect();
            candidates.sort_by_key(|point| Reverse(point.label.len()));
            for point in candidates {
                if let Some(next) = rest.strip_prefix(point.label.as_str()) {
                    resolved.push(point.clone());
                    if descend(remaining, next, resolved) {
                        return true;
                    }
                    resolved.pop();
                }
            }
            false
        }

        let mut resolved = Vec::with_capacity(self.axes.len());
        descend(&self.axes, label, &mut resolved).then_some(resolved)
    }

    //endregion
}

impl Display for RiskMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
