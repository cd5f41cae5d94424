use crate::matrix::descriptors::{AxisRank, AxisSize, MatrixId, PointValue};
use crate::{MatrixResult, RiskMatrixError};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// User-supplied definition of a single axis point.
///
/// Used by `RiskMatrix::add_axis_with_points` when the generated numeric or
/// letter labels are not enough and the points need domain language
/// ("Unlikely", "Catastrophic", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointDefinition {
    /// Short code used in coordinate labels, e.g. "A" or "1"
    pub code: String,
    /// Human-readable name, e.g. "Unlikely"
    pub name: String,
    /// Longer definition text
    #[serde(default)]
    pub description: String,
}

impl PointDefinition {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// One discrete position on an axis.
///
/// Carries a non-owning reference to its axis (the rank within the owning
/// matrix) plus the matrix brand, so validation never needs to walk object
/// graphs. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisPoint {
    /// Brand of the matrix that created this point
    pub matrix: MatrixId,
    /// Rank of the owning axis within its matrix
    pub axis: AxisRank,
    /// 1-based ordinal value, defines ordering along the axis
    pub value: PointValue,
    /// Display label: decimal digits, letters, or a user-supplied code
    pub label: String,
    /// Optional human-readable name
    #[serde(default)]
    pub name: String,
    /// Optional definition text
    #[serde(default)]
    pub description: String,
}

impl Display for AxisPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// An ordered set of discrete points along one dimension of a risk matrix.
///
/// Points are generated when the axis is registered and are immutable
/// thereafter. The axis's `rank` is its position in the matrix's axis list
/// and doubles as its comparison priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    /// Human label, unique within a matrix. E.g. "Severity" or "Probability"
    pub name: String,
    /// Priority rank within the owning matrix (0 = highest priority)
    pub rank: AxisRank,
    /// Whether generated labels use letters instead of decimal numbers
    pub use_letters: bool,
    points: Vec<AxisPoint>,
}

impl Axis {
    /// Build an axis of `size` generated points valued 1..=size.
    ///
    /// Numeric labels are the decimal string of the value; letter labels
    /// follow spreadsheet column naming ("A".."Z", then "AA", "AB", ...).
    pub(crate) fn generate(
        matrix: MatrixId,
        rank: AxisRank,
        name: &str,
        size: AxisSize,
        use_letters: bool,
    ) -> MatrixResult<Self> {
        let mut points = Vec::with_capacity(size.get() as usize);
        for ordinal in 1..=size.get() {
            let value = PointValue::new(ordinal)?;
            let label = if use_letters {
                value_to_letters(value)
            } else {
                value.to_string()
            };
            points.push(AxisPoint {
                matrix,
                axis: rank,
                value,
                label,
                name: String::new(),
                description: String::new(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            rank,
            use_letters,
            points,
        })
    }

    /// Build an axis from user-supplied point definitions.
    ///
    /// Values are assigned 1..=n in input order; codes become labels.
    pub(crate) fn from_definitions(
        matrix: MatrixId,
        rank: AxisRank,
        name: &str,
        definitions: &[PointDefinition],
    ) -> MatrixResult<Self> {
        if definitions.is_empty() {
            return Err(RiskMatrixError::Configuration(format!(
                "axis '{}' needs at least one point",
                name
            )));
        }

        let mut points: Vec<AxisPoint> = Vec::with_capacity(definitions.len());
        for (offset, definition) in definitions.iter().enumerate() {
            let code = definition.code.trim();
            if code.is_empty() {
                return Err(RiskMatrixError::Configuration(format!(
                    "axis '{}' contains a point with an empty code",
                    name
                )));
            }
            if points.iter().any(|point| point.label == code) {
                return Err(RiskMatrixError::Configuration(format!(
                    "duplicate point code '{}' on axis '{}'",
                    code, name
                )));
            }
            points.push(AxisPoint {
                matrix,
                axis: rank,
                value: PointValue::new(offset as u32 + 1)?,
                label: code.to_string(),
                name: definition.name.clone(),
                description: definition.description.clone(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            rank,
            use_letters: false,
            points,
        })
    }

    /// Get the points of the axis, ordered by value.
    pub fn points(&self) -> &[AxisPoint] {
        &self.points
    }

    /// Number of points on the axis.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Get a point by its 1-based value.
    pub fn point(&self, value: u32) -> Option<&AxisPoint> {
        self.points.get(value.checked_sub(1)? as usize)
    }

    /// Get a point by its display label.
    pub fn point_by_label(&self, label: &str) -> Option<&AxisPoint> {
        self.points.iter().find(|point| point.label == label)
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Convert a 1-based value to a spreadsheet-style column label.
///
/// 1 -> "A", 26 -> "Z", 27 -> "AA", 28 -> "AB", ...
pub(crate) fn value_to_letters(value: PointValue) -> String {
    let mut remaining = value.get();
    let mut reversed = String::new();
    while remaining > 0 {
        remaining -= 1;
        reversed.push(char::from(b'A' + (remaining % 26) as u8));
        remaining /= 26;
    }
    reversed.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_value(value: u32) -> PointValue {
        PointValue::new(value).unwrap()
    }

    #[test]
    fn test_single_letter_labels() {
        assert_eq!(value_to_letters(point_value(1)), "A");
        assert_eq!(value_to_letters(point_value(5)), "E");
        assert_eq!(value_to_letters(point_value(26)), "Z");
    }

    #[test]
    fn test_multi_letter_labels() {
        assert_eq!(value_to_letters(point_value(27)), "AA");
        assert_eq!(value_to_letters(point_value(28)), "AB");
        assert_eq!(value_to_letters(point_value(52)), "AZ");
        assert_eq!(value_to_letters(point_value(53)), "BA");
        assert_eq!(value_to_letters(point_value(702)), "ZZ");
        assert_eq!(value_to_letters(point_value(703)), "AAA");
    }

    #[test]
    fn test_generated_axis_points() {
        let matrix = MatrixId::generate();
        let axis = Axis::generate(
            matrix,
            AxisRank::from(0u8),
            "Probability",
            AxisSize::new(5).unwrap(),
            true,
        )
        .unwrap();

        assert_eq!(axis.size(), 5);
        let labels: Vec<&str> = axis.points().iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["A", "B", "C", "D", "E"]);
        for (offset, point) in axis.points().iter().enumerate() {
            assert_eq!(point.value.get(), offset as u32 + 1);
            assert_eq!(point.axis, axis.rank);
        }
    }

    #[test]
    fn test_point_lookup() {
        let matrix = MatrixId::generate();
        let axis = Axis::generate(
            matrix,
            AxisRank::from(1u8),
            "Severity",
            AxisSize::new(3).unwrap(),
            false,
        )
        .unwrap();

        assert_eq!(axis.point(1).unwrap().label, "1");
        assert_eq!(axis.point(3).unwrap().label, "3");
        assert!(axis.point(0).is_none());
        assert!(axis.point(4).is_none());
        assert_eq!(axis.point_by_label("2").unwrap().value.get(), 2);
        assert!(axis.point_by_label("4").is_none());
    }

    #[test]
    fn test_definition_axis() {
        let matrix = MatrixId::generate();
        let definitions = [
            PointDefinition::new("U", "Unlikely"),
            PointDefinition::new("L", "Likely").with_description("More often than not"),
            PointDefinition::new("C", "Certain"),
        ];
        let axis = Axis::from_definitions(matrix, AxisRank::from(0u8), "Probability", &definitions)
            .unwrap();

        assert_eq!(axis.size(), 3);
        assert_eq!(axis.point(2).unwrap().label, "L");
        assert_eq!(axis.point(2).unwrap().description, "More often than not");
        assert!(!axis.use_letters);
    }

    #[test]
    fn test_definition_axis_rejects_duplicates() {
        let matrix = MatrixId::generate();
        let definitions = [
            PointDefinition::new("A", "First"),
            PointDefinition::new("A", "Second"),
        ];
        let result =
            Axis::from_definitions(matrix, AxisRank::from(0u8), "Probability", &definitions);

        match result {
            Err(RiskMatrixError::Configuration(msg)) => assert!(msg.contains("duplicate")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_definition_axis_rejects_empty() {
        let matrix = MatrixId::generate();
        let result = Axis::from_definitions(matrix, AxisRank::from(0u8), "Probability", &[]);
        assert!(result.is_err());
    }
}
