//! End-to-end tests against the riskmatrix facade.
//!
//! Builds the documented 5x5 Probability/Severity matrix and exercises the
//! whole configure -> map -> query flow through the prelude.

use riskmatrix::prelude::*;

/// 5x5 matrix: Probability (letters, highest priority) by Severity
/// (numeric). Cells are split LOW / MED / HIG by their summed weight, which
/// gives the documented layout (A1 -> LOW, B2 -> MED, C3 -> HIG).
fn example_matrix() -> RiskMatrix {
    let mut matrix = RiskMatrix::new("Example risk matrix");
    matrix.add_axis("Probability", 5, true).unwrap();
    matrix.add_axis("Severity", 5, false).unwrap();

    matrix
        .add_category("LOW", "Low risk", "#ffffff", "#11ff00")
        .unwrap();
    matrix
        .add_category("MED", "Medium risk", "#ffffff", "#ffff00")
        .unwrap();
    matrix
        .add_category("HIG", "High risk", "#ffffff", "#ff0000")
        .unwrap();

    let probability = matrix.axis("Probability").unwrap().points().to_vec();
    let severity = matrix.axis("Severity").unwrap().points().to_vec();

    let mut low = Vec::new();
    let mut med = Vec::new();
    let mut hig = Vec::new();
    for p in &probability {
        for s in &severity {
            let cell = vec![p.clone(), s.clone()];
            match p.value.get() + s.value.get() {
                0..=3 => low.push(cell),
                4..=5 => med.push(cell),
                _ => hig.push(cell),
            }
        }
    }
    matrix.map_coordinates("LOW", &low).unwrap();
    matrix.map_coordinates("MED", &med).unwrap();
    matrix.map_coordinates("HIG", &hig).unwrap();

    matrix
}

#[test]
fn test_full_grid_is_mapped() {
    let matrix = example_matrix();
    assert_eq!(matrix.mapped_coordinates().count(), 25);
    assert_eq!(matrix.categories().count(), 3);
}

#[test]
fn test_labels_resolve_to_distinct_coordinates() {
    let matrix = example_matrix();
    let a1 = matrix.get_coordinate("A1").unwrap();
    let b2 = matrix.get_coordinate("B2").unwrap();
    let c3 = matrix.get_coordinate("C3").unwrap();

    assert!(!a1.location_equals(&b2));
    assert!(!b2.location_equals(&c3));
    assert!(!a1.location_equals(&c3));
}

#[test]
fn test_max_of_documented_coordinates_is_c3() {
    let matrix = example_matrix();
    let coordinates = vec![
        matrix.get_coordinate("A1").unwrap(),
        matrix.get_coordinate("B2").unwrap(),
        matrix.get_coordinate("C3").unwrap(),
    ];

    let max = max_coordinate(&coordinates).unwrap().unwrap();
    assert!(max.location_equals(&matrix.get_coordinate("C3").unwrap()));
}

#[test]
fn test_documented_category_assignments() {
    let matrix = example_matrix();

    let a1 = matrix.get_coordinate("A1").unwrap();
    assert_eq!(matrix.get_category(&a1).unwrap().unwrap().code, "LOW");
    let b2 = matrix.get_coordinate("B2").unwrap();
    assert_eq!(matrix.get_category(&b2).unwrap().unwrap().code, "MED");
    let c3 = matrix.get_coordinate("C3").unwrap();
    assert_eq!(matrix.get_category(&c3).unwrap().unwrap().code, "HIG");
}

#[test]
fn test_sorting_follows_axis_priority() {
    let matrix = example_matrix();
    let mut coordinates = vec![
        matrix.get_coordinate("E1").unwrap(),
        matrix.get_coordinate("A5").unwrap(),
        matrix.get_coordinate("C3").unwrap(),
    ];

    sort_coordinates(&mut coordinates).unwrap();
    let labels: Vec<String> = coordinates.iter().map(|c| c.label()).collect();
    // A5 and E1 have equal totals; priority puts the Probability axis first.
    assert_eq!(labels, ["A5", "C3", "E1"]);
}

#[test]
fn test_matrix_survives_serialization() {
    let original = example_matrix();
    let json = serde_json::to_string(&original).unwrap();
    let restored: RiskMatrix = serde_json::from_str(&json).unwrap();

    let d4 = restored.get_coordinate("D4").unwrap();
    assert_eq!(restored.get_category(&d4).unwrap().unwrap().code, "HIG");

    let max = max_coordinate(restored.mapped_coordinates()).unwrap().unwrap();
    assert_eq!(max.label(), "E5");
}

#[test]
fn test_configuration_errors_surface_through_the_facade() {
    let mut matrix = example_matrix();

    assert!(matches!(
        matrix.add_axis("Probability", 5, true),
        Err(RiskMatrixError::Configuration(_))
    ));
    assert!(matches!(
        matrix.add_axis("Impact", 0, false),
        Err(RiskMatrixError::Configuration(_))
    ));
    assert!(matches!(
        matrix.get_coordinate("F9"),
        Err(RiskMatrixError::Lookup(_))
    ));
}
