//! TSPLIB instance reader.
//!
//! Supports `EDGE_WEIGHT_TYPE: EUC_2D` instances: node coordinates are
//! read from `NODE_COORD_SECTION` and edge costs are Euclidean distances
//! rounded to the nearest integer, as TSPLIB defines them.
//!
//! # Reference
//!
//! Reinelt, G. (1991). "TSPLIB—A Traveling Salesman Problem Library",
//! *ORSA Journal on Computing* 3(4), 376-384.

use super::matrix::CostMatrix;
use crate::error::TsplibError;

/// Parses a TSPLIB `EUC_2D` instance into a cost matrix.
///
/// # Examples
///
/// ```
/// use u_tsp::tsp::tsplib::parse_euc2d;
///
/// let text = "NAME : tiny
/// TYPE : TSP
/// DIMENSION : 3
/// EDGE_WEIGHT_TYPE : EUC_2D
/// NODE_COORD_SECTION
/// 1 0 0
/// 2 3 4
/// 3 6 8
/// EOF
/// ";
/// let matrix = parse_euc2d(text).unwrap();
/// assert_eq!(matrix.cost(0, 1), 5.0);
/// assert_eq!(matrix.cost(0, 2), 10.0);
/// ```
pub fn parse_euc2d(text: &str) -> Result<CostMatrix, TsplibError> {
    let coords = parse_coordinates(text)?;
    let matrix = CostMatrix::from_fn(coords.len(), |i, j| euc_2d(coords[i], coords[j]))?;
    Ok(matrix)
}

/// Reads the node coordinates of a TSPLIB `EUC_2D` instance.
pub fn parse_coordinates(text: &str) -> Result<Vec<(f64, f64)>, TsplibError> {
    let mut dimension = None;
    let mut edge_weight_type = None;
    let mut lines = text.lines().enumerate();

    let mut in_coords = false;
    for (_, line) in lines.by_ref() {
        let line = line.trim();
        if line == "NODE_COORD_SECTION" {
            in_coords = true;
            break;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        match key.trim() {
            "DIMENSION" => dimension = value.trim().parse::<usize>().ok(),
            "EDGE_WEIGHT_TYPE" => edge_weight_type = Some(value.trim().to_string()),
            _ => {}
        }
    }

    let dimension = dimension
        .filter(|&d| d > 0)
        .ok_or(TsplibError::MissingDimension)?;
    match edge_weight_type.as_deref() {
        Some("EUC_2D") => {}
        other => {
            return Err(TsplibError::UnsupportedEdgeWeightType(
                other.unwrap_or_default().to_string(),
            ))
        }
    }
    if !in_coords {
        return Err(TsplibError::MissingCoordSection);
    }

    let mut coords = Vec::with_capacity(dimension);
    for (index, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "EOF" {
            break;
        }
        let invalid = || TsplibError::InvalidCoordinate { line: index + 1 };
        let mut fields = line.split_whitespace();
        let _id = fields.next().ok_or_else(invalid)?;
        let x = parse_number(fields.next()).ok_or_else(invalid)?;
        let y = parse_number(fields.next()).ok_or_else(invalid)?;
        coords.push((x, y));
    }

    if coords.len() != dimension {
        return Err(TsplibError::DimensionMismatch {
            expected: dimension,
            found: coords.len(),
        });
    }
    Ok(coords)
}

fn parse_number(field: Option<&str>) -> Option<f64> {
    field?.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// TSPLIB `EUC_2D` distance: Euclidean, rounded to the nearest integer.
pub fn euc_2d(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (dx, dy) = (a.0 - b.0, a.1 - b.1);
    (dx * dx + dy * dy).sqrt().round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sa::SaConfig;
    use crate::tsp::{is_valid_tour, TspSolver};

    const SQUARE: &str = "NAME: square
COMMENT: four corners listed diagonally
TYPE: TSP
DIMENSION: 4
EDGE_WEIGHT_TYPE: EUC_2D
NODE_COORD_SECTION
1 0.0 0.0
2 10.0 10.0
3 10.0 0.0
4 0.0 10.0
EOF
";

    #[test]
    fn test_parse_square() {
        let m = parse_euc2d(SQUARE).unwrap();
        assert_eq!(m.node_count(), 4);
        assert_eq!(m.cost(0, 2), 10.0);
        assert_eq!(m.cost(0, 1), 14.0);
        assert_eq!(m.cost(1, 0), 14.0);
    }

    #[test]
    fn test_solve_square() {
        let m = parse_euc2d(SQUARE).unwrap();
        let config = SaConfig::default().with_iterations(2_000).with_seed(3);
        let result = TspSolver::solve(&m, true, &config).unwrap();
        assert!(is_valid_tour(&result.tour, 4, true));
        assert_eq!(result.cost, 40.0);
    }

    #[test]
    fn test_tolerates_missing_eof_and_extra_spaces() {
        let text = "DIMENSION : 2\nEDGE_WEIGHT_TYPE : EUC_2D\nNODE_COORD_SECTION\n 1   1.5  2.5\n2 4.5 6.5\n\n";
        let coords = parse_coordinates(text).unwrap();
        assert_eq!(coords, vec![(1.5, 2.5), (4.5, 6.5)]);
    }

    #[test]
    fn test_rejects_other_edge_weight_types() {
        let text = "DIMENSION: 2\nEDGE_WEIGHT_TYPE: GEO\nNODE_COORD_SECTION\n1 0 0\n2 1 1\n";
        assert_eq!(
            parse_euc2d(text),
            Err(TsplibError::UnsupportedEdgeWeightType("GEO".into()))
        );
    }

    #[test]
    fn test_rejects_missing_dimension() {
        let text = "EDGE_WEIGHT_TYPE: EUC_2D\nNODE_COORD_SECTION\n1 0 0\n";
        assert_eq!(parse_euc2d(text), Err(TsplibError::MissingDimension));
    }

    #[test]
    fn test_rejects_missing_section() {
        let text = "DIMENSION: 2\nEDGE_WEIGHT_TYPE: EUC_2D\n";
        assert_eq!(parse_euc2d(text), Err(TsplibError::MissingCoordSection));
    }

    #[test]
    fn test_rejects_bad_coordinate() {
        let text = "DIMENSION: 2\nEDGE_WEIGHT_TYPE: EUC_2D\nNODE_COORD_SECTION\n1 0 0\n2 x 1\n";
        assert_eq!(
            parse_euc2d(text),
            Err(TsplibError::InvalidCoordinate { line: 5 })
        );
    }

    #[test]
    fn test_rejects_dimension_mismatch() {
        let text = "DIMENSION: 3\nEDGE_WEIGHT_TYPE: EUC_2D\nNODE_COORD_SECTION\n1 0 0\n2 1 1\nEOF\n";
        assert_eq!(
            parse_euc2d(text),
            Err(TsplibError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_euc_2d_rounds() {
        assert_eq!(euc_2d((0.0, 0.0), (1.0, 1.0)), 1.0);
        assert_eq!(euc_2d((0.0, 0.0), (1.1, 1.1)), 2.0);
        assert_eq!(euc_2d((2.0, 3.0), (2.0, 3.0)), 0.0);
    }
}
