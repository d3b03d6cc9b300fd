//! Coordinate generation
//!
//! Plants are placed inside a fixed margin on every side of the bed. `x`
//! runs across the width, `y` along the length, both in feet from the
//! corner. Generation stops at `min(quantity, capacity)` positions.

use crate::error::PlannerError;
use crate::types::{AreaSpec, PlantPosition, PlantingMethod};

use super::capacity::calculate_capacity;
use super::{spacing_in_feet, whole, HEX_ROW_FACTOR};

/// Clearance kept free along every edge, in feet
pub const LAYOUT_MARGIN: f64 = 0.5;

/// Upper bound on the up-front allocation for a layout
const PREALLOCATE_LIMIT: usize = 4096;

/// Positions for `quantity` plants (or as many as fit when `None`)
pub fn calculate_positions(
    spacing_inches: f64,
    area: AreaSpec,
    method: PlantingMethod,
    quantity: Option<usize>,
) -> Result<Vec<PlantPosition>, PlannerError> {
    let capacity = calculate_capacity(spacing_inches, area, method)?;
    let spacing = spacing_in_feet(spacing_inches)?;
    let target = quantity.map_or(capacity, |q| q.min(capacity));

    let positions = match method {
        PlantingMethod::Row => row_layout(spacing, area, target),
        PlantingMethod::Square => square_foot_layout(spacing, area, target),
        PlantingMethod::Triangular => triangular_layout(spacing, area, target),
    };

    Ok(positions)
}

/// Grid with one cell per plant, each plant centred in its cell
fn row_layout(spacing: f64, area: AreaSpec, target: usize) -> Vec<PlantPosition> {
    let usable_width = area.width - 2.0 * LAYOUT_MARGIN;
    let usable_length = area.length - 2.0 * LAYOUT_MARGIN;

    let rows = whole(usable_width / spacing);
    let plants_per_row = whole(usable_length / spacing);

    let mut positions = Vec::with_capacity(target.min(rows.saturating_mul(plants_per_row)).min(PREALLOCATE_LIMIT));
    for row in 0..rows {
        for col in 0..plants_per_row {
            if positions.len() >= target {
                return positions;
            }
            positions.push(PlantPosition {
                x: LAYOUT_MARGIN + row as f64 * spacing + spacing / 2.0,
                y: LAYOUT_MARGIN + col as f64 * spacing + spacing / 2.0,
            });
        }
    }
    positions
}

/// Whole square feet, each split into an n x n sub-grid where n is the
/// number of plants that fit along one foot. Plants spaced wider than a
/// foot get no positions.
fn square_foot_layout(spacing: f64, area: AreaSpec, target: usize) -> Vec<PlantPosition> {
    let plants_per_side = whole((1.0 / (spacing * spacing)).sqrt());
    if plants_per_side == 0 {
        return Vec::new();
    }

    let usable_width = area.width - 2.0 * LAYOUT_MARGIN;
    let usable_length = area.length - 2.0 * LAYOUT_MARGIN;
    let foot_cols = whole(usable_width);
    let foot_rows = whole(usable_length);

    let cell = 1.0 / plants_per_side as f64;

    let mut positions = Vec::with_capacity(target.min(PREALLOCATE_LIMIT));
    for foot_row in 0..foot_rows {
        for foot_col in 0..foot_cols {
            for row in 0..plants_per_side {
                for col in 0..plants_per_side {
                    if positions.len() >= target {
                        return positions;
                    }
                    positions.push(PlantPosition {
                        x: LAYOUT_MARGIN + foot_col as f64 + col as f64 * cell + cell / 2.0,
                        y: LAYOUT_MARGIN + foot_row as f64 + row as f64 * cell + cell / 2.0,
                    });
                }
            }
        }
    }
    positions
}

/// Staggered rows `spacing * 0.866` apart, every other row shifted half a
/// spacing along the length. Rows and columns are walked until the next
/// plant would cross the far margin.
fn triangular_layout(spacing: f64, area: AreaSpec, target: usize) -> Vec<PlantPosition> {
    let row_spacing = spacing * HEX_ROW_FACTOR;
    let far_x = area.width - LAYOUT_MARGIN;
    let far_y = area.length - LAYOUT_MARGIN;

    let mut positions = Vec::with_capacity(target.min(PREALLOCATE_LIMIT));
    let mut row = 0usize;

    while LAYOUT_MARGIN + row as f64 * row_spacing + spacing / 2.0 < far_x {
        let offset = if row % 2 == 0 { 0.0 } else { spacing / 2.0 };
        let mut col = 0usize;

        while LAYOUT_MARGIN + offset + col as f64 * spacing + spacing / 2.0 < far_y {
            if positions.len() >= target {
                return positions;
            }
            positions.push(PlantPosition {
                x: LAYOUT_MARGIN + row as f64 * row_spacing + row_spacing / 2.0,
                y: LAYOUT_MARGIN + offset + col as f64 * spacing + spacing / 2.0,
            });
            col += 1;
        }

        row += 1;
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn in_bounds(positions: &[PlantPosition], area: AreaSpec) -> bool {
        positions.iter().all(|p| {
            p.x >= LAYOUT_MARGIN
                && p.x <= area.width - LAYOUT_MARGIN
                && p.y >= LAYOUT_MARGIN
                && p.y <= area.length - LAYOUT_MARGIN
        })
    }

    #[test]
    fn test_row_positions() {
        // 2ft spacing in a 5 x 5 bed: usable 4 x 4 -> 2 x 2 grid
        let area = AreaSpec::new(5.0, 5.0);
        let positions = calculate_positions(24.0, area, PlantingMethod::Row, None).unwrap();
        assert_eq!(positions.len(), 4);
        assert_relative_eq!(positions[0].x, 1.5, epsilon = 1e-9);
        assert_relative_eq!(positions[0].y, 1.5, epsilon = 1e-9);
        assert_relative_eq!(positions[1].x, 1.5, epsilon = 1e-9);
        assert_relative_eq!(positions[1].y, 3.5, epsilon = 1e-9);
        assert_relative_eq!(positions[3].x, 3.5, epsilon = 1e-9);
        assert_relative_eq!(positions[3].y, 3.5, epsilon = 1e-9);
        assert!(in_bounds(&positions, area));
    }

    #[test]
    fn test_quantity_limits_output() {
        let area = AreaSpec::new(10.0, 10.0);
        let positions = calculate_positions(12.0, area, PlantingMethod::Row, Some(7)).unwrap();
        assert_eq!(positions.len(), 7);

        let none = calculate_positions(12.0, area, PlantingMethod::Row, Some(0)).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_quantity_never_exceeds_capacity() {
        // capacity 25, margin leaves room for only 4 x 4 = 16 anyway
        let area = AreaSpec::new(10.0, 10.0);
        let capacity = calculate_capacity(24.0, area, PlantingMethod::Row).unwrap();
        let positions = calculate_positions(24.0, area, PlantingMethod::Row, Some(1000)).unwrap();
        assert!(positions.len() <= capacity);
        assert_eq!(positions.len(), 16);
    }

    #[test]
    fn test_square_foot_positions() {
        // 6in spacing -> 2 x 2 per square foot; usable 2 x 1 feet -> 8 plants
        let area = AreaSpec::new(3.0, 2.0);
        let positions = calculate_positions(6.0, area, PlantingMethod::Square, None).unwrap();
        assert_eq!(positions.len(), 8);
        assert_relative_eq!(positions[0].x, 0.75, epsilon = 1e-9);
        assert_relative_eq!(positions[0].y, 0.75, epsilon = 1e-9);
        assert_relative_eq!(positions[1].x, 1.25, epsilon = 1e-9);
        assert_relative_eq!(positions[1].y, 0.75, epsilon = 1e-9);
        assert_relative_eq!(positions[4].x, 1.75, epsilon = 1e-9);
        assert!(in_bounds(&positions, area));
    }

    #[test]
    fn test_square_foot_wide_spacing_is_empty() {
        // 18in spacing does not fit inside one square foot
        let area = AreaSpec::new(6.0, 6.0);
        let positions = calculate_positions(18.0, area, PlantingMethod::Square, None).unwrap();
        assert!(positions.is_empty());
    }

    #[test]
    fn test_triangular_rows_are_staggered() {
        let area = AreaSpec::new(4.0, 4.0);
        let positions = calculate_positions(12.0, area, PlantingMethod::Triangular, None).unwrap();
        assert!(!positions.is_empty());
        assert!(in_bounds(&positions, area));

        // first row starts at margin + spacing / 2, second is shifted by half a spacing
        assert_relative_eq!(positions[0].y, 1.0, epsilon = 1e-9);
        let second_row_start = positions
            .iter()
            .find(|p| p.x > positions[0].x + 1e-9)
            .unwrap();
        assert_relative_eq!(second_row_start.y, 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_triangular_walk_can_differ_from_capacity() {
        // closed form says 16, the bounded walk inside the margin places fewer
        let area = AreaSpec::new(4.0, 4.0);
        let capacity = calculate_capacity(12.0, area, PlantingMethod::Triangular).unwrap();
        let positions = calculate_positions(12.0, area, PlantingMethod::Triangular, None).unwrap();
        assert_eq!(capacity, 16);
        assert!(positions.len() < capacity);
    }

    #[test]
    fn test_extreme_ratio_with_quantity() {
        let area = AreaSpec::new(1e7, 1e7);
        for &method in PlantingMethod::all() {
            let positions = calculate_positions(1e-9, area, method, Some(5)).unwrap();
            assert_eq!(positions.len(), 5, "{:?}", method);
            assert!(in_bounds(&positions, area));
        }
    }

    #[test]
    fn test_invalid_geometry_is_rejected() {
        assert!(calculate_positions(-1.0, AreaSpec::new(4.0, 4.0), PlantingMethod::Row, None).is_err());
        assert!(calculate_positions(12.0, AreaSpec::new(f64::NAN, 4.0), PlantingMethod::Row, None).is_err());
    }
}
