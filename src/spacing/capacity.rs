//! Closed-form plant counts

use crate::error::PlannerError;
use crate::types::{AreaSpec, PlantingMethod};

use super::{spacing_in_feet, whole, HEX_ROW_FACTOR};

/// Plant capacity of an area
///
/// Counts saturate at `usize::MAX` for extreme spacing/area ratios.
///
/// - Row: whole rows across the width times whole plants along the length
/// - Square: square-foot density, `floor(area / spacing^2)`
/// - Triangular: rows `spacing * 0.866` apart; odd rows hold
///   `floor(length / spacing)` plants, even rows (shifted half a spacing)
///   hold `floor((length - spacing / 2) / spacing) + 1`
pub fn calculate_capacity(spacing_inches: f64, area: AreaSpec, method: PlantingMethod) -> Result<usize, PlannerError> {
    let spacing = spacing_in_feet(spacing_inches)?;
    area.validate()?;

    let count = match method {
        PlantingMethod::Row => whole(area.width / spacing).saturating_mul(whole(area.length / spacing)),

        PlantingMethod::Square => whole(area.square_feet() / (spacing * spacing)),

        PlantingMethod::Triangular => {
            let row_spacing = spacing * HEX_ROW_FACTOR;
            let rows = whole(area.width / row_spacing);
            let plants_per_odd_row = whole(area.length / spacing);
            let plants_per_even_row = whole((area.length - spacing / 2.0) / spacing).saturating_add(1);

            let odd_rows = rows / 2 + rows % 2;
            let even_rows = rows / 2;

            odd_rows
                .saturating_mul(plants_per_odd_row)
                .saturating_add(even_rows.saturating_mul(plants_per_even_row))
        }
    };

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_capacity() {
        // 24in = 2ft, 5 x 5
        let capacity = calculate_capacity(24.0, AreaSpec::new(10.0, 10.0), PlantingMethod::Row);
        assert_eq!(capacity, Ok(25));
    }

    #[test]
    fn test_row_capacity_truncates_each_axis() {
        // 3.5ft / 1.5ft -> 2 rows, 7ft / 1.5ft -> 4 plants
        let capacity = calculate_capacity(18.0, AreaSpec::new(3.5, 7.0), PlantingMethod::Row);
        assert_eq!(capacity, Ok(8));
    }

    #[test]
    fn test_square_capacity_uses_density() {
        // 3.5 * 7 = 24.5 sq ft / 2.25 = 10.9 -> 10 (rows would give 8)
        let capacity = calculate_capacity(18.0, AreaSpec::new(3.5, 7.0), PlantingMethod::Square);
        assert_eq!(capacity, Ok(10));
    }

    #[test]
    fn test_triangular_capacity() {
        // spacing 1ft, row pitch 0.866 -> 4.618 rows -> 4 (2 odd, 2 even)
        // odd rows: floor(4 / 1) = 4, even rows: floor(3.5 / 1) + 1 = 4
        let capacity = calculate_capacity(12.0, AreaSpec::new(4.0, 4.0), PlantingMethod::Triangular);
        assert_eq!(capacity, Ok(16));

        // 5 rows: 3 odd x 4 + 2 even x 4
        let capacity = calculate_capacity(12.0, AreaSpec::new(4.5, 4.0), PlantingMethod::Triangular);
        assert_eq!(capacity, Ok(20));
    }

    #[test]
    fn test_spacing_larger_than_area() {
        let area = AreaSpec::new(1.0, 1.0);
        assert_eq!(calculate_capacity(36.0, area, PlantingMethod::Row), Ok(0));
        assert_eq!(calculate_capacity(36.0, area, PlantingMethod::Square), Ok(0));
        assert_eq!(calculate_capacity(36.0, area, PlantingMethod::Triangular), Ok(0));
    }

    #[test]
    fn test_extreme_ratio_saturates() {
        let area = AreaSpec::new(1e7, 1e7);
        for &method in PlantingMethod::all() {
            assert_eq!(calculate_capacity(1e-9, area, method), Ok(usize::MAX), "{:?}", method);
        }
    }

    #[test]
    fn test_invalid_input_fails_fast() {
        assert_eq!(
            calculate_capacity(0.0, AreaSpec::new(4.0, 4.0), PlantingMethod::Row),
            Err(PlannerError::InvalidSpacing { spacing: 0.0 })
        );
        assert_eq!(
            calculate_capacity(12.0, AreaSpec::new(4.0, 0.0), PlantingMethod::Square),
            Err(PlannerError::InvalidArea { width: 4.0, length: 0.0 })
        );
    }
}
