//! Plant Spacing
//!
//! Turns a plant's spacing requirement and a rectangular bed into a plant
//! count and concrete (x, y) positions for three packing strategies.
//!
//! Spacing is given in inches, bed dimensions in feet. All arithmetic stays
//! in real numbers until a count is truncated to an integer.
//!
//! ## Architecture
//! - `capacity.rs` - Closed-form plant counts per method
//! - `layout.rs` - Coordinate generation inside a fixed margin
//! - `method.rs` - Keyword-based method recommendation
//!
//! The triangular count from `capacity` and the number of triangular
//! positions `layout` can place are computed independently (closed form vs.
//! bounded walk) and may differ for the same input.

pub mod capacity;
pub mod layout;
pub mod method;

pub use capacity::calculate_capacity;
pub use layout::{calculate_positions, LAYOUT_MARGIN};
pub use method::recommend_method;

use crate::error::PlannerError;
use crate::types::{AreaSpec, PlantPosition, PlantProfile, PlantingMethod};

pub const INCHES_PER_FOOT: f64 = 12.0;

/// Row pitch of hexagonal packing relative to plant spacing (~sqrt(3)/2)
pub const HEX_ROW_FACTOR: f64 = 0.866;

/// Spacing in feet, after checking the inch value is usable
pub(crate) fn spacing_in_feet(spacing_inches: f64) -> Result<f64, PlannerError> {
    if !spacing_inches.is_finite() || spacing_inches <= 0.0 {
        return Err(PlannerError::InvalidSpacing { spacing: spacing_inches });
    }
    Ok(spacing_inches / INCHES_PER_FOOT)
}

/// Truncate a non-negative real count to an integer; anything else is zero
pub(crate) fn whole(value: f64) -> usize {
    if value.is_finite() && value > 0.0 {
        value as usize
    } else {
        0
    }
}

/// Stateless spacing calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacingPlanner;

impl SpacingPlanner {
    pub fn new() -> Self {
        Self
    }

    /// How many plants at `spacing_inches` fit in `area` with `method`
    pub fn capacity(&self, spacing_inches: f64, area: AreaSpec, method: PlantingMethod) -> Result<usize, PlannerError> {
        calculate_capacity(spacing_inches, area, method)
    }

    /// Positions for up to `quantity` plants, never more than `capacity`
    pub fn positions(
        &self,
        plant: &PlantProfile,
        area: AreaSpec,
        method: PlantingMethod,
        quantity: Option<usize>,
    ) -> Result<Vec<PlantPosition>, PlannerError> {
        calculate_positions(plant.spacing, area, method, quantity)
    }

    pub fn recommend_method(&self, plant: &PlantProfile, area: AreaSpec) -> PlantingMethod {
        recommend_method(plant, area)
    }

    /// Capacity with the recommended method
    pub fn optimal_quantity(&self, plant: &PlantProfile, area: AreaSpec) -> Result<usize, PlannerError> {
        calculate_capacity(plant.spacing, area, self.recommend_method(plant, area))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_conversion() {
        assert_eq!(spacing_in_feet(24.0), Ok(2.0));
        assert!(spacing_in_feet(0.0).is_err());
        assert!(spacing_in_feet(-3.0).is_err());
        assert!(spacing_in_feet(f64::INFINITY).is_err());
    }

    #[test]
    fn test_whole_truncates() {
        assert_eq!(whole(4.99), 4);
        assert_eq!(whole(0.2), 0);
        assert_eq!(whole(-0.5), 0);
        assert_eq!(whole(f64::NAN), 0);
    }

    #[test]
    fn test_optimal_quantity_uses_recommended_method() {
        let planner = SpacingPlanner::new();
        let area = AreaSpec::new(3.5, 7.0);
        let chard = PlantProfile::new("Swiss Chard", "Leafy Greens", 18.0);
        let pepper = PlantProfile::new("Bell Pepper", "Pepper", 18.0);
        // Square foot: 24.5 / 2.25 -> 10; rows: 2 x 4 -> 8
        assert_eq!(planner.optimal_quantity(&chard, area), Ok(10));
        assert_eq!(planner.optimal_quantity(&pepper, area), Ok(8));
    }
}
