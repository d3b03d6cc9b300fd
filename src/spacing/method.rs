//! Planting method recommendation
//!
//! Keyword rules on the plant type, checked in order:
//! - leafy greens -> square foot
//! - large fruiting crops -> rows
//! - herbs and flowers -> triangular
//! - anything else -> square foot in a small bed (< 4ft on a side), rows otherwise

use crate::types::{AreaSpec, PlantProfile, PlantingMethod};
use crate::utils::contains_any_keyword;

const LEAFY_GREEN_KEYWORDS: &[&str] = &["lettuce", "greens", "spinach"];
const FRUITING_KEYWORDS: &[&str] = &["tomato", "pepper", "eggplant"];
const ORNAMENTAL_KEYWORDS: &[&str] = &["herb", "flower"];

/// Beds narrower or shorter than this default to square-foot planting
pub const SMALL_BED_THRESHOLD_FT: f64 = 4.0;

pub fn recommend_method(plant: &PlantProfile, area: AreaSpec) -> PlantingMethod {
    let plant_type = plant.plant_type.as_str();

    if contains_any_keyword(plant_type, LEAFY_GREEN_KEYWORDS) {
        PlantingMethod::Square
    } else if contains_any_keyword(plant_type, FRUITING_KEYWORDS) {
        PlantingMethod::Row
    } else if contains_any_keyword(plant_type, ORNAMENTAL_KEYWORDS) {
        PlantingMethod::Triangular
    } else if area.width < SMALL_BED_THRESHOLD_FT || area.length < SMALL_BED_THRESHOLD_FT {
        PlantingMethod::Square
    } else {
        PlantingMethod::Row
    }
}
