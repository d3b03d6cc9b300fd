//! Garden Planner
//!
//! Planting recommendations for a garden bed: which plants get along, which
//! crop family should come next, how many plants fit and where, and when
//! they can be sown in a given hardiness zone.
//!
//! ## Architecture
//! - `types`: Plant records, seasons, bed geometry, rotation history
//! - `compatibility`: Companion/adversary classification and ranking
//! - `rotation`: Crop-family lookup and rotation sequence
//! - `spacing`: Capacity, coordinates and planting method per bed
//! - `calendar`: Zone sowing windows and date ranges
//! - `watering`: Weather-based watering advice
//! - `config`: Reference tables (embedded defaults, JSON override)
//! - `data`: Plant catalog loading
//! - `planner`: Per-bed composition of the above, sequential and parallel
//!
//! All planning components are pure over immutable inputs. "Today" is
//! always passed in, never read from the clock.

pub mod types;
pub mod error;
pub mod utils;
pub mod compatibility;
pub mod rotation;
pub mod spacing;
pub mod calendar;
pub mod watering;
pub mod config;
pub mod data;
pub mod planner;

#[cfg(feature = "cli")]
pub mod logging;

// Re-export commonly used types
pub use types::{
    AreaSpec, PlantCompatibility, PlantPosition, PlantProfile, PlantingMethod, RotationEntry, Season,
    SunRequirement, WaterRequirement,
};
pub use error::PlannerError;
pub use compatibility::CompatibilityResolver;
pub use rotation::{FamilyCatalog, RotationPlanner, RotationSequence, UNKNOWN_FAMILY};
pub use spacing::SpacingPlanner;
pub use calendar::{CalendarAdvisor, MonthWindow, PlantingWindow, ZoneWindowTable};
pub use watering::{recommend_watering, TimeOfDay, WateringNeed, WateringRecommendation, WeatherSnapshot};
pub use config::PlannerConfig;
pub use data::PlantCatalog;
pub use planner::{BedPlan, BedPlanner, BedRequest, CandidatePlan};
