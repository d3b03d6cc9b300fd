//! Crop Rotation
//!
//! Maps plant names to botanical families and recommends what a bed should
//! grow next so the same family does not return to the same soil too soon.
//!
//! ## Architecture
//! - `catalog.rs` - Family catalog and cyclic rotation sequence (built-in tables)
//! - `planner.rs` - Family lookup, history ordering and suitability checks

pub mod catalog;
pub mod planner;

pub use catalog::{FamilyCatalog, PlantFamily, RotationSequence, UNKNOWN_FAMILY};
pub use planner::{RotationPlanner, RECENT_HISTORY_WINDOW};
